//! Pure path-segment utilities.
//!
//! No I/O here; these only decompose paths so the creation logic can walk
//! a target path one segment at a time.

use std::path::{Component, Path, PathBuf};

/// Splits a path into its normal `/`-delimited segments.
///
/// Root and current-directory markers are dropped; no normalization beyond
/// what [`Path::components`] itself performs.
#[must_use]
pub fn segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Returns every prefix of `path`, shallowest first, ending with `path`
/// itself.
///
/// The filesystem root and the empty relative prefix are excluded so every
/// returned path is a candidate for creation.
#[must_use]
pub fn prefixes(path: &Path) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = path
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty() && p.parent().is_some())
        .map(Path::to_path_buf)
        .collect();
    out.reverse();
    out
}
