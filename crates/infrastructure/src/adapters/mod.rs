//! Concrete port implementations.

mod file_system;

pub use file_system::TokioFileSystem;
