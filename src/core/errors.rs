//! Error handling helpers
//!
//! Geometry never fails; only file I/O (settings, logs) produces errors.

use anyhow::Context;
use std::path::Path;

pub type ShowDistResult<T> = anyhow::Result<T>;

/// Attach the operation and path to an I/O style error
pub trait FileContext<T> {
    fn with_file_context(self, operation: &str, path: &Path) -> ShowDistResult<T>;
}

impl<T, E> FileContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context(self, operation: &str, path: &Path) -> ShowDistResult<T> {
        self.with_context(|| format!("Failed to {} {}", operation, path.display()))
    }
}
