//! Output management.

mod registry;

pub use registry::{FileCategory, FileEntry, FileRegistry, PreviewEntry, WriteStats};
