//! Data context backends.

mod json_file;
mod memory;

pub use json_file::JsonFileContext;
pub use memory::MemoryContext;
