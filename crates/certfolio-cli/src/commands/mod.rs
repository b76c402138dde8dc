pub mod common;
pub mod completions;
pub mod document;
pub mod list;
