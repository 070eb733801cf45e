pub mod binary;
pub mod config;
pub mod error;
pub mod linecount;
pub mod strlen;
pub mod vm;

pub use binary::bin_to_dec;
pub use config::{OverflowMode, ToolsConfig};
pub use linecount::{count_file, count_newlines};
pub use strlen::{byte_length, string_length};
