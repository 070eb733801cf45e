pub mod load;
mod types;

pub use load::{load_binary_from, load_vm_from};
pub use types::{BinaryConfig, OverflowMode, ToolsConfig, VmConfig};
