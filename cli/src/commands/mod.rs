pub mod binconvert;
pub mod cli;
pub mod linecount;
pub mod strlen;
pub mod vm;
