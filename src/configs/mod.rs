mod site;
mod storage_path;

pub use site::*;
pub use storage_path::get_storage_path;
