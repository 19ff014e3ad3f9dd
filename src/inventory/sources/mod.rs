pub mod file;
pub mod http;

pub use file::FileInventory;
pub use http::HttpInventory;
