pub mod file_upload_handler;

pub use file_upload_handler::*;
