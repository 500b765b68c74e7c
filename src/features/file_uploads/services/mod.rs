pub mod file_upload_service;

pub use file_upload_service::FileUploadService;
