pub mod file_upload_dto;

pub use file_upload_dto::{CreateFileUploadDto, FileUploadResponseDto};
