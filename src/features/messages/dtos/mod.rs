pub mod message_dto;

pub use message_dto::{CreateMessageDto, MessageQueryParams, MessageResponseDto};
