pub mod conversation_dto;

pub use conversation_dto::{ConversationResponseDto, CreateConversationDto, UpdateConversationDto};
