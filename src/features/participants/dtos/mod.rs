pub mod participant_dto;

pub use participant_dto::{CreateParticipantDto, ParticipantResponseDto, UpdateParticipantDto};
