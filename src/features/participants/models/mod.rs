pub mod participant;

pub use participant::{Participant, ParticipantRole};
