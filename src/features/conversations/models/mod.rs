pub mod conversation;

pub use conversation::{ChatMode, Conversation};
