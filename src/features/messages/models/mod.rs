pub mod message;

pub use message::{Message, MessageRole};
