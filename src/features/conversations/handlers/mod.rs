pub mod conversation_handler;

pub use conversation_handler::*;
