pub mod ai_model;
pub mod test_helpers;
pub mod types;

pub use ai_model::AiModel;
