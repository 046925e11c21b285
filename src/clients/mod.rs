pub mod judge_client;
pub mod reference_client;

pub use judge_client::{is_blocked, JudgeClient};
pub use reference_client::ReferenceClient;
