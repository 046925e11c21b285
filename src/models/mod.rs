pub mod exclusions;
pub mod problem;
pub mod submission;

pub use exclusions::is_statically_excluded;
pub use problem::{slug_from_url, Extraction, ProblemId, ProgressRecord};
pub use submission::{ResponseBody, SubmissionOutcome};
