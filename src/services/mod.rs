pub mod candidate_selector;
pub mod progress_store;
pub mod skip_writer;
pub mod solution_extractor;

pub use candidate_selector::CandidateSelector;
pub use progress_store::ProgressStore;
pub use skip_writer::SkipWriter;
pub use solution_extractor::SolutionExtractor;
