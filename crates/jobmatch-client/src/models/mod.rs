mod analysis;
mod submission;

pub use analysis::{AnalysisResult, Criteria, JobAnalysis, MatchLevel};
pub use submission::{FileBlob, ResponseLanguage, SubmissionInput};
