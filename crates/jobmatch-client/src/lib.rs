//! Client-side core of the JobMatch analyzer.
//!
//! Covers the full submission pipeline: assembling a multi-part request from
//! resume files and job-posting text, calling the remote analysis service,
//! normalizing its response into the canonical [`JobAnalysis`] shape (with
//! deterministic fallback synthesis when the response cannot be trusted), and
//! maintaining a durable history of [`AnalysisResult`] records across
//! sessions. Presentation is out of scope; the orchestrator reports outcomes
//! as structured values and leaves display decisions to the caller.

pub mod assembler;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod storage;
pub mod store;
pub mod transport;

pub use config::Config;
pub use errors::AppError;
pub use models::{
    AnalysisResult, Criteria, FileBlob, JobAnalysis, MatchLevel, ResponseLanguage, SubmissionInput,
};
pub use orchestrator::{SubmissionOrchestrator, SubmissionOutcome, SubmissionState};
pub use storage::{FileKvStorage, KvStorage, MemoryKvStorage};
pub use store::ResultStore;
pub use transport::{AnalysisTransport, HttpAnalysisClient, ServiceResponse};
