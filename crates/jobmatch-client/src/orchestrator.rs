//! Sequences a submission end to end: validate and assemble, call the
//! transport, normalize the response, append the record to the store. The
//! outcome is reported as a structured value so the presentation layer
//! decides how to display it.

use serde_json::Value;
use tracing::warn;

use crate::assembler;
use crate::errors::AppError;
use crate::models::{AnalysisResult, SubmissionInput};
use crate::normalizer;
use crate::store::ResultStore;
use crate::transport::AnalysisTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// Terminal report of one submission. Both variants carry the record that
/// was appended to the store, so failures stay visible as history entries
/// rather than transient notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success(AnalysisResult),
    Failed(AnalysisResult),
}

/// One orchestrator per session. A single submission may be in flight at a
/// time; the state always returns to `Idle` before `submit` resolves, so the
/// orchestrator is reusable for the lifetime of the session.
pub struct SubmissionOrchestrator<T: AnalysisTransport> {
    transport: T,
    state: SubmissionState,
}

impl<T: AnalysisTransport> SubmissionOrchestrator<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Runs one submission. Validation failures reject before any transport
    /// call and leave the state at `Idle`. Transport and service failures do
    /// not error: they append a synthetic failure record and resolve as
    /// [`SubmissionOutcome::Failed`].
    pub async fn submit(
        &mut self,
        store: &mut ResultStore,
        input: SubmissionInput,
    ) -> Result<SubmissionOutcome, AppError> {
        if self.state == SubmissionState::Submitting {
            return Err(AppError::SubmissionInFlight);
        }
        let payload = assembler::assemble(&input)?;

        self.state = SubmissionState::Submitting;
        // The guard restores `Idle` even when the caller drops this future at
        // the transport await point (timeout or select cancellation), so the
        // orchestrator stays usable for the rest of the session.
        let _guard = StateGuard {
            state: &mut self.state,
        };
        run_submission(&self.transport, store, payload).await
    }
}

struct StateGuard<'a> {
    state: &'a mut SubmissionState,
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        *self.state = SubmissionState::Idle;
    }
}

async fn run_submission<T: AnalysisTransport>(
    transport: &T,
    store: &mut ResultStore,
    payload: assembler::FormPayload,
) -> Result<SubmissionOutcome, AppError> {
    match transport.submit(payload).await {
        Ok(response) if response.is_success() => {
            // An unparseable 2xx body behaves like an absent structure
            // and takes the normalizer's fallback path.
            let raw: Value = serde_json::from_str(&response.body).unwrap_or(Value::Null);
            let result = AnalysisResult::new(normalizer::normalize(&raw));
            store.append(result.clone())?;
            Ok(SubmissionOutcome::Success(result))
        }
        Ok(response) => {
            warn!("analysis service returned status {}", response.status);
            let diagnostic = if response.body.trim().is_empty() {
                format!("Analysis service returned status {}", response.status)
            } else {
                response.body
            };
            record_failure(store, &diagnostic)
        }
        Err(e) => {
            warn!("analysis request failed: {e}");
            record_failure(store, &format!("Analysis request failed: {e}"))
        }
    }
}

fn record_failure(
    store: &mut ResultStore,
    diagnostic: &str,
) -> Result<SubmissionOutcome, AppError> {
    let result = AnalysisResult::new(normalizer::failure_analysis(diagnostic));
    store.append(result.clone())?;
    Ok(SubmissionOutcome::Failed(result))
}
