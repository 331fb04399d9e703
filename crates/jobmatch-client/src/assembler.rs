//! Builds the transport-ready multi-part payload from a [`SubmissionInput`].
//!
//! Field names are a wire contract: the analysis service dispatches on them.
//! Do not rename without coordinating a service release.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use crate::errors::AppError;
use crate::models::SubmissionInput;

pub const RESUME_FILES_FIELD: &str = "resume_files";
pub const ADDITIONAL_FILES_FIELD: &str = "additional_files";
pub const JOB_POSTING_FIELD: &str = "job_posting";
pub const EXPECTED_SALARY_FIELD: &str = "expected_salary";
pub const ADDITIONAL_INFO_FIELD: &str = "additional_info";
pub const RESPONSE_LANGUAGE_FIELD: &str = "response_language";

/// One part of the assembled form, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        filename: String,
        bytes: Bytes,
    },
}

/// Ordered multi-part payload. Kept as plain data so tests can assert on
/// field names and ordering before it becomes a [`reqwest::multipart::Form`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    parts: Vec<FormPart>,
}

impl FormPayload {
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        for part in self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    filename,
                    bytes,
                } => form.part(name, Part::bytes(bytes.to_vec()).file_name(filename)),
            };
        }
        form
    }
}

/// Assembles the multi-part payload, rejecting inputs that fail the
/// submission precondition before any transport is involved. Files are
/// passed through untouched: original order, no de-duplication.
pub fn assemble(input: &SubmissionInput) -> Result<FormPayload, AppError> {
    if input.resume_files.is_empty() {
        return Err(AppError::Validation(
            "at least one resume file is required".to_string(),
        ));
    }
    if input.job_posting.trim().is_empty() {
        return Err(AppError::Validation(
            "job posting text is required".to_string(),
        ));
    }

    let mut parts = Vec::new();
    for file in &input.resume_files {
        parts.push(FormPart::File {
            name: RESUME_FILES_FIELD,
            filename: file.name.clone(),
            bytes: file.bytes.clone(),
        });
    }
    for file in &input.additional_files {
        parts.push(FormPart::File {
            name: ADDITIONAL_FILES_FIELD,
            filename: file.name.clone(),
            bytes: file.bytes.clone(),
        });
    }
    parts.push(FormPart::Text {
        name: JOB_POSTING_FIELD,
        value: input.job_posting.clone(),
    });
    parts.push(FormPart::Text {
        name: EXPECTED_SALARY_FIELD,
        value: input.expected_salary.clone(),
    });
    parts.push(FormPart::Text {
        name: ADDITIONAL_INFO_FIELD,
        value: input.additional_info.clone(),
    });
    parts.push(FormPart::Text {
        name: RESPONSE_LANGUAGE_FIELD,
        value: input.response_language.as_str().to_string(),
    });

    Ok(FormPayload { parts })
}
