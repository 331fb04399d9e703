use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A user-selected file carried as an opaque binary blob. No client-side
/// size or type validation beyond what the selection surface enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct FileBlob {
    pub name: String,
    pub bytes: Bytes,
}

impl FileBlob {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Language the analysis service should answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLanguage {
    #[default]
    Korean,
    English,
}

impl ResponseLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseLanguage::Korean => "korean",
            ResponseLanguage::English => "english",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "korean" => Some(ResponseLanguage::Korean),
            "english" => Some(ResponseLanguage::English),
            _ => None,
        }
    }
}

/// Everything a single submission needs. Ephemeral: built from user edits,
/// consumed once by the assembler, never persisted.
#[derive(Debug, Clone, Default)]
pub struct SubmissionInput {
    /// At least one resume file is required.
    pub resume_files: Vec<FileBlob>,
    pub additional_files: Vec<FileBlob>,
    /// Required, must not be blank.
    pub job_posting: String,
    pub expected_salary: String,
    pub additional_info: String,
    pub response_language: ResponseLanguage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_language_defaults_to_korean() {
        assert_eq!(ResponseLanguage::default(), ResponseLanguage::Korean);
    }

    #[test]
    fn test_response_language_parse_round_trip() {
        assert_eq!(
            ResponseLanguage::parse("english"),
            Some(ResponseLanguage::English)
        );
        assert_eq!(ResponseLanguage::parse("klingon"), None);
        assert_eq!(
            ResponseLanguage::parse(ResponseLanguage::Korean.as_str()),
            Some(ResponseLanguage::Korean)
        );
    }
}
