//! Persisted result store: the durable, user-visible history of analysis
//! results plus three eagerly written scalar preferences.

use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::models::{AnalysisResult, ResponseLanguage};
use crate::storage::KvStorage;

const RESULTS_KEY: &str = "analysis_results";
const EXPECTED_SALARY_KEY: &str = "expected_salary";
const ADDITIONAL_INFO_KEY: &str = "additional_info";
const RESPONSE_LANGUAGE_KEY: &str = "response_language";

/// Owns the ordered result history (most recent first) and persists every
/// mutation through the injected [`KvStorage`]. Single consumer; writes are
/// whole-sequence read-modify-write, last writer wins.
pub struct ResultStore {
    storage: Box<dyn KvStorage>,
    results: Vec<AnalysisResult>,
    expected_salary: String,
    additional_info: String,
    response_language: ResponseLanguage,
}

impl ResultStore {
    /// Loads history and preferences from durable storage. Absent data yields
    /// an empty history and defaults; corrupted data is discarded with a log
    /// line. Hydration never fails.
    pub fn hydrate(storage: Box<dyn KvStorage>) -> Self {
        let results = match storage.get(RESULTS_KEY) {
            Ok(Some(raw)) => parse_results(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read result history, starting empty: {e}");
                Vec::new()
            }
        };
        let expected_salary = read_string(&*storage, EXPECTED_SALARY_KEY);
        let additional_info = read_string(&*storage, ADDITIONAL_INFO_KEY);
        let response_language = read_string(&*storage, RESPONSE_LANGUAGE_KEY);
        let response_language =
            ResponseLanguage::parse(&response_language).unwrap_or_default();

        Self {
            storage,
            results,
            expected_salary,
            additional_info,
            response_language,
        }
    }

    /// History, most recent first.
    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    /// Inserts at the head and persists the full sequence.
    pub fn append(&mut self, result: AnalysisResult) -> Result<(), AppError> {
        self.results.insert(0, result);
        self.persist_results()
    }

    /// Removes the record with the given id. Idempotent: an unknown id leaves
    /// both memory and storage untouched. Deleting the last record removes
    /// the durable key entirely instead of persisting an empty sequence.
    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.results.len();
        self.results.retain(|r| r.id != id);
        if self.results.len() == before {
            return Ok(());
        }
        if self.results.is_empty() {
            self.storage.remove(RESULTS_KEY)
        } else {
            self.persist_results()
        }
    }

    /// Drops every record and the durable key.
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.results.clear();
        self.storage.remove(RESULTS_KEY)
    }

    pub fn expected_salary(&self) -> &str {
        &self.expected_salary
    }

    pub fn set_expected_salary(&mut self, value: &str) -> Result<(), AppError> {
        self.expected_salary = value.to_string();
        self.storage.set(EXPECTED_SALARY_KEY, value)
    }

    pub fn additional_info(&self) -> &str {
        &self.additional_info
    }

    pub fn set_additional_info(&mut self, value: &str) -> Result<(), AppError> {
        self.additional_info = value.to_string();
        self.storage.set(ADDITIONAL_INFO_KEY, value)
    }

    pub fn response_language(&self) -> ResponseLanguage {
        self.response_language
    }

    pub fn set_response_language(&mut self, language: ResponseLanguage) -> Result<(), AppError> {
        self.response_language = language;
        self.storage.set(RESPONSE_LANGUAGE_KEY, language.as_str())
    }

    fn persist_results(&self) -> Result<(), AppError> {
        let raw = serde_json::to_string(&self.results)?;
        self.storage.set(RESULTS_KEY, &raw)
    }
}

/// Parses the stored history. A payload that is not a JSON array is treated
/// as corruption and discarded wholesale; individual entries that no longer
/// match the record shape (schema drift from older versions) are filtered
/// out silently.
fn parse_results(raw: &str) -> Vec<AnalysisResult> {
    let entries: Vec<Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("discarding corrupted result history: {e}");
            return Vec::new();
        }
    };
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<AnalysisResult>(entry).ok())
        .collect()
}

fn read_string(storage: &dyn KvStorage, key: &str) -> String {
    match storage.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => String::new(),
        Err(e) => {
            warn!("failed to read preference {key}: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer;
    use crate::storage::MemoryKvStorage;

    fn store_with(storage: &MemoryKvStorage) -> ResultStore {
        ResultStore::hydrate(Box::new(storage.clone()))
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult::new(normalizer::placeholder())
    }

    #[test]
    fn test_hydrate_empty_storage() {
        let storage = MemoryKvStorage::new();
        let store = store_with(&storage);
        assert!(store.results().is_empty());
        assert_eq!(store.expected_salary(), "");
        assert_eq!(store.response_language(), ResponseLanguage::Korean);
    }

    #[test]
    fn test_append_then_rehydrate_round_trips() {
        let storage = MemoryKvStorage::new();
        let mut store = store_with(&storage);
        let result = sample_result();
        store.append(result.clone()).unwrap();

        let reloaded = store_with(&storage);
        assert_eq!(reloaded.results().len(), 1);
        assert_eq!(reloaded.results()[0], result);
        assert_eq!(reloaded.results()[0].timestamp, result.timestamp);
    }

    #[test]
    fn test_append_inserts_at_head() {
        let storage = MemoryKvStorage::new();
        let mut store = store_with(&storage);
        let first = sample_result();
        let second = sample_result();
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();
        assert_eq!(store.results()[0].id, second.id);
        assert_eq!(store.results()[1].id, first.id);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let storage = MemoryKvStorage::new();
        let mut store = store_with(&storage);
        store.append(sample_result()).unwrap();
        store.delete("no-such-id").unwrap();
        assert_eq!(store.results().len(), 1);
    }

    #[test]
    fn test_deleting_last_record_empties_durable_storage() {
        let storage = MemoryKvStorage::new();
        let mut store = store_with(&storage);
        let result = sample_result();
        store.append(result.clone()).unwrap();
        store.delete(&result.id).unwrap();

        assert!(store.results().is_empty());
        assert_eq!(storage.get("analysis_results").unwrap(), None);
        assert!(store_with(&storage).results().is_empty());
    }

    #[test]
    fn test_delete_persists_remaining_records() {
        let storage = MemoryKvStorage::new();
        let mut store = store_with(&storage);
        let first = sample_result();
        let second = sample_result();
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();
        store.delete(&second.id).unwrap();

        let reloaded = store_with(&storage);
        assert_eq!(reloaded.results().len(), 1);
        assert_eq!(reloaded.results()[0].id, first.id);
    }

    #[test]
    fn test_corrupted_payload_loads_as_empty() {
        let storage = MemoryKvStorage::new();
        storage.set("analysis_results", "not json at all").unwrap();
        assert!(store_with(&storage).results().is_empty());
    }

    #[test]
    fn test_entries_without_analysis_are_filtered_out() {
        let storage = MemoryKvStorage::new();
        let valid = sample_result();
        let raw = serde_json::to_string(&vec![
            serde_json::to_value(&valid).unwrap(),
            serde_json::json!({"id": "legacy", "timestamp": "2024-01-01T00:00:00Z"}),
        ])
        .unwrap();
        storage.set("analysis_results", &raw).unwrap();

        let store = store_with(&storage);
        assert_eq!(store.results().len(), 1);
        assert_eq!(store.results()[0].id, valid.id);
    }

    #[test]
    fn test_clear_removes_durable_key() {
        let storage = MemoryKvStorage::new();
        let mut store = store_with(&storage);
        store.append(sample_result()).unwrap();
        store.append(sample_result()).unwrap();
        store.clear().unwrap();
        assert_eq!(storage.get("analysis_results").unwrap(), None);
    }

    #[test]
    fn test_preferences_persist_eagerly() {
        let storage = MemoryKvStorage::new();
        let mut store = store_with(&storage);
        store.set_expected_salary("80000000 KRW").unwrap();
        store.set_additional_info("open to relocation").unwrap();
        store
            .set_response_language(ResponseLanguage::English)
            .unwrap();

        let reloaded = store_with(&storage);
        assert_eq!(reloaded.expected_salary(), "80000000 KRW");
        assert_eq!(reloaded.additional_info(), "open to relocation");
        assert_eq!(reloaded.response_language(), ResponseLanguage::English);
    }
}
