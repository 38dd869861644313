use career_insights::assessment::{Locale, ProfileId, ProfileRecord, ProfileStore, StoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in for the external profile API.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    records: Arc<Mutex<HashMap<ProfileId, ProfileRecord>>>,
}

impl ProfileStore for InMemoryProfileStore {
    fn save(&self, record: ProfileRecord) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("profile store mutex poisoned".to_string()))?;
        if guard.contains_key(&record.profile_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.profile_id.clone(), record);
        Ok(())
    }
}

impl InMemoryProfileStore {
    pub(crate) fn records(&self) -> Vec<ProfileRecord> {
        let mut records: Vec<ProfileRecord> = self
            .records
            .lock()
            .map(|guard| guard.values().cloned().collect())
            .unwrap_or_default();
        records.sort_by(|left, right| left.profile_id.0.cmp(&right.profile_id.0));
        records
    }
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Ok(Locale::parse(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_insights::assessment::{AssessmentEngine, AssessmentSubmission};
    use chrono::Utc;

    fn record(id: &str) -> ProfileRecord {
        let engine = AssessmentEngine::standard().expect("standard catalog");
        ProfileRecord {
            profile_id: ProfileId(id.to_string()),
            role_id: None,
            locale: Locale::En,
            submitted_at: Utc::now(),
            results: engine.assess(&AssessmentSubmission::default()),
        }
    }

    #[test]
    fn store_rejects_duplicate_profile_ids() {
        let store = InMemoryProfileStore::default();
        store.save(record("profile-000002")).expect("first save");
        store.save(record("profile-000001")).expect("second save");

        assert!(matches!(
            store.save(record("profile-000001")),
            Err(StoreError::Conflict)
        ));
        let ids: Vec<String> = store
            .records()
            .into_iter()
            .map(|record| record.profile_id.0)
            .collect();
        assert_eq!(ids, ["profile-000001", "profile-000002"]);
    }

    #[test]
    fn locale_flag_falls_back_to_english() {
        assert_eq!(parse_locale("ES"), Ok(Locale::Es));
        assert_eq!(parse_locale("de"), Ok(Locale::En));
    }
}
