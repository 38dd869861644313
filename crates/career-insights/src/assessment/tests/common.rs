use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::assessment::classifier::classify_all;
use crate::assessment::domain::{
    AnswerOption, Answers, AssessmentQuestion, Domain, DomainScore, LocalizedText, QuestionScope,
};
use crate::assessment::policy::ClassificationThresholds;
use crate::assessment::scoring::RawDomainScore;
use crate::assessment::store::{ProfileId, ProfileRecord, ProfileStore, StoreError};
use crate::assessment::{
    AssessmentEngine, AssessmentService, PersistenceStatus, QuestionBank, RoleCatalog,
};

pub(super) fn standard_engine() -> AssessmentEngine {
    AssessmentEngine::standard().expect("standard catalog validates")
}

pub(super) fn bilingual(label: &str) -> LocalizedText {
    LocalizedText::new(label, format!("{label} (es)"))
}

pub(super) fn answer_option(id: &str, weights: &[(Domain, u8)]) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: bilingual(id),
        weights: weights.iter().copied().collect(),
    }
}

/// Three-option question: "strong" = 10, "partial" = 5, "weak" = 2 home points.
pub(super) fn graded_question(id: &str, domain: Domain) -> AssessmentQuestion {
    AssessmentQuestion {
        id: id.to_string(),
        domain,
        scope: QuestionScope::Universal,
        scenario: bilingual(&format!("{id} scenario")),
        question: bilingual(&format!("{id} question")),
        options: vec![
            answer_option("strong", &[(domain, 10)]),
            answer_option("partial", &[(domain, 5)]),
            answer_option("weak", &[(domain, 2)]),
        ],
    }
}

/// Fifteen graded questions, three per domain, ids like `people_2`.
pub(super) fn graded_bank() -> QuestionBank {
    let questions = Domain::ordered()
        .into_iter()
        .flat_map(|domain| {
            (1..=3).map(move |index| graded_question(&format!("{}_{index}", domain.key()), domain))
        })
        .collect();
    QuestionBank::new(questions)
}

pub(super) fn graded_engine() -> AssessmentEngine {
    AssessmentEngine::new(graded_bank(), RoleCatalog::new(Vec::new()), Default::default())
        .expect("graded bank validates")
}

/// Picks the option awarding the most points to each question's home domain.
pub(super) fn best_answers(questions: &[&AssessmentQuestion]) -> Answers {
    questions
        .iter()
        .map(|question| {
            let best = question
                .options
                .iter()
                .max_by_key(|option| option.weight(question.domain))
                .expect("question has options");
            (question.id.clone(), best.id.clone())
        })
        .collect()
}

pub(super) fn classified(entries: &[(Domain, u32, u32)]) -> BTreeMap<Domain, DomainScore> {
    let raw: BTreeMap<Domain, RawDomainScore> = Domain::ordered()
        .into_iter()
        .map(|domain| {
            let (score, max) = entries
                .iter()
                .find(|(candidate, _, _)| *candidate == domain)
                .map(|(_, score, max)| (*score, *max))
                .unwrap_or((0, 0));
            (domain, RawDomainScore { score, max })
        })
        .collect();
    classify_all(&raw, &ClassificationThresholds::default())
}

#[derive(Default)]
pub(super) struct MemoryStore {
    pub(super) records: Mutex<Vec<ProfileRecord>>,
}

impl ProfileStore for MemoryStore {
    fn save(&self, record: ProfileRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(record);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl ProfileStore for UnavailableStore {
    fn save(&self, _record: ProfileRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("profile API timed out".to_string()))
    }
}

pub(super) fn memory_service() -> (AssessmentService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentService::new(Arc::new(standard_engine()), store.clone());
    (service, store)
}

pub(super) fn unavailable_service() -> AssessmentService<UnavailableStore> {
    AssessmentService::new(Arc::new(standard_engine()), Arc::new(UnavailableStore))
}

/// Store that answers only after `delay`, then reports an outage.
pub(super) struct SlowStore {
    pub(super) delay: Duration,
}

impl ProfileStore for SlowStore {
    fn save(&self, _record: ProfileRecord) -> Result<(), StoreError> {
        std::thread::sleep(self.delay);
        Err(StoreError::Unavailable("profile API timed out".to_string()))
    }
}

pub(super) fn slow_service(delay: Duration) -> AssessmentService<SlowStore> {
    AssessmentService::new(Arc::new(standard_engine()), Arc::new(SlowStore { delay }))
}

/// Polls the service until the background save for `profile_id` settles.
pub(super) async fn settled_status<S>(
    service: &AssessmentService<S>,
    profile_id: &ProfileId,
) -> PersistenceStatus
where
    S: ProfileStore + 'static,
{
    for _ in 0..400 {
        match service.persistence_status(profile_id) {
            Some(PersistenceStatus::Pending) | None => {
                tokio::task::yield_now().await;
                std::thread::sleep(Duration::from_millis(5));
            }
            Some(status) => return status,
        }
    }
    panic!("save for {} never settled", profile_id.0);
}
