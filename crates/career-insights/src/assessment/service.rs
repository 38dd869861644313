use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::domain::{AssessmentResults, AssessmentSubmission, Locale};
use super::roles::RoleSummary;
use super::store::{ProfileId, ProfileRecord, ProfileStore};
use super::{AssessmentEngine, QuestionView};

type OutcomeLedger = Arc<Mutex<HashMap<ProfileId, PersistenceStatus>>>;

/// Service composing the engine with the outbound profile store.
pub struct AssessmentService<S> {
    engine: Arc<AssessmentEngine>,
    store: Arc<S>,
    outcomes: OutcomeLedger,
}

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id() -> ProfileId {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("profile-{id:06}"))
}

/// Outcome of the background save that follows scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PersistenceStatus {
    Pending,
    Saved,
    Failed { notice: String },
}

/// Results plus the secondary persistence notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub profile_id: ProfileId,
    pub results: AssessmentResults,
    pub persistence: PersistenceStatus,
}

/// Handle to a save running in the background. Dropping it detaches the
/// save; the outcome stays available through
/// [`AssessmentService::persistence_status`].
#[derive(Debug)]
pub struct PendingSave {
    handle: JoinHandle<PersistenceStatus>,
    locale: Locale,
}

impl PendingSave {
    /// Waits for the save and returns its final status.
    pub async fn outcome(self) -> PersistenceStatus {
        match self.handle.await {
            Ok(status) => status,
            Err(err) => {
                warn!(error = %err, "profile save task did not complete");
                failed(self.locale)
            }
        }
    }
}

impl<S> AssessmentService<S>
where
    S: ProfileStore + 'static,
{
    pub fn new(engine: Arc<AssessmentEngine>, store: Arc<S>) -> Self {
        Self {
            engine,
            store,
            outcomes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub fn questions(&self, role_id: Option<&str>, locale: Locale) -> Vec<QuestionView> {
        self.engine.localized_questions(role_id, locale)
    }

    pub fn roles(&self, locale: Locale) -> Vec<RoleSummary> {
        self.engine.role_summaries(locale)
    }

    /// Scores the submission and hands the save to a blocking worker. The
    /// receipt is returned before the store answers, so a slow or failing
    /// store never withholds the results.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, submission: AssessmentSubmission) -> (SubmissionReceipt, PendingSave) {
        let results = self.engine.assess(&submission);
        let profile_id = next_profile_id();
        let locale = submission.locale;

        let record = ProfileRecord {
            profile_id: profile_id.clone(),
            role_id: submission.role_id.clone(),
            locale,
            submitted_at: Utc::now(),
            results: results.clone(),
        };

        record_outcome(&self.outcomes, &profile_id, PersistenceStatus::Pending);

        let store = Arc::clone(&self.store);
        let outcomes = Arc::clone(&self.outcomes);
        let saving_id = profile_id.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let status = match store.save(record) {
                Ok(()) => {
                    debug!(profile_id = %saving_id.0, "saved assessment profile");
                    PersistenceStatus::Saved
                }
                Err(err) => {
                    warn!(
                        profile_id = %saving_id.0,
                        error = %err,
                        "failed to save assessment profile"
                    );
                    failed(locale)
                }
            };
            record_outcome(&outcomes, &saving_id, status.clone());
            status
        });

        let receipt = SubmissionReceipt {
            profile_id,
            results,
            persistence: PersistenceStatus::Pending,
        };
        (receipt, PendingSave { handle, locale })
    }

    /// Latest known save status for a submitted profile.
    pub fn persistence_status(&self, profile_id: &ProfileId) -> Option<PersistenceStatus> {
        self.outcomes
            .lock()
            .ok()
            .and_then(|outcomes| outcomes.get(profile_id).cloned())
    }
}

fn record_outcome(outcomes: &OutcomeLedger, profile_id: &ProfileId, status: PersistenceStatus) {
    if let Ok(mut guard) = outcomes.lock() {
        guard.insert(profile_id.clone(), status);
    }
}

fn failed(locale: Locale) -> PersistenceStatus {
    PersistenceStatus::Failed {
        notice: persistence_notice(locale).to_string(),
    }
}

fn persistence_notice(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "Your results are shown below but could not be saved to your profile. \
             Please try again later."
        }
        Locale::Es => {
            "Tus resultados se muestran abajo, pero no se pudieron guardar en tu perfil. \
             Inténtalo más tarde."
        }
    }
}
