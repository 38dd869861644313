//! Career readiness assessment: question catalog, deterministic option
//! ordering, scoring, classification, and bilingual insight generation.

pub mod bank;
pub(crate) mod classifier;
pub mod domain;
pub mod import;
pub(crate) mod insights;
pub mod policy;
pub mod roles;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod shuffle;
pub mod store;

#[cfg(test)]
mod tests;

pub use bank::{CatalogDocument, QuestionBank};
pub use classifier::{classify, Classification};
pub use domain::{
    AnswerOption, Answers, AssessmentQuestion, AssessmentResults, AssessmentSubmission,
    CatalogError, Domain, DomainScore, EmployerWants, FailureFactor, InsightBundle, Level,
    LocalizedText, Locale, QuestionScope, RoleInsight,
};
pub use import::{
    answers_from_csv_path, answers_from_csv_reader, answers_from_json_reader, AnswerImportError,
};
pub use policy::{
    ClassificationThresholds, ScoringPolicy, UnansweredPolicy, DEFAULT_UNANSWERED_POLICY,
    DEVELOPING_THRESHOLD, MAX_FAILURE_FACTORS, STRENGTH_THRESHOLD,
};
pub use roles::{RoleCatalog, RoleProfile, RoleRequirements, RoleSummary};
pub use router::assessment_router;
pub use scoring::{score_answers, RawDomainScore};
pub use service::{AssessmentService, PendingSave, PersistenceStatus, SubmissionReceipt};
pub use shuffle::seeded_shuffle;
pub use store::{ProfileId, ProfileRecord, ProfileStore, StoreError};

use serde::Serialize;
use tracing::{debug, info};

/// Stateless engine over a validated catalog.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    bank: QuestionBank,
    roles: RoleCatalog,
    policy: ScoringPolicy,
}

impl AssessmentEngine {
    pub fn new(
        bank: QuestionBank,
        roles: RoleCatalog,
        policy: ScoringPolicy,
    ) -> Result<Self, CatalogError> {
        bank.validate()?;
        roles.validate(&bank)?;
        Ok(Self {
            bank,
            roles,
            policy,
        })
    }

    pub fn standard() -> Result<Self, CatalogError> {
        Self::with_policy(ScoringPolicy::default())
    }

    pub fn with_policy(policy: ScoringPolicy) -> Result<Self, CatalogError> {
        Self::new(QuestionBank::standard(), RoleCatalog::standard(), policy)
    }

    pub fn from_document(
        document: CatalogDocument,
        policy: ScoringPolicy,
    ) -> Result<Self, CatalogError> {
        let (bank, roles) = document.into_parts();
        Self::new(bank, roles, policy)
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn roles(&self) -> &RoleCatalog {
        &self.roles
    }

    /// Universal list for absent or unknown roles, otherwise the role-tailored list.
    pub fn questions_for_role(&self, role_id: Option<&str>) -> Vec<&AssessmentQuestion> {
        let role = self.roles.resolve(role_id);
        if role.is_none() {
            if let Some(requested) = role_id {
                debug!(role_id = requested, "unknown role, using universal questions");
            }
        }
        self.bank.questions_for_role(role)
    }

    /// Questions ready for display: text resolved and options in seeded order.
    pub fn localized_questions(&self, role_id: Option<&str>, locale: Locale) -> Vec<QuestionView> {
        let questions = self.questions_for_role(role_id);
        let total = questions.len();
        questions
            .into_iter()
            .enumerate()
            .map(|(index, question)| QuestionView {
                id: question.id.clone(),
                domain: question.domain,
                position: index + 1,
                total,
                scenario: question.scenario.resolve(locale).to_string(),
                question: question.question.resolve(locale).to_string(),
                options: seeded_shuffle(&question.options, &question.id)
                    .into_iter()
                    .map(|option| OptionView {
                        id: option.id,
                        text: option.text.resolve(locale).to_string(),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn role_summaries(&self, locale: Locale) -> Vec<RoleSummary> {
        self.roles
            .roles()
            .iter()
            .map(|role| RoleSummary {
                id: role.id.clone(),
                title: role.title.resolve(locale).to_string(),
                question_count: self.bank.questions_for_role(Some(role)).len(),
            })
            .collect()
    }

    /// Scores one completed assessment.
    pub fn assess(&self, submission: &AssessmentSubmission) -> AssessmentResults {
        let role_id = submission.role_id.as_deref();
        let locale = submission.locale;
        let questions = self.questions_for_role(role_id);

        let raw = score_answers(&submission.answers, &questions, self.policy.unanswered);
        let domain_scores = classifier::classify_all(&raw, &self.policy.thresholds);
        let overall_score = classifier::overall_score(&domain_scores);
        let top_strength = classifier::top_strength(&domain_scores);
        let top_growth_area = classifier::top_growth_area(&domain_scores);

        let insights =
            insights::generate_insights(&domain_scores, top_strength, top_growth_area, locale);
        let failure_factors = insights::failure_factors(&domain_scores, locale);
        let role = self
            .roles
            .resolve(role_id)
            .map(|profile| profile.insight(locale));

        info!(
            questions = questions.len(),
            answered = submission.answers.len(),
            overall_score,
            top_strength = top_strength.key(),
            top_growth_area = top_growth_area.key(),
            locale = locale.code(),
            "assessment scored"
        );

        AssessmentResults {
            overall_score,
            domain_scores,
            top_strength,
            top_growth_area,
            insights,
            failure_factors,
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub id: String,
    pub text: String,
}

/// One question as presented: "question `position` of `total`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub domain: Domain,
    pub position: usize,
    pub total: usize,
    pub scenario: String,
    pub question: String,
    pub options: Vec<OptionView>,
}
