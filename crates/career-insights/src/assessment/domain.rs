use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Behavioral dimensions measured by the assessment.
///
/// Declaration order doubles as the tie-break priority for top strength and
/// top growth area selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Mission,
    People,
    Execution,
    Growth,
    Transition,
}

impl Domain {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Mission,
            Self::People,
            Self::Execution,
            Self::Growth,
            Self::Transition,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::People => "people",
            Self::Execution => "execution",
            Self::Growth => "growth",
            Self::Transition => "transition",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Mission, Locale::En) => "Mission Alignment",
            (Self::Mission, Locale::Es) => "Alineación con la Misión",
            (Self::People, Locale::En) => "People Skills",
            (Self::People, Locale::Es) => "Habilidades Interpersonales",
            (Self::Execution, Locale::En) => "Execution",
            (Self::Execution, Locale::Es) => "Ejecución",
            (Self::Growth, Locale::En) => "Growth Mindset",
            (Self::Growth, Locale::Es) => "Mentalidad de Crecimiento",
            (Self::Transition, Locale::En) => "Transition Readiness",
            (Self::Transition, Locale::Es) => "Preparación para la Transición",
        }
    }
}

/// Display language for user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Anything other than Spanish falls back to English.
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized == "es" || normalized.starts_with("es-") || normalized.starts_with("es_") {
            Self::Es
        } else {
            Self::En
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawLocale::deserialize(deserializer)? {
            RawLocale::Text(value) => Ok(Locale::parse(&value)),
            RawLocale::Other(_) => Ok(Locale::default()),
        }
    }
}

/// Non-string locale values (numbers, null, objects) fall back to English.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLocale {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// A user-facing string carried in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub es: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: es.into(),
        }
    }

    pub fn resolve(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionScope {
    Universal,
    Role,
}

/// One selectable answer and the points it contributes per domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: LocalizedText,
    pub weights: BTreeMap<Domain, u8>,
}

impl AnswerOption {
    pub fn weight(&self, domain: Domain) -> u32 {
        self.weights.get(&domain).copied().map(u32::from).unwrap_or(0)
    }
}

/// Scenario-based question presented once per assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: String,
    pub domain: Domain,
    pub scope: QuestionScope,
    pub scenario: LocalizedText,
    pub question: LocalizedText,
    pub options: Vec<AnswerOption>,
}

impl AssessmentQuestion {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Highest attainable contribution to `domain` across all options.
    pub fn max_weight(&self, domain: Domain) -> u32 {
        self.options
            .iter()
            .map(|option| option.weight(domain))
            .max()
            .unwrap_or(0)
    }
}

/// Selected option id keyed by question id.
pub type Answers = BTreeMap<String, String>;

/// Everything the caller gathers before the single scoring pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub answers: Answers,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
}

/// Qualitative band for a domain percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Strength,
    Developing,
    GrowthArea,
}

impl Level {
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Strength, Locale::En) => "Strength",
            (Self::Strength, Locale::Es) => "Fortaleza",
            (Self::Developing, Locale::En) => "Developing",
            (Self::Developing, Locale::Es) => "En desarrollo",
            (Self::GrowthArea, Locale::En) => "Growth Area",
            (Self::GrowthArea, Locale::Es) => "Área de crecimiento",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    pub score: u32,
    pub max: u32,
    pub percentage: u8,
    pub level: Level,
}

impl DomainScore {
    pub fn is_scored(&self) -> bool {
        self.max > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Coaching note tied to one of the lowest-scoring domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureFactor {
    pub domain: Domain,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerWants {
    pub qualifications: Vec<String>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

/// Role-specific content attached when the submission named a known role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInsight {
    pub role_id: String,
    pub title: String,
    pub employer_wants: EmployerWants,
    pub benchmark_key: String,
}

/// The engine's only output, handed to rendering and persistence as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub overall_score: u8,
    pub domain_scores: BTreeMap<Domain, DomainScore>,
    pub top_strength: Domain,
    pub top_growth_area: Domain,
    pub insights: InsightBundle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_factors: Option<Vec<FailureFactor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleInsight>,
}

/// Load-time defect in the question or role catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("question catalog could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read question catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("question catalog has no universal questions")]
    NoUniversalQuestions,
    #[error("question id must not be empty")]
    EmptyQuestionId,
    #[error("duplicate question id {0}")]
    DuplicateQuestion(String),
    #[error("question {question_id} needs at least 2 options, found {found}")]
    TooFewOptions { question_id: String, found: usize },
    #[error("question {question_id} repeats option id {option_id}")]
    DuplicateOption {
        question_id: String,
        option_id: String,
    },
    #[error("option {option_id} on question {question_id} awards no points to any domain")]
    WeightlessOption {
        question_id: String,
        option_id: String,
    },
    #[error("duplicate role id {0}")]
    DuplicateRole(String),
    #[error("role {role_id} references unknown question {question_id}")]
    UnknownRoleQuestion { role_id: String, question_id: String },
    #[error("role {role_id} references universal question {question_id}")]
    UniversalQuestionInRole { role_id: String, question_id: String },
}
