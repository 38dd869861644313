use crate::assessment::domain::{CatalogError, Domain, QuestionScope};
use crate::assessment::roles::{RoleCatalog, RoleProfile, RoleRequirements};
use crate::assessment::{AssessmentEngine, CatalogDocument, QuestionBank, ScoringPolicy};

use super::common::{answer_option, bilingual, graded_bank, graded_question};

fn role(id: &str, questions: &[&str]) -> RoleProfile {
    RoleProfile {
        id: id.to_string(),
        title: bilingual(id),
        questions: questions.iter().map(|id| id.to_string()).collect(),
        employer_wants: RoleRequirements::default(),
        benchmark_key: format!("soc-{id}"),
    }
}

#[test]
fn standard_catalog_has_three_universal_questions_per_domain() {
    let bank = QuestionBank::standard();
    bank.validate().expect("standard bank validates");

    let universal = bank.universal();
    assert_eq!(universal.len(), 15);
    for domain in Domain::ordered() {
        let count = universal
            .iter()
            .filter(|question| question.domain == domain)
            .count();
        assert_eq!(count, 3, "{domain:?} should have three universal questions");
    }
    assert!(bank
        .questions()
        .iter()
        .all(|question| question.options.len() == 4));
}

#[test]
fn every_standard_role_appends_its_own_questions() {
    let bank = QuestionBank::standard();
    let roles = RoleCatalog::standard();
    roles.validate(&bank).expect("standard roles validate");

    assert_eq!(roles.roles().len(), 6);
    for profile in roles.roles() {
        let questions = bank.questions_for_role(Some(profile));
        assert_eq!(questions.len(), 17, "{} question count", profile.id);
        assert!(questions[..15]
            .iter()
            .all(|question| question.scope == QuestionScope::Universal));
        assert!(questions[15..]
            .iter()
            .all(|question| question.scope == QuestionScope::Role));
    }
}

#[test]
fn role_lookup_trims_and_ignores_case() {
    let roles = RoleCatalog::standard();
    let found = roles
        .resolve(Some("  Medical_Assistant "))
        .expect("role resolves");
    assert_eq!(found.id, "medical_assistant");
    assert_eq!(found.benchmark_key, "soc-31-9092");

    assert!(roles.resolve(None).is_none());
    assert!(roles.resolve(Some("")).is_none());
    assert!(roles.resolve(Some("astronaut")).is_none());
}

#[test]
fn rejects_duplicate_question_ids() {
    let mut questions = graded_bank().questions().to_vec();
    questions.push(graded_question("mission_1", Domain::Mission));

    assert!(matches!(
        QuestionBank::new(questions).validate(),
        Err(CatalogError::DuplicateQuestion(id)) if id == "mission_1"
    ));
}

#[test]
fn rejects_question_with_single_option() {
    let mut question = graded_question("lonely", Domain::People);
    question.options.truncate(1);
    let mut questions = graded_bank().questions().to_vec();
    questions.push(question);

    assert!(matches!(
        QuestionBank::new(questions).validate(),
        Err(CatalogError::TooFewOptions { found: 1, .. })
    ));
}

#[test]
fn rejects_repeated_or_weightless_options() {
    let mut repeated = graded_question("repeat", Domain::Growth);
    repeated
        .options
        .push(answer_option("strong", &[(Domain::Growth, 1)]));
    let mut questions = graded_bank().questions().to_vec();
    questions.push(repeated);
    assert!(matches!(
        QuestionBank::new(questions).validate(),
        Err(CatalogError::DuplicateOption { option_id, .. }) if option_id == "strong"
    ));

    let mut weightless = graded_question("zero", Domain::Growth);
    weightless
        .options
        .push(answer_option("nothing", &[(Domain::Growth, 0)]));
    let mut questions = graded_bank().questions().to_vec();
    questions.push(weightless);
    assert!(matches!(
        QuestionBank::new(questions).validate(),
        Err(CatalogError::WeightlessOption { option_id, .. }) if option_id == "nothing"
    ));
}

#[test]
fn rejects_bank_without_universal_questions() {
    let mut question = graded_question("role_only", Domain::Execution);
    question.scope = QuestionScope::Role;

    assert!(matches!(
        QuestionBank::new(vec![question]).validate(),
        Err(CatalogError::NoUniversalQuestions)
    ));
}

#[test]
fn roles_must_reference_role_scoped_questions() {
    let mut questions = graded_bank().questions().to_vec();
    let mut tailored = graded_question("tailored", Domain::People);
    tailored.scope = QuestionScope::Role;
    questions.push(tailored);
    let bank = QuestionBank::new(questions);

    RoleCatalog::new(vec![role("navigator", &["tailored"])])
        .validate(&bank)
        .expect("role-scoped reference is valid");

    assert!(matches!(
        RoleCatalog::new(vec![role("navigator", &["missing"])]).validate(&bank),
        Err(CatalogError::UnknownRoleQuestion { question_id, .. }) if question_id == "missing"
    ));
    assert!(matches!(
        RoleCatalog::new(vec![role("navigator", &["people_1"])]).validate(&bank),
        Err(CatalogError::UniversalQuestionInRole { question_id, .. }) if question_id == "people_1"
    ));
    assert!(matches!(
        RoleCatalog::new(vec![role("navigator", &[]), role("Navigator", &[])]).validate(&bank),
        Err(CatalogError::DuplicateRole(id)) if id == "Navigator"
    ));
}

#[test]
fn catalog_document_round_trips_through_json() {
    let document = CatalogDocument {
        questions: QuestionBank::standard().questions().to_vec(),
        roles: RoleCatalog::standard().roles().to_vec(),
    };
    let json = serde_json::to_vec(&document).expect("catalog serializes");

    let parsed = CatalogDocument::from_reader(json.as_slice()).expect("catalog parses");
    assert_eq!(parsed, document);
    AssessmentEngine::from_document(parsed, ScoringPolicy::default()).expect("engine builds");
}

#[test]
fn catalog_document_rejects_unknown_domain() {
    let json = r#"{
        "questions": [{
            "id": "q1",
            "domain": "leadership",
            "scope": "universal",
            "scenario": {"en": "s", "es": "s"},
            "question": {"en": "q", "es": "q"},
            "options": [
                {"id": "a", "text": {"en": "a", "es": "a"}, "weights": {"leadership": 10}},
                {"id": "b", "text": {"en": "b", "es": "b"}, "weights": {"leadership": 5}}
            ]
        }]
    }"#;

    assert!(matches!(
        CatalogDocument::from_reader(json.as_bytes()),
        Err(CatalogError::Parse(_))
    ));
}
