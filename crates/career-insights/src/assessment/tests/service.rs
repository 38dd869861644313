use std::time::{Duration, Instant};

use super::common::*;
use crate::assessment::domain::{AssessmentSubmission, Domain, Level, Locale};
use crate::assessment::service::PersistenceStatus;
use crate::assessment::store::ProfileId;

fn transition_gap_submission(locale: Locale) -> AssessmentSubmission {
    let engine = standard_engine();
    let answers = engine
        .questions_for_role(None)
        .into_iter()
        .map(|question| {
            let option = if question.domain == Domain::Transition {
                "d"
            } else {
                "a"
            };
            (question.id.clone(), option.to_string())
        })
        .collect();

    AssessmentSubmission {
        answers,
        locale,
        role_id: None,
    }
}

#[tokio::test]
async fn submit_saves_profile_and_returns_results() {
    let (service, store) = memory_service();
    let submission = transition_gap_submission(Locale::En);

    let (receipt, pending) = service.submit(submission.clone());

    assert_eq!(receipt.persistence, PersistenceStatus::Pending);
    assert!(receipt.profile_id.0.starts_with("profile-"));
    assert_eq!(receipt.results, service.engine().assess(&submission));

    assert_eq!(pending.outcome().await, PersistenceStatus::Saved);
    assert_eq!(
        service.persistence_status(&receipt.profile_id),
        Some(PersistenceStatus::Saved)
    );

    let records = store.records.lock().expect("store mutex poisoned");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].profile_id, receipt.profile_id);
    assert_eq!(records[0].results, receipt.results);
    assert_eq!(records[0].locale, Locale::En);
}

#[tokio::test]
async fn four_strong_domains_and_one_gap() {
    let (service, _) = memory_service();
    let (receipt, _) = service.submit(transition_gap_submission(Locale::En));
    let results = receipt.results;

    let percentages: Vec<u8> = Domain::ordered()
        .iter()
        .map(|domain| results.domain_scores[domain].percentage)
        .collect();
    assert_eq!(percentages, [88, 100, 100, 94, 21]);
    assert_eq!(results.overall_score, 81);
    assert_eq!(results.top_strength, Domain::People);
    assert_eq!(results.top_growth_area, Domain::Transition);
    assert_eq!(
        results.domain_scores[&Domain::Transition].level,
        Level::GrowthArea
    );
    assert_eq!(results.insights.strengths.len(), 4);
    assert_eq!(results.insights.growth_areas.len(), 1);
    assert!(results.role.is_none());
}

#[tokio::test]
async fn failed_save_still_returns_results() {
    let service = unavailable_service();
    let submission = transition_gap_submission(Locale::Es);

    let (receipt, pending) = service.submit(submission.clone());

    assert_eq!(receipt.results, service.engine().assess(&submission));
    match pending.outcome().await {
        PersistenceStatus::Failed { notice } => {
            assert!(notice.contains("no se pudieron guardar"))
        }
        other => panic!("expected failed persistence, got {other:?}"),
    }
    assert!(matches!(
        service.persistence_status(&receipt.profile_id),
        Some(PersistenceStatus::Failed { .. })
    ));
}

#[tokio::test]
async fn slow_store_does_not_delay_results() {
    let service = slow_service(Duration::from_millis(800));
    let submission = transition_gap_submission(Locale::En);

    let started = Instant::now();
    let (receipt, pending) = service.submit(submission.clone());
    let elapsed = started.elapsed();

    assert!(
        elapsed < Duration::from_millis(400),
        "results waited {elapsed:?} on the store"
    );
    assert_eq!(receipt.persistence, PersistenceStatus::Pending);
    assert_eq!(receipt.results, service.engine().assess(&submission));
    assert_eq!(
        service.persistence_status(&receipt.profile_id),
        Some(PersistenceStatus::Pending)
    );

    match pending.outcome().await {
        PersistenceStatus::Failed { notice } => assert!(notice.contains("could not be saved")),
        other => panic!("expected failed persistence, got {other:?}"),
    }
    assert!(matches!(
        service.persistence_status(&receipt.profile_id),
        Some(PersistenceStatus::Failed { .. })
    ));
}

#[tokio::test]
async fn detached_save_settles_in_the_background() {
    let (service, store) = memory_service();

    let (receipt, pending) = service.submit(AssessmentSubmission::default());
    drop(pending);

    assert_eq!(
        settled_status(&service, &receipt.profile_id).await,
        PersistenceStatus::Saved
    );
    assert_eq!(store.records.lock().expect("store mutex poisoned").len(), 1);
}

#[tokio::test]
async fn profile_ids_are_unique_per_submission() {
    let (service, store) = memory_service();
    let (first, first_save) = service.submit(AssessmentSubmission::default());
    let (second, second_save) = service.submit(AssessmentSubmission::default());
    first_save.outcome().await;
    second_save.outcome().await;

    assert_ne!(first.profile_id, second.profile_id);
    assert_eq!(store.records.lock().expect("store mutex poisoned").len(), 2);
}

#[test]
fn unknown_profile_has_no_persistence_status() {
    let (service, _) = memory_service();
    assert_eq!(
        service.persistence_status(&ProfileId("profile-unknown".to_string())),
        None
    );
}

#[test]
fn role_summaries_count_tailored_questions() {
    let (service, _) = memory_service();
    let roles = service.roles(Locale::Es);

    assert_eq!(roles.len(), 6);
    assert!(roles.iter().all(|role| role.question_count == 17));
    let nurse = roles
        .iter()
        .find(|role| role.id == "registered_nurse")
        .expect("nurse role listed");
    assert_ne!(nurse.title, "registered_nurse");
}

#[test]
fn weak_domain_surfaces_as_top_growth_area() {
    let engine = graded_engine();
    let answers = engine
        .questions_for_role(None)
        .into_iter()
        .map(|question| {
            let option = if question.domain == Domain::Growth {
                "weak"
            } else {
                "strong"
            };
            (question.id.clone(), option.to_string())
        })
        .collect();

    let results = engine.assess(&AssessmentSubmission {
        answers,
        ..AssessmentSubmission::default()
    });

    assert_eq!(results.domain_scores[&Domain::Growth].percentage, 20);
    assert_eq!(results.domain_scores[&Domain::Growth].level, Level::GrowthArea);
    assert_eq!(results.top_growth_area, Domain::Growth);
    assert_eq!(results.overall_score, 84);
    let factors = results.failure_factors.expect("growth is weak");
    assert_eq!(factors.len(), 1);
    assert_eq!(factors[0].domain, Domain::Growth);
}

#[test]
fn submission_locale_tolerates_unexpected_values() {
    let numeric: AssessmentSubmission =
        serde_json::from_str(r#"{"answers":{},"locale":7}"#).expect("numeric locale accepted");
    assert_eq!(numeric.locale, Locale::En);

    let null: AssessmentSubmission =
        serde_json::from_str(r#"{"locale":null}"#).expect("null locale accepted");
    assert_eq!(null.locale, Locale::En);

    let spanish: AssessmentSubmission =
        serde_json::from_str(r#"{"locale":"ES_us"}"#).expect("string locale accepted");
    assert_eq!(spanish.locale, Locale::Es);
}
