use crate::assessment::classifier::{
    classify, level_for, overall_score, percentage, top_growth_area, top_strength,
};
use crate::assessment::domain::{Domain, Level};
use crate::assessment::policy::ClassificationThresholds;

use super::common::classified;

#[test]
fn percentage_rounds_half_up_and_clamps() {
    assert_eq!(percentage(0, 0), 0);
    assert_eq!(percentage(5, 0), 0);
    assert_eq!(percentage(1, 2), 50);
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(15, 38), 39);
    assert_eq!(percentage(7, 33), 21);
    assert_eq!(percentage(45, 40), 100);
}

#[test]
fn thresholds_are_inclusive_lower_bounds() {
    let thresholds = ClassificationThresholds::default();
    assert_eq!(level_for(100, &thresholds), Level::Strength);
    assert_eq!(level_for(75, &thresholds), Level::Strength);
    assert_eq!(level_for(74, &thresholds), Level::Developing);
    assert_eq!(level_for(50, &thresholds), Level::Developing);
    assert_eq!(level_for(49, &thresholds), Level::GrowthArea);
    assert_eq!(level_for(0, &thresholds), Level::GrowthArea);
}

#[test]
fn custom_thresholds_shift_the_bands() {
    let thresholds = ClassificationThresholds {
        strength: 80,
        developing: 60,
    };
    let classification = classify(30, 40, &thresholds);
    assert_eq!(classification.percentage, 75);
    assert_eq!(classification.level, Level::Developing);
}

#[test]
fn overall_score_averages_only_scored_domains() {
    let scores = classified(&[
        (Domain::Mission, 42, 42),
        (Domain::People, 19, 38),
        (Domain::Execution, 0, 0),
    ]);
    assert_eq!(overall_score(&scores), 75);

    let nothing = classified(&[]);
    assert_eq!(overall_score(&nothing), 0);
}

#[test]
fn overall_score_rounds_the_mean() {
    let scores = classified(&[
        (Domain::Mission, 37, 42),
        (Domain::People, 38, 38),
        (Domain::Execution, 40, 40),
        (Domain::Growth, 33, 35),
        (Domain::Transition, 7, 33),
    ]);
    // 88 + 100 + 100 + 94 + 21 = 403 over 5 domains
    assert_eq!(overall_score(&scores), 81);
}

#[test]
fn ties_resolve_in_priority_order() {
    let scores = classified(&[
        (Domain::Mission, 5, 10),
        (Domain::People, 9, 10),
        (Domain::Execution, 9, 10),
        (Domain::Growth, 3, 10),
        (Domain::Transition, 3, 10),
    ]);
    assert_eq!(top_strength(&scores), Domain::People);
    assert_eq!(top_growth_area(&scores), Domain::Growth);

    let flat = classified(&[
        (Domain::Mission, 10, 10),
        (Domain::People, 10, 10),
        (Domain::Execution, 10, 10),
        (Domain::Growth, 10, 10),
        (Domain::Transition, 10, 10),
    ]);
    assert_eq!(top_strength(&flat), Domain::Mission);
    assert_eq!(top_growth_area(&flat), Domain::Mission);
}

#[test]
fn unscored_domains_never_win_rankings() {
    let scores = classified(&[(Domain::Growth, 6, 10), (Domain::Transition, 8, 10)]);
    assert_eq!(top_strength(&scores), Domain::Transition);
    assert_eq!(top_growth_area(&scores), Domain::Growth);

    let nothing = classified(&[]);
    assert_eq!(top_strength(&nothing), Domain::Mission);
    assert_eq!(top_growth_area(&nothing), Domain::Mission);
}
