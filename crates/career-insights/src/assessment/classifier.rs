use std::collections::BTreeMap;

use super::domain::{Domain, DomainScore, Level};
use super::policy::ClassificationThresholds;
use super::scoring::RawDomainScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub percentage: u8,
    pub level: Level,
}

/// Rounded percentage (half up) clamped to `[0, 100]`; zero when nothing was attainable.
pub fn percentage(score: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let score = u64::from(score.min(max));
    let max = u64::from(max);
    let rounded = (score * 200 + max) / (max * 2);
    rounded.min(100) as u8
}

pub fn level_for(percentage: u8, thresholds: &ClassificationThresholds) -> Level {
    if percentage >= thresholds.strength {
        Level::Strength
    } else if percentage >= thresholds.developing {
        Level::Developing
    } else {
        Level::GrowthArea
    }
}

pub fn classify(score: u32, max: u32, thresholds: &ClassificationThresholds) -> Classification {
    let percentage = percentage(score, max);
    Classification {
        percentage,
        level: level_for(percentage, thresholds),
    }
}

pub fn classify_all(
    raw: &BTreeMap<Domain, RawDomainScore>,
    thresholds: &ClassificationThresholds,
) -> BTreeMap<Domain, DomainScore> {
    raw.iter()
        .map(|(domain, totals)| {
            let Classification { percentage, level } =
                classify(totals.score, totals.max, thresholds);
            (
                *domain,
                DomainScore {
                    score: totals.score,
                    max: totals.max,
                    percentage,
                    level,
                },
            )
        })
        .collect()
}

/// Mean percentage over scored domains, rounded and clamped.
pub fn overall_score(domain_scores: &BTreeMap<Domain, DomainScore>) -> u8 {
    let scored: Vec<u32> = domain_scores
        .values()
        .filter(|score| score.is_scored())
        .map(|score| u32::from(score.percentage))
        .collect();

    if scored.is_empty() {
        return 0;
    }

    let count = scored.len() as u32;
    let sum: u32 = scored.iter().sum();
    ((sum * 2 + count) / (count * 2)).min(100) as u8
}

/// Scored domains in priority order, or every domain when none was scored.
fn ranking_candidates(domain_scores: &BTreeMap<Domain, DomainScore>) -> Vec<(Domain, u8)> {
    let percentage_of = |domain: Domain| {
        domain_scores
            .get(&domain)
            .map(|score| score.percentage)
            .unwrap_or(0)
    };

    let scored: Vec<(Domain, u8)> = Domain::ordered()
        .into_iter()
        .filter(|domain| {
            domain_scores
                .get(domain)
                .map(DomainScore::is_scored)
                .unwrap_or(false)
        })
        .map(|domain| (domain, percentage_of(domain)))
        .collect();

    if scored.is_empty() {
        Domain::ordered()
            .into_iter()
            .map(|domain| (domain, percentage_of(domain)))
            .collect()
    } else {
        scored
    }
}

/// Highest percentage; the earlier domain in priority order wins ties.
pub fn top_strength(domain_scores: &BTreeMap<Domain, DomainScore>) -> Domain {
    let mut best: Option<(Domain, u8)> = None;
    for (domain, percentage) in ranking_candidates(domain_scores) {
        match best {
            Some((_, current)) if percentage <= current => {}
            _ => best = Some((domain, percentage)),
        }
    }
    best.map(|(domain, _)| domain).unwrap_or(Domain::Mission)
}

/// Lowest percentage; the earlier domain in priority order wins ties.
pub fn top_growth_area(domain_scores: &BTreeMap<Domain, DomainScore>) -> Domain {
    let mut worst: Option<(Domain, u8)> = None;
    for (domain, percentage) in ranking_candidates(domain_scores) {
        match worst {
            Some((_, current)) if percentage >= current => {}
            _ => worst = Some((domain, percentage)),
        }
    }
    worst.map(|(domain, _)| domain).unwrap_or(Domain::Mission)
}
