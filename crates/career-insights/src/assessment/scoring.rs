use std::collections::BTreeMap;

use tracing::debug;

use super::domain::{Answers, AssessmentQuestion, Domain};
use super::policy::UnansweredPolicy;

/// Points earned and attainable for one domain before classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawDomainScore {
    pub score: u32,
    pub max: u32,
}

/// Aggregates answers into per-domain totals. Every domain is present in the
/// output; answers for questions outside `questions` are ignored.
pub fn score_answers(
    answers: &Answers,
    questions: &[&AssessmentQuestion],
    policy: UnansweredPolicy,
) -> BTreeMap<Domain, RawDomainScore> {
    let mut totals: BTreeMap<Domain, RawDomainScore> = Domain::ordered()
        .into_iter()
        .map(|domain| (domain, RawDomainScore::default()))
        .collect();

    for question in questions {
        let selected = answers
            .get(&question.id)
            .and_then(|option_id| {
                let option = question.option(option_id);
                if option.is_none() {
                    debug!(
                        question_id = %question.id,
                        %option_id,
                        "answer references unknown option, treating as skipped"
                    );
                }
                option
            });

        if selected.is_none() && policy == UnansweredPolicy::Exclude {
            continue;
        }

        for domain in Domain::ordered() {
            let entry = totals.entry(domain).or_default();
            entry.max += question.max_weight(domain);
            if let Some(option) = selected {
                entry.score += option.weight(domain);
            }
        }
    }

    totals
}
