use crate::infra::{parse_locale, InMemoryProfileStore};
use career_insights::assessment::{
    answers_from_csv_path, answers_from_json_reader, Answers, AssessmentEngine,
    AssessmentResults, AssessmentService, AssessmentSubmission, Domain, Locale,
    PersistenceStatus,
};
use career_insights::config::AppConfig;
use career_insights::engine_from_config;
use career_insights::error::AppError;
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Role id for the tailored question list (unknown roles get the universal list)
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Display language: en or es
    #[arg(long, default_value = "en", value_parser = parse_locale)]
    pub(crate) locale: Locale,
    /// Print the question views as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer sheet: a JSON object of question id to option id, or a .csv
    /// file with question_id,option_id columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Role id the answers were collected for
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Display language: en or es
    #[arg(long, default_value = "en", value_parser = parse_locale)]
    pub(crate) locale: Locale,
    /// Print the results as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Render the sample results in Spanish
    #[arg(long)]
    pub(crate) spanish: bool,
}

fn load_engine() -> Result<AssessmentEngine, AppError> {
    let config = AppConfig::load()?;
    engine_from_config(&config.assessment)
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let QuestionsArgs { role, locale, json } = args;
    let engine = load_engine()?;
    let questions = engine.localized_questions(role.as_deref(), locale);

    if json {
        let payload = serde_json::to_string_pretty(&questions).map_err(std::io::Error::from)?;
        println!("{payload}");
        return Ok(());
    }

    for question in &questions {
        println!(
            "\n[{}/{}] {} ({})",
            question.position,
            question.total,
            question.id,
            question.domain.label(locale)
        );
        println!("  {}", question.scenario);
        println!("  {}", question.question);
        for option in &question.options {
            println!("    {}) {}", option.id, option.text);
        }
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        role,
        locale,
        json,
    } = args;
    let engine = load_engine()?;
    let submission = AssessmentSubmission {
        answers: answers_from_path(&answers)?,
        locale,
        role_id: role,
    };
    let results = engine.assess(&submission);

    if json {
        let payload = serde_json::to_string_pretty(&results).map_err(std::io::Error::from)?;
        println!("{payload}");
    } else {
        render_results(&results, locale);
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let locale = if args.spanish { Locale::Es } else { Locale::En };
    let engine = Arc::new(load_engine()?);
    let store = Arc::new(InMemoryProfileStore::default());
    let service = AssessmentService::new(engine.clone(), store.clone());

    println!("Career insights demo");
    println!("Roles available:");
    for role in service.roles(locale) {
        println!(
            "  - {} ({}): {} questions",
            role.title, role.id, role.question_count
        );
    }

    for profile in sample_profiles() {
        println!("\n=== {} ===", profile.label);
        let submission = AssessmentSubmission {
            answers: sample_answers(&engine, profile.role, profile.pick),
            locale,
            role_id: profile.role.map(str::to_string),
        };
        let (receipt, pending) = service.submit(submission);
        render_results(&receipt.results, locale);
        match pending.outcome().await {
            PersistenceStatus::Saved => println!("Saved as {}", receipt.profile_id.0),
            PersistenceStatus::Failed { notice } => println!("{notice}"),
            PersistenceStatus::Pending => {
                println!("Save still pending for {}", receipt.profile_id.0)
            }
        }
    }

    println!("\nProfiles stored:");
    for record in store.records() {
        println!(
            "  - {} | role={} | overall {} | {}",
            record.profile_id.0,
            record.role_id.as_deref().unwrap_or("none"),
            record.results.overall_score,
            record.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}

fn answers_from_path(path: &Path) -> Result<Answers, AppError> {
    let is_csv = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        Ok(answers_from_csv_path(path)?)
    } else {
        let file = std::fs::File::open(path)?;
        Ok(answers_from_json_reader(file)?)
    }
}

struct SampleProfile {
    label: &'static str,
    role: Option<&'static str>,
    pick: fn(Domain) -> &'static str,
}

fn sample_profiles() -> Vec<SampleProfile> {
    vec![
        SampleProfile {
            label: "Community health worker, strong on mission and people",
            role: Some("community_health_worker"),
            pick: |domain| match domain {
                Domain::Mission | Domain::People => "a",
                Domain::Execution => "b",
                Domain::Growth | Domain::Transition => "c",
            },
        },
        SampleProfile {
            label: "Hospital nurse moving into a health center",
            role: Some("registered_nurse"),
            pick: |domain| match domain {
                Domain::Transition => "d",
                _ => "a",
            },
        },
        SampleProfile {
            label: "No role selected, mixed answers",
            role: None,
            pick: |domain| match domain {
                Domain::Mission => "b",
                Domain::People => "a",
                Domain::Execution => "c",
                Domain::Growth => "b",
                Domain::Transition => "a",
            },
        },
    ]
}

fn sample_answers(
    engine: &AssessmentEngine,
    role: Option<&str>,
    pick: fn(Domain) -> &'static str,
) -> Answers {
    engine
        .questions_for_role(role)
        .into_iter()
        .filter_map(|question| {
            let option = pick(question.domain);
            question
                .option(option)
                .map(|option| (question.id.clone(), option.id.clone()))
        })
        .collect()
}

fn render_results(results: &AssessmentResults, locale: Locale) {
    println!("Overall readiness: {}%", results.overall_score);
    for (domain, score) in &results.domain_scores {
        if !score.is_scored() {
            println!("  - {}: not scored", domain.label(locale));
            continue;
        }
        println!(
            "  - {}: {}% ({}/{}) {}",
            domain.label(locale),
            score.percentage,
            score.score,
            score.max,
            score.level.label(locale)
        );
    }
    println!(
        "Top strength: {} | Top growth area: {}",
        results.top_strength.label(locale),
        results.top_growth_area.label(locale)
    );

    for strength in &results.insights.strengths {
        println!("  + {strength}");
    }
    for growth in &results.insights.growth_areas {
        println!("  ~ {growth}");
    }
    for step in &results.insights.next_steps {
        println!("  -> {step}");
    }

    if let Some(factors) = &results.failure_factors {
        println!("Watch for:");
        for factor in factors {
            println!("  [{}] {}: {}", factor.icon, factor.title, factor.description);
        }
    }

    if let Some(role) = &results.role {
        println!("What employers hiring a {} look for:", role.title);
        for item in role
            .employer_wants
            .qualifications
            .iter()
            .chain(&role.employer_wants.skills)
            .chain(&role.employer_wants.certifications)
        {
            println!("  * {item}");
        }
        println!("Salary benchmark key: {}", role.benchmark_key);
    }
}
