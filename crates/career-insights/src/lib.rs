//! Career readiness assessment engine for community health center workers.
//!
//! The [`assessment`] module holds the pure scoring pipeline; [`config`],
//! [`telemetry`], and [`error`] carry the service plumbing around it.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

use assessment::{AssessmentEngine, CatalogDocument};
use config::AssessmentConfig;
use error::AppError;
use tracing::info;

/// Builds the engine from configuration, failing fast on catalog defects.
pub fn engine_from_config(config: &AssessmentConfig) -> Result<AssessmentEngine, AppError> {
    let engine = match &config.question_bank_path {
        Some(path) => {
            let document = CatalogDocument::from_path(path)?;
            info!(path = %path.display(), "loaded question catalog override");
            AssessmentEngine::from_document(document, config.policy)?
        }
        None => AssessmentEngine::with_policy(config.policy)?,
    };
    Ok(engine)
}
