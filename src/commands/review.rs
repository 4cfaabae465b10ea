//! Review command handler.

use std::path::PathBuf;
use std::process::ExitCode;

use lorecheck::config::LorecheckConfig;
use lorecheck::services::{NameConflictDetector, ProposalReviewer, ReviewOutcome};

use super::open_provider;

/// Exit code when an error-severity conflict blocks submission.
const EXIT_BLOCKED: u8 = 2;
/// Exit code when the corpus could not be loaded.
const EXIT_UNAVAILABLE: u8 = 3;

/// Review command.
pub fn cmd_review(
    config: &LorecheckConfig,
    name: &str,
    corpus: Option<PathBuf>,
    allow_exact: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let provider = open_provider(corpus, config)?;
    let mut policy = config.submission;
    if allow_exact {
        policy.block_on_exact = false;
    }

    let reviewer = ProposalReviewer::new(provider)
        .with_detector(NameConflictDetector::new(config.detector.clone()))
        .with_policy(policy);
    let review = reviewer.review(name);

    println!("Review of \"{}\": {}", review.proposed_name, review.outcome);
    if let Some(reason) = &review.unavailable_reason {
        println!("  Conflict check unavailable: {reason}");
    }
    for conflict in &review.conflicts {
        println!("  {conflict}");
    }
    if review.is_partial() {
        println!("  Checked {} entries; missing categories:", review.corpus_size);
        for failure in &review.failed_categories {
            println!("    - {}: {}", failure.category, failure.cause);
        }
    }

    Ok(exit_code(review.outcome))
}

fn exit_code(outcome: ReviewOutcome) -> ExitCode {
    match outcome {
        ReviewOutcome::Clear | ReviewOutcome::Warned => ExitCode::SUCCESS,
        ReviewOutcome::Blocked => ExitCode::from(EXIT_BLOCKED),
        ReviewOutcome::Unavailable => ExitCode::from(EXIT_UNAVAILABLE),
    }
}
