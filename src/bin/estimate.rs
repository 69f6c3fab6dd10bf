// Footprint estimate CLI
//
// Reads raw input as a JSON object (file path argument, or stdin), walks it
// through the wizard and prints the assessment as JSON. Field values are
// coerced like form input: null, "" and junk count as 0, numeric strings parse.
// Missing fields keep their defaults.
// Usage: cargo run --bin estimate -- input.json

use anyhow::{Context, Result};
use footprint_estimator_rust::config::EstimatorConfig;
use footprint_estimator_rust::formatters::JsonFormatter;
use footprint_estimator_rust::wizard::{SystemClock, WizardController};
use footprint_estimator_rust::RevealTimer;
use serde_json::Value;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Configuration: optional JSON file, then environment overrides
    let config = EstimatorConfig::resolve()?;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            buf
        }
    };
    let parsed: Value = serde_json::from_str(&raw).context("Failed to parse input JSON")?;
    let fields = parsed
        .as_object()
        .context("Input JSON must be an object of field values")?;

    // Fill the wizard step by step, as the input surface would
    let mut wizard = WizardController::new();
    loop {
        let step = wizard.step();
        tracing::info!("Step {}/4: {}", step.index() + 1, step.title());
        wizard.update_step_from_json(fields)?;
        if !wizard.advance() {
            break;
        }
    }

    let Some(submission) = wizard.submit() else {
        anyhow::bail!("Wizard refused submission in state {:?}", wizard.state());
    };

    let clock = SystemClock;
    let timer = RevealTimer::start(&clock, config.reveal_delay(), submission);
    std::thread::sleep(timer.remaining(&clock));
    if !timer.poll(&clock, &mut wizard) {
        timer.cancel(&mut wizard);
    }

    let assessment = wizard
        .assessment()
        .context("Wizard finished without an assessment")?;
    tracing::info!(
        "Total: {} kg CO2e/year ({:+.1}% vs global average)",
        assessment.results.total,
        assessment.comparison.pct_vs_global
    );

    println!("{}", JsonFormatter::format(assessment)?);
    Ok(())
}
