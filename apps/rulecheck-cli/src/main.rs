//! rulecheck
//!
//! Checks one PDF against up to three free-text rules by sending both to a
//! remote evaluation service, then prints a table of pass/fail results with
//! evidence, reasoning, and confidence.
//!
//! ```text
//! rulecheck --pdf policy.pdf \
//!     --rule "The document must have a purpose section" \
//!     --rule "Must include a summary"
//! ```
//!
//! Notifications go to stderr, results to stdout. The process exits non-zero
//! when the document is rejected, nothing can be submitted, or the service
//! call fails.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use rulecheck_core::{
    pdf::media_type_for_path, render, types::RULE_SLOTS, ClientConfig, HttpRuleCheckService,
    RuleCheckForm, SelectedDocument, StderrNotifier, Submitter,
};
use tracing::{debug, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for rulecheck
#[derive(Parser, Debug)]
#[command(name = "rulecheck")]
#[command(about = "Check a PDF against free-text rules")]
struct Args {
    /// Upload PDF (2-10 pages)
    #[arg(short, long)]
    pdf: Option<PathBuf>,

    /// Enter 3 Rules to Check, e.g. "The document must have a purpose section".
    /// Repeat for each rule; blank rules are skipped.
    #[arg(short, long = "rule", value_name = "RULE")]
    rules: Vec<String>,

    /// Evaluation service URL (overrides the config file)
    #[arg(long, env = "RULECHECK_ENDPOINT")]
    endpoint: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> anyhow::Result<ClientConfig> {
    let config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    Ok(match &args.endpoint {
        Some(endpoint) => config.with_endpoint(endpoint.clone()),
        None => config,
    })
}

async fn read_document(path: &Path) -> anyhow::Result<SelectedDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());

    Ok(SelectedDocument::new(
        file_name,
        media_type_for_path(path),
        bytes,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.rules.len() > RULE_SLOTS {
        bail!(
            "At most {} rules can be checked, got {}",
            RULE_SLOTS,
            args.rules.len()
        );
    }

    let config = load_config(&args)?;
    debug!("Using endpoint {}", config.service.endpoint);

    let form = RuleCheckForm::new(StderrNotifier).with_page_range(config.document);

    if let Some(path) = &args.pdf {
        let document = read_document(path).await?;
        if form.select_document(document).is_err() {
            return Ok(ExitCode::FAILURE);
        }
        if let Some(name) = form.document_name() {
            eprintln!("✓ {}", name);
        }
    }

    for (index, rule) in args.rules.iter().enumerate() {
        form.edit_rule(index, rule.clone())?;
    }

    let service = HttpRuleCheckService::new(&config.service)?;
    let submitter = Submitter::new(form, service);

    eprintln!("Checking Document...");
    if submitter.submit().await.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    let results = submitter.form().results();
    if args.json {
        println!("{}", render::render_json(&results)?);
    } else {
        print!("{}", render::render_table(&results));
    }

    Ok(ExitCode::SUCCESS)
}
