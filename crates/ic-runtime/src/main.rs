//! # ic-node
//!
//! Replays a JSON-lines operation journal against the enabled domains and
//! prints one JSON result per operation.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (TOML file or defaults)
//! 2. Initialize logging
//! 3. Wire the enabled domains over demo collaborators
//! 4. Replay the journal (file or stdin)

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ic_04_domain_contracts::RecordingCollaborators;
use ic_runtime::{DomainRegistry, JournalReplayer, NodeConfig};
use ic_telemetry::{init_telemetry, TelemetryConfig};

/// Interchain node: replay an operation journal.
#[derive(Parser, Debug)]
#[command(name = "ic-node", version, about, long_about = None)]
struct Cli {
    /// Journal to replay. Reads stdin when omitted.
    journal: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overriding the configuration.
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,

    /// Collaborator capabilities that should fail (`insurance.process_claim`, ...).
    #[arg(long = "fail", value_delimiter = ',')]
    failing: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => NodeConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => NodeConfig::default(),
    };
    config.validate().context("invalid configuration")?;

    let mut telemetry = config.telemetry.apply(TelemetryConfig::from_env());
    if let Some(level) = &cli.log_level {
        telemetry = telemetry.with_log_level(level);
    }
    if cli.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }
    init_telemetry(&telemetry).context("failed to initialize telemetry")?;

    let collaborators = cli
        .failing
        .iter()
        .fold(RecordingCollaborators::new(), |rec, capability| rec.fail_on(capability));
    let registry = DomainRegistry::from_config(&config, Arc::new(collaborators))
        .context("failed to wire domains")?;
    info!(
        "[ic-node] v{} hosting {:?}",
        ic_runtime::VERSION,
        registry.chains()
    );

    let reader: Box<dyn BufRead> = match &cli.journal {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open journal {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let replayer = JournalReplayer::new(&registry);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (mut replayed, mut failed) = (0usize, 0usize);
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read journal")?;
        let Some(outcome) = replayer.replay_line(index + 1, &line) else {
            continue;
        };
        replayed += 1;
        if !outcome.ok {
            failed += 1;
        }
        writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
    }
    out.flush()?;

    info!(
        "[ic-node] replayed {} operations ({} failed), {} messages queued, {} callbacks audited",
        replayed,
        failed,
        registry.outbox().len(),
        registry.audit().len()
    );
    Ok(())
}
