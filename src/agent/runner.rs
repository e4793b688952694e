//! The agent loop
//!
//! One iteration fetches the remote command list, diffs it against the run
//! history, executes whatever is new in fetch order, appends the batch to the
//! history, and sleeps. Fetch, history, and execution problems are journaled
//! and absorbed; the loop itself has no designed exit condition.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{info, warn};

use crate::core::{AgentPaths, Config, Result};
use crate::exec::ShellExecutor;
use crate::source::{self, CommandSource};
use crate::store::{Journal, RunHistory};

/// The polling agent
pub struct Agent {
    config: Config,
    source: Box<dyn CommandSource>,
    executor: ShellExecutor,
    history: RunHistory,
    journal: Journal,
}

/// What a single iteration did; used for observability and tests
#[derive(Debug, Default)]
pub struct IterationReport {
    /// Commands received from the remote source after post-processing
    pub fetched: usize,
    /// Ordered subsequence of fetched commands not yet in the history
    pub new_commands: Vec<String>,
    /// Commands that exited successfully
    pub succeeded: usize,
    /// Commands that failed to start, exited non-zero, or timed out
    pub failed: usize,
}

impl Agent {
    /// Create an agent from configuration and an explicit path set
    pub fn new(config: Config, paths: &AgentPaths) -> Result<Self> {
        let source = source::source_for(&config)?;
        Ok(Self::with_source(config, paths, source))
    }

    /// Create an agent with a caller-supplied command source
    pub fn with_source(
        config: Config,
        paths: &AgentPaths,
        source: Box<dyn CommandSource>,
    ) -> Self {
        let executor = ShellExecutor::from_config(&config);
        Self {
            config,
            source,
            executor,
            history: RunHistory::new(paths.history_file()),
            journal: Journal::new(paths.journal_file()),
        }
    }

    /// Run the loop forever
    pub async fn run(&self) -> Result<()> {
        self.journal.record(&format!(
            "Starting background polling loop against {}",
            self.source.describe()
        ));
        info!(source = %self.source.describe(), "agent loop started");

        let interval = Duration::from_secs(self.config.poll_interval_secs);
        loop {
            self.run_once().await;
            tokio::time::sleep(interval).await;
        }
    }

    /// Perform one fetch/diff/execute/persist iteration
    ///
    /// Never fails: every per-step error is journaled and degraded to "no
    /// work this iteration" or "this command failed".
    pub async fn run_once(&self) -> IterationReport {
        let mut report = IterationReport::default();

        let commands = match self.source.fetch().await {
            Ok(commands) => commands,
            Err(e) => {
                self.journal.record(&format!("Error fetching commands: {}", e));
                warn!("fetch failed: {}", e);
                Vec::new()
            }
        };
        report.fetched = commands.len();

        let known = match self.history.load() {
            Ok(known) => known,
            Err(e) => {
                self.journal.record(&format!("Error reading run history: {}", e));
                warn!("history read failed: {}", e);
                HashSet::new()
            }
        };

        report.new_commands = commands
            .into_iter()
            .filter(|command| !known.contains(command))
            .collect();

        if report.new_commands.is_empty() {
            return report;
        }

        self.journal.record(&format!(
            "{} new commands found",
            report.new_commands.len()
        ));

        let mut to_record = Vec::with_capacity(report.new_commands.len());
        for command in &report.new_commands {
            match self.executor.run(command).await {
                Ok(()) => {
                    self.journal.record(&format!("Executed: {}", command));
                    report.succeeded += 1;
                    to_record.push(command.clone());
                }
                Err(e) => {
                    self.journal
                        .record(&format!("Command failed: {} ({})", command, e));
                    warn!(command = %command, "execution failed: {}", e);
                    report.failed += 1;
                    // Recording a failed command suppresses any retry; that
                    // is the historical behavior and the default policy.
                    if self.config.record_failed_commands {
                        to_record.push(command.clone());
                    }
                }
            }
        }

        if let Err(e) = self.history.append(&to_record) {
            self.journal
                .record(&format!("Error appending run history: {}", e));
            warn!("history append failed: {}", e);
        }

        report
    }
}
