//! The fetch-then-write loop over the file table.
//!
//! Entries are processed strictly in order, one at a time. A failure on one
//! entry is recorded and the loop moves on; nothing is retried or rolled
//! back.

use tracing::{info, instrument, warn};

use crate::config::{SyncConfig, SyncEntry};
use crate::errors::{FetchError, SyncError};
use crate::fetch::RawClient;
use crate::writer::ProjectWriter;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Which half of the pipeline an entry failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Update,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch => write!(f, "Fetch"),
            Self::Update => write!(f, "Update"),
        }
    }
}

/// Final outcome for one entry.
#[derive(Debug)]
pub struct EntryOutcome {
    pub entry: SyncEntry,
    /// Confirmation message on success.
    pub result: Result<String, SyncError>,
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Stage that failed, if any.
    pub fn failed_stage(&self) -> Option<Stage> {
        match &self.result {
            Ok(_) => None,
            Err(SyncError::Fetch(_)) => Some(Stage::Fetch),
            Err(SyncError::Write(_)) => Some(Stage::Update),
        }
    }
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug)]
pub enum SyncEvent<'a> {
    /// About to fetch this entry.
    Processing(&'a SyncEntry),
    /// The entry finished, successfully or not.
    Finished(&'a EntryOutcome),
}

/// Aggregate of one run.
#[derive(Debug, Default)]
pub struct SyncReport {
    outcomes: Vec<EntryOutcome>,
    success_count: usize,
    failure_count: usize,
}

impl SyncReport {
    fn record(&mut self, outcome: EntryOutcome) -> &EntryOutcome {
        if outcome.is_success() {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
        self.outcomes.push(outcome);
        &self.outcomes[self.outcomes.len() - 1]
    }

    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    pub fn success_count(&self) -> usize {
        self.success_count
    }

    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count == 0
    }

    /// 0 when every entry synced, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Failed entries, in list order.
    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Summary: {} succeeded, {} failed",
            self.success_count, self.failure_count
        )
    }
}

impl FromIterator<EntryOutcome> for SyncReport {
    fn from_iter<I: IntoIterator<Item = EntryOutcome>>(iter: I) -> Self {
        let mut report = Self::default();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Synchronizes the configured entries from the raw host into the project.
pub struct TemplateSync {
    client: RawClient,
    writer: ProjectWriter,
    entries: Vec<SyncEntry>,
}

impl TemplateSync {
    pub fn new(client: RawClient, writer: ProjectWriter, entries: Vec<SyncEntry>) -> Self {
        Self {
            client,
            writer,
            entries,
        }
    }

    /// Build the client and writer described by `config`.
    pub fn from_config(config: &SyncConfig) -> Result<Self, FetchError> {
        let client = RawClient::new(&config.repository, config.timeout)?;
        let writer = ProjectWriter::new(&config.project_root);
        Ok(Self::new(client, writer, config.entries.clone()))
    }

    pub fn entries(&self) -> &[SyncEntry] {
        &self.entries
    }

    pub async fn run(&self) -> SyncReport {
        self.run_with(|_| {}).await
    }

    /// Run the sync, passing each progress event to `on_event`.
    #[instrument(skip_all, fields(entries = self.entries.len()))]
    pub async fn run_with<F>(&self, mut on_event: F) -> SyncReport
    where
        F: FnMut(SyncEvent<'_>),
    {
        let mut report = SyncReport::default();

        for entry in &self.entries {
            on_event(SyncEvent::Processing(entry));
            let outcome = EntryOutcome {
                entry: *entry,
                result: self.sync_entry(entry).await,
            };
            on_event(SyncEvent::Finished(report.record(outcome)));
        }

        info!(
            succeeded = report.success_count(),
            failed = report.failure_count(),
            "sync run complete"
        );
        report
    }

    async fn sync_entry(&self, entry: &SyncEntry) -> Result<String, SyncError> {
        let content = self.client.fetch(entry.source_path).await.map_err(|e| {
            warn!(source = entry.source_path, error = %e, "fetch failed");
            e
        })?;
        let message = self.writer.write(entry.dest_path, &content).map_err(|e| {
            warn!(dest = entry.dest_path, error = %e, "update failed");
            e
        })?;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WriteError;

    fn outcome(ok: bool) -> EntryOutcome {
        EntryOutcome {
            entry: SyncEntry::new("a.md", "a.md"),
            result: if ok {
                Ok("Updated: a.md".into())
            } else {
                Err(FetchError::NotFound {
                    path: "a.md".into(),
                }
                .into())
            },
        }
    }

    #[test]
    fn test_report_counts_and_exit_code() {
        let mut report = SyncReport::default();
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);

        report.record(outcome(true));
        report.record(outcome(false));
        report.record(outcome(true));

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.total(), 3);
        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.summary_line(), "Summary: 2 succeeded, 1 failed");
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_all_failed_shares_exit_code() {
        let report: SyncReport = [outcome(false), outcome(false)].into_iter().collect();
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.summary_line(), "Summary: 0 succeeded, 2 failed");
    }

    #[test]
    fn test_failed_stage() {
        assert_eq!(outcome(true).failed_stage(), None);
        assert_eq!(outcome(false).failed_stage(), Some(Stage::Fetch));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let write_failure = EntryOutcome {
            entry: SyncEntry::new("a.md", "a.md"),
            result: Err(WriteError::from_io("a.md", io).into()),
        };
        assert_eq!(write_failure.failed_stage(), Some(Stage::Update));
        assert_eq!(Stage::Update.to_string(), "Update");
    }
}
