use crate::classifier::Classified;
use crate::journal_state::{JournalError, JournalState};
use color_eyre::Result;
use futures::FutureExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

/// A classification that becomes available after a fixed delay. The text is
/// captured when the analysis starts.
pub struct PendingAnalysis {
    handle: JoinHandle<Classified>,
}

impl PendingAnalysis {
    pub fn spawn(text: String, delay: Duration) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            Classified::new(text)
        });
        PendingAnalysis { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn wait(self) -> Result<Classified> {
        Ok(self.handle.await?)
    }
}

/// Journal box analysis slot. At most one analysis is in flight at a time.
pub struct Analyzer {
    delay: Duration,
    pending: Option<PendingAnalysis>,
}

impl Analyzer {
    pub fn new(delay: Duration) -> Self {
        Analyzer {
            delay,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn submit(&mut self, text: &str) -> Result<(), JournalError> {
        JournalState::validate(text)?;
        if self.is_pending() {
            return Err(JournalError::AnalysisInFlight);
        }
        debug!(delay_ms = self.delay.as_millis() as u64, "analysis started");
        self.pending = Some(PendingAnalysis::spawn(text.to_string(), self.delay));
        Ok(())
    }

    /// Takes the result if it is ready, without blocking.
    pub fn poll_result(&mut self) -> Result<Option<Classified>> {
        let Some(pending) = self.pending.as_mut() else {
            return Ok(None);
        };
        match (&mut pending.handle).now_or_never() {
            None => Ok(None),
            Some(joined) => {
                self.pending = None;
                Ok(Some(joined?))
            }
        }
    }

    /// Waits for the in-flight analysis, if any.
    pub async fn finish(&mut self) -> Result<Option<Classified>> {
        match self.pending.take() {
            Some(pending) => Ok(Some(pending.wait().await?)),
            None => Ok(None),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(DEFAULT_ANALYSIS_DELAY)
    }
}
