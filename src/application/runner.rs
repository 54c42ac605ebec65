//! # Demo Runner
//!
//! Runs an ordered list of demos one at a time.
//!
//! Each demo is awaited to completion before the next starts. The first
//! failure ends the run; later demos are never invoked and nothing is rolled
//! back.

use crate::application::context::DemoContext;
use crate::application::demos::Demo;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::value_objects::ReceiptSummary;
use std::io::Write;
use tracing::{Instrument, info, info_span};

/// Sequential demo runner.
///
/// # Examples
///
/// ```
/// use celo_tx_types::application::{Demo, DemoRunner};
///
/// let runner = DemoRunner::default();
/// assert_eq!(runner.demos(), &Demo::ALL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRunner {
    demos: Vec<Demo>,
}

impl DemoRunner {
    /// Creates a runner for the given demos, run in iteration order.
    #[must_use]
    pub fn new(demos: impl IntoIterator<Item = Demo>) -> Self {
        Self {
            demos: demos.into_iter().collect(),
        }
    }

    /// Returns the demos in run order.
    #[must_use]
    pub fn demos(&self) -> &[Demo] {
        &self.demos
    }

    /// Runs every demo in order.
    ///
    /// # Returns
    ///
    /// One receipt summary per demo, in run order.
    ///
    /// # Errors
    ///
    /// Returns the first demo failure unchanged.
    pub async fn run<W: Write + Send>(
        &self,
        context: &DemoContext,
        out: &mut W,
    ) -> ApplicationResult<Vec<ReceiptSummary>> {
        let mut summaries = Vec::with_capacity(self.demos.len());

        for (index, demo) in self.demos.iter().copied().enumerate() {
            let span = info_span!("demo", step = index + 1, demo = %demo);
            let summary = demo.execute(context, out).instrument(span).await?;
            summaries.push(summary);
        }

        info!(completed = summaries.len(), "all demos completed");
        Ok(summaries)
    }

    /// Runs every demo and hands a failure to `on_failure`.
    ///
    /// `on_failure` is called at most once, with the error that stopped the
    /// run.
    ///
    /// # Returns
    ///
    /// The receipt summaries on success, `None` after a failure.
    pub async fn run_or_report<W, H>(
        &self,
        context: &DemoContext,
        out: &mut W,
        on_failure: H,
    ) -> Option<Vec<ReceiptSummary>>
    where
        W: Write + Send,
        H: FnOnce(ApplicationError),
    {
        match self.run(context, out).await {
            Ok(summaries) => Some(summaries),
            Err(err) => {
                on_failure(err);
                None
            }
        }
    }
}

impl Default for DemoRunner {
    fn default() -> Self {
        Self::new(Demo::ALL)
    }
}
