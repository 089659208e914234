//! User-triggered lookups: input validation, one-at-a-time gating and
//! loading-state bookkeeping around [`StatsRetriever::retrieve`].

mod sink;

pub use sink::{DisplaySink, TerminalSink};

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{Stats, StatsError, StatsRetriever};

/// Shown when the trigger fires with a blank username.
pub const EMPTY_USERNAME_MESSAGE: &str = "Enter a username";
/// Shown for every retrieval failure; the cause goes to diagnostics only.
pub const FETCH_FAILED_MESSAGE: &str =
    "Could not fetch stats. Check username or try again later.";

/// What one trigger did.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The input was blank; nothing was fetched.
    Invalid,
    /// Another lookup was still running; this trigger was ignored.
    Busy,
    /// Stats were fetched and handed to the sink.
    Found(Stats),
    /// Every source failed. The generic message was shown; the cause is kept here.
    Failed(StatsError),
}

/// The trimmed username, or `None` if nothing is left after trimming.
pub fn validate_username(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Binds a retriever to a display sink and runs at most one lookup at a time.
pub struct Lookup<S> {
    retriever: StatsRetriever,
    sink: S,
    busy: AtomicBool,
}

impl<S: DisplaySink> Lookup<S> {
    pub fn new(retriever: StatsRetriever, sink: S) -> Self {
        Self {
            retriever,
            sink,
            busy: AtomicBool::new(false),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// `true` while a triggered lookup has not finished.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Handles one activation (button press, Enter key, input line).
    ///
    /// Clears the previous error and stats, validates `input`, and runs the
    /// retrieval with the loading indicator raised. The indicator and the busy
    /// flag are reset on every exit path, including a panicking sink and a
    /// dropped future.
    pub async fn trigger(&self, input: &str) -> LookupOutcome {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return LookupOutcome::Busy;
        }
        let mut guard = BusyGuard {
            lookup: self,
            loading: false,
        };

        self.sink.clear_error();
        self.sink.clear_stats();

        let Some(username) = validate_username(input) else {
            self.sink.show_error(EMPTY_USERNAME_MESSAGE);
            return LookupOutcome::Invalid;
        };

        self.sink.set_loading(true);
        guard.loading = true;

        match self.retriever.retrieve(username).await {
            Ok(stats) => {
                self.sink.show_stats(&stats);
                LookupOutcome::Found(stats)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!(username, error = %e, root_cause = %e.root_cause(), "lookup failed");
                self.sink.show_error(FETCH_FAILED_MESSAGE);
                LookupOutcome::Failed(e)
            }
        }
    }
}

struct BusyGuard<'a, S: DisplaySink> {
    lookup: &'a Lookup<S>,
    loading: bool,
}

impl<S: DisplaySink> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        if self.loading {
            self.lookup.sink.set_loading(false);
        }
        self.lookup.busy.store(false, Ordering::Release);
    }
}
