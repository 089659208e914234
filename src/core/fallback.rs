//! Ordered "try, keep the last error, move on" combinator shared by the endpoint
//! and proxy loops.

use std::future::Future;

/// Why a fallback run produced no value.
#[derive(Debug)]
pub(crate) struct Exhaustion<E> {
    /// Number of options that were attempted.
    pub(crate) attempts: usize,
    /// The most recent failure; `None` only when there was nothing to try.
    pub(crate) last: Option<E>,
}

/// Runs `attempt` for each option in order, one at a time, and returns the first
/// success. Each failure replaces the previously recorded one.
///
/// The closure gets the option's position so callers can report which one failed.
pub(crate) async fn first_success<I, T, E, F, Fut>(
    options: I,
    mut attempt: F,
) -> Result<T, Exhaustion<E>>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut exhaustion = Exhaustion {
        attempts: 0,
        last: None,
    };

    for (idx, option) in options.into_iter().enumerate() {
        exhaustion.attempts += 1;
        match attempt(idx, option).await {
            Ok(value) => return Ok(value),
            Err(e) => exhaustion.last = Some(e),
        }
    }

    Err(exhaustion)
}
