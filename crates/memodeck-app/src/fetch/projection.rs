//! Observable projection of an asynchronous load.

use std::future::Future;

use futures::stream::StreamExt;
use futures_signals::signal::{Mutable, Signal, SignalExt};

use memodeck_core::errors::FetchError;

/// Settlement state of an asynchronous load.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// The load has been issued and has not settled.
    Pending,
    /// The load settled successfully.
    Fulfilled(T),
    /// The load failed. The error stays until a fresh projection is made.
    Rejected(FetchError),
}

impl<T> Loadable<T> {
    /// Whether the load has not settled yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the load settled successfully.
    #[must_use]
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    /// Whether the load failed.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The fulfilled value, if any.
    pub fn fulfilled(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            _ => None,
        }
    }

    /// The rejection error, if any.
    pub fn rejected(&self) -> Option<&FetchError> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }
}

/// Observable tri-state over one asynchronous operation.
///
/// Starts `Pending` and applies exactly one transition — to `Fulfilled` or
/// `Rejected` — when the wrapped future settles. A projection never returns
/// to `Pending`; re-issuing a load means constructing a new projection,
/// which is cheap even over an already-settled shared future and settles to
/// the same terminal outcome.
///
/// Clones share the same state cell.
#[derive(Clone)]
pub struct LoadProjection<T: Clone> {
    state: Mutable<Loadable<T>>,
}

impl<T> LoadProjection<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Project `future` into an observable state.
    ///
    /// The future is driven by a background task, so this returns
    /// immediately with a `Pending` state.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let state = Mutable::new(Loadable::Pending);
        let writer = state.clone();
        tokio::spawn(async move {
            let settled = match future.await {
                Ok(value) => Loadable::Fulfilled(value),
                Err(error) => Loadable::Rejected(error),
            };
            writer.set(settled);
        });
        Self { state }
    }

    /// Current settlement state.
    #[must_use]
    pub fn state(&self) -> Loadable<T> {
        self.state.get_cloned()
    }

    /// Signal emitting the current state and every later transition.
    pub fn signal(&self) -> impl Signal<Item = Loadable<T>> {
        self.state.signal_cloned()
    }

    /// Wait for the terminal state.
    pub async fn settled(&self) -> Loadable<T> {
        let mut transitions = self.state.signal_cloned().to_stream();
        while let Some(state) = transitions.next().await {
            if !state.is_pending() {
                return state;
            }
        }
        self.state()
    }
}
