use std::{cell::RefCell, rc::Rc};

use log::debug;
use strum::Display;

use crate::{NotificationKind, NotificationSink, ReadError, failure_message};

/// Decides which of several overlapping fetches of the same kind determines the held items.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SettlePolicy {
    /// A settling fetch is applied only if no other fetch was issued after it.
    #[default]
    LastIssuedWins,
    /// Every settling fetch is applied, so the response that arrives last wins.
    LastSettledWins,
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    #[strum(to_string = "groups")]
    Groups,
    #[strum(to_string = "exercises")]
    Exercises,
    #[strum(to_string = "history")]
    History,
}

impl Operation {
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Groups => "groups could not be loaded",
            Operation::Exercises => "exercises could not be loaded",
            Operation::History => "history could not be loaded",
        }
    }
}

/// Issued by [`FetchState::begin`] and redeemed by [`FetchState::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug)]
pub enum Settlement {
    Applied,
    Failed(ReadError),
    Discarded,
}

/// The items of one synchronization flow together with its loading flag.
///
/// Items are only ever replaced as a whole. A failed fetch leaves them untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState<T> {
    items: Vec<T>,
    is_loading: bool,
    generation: u64,
    policy: SettlePolicy,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new(SettlePolicy::default())
    }
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn new(policy: SettlePolicy) -> Self {
        Self {
            items: vec![],
            is_loading: false,
            generation: 0,
            policy,
        }
    }

    #[must_use]
    pub fn with_items(policy: SettlePolicy, items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::new(policy)
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.is_loading = true;
        Ticket {
            generation: self.generation,
        }
    }

    /// Shows the flow as loading before its fetch is started.
    ///
    /// The flag is cleared by the next settlement of the latest ticket or by [`Self::invalidate`].
    pub fn announce(&mut self) {
        self.is_loading = true;
    }

    /// A stale failure is still reported, but leaves items and loading flag untouched.
    pub fn settle(&mut self, ticket: Ticket, result: Result<Vec<T>, ReadError>) -> Settlement {
        if self.policy == SettlePolicy::LastIssuedWins && ticket.generation != self.generation {
            return match result {
                Ok(_) => Settlement::Discarded,
                Err(err) => Settlement::Failed(err),
            };
        }

        self.is_loading = false;

        match result {
            Ok(items) => {
                self.items = items;
                Settlement::Applied
            }
            Err(err) => Settlement::Failed(err),
        }
    }

    /// Turns all outstanding tickets stale and clears the loading flag.
    ///
    /// Under [`SettlePolicy::LastSettledWins`] outstanding fetches are still applied.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.is_loading = false;
    }
}

/// A handle through which a flow reads and writes its [`FetchState`].
///
/// The borrow must not be held across a suspension point, so access is only granted for the
/// duration of a closure.
pub trait FetchStateCell<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut FetchState<T>) -> R) -> R;
}

impl<T> FetchStateCell<T> for Rc<RefCell<FetchState<T>>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut FetchState<T>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Runs one fetch against `cell`.
///
/// Failures are recovered here: they are routed to `notifier` and never returned as an error.
pub async fn synchronize<T, C, N, F>(
    cell: &mut C,
    notifier: &N,
    operation: Operation,
    fetch: F,
) -> Settlement
where
    C: FetchStateCell<T>,
    N: NotificationSink + ?Sized,
    F: Future<Output = Result<Vec<T>, ReadError>>,
{
    let ticket = cell.update(FetchState::begin);
    let result = fetch.await;
    let settlement = cell.update(|state| state.settle(ticket, result));

    match settlement {
        Settlement::Applied => {}
        Settlement::Failed(ref err) => {
            notifier.notify(failure_message(err, operation), NotificationKind::Error);
        }
        Settlement::Discarded => {
            debug!("discarded stale {operation} response");
        }
    }

    settlement
}
