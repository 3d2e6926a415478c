#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod effect;
mod error;
mod exercise;
mod fetch;
mod history;
mod notification;
mod screen;
mod service;
mod session;
mod synchronizer;
mod user;

pub use effect::FocusEffect;
pub use error::{DeleteError, ReadError, StorageError};
pub use exercise::{ExerciseID, ExerciseRepository, ExerciseService, ExerciseSummary, Group};
pub use fetch::{
    FetchState, FetchStateCell, Operation, SettlePolicy, Settlement, Ticket, synchronize,
};
pub use history::{
    EMPTY_HISTORY_MESSAGE, HistoryContent, HistoryEntry, HistoryEntryID, HistoryRepository,
    HistorySection, HistoryService,
};
pub use notification::{Notification, NotificationKind, NotificationSink, failure_message};
pub use screen::{ExercisesScreen, HistoryScreen};
pub use service::Service;
pub use session::{SessionContext, SessionRepository, SessionService, sign_out};
pub use synchronizer::{load_groups, sync_exercises, sync_history};
pub use user::{User, UserID};

#[cfg(test)]
mod tests;
