use crate::{Operation, ReadError};

/// Receiver of transient, auto-expiring messages. The latest call wins for display.
pub trait NotificationSink {
    fn notify(&self, message: &str, kind: NotificationKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Application errors are shown verbatim, everything else falls back to the operation's message.
#[must_use]
pub fn failure_message(error: &ReadError, operation: Operation) -> &str {
    error
        .display_message()
        .unwrap_or(operation.fallback_message())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::StorageError;

    use super::*;

    #[rstest]
    #[case(Operation::Groups, "groups could not be loaded")]
    #[case(Operation::Exercises, "exercises could not be loaded")]
    #[case(Operation::History, "history could not be loaded")]
    fn test_failure_message_fallback(#[case] operation: Operation, #[case] expected: &str) {
        assert_eq!(
            failure_message(&ReadError::Storage(StorageError::NoConnection), operation),
            expected
        );
        assert_eq!(
            failure_message(
                &ReadError::Storage(StorageError::Other("expected value at line 1".into())),
                operation
            ),
            expected
        );
    }

    #[rstest]
    #[case(Operation::Groups)]
    #[case(Operation::Exercises)]
    #[case(Operation::History)]
    fn test_failure_message_application_error(#[case] operation: Operation) {
        assert_eq!(
            failure_message(
                &ReadError::Application("Muscle group not found".to_string()),
                operation
            ),
            "Muscle group not found"
        );
    }
}
