use std::{
    cell::RefCell,
    collections::VecDeque,
    pin::Pin,
    sync::LazyLock,
    task::{Context, Poll},
};

use futures::channel::oneshot;

use crate::{
    DeleteError, ExerciseRepository, ExerciseSummary, Group, HistoryEntry, HistoryRepository,
    HistorySection, NotificationKind, NotificationSink, ReadError, SessionRepository,
    StorageError, User,
};

pub static USER: LazyLock<User> = LazyLock::new(|| User {
    id: "2".into(),
    name: "Alice".to_string(),
    email: "alice@example.com".to_string(),
    avatar: "alice.png".to_string(),
});

pub static GROUPS: LazyLock<Vec<Group>> = LazyLock::new(|| vec!["Back".into(), "Arms".into()]);

pub static EXERCISES: LazyLock<Vec<ExerciseSummary>> =
    LazyLock::new(|| vec![ROW.clone(), PULLDOWN.clone()]);

pub static ROW: LazyLock<ExerciseSummary> = LazyLock::new(|| exercise("1", "Row", "Back"));

pub static PULLDOWN: LazyLock<ExerciseSummary> =
    LazyLock::new(|| exercise("2", "Pulldown", "Back"));

pub static CURL: LazyLock<ExerciseSummary> = LazyLock::new(|| exercise("3", "Curl", "Arms"));

pub static HISTORY: LazyLock<Vec<HistorySection>> = LazyLock::new(|| {
    vec![
        HistorySection {
            title: "26.08.24".to_string(),
            data: vec![
                HistoryEntry {
                    id: "5".into(),
                    name: "Pulldown".to_string(),
                    group: "Back".into(),
                    hour: "18:40".to_string(),
                },
                HistoryEntry {
                    id: "4".into(),
                    name: "Row".to_string(),
                    group: "Back".into(),
                    hour: "18:10".to_string(),
                },
            ],
        },
        HistorySection {
            title: "27.08.24".to_string(),
            data: vec![HistoryEntry {
                id: "6".into(),
                name: "Curl".to_string(),
                group: "Arms".into(),
                hour: "07:05".to_string(),
            }],
        },
    ]
});

fn exercise(id: &str, name: &str, group: &str) -> ExerciseSummary {
    ExerciseSummary {
        id: id.into(),
        name: name.to_string(),
        group: group.into(),
        thumbnail: format!("{}.png", name.to_lowercase()),
        series: 3,
        repetitions: "12".to_string(),
    }
}

pub fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    future.poll(&mut Context::from_waker(futures::task::noop_waker_ref()))
}

#[derive(Default)]
pub struct RecordingSink {
    pub notifications: RefCell<Vec<(String, NotificationKind)>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .borrow()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifications
            .borrow_mut()
            .push((message.to_string(), kind));
    }
}

type Reply<T> = oneshot::Sender<Result<T, ReadError>>;
type Pending<T> = RefCell<VecDeque<oneshot::Receiver<Result<T, ReadError>>>>;

/// A gateway whose responses are scripted by the test, in call order.
///
/// `expect_*` hands out the sender for the next call, so the test decides when it settles.
#[derive(Default)]
pub struct ScriptedRepository {
    groups: Pending<Vec<Group>>,
    exercises: Pending<Vec<ExerciseSummary>>,
    history: Pending<Vec<HistorySection>>,
    delete_session: RefCell<Option<Result<(), DeleteError>>>,
    pub requested_groups: RefCell<Vec<Group>>,
}

impl ScriptedRepository {
    pub fn expect_groups(&self) -> Reply<Vec<Group>> {
        expect(&self.groups)
    }

    pub fn expect_exercises(&self) -> Reply<Vec<ExerciseSummary>> {
        expect(&self.exercises)
    }

    pub fn expect_history(&self) -> Reply<Vec<HistorySection>> {
        expect(&self.history)
    }

    pub fn reply_groups(&self, result: Result<Vec<Group>, ReadError>) {
        let _ = self.expect_groups().send(result);
    }

    pub fn reply_exercises(&self, result: Result<Vec<ExerciseSummary>, ReadError>) {
        let _ = self.expect_exercises().send(result);
    }

    pub fn reply_history(&self, result: Result<Vec<HistorySection>, ReadError>) {
        let _ = self.expect_history().send(result);
    }

    pub fn set_delete_session(&self, result: Result<(), DeleteError>) {
        *self.delete_session.borrow_mut() = Some(result);
    }
}

fn expect<T>(pending: &Pending<T>) -> Reply<T> {
    let (sender, receiver) = oneshot::channel();
    pending.borrow_mut().push_back(receiver);
    sender
}

async fn settle<T>(pending: &Pending<T>) -> Result<T, ReadError> {
    let receiver = pending.borrow_mut().pop_front();
    match receiver {
        Some(receiver) => receiver
            .await
            .unwrap_or(Err(ReadError::Storage(StorageError::NoConnection))),
        None => Err(ReadError::Storage(StorageError::Other(
            "no scripted reply".into(),
        ))),
    }
}

impl ExerciseRepository for ScriptedRepository {
    async fn read_groups(&self) -> Result<Vec<Group>, ReadError> {
        settle(&self.groups).await
    }

    async fn read_exercises_by_group(
        &self,
        group: &Group,
    ) -> Result<Vec<ExerciseSummary>, ReadError> {
        self.requested_groups.borrow_mut().push(group.clone());
        settle(&self.exercises).await
    }
}

impl HistoryRepository for ScriptedRepository {
    async fn read_history(&self) -> Result<Vec<HistorySection>, ReadError> {
        settle(&self.history).await
    }
}

impl SessionRepository for ScriptedRepository {
    async fn initialize_session(&self) -> Result<User, ReadError> {
        Ok(USER.clone())
    }

    async fn delete_session(&self) -> Result<(), DeleteError> {
        self.delete_session
            .borrow_mut()
            .take()
            .unwrap_or(Err(DeleteError::Storage(StorageError::NoConnection)))
    }
}
