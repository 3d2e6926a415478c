use log::{debug, error};

use crate::{
    DeleteError, ExerciseRepository, ExerciseService, ExerciseSummary, Group, HistoryRepository,
    HistorySection, HistoryService, ReadError, SessionRepository, SessionService, User,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SessionRepository> SessionService for Service<R> {
    async fn get_session(&self) -> Result<User, ReadError> {
        log_on_error!(
            self.repository.initialize_session(),
            ReadError,
            "get",
            "session"
        )
    }

    async fn delete_session(&self) -> Result<(), DeleteError> {
        log_on_error!(
            self.repository.delete_session(),
            DeleteError,
            "delete",
            "session"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_groups(&self) -> Result<Vec<Group>, ReadError> {
        log_on_error!(self.repository.read_groups(), ReadError, "get", "groups")
    }

    async fn get_exercises_by_group(
        &self,
        group: &Group,
    ) -> Result<Vec<ExerciseSummary>, ReadError> {
        log_on_error!(
            self.repository.read_exercises_by_group(group),
            ReadError,
            "get",
            "exercises"
        )
    }
}

impl<R: HistoryRepository> HistoryService for Service<R> {
    async fn get_history(&self) -> Result<Vec<HistorySection>, ReadError> {
        log_on_error!(self.repository.read_history(), ReadError, "get", "history")
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use crate::{
        StorageError,
        tests::{EXERCISES, GROUPS, ScriptedRepository},
    };

    use super::*;

    #[test]
    fn test_get_groups() {
        let repository = ScriptedRepository::default();
        repository.reply_groups(Ok(GROUPS.clone()));
        let service = Service::new(repository);

        assert_eq!(block_on(service.get_groups()).unwrap(), GROUPS.clone());
    }

    #[test]
    fn test_get_exercises_by_group_forwards_group() {
        let repository = ScriptedRepository::default();
        repository.reply_exercises(Ok(EXERCISES.clone()));
        let service = Service::new(repository);

        assert_eq!(
            block_on(service.get_exercises_by_group(&"Back".into())).unwrap(),
            EXERCISES.clone()
        );
        assert_eq!(
            *service.repository.requested_groups.borrow(),
            vec![Group::from("Back")]
        );
    }

    #[test]
    fn test_get_history_passes_errors_through() {
        let repository = ScriptedRepository::default();
        repository.reply_history(Err(ReadError::Storage(StorageError::NoConnection)));
        let service = Service::new(repository);

        assert!(matches!(
            block_on(service.get_history()),
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }
}
