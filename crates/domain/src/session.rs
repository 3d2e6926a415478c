use crate::{DeleteError, ReadError, User};

#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn get_session(&self) -> Result<User, ReadError>;
    async fn delete_session(&self) -> Result<(), DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait SessionRepository {
    async fn initialize_session(&self) -> Result<User, ReadError>;
    async fn delete_session(&self) -> Result<(), DeleteError>;
}

/// The signed-in account, shared by handle with every component that needs it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user: Option<User>,
}

impl SessionContext {
    #[must_use]
    pub fn start(user: User) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Ends the context locally and returns the user it belonged to.
    pub fn end(&mut self) -> Option<User> {
        self.user.take()
    }
}

/// Deletes the remote session and tears down `context`.
///
/// The context is kept if the remote session could not be deleted.
pub async fn sign_out<S: SessionService>(
    service: &S,
    context: &mut SessionContext,
) -> Result<User, DeleteError> {
    service.delete_session().await?;
    context
        .end()
        .ok_or(DeleteError::Storage(crate::StorageError::NoSession))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use crate::{
        Service, StorageError,
        tests::{ScriptedRepository, USER},
    };

    use super::*;

    #[test]
    fn test_session_context_lifecycle() {
        let mut context = SessionContext::start(USER.clone());
        assert_eq!(context.user(), Some(&*USER));
        assert_eq!(context.end(), Some(USER.clone()));
        assert_eq!(context.user(), None);
        assert_eq!(context.end(), None);
    }

    #[test]
    fn test_sign_out() {
        let repository = ScriptedRepository::default();
        repository.set_delete_session(Ok(()));
        let service = Service::new(repository);
        let mut context = SessionContext::start(USER.clone());

        assert_eq!(
            block_on(sign_out(&service, &mut context)).unwrap(),
            USER.clone()
        );
        assert_eq!(context.user(), None);
    }

    #[test]
    fn test_sign_out_keeps_context_on_failure() {
        let repository = ScriptedRepository::default();
        repository.set_delete_session(Err(DeleteError::Storage(StorageError::NoConnection)));
        let service = Service::new(repository);
        let mut context = SessionContext::start(USER.clone());

        assert!(matches!(
            block_on(sign_out(&service, &mut context)),
            Err(DeleteError::Storage(StorageError::NoConnection))
        ));
        assert_eq!(context.user(), Some(&*USER));
    }

    #[test]
    fn test_sign_out_without_session() {
        let repository = ScriptedRepository::default();
        repository.set_delete_session(Ok(()));
        let service = Service::new(repository);
        let mut context = SessionContext::default();

        assert!(matches!(
            block_on(sign_out(&service, &mut context)),
            Err(DeleteError::Storage(StorageError::NoSession))
        ));
    }
}
