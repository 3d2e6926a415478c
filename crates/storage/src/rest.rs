//! REST
//!
//! The remote server is the only data source. Nothing is cached: every read goes over the
//! network and fails with `StorageError::NoConnection` if the server cannot be reached.

use std::fmt;

use gloo_net::http::{Request, Response};
use ignite_domain as domain;
use serde::{Deserialize, Serialize};

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sender: GlooNetSendRequest,
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> domain::SessionRepository for REST<S> {
    async fn initialize_session(&self) -> Result<domain::User, domain::ReadError> {
        self.fetch::<User>(Request::get("api/session").build())
            .await
            .map(domain::User::from)
    }

    async fn delete_session(&self) -> Result<(), domain::DeleteError> {
        Ok(self
            .fetch_no_content(Request::delete("api/session").build())
            .await?)
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_groups(&self) -> Result<Vec<domain::Group>, domain::ReadError> {
        Ok(self
            .fetch::<Vec<String>>(Request::get("api/groups").build())
            .await?
            .into_iter()
            .map(domain::Group::from)
            .collect())
    }

    async fn read_exercises_by_group(
        &self,
        group: &domain::Group,
    ) -> Result<Vec<domain::ExerciseSummary>, domain::ReadError> {
        Ok(self
            .fetch::<Vec<ExerciseSummary>>(
                Request::get(&format!("api/exercises/bygroup/{group}")).build(),
            )
            .await?
            .into_iter()
            .map(domain::ExerciseSummary::from)
            .collect())
    }
}

impl<S: SendRequest> domain::HistoryRepository for REST<S> {
    async fn read_history(&self) -> Result<Vec<domain::HistorySection>, domain::ReadError> {
        Ok(self
            .fetch::<Vec<HistorySection>>(Request::get("api/history").build())
            .await?
            .into_iter()
            .map(domain::HistorySection::from)
            .collect())
    }
}

impl<S: SendRequest> REST<S> {
    async fn fetch<T>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, domain::ReadError>
    where
        T: 'static + for<'de> serde::Deserialize<'de>,
    {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|err| {
            domain::StorageError::Other(format!("deserialization failed: {err}").into()).into()
        })
    }

    async fn fetch_no_content(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<(), domain::ReadError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, domain::ReadError> {
        let request = request.map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        match self.sender.send_request(request).await {
            Ok(response) => {
                if response.ok() {
                    Ok(response)
                } else {
                    let body = response.text().await.unwrap_or_default();
                    Err(error_from_response(response.status(), &body))
                }
            }
            Err(_) => Err(domain::StorageError::NoConnection.into()),
        }
    }
}

/// Maps an unsuccessful response to the error taxonomy of the domain.
///
/// Only a JSON body with a non-empty `message` counts as an application error.
#[must_use]
pub fn error_from_response(status: u16, body: &str) -> domain::ReadError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message }) if !message.trim().is_empty() => {
            domain::ReadError::Application(message)
        }
        _ if status == 401 => domain::StorageError::NoSession.into(),
        _ => domain::StorageError::Status(status).into(),
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

/// A value the server sends either as string or as number.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(u64),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{text}"),
            Scalar::Number(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Scalar,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

impl From<User> for domain::User {
    fn from(value: User) -> Self {
        domain::User {
            id: value.id.to_string().into(),
            name: value.name,
            email: value.email,
            avatar: value.avatar,
        }
    }
}

impl From<domain::User> for User {
    fn from(value: domain::User) -> Self {
        User {
            id: Scalar::Text(value.id.to_string()),
            name: value.name,
            email: value.email,
            avatar: value.avatar,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSummary {
    pub id: Scalar,
    pub name: String,
    pub group: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub series: u32,
    #[serde(default)]
    pub repetitions: Scalar,
}

impl From<ExerciseSummary> for domain::ExerciseSummary {
    fn from(value: ExerciseSummary) -> Self {
        domain::ExerciseSummary {
            id: value.id.to_string().into(),
            name: value.name,
            group: value.group.into(),
            thumbnail: value.thumb,
            series: value.series,
            repetitions: value.repetitions.to_string(),
        }
    }
}

impl From<domain::ExerciseSummary> for ExerciseSummary {
    fn from(value: domain::ExerciseSummary) -> Self {
        ExerciseSummary {
            id: Scalar::Text(value.id.to_string()),
            name: value.name,
            group: value.group.to_string(),
            thumb: value.thumbnail,
            series: value.series,
            repetitions: Scalar::Text(value.repetitions),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistorySection {
    pub title: String,
    pub data: Vec<HistoryEntry>,
}

impl From<HistorySection> for domain::HistorySection {
    fn from(value: HistorySection) -> Self {
        domain::HistorySection {
            title: value.title,
            data: value
                .data
                .into_iter()
                .map(domain::HistoryEntry::from)
                .collect(),
        }
    }
}

impl From<domain::HistorySection> for HistorySection {
    fn from(value: domain::HistorySection) -> Self {
        HistorySection {
            title: value.title,
            data: value.data.into_iter().map(HistoryEntry::from).collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: Scalar,
    pub name: String,
    #[serde(default)]
    pub group: String,
    pub hour: String,
}

impl From<HistoryEntry> for domain::HistoryEntry {
    fn from(value: HistoryEntry) -> Self {
        domain::HistoryEntry {
            id: value.id.to_string().into(),
            name: value.name,
            group: value.group.into(),
            hour: value.hour,
        }
    }
}

impl From<domain::HistoryEntry> for HistoryEntry {
    fn from(value: domain::HistoryEntry) -> Self {
        HistoryEntry {
            id: Scalar::Text(value.id.to_string()),
            name: value.name,
            group: value.group.to_string(),
            hour: value.hour,
        }
    }
}
