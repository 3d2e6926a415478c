use derive_more::{Deref, Display};

use crate::{Group, ReadError};

pub const EMPTY_HISTORY_MESSAGE: &str = "No exercises recorded yet.\nShall we work out today?";

#[allow(async_fn_in_trait)]
pub trait HistoryService {
    async fn get_history(&self) -> Result<Vec<HistorySection>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait HistoryRepository {
    async fn read_history(&self) -> Result<Vec<HistorySection>, ReadError>;
}

/// The exercises performed on one calendar day, in the order given by the remote system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySection {
    pub title: String,
    pub data: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: HistoryEntryID,
    pub name: String,
    pub group: Group,
    pub hour: String,
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HistoryEntryID(String);

impl From<&str> for HistoryEntryID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for HistoryEntryID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum HistoryContent<'a> {
    Placeholder(&'static str),
    Sections(&'a [HistorySection]),
}

impl<'a> HistoryContent<'a> {
    #[must_use]
    pub fn of(sections: &'a [HistorySection]) -> Self {
        if sections.is_empty() {
            HistoryContent::Placeholder(EMPTY_HISTORY_MESSAGE)
        } else {
            HistoryContent::Sections(sections)
        }
    }
}
