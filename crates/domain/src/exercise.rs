use std::fmt;

use derive_more::{Deref, Display};

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_groups(&self) -> Result<Vec<Group>, ReadError>;
    async fn get_exercises_by_group(
        &self,
        group: &Group,
    ) -> Result<Vec<ExerciseSummary>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_groups(&self) -> Result<Vec<Group>, ReadError>;
    async fn read_exercises_by_group(
        &self,
        group: &Group,
    ) -> Result<Vec<ExerciseSummary>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSummary {
    pub id: ExerciseID,
    pub name: String,
    pub group: Group,
    pub thumbnail: String,
    pub series: u32,
    pub repetitions: String,
}

impl ExerciseSummary {
    /// Series and repetitions as shown below the exercise name, if the remote system provided them.
    #[must_use]
    pub fn prescription(&self) -> Option<String> {
        if self.series == 0 && self.repetitions.is_empty() {
            return None;
        }
        Some(format!("{} series x {} repetitions", self.series, self.repetitions))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for ExerciseID {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A muscle group label as delivered by the remote system.
///
/// Labels are compared case-insensitively, so a selection of `"back"` marks the group `"Back"`
/// as active.
#[derive(Debug, Default, Clone, Eq)]
pub struct Group(String);

impl Group {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self(label.to_string())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl From<&str> for Group {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Group {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
