//! Project model and status lifecycle

use crate::notes::models::ProjectNote;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Captured but not started
    #[default]
    Idea,
    /// Actively being built
    InProgress,
    /// Parked, may resume later
    OnHold,
    /// Shipped or otherwise finished
    Completed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idea => write!(f, "idea"),
            Self::InProgress => write!(f, "in_progress"),
            Self::OnHold => write!(f, "on_hold"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idea" => Ok(Self::Idea),
            "in_progress" => Ok(Self::InProgress),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

/// A build project: the unit everything else in the engine operates on.
///
/// `whiteboard` is the accumulated understanding of the project — exactly
/// one per project, grown by the context accumulator and freely editable by
/// the user (last writer wins). `notes` is the append-only ledger in
/// reverse-chronological order (newest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (also the persistence key)
    pub id: Uuid,
    /// Short display title
    pub title: String,
    /// The founding idea, freely editable afterwards
    pub description: String,
    /// Accumulated project context document
    #[serde(default)]
    pub whiteboard: String,
    pub status: ProjectStatus,
    /// Note ledger, newest first
    #[serde(default)]
    pub notes: Vec<ProjectNote>,
}

impl Project {
    /// Create an empty project with the given title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            whiteboard: String::new(),
            status: ProjectStatus::Idea,
            notes: Vec::new(),
        }
    }

    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}
