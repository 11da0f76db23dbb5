//! Note models and category metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Category of a project note
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NoteCategory {
    /// Uncategorized entry
    #[default]
    General,
    /// Raw ideas and brainstorm output
    Idea,
    /// Execution plans and roadmaps
    Plan,
    /// Feasibility, market, and technical research
    Research,
    /// Build logs and progress records
    Log,
}

impl fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Idea => write!(f, "idea"),
            Self::Plan => write!(f, "plan"),
            Self::Research => write!(f, "research"),
            Self::Log => write!(f, "log"),
        }
    }
}

impl FromStr for NoteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "idea" => Ok(Self::Idea),
            "plan" => Ok(Self::Plan),
            "research" => Ok(Self::Research),
            "log" => Ok(Self::Log),
            _ => Err(format!("Unknown note category: {}", s)),
        }
    }
}

/// Display metadata for a note category.
///
/// Static lookup table so the rendering layer never hardcodes the mapping;
/// `icon` is a Material icon name, `accent` a theme color token.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMeta {
    pub category: NoteCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const CATEGORY_METADATA: &[CategoryMeta] = &[
    CategoryMeta {
        category: NoteCategory::General,
        label: "General",
        icon: "notes",
        accent: "slate",
    },
    CategoryMeta {
        category: NoteCategory::Idea,
        label: "Ideas",
        icon: "lightbulb",
        accent: "yellow",
    },
    CategoryMeta {
        category: NoteCategory::Plan,
        label: "Plans",
        icon: "assignment",
        accent: "cyan",
    },
    CategoryMeta {
        category: NoteCategory::Research,
        label: "Research",
        icon: "science",
        accent: "purple",
    },
    CategoryMeta {
        category: NoteCategory::Log,
        label: "Build Logs",
        icon: "history_edu",
        accent: "green",
    },
];

/// Look up the display metadata for a category.
pub fn category_meta(category: NoteCategory) -> &'static CategoryMeta {
    CATEGORY_METADATA
        .iter()
        .find(|m| m.category == category)
        .unwrap_or(&CATEGORY_METADATA[0])
}

/// A single ledger entry. Immutable once created — never updated, only
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectNote {
    pub id: Uuid,
    pub content: String,
    #[serde(default)]
    pub category: NoteCategory,
    pub created_at: DateTime<Utc>,
}

impl ProjectNote {
    pub fn new(content: impl Into<String>, category: NoteCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            category,
            created_at: Utc::now(),
        }
    }
}
