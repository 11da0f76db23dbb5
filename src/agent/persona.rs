//! Agent roles and persona frames

use crate::notes::models::NoteCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persona a user query is routed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Technical/systems focus: architecture, execution roadmaps
    Engineer,
    /// Feasibility and market focus: validation, bottlenecks, gotchas
    Researcher,
    /// Unconstrained multi-turn chat: brainstorm, plan, critique
    Generic,
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engineer => write!(f, "engineer"),
            Self::Researcher => write!(f, "researcher"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

impl FromStr for AgentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "engineer" => Ok(Self::Engineer),
            "researcher" => Ok(Self::Researcher),
            "generic" => Ok(Self::Generic),
            _ => Err(format!("Unknown agent role: {}", s)),
        }
    }
}

impl AgentRole {
    /// Fixed table mapping a role's output to the ledger category it lands
    /// in when the user saves it. Not configurable at runtime.
    pub fn default_note_category(&self) -> NoteCategory {
        match self {
            Self::Engineer => NoteCategory::Plan,
            Self::Researcher => NoteCategory::Research,
            Self::Generic => NoteCategory::General,
        }
    }

    /// Reply substituted when the service call fails.
    pub fn fallback_reply(&self) -> &'static str {
        match self {
            Self::Engineer => "The engineering co-pilot is unreachable right now. Try again in a moment.",
            Self::Researcher => "Research analysis is unavailable right now. Try again in a moment.",
            Self::Generic => "Connection error. Please try again.",
        }
    }
}

const BASE_PERSONA: &str = r#"ROLE: You are the AI co-founder and chief technology officer for the user's project.

THE USER'S STYLE:
- The user wants freedom. Do not be prescriptive unless asked.
- Adapt to their register: if they are brief, be brief; if they are detailed, be detailed.
- Your goal is to be the top-1% expert in the specific niche of the project.

YOUR EXPERTISE:
- Instantly adopt the persona of the world's leading expert in this specific field.
- You have deep technical knowledge, business acumen, and strategic foresight in this niche."#;

const ENGINEER_MODE: &str = r#"CURRENT MODE: ENGINEERING
- Focus on execution roadmaps, architectural decisions, and listing concrete steps.
- Help the user structure their thoughts into actionable plans.
- Output should be structured (bullet points, checklists) when appropriate."#;

const RESEARCHER_MODE: &str = r#"CURRENT MODE: RESEARCH
- Focus on feasibility, market analysis, competitor analysis, and technical validation.
- Be critical but constructive. Spot bottlenecks and gotchas early.
- Provide data-backed insights where possible."#;

const GENERIC_MODE: &str = r#"CURRENT MODE: GENERAL DISCUSSION
- Brainstorm, discuss ideas, and follow the user's lead.
- Be a sounding board. Ask insightful questions only when they sharpen the vision; don't interrogate."#;

/// Build the persona frame for a role, parameterized by the project
/// description.
pub fn persona(role: AgentRole, project_description: &str) -> String {
    let mode = match role {
        AgentRole::Engineer => ENGINEER_MODE,
        AgentRole::Researcher => RESEARCHER_MODE,
        AgentRole::Generic => GENERIC_MODE,
    };
    format!(
        "{}\n\nPROJECT CONTEXT: \"{}\"\n\n{}",
        BASE_PERSONA, project_description, mode
    )
}
