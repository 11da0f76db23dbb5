//! Role-based agent dispatch
//!
//! Routes free-text user queries to one of several co-founder personas:
//! - `persona`: the role enum, the fixed role→note-category table, and the
//!   persona frame builder
//! - `dispatcher`: context assembly from the project aggregate, stateless
//!   Engineer/Researcher dispatch, and the history-replaying Generic chat

pub mod dispatcher;
pub mod persona;

pub use dispatcher::{AgentDispatcher, AgentRequest, ChatThread, MAX_CONTEXT_NOTES};
pub use persona::AgentRole;
