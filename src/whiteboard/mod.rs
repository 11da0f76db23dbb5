//! Whiteboard context accumulation
//!
//! The whiteboard is the single source of truth for "what is known about
//! this project". This module grows it: initial synthesis from the wizard's
//! idea + Q&A, incremental refinement as new facts arrive, and proactive
//! clarifying questions. Every operation degrades to a safe value on
//! service failure — refinement in particular never corrupts or blanks the
//! existing document.

pub mod accumulator;
pub mod prompts;

pub use accumulator::{ContextAccumulator, QaPair};
