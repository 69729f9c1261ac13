//! Core domain models for scaffold
//!
//! This module defines the fundamental data structures that represent
//! steps, their actions, and run state.

pub mod error;
pub mod state;
pub mod step;

pub use error::*;
pub use state::*;
pub use step::*;
