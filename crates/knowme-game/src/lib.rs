//! knowme — game session bounded context.
//!
//! Owns the `GameSession` aggregate: session lifecycle, question
//! progression, choice/guess recording, and guess scoring.

pub mod application;
pub mod domain;
