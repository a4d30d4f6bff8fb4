//! `MindEase` - TUI companion for the campus wellness service.
//!
//! Mood check-ins, inspiration cards, a support chat and login/signup
//! against the MindEase backend, rendered in the terminal.

pub mod app;
pub mod cli;
pub mod content;
pub mod remote;
pub mod tui;
