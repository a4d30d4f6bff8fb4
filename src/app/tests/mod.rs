//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `auth` - Auth modal, tab switching, and outcome handling
//! - `chat` - Chat widget, transcript, and reply handling
//! - `helpers` - Shared test utilities
//! - `panels` - Panel visibility and mouse hit-testing
//! - `selection` - Mood selection and feedback toasts
//! - `ui` - Rendering to a test backend

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod ui;
