//! Main application state and logic.
//!
//! This module contains the core App struct and its implementation,
//! organized into submodules:
//! - `state` - Application state structures
//! - `notifications` - Toast/alert lifecycle
//! - `events` - Key, mouse and paste handling
//! - `layout` - Per-frame rect calculation
//! - `render` - UI rendering
//!
//! ## Control flow
//!
//! User interaction mutates the selection or panel state, the notification
//! center and chat transcript reflect the new state into the next frame, and
//! remote calls run as spawned tasks whose outcomes come back as [`UiEvent`]s
//! drained by [`App::process_events`] on the UI thread. All state is owned by
//! the UI thread; nothing is shared or locked.

pub mod events;
mod layout;
pub mod notifications;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

pub use layout::{
    ChatLayout, HomeLayout, MOOD_OPTION_COUNT, PageLayout, TOAST_WIDTH, calculate_alert_rect,
    calculate_auth_modal_rect, calculate_chat_layout, calculate_home_layout,
    calculate_launcher_rect, centered_rect,
};
pub use notifications::{
    Notification, NotificationCenter, NotificationId, NotificationKind, NotificationPhase,
};
pub use state::{
    AuthField, AuthFormState, AuthTab, ChatMessage, ChatSender, ChatState, MoodOption, PanelState,
    ScrollState, UiEvent,
};

use std::time::Instant;

use anyhow::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::remote::{AuthKind, RemoteClient};
use crate::tui::Theme;

/// Channel buffer size for remote-call outcomes.
const EVENT_CHANNEL_SIZE: usize = 64;

/// Fallback bot message when the chatbot call fails in any way.
pub const CHAT_FALLBACK: &str = "Sorry, I am having trouble connecting. Please try again later.";

/// Fixed failure body for login; status codes are never surfaced.
pub const LOGIN_FAILED_BODY: &str = "Invalid username or password.";

/// Fixed failure body for signup.
pub const SIGNUP_FAILED_BODY: &str = "Username may already be taken.";

/// Writes a diagnostic line to stderr when `MINDEASE_DEBUG` is set.
///
/// Failures always degrade to a visible notification; this is the only
/// additional sink.
pub(crate) fn debug_log(message: &str) {
    if std::env::var("MINDEASE_DEBUG").is_ok() {
        eprintln!("[mindease] {message}");
    }
}

/// Main application state.
///
/// Organized into component sub-structs for separation of concerns:
/// - `panels`: auth modal / chat widget visibility
/// - `selected_mood`: the one piece of exclusive selection state
/// - `notifications`: toast and alert lifecycles
/// - `chat`: transcript and composer
/// - `auth_form`: credential fields
/// - `layout`: rects cached once per frame
pub struct App {
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Client for the backend endpoints.
    remote: RemoteClient,
    /// Panel visibility state.
    pub(crate) panels: PanelState,
    /// Currently selected mood, if any. Resets on restart.
    pub(crate) selected_mood: Option<MoodOption>,
    /// Live toasts and alerts.
    pub(crate) notifications: NotificationCenter,
    /// Chat widget state.
    pub(crate) chat: ChatState,
    /// Auth form state.
    pub(crate) auth_form: AuthFormState,
    /// Inspiration cards scroll position.
    pub(crate) inspiration_scroll: ScrollState,
    /// Rects cached by `update_layout`, shared by render and hit-testing.
    pub(crate) layout: PageLayout,
    /// Should quit flag.
    should_quit: bool,

    /// Outcome receiver for spawned remote calls.
    event_rx: mpsc::Receiver<UiEvent>,
    /// Outcome sender, cloned into spawned tasks.
    event_tx: mpsc::Sender<UiEvent>,
}

impl App {
    /// Creates the application against the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(server: &str) -> Result<Self> {
        let remote = RemoteClient::new(server)?;
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        Ok(Self {
            theme: Theme::default(),
            remote,
            panels: PanelState::default(),
            selected_mood: None,
            notifications: NotificationCenter::new(),
            chat: ChatState::default(),
            auth_form: AuthFormState::default(),
            inspiration_scroll: ScrollState::default(),
            layout: PageLayout::default(),
            should_quit: false,
            event_rx,
            event_tx,
        })
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests application shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns the currently selected mood, if any.
    #[must_use]
    pub const fn selected_mood(&self) -> Option<MoodOption> {
        self.selected_mood
    }

    /// Gets the outcome sender (for spawned tasks and tests).
    #[must_use]
    pub fn event_sender(&self) -> mpsc::Sender<UiEvent> {
        self.event_tx.clone()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects a mood option, deselecting any previous one, and enqueues the
    /// option's feedback toast.
    ///
    /// No error condition: only valid options are wired to this action.
    pub fn select_mood(&mut self, option: MoodOption) {
        self.selected_mood = Some(option);
        self.notifications.enqueue_toast(option.feedback());
    }

    // =========================================================================
    // Alerts wired to home affordances
    // =========================================================================

    /// Raises the "Need a Friend" informational alert.
    pub fn need_friend(&mut self) {
        self.notifications.enqueue_alert(
            "🤗 Connecting you to our AI friend...",
            "Our AI assistant is ready to provide emotional support and coping strategies 24/7.",
        );
    }

    /// Raises the "Book Counselor" informational alert.
    pub fn book_counselor(&mut self) {
        self.notifications.enqueue_alert(
            "📚 Booking a counselor session...",
            "Connect with licensed mental health professionals for personalized therapy sessions.",
        );
    }

    // =========================================================================
    // Remote submissions
    // =========================================================================

    /// Submits the chat composer.
    ///
    /// Whitespace-only input is a no-op: no request, no message. Otherwise
    /// the user message is appended and the input cleared immediately
    /// (optimistic; never rolled back), then the request is spawned. The
    /// reply arrives as a [`UiEvent::ChatReply`].
    pub fn submit_chat_input(&mut self) {
        let text = self.chat.input_text().trim().to_string();
        if text.is_empty() {
            return;
        }

        self.chat.push(ChatMessage::user(text.clone()));
        self.chat.clear_input();
        self.chat.in_flight += 1;

        let remote = self.remote.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = remote.submit_chat_message(&text).await;
            let _ = tx.send(UiEvent::ChatReply(outcome)).await;
        });
    }

    /// Submits the auth form against the active tab's endpoint.
    ///
    /// A no-op when either field is empty. The outcome arrives as a
    /// [`UiEvent::AuthOutcome`].
    pub fn submit_auth_form(&mut self) {
        let Some(creds) = self.auth_form.credentials() else {
            return;
        };
        let kind = self.panels.auth_tab().auth_kind();

        let remote = self.remote.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = remote.submit_credentials(kind, &creds).await;
            let _ = tx.send(UiEvent::AuthOutcome { kind, outcome }).await;
        });
    }

    // =========================================================================
    // Event processing
    // =========================================================================

    /// Drains pending remote outcomes and applies them.
    ///
    /// Replies are applied in arrival order, which for overlapping chat
    /// submissions may differ from send order.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Applies a single remote outcome to the UI state.
    pub(crate) fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ChatReply(outcome) => {
                self.chat.in_flight = self.chat.in_flight.saturating_sub(1);
                match outcome {
                    Ok(reply) => self.chat.push(ChatMessage::bot(reply)),
                    Err(e) => {
                        debug_log(&format!("chatbot request failed: {e}"));
                        self.chat.push(ChatMessage::bot(CHAT_FALLBACK));
                    }
                }
            }
            UiEvent::AuthOutcome { kind, outcome } => self.apply_auth_outcome(kind, outcome),
        }
    }

    fn apply_auth_outcome(&mut self, kind: AuthKind, outcome: Result<(), crate::remote::RemoteError>) {
        match (kind, outcome) {
            (AuthKind::Login, Ok(())) => {
                self.notifications
                    .enqueue_alert("Login Successful", "Welcome back!");
                self.panels.close_auth();
                self.auth_form.clear();
            }
            (AuthKind::Login, Err(e)) => {
                debug_log(&format!("login request failed: {e}"));
                self.notifications
                    .enqueue_alert("Login Failed", LOGIN_FAILED_BODY);
            }
            (AuthKind::Signup, Ok(())) => {
                self.notifications
                    .enqueue_alert("Signup Successful", "You can now log in.");
                self.panels.toggle_auth_tab(AuthTab::Login);
                self.auth_form.clear();
            }
            (AuthKind::Signup, Err(e)) => {
                debug_log(&format!("signup request failed: {e}"));
                self.notifications
                    .enqueue_alert("Signup Failed", SIGNUP_FAILED_BODY);
            }
        }
    }

    // =========================================================================
    // Tick / layout
    // =========================================================================

    /// Advances notification lifecycles and keeps the chat view pinned to
    /// the bottom when auto-scroll is on.
    ///
    /// Called once per main-loop iteration.
    pub fn tick(&mut self) {
        self.notifications.tick(Instant::now());

        if self.panels.chat_open() {
            let width = self.layout.chat.transcript.width as usize;
            let content_len = self.transcript_visual_line_count(width);
            self.chat
                .scroll
                .follow_bottom(content_len, self.layout.chat.transcript_visible_height);
        }
    }

    /// Calculates and caches the per-frame layout.
    ///
    /// Must be called inside the draw closure so rendering and mouse
    /// hit-testing agree on every rect.
    pub fn update_layout(&mut self, area: Rect) {
        self.layout.home = calculate_home_layout(area);
        self.layout.chat = if self.panels.chat_open() {
            calculate_chat_layout(area)
        } else {
            ChatLayout::default()
        };
        self.layout.launcher = if self.panels.launcher_visible() {
            calculate_launcher_rect(area)
        } else {
            Rect::default()
        };
        self.layout.auth_modal = if self.panels.auth_open() {
            calculate_auth_modal_rect(area)
        } else {
            Rect::default()
        };
        self.layout.alert = if self.notifications.active_alert().is_some() {
            calculate_alert_rect(area)
        } else {
            Rect::default()
        };
    }
}
