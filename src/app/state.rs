//! Application state structures.
//!
//! This module contains the state definitions for the different parts of the
//! page:
//!
//! - **`MoodOption`**: The fixed set of mood check-in choices
//! - **`PanelState`**: Visibility of the auth modal, its tabs, and the chat widget
//! - **`AuthFormState`**: Login/signup form fields and focus
//! - **`ChatState`**: Append-only chat transcript plus the input composer
//! - **`UiEvent`**: Outcomes of remote calls delivered back to the UI thread
//!
//! ## Selection
//!
//! At most one mood option is selected at a time; selecting a new option
//! replaces the previous selection atomically (there is no intermediate
//! state with two selections). Selection resets on restart.
//!
//! ## Panels
//!
//! Each panel is independently boolean-visible except the login/signup forms,
//! which are mutually exclusive while the modal is open, and the chat
//! launcher, which is the exact complement of the chat widget.

use tui_textarea::TextArea;

use crate::remote::{AuthKind, Credentials, RemoteError};

/// The fixed, mutually-exclusive set of mood check-in options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodOption {
    /// Feeling great.
    Excellent,
    /// Doing well.
    Good,
    /// Neither good nor bad.
    Okay,
    /// Feeling down.
    Low,
    /// Having a hard time.
    Struggling,
}

impl MoodOption {
    /// Returns all options in display order.
    #[must_use]
    pub fn all() -> &'static [MoodOption] {
        &[
            MoodOption::Excellent,
            MoodOption::Good,
            MoodOption::Okay,
            MoodOption::Low,
            MoodOption::Struggling,
        ]
    }

    /// Returns the display label for this option.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::Low => "Low",
            Self::Struggling => "Struggling",
        }
    }

    /// Returns the emoji shown on the mood card.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Excellent => "😄",
            Self::Good => "🙂",
            Self::Okay => "😐",
            Self::Low => "😔",
            Self::Struggling => "😢",
        }
    }

    /// Returns the feedback message shown as a toast after selection.
    #[must_use]
    pub const fn feedback(self) -> &'static str {
        match self {
            Self::Excellent => "That's wonderful! Keep up the positive energy! 🌟",
            Self::Good => "Great to hear you're doing well! 😊",
            Self::Okay => "It's perfectly normal to feel okay. Take care of yourself! 💚",
            Self::Low => "I understand you're feeling low. Remember, it's temporary. 🤗",
            Self::Struggling => "Thank you for being honest. You're not alone in this. 💙",
        }
    }

    /// Returns the option wired to the given digit key (1-5), if any.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Excellent),
            '2' => Some(Self::Good),
            '3' => Some(Self::Okay),
            '4' => Some(Self::Low),
            '5' => Some(Self::Struggling),
            _ => None,
        }
    }
}

/// The two tabs of the auth modal. Initial state: login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    /// Login form visible.
    #[default]
    Login,
    /// Signup form visible.
    Signup,
}

impl AuthTab {
    /// Returns the other tab.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Returns the tab-selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }

    /// Returns the credential endpoint this tab submits to.
    #[must_use]
    pub const fn auth_kind(self) -> AuthKind {
        match self {
            Self::Login => AuthKind::Login,
            Self::Signup => AuthKind::Signup,
        }
    }
}

/// Focusable fields within the auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    /// Username input.
    #[default]
    Username,
    /// Password input.
    Password,
}

impl AuthField {
    /// Returns the other field.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Visibility state for the auth modal and the chat widget.
///
/// The chat launcher is not stored: it is visible exactly when the chat
/// widget is not, so the two can never disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    auth_open: bool,
    auth_tab: AuthTab,
    chat_open: bool,
}

impl PanelState {
    /// Returns true if the auth modal is open.
    #[must_use]
    pub const fn auth_open(&self) -> bool {
        self.auth_open
    }

    /// Returns the currently active auth tab.
    #[must_use]
    pub const fn auth_tab(&self) -> AuthTab {
        self.auth_tab
    }

    /// Returns true if the chat widget is open.
    #[must_use]
    pub const fn chat_open(&self) -> bool {
        self.chat_open
    }

    /// Returns true if the chat launcher affordance is visible.
    #[must_use]
    pub const fn launcher_visible(&self) -> bool {
        !self.chat_open
    }

    /// Opens the auth modal. The active tab is retained across openings.
    pub fn open_auth(&mut self) {
        self.auth_open = true;
    }

    /// Closes the auth modal.
    ///
    /// The close affordance and a backdrop click both route here; the two
    /// are equivalent operations.
    pub fn close_auth(&mut self) {
        self.auth_open = false;
    }

    /// Makes the chosen tab's form visible and the other hidden, updating
    /// the mutually exclusive tab highlight to match.
    pub fn toggle_auth_tab(&mut self, tab: AuthTab) {
        self.auth_tab = tab;
    }

    /// Opens the chat widget (hiding the launcher).
    pub fn open_chat(&mut self) {
        self.chat_open = true;
    }

    /// Closes the chat widget (revealing the launcher).
    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    /// The local user.
    User,
    /// The remote bot.
    Bot,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Message author.
    pub sender: ChatSender,
    /// Message text.
    pub text: String,
}

impl ChatMessage {
    /// Creates a user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::User,
            text: text.into(),
        }
    }

    /// Creates a bot message.
    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::Bot,
            text: text.into(),
        }
    }
}

/// Scroll state for a transcript panel, combining position and
/// stick-to-bottom behavior.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset in visual lines from the top.
    pub offset: usize,
    /// Whether to follow new content at the bottom.
    /// Cleared when the user scrolls up, restored when they reach bottom.
    pub auto_scroll: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }
}

impl ScrollState {
    /// Scrolls up by one line, disabling auto-scroll.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
        self.auto_scroll = false;
    }

    /// Scrolls down by one line, re-enabling auto-scroll at the bottom.
    pub fn scroll_down(&mut self, content_len: usize, visible_height: usize) {
        let max_scroll = content_len.saturating_sub(visible_height);
        self.offset = (self.offset + 1).min(max_scroll);
        self.auto_scroll = self.offset >= max_scroll;
    }

    /// Snaps to the bottom if auto-scroll is enabled.
    pub fn follow_bottom(&mut self, content_len: usize, visible_height: usize) {
        if self.auto_scroll {
            self.offset = content_len.saturating_sub(visible_height);
        }
    }
}

/// State for the chat widget.
///
/// The transcript is an ordered, append-only sequence for the session;
/// there is no clear operation.
pub struct ChatState {
    /// The visible transcript, in append order.
    pub transcript: Vec<ChatMessage>,
    /// The input composer.
    pub input: TextArea<'static>,
    /// Transcript scroll position.
    pub scroll: ScrollState,
    /// Number of requests currently in flight. Replies may arrive in any
    /// order; this only drives the typing indicator.
    pub in_flight: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut input = TextArea::default();
        input.set_placeholder_text("Type your message...");
        Self {
            transcript: Vec::new(),
            input,
            scroll: ScrollState::default(),
            in_flight: 0,
        }
    }
}

impl ChatState {
    /// Collects the composer text into a single line.
    #[must_use]
    pub fn input_text(&self) -> String {
        self.input.lines().join(" ")
    }

    /// Clears the composer.
    pub fn clear_input(&mut self) {
        let mut input = TextArea::default();
        input.set_placeholder_text("Type your message...");
        self.input = input;
    }

    /// Appends a message and keeps the view pinned to the bottom.
    pub fn push(&mut self, message: ChatMessage) {
        self.transcript.push(message);
        self.scroll.auto_scroll = true;
    }
}

/// State for the auth form within the modal.
///
/// Login and signup share one field pair since only one form is visible at a
/// time; switching tabs clears both fields.
pub struct AuthFormState {
    /// Username input.
    pub username: TextArea<'static>,
    /// Password input (masked).
    pub password: TextArea<'static>,
    /// Which field has focus.
    pub focus: AuthField,
}

impl Default for AuthFormState {
    fn default() -> Self {
        let mut username = TextArea::default();
        username.set_placeholder_text("Username");
        let mut password = TextArea::default();
        password.set_placeholder_text("Password");
        password.set_mask_char('•');
        Self {
            username,
            password,
            focus: AuthField::default(),
        }
    }
}

impl AuthFormState {
    /// Moves focus to the other field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
    }

    /// Returns the focused field's textarea.
    pub fn focused_input(&mut self) -> &mut TextArea<'static> {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }

    /// Captures the current field values as credentials.
    ///
    /// Returns `None` when either field is empty; submission is a no-op in
    /// that case.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        let username = self.username.lines().join("").trim().to_string();
        let password = self.password.lines().join("");
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Credentials { username, password })
    }

    /// Clears both fields and resets focus.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcomes of remote calls, sent back to the UI thread over the event
/// channel and applied in `App::process_events`.
#[derive(Debug)]
pub enum UiEvent {
    /// A credential submission finished.
    AuthOutcome {
        /// Which endpoint was hit.
        kind: AuthKind,
        /// Success, or the collapsed failure.
        outcome: Result<(), RemoteError>,
    },
    /// A chat submission finished. Delivered in arrival order, which may
    /// differ from send order when submissions overlap.
    ChatReply(Result<String, RemoteError>),
}
