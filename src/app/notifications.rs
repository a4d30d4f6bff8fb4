//! Transient feedback notifications: toasts and alerts.
//!
//! The lifecycle is an explicit state machine, entering → visible → exiting
//! → destroyed, advanced only by [`NotificationCenter::tick`] against each
//! notification's own phase clock. There are no detached timers, so a
//! dismiss-then-recreate sequence can never leave a stale callback mutating
//! a removed notification.
//!
//! Toasts stack freely and auto-dismiss; the hold clock starts once the
//! enter phase completes, not concurrently with it. Alerts persist until
//! explicit dismissal and are exclusive: enqueueing a new alert sends any
//! active one straight to its exit phase.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Duration of the toast enter transition.
pub const TOAST_ENTER: Duration = Duration::from_millis(500);
/// How long a toast holds on screen after entering.
pub const TOAST_HOLD: Duration = Duration::from_millis(3000);
/// Duration of the toast exit transition.
pub const TOAST_EXIT: Duration = Duration::from_millis(300);
/// Duration of the alert enter transition.
pub const ALERT_ENTER: Duration = Duration::from_millis(400);
/// Duration of the alert exit transition.
pub const ALERT_EXIT: Duration = Duration::from_millis(300);

/// Notification kinds with distinct lifecycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Non-blocking, auto-dismissing after a fixed hold.
    Toast,
    /// Blocking, centered, dismissed only explicitly.
    Alert,
}

/// Lifecycle phase of a live notification.
///
/// Destroyed notifications are removed from the center rather than kept in a
/// terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Animating in.
    Entering,
    /// Fully on screen.
    Visible,
    /// Animating out; removed once the exit duration elapses.
    Exiting,
}

/// Handle identifying an enqueued notification for dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationId(u64);

/// A live notification.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    /// Toast or alert.
    pub kind: NotificationKind,
    /// Heading (alerts only).
    pub title: Option<String>,
    /// Body text.
    pub body: String,
    /// Wall-clock creation time.
    pub created_at: DateTime<Local>,
    /// Current lifecycle phase.
    pub phase: NotificationPhase,
    pub(crate) phase_since: Instant,
}

impl Notification {
    /// Returns this notification's handle.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }
}

/// Owns all live notifications and advances their lifecycles.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    /// Creates an empty center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues an auto-dismissing toast.
    pub fn enqueue_toast(&mut self, body: impl Into<String>) -> NotificationId {
        self.push(NotificationKind::Toast, None, body.into())
    }

    /// Enqueues a blocking alert, replacing any active one.
    pub fn enqueue_alert(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> NotificationId {
        // Alerts are exclusive: the previous one exits immediately.
        let active: Vec<NotificationId> = self
            .items
            .iter()
            .filter(|n| n.kind == NotificationKind::Alert && n.phase != NotificationPhase::Exiting)
            .map(|n| n.id)
            .collect();
        for id in active {
            self.dismiss(id);
        }
        self.push(NotificationKind::Alert, Some(title.into()), body.into())
    }

    fn push(
        &mut self,
        kind: NotificationKind,
        title: Option<String>,
        body: String,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            title,
            body,
            created_at: Local::now(),
            phase: NotificationPhase::Entering,
            phase_since: Instant::now(),
        });
        id
    }

    /// Starts the exit transition for the given notification.
    ///
    /// Idempotent: dismissing an already-exiting or removed notification
    /// does nothing.
    pub fn dismiss(&mut self, id: NotificationId) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id)
            && item.phase != NotificationPhase::Exiting
        {
            item.phase = NotificationPhase::Exiting;
            item.phase_since = Instant::now();
        }
    }

    /// Dismisses the alert currently blocking the page, if any.
    pub fn dismiss_active_alert(&mut self) {
        if let Some(id) = self.active_alert().map(Notification::id) {
            self.dismiss(id);
        }
    }

    /// Advances every notification's lifecycle to `now`.
    ///
    /// This is the only place phase transitions happen, so dismissal cannot
    /// race a pending timer.
    pub fn tick(&mut self, now: Instant) {
        for item in &mut self.items {
            loop {
                let elapsed = now.saturating_duration_since(item.phase_since);
                let advanced = match (item.phase, item.kind) {
                    (NotificationPhase::Entering, NotificationKind::Toast)
                        if elapsed >= TOAST_ENTER =>
                    {
                        item.phase = NotificationPhase::Visible;
                        item.phase_since += TOAST_ENTER;
                        true
                    }
                    (NotificationPhase::Entering, NotificationKind::Alert)
                        if elapsed >= ALERT_ENTER =>
                    {
                        item.phase = NotificationPhase::Visible;
                        item.phase_since += ALERT_ENTER;
                        true
                    }
                    // The hold starts after the enter transition completes.
                    (NotificationPhase::Visible, NotificationKind::Toast)
                        if elapsed >= TOAST_HOLD =>
                    {
                        item.phase = NotificationPhase::Exiting;
                        item.phase_since += TOAST_HOLD;
                        true
                    }
                    // Alerts have no automatic timeout.
                    _ => false,
                };
                if !advanced {
                    break;
                }
            }
        }
        self.items.retain(|item| {
            item.phase != NotificationPhase::Exiting
                || now.saturating_duration_since(item.phase_since) < exit_duration(item.kind)
        });
    }

    /// Returns the toasts currently on screen, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Notification> {
        self.items
            .iter()
            .filter(|n| n.kind == NotificationKind::Toast)
    }

    /// Returns the alert currently blocking the page, if any.
    ///
    /// An exiting alert no longer blocks.
    #[must_use]
    pub fn active_alert(&self) -> Option<&Notification> {
        self.items
            .iter()
            .find(|n| n.kind == NotificationKind::Alert && n.phase != NotificationPhase::Exiting)
    }

    /// Returns the number of live notifications (any phase).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no notifications are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a live notification by handle.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Backdates a notification's phase clock, for driving lifecycles in
    /// tests without sleeping.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, id: NotificationId, by: Duration) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.phase_since -= by;
        }
    }
}

const fn exit_duration(kind: NotificationKind) -> Duration {
    match kind {
        NotificationKind::Toast => TOAST_EXIT,
        NotificationKind::Alert => ALERT_EXIT,
    }
}
