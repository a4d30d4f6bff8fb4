//! Static page content: inspirational quotes and dashboard sample data.
//!
//! Everything in this module is defined at load time and never mutated.

/// An inspirational quote with its community score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteRecord {
    /// The quote text.
    pub text: &'static str,
    /// Attribution (may be "Unknown").
    pub author: &'static str,
    /// Topic category shown on the card header.
    pub category: &'static str,
    /// Score on a 0-10 scale.
    pub score: f64,
}

/// The inspiration card catalog, in display order.
pub const INSPIRATIONAL_QUOTES: &[QuoteRecord] = &[
    QuoteRecord {
        text: "You are braver than you believe, stronger than you seem, and smarter than you think.",
        author: "A.A. Milne",
        category: "Self-Confidence",
        score: 9.5,
    },
    QuoteRecord {
        text: "Mental health is not a destination, but a process. It's about how you drive, not where you're going.",
        author: "Noam Shpancer",
        category: "Mental Health",
        score: 9.8,
    },
    QuoteRecord {
        text: "Your current situation is not your final destination. The best is yet to come.",
        author: "Unknown",
        category: "Hope",
        score: 9.2,
    },
    QuoteRecord {
        text: "It's okay to not be okay. It's not okay to stay that way.",
        author: "Unknown",
        category: "Acceptance",
        score: 9.6,
    },
    QuoteRecord {
        text: "Healing isn't linear. Some days will be harder than others. Be patient with yourself.",
        author: "Unknown",
        category: "Growth",
        score: 9.4,
    },
    QuoteRecord {
        text: "You don't have to be positive all the time. It's perfectly okay to feel sad, angry, annoyed, frustrated, scared, or anxious.",
        author: "Lori Deschene",
        category: "Emotions",
        score: 9.7,
    },
];

/// Weekly mood trend sample data (0-5 scale), Monday through Sunday.
pub const WEEKLY_MOOD_TREND: &[(&str, f64)] = &[
    ("Mon", 3.0),
    ("Tue", 4.0),
    ("Wed", 3.5),
    ("Thu", 4.2),
    ("Fri", 3.8),
    ("Sat", 4.5),
    ("Sun", 4.8),
];

/// Progress toward a wellness activity goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityProgress {
    /// Activity name.
    pub name: &'static str,
    /// Completion percentage (0-100).
    pub percent: u16,
}

/// Activity progress sample data for the dashboard gauges.
pub const ACTIVITY_PROGRESS: &[ActivityProgress] = &[
    ActivityProgress { name: "Meditation", percent: 35 },
    ActivityProgress { name: "Exercise", percent: 30 },
    ActivityProgress { name: "Reading", percent: 20 },
];
