//! Daily reflective quote picker.
//!
//! # Invariants
//! - Selection is deterministic per calendar day (day-of-year modulo list
//!   length), so the quote is stable across app restarts within a day.

use chrono::{Datelike, NaiveDate};

/// One reflective quote with attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const QUOTES: &[Quote] = &[
    Quote {
        text: "Nature does not hurry, yet everything is accomplished.",
        author: "Lao Tzu",
    },
    Quote {
        text: "Smile, breathe and go slowly.",
        author: "Thich Nhat Hanh",
    },
    Quote {
        text: "The quieter you become, the more you are able to hear.",
        author: "Rumi",
    },
    Quote {
        text: "You have power over your mind, not outside events. Realize this, and you will find strength.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "A journey of a thousand miles begins with a single step.",
        author: "Lao Tzu",
    },
    Quote {
        text: "Wherever you are, be there totally.",
        author: "Eckhart Tolle",
    },
    Quote {
        text: "Feelings come and go like clouds in a windy sky. Conscious breathing is my anchor.",
        author: "Thich Nhat Hanh",
    },
    Quote {
        text: "The best time to plant a tree was twenty years ago. The second best time is now.",
        author: "Chinese proverb",
    },
    Quote {
        text: "Very little is needed to make a happy life; it is all within yourself, in your way of thinking.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "When you realize nothing is lacking, the whole world belongs to you.",
        author: "Lao Tzu",
    },
    Quote {
        text: "Each morning we are born again. What we do today is what matters most.",
        author: "Buddhist saying",
    },
    Quote {
        text: "Yesterday I was clever, so I wanted to change the world. Today I am wise, so I am changing myself.",
        author: "Rumi",
    },
];

/// Picks the quote for a calendar day.
pub fn quote_for_date(date: NaiveDate) -> &'static Quote {
    &QUOTES[date.ordinal0() as usize % QUOTES.len()]
}
