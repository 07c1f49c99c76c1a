// Copy shown on the proposal card.

pub const DEFAULT_PROMPT: &str = "Will you be my Valentine?";

pub const DECLINE_MESSAGES: &[&str] = &[
    "Really no? 🥺",
    "That hurt a little… 😔",
    "My heart is cracking 💔",
    "Okay but… concerts?? 🎶",
    "Food dates tho? 🍕🍰",
    "World tour together?? ✈️🌍",
];

pub const GIVING_UP_MESSAGE: &str = "Okay… I'll stop asking now 🥺💔";

pub const CELEBRATION_TITLE: &str = "She Said YES 💖";
pub const CELEBRATION_SUBTITLE: &str = "A love story, perfectly balanced ✓";
pub const CELEBRATION_SIGNOFF: &str = "I Love you 3000!";

/// Message for the card after `decline_count` declines.
#[inline]
pub fn message_for(decline_count: u32) -> &'static str {
    match decline_count as usize {
        0 => DEFAULT_PROMPT,
        n if n <= DECLINE_MESSAGES.len() => DECLINE_MESSAGES[n - 1],
        _ => GIVING_UP_MESSAGE,
    }
}

/// Whether the decline that produced `decline_count` still gets the sad rain.
#[inline]
pub fn decline_is_within_script(decline_count: u32) -> bool {
    decline_count >= 1 && decline_count as usize <= DECLINE_MESSAGES.len()
}
