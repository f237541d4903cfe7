//! Letter reveal timing.

use serde::Serialize;
use std::time::Duration;

/// Delay between consecutive letters
pub const LETTER_STAGGER: Duration = Duration::from_millis(30);

/// Entrance duration of a single letter
pub const LETTER_DURATION: Duration = Duration::from_millis(400);

/// Slack added after the last letter starts
pub const REVEAL_BUFFER: Duration = Duration::from_secs(1);

pub const LETTER_EASING: &str = "ease-out";

/// Total time the letter reveal stays on for `text`
///
/// Counts every character of the raw text, separators included, so it runs
/// slightly longer than the last letter's entrance.
pub fn reveal_duration(text: &str) -> Duration {
    LETTER_STAGGER * text.chars().count() as u32 + REVEAL_BUFFER
}

/// Starting pose of a letter before it animates in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterPose {
    pub opacity: f32,
    pub y: f32,
    pub scale: f32,
}

pub const LETTER_INITIAL: LetterPose = LetterPose {
    opacity: 0.0,
    y: 50.0,
    scale: 0.8,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterTiming {
    pub word_index: usize,
    pub letter_index: usize,
    pub letter: String,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: &'static str,
    pub initial: LetterPose,
}

/// Entrance timing for every letter of `words`
///
/// The delay follows the letter's position in the concatenated words, so
/// separators between words add no delay.
pub fn letter_schedule(words: &[&str]) -> Vec<LetterTiming> {
    let mut schedule = Vec::new();
    let mut global_index: u32 = 0;

    for (word_index, word) in words.iter().enumerate() {
        for (letter_index, letter) in word.chars().enumerate() {
            let letter = if letter == ' ' { '\u{00A0}' } else { letter };
            schedule.push(LetterTiming {
                word_index,
                letter_index,
                letter: letter.to_string(),
                delay_ms: (LETTER_STAGGER * global_index).as_millis() as u64,
                duration_ms: LETTER_DURATION.as_millis() as u64,
                easing: LETTER_EASING,
                initial: LETTER_INITIAL,
            });
            global_index += 1;
        }
    }

    schedule
}
