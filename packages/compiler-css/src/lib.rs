//! # Headline Style Resolver
//!
//! Pure functions from a [`HeadlineSettings`](headline_model::HeadlineSettings)
//! to render styles. Nothing is cached; callers re-resolve on every read.
//!
//! - [`resolve_headline_style`]: the container style (typography, gradient
//!   fill, shadow, outline)
//! - [`resolve_word_style`]: one word's override style
//! - [`letter_schedule`]: entrance timing for the letter reveal
//! - [`resolve_preview_frame`]: fade-in, hover glow and editing affordances

pub mod frame;
pub mod headline;
pub mod letters;
pub mod style;
pub mod word;

pub use frame::{resolve_preview_frame, Cursor, Entrance, PreviewFrame};
pub use headline::{apply_text_fill, gradient_css, resolve_headline_style};
pub use letters::{
    letter_schedule, reveal_duration, LetterPose, LetterTiming, LETTER_DURATION, LETTER_STAGGER,
    REVEAL_BUFFER,
};
pub use style::{Style, StyleProperty};
pub use word::{resolve_word_style, resolve_word_styles, WordRender};
