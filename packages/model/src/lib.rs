//! # Headline Model
//!
//! The settings document edited by the headline editor: text, typography,
//! gradient, effect toggles and sparse per-word overrides.
//!
//! Everything downstream (style resolution, embed compilation, the editor
//! session) reads these types. Mutation happens in `headline-editor`.

pub mod fonts;
pub mod settings;

pub use fonts::{is_known_family, FONT_FAMILIES};
pub use settings::{
    Effect, EffectSettings, Extra, FontWeight, GradientDirection, GradientSettings,
    HeadlineSettings, WordFlag, WordStyle, WordStyling, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_GRADIENT_COLORS, DEFAULT_TEXT, DEFAULT_WORD_COLOR, MAX_GRADIENT_COLORS,
    MIN_GRADIENT_COLORS, NEW_GRADIENT_COLOR,
};
