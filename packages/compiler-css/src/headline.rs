//! Whole-headline style.
//!
//! Rules are applied in a fixed order: base typography, gradient text fill,
//! text shadow, outline. Later rules only add or overwrite.

use crate::style::{Style, StyleProperty};
use headline_model::{GradientSettings, HeadlineSettings};
use tracing::trace;

pub const LINE_HEIGHT: &str = "1.2";
pub const TEXT_SHADOW: &str = "0 4px 20px rgba(0,0,0,0.3)";
pub const TEXT_STROKE: &str = "2px rgba(255,255,255,0.3)";

/// `linear-gradient(...)` for the gradient settings
pub fn gradient_css(gradient: &GradientSettings) -> String {
    format!(
        "linear-gradient({}, {})",
        gradient.direction.css_keyword(),
        gradient.effective_colors().join(", ")
    )
}

/// Paint `image` as a background clipped to the glyphs, with a transparent
/// text fill so the background shows through
pub fn apply_text_fill(style: &mut Style, image: String) {
    style
        .set(StyleProperty::BackgroundImage, image)
        .set(StyleProperty::WebkitBackgroundClip, "text")
        .set(StyleProperty::WebkitTextFillColor, "transparent")
        .set(StyleProperty::BackgroundClip, "text");
}

/// Resolve the style of the headline container
pub fn resolve_headline_style(settings: &HeadlineSettings) -> Style {
    let mut style = Style::new();

    style
        .set(StyleProperty::FontSize, format!("{}px", settings.font_size))
        .set(StyleProperty::FontFamily, settings.font_family.as_str())
        .set(StyleProperty::FontWeight, settings.font_weight.as_str())
        .set(StyleProperty::LineHeight, LINE_HEIGHT);

    if settings.gradient.enabled {
        apply_text_fill(&mut style, gradient_css(&settings.gradient));
    }

    if settings.effects.text_shadow {
        style.set(StyleProperty::TextShadow, TEXT_SHADOW);
    }

    if settings.effects.outline {
        style.set(StyleProperty::WebkitTextStroke, TEXT_STROKE);
    }

    trace!(properties = style.len(), "Resolved headline style");
    style
}
