//! Per-word style overrides.
//!
//! Branches are exclusive and checked in order: background, highlight,
//! custom color without gradient, custom color with gradient, no color.
//! Underline is added on top of whichever branch matched. A word colored
//! with the default white matches no branch and gets no color rule.
//!
//! Background and highlight paint an opaque box, so they switch the
//! clip-to-text fill off for the word. A color-only override keeps the
//! clip-to-text fill and paints a flat two-stop gradient instead, so the
//! word renders through the same path as its neighbours.

use crate::headline::apply_text_fill;
use crate::style::{Style, StyleProperty};
use headline_model::{HeadlineSettings, WordStyle, DEFAULT_WORD_COLOR};
use serde::Serialize;

pub const BACKGROUND_FILL: &str = "#000000";
pub const HIGHLIGHT_FILL: &str = "#fde047";
pub const HIGHLIGHT_TEXT: &str = "#000000";

/// Resolve the override style for one word
pub fn resolve_word_style(word: Option<&WordStyle>, gradient_enabled: bool) -> Style {
    let mut style = Style::new();
    let Some(word) = word else {
        apply_inherited_color(&mut style, gradient_enabled);
        return style;
    };

    if word.background {
        paint_box(
            &mut style,
            BACKGROUND_FILL,
            word.color().unwrap_or(DEFAULT_WORD_COLOR),
            "2px 8px",
        );
    } else if word.highlight {
        paint_box(
            &mut style,
            HIGHLIGHT_FILL,
            word.color().unwrap_or(HIGHLIGHT_TEXT),
            "1px 4px",
        );
    } else if let Some(color) = word.custom_color() {
        if gradient_enabled {
            apply_text_fill(&mut style, format!("linear-gradient(to right, {}, {})", color, color));
        } else {
            style.set(StyleProperty::Color, color);
        }
    } else if word.color().is_none() {
        apply_inherited_color(&mut style, gradient_enabled);
    }

    if word.underline {
        style
            .set(StyleProperty::TextDecoration, "underline")
            .set(StyleProperty::TextDecorationThickness, "2px")
            .set(StyleProperty::TextUnderlineOffset, "2px");
    }

    style
}

fn paint_box(style: &mut Style, fill: &str, text: &str, padding: &str) {
    style
        .set(StyleProperty::BackgroundColor, fill)
        .set(StyleProperty::Color, text)
        .set(StyleProperty::Padding, padding)
        .set(StyleProperty::BorderRadius, "4px")
        .set(StyleProperty::BackgroundClip, "unset")
        .set(StyleProperty::WebkitBackgroundClip, "unset")
        .set(StyleProperty::WebkitTextFillColor, text);
}

// With a gradient the word inherits the parent fill untouched. Without one,
// force `inherit` so a transparent fill left over from gradient mode never
// leaks into the word.
fn apply_inherited_color(style: &mut Style, gradient_enabled: bool) {
    if !gradient_enabled {
        style.set(StyleProperty::Color, "inherit");
    }
}

/// A word ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRender {
    pub index: usize,
    pub text: String,
    pub style: Style,
    pub selected: bool,
}

/// Resolve every word of the headline
pub fn resolve_word_styles(settings: &HeadlineSettings, selected: Option<usize>) -> Vec<WordRender> {
    let gradient_enabled = settings.gradient.enabled;

    settings
        .words()
        .into_iter()
        .enumerate()
        .map(|(index, text)| WordRender {
            index,
            text: text.to_string(),
            style: resolve_word_style(settings.word_style(index), gradient_enabled),
            selected: selected == Some(index),
        })
        .collect()
}
