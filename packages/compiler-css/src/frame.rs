//! Presentation of the element wrapping the headline.

use headline_model::EffectSettings;
use serde::Serialize;

pub const HOVER_GLOW_FILTER: &str = "drop-shadow(0 0 30px rgba(255,255,255,0.3))";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entrance {
    pub from_opacity: f32,
    pub from_y: f32,
    pub duration_ms: u64,
    pub easing: &'static str,
}

pub const FADE_IN_ENTRANCE: Entrance = Entrance {
    from_opacity: 0.0,
    from_y: 30.0,
    duration_ms: 800,
    easing: "ease-out",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Text,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewFrame {
    /// Entrance played when the frame mounts, if fade-in is on
    pub entrance: Option<Entrance>,
    /// Filter applied while hovered, if hover glow is on
    pub hover_filter: Option<&'static str>,
    pub cursor: Cursor,
    pub content_editable: bool,
}

pub fn resolve_preview_frame(effects: &EffectSettings, editable: bool) -> PreviewFrame {
    PreviewFrame {
        entrance: effects.fade_in.then_some(FADE_IN_ENTRANCE),
        hover_filter: effects.hover_glow.then_some(HOVER_GLOW_FILTER),
        cursor: if editable { Cursor::Text } else { Cursor::Default },
        content_editable: editable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_effects_frame() {
        let frame = resolve_preview_frame(&EffectSettings::default(), true);

        assert_eq!(frame.entrance, Some(FADE_IN_ENTRANCE));
        assert_eq!(frame.hover_filter, Some(HOVER_GLOW_FILTER));
        assert_eq!(frame.cursor, Cursor::Text);
        assert!(frame.content_editable);
    }

    #[test]
    fn test_locked_frame_without_effects() {
        let effects = EffectSettings {
            fade_in: false,
            hover_glow: false,
            ..Default::default()
        };
        let frame = resolve_preview_frame(&effects, false);

        assert_eq!(frame.entrance, None);
        assert_eq!(frame.hover_filter, None);
        assert_eq!(frame.cursor, Cursor::Default);
        assert!(!frame.content_editable);
    }
}
