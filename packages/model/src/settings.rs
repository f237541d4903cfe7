use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Keys not modelled by a typed struct, kept verbatim
pub type Extra = serde_json::Map<String, serde_json::Value>;

pub const DEFAULT_TEXT: &str = "Create Stunning Headlines";
pub const DEFAULT_FONT_SIZE: u32 = 48;
pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";

/// Colors used when a gradient has no usable color list
pub const DEFAULT_GRADIENT_COLORS: [&str; 2] = ["#667eea", "#764ba2"];

/// Color appended by "add color" and used to pad sparse index writes
pub const NEW_GRADIENT_COLOR: &str = "#667eea";

pub const MIN_GRADIENT_COLORS: usize = 2;
pub const MAX_GRADIENT_COLORS: usize = 5;

/// Word color that counts as "no custom color"
pub const DEFAULT_WORD_COLOR: &str = "#ffffff";

/// Root settings document
///
/// Branches are shared behind `Arc`, so a path update only copies the
/// containers it walks through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadlineSettings {
    pub text: String,
    pub font_size: u32,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub gradient: Arc<GradientSettings>,
    pub effects: Arc<EffectSettings>,
    pub word_styling: Arc<WordStyling>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for HeadlineSettings {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_weight: FontWeight::Bold,
            gradient: Arc::new(GradientSettings::default()),
            effects: Arc::new(EffectSettings::default()),
            word_styling: Arc::new(WordStyling::default()),
            extra: Extra::new(),
        }
    }
}

impl HeadlineSettings {
    /// Words of the headline, split on single spaces
    ///
    /// Word-styling indices are positions into this sequence. Consecutive
    /// spaces produce empty words, matching how the indices were assigned.
    pub fn words(&self) -> Vec<&str> {
        self.text.split(' ').collect()
    }

    /// Override entry for a word, if one was ever created
    pub fn word_style(&self, index: usize) -> Option<&WordStyle> {
        self.word_styling.get(index)
    }
}

/// Font weights offered by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "300")]
    Light,
    #[serde(rename = "400")]
    Regular,
    #[serde(rename = "500")]
    Medium,
    #[serde(rename = "600")]
    SemiBold,
    #[serde(rename = "700")]
    #[default]
    Bold,
    #[serde(rename = "800")]
    ExtraBold,
    /// Not offered by the picker; typography presets emit it
    #[serde(rename = "900")]
    Black,
}

impl FontWeight {
    pub const SELECTABLE: [FontWeight; 6] = [
        FontWeight::Light,
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::SemiBold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Light => "300",
            FontWeight::Regular => "400",
            FontWeight::Medium => "500",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "700",
            FontWeight::ExtraBold => "800",
            FontWeight::Black => "900",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    #[default]
    Right,
    Left,
    Up,
    Down,
}

impl GradientDirection {
    /// `linear-gradient` direction keyword
    pub fn css_keyword(self) -> &'static str {
        match self {
            GradientDirection::Right => "to right",
            GradientDirection::Left => "to left",
            GradientDirection::Down => "to bottom",
            GradientDirection::Up => "to top",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientSettings {
    pub enabled: bool,
    pub direction: GradientDirection,
    pub colors: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for GradientSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: GradientDirection::Right,
            colors: DEFAULT_GRADIENT_COLORS.iter().map(|c| c.to_string()).collect(),
            extra: Extra::new(),
        }
    }
}

impl GradientSettings {
    /// Colors to paint with; an empty list falls back to the defaults
    pub fn effective_colors(&self) -> Vec<&str> {
        if self.colors.is_empty() {
            DEFAULT_GRADIENT_COLORS.to_vec()
        } else {
            self.colors.iter().map(String::as_str).collect()
        }
    }
}

/// Independent effect toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectSettings {
    pub fade_in: bool,
    pub hover_glow: bool,
    pub letter_animation: bool,
    pub text_shadow: bool,
    pub outline: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            fade_in: true,
            hover_glow: true,
            letter_animation: false,
            text_shadow: false,
            outline: false,
            extra: Extra::new(),
        }
    }
}

impl EffectSettings {
    pub fn get(&self, effect: Effect) -> bool {
        match effect {
            Effect::FadeIn => self.fade_in,
            Effect::HoverGlow => self.hover_glow,
            Effect::LetterAnimation => self.letter_animation,
            Effect::TextShadow => self.text_shadow,
            Effect::Outline => self.outline,
        }
    }

    pub fn set(&mut self, effect: Effect, on: bool) {
        match effect {
            Effect::FadeIn => self.fade_in = on,
            Effect::HoverGlow => self.hover_glow = on,
            Effect::LetterAnimation => self.letter_animation = on,
            Effect::TextShadow => self.text_shadow = on,
            Effect::Outline => self.outline = on,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Effect {
    FadeIn,
    HoverGlow,
    LetterAnimation,
    TextShadow,
    Outline,
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::FadeIn,
        Effect::HoverGlow,
        Effect::LetterAnimation,
        Effect::TextShadow,
        Effect::Outline,
    ];

    /// Field name inside `effects`
    pub fn key(self) -> &'static str {
        match self {
            Effect::FadeIn => "fadeIn",
            Effect::HoverGlow => "hoverGlow",
            Effect::LetterAnimation => "letterAnimation",
            Effect::TextShadow => "textShadow",
            Effect::Outline => "outline",
        }
    }

    pub fn from_key(key: &str) -> Option<Effect> {
        Effect::ALL.into_iter().find(|effect| effect.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Effect::FadeIn => "Fade In Animation",
            Effect::HoverGlow => "Hover Glow Effect",
            Effect::LetterAnimation => "Letter-by-Letter Animation",
            Effect::TextShadow => "Text Shadow",
            Effect::Outline => "Text Outline",
        }
    }
}

/// Per-word override entry
///
/// A missing `color` means the word has no custom color.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordStyle {
    pub highlight: bool,
    pub underline: bool,
    pub background: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl WordStyle {
    pub fn flag(&self, flag: WordFlag) -> bool {
        match flag {
            WordFlag::Highlight => self.highlight,
            WordFlag::Underline => self.underline,
            WordFlag::Background => self.background,
        }
    }

    pub fn set_flag(&mut self, flag: WordFlag, on: bool) {
        match flag {
            WordFlag::Highlight => self.highlight = on,
            WordFlag::Underline => self.underline = on,
            WordFlag::Background => self.background = on,
        }
    }

    /// Color set on the word, ignoring empty strings
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.is_empty())
    }

    /// Color that differs from the default word color
    pub fn custom_color(&self) -> Option<&str> {
        self.color().filter(|c| *c != DEFAULT_WORD_COLOR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordFlag {
    Highlight,
    Underline,
    Background,
}

impl WordFlag {
    pub const ALL: [WordFlag; 3] = [WordFlag::Highlight, WordFlag::Underline, WordFlag::Background];

    pub fn from_key(key: &str) -> Option<WordFlag> {
        WordFlag::ALL.into_iter().find(|flag| flag.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            WordFlag::Highlight => "highlight",
            WordFlag::Underline => "underline",
            WordFlag::Background => "background",
        }
    }
}

/// Sparse map from word index to override entry
///
/// Serialized as a JSON object keyed by decimal strings. Entries are never
/// re-keyed when the text changes, so indices can outlive their words.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordStyling(BTreeMap<usize, Arc<WordStyle>>);

impl WordStyling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&WordStyle> {
        self.0.get(&index).map(Arc::as_ref)
    }

    /// Shared handle to an entry, for identity checks
    pub fn entry(&self, index: usize) -> Option<&Arc<WordStyle>> {
        self.0.get(&index)
    }

    pub fn insert(&mut self, index: usize, style: WordStyle) -> Option<Arc<WordStyle>> {
        self.0.insert(index, Arc::new(style))
    }

    pub fn remove(&mut self, index: usize) -> Option<Arc<WordStyle>> {
        self.0.remove(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &WordStyle)> {
        self.0.iter().map(|(index, style)| (*index, style.as_ref()))
    }
}

impl FromIterator<(usize, WordStyle)> for WordStyling {
    fn from_iter<I: IntoIterator<Item = (usize, WordStyle)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(i, s)| (i, Arc::new(s))).collect())
    }
}

impl Serialize for WordStyling {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, style) in &self.0 {
            map.serialize_entry(&index.to_string(), style.as_ref())?;
        }
        map.end()
    }
}

// Keys are parsed by hand: integer map keys do not survive the buffering
// serde does for structs with flattened fields.
impl<'de> Deserialize<'de> for WordStyling {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WordStylingVisitor;

        impl<'de> Visitor<'de> for WordStylingVisitor {
            type Value = WordStyling;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from word index to word style")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();
                while let Some((key, style)) = access.next_entry::<String, WordStyle>()? {
                    let index = key.parse::<usize>().map_err(|_| {
                        de::Error::custom(format!("word index must be a non-negative integer, got '{}'", key))
                    })?;
                    entries.insert(index, Arc::new(style));
                }
                Ok(WordStyling(entries))
            }
        }

        deserializer.deserialize_map(WordStylingVisitor)
    }
}
