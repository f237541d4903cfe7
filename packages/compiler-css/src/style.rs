use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Style properties the resolver can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    FontSize,
    FontFamily,
    FontWeight,
    LineHeight,
    BackgroundColor,
    BackgroundImage,
    WebkitBackgroundClip,
    BackgroundClip,
    Color,
    WebkitTextFillColor,
    TextShadow,
    WebkitTextStroke,
    Padding,
    BorderRadius,
    TextDecoration,
    TextDecorationThickness,
    TextUnderlineOffset,
}

impl StyleProperty {
    /// Property name as written in CSS text
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::LineHeight => "line-height",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::BackgroundImage => "background-image",
            StyleProperty::WebkitBackgroundClip => "-webkit-background-clip",
            StyleProperty::BackgroundClip => "background-clip",
            StyleProperty::Color => "color",
            StyleProperty::WebkitTextFillColor => "-webkit-text-fill-color",
            StyleProperty::TextShadow => "text-shadow",
            StyleProperty::WebkitTextStroke => "-webkit-text-stroke",
            StyleProperty::Padding => "padding",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::TextDecoration => "text-decoration",
            StyleProperty::TextDecorationThickness => "text-decoration-thickness",
            StyleProperty::TextUnderlineOffset => "text-underline-offset",
        }
    }

    /// Property name as used by DOM style objects
    pub fn dom_name(self) -> &'static str {
        match self {
            StyleProperty::FontSize => "fontSize",
            StyleProperty::FontFamily => "fontFamily",
            StyleProperty::FontWeight => "fontWeight",
            StyleProperty::LineHeight => "lineHeight",
            StyleProperty::BackgroundColor => "backgroundColor",
            StyleProperty::BackgroundImage => "backgroundImage",
            StyleProperty::WebkitBackgroundClip => "WebkitBackgroundClip",
            StyleProperty::BackgroundClip => "backgroundClip",
            StyleProperty::Color => "color",
            StyleProperty::WebkitTextFillColor => "WebkitTextFillColor",
            StyleProperty::TextShadow => "textShadow",
            StyleProperty::WebkitTextStroke => "WebkitTextStroke",
            StyleProperty::Padding => "padding",
            StyleProperty::BorderRadius => "borderRadius",
            StyleProperty::TextDecoration => "textDecoration",
            StyleProperty::TextDecorationThickness => "textDecorationThickness",
            StyleProperty::TextUnderlineOffset => "textUnderlineOffset",
        }
    }
}

/// Ordered style declaration list
///
/// Properties keep the position of their first `set`; setting an existing
/// property overwrites its value in place. Output is therefore a function of
/// the sequence of `set` calls only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    declarations: Vec<(StyleProperty, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.get(property).is_some()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Render as the body of a `style` attribute
    pub fn to_inline_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{}: {};", p.css_name(), v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_inline_css())
    }
}

/// Serializes as a DOM style object, e.g. `{"fontSize": "48px"}`
impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (property, value) in &self.declarations {
            map.serialize_entry(property.dom_name(), value)?;
        }
        map.end()
    }
}
