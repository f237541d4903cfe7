//! Font families offered by the typography picker.
//!
//! The document accepts any family string; this list only drives the picker.

pub const FONT_FAMILIES: &[&str] = &[
    // Sans-serif
    "Inter, sans-serif",
    "Roboto, sans-serif",
    "Open Sans, sans-serif",
    "Poppins, sans-serif",
    "Lato, sans-serif",
    "Montserrat, sans-serif",
    "Source Sans Pro, sans-serif",
    "Nunito, sans-serif",
    "Ubuntu, sans-serif",
    "Raleway, sans-serif",
    // System
    "system-ui, sans-serif",
    "-apple-system, BlinkMacSystemFont, sans-serif",
    "Helvetica Neue, Helvetica, sans-serif",
    "Arial, sans-serif",
    "Verdana, sans-serif",
    "Tahoma, sans-serif",
    "Trebuchet MS, sans-serif",
    // Serif
    "Playfair Display, serif",
    "Merriweather, serif",
    "Georgia, serif",
    "Times New Roman, serif",
    "Crimson Text, serif",
    "Libre Baskerville, serif",
    // Display
    "Oswald, sans-serif",
    "Bebas Neue, sans-serif",
    "Anton, sans-serif",
    "Righteous, sans-serif",
    "Fjalla One, sans-serif",
    "Impact, sans-serif",
    // Monospace
    "JetBrains Mono, monospace",
    "Fira Code, monospace",
    "Source Code Pro, monospace",
    "Courier New, monospace",
    "Monaco, monospace",
];

/// Whether `family` is one of the catalog entries
pub fn is_known_family(family: &str) -> bool {
    FONT_FAMILIES.contains(&family)
}
