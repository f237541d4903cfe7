use headline_compiler_css::gradient_css;
use headline_model::HeadlineSettings;

/// Compile the headline into a single inline-styled `<div>`
///
/// Only the whole-headline typography and gradient fill are carried over.
/// Word overrides, shadow and outline are not part of the snippet.
pub fn compile_embed(settings: &HeadlineSettings) -> String {
    let mut style = format!(
        "font-size: {}px; font-family: {}; font-weight: {}; ",
        settings.font_size, settings.font_family, settings.font_weight
    );

    if settings.gradient.enabled {
        style.push_str(&format!(
            "background-image: {}; -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;",
            gradient_css(&settings.gradient)
        ));
    }

    format!(
        "<div style=\"{}\">{}</div>",
        escape_html(&style),
        escape_html(&settings.text)
    )
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
