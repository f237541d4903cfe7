//! Standalone embed markup for a headline.

mod compiler;


pub use compiler::{compile_embed, escape_html};
