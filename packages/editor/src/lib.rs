//! # Headline Editor
//!
//! Editing engine for a styled headline.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: HeadlineSettings document            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Path-addressed updates (copy on write)   │
//! │  - Letter reveal sequencing                 │
//! │  - Word selection / editing gate            │
//! │  - Export snapshot and embed snippet        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-css / compiler-html: render views  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Settings are the source of truth**: styles and markup are derived
//!    on every read
//! 2. **Updates never mutate**: each write returns a new document sharing
//!    every untouched branch
//! 3. **One pending timer**: re-arming the reveal cancels the previous one
//! 4. **Host-driven time**: the session reads a [`Clock`], so it runs the
//!    same natively, under tokio and in the browser
//!
//! ## Usage
//!
//! ```rust,ignore
//! use headline_editor::{EditSession, WordFlag};
//!
//! let mut session = EditSession::new();
//!
//! session.update("gradient.direction", "down")?;
//! session.toggle_word_flag(1, WordFlag::Highlight)?;
//! session.toggle_letter_animation()?;
//!
//! let css = session.headline_style().to_inline_css();
//! let json = session.export_json()?;
//!
//! // Later, once the reveal is due
//! session.tick();
//! ```

mod animation;
mod clock;
mod commands;
mod config;
mod errors;
mod export;
mod mutations;
mod selection;
mod session;

#[cfg(feature = "runtime")]
pub mod runtime;

pub use animation::{
    AnimationEvent, AnimationPhase, AnimationSequencer, TimerHandle, DEFAULT_REFRESH_PULSE,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use commands::Command;
pub use config::{EditorConfig, DEFAULT_CONFIG_NAME};
pub use errors::{EditorError, EditorResult};
pub use export::{ExportSnapshot, EXPORT_FILE_NAME, EXPORT_VERSION};
pub use mutations::{
    read, update, Assignment, MutationError, MutationResult, PathMutator, MAX_ARRAY_INDEX,
};
pub use selection::WordSelection;
pub use session::{EditSession, UpdateOutcome};

#[cfg(feature = "runtime")]
pub use clock::TokioClock;

// Re-export common types for convenience
pub use headline_compiler_css::{LetterTiming, PreviewFrame, Style, StyleProperty, WordRender};
pub use headline_model::{Effect, FontWeight, HeadlineSettings, WordFlag, FONT_FAMILIES};
