//! # Edit Session
//!
//! One editor instance: the current settings document, the letter reveal
//! sequencer and the word selection.
//!
//! Every write goes through [`EditSession::update`], which applies the path
//! mutator and keeps the sequencer in step with `effects.letterAnimation`:
//! a write that switches it on arms a reveal, a write that switches it off
//! disarms the pending one. The only write that skips this is the revert
//! performed by [`EditSession::tick`], because the sequencer has already
//! moved to idle by then.

use crate::animation::{AnimationEvent, AnimationPhase, AnimationSequencer};
use crate::clock::{Clock, SystemClock};
use crate::commands::Command;
use crate::config::EditorConfig;
use crate::errors::EditorResult;
use crate::export::ExportSnapshot;
use crate::mutations::{Assignment, PathMutator};
use crate::selection::WordSelection;
use headline_compiler_css::{
    letter_schedule, resolve_headline_style, resolve_preview_frame, resolve_word_styles,
    LetterTiming, PreviewFrame, Style, WordRender,
};
use headline_compiler_html::compile_embed;
use headline_model::{
    Effect, HeadlineSettings, WordFlag, MAX_GRADIENT_COLORS, MIN_GRADIENT_COLORS,
    NEW_GRADIENT_COLOR,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const LETTER_ANIMATION_PATH: &str = "effects.letterAnimation";

/// Result of a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Session version after the write
    pub version: u64,
    /// Sequencer transition caused by the write, if any
    pub animation: Option<AnimationEvent>,
}

#[derive(Debug)]
pub struct EditSession {
    settings: HeadlineSettings,
    /// Bumped on every stored settings change
    version: u64,
    sequencer: AnimationSequencer,
    selection: WordSelection,
    clock: Arc<dyn Clock>,
    config: EditorConfig,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Session with default settings on the system clock
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default(), Arc::new(SystemClock::new()))
    }

    pub fn with_config(config: EditorConfig, clock: Arc<dyn Clock>) -> Self {
        let mut session = Self {
            settings: config.defaults.clone(),
            version: 0,
            sequencer: AnimationSequencer::with_refresh_pulse(config.refresh_pulse()),
            selection: WordSelection::new(),
            clock,
            config,
        };
        session.arm_if_enabled();
        session
    }

    pub fn settings(&self) -> &HeadlineSettings {
        &self.settings
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn replay_token(&self) -> u64 {
        self.sequencer.replay_token()
    }

    pub fn animation_phase(&self) -> AnimationPhase {
        self.sequencer.phase()
    }

    /// When the pending revert is due, if a reveal is running
    pub fn pending_deadline(&self) -> Option<Duration> {
        self.sequencer.pending_deadline()
    }

    pub fn selected_word(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn is_editable(&self) -> bool {
        self.selection.is_editable()
    }

    /// Write `value` at `path`
    #[instrument(skip(self, value), fields(version = self.version))]
    pub fn update(
        &mut self,
        path: &str,
        value: impl Into<Assignment>,
    ) -> EditorResult<UpdateOutcome> {
        let next = self.settings.update(path, value).map_err(|e| {
            warn!(error = %e, "Rejected settings update");
            e
        })?;
        let animation = self.store(next);

        Ok(UpdateOutcome {
            version: self.version,
            animation,
        })
    }

    pub fn toggle_letter_animation(&mut self) -> EditorResult<UpdateOutcome> {
        self.toggle_effect(Effect::LetterAnimation)
    }

    pub fn toggle_effect(&mut self, effect: Effect) -> EditorResult<UpdateOutcome> {
        let on = self.settings.effects.get(effect);
        self.update(&format!("effects.{}", effect.key()), !on)
    }

    /// Replace the headline text
    ///
    /// Returns `false` without touching the document while a word is
    /// selected.
    #[instrument(skip(self, text))]
    pub fn commit_text(&mut self, text: &str) -> EditorResult<bool> {
        if !self.selection.is_editable() {
            warn!(
                selected = self.selection.selected(),
                "Ignored text edit while a word is selected"
            );
            return Ok(false);
        }
        self.update("text", text)?;
        Ok(true)
    }

    pub fn select_word(&mut self, index: usize) -> Option<usize> {
        let selected = self.selection.select_word(index);
        debug!(index, ?selected, "Word selection changed");
        selected
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn toggle_word_flag(&mut self, index: usize, flag: WordFlag) -> EditorResult<UpdateOutcome> {
        let on = self
            .settings
            .word_style(index)
            .map(|word| word.flag(flag))
            .unwrap_or(false);
        self.update(&format!("wordStyling.{}.{}", index, flag.key()), !on)
    }

    pub fn set_word_color(&mut self, index: usize, color: &str) -> EditorResult<UpdateOutcome> {
        self.update(&format!("wordStyling.{}.color", index), color)
    }

    /// Drop every override of a word
    pub fn reset_word(&mut self, index: usize) -> EditorResult<UpdateOutcome> {
        self.update(&format!("wordStyling.{}", index), Assignment::Remove)
    }

    /// Append a stop, unless the gradient already has the maximum
    pub fn add_gradient_color(&mut self) -> EditorResult<bool> {
        let colors = &self.settings.gradient.colors;
        if colors.len() >= MAX_GRADIENT_COLORS {
            debug!(colors = colors.len(), "Gradient already has the maximum stops");
            return Ok(false);
        }

        let mut next = colors.clone();
        next.push(NEW_GRADIENT_COLOR.to_string());
        self.update("gradient.colors", next)?;
        Ok(true)
    }

    /// Remove a stop, unless the gradient is down to the minimum
    pub fn remove_gradient_color(&mut self, index: usize) -> EditorResult<bool> {
        let colors = &self.settings.gradient.colors;
        if colors.len() <= MIN_GRADIENT_COLORS || index >= colors.len() {
            debug!(index, colors = colors.len(), "Gradient stop not removed");
            return Ok(false);
        }

        let mut next = colors.clone();
        next.remove(index);
        self.update("gradient.colors", next)?;
        Ok(true)
    }

    pub fn set_gradient_color(&mut self, index: usize, color: &str) -> EditorResult<UpdateOutcome> {
        self.update(&format!("gradient.colors.{}", index), color)
    }

    /// Revert the letter animation if its timer is due
    pub fn tick(&mut self) -> Option<AnimationEvent> {
        let event = self.sequencer.poll(self.clock.now())?;

        // The sequencer is already idle, so store without re-syncing it.
        match self.settings.update(LETTER_ANIMATION_PATH, false) {
            Ok(next) => {
                self.settings = next;
                self.version += 1;
            }
            Err(e) => warn!(error = %e, "Could not switch letter animation off"),
        }
        Some(event)
    }

    /// Replay the preview entrance for a short pulse
    pub fn refresh_animation(&mut self) {
        self.sequencer.refresh(self.clock.now());
    }

    pub fn headline_style(&self) -> Style {
        resolve_headline_style(&self.settings)
    }

    pub fn word_renders(&self) -> Vec<WordRender> {
        resolve_word_styles(&self.settings, self.selection.selected())
    }

    pub fn preview_frame(&self) -> PreviewFrame {
        resolve_preview_frame(&self.settings.effects, self.selection.is_editable())
    }

    pub fn entrance_key(&self) -> &'static str {
        self.sequencer.entrance_key(self.clock.now())
    }

    pub fn letter_schedule(&self) -> Vec<LetterTiming> {
        letter_schedule(&self.settings.words())
    }

    pub fn export_snapshot(&self) -> ExportSnapshot {
        info!(version = self.version, "Exporting settings");
        ExportSnapshot::new(self.settings.clone())
    }

    pub fn export_json(&self) -> EditorResult<String> {
        self.export_snapshot().to_json()
    }

    pub fn embed_code(&self) -> String {
        compile_embed(&self.settings)
    }

    /// Replace the settings with `snapshot`'s and reset transient state
    #[instrument(skip(self, snapshot), fields(timestamp = %snapshot.timestamp))]
    pub fn load_snapshot(&mut self, snapshot: ExportSnapshot) {
        self.selection.clear();
        if self.sequencer.pending().is_some() {
            self.sequencer.disarm();
        }

        self.settings = snapshot.settings;
        self.version += 1;
        info!(version = self.version, "Loaded settings snapshot");
        self.arm_if_enabled();
    }

    pub fn import_json(&mut self, json: &str) -> EditorResult<()> {
        let snapshot = ExportSnapshot::from_json(json)?;
        self.load_snapshot(snapshot);
        Ok(())
    }

    /// Start over from the configured defaults
    pub fn restart(&mut self) {
        self.settings = self.config.defaults.clone();
        self.version += 1;
        self.selection.clear();
        self.sequencer = AnimationSequencer::with_refresh_pulse(self.config.refresh_pulse());
        info!(version = self.version, "Restarted session");
        self.arm_if_enabled();
    }

    /// Apply a host command
    pub fn dispatch(&mut self, command: Command) -> EditorResult<Option<AnimationEvent>> {
        let event = match command {
            Command::Update { path, value } => self.update(&path, value)?.animation,
            Command::CommitText { text } => {
                self.commit_text(&text)?;
                None
            }
            Command::SelectWord { index } => {
                self.select_word(index);
                None
            }
            Command::ClearSelection => {
                self.clear_selection();
                None
            }
            Command::ToggleWordFlag { index, flag } => self.toggle_word_flag(index, flag)?.animation,
            Command::SetWordColor { index, color } => self.set_word_color(index, &color)?.animation,
            Command::ResetWord { index } => self.reset_word(index)?.animation,
            Command::AddGradientColor => {
                self.add_gradient_color()?;
                None
            }
            Command::RemoveGradientColor { index } => {
                self.remove_gradient_color(index)?;
                None
            }
            Command::SetGradientColor { index, color } => {
                self.set_gradient_color(index, &color)?.animation
            }
            Command::ToggleEffect { effect } => self.toggle_effect(effect)?.animation,
            Command::ToggleLetterAnimation => self.toggle_letter_animation()?.animation,
            Command::RefreshAnimation => {
                self.refresh_animation();
                None
            }
            Command::Tick => self.tick(),
            Command::Import { json } => {
                self.import_json(&json)?;
                self.animation_event_after_load()
            }
            Command::Restart => {
                self.restart();
                self.animation_event_after_load()
            }
        };
        Ok(event)
    }

    fn store(&mut self, next: HeadlineSettings) -> Option<AnimationEvent> {
        let was_on = self.settings.effects.letter_animation;
        let is_on = next.effects.letter_animation;

        self.settings = next;
        self.version += 1;

        match (was_on, is_on) {
            (false, true) => Some(self.sequencer.arm(self.clock.now(), &self.settings.text)),
            (true, false) => Some(self.sequencer.disarm()),
            _ => None,
        }
    }

    fn arm_if_enabled(&mut self) {
        if self.settings.effects.letter_animation {
            self.sequencer.arm(self.clock.now(), &self.settings.text);
        }
    }

    fn animation_event_after_load(&self) -> Option<AnimationEvent> {
        match self.sequencer.phase() {
            AnimationPhase::Active { token, .. } => Some(AnimationEvent::Armed { token }),
            AnimationPhase::Idle => None,
        }
    }
}
