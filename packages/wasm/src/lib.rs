use headline_editor::{Command, EditSession, EditorConfig, FontWeight, ManualClock, FONT_FAMILIES};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Font families offered by the typography picker, as a JSON array
#[wasm_bindgen(js_name = fontFamilies)]
pub fn font_families() -> Result<String, JsValue> {
    to_json(&FONT_FAMILIES)
}

/// Selectable font weights, e.g. `["300", ..., "800"]`
#[wasm_bindgen(js_name = fontWeights)]
pub fn font_weights() -> Result<String, JsValue> {
    to_json(&FontWeight::SELECTABLE)
}

fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json(value: &impl Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(format!("Serialization error: {}", e)))
}

/// Headline editor session for the browser
///
/// The page owns the timers: pass `performance.now()` as `nowMs`, and when
/// `pendingDeadline` is set, schedule a `tick` for that time.
#[wasm_bindgen]
pub struct HeadlineEditor {
    session: EditSession,
    clock: ManualClock,
}

#[wasm_bindgen]
impl HeadlineEditor {
    /// Create an editor, optionally from a `headline.config.json` body
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<HeadlineEditor, JsValue> {
        let config = match config_json {
            Some(json) => serde_json::from_str::<EditorConfig>(&json)
                .map_err(|e| js_error(format!("Config error: {}", e)))?,
            None => EditorConfig::default(),
        };
        let clock = ManualClock::new();
        let session = EditSession::with_config(config, Arc::new(clock.clone()));
        Ok(HeadlineEditor { session, clock })
    }

    fn at(&self, now_ms: f64) {
        self.clock.set(Duration::from_millis(now_ms.max(0.0) as u64));
    }

    /// Write a JSON value at a dotted settings path
    pub fn update(&mut self, path: &str, value_json: &str, now_ms: f64) -> Result<(), JsValue> {
        let value: Value = serde_json::from_str(value_json).map_err(js_error)?;
        self.at(now_ms);
        self.session.update(path, value).map_err(js_error)?;
        Ok(())
    }

    /// Apply a command given as tagged JSON, e.g. `{"type":"selectWord","index":1}`
    pub fn dispatch(&mut self, command_json: &str, now_ms: f64) -> Result<(), JsValue> {
        let command: Command = serde_json::from_str(command_json).map_err(js_error)?;
        self.at(now_ms);
        self.session.dispatch(command).map_err(js_error)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleLetterAnimation)]
    pub fn toggle_letter_animation(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.at(now_ms);
        self.session.toggle_letter_animation().map_err(js_error)?;
        Ok(())
    }

    /// Returns `true` if the letter animation reverted
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.at(now_ms);
        self.session.tick().is_some()
    }

    #[wasm_bindgen(getter, js_name = pendingDeadline)]
    pub fn pending_deadline(&self) -> Option<f64> {
        self.session
            .pending_deadline()
            .map(|deadline| deadline.as_millis() as f64)
    }

    #[wasm_bindgen(js_name = refreshAnimation)]
    pub fn refresh_animation(&mut self, now_ms: f64) {
        self.at(now_ms);
        self.session.refresh_animation();
    }

    #[wasm_bindgen(js_name = entranceKey)]
    pub fn entrance_key(&self, now_ms: f64) -> String {
        self.at(now_ms);
        self.session.entrance_key().to_string()
    }

    #[wasm_bindgen(js_name = selectWord)]
    pub fn select_word(&mut self, index: u32) -> Option<u32> {
        self.session
            .select_word(index as usize)
            .map(|selected| selected as u32)
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    /// Returns `false` when a word is selected and the edit was ignored
    #[wasm_bindgen(js_name = commitText)]
    pub fn commit_text(&mut self, text: &str, now_ms: f64) -> Result<bool, JsValue> {
        self.at(now_ms);
        self.session.commit_text(text).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = replayToken)]
    pub fn replay_token(&self) -> f64 {
        self.session.replay_token() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.session.version() as f64
    }

    /// Current settings document as JSON
    pub fn settings(&self) -> Result<String, JsValue> {
        to_json(self.session.settings())
    }

    /// Headline style as a JSON object of DOM style properties
    #[wasm_bindgen(js_name = headlineStyle)]
    pub fn headline_style(&self) -> Result<String, JsValue> {
        to_json(&self.session.headline_style())
    }

    #[wasm_bindgen(js_name = headlineCss)]
    pub fn headline_css(&self) -> String {
        self.session.headline_style().to_inline_css()
    }

    #[wasm_bindgen(js_name = wordRenders)]
    pub fn word_renders(&self) -> Result<String, JsValue> {
        to_json(&self.session.word_renders())
    }

    #[wasm_bindgen(js_name = previewFrame)]
    pub fn preview_frame(&self) -> Result<String, JsValue> {
        to_json(&self.session.preview_frame())
    }

    #[wasm_bindgen(js_name = letterSchedule)]
    pub fn letter_schedule(&self) -> Result<String, JsValue> {
        to_json(&self.session.letter_schedule())
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.session.export_json().map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = exportFileName)]
    pub fn export_file_name(&self) -> String {
        self.session.config().export_file_name.clone()
    }

    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&mut self, json: &str, now_ms: f64) -> Result<(), JsValue> {
        self.at(now_ms);
        self.session.import_json(json).map_err(js_error)
    }

    #[wasm_bindgen(js_name = embedCode)]
    pub fn embed_code(&self) -> String {
        self.session.embed_code()
    }
}
