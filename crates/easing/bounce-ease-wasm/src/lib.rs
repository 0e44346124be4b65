use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use bounce_ease_core::{
    bake, parse_settings_json, AnimId, BounceEase, BounceSettings, EasingMode, Outputs, Player,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Read a settings object through the core parser so validation and camelCase
/// field names behave exactly as they do for JSON documents.
fn settings_from_js(settings: &JsValue, context: &str) -> Result<BounceSettings, JsError> {
    if jsvalue_is_undefined_or_null(settings) {
        return Ok(BounceSettings::default());
    }
    let s = JSON::stringify(settings)
        .map_err(|e| JsError::new(&format!("{context} stringify error: {:?}", e)))?
        .as_string()
        .ok_or_else(|| JsError::new(&format!("{context}: stringify produced non-string")))?;
    parse_settings_json(&s).map_err(|e| JsError::new(&format!("{context} settings error: {e}")))
}

/// One configured bounce curve plus the settings it was built from.
#[wasm_bindgen]
pub struct BounceEasing {
    settings: BounceSettings,
    ease: BounceEase,
}

#[wasm_bindgen]
impl BounceEasing {
    /// Build from a settings object, or undefined/null for the panel defaults.
    /// Example:
    ///   new BounceEasing({ bounceCount: 4, amplitude: 2.5, mode: "ease_out" })
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<BounceEasing, JsError> {
        console_error_panic_hook::set_once();
        let settings = settings_from_js(&settings, "BounceEasing")?;
        let ease = settings.ease();
        Ok(BounceEasing { settings, ease })
    }

    /// Eased value under the configured mode.
    #[wasm_bindgen]
    pub fn evaluate(&self, progress: f64) -> f64 {
        self.ease.evaluate(progress)
    }

    #[wasm_bindgen(js_name = ease_in)]
    pub fn ease_in(&self, progress: f64) -> f64 {
        self.ease.ease_in(progress)
    }

    #[wasm_bindgen(js_name = ease_out)]
    pub fn ease_out(&self, progress: f64) -> f64 {
        self.ease.ease_out(progress)
    }

    /// Timeline length of the configured duration at the player frame rate.
    #[wasm_bindgen(js_name = duration_frames)]
    pub fn duration_frames(&self) -> f64 {
        self.settings.snapshot().duration_frames()
    }

    /// Sample every frame of a drop from `drop_height` to 0. Returns
    /// `{ frame_rate, duration_frames, values }`.
    #[wasm_bindgen]
    pub fn bake(&self) -> Result<JsValue, JsError> {
        let baked = bake(&self.settings.snapshot())
            .map_err(|e| JsError::new(&format!("bake error: {e}")))?;
        swb::to_value(&baked).map_err(|e| JsError::new(&format!("bake error: {e}")))
    }

    /// Settings the curve was built from, with defaults filled in.
    #[wasm_bindgen]
    pub fn settings(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.settings).map_err(|e| JsError::new(&format!("settings error: {e}")))
    }
}

/// Frame-stepped player for hosts that drive animations from their own render loop.
#[wasm_bindgen]
pub struct BouncePlayer {
    core: Player,
}

impl Default for BouncePlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BouncePlayer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BouncePlayer {
        console_error_panic_hook::set_once();
        BouncePlayer {
            core: Player::new(),
        }
    }

    /// Snapshot the settings and start a drop animation. Returns its id.
    #[wasm_bindgen]
    pub fn start(&mut self, settings: JsValue) -> Result<u32, JsError> {
        let settings = settings_from_js(&settings, "start")?;
        let id = self
            .core
            .start(settings.snapshot())
            .map_err(|e| JsError::new(&format!("start error: {e}")))?;
        Ok(id.0)
    }

    #[wasm_bindgen]
    pub fn cancel(&mut self, anim_id: u32) -> bool {
        self.core.cancel(AnimId(anim_id))
    }

    /// Step every running animation by dt (seconds). Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f64) -> Result<JsValue, JsError> {
        let out: &Outputs = self.core.update(dt);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }
}

/// One-shot evaluation. `mode` accepts `ease_in`, `ease_out`, `ease_in_out` (or camelCase).
#[wasm_bindgen(js_name = bounce_ease)]
pub fn bounce_ease(
    progress: f64,
    bounces: u32,
    amplitude: f64,
    mode: &str,
) -> Result<f64, JsError> {
    let mode: EasingMode = mode
        .parse()
        .map_err(|e| JsError::new(&format!("bounce_ease: {e}")))?;
    Ok(bounce_ease_core::bounce_ease(
        progress, bounces, amplitude, mode,
    ))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
