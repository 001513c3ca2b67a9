#![deny(unsafe_code)]
//! WASM bindings for the lotto-draw widget.
//!
//! The page script calls `generate_batch(count)` when the draw button is
//! pressed and builds ball elements from the returned JSON render plan:
//!
//! ```javascript
//! import init, { generate_batch } from 'lotto_draw_wasm';
//!
//! await init();
//! const { batch } = JSON.parse(generate_batch(3));
//! for (const row of batch.rows) {
//!     for (const ball of row.main) {
//!         el.className = `ball ${ball.tier}`;
//!         el.style.animationDelay = `${ball.delay}s`;
//!     }
//! }
//! ```

use lotto_draw_core::{DrawSeed, Tier};
use wasm_bindgen::prelude::*;

/// Tier name (`"tier-1"`..`"tier-5"`) for a ball value.
#[wasm_bindgen]
pub fn classify_tier(value: u8) -> String {
    lotto_draw_core::classify_tier(value).name().to_string()
}

/// Stylesheet color name (`"yellow"`, `"blue"`, ...) for a ball value.
#[wasm_bindgen]
pub fn tier_color(value: u8) -> String {
    lotto_draw_core::classify_tier(value).color_name().to_string()
}

/// Draws `count` sets seeded from `Math.random()` and returns the render plan as JSON.
#[wasm_bindgen]
pub fn generate_batch(count: usize) -> Result<String, JsError> {
    draw_json(count, entropy_seed()).map_err(|e| JsError::new(&e))
}

/// Draws `count` sets from an explicit seed. The same seed always returns the same plan.
#[wasm_bindgen]
pub fn generate_batch_seeded(count: usize, seed: u64) -> Result<String, JsError> {
    draw_json(count, seed).map_err(|e| JsError::new(&e))
}

/// Tier bands as JSON, for building a legend.
#[wasm_bindgen]
pub fn tier_legend() -> String {
    legend_json()
}

fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    (hi << 32) | lo
}

fn draw_json(count: usize, seed: u64) -> Result<String, String> {
    let draw_seed = DrawSeed::new(count, seed);
    let batch = draw_seed.draw().map_err(|e| e.to_string())?;
    let plan = serde_json::json!({
        "seed": draw_seed,
        "batch": batch,
    });
    serde_json::to_string(&plan).map_err(|e| e.to_string())
}

fn legend_json() -> String {
    serde_json::to_string(&Tier::legend()).unwrap_or_else(|_| "[]".to_string())
}
