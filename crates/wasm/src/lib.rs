use std::sync::Mutex;

use scrollfx_core::css::render_css;
use scrollfx_core::demo::landing_scene;
use scrollfx_core::geometry::GeometryMap;
use scrollfx_core::scene_loader::load_scene;
use scrollfx_core::Pipeline;
use scrollfx_protocol::{TargetId, TickInput};
use wasm_bindgen::prelude::*;

static PIPELINES: Mutex<Vec<Pipeline>> = Mutex::new(Vec::new());

/// Load a scene from JSON bytes. Returns a handle (index) for later use.
#[wasm_bindgen]
pub fn create_scene(data: &[u8]) -> Result<usize, JsError> {
    let scene = load_scene(data).map_err(|e| JsError::new(&e.to_string()))?;
    let mut pipelines = PIPELINES.lock().unwrap();
    let idx = pipelines.len();
    pipelines.push(Pipeline::new(scene));
    Ok(idx)
}

/// Create the built-in landing page scene. Returns a handle (index).
#[wasm_bindgen]
pub fn create_landing_scene() -> usize {
    let mut pipelines = PIPELINES.lock().unwrap();
    let idx = pipelines.len();
    pipelines.push(Pipeline::new(landing_scene()));
    idx
}

/// Targets the scene references, as a JSON string array. The host measures
/// these each tick.
#[wasm_bindgen]
pub fn scene_targets(scene_index: usize) -> Result<String, JsError> {
    let pipelines = PIPELINES.lock().unwrap();
    let pipeline = pipelines
        .get(scene_index)
        .ok_or_else(|| JsError::new("invalid scene index"))?;
    serde_json::to_string(&pipeline.scene().targets()).map_err(|e| JsError::new(&e.to_string()))
}

/// Run one pipeline pass. `input` is a JSON tick snapshot (viewport, scroll
/// offset, element rects); the result is the style command list as JSON.
#[wasm_bindgen]
pub fn tick_scene(scene_index: usize, input: &[u8]) -> Result<String, JsError> {
    let commands = run_tick(scene_index, input)?;
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// Like [`tick_scene`], but returns the per-element styles rendered as CSS
/// text, ready for a `<style>` element.
#[wasm_bindgen]
pub fn tick_scene_css(scene_index: usize, input: &[u8]) -> Result<String, JsError> {
    let commands = run_tick(scene_index, input)?;
    Ok(render_css(&commands))
}

/// Start sampling a target from the next tick on.
#[wasm_bindgen]
pub fn track(scene_index: usize, target: &str) -> Result<(), JsError> {
    let mut pipelines = PIPELINES.lock().unwrap();
    let pipeline = pipelines
        .get_mut(scene_index)
        .ok_or_else(|| JsError::new("invalid scene index"))?;
    pipeline.tracker_mut().track(TargetId::from(target));
    Ok(())
}

/// Stop sampling a target from the next tick on.
#[wasm_bindgen]
pub fn untrack(scene_index: usize, target: &str) -> Result<(), JsError> {
    let mut pipelines = PIPELINES.lock().unwrap();
    let pipeline = pipelines
        .get_mut(scene_index)
        .ok_or_else(|| JsError::new("invalid scene index"))?;
    pipeline.tracker_mut().untrack(&TargetId::from(target));
    Ok(())
}

fn run_tick(
    scene_index: usize,
    input: &[u8],
) -> Result<Vec<scrollfx_protocol::StyleCommand>, JsError> {
    let input: TickInput =
        serde_json::from_slice(input).map_err(|e| JsError::new(&e.to_string()))?;
    let geometry = GeometryMap::from(input);

    let mut pipelines = PIPELINES.lock().unwrap();
    let pipeline = pipelines
        .get_mut(scene_index)
        .ok_or_else(|| JsError::new("invalid scene index"))?;
    Ok(pipeline.tick(&geometry))
}
