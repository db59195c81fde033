//! Binding to the global Chart.js constructor.

use rgb_histogram_chart::{ChartConfig, ChartError, ChartRenderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<Chart, JsValue>;
}

/// Renders through `new Chart(ctx, config)`; the chart object stays owned by
/// the library
pub struct ChartJs;

impl ChartRenderer<CanvasRenderingContext2d> for ChartJs {
    fn render(&mut self, surface: &CanvasRenderingContext2d, config: &ChartConfig) -> Result<(), ChartError> {
        let json = config.to_json()?;
        let value = js_sys::JSON::parse(&json).map_err(|e| ChartError::Render(describe(&e)))?;
        Chart::new(surface, &value).map_err(|e| ChartError::Render(describe(&e)))?;
        Ok(())
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
