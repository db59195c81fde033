//! Browser entry point for the RGB histogram chart.
//!
//! Loaded as a wasm module by the histogram page, next to Chart.js. On load
//! it reads the histogram arrays off the marker element and draws the chart
//! into the page canvas.

mod chart_js;
mod dom;

use rgb_histogram_chart::{initialize, ChartError, Outcome, PageContract};
use wasm_bindgen::prelude::*;

use crate::chart_js::ChartJs;
use crate::dom::DomPage;

/// Route panics and `tracing` events to the browser console
fn init_logging() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    init_logging();
    dom::on_load(|| run(&PageContract::default()))
}

/// Draw the histogram chart using non-default element ids.
///
/// Throws when the histogram data is missing or malformed; a missing canvas
/// is only logged.
#[wasm_bindgen(js_name = renderHistogram)]
pub fn render_histogram(marker_id: &str, canvas_id: &str) -> Result<(), JsValue> {
    run(&PageContract::with_ids(marker_id, canvas_id))
}

fn run(contract: &PageContract) -> Result<(), JsValue> {
    let page = DomPage::current().ok_or_else(|| JsValue::from_str("no document on window"))?;
    let mut renderer = ChartJs;

    match initialize(&page, &mut renderer, contract) {
        Ok(Outcome::Rendered) => {
            tracing::info!(canvas_id = %contract.canvas_id, "RGB histogram drawn");
            Ok(())
        }
        Ok(Outcome::NoDrawingSurface) => Ok(()),
        Err(err) => {
            tracing::error!(%err, "histogram initialization failed");
            Err(to_js_error(&err))
        }
    }
}

fn to_js_error(err: &ChartError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
