use rgb_histogram_chart::HistogramPage;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// The live document as seen by the initializer
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }
}

impl HistogramPage for DomPage {
    type Surface = CanvasRenderingContext2d;

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.get_attribute(name)
    }

    fn drawing_surface(&self, id: &str) -> Option<CanvasRenderingContext2d> {
        let canvas = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }
}

/// Run `f` once the page has loaded; immediately if it already has.
///
/// An error returned by `f` inside the load callback is thrown to the host.
pub fn on_load<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce() -> Result<(), JsValue> + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    match load_timing(&doc.ready_state()) {
        LoadTiming::Now => f(),
        LoadTiming::OnLoadEvent => {
            let callback = Closure::once(f);
            win.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref())?;
            callback.forget();
            Ok(())
        }
    }
}

/// When to run the page-load work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadTiming {
    Now,
    OnLoadEvent,
}

/// `load` has already fired once `document.readyState` is `complete`;
/// `loading` and `interactive` still precede it
fn load_timing(ready_state: &str) -> LoadTiming {
    if ready_state == "complete" {
        LoadTiming::Now
    } else {
        LoadTiming::OnLoadEvent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_document_runs_now() {
        assert_eq!(load_timing("complete"), LoadTiming::Now);
    }

    #[test]
    fn test_loading_document_waits_for_load() {
        assert_eq!(load_timing("loading"), LoadTiming::OnLoadEvent);
        assert_eq!(load_timing("interactive"), LoadTiming::OnLoadEvent);
    }
}
