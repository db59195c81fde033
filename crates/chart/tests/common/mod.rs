//! Common test utilities: in-memory page and a renderer that records configs

use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::sync::{Arc, Mutex};

use rgb_histogram_chart::{ChartConfig, ChartError, ChartRenderer, HistogramPage, PageContract};

/// Canvas handle, identified by element id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeSurface(pub String);

#[derive(Debug, Default)]
pub struct FakePage {
    elements: HashMap<String, HashMap<String, String>>,
    canvases: HashSet<String>,
}

impl FakePage {
    pub fn with_element(mut self, id: &str, attrs: &[(&str, &str)]) -> Self {
        let entry = self.elements.entry(id.to_string()).or_default();
        for (name, value) in attrs {
            entry.insert((*name).to_string(), (*value).to_string());
        }
        self
    }

    pub fn with_canvas(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self.canvases.insert(id.to_string());
        self
    }

    /// Page with valid histograms and the default canvas
    pub fn valid() -> Self {
        let contract = PageContract::default();
        let blue = flat_json(1.0);
        let green = flat_json(2.0);
        let red = flat_json(3.0);
        Self::default()
            .with_element(
                &contract.marker_id,
                &[
                    ("histogram_blue", blue.as_str()),
                    ("histogram_green", green.as_str()),
                    ("histogram_red", red.as_str()),
                ],
            )
            .with_canvas(&contract.canvas_id)
    }
}

impl HistogramPage for FakePage {
    type Surface = FakeSurface;

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.get(name).cloned()
    }

    fn drawing_surface(&self, id: &str) -> Option<FakeSurface> {
        self.canvases.contains(id).then(|| FakeSurface(id.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rendered: Vec<(FakeSurface, ChartConfig)>,
    pub fail_with: Option<String>,
}

impl ChartRenderer<FakeSurface> for RecordingRenderer {
    fn render(&mut self, surface: &FakeSurface, config: &ChartConfig) -> Result<(), ChartError> {
        if let Some(msg) = &self.fail_with {
            return Err(ChartError::Render(msg.clone()));
        }
        self.rendered.push((surface.clone(), config.clone()));
        Ok(())
    }
}

/// JSON array of 256 copies of `value`, formatted the way the server emits floats
pub fn flat_json(value: f64) -> String {
    let items: Vec<String> = (0..256).map(|_| format!("{value:.1}")).collect();
    format!("[{}]", items.join(", "))
}

/// Log sink shared with a `tracing_subscriber` fmt layer
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with logs captured into the returned buffer
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
