//! Shared test helpers.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{LayoutError, Result};
use crate::measure::{FontSpec, FontWeight, TextMeasurer};

/// Measures every character as `advance` wide, bold characters one unit wider.
#[derive(Debug, Default)]
pub struct CharMeasurer {
    advance: f64,
    calls: AtomicUsize,
    requests: Mutex<Vec<(Vec<String>, FontSpec)>>,
}

impl CharMeasurer {
    pub fn new(advance: f64) -> Self {
        Self {
            advance,
            ..Self::default()
        }
    }

    pub fn width(&self, text: &str, font: &FontSpec) -> f64 {
        let per_char = match font.weight {
            FontWeight::Bold => self.advance + 1.0,
            FontWeight::Regular | FontWeight::Light => self.advance,
        };
        text.chars().count() as f64 * per_char
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Families `text` was measured in, in request order.
    pub fn families_of(&self, text: &str) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(texts, _)| texts.iter().any(|t| t == text))
            .map(|(_, font)| font.family.clone())
            .collect()
    }
}

impl TextMeasurer for CharMeasurer {
    async fn measure(&self, texts: &[String], font: FontSpec) -> Result<Vec<f64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let widths = texts.iter().map(|text| self.width(text, &font)).collect();
        self.requests.lock().unwrap().push((texts.to_vec(), font));
        Ok(widths)
    }
}

/// Always fails.
pub struct FailingMeasurer;

impl TextMeasurer for FailingMeasurer {
    async fn measure(&self, _texts: &[String], _font: FontSpec) -> Result<Vec<f64>> {
        Err(LayoutError::measurement("font not available"))
    }
}
