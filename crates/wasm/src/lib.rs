use sc_dashboard_core::{series, text, viewport};
use sc_dashboard_protocol::{ElementRect, StatisticsSnapshot, ViewportSize};
use tracing::debug;
use wasm_bindgen::prelude::*;

/// Add `array` into `sum` element by element and return the grown sum.
#[wasm_bindgen]
pub fn sum_elements(sum: Vec<f64>, array: &[f64]) -> Vec<f64> {
    let mut sum = sum;
    series::sum_elements(&mut sum, array);
    sum
}

/// Sum the sent-message counters of a statistics snapshot (JSON).
#[wasm_bindgen]
pub fn sum_message_sent(data: &str) -> Result<Vec<f64>, JsError> {
    let snapshot = parse(data)?;
    sc_dashboard_core::sum_message_sent(&snapshot).map_err(|e| JsError::new(&e.to_string()))
}

/// Sum the received-message counters of a statistics snapshot (JSON).
#[wasm_bindgen]
pub fn sum_message_received(data: &str) -> Result<Vec<f64>, JsError> {
    let snapshot = parse(data)?;
    sc_dashboard_core::sum_message_received(&snapshot).map_err(|e| JsError::new(&e.to_string()))
}

/// Whether an element's bounding rect lies within the preload viewport.
///
/// Pass `window.innerWidth`/`innerHeight` (or `undefined`) together with
/// `document.documentElement.clientWidth`/`clientHeight` as the fallback.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn is_element_overlapping_viewport(
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
    inner_width: Option<f64>,
    inner_height: Option<f64>,
    client_width: f64,
    client_height: f64,
) -> bool {
    let rect = ElementRect::new(top, left, bottom, right);
    let viewport = ViewportSize::resolve(inner_width, inner_height, client_width, client_height);
    viewport::is_element_overlapping_viewport(&rect, &viewport)
}

#[wasm_bindgen]
pub fn ends_with(instance: &str, suffix: &str) -> bool {
    text::ends_with(instance, suffix)
}

fn parse(data: &str) -> Result<StatisticsSnapshot, JsError> {
    let snapshot = sc_dashboard_core::parse_snapshot(data.as_bytes())
        .map_err(|e| JsError::new(&e.to_string()))?;
    debug!(
        series = snapshot.worker_statistics.len(),
        "decoded statistics snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_elements_grows_accumulator() {
        assert_eq!(sum_elements(vec![1.0], &[1.0, 2.0]), vec![2.0, 2.0]);
    }

    #[test]
    fn viewport_uses_client_fallback() {
        // No inner dimensions: the 800px document width applies.
        assert!(is_element_overlapping_viewport(
            0.0, 0.0, 100.0, 800.0, None, None, 800.0, 600.0
        ));
        assert!(!is_element_overlapping_viewport(
            0.0, 0.0, 100.0, 801.0, None, None, 800.0, 600.0
        ));
    }

    #[test]
    fn ends_with_export() {
        assert!(ends_with("stats.json", ".json"));
        assert!(!ends_with("hi", "hello"));
    }
}
