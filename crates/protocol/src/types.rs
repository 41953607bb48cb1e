use serde::{Deserialize, Serialize};

/// Screen-space bounding box of an element, in CSS pixels.
///
/// Edges follow the browser's `getBoundingClientRect()` convention: `top`
/// and `left` are measured from the viewport origin, `bottom` and `right`
/// are the far edges (not width/height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl ElementRect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Dimensions of the visible area the dashboard is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Resolve the viewport from the window's inner dimensions, falling back
    /// to the document element's client dimensions.
    ///
    /// An inner dimension that is missing, zero, or NaN is treated as
    /// unavailable, matching how browsers report a detached or not yet laid
    /// out window.
    pub fn resolve(
        inner_width: Option<f64>,
        inner_height: Option<f64>,
        client_width: f64,
        client_height: f64,
    ) -> Self {
        Self {
            width: usable(inner_width).unwrap_or(client_width),
            height: usable(inner_height).unwrap_or(client_height),
        }
    }
}

fn usable(dimension: Option<f64>) -> Option<f64> {
    dimension.filter(|v| *v != 0.0 && !v.is_nan())
}
