use sc_dashboard_protocol::{ElementRect, ViewportSize};

/// Extra room above and below the visible area, in CSS pixels.
///
/// Elements within this band count as visible so charts just off screen
/// are rendered before they scroll in.
pub const PRELOAD_MARGIN: f64 = 600.0;

/// Whether `rect` lies within the viewport extended by [`PRELOAD_MARGIN`]
/// vertically. Horizontally the element must fit the viewport exactly.
pub fn is_element_overlapping_viewport(rect: &ElementRect, viewport: &ViewportSize) -> bool {
    is_within_extended_viewport(rect, viewport, PRELOAD_MARGIN)
}

/// Same as [`is_element_overlapping_viewport`] with a caller-chosen
/// vertical margin. NaN edges never satisfy the bounds.
pub fn is_within_extended_viewport(
    rect: &ElementRect,
    viewport: &ViewportSize,
    margin: f64,
) -> bool {
    rect.top >= -margin
        && rect.left >= 0.0
        && rect.bottom <= viewport.height + margin
        && rect.right <= viewport.width
}
