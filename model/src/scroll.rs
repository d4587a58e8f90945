//! Scroll-driven header geometry.
//!
//! The header logo shrinks and fades as the page scrolls. Both ramps
//! are pure functions of the vertical scroll offset, recomputed on
//! every scroll notification.

/// Logo height in pixels at the top of the page.
pub const HEADER_MAX_HEIGHT: f64 = 150.0;
/// Logo height in pixels once fully shrunk.
pub const HEADER_MIN_HEIGHT: f64 = 50.0;
/// Scroll distance over which the height ramp runs.
pub const HEIGHT_RAMP_PX: f64 = 450.0;
/// Scroll distance over which the opacity ramp runs.
pub const OPACITY_RAMP_PX: f64 = 300.0;

/// Compensation for the fixed header when scrolling to an anchor.
pub const SECTION_SCROLL_OFFSET_PX: f64 = 80.0;

/// The header geometry for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderTransform {
    /// Logo height in pixels, in `[50, 150]`.
    pub height: f64,
    /// Logo opacity, in `[0, 1]`.
    pub opacity: f64,
}

impl HeaderTransform {
    /// Computes the header geometry at `scroll_y` pixels from the top.
    /// Offsets outside either ramp clamp to that ramp's endpoint.
    pub fn at(scroll_y: f64) -> Self {
        Self {
            height: lerp(
                HEADER_MAX_HEIGHT,
                HEADER_MIN_HEIGHT,
                ramp(scroll_y, HEIGHT_RAMP_PX),
            ),
            opacity: lerp(1.0, 0.0, ramp(scroll_y, OPACITY_RAMP_PX)),
        }
    }
}

/// Maps `y` onto `[0, 1]` over a ramp of `span` pixels.
fn ramp(y: f64, span: f64) -> f64 {
    y.clamp(0.0, span) / span
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_pose_at_top_of_page() {
        let transform = HeaderTransform::at(0.0);
        assert_eq!(transform.height, 150.0);
        assert_eq!(transform.opacity, 1.0);
    }

    #[test]
    fn fully_collapsed_past_both_ramps() {
        let transform = HeaderTransform::at(450.0);
        assert_eq!(transform.height, 50.0);
        assert_eq!(transform.opacity, 0.0);

        // Beyond the ramp ends nothing changes further.
        assert_eq!(HeaderTransform::at(10_000.0), transform);
    }

    #[test]
    fn opacity_ramp_finishes_before_height_ramp() {
        let transform = HeaderTransform::at(300.0);
        assert_eq!(transform.opacity, 0.0);
        assert!(transform.height > 50.0);
    }

    #[test]
    fn midpoints_interpolate_linearly() {
        assert_eq!(HeaderTransform::at(225.0).height, 100.0);
        assert_eq!(HeaderTransform::at(150.0).opacity, 0.5);
    }

    #[test]
    fn negative_offsets_clamp_to_rest_pose() {
        assert_eq!(HeaderTransform::at(-50.0), HeaderTransform::at(0.0));
    }
}
