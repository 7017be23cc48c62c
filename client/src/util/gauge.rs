//! Half-circle gauge geometry for the rating dials.
//!
//! Angles are measured from the left end of the dial (rating 1) clockwise
//! over the top to the right end (rating 5), in SVG user units with the
//! dial's pivot at [`GAUGE_CENTER`].

#[cfg(test)]
#[path = "gauge_test.rs"]
mod gauge_test;

pub const GAUGE_CENTER: (f64, f64) = (60.0, 60.0);
pub const GAUGE_RADIUS: f64 = 50.0;
pub const NEEDLE_LENGTH: f64 = 44.0;

/// Point at `angle_deg` along a circle of `radius` around the pivot.
#[must_use]
pub fn dial_point(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (GAUGE_CENTER.0 - radius * rad.cos(), GAUGE_CENTER.1 - radius * rad.sin())
}

/// SVG path for the arc from rating 1 up to `angle_deg`.
#[must_use]
pub fn arc_path(angle_deg: f64) -> String {
    let (sx, sy) = dial_point(0.0, GAUGE_RADIUS);
    let (ex, ey) = dial_point(angle_deg.clamp(0.0, 180.0), GAUGE_RADIUS);
    format!("M {sx:.2} {sy:.2} A {GAUGE_RADIUS} {GAUGE_RADIUS} 0 0 1 {ex:.2} {ey:.2}")
}

/// Full background track of the gauge.
#[must_use]
pub fn track_path() -> String {
    arc_path(180.0)
}
