//! Half-circle rating gauge for one research feature.

use leptos::prelude::*;

use crate::state::research::needle_angle_deg;
use crate::util::gauge::{GAUGE_CENTER, NEEDLE_LENGTH, arc_path, dial_point, track_path};

/// SVG dial with a coloured arc and needle at `value` on a 1–5 scale.
#[component]
pub fn RatingDial(#[prop(into)] label: String, value: f64, #[prop(into)] fill: String) -> impl IntoView {
    let angle = needle_angle_deg(value);
    let (tip_x, tip_y) = dial_point(angle, NEEDLE_LENGTH);
    let readout = format!("{value:.1}");
    let title = format!("{label}: {readout}");

    view! {
        <figure class="rating-dial" title=title>
            <svg class="rating-dial__svg" viewBox="0 0 120 70" aria-hidden="true">
                <path class="rating-dial__track" d=track_path() fill="none"></path>
                <path class="rating-dial__arc" d=arc_path(angle) stroke=fill fill="none"></path>
                <line
                    class="rating-dial__needle"
                    x1=GAUGE_CENTER.0.to_string()
                    y1=GAUGE_CENTER.1.to_string()
                    x2=format!("{tip_x:.2}")
                    y2=format!("{tip_y:.2}")
                ></line>
            </svg>
            <figcaption class="rating-dial__caption">
                <span class="rating-dial__label">{label}</span>
                <span class="rating-dial__value">{readout}</span>
            </figcaption>
        </figure>
    }
}
