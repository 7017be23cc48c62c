//! Research report view model.
//!
//! Turns the backend's raw rating matrix into what the research dialog draws:
//! one gauge per feature plus an overall score.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

use crate::net::types::ResearchReport;

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;
const HUE_STEP_DEG: usize = 60;

/// One feature's gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingEntry {
    pub name: String,
    pub value: f64,
    /// CSS colour for the gauge arc.
    pub fill: String,
}

/// Summary shown in the research dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct ResearchSummary {
    pub product_name: String,
    /// Mean of every rating in the report, rounded to one decimal.
    pub overall: f64,
    pub entries: Vec<RatingEntry>,
}

impl ResearchSummary {
    #[must_use]
    pub fn from_report(report: &ResearchReport) -> Self {
        let first_row = report.ratings.first();
        let entries = report
            .features
            .iter()
            .enumerate()
            .map(|(i, name)| RatingEntry {
                name: name.clone(),
                value: first_row.and_then(|row| row.get(i)).copied().unwrap_or(0.0),
                fill: feature_fill(i),
            })
            .collect();
        Self { product_name: report.product_name.clone(), overall: overall_rating(&report.ratings), entries }
    }

    /// Overall score formatted the way the dialog headline shows it.
    #[must_use]
    pub fn overall_label(&self) -> String {
        format!("{:.1}", self.overall)
    }

    #[must_use]
    pub fn feature_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }
}

/// Mean of all ratings across all rows, one decimal. Empty input is `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn overall_rating(ratings: &[Vec<f64>]) -> f64 {
    let (sum, count) = ratings
        .iter()
        .flatten()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64 * 10.0).round() / 10.0
}

#[must_use]
pub fn feature_fill(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", index * HUE_STEP_DEG)
}

/// Needle angle on a half-circle gauge: 0° at rating 1, 180° at rating 5.
#[must_use]
pub fn needle_angle_deg(rating: f64) -> f64 {
    if !rating.is_finite() {
        return 0.0;
    }
    let clamped = rating.clamp(RATING_MIN, RATING_MAX);
    180.0 * (clamped - RATING_MIN) / (RATING_MAX - RATING_MIN)
}
