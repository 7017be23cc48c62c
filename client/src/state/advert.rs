//! Ad copy generation from a research summary.
//!
//! ERROR HANDLING
//! ==============
//! Missing key and empty feature selection are rejected before the completion
//! client is touched. A completion failure is returned to the caller, which
//! shows [`AD_FAILURE_MESSAGE`] in place of the copy.

#[cfg(test)]
#[path = "advert_test.rs"]
mod advert_test;

use std::fmt::Write as _;

use super::api_key::ApiKeyHolder;
use super::research::ResearchSummary;
use crate::net::completion::CompletionClient;
use crate::net::error::ConsoleError;

pub const NO_FEATURES_PROMPT: &str = "Please select at least one feature.";
pub const AD_FAILURE_MESSAGE: &str =
    "Failed to generate advertisement. Please check your OpenAI API key and try again.";

/// Checkbox state for the features offered by a research report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSelection {
    entries: Vec<(String, bool)>,
}

impl FeatureSelection {
    /// All features start unchecked.
    #[must_use]
    pub fn new(features: &[String]) -> Self {
        Self { entries: features.iter().map(|f| (f.clone(), false)).collect() }
    }

    pub fn toggle(&mut self, feature: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| name == feature) {
            entry.1 = !entry.1;
        }
    }

    #[must_use]
    pub fn is_selected(&self, feature: &str) -> bool {
        self.entries.iter().any(|(name, on)| *on && name == feature)
    }

    /// Checked features in report order.
    #[must_use]
    pub fn selected(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Result of a successful generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdCopy {
    pub text: String,
    /// Temporary key to store for the rest of the tab, if one was used while
    /// the store was empty.
    pub promote_key: Option<String>,
}

/// Prompt asking for a short ad that leans on the selected features' ratings.
#[must_use]
pub fn build_ad_prompt(summary: &ResearchSummary, selected: &[String]) -> String {
    let mut prompt = format!(
        "Create a short advertisement for {} highlighting the following features: {}.",
        summary.product_name,
        selected.join(", ")
    );
    prompt.push_str(" Use the ratings provided to emphasize strengths:");
    for entry in &summary.entries {
        let _ = write!(prompt, " {}={:.1}", entry.name, entry.value);
    }
    let _ = write!(prompt, " (overall {}).", summary.overall_label());
    prompt
}

/// Validate inputs, then ask the completion client for ad copy.
///
/// # Errors
///
/// - [`ConsoleError::ValidationGap`] when no key is available or no feature
///   is selected; the client is not called.
/// - Whatever the completion client returns on failure.
pub async fn generate_advert<C: CompletionClient>(
    client: &C,
    keys: &ApiKeyHolder,
    temporary_key: &str,
    summary: &ResearchSummary,
    selection: &FeatureSelection,
) -> Result<AdCopy, ConsoleError> {
    let resolved = keys.resolve(temporary_key)?;
    let selected = selection.selected();
    if selected.is_empty() {
        return Err(ConsoleError::ValidationGap(NO_FEATURES_PROMPT));
    }

    let prompt = build_ad_prompt(summary, &selected);
    let text = client.complete(&resolved.key, &prompt).await?;
    let promote_key = resolved.temporary.then_some(resolved.key);
    Ok(AdCopy { text, promote_key })
}
