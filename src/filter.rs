//! Category filter state, the options offered for it, and the clickable
//! button registry.

use egui::{Pos2, Rect};

use crate::data::dataset::Dataset;
use crate::data::record::Record;

/// Label of the always-present unfiltered option.
pub const ALL_LABEL: &str = "All";

/// The currently active category restricting which records are eligible
/// for projection and selection.
///
/// Initialized to [`FilterState::All`]; mutated only by the interaction
/// controller in response to filter-button clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterState {
    #[default]
    All,
    Category(String),
}

impl FilterState {
    /// Whether `record` passes the current filter. Pure and total: every
    /// record is eligible under [`FilterState::All`].
    pub fn is_eligible(&self, record: &Record) -> bool {
        match self {
            FilterState::All => true,
            FilterState::Category(category) => record.category == *category,
        }
    }

    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            FilterState::All
        } else {
            FilterState::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterState::All => ALL_LABEL,
            FilterState::Category(category) => category,
        }
    }
}

/// One entry in the filter button column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub count: usize,
}

/// Build the list of filter options for a dataset.
///
/// "All" comes first and carries the geographically-valid record count.
/// Categories follow in descending count order with alphabetical
/// tie-breaking, so the button column layout is reproducible. Singleton
/// categories (count ≤ 1) are suppressed to reduce clutter.
pub fn filter_options(dataset: &Dataset) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        label: ALL_LABEL.to_string(),
        count: dataset.geo_valid_count,
    }];

    let mut categories: Vec<(&str, usize)> = dataset
        .category_counts
        .iter()
        .filter(|(_, &count)| count > 1)
        .map(|(label, &count)| (label.as_str(), count))
        .collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    options.extend(categories.into_iter().map(|(label, count)| FilterOption {
        label: label.to_string(),
        count,
    }));
    options
}

/// Registry of the filter buttons rendered last frame, used to resolve
/// clicks. Rebuilt by the filter panel every frame; buttons never overlap,
/// so the first containing rect wins.
#[derive(Debug, Clone, Default)]
pub struct FilterButtons {
    slots: Vec<(String, Rect)>,
}

impl FilterButtons {
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn register(&mut self, label: &str, rect: Rect) {
        self.slots.push((label.to_string(), rect));
    }

    /// The label of the first registered button containing `pos`, if any.
    pub fn hit(&self, pos: Pos2) -> Option<&str> {
        self.slots
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(label, _)| label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
