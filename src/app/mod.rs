//! Main application module for VolcanoScope.
//!
//! Split into focused sub-modules:
//!
//! | Sub-module  | Responsibility |
//! | ----------- | -------------- |
//! | [`layout`]  | Per-frame rectangle computation from the window size |
//! | [`update`]  | The per-frame render pass: projection, hover, painting, click handling |
//! | [`run`]     | Top-level [`run_volcanoscope()`] entry point |

mod layout;
mod run;
mod update;

pub use layout::FrameLayout;
pub use run::run_volcanoscope;

use crate::config::VolcanoScopeConfig;
use crate::data::dataset::Dataset;
use crate::filter::{filter_options, FilterButtons, FilterOption, FilterState};

/// The viewer application: owns the dataset, the filter state, and the
/// filter-button registry.
///
/// This is the single context object through which all mutable interaction
/// state flows; projection and hover resolution are pure functions fed from
/// it each frame. All mutation happens on the UI thread between frames, so
/// no locking is involved anywhere.
pub struct VolcanoScopeApp {
    pub(crate) dataset: Dataset,
    /// Currently selected category filter. Mutated only by click handling.
    pub(crate) filter: FilterState,
    /// Bounding boxes of the filter buttons rendered last frame; clicks are
    /// resolved against this registry.
    pub(crate) filter_buttons: FilterButtons,
    /// Filter options in display order. Derived once from the dataset's
    /// category counts, which never change after loading.
    pub(crate) options: Vec<FilterOption>,
    pub(crate) config: VolcanoScopeConfig,
}

impl VolcanoScopeApp {
    pub fn new(dataset: Dataset, config: VolcanoScopeConfig) -> Self {
        let options = filter_options(&dataset);
        Self {
            dataset,
            filter: FilterState::default(),
            filter_buttons: FilterButtons::default(),
            options,
            config,
        }
    }

    /// The active filter (exposed for embedding and tests).
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }
}

impl eframe::App for VolcanoScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_frame(ctx);
    }
}
