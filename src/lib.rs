//! VolcanoScope crate root: re-exports and module wiring.
//!
//! This crate renders a volcano point dataset as an interactive 2D map
//! built on egui/eframe: elevation-scaled square markers, a hover-driven
//! detail bar, a legend, and category filter buttons.
//!
//! The implementation is split into cohesive modules:
//! - `data`: records, dataset summary statistics, CSV loading
//! - `projection`: geographic coordinates → screen space
//! - `selection`: pointer → nearest visible point resolution
//! - `filter`: category filter state, options, and button registry
//! - `theme`: the fixed dark palette and activity-class colors
//! - `config`: shared configuration for the viewer window and layout
//! - `app`: the eframe application shell and per-frame render pass

pub mod app;
pub mod config;
pub mod data;
pub mod filter;
pub mod projection;
pub mod selection;
pub mod theme;

// Public re-exports for a compact external API
pub use app::{run_volcanoscope, VolcanoScopeApp};
pub use config::{LayoutConfig, VolcanoScopeConfig};
pub use data::dataset::{Dataset, DatasetError, RangeSet};
pub use data::loader::{load_csv, load_csv_path};
pub use data::record::{ActivityClass, Record};
pub use filter::{filter_options, FilterButtons, FilterOption, FilterState};
pub use projection::{project, project_visible, remap, ProjectedPoint, MAX_POINT_SIZE, MIN_POINT_SIZE};
pub use selection::{resolve_hover, HIT_RADIUS_FACTOR};
pub use theme::Theme;
