//! Configuration for the viewer window and layout.

use crate::theme::Theme;

/// Geometry constants for the per-frame layout.
///
/// All rectangles are recomputed from the current window size every frame
/// (see [`crate::app::FrameLayout`]), so resizing needs no special handling.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Outer margin as a fraction of window width.
    pub margin_ratio: f32,
    /// Lower bound for the outer margin in pixels.
    pub min_margin: f32,
    /// Fraction of the window width reserved for the map (the rest is the
    /// side panel).
    pub map_width_fraction: f32,
    /// Vertical space above the map for the title block.
    pub title_block_height: f32,
    /// Vertical space below the map reserved for the hover detail bar.
    pub bottom_reserve: f32,
    /// Height of the hover detail bar.
    pub detail_bar_height: f32,
    /// Filter button height and vertical stride.
    pub button_height: f32,
    pub button_spacing: f32,
    /// Horizontal padding of the side-panel content.
    pub panel_padding: f32,
    /// Vertical offset of the legend block from the top of the side panel.
    pub legend_offset: f32,
    /// Vertical offset of the filter block from the top of the side panel.
    pub filters_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_ratio: 0.04,
            min_margin: 20.0,
            map_width_fraction: 0.7,
            title_block_height: 70.0,
            bottom_reserve: 280.0,
            detail_bar_height: 120.0,
            button_height: 25.0,
            button_spacing: 30.0,
            panel_padding: 20.0,
            legend_offset: 60.0,
            filters_offset: 300.0,
        }
    }
}

/// Top-level configuration for the viewer.
#[derive(Clone)]
pub struct VolcanoScopeConfig {
    /// Native window title.
    pub title: String,
    /// Headline rendered above the map.
    pub headline: String,
    /// Subheadline below the headline.
    pub subheadline: String,
    /// Visual theme.
    pub theme: Theme,
    /// Layout geometry.
    pub layout: LayoutConfig,
    /// Optional eframe native-window options; a sensible default window is
    /// used when absent.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for VolcanoScopeConfig {
    fn default() -> Self {
        Self {
            title: "VolcanoScope".to_string(),
            headline: "VOLCANOES OF THE WORLD".to_string(),
            subheadline:
                "Size by Elevation, Color by Activity Status. Click filters on the right."
                    .to_string(),
            theme: Theme::default(),
            layout: LayoutConfig::default(),
            native_options: None,
        }
    }
}
