//! Per-frame layout: window rect → map, panel, and detail rectangles.

use egui::{pos2, vec2, Pos2, Rect};

use crate::config::LayoutConfig;

/// The rectangles of one frame, derived from the current window size.
///
/// Recomputed every frame, so window resizes are handled for free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    pub margin: f32,
    /// Top-left anchor of the headline text.
    pub title_pos: Pos2,
    /// The map area the projection engine targets.
    pub map: Rect,
    /// The full-height side panel on the right.
    pub panel: Rect,
    /// The hover detail bar below the map.
    pub detail: Rect,
    /// Top-left anchor of the legend block inside the panel.
    pub legend_origin: Pos2,
    /// Top-left anchor of the filter block inside the panel.
    pub filters_origin: Pos2,
}

impl FrameLayout {
    pub fn compute(screen: Rect, cfg: &LayoutConfig) -> Self {
        let margin = (screen.width() * cfg.margin_ratio).max(cfg.min_margin);
        let panel_x = screen.left() + screen.width() * cfg.map_width_fraction;

        let title_pos = pos2(screen.left() + margin, screen.top() + margin);

        let map_top = screen.top() + margin + cfg.title_block_height;
        // Keep a usable map even in tiny windows.
        let map_height = (screen.height() - cfg.bottom_reserve).max(50.0);
        let map = Rect::from_min_max(
            pos2(screen.left() + margin, map_top),
            pos2((panel_x - margin).max(screen.left() + margin + 50.0), map_top + map_height),
        );

        let panel = Rect::from_min_max(pos2(panel_x, screen.top()), screen.max);

        let detail = Rect::from_min_size(
            pos2(map.left(), map.bottom() + 10.0),
            vec2(map.width(), cfg.detail_bar_height - 10.0),
        );

        let legend_origin = pos2(
            panel_x + cfg.panel_padding,
            screen.top() + margin + cfg.legend_offset,
        );
        let filters_origin = pos2(
            panel_x + cfg.panel_padding,
            screen.top() + margin + cfg.filters_offset,
        );

        Self {
            margin,
            title_pos,
            map,
            panel,
            detail,
            legend_origin,
            filters_origin,
        }
    }
}
