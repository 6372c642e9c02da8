//! The per-frame render pass.
//!
//! Every frame recomputes the layout, projects the eligible records,
//! resolves the hovered point, and repaints everything from scratch. No
//! hover or projection state survives across frames, which keeps the view
//! consistent with the filter state by construction.

use egui::{
    pos2, vec2, Align2, Context, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, StrokeKind,
};

use crate::app::{FrameLayout, VolcanoScopeApp};
use crate::filter::FilterState;
use crate::projection::{project_visible, ProjectedPoint, MAX_POINT_SIZE, MIN_POINT_SIZE};
use crate::selection::resolve_hover;

impl VolcanoScopeApp {
    pub(crate) fn render_frame(&mut self, ctx: &Context) {
        // Clicks are resolved against the button registry from the previous
        // frame, before anything is painted, so the transition is visible in
        // the frame the click lands on.
        let click_pos = ctx.input(|i| {
            if i.pointer.any_click() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = click_pos {
            self.handle_click(pos, ctx);
        }

        let frame = egui::Frame::NONE.fill(self.config.theme.background);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let layout = FrameLayout::compute(ui.max_rect(), &self.config.layout);
            let pointer = ctx.pointer_latest_pos();

            let points = project_visible(&self.dataset, &self.filter, layout.map);
            let hovered = resolve_hover(pointer, &points, layout.map).copied();

            let painter = ui.painter();
            self.draw_chrome(painter, &layout);
            self.draw_points(painter, &points);
            if let Some(point) = hovered {
                self.draw_highlight(painter, &point);
                self.draw_detail(painter, &layout, point.index);
            }
            self.draw_legend(painter, &layout);
            self.draw_filters(painter, &layout, pointer);
        });
    }

    /// Set the filter when the click lands on a registered button. At most
    /// one transition per click: the registry returns the first hit.
    fn handle_click(&mut self, pos: Pos2, ctx: &Context) {
        if let Some(label) = self.filter_buttons.hit(pos) {
            let next = FilterState::from_label(label);
            if next != self.filter {
                self.filter = next;
                ctx.request_repaint();
            }
        }
    }

    /// Side panel background, separator line, and the headline block.
    fn draw_chrome(&self, painter: &Painter, layout: &FrameLayout) {
        let theme = &self.config.theme;

        painter.rect_filled(layout.panel, CornerRadius::ZERO, theme.panel_background);
        painter.line_segment(
            [layout.panel.left_top(), layout.panel.left_bottom()],
            Stroke::new(1.0, theme.separator),
        );

        painter.text(
            layout.title_pos,
            Align2::LEFT_TOP,
            &self.config.headline,
            FontId::proportional(32.0),
            theme.accent,
        );
        painter.text(
            layout.title_pos + vec2(0.0, 40.0),
            Align2::LEFT_TOP,
            &self.config.subheadline,
            FontId::proportional(14.0),
            theme.accent,
        );
    }

    /// The square markers of every visible record.
    fn draw_points(&self, painter: &Painter, points: &[ProjectedPoint]) {
        for point in points {
            painter.rect_filled(
                Rect::from_center_size(point.pos, vec2(point.size, point.size)),
                CornerRadius::ZERO,
                self.config.theme.class_color(point.class),
            );
        }
    }

    /// White outline around the hovered marker.
    fn draw_highlight(&self, painter: &Painter, point: &ProjectedPoint) {
        let outline = point.size + 5.0;
        painter.rect_stroke(
            Rect::from_center_size(point.pos, vec2(outline, outline)),
            CornerRadius::ZERO,
            Stroke::new(3.0, self.config.theme.highlight),
            StrokeKind::Outside,
        );
    }

    /// Detail bar below the map for the hovered record.
    fn draw_detail(&self, painter: &Painter, layout: &FrameLayout, index: usize) {
        let Some(record) = self.dataset.records.get(index) else {
            return;
        };
        let theme = &self.config.theme;

        painter.rect_filled(
            layout.detail,
            CornerRadius::same(5),
            theme.panel_background,
        );

        let origin = layout.detail.left_top() + vec2(10.0, 8.0);
        painter.text(
            origin,
            Align2::LEFT_TOP,
            &record.name,
            FontId::proportional(16.0),
            theme.accent,
        );

        let elevation = record
            .elevation
            .map(|e| format!("{e:.0} m"))
            .unwrap_or_else(|| "unknown".to_string());
        let lines = [
            format!("Country: {}", record.country),
            format!("Status: {}", record.status),
            format!("Type: {}", record.volcano_type),
            format!("Elevation: {elevation}"),
            format!("Last Eruption: {}", record.last_eruption),
        ];
        for (i, line) in lines.iter().enumerate() {
            painter.text(
                origin + vec2(0.0, 24.0 + 16.0 * i as f32),
                Align2::LEFT_TOP,
                line,
                FontId::proportional(12.0),
                theme.text,
            );
        }
    }

    /// Legend: activity-class colors and the elevation → size mapping.
    fn draw_legend(&self, painter: &Painter, layout: &FrameLayout) {
        let theme = &self.config.theme;
        let origin = layout.legend_origin;
        let text = |pos: Pos2, s: &str, size: f32, color| {
            painter.text(pos, Align2::LEFT_TOP, s, FontId::proportional(size), color);
        };

        text(origin, "MAP LEGEND", 18.0, theme.accent);
        text(origin + vec2(0.0, 30.0), "COLOR (Activity Status)", 14.0, theme.text);

        let swatch = |offset: f32, color| {
            painter.rect_filled(
                Rect::from_min_size(origin + vec2(0.0, offset), vec2(15.0, 15.0)),
                CornerRadius::ZERO,
                color,
            );
        };
        swatch(50.0, theme.active);
        text(origin + vec2(25.0, 50.0), "Active / Historical (D)", 14.0, theme.text);
        swatch(75.0, theme.dormant);
        text(origin + vec2(25.0, 75.0), "Dormant / Holocene (U)", 14.0, theme.text);

        text(origin + vec2(0.0, 120.0), "SIZE (Elevation in meters)", 14.0, theme.text);
        let ranges = &self.dataset.ranges;
        painter.rect_filled(
            Rect::from_min_size(
                origin + vec2(5.0, 145.0),
                vec2(MIN_POINT_SIZE, MIN_POINT_SIZE),
            ),
            CornerRadius::ZERO,
            theme.other,
        );
        text(
            origin + vec2(25.0, 140.0),
            &format!("{:.0} m (Min)", ranges.min_elev),
            14.0,
            theme.text,
        );
        painter.rect_filled(
            Rect::from_min_size(
                origin + vec2(0.0, 170.0),
                vec2(MAX_POINT_SIZE, MAX_POINT_SIZE),
            ),
            CornerRadius::ZERO,
            theme.other,
        );
        text(
            origin + vec2(25.0, 172.0),
            &format!("{:.0} m (Max)", ranges.max_elev),
            14.0,
            theme.text,
        );
    }

    /// Filter button column. Rebuilds the click registry as it paints so the
    /// registry always matches what is on screen.
    fn draw_filters(&mut self, painter: &Painter, layout: &FrameLayout, pointer: Option<Pos2>) {
        let theme = &self.config.theme;
        let cfg = &self.config.layout;

        painter.text(
            layout.filters_origin,
            Align2::LEFT_TOP,
            "FILTERS",
            FontId::proportional(18.0),
            theme.accent,
        );

        let width = layout.panel.width() - cfg.panel_padding * 2.0;
        let mut y = layout.filters_origin.y + 30.0;

        self.filter_buttons.clear();
        for option in &self.options {
            let rect = Rect::from_min_size(
                pos2(layout.filters_origin.x, y),
                vec2(width, cfg.button_height),
            );
            let is_active = self.filter.label() == option.label;
            let is_hovered = pointer.is_some_and(|p| rect.contains(p));

            let fill = if is_active {
                theme.accent
            } else if is_hovered {
                theme.button_hover
            } else {
                theme.button_idle
            };
            painter.rect_filled(rect, CornerRadius::same(5), fill);
            painter.text(
                pos2(rect.left() + 10.0, rect.center().y),
                Align2::LEFT_CENTER,
                format!("{} ({})", option.label, option.count),
                FontId::proportional(14.0),
                theme.text,
            );

            self.filter_buttons.register(&option.label, rect);
            y += cfg.button_spacing;
        }
    }
}
