//! Top-level entry point for running the viewer as a native window.

use egui::vec2;

use crate::app::VolcanoScopeApp;
use crate::config::VolcanoScopeConfig;
use crate::data::dataset::Dataset;

/// Launch the viewer in a native window.
///
/// Applies the configured theme, opens the window, and enters the eframe
/// event loop. Blocks until the window is closed.
pub fn run_volcanoscope(
    dataset: Dataset,
    mut config: VolcanoScopeConfig,
) -> eframe::Result<()> {
    let title = config.title.clone();
    let theme = config.theme.clone();

    let mut options = config.native_options.take().unwrap_or_default();
    if options.viewport.inner_size.is_none() {
        options.viewport = options.viewport.clone().with_inner_size(vec2(1400.0, 900.0));
    }

    let app = VolcanoScopeApp::new(dataset, config);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
