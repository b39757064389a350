//! Cardflow - drag option cards onto a node canvas

use cardflow::constants::window;
use cardflow::FlowEditor;
use eframe::egui;

/// Application entry point
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window::DEFAULT_SIZE)
            .with_min_inner_size(window::MIN_SIZE)
            .with_app_id(window::APP_ID),
        ..Default::default()
    };

    log::info!("starting {} {}", window::TITLE, env!("CARGO_PKG_VERSION"));

    eframe::run_native(
        window::TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            cc.egui_ctx.set_theme(egui::Theme::Dark);
            Ok(Box::new(FlowEditor::new()))
        }),
    )
}
