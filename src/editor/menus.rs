//! Canvas context menu

use crate::constants::ids::CANVAS_CONTEXT_MENU;
use crate::theme::colors;
use egui::{Pos2, Rect, Vec2};

/// Standard menu styling for consistency across all menus
pub fn apply_menu_style(ui: &mut egui::Ui) {
    let style = ui.style_mut();
    style.visuals.window_fill = colors().menu_background;
    style.visuals.extreme_bg_color = colors().menu_background;
    style.visuals.widgets.noninteractive.bg_fill = colors().menu_background;
    style.visuals.widgets.hovered.bg_fill = colors().menu_hover;

    style.visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_gray(200);
    style.visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;

    // Tight menu layout
    style.spacing.item_spacing.y = 0.0;
}

/// Render a menu item with full-width hover highlighting
///
/// Disabled items are drawn dimmed and never report a click.
pub fn render_menu_item(ui: &mut egui::Ui, text: &str, menu_width: f32, enabled: bool) -> bool {
    let desired_size = Vec2::new(
        menu_width,
        ui.spacing().button_padding.y * 2.0 + ui.text_style_height(&egui::TextStyle::Body),
    );
    let sense = if enabled {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(desired_size, sense);

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        if enabled && response.hovered() {
            let container_rect = ui.max_rect();
            let highlight_rect = Rect::from_min_max(
                Pos2::new(container_rect.min.x - 7.0, rect.min.y),
                Pos2::new(container_rect.max.x + 7.0, rect.max.y),
            );
            ui.painter().rect_filled(highlight_rect, 0.0, colors().menu_hover);
        }

        let text_color = if enabled {
            visuals.text_color()
        } else {
            egui::Color32::from_gray(110)
        };
        ui.painter().text(
            rect.left_center() + egui::vec2(ui.spacing().button_padding.x, 0.0),
            egui::Align2::LEFT_CENTER,
            text,
            egui::FontId::default(),
            text_color,
        );
    }

    enabled && response.clicked()
}

/// Actions offered by the canvas context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuAction {
    FitView,
    DeleteSelected,
}

impl ContextMenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            ContextMenuAction::FitView => "Fit view",
            ContextMenuAction::DeleteSelected => "Delete selected",
        }
    }
}

/// Result of drawing the context menu for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Open,
    Closed,
    Chosen(ContextMenuAction),
}

/// Right-click menu shown at a fixed screen position
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    position: Option<Pos2>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_at(&mut self, position: Pos2) {
        self.position = Some(position);
    }

    pub fn close(&mut self) {
        self.position = None;
    }

    pub fn is_open(&self) -> bool {
        self.position.is_some()
    }

    /// Draw the menu if open; a click elsewhere closes it
    pub fn show(&mut self, ctx: &egui::Context, has_selection: bool) -> MenuOutcome {
        let Some(position) = self.position else {
            return MenuOutcome::Closed;
        };

        let items = [
            (ContextMenuAction::FitView, true),
            (ContextMenuAction::DeleteSelected, has_selection),
        ];

        let area = egui::Area::new(egui::Id::new(CANVAS_CONTEXT_MENU))
            .fixed_pos(position)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(colors().menu_background)
                    .show(ui, |ui| {
                        apply_menu_style(ui);

                        let text_width = items
                            .iter()
                            .map(|(action, _)| {
                                ui.fonts(|f| {
                                    f.layout_no_wrap(
                                        action.label().to_string(),
                                        egui::FontId::default(),
                                        egui::Color32::WHITE,
                                    )
                                })
                                .rect
                                .width()
                            })
                            .fold(0.0, f32::max);
                        let menu_width = (text_width + ui.spacing().button_padding.x * 2.0 + 20.0).max(120.0);
                        ui.set_min_width(menu_width);
                        ui.set_max_width(menu_width);

                        let mut chosen = None;
                        for (action, enabled) in items {
                            if render_menu_item(ui, action.label(), menu_width, enabled) {
                                chosen = Some(action);
                            }
                        }
                        chosen
                    })
                    .inner
            });

        if let Some(action) = area.inner {
            self.close();
            return MenuOutcome::Chosen(action);
        }
        if area.response.clicked_elsewhere() {
            self.close();
            return MenuOutcome::Closed;
        }
        MenuOutcome::Open
    }
}
