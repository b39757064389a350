//! Palette side panel: option cards, the "Add card" control and drag sources

use crate::constants::{ids::DRAG_PREVIEW, panel};
use crate::palette::{OptionId, Palette, PaletteDrag, PaletteOption};
use crate::theme::colors;
use egui::{Sense, Vec2};

/// What a click on a card asks the editor to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    /// Open the dialog with an empty draft
    Create,
    /// Open the dialog pre-filled with this option
    Edit(OptionId),
}

impl PaletteAction {
    /// Action for an activated card; `None` is the "Add card" entry
    pub fn for_card(option: Option<&PaletteOption>) -> Self {
        match option {
            Some(option) => PaletteAction::Edit(option.id.clone()),
            None => PaletteAction::Create,
        }
    }
}

/// Renders the palette; holds no state of its own
pub struct PalettePanel;

impl PalettePanel {
    /// Draw every option card followed by "Add card"
    ///
    /// Redrawn in full each frame. Returns the action of a clicked card.
    pub fn render_list(ui: &mut egui::Ui, palette: &Palette) -> Option<PaletteAction> {
        let mut action = None;

        for (index, option) in palette.options().iter().enumerate() {
            let response = Self::card(ui, &option.title, Some(&option.sub_title), Sense::click_and_drag());
            if response.drag_started() {
                Self::drag_start(&response, palette, index);
            }
            if response.clicked() {
                action = Some(PaletteAction::for_card(Some(option)));
            }
            ui.add_space(panel::CARD_SPACING);
        }

        let add_card = Self::card(ui, "Add card", None, Sense::click());
        if add_card.clicked() {
            action = Some(PaletteAction::for_card(None));
        }

        action
    }

    /// Register the option at `index` as the drag-and-drop payload
    fn drag_start(response: &egui::Response, palette: &Palette, index: usize) {
        match PaletteDrag::for_index(palette, index) {
            Some(payload) => {
                log::debug!("dragging palette option {}", payload.option_id);
                response.dnd_set_drag_payload(payload);
            }
            None => log::debug!("drag started on stale palette index {index}"),
        }
    }

    /// Label that follows the pointer while a card is being dragged
    pub fn show_drag_preview(ctx: &egui::Context, palette: &Palette) {
        let Some(payload) = egui::DragAndDrop::payload::<PaletteDrag>(ctx) else {
            return;
        };
        let Some(pointer) = ctx.pointer_latest_pos() else {
            return;
        };
        let Some(option) = palette.find(&payload.option_id).found() else {
            return;
        };

        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        egui::Area::new(egui::Id::new(DRAG_PREVIEW))
            .fixed_pos(pointer + Vec2::new(12.0, 12.0))
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(format!("{} {}", option.kind.icon(), option.title));
                });
            });
    }

    /// A fixed-height card with a centred title and optional subtitle
    fn card(ui: &mut egui::Ui, title: &str, sub_title: Option<&str>, sense: Sense) -> egui::Response {
        let size = Vec2::new(ui.available_width(), panel::CARD_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, sense);

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() || response.dragged() {
                colors().card_hover
            } else {
                colors().card_background
            };
            let painter = ui.painter();
            painter.rect_filled(rect, 4.0, fill);
            painter.rect_stroke(
                rect,
                4.0,
                egui::Stroke::new(1.0, colors().card_border),
                egui::StrokeKind::Inside,
            );

            let title_pos = match sub_title {
                Some(_) => rect.center() - Vec2::new(0.0, 10.0),
                None => rect.center(),
            };
            painter.text(
                title_pos,
                egui::Align2::CENTER_CENTER,
                title,
                egui::FontId::proportional(18.0),
                ui.visuals().strong_text_color(),
            );
            if let Some(sub_title) = sub_title {
                painter.text(
                    rect.center() + Vec2::new(0.0, 14.0),
                    egui::Align2::CENTER_CENTER,
                    sub_title,
                    egui::FontId::proportional(14.0),
                    colors().card_subtitle,
                );
            }
        }

        if response.hovered() {
            ui.ctx().set_cursor_icon(if sense.senses_drag() {
                egui::CursorIcon::Grab
            } else {
                egui::CursorIcon::PointingHand
            });
        }

        response
    }
}
