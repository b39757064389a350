//! Editor window: palette panel, canvas and option dialog

pub mod canvas;
pub mod dialog;
pub mod interaction;
pub mod menus;
pub mod palette_panel;
pub mod rendering;
pub mod viewport;

// Re-exports
pub use canvas::{Canvas, DropEffect, DropOutcome, DropRejection};
pub use dialog::{DialogMode, DialogState, OptionDialog};
pub use interaction::InteractionManager;
pub use menus::{ContextMenu, ContextMenuAction};
pub use palette_panel::{PaletteAction, PalettePanel};
pub use rendering::NodeRenderer;
pub use viewport::Viewport;

use crate::constants::panel;
use crate::palette::{Lookup, Palette};
use eframe::egui;

/// Main application state
pub struct FlowEditor {
    palette: Palette,
    canvas: Canvas,
    dialog: OptionDialog,
}

impl FlowEditor {
    /// Editor seeded with the bundled palette
    ///
    /// A broken seed list is logged and replaced by an empty palette.
    pub fn new() -> Self {
        let palette = Palette::load_default().unwrap_or_else(|error| {
            log::error!("could not load the default palette: {error}");
            Palette::default()
        });
        log::info!("palette loaded with {} option(s)", palette.len());
        Self::with_palette(palette)
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            canvas: Canvas::new(),
            dialog: OptionDialog::new(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn dialog(&self) -> &OptionDialog {
        &self.dialog
    }

    /// Route a palette click to the dialog
    pub fn apply_palette_action(&mut self, action: PaletteAction) {
        match action {
            PaletteAction::Create => self.dialog.open_create(),
            PaletteAction::Edit(id) => match self.palette.find(&id) {
                Lookup::Found(option) => self.dialog.open_edit(option),
                Lookup::NotFound => log::warn!("clicked palette option {id} is gone"),
            },
        }
    }

    /// Lay out and run one frame of the editor
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut action = None;

        egui::SidePanel::left(panel::PANEL_ID)
            .exact_width(panel::PALETTE_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        action = PalettePanel::render_list(ui, &self.palette);
                    });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui, &self.palette, !self.dialog.is_open());
            });

        PalettePanel::show_drag_preview(ctx, &self.palette);

        if let Some(action) = action {
            self.apply_palette_action(action);
        }
        self.dialog.show(ctx, &mut self.palette);
    }
}

impl Default for FlowEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for FlowEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeKind;
    use crate::palette::{OptionId, PaletteOption};

    fn editor() -> FlowEditor {
        FlowEditor::with_palette(Palette::new(vec![PaletteOption::new(
            OptionId::sequential(1),
            "Home",
            "Landing",
            NodeKind::Page,
        )]))
    }

    #[test]
    fn test_palette_actions_open_dialog() {
        let mut editor = editor();

        editor.apply_palette_action(PaletteAction::Edit(OptionId::new("node_1")));
        assert_eq!(editor.dialog().mode(), Some(DialogMode::Edit));
        assert_eq!(editor.dialog().draft().unwrap().title, "Home");

        editor.apply_palette_action(PaletteAction::Create);
        assert_eq!(editor.dialog().mode(), Some(DialogMode::Create));
    }

    #[test]
    fn test_missing_option_keeps_dialog_closed() {
        let mut editor = editor();
        editor.apply_palette_action(PaletteAction::Edit(OptionId::new("node_7")));
        assert!(!editor.dialog().is_open());
    }

    #[test]
    fn test_new_uses_bundled_palette() {
        let editor = FlowEditor::new();
        assert_eq!(editor.palette(), &Palette::load_default().unwrap());
        assert!(editor.canvas().graph().nodes().is_empty());
    }

    /// Drives whole editor frames from raw pointer and keyboard events
    struct Driver {
        ctx: egui::Context,
        editor: FlowEditor,
    }

    // Positions inside the 320px palette panel: the first card and "Add card"
    const FIRST_CARD: egui::Pos2 = egui::pos2(100.0, 40.0);
    const ADD_CARD: egui::Pos2 = egui::pos2(160.0, 300.0);

    impl Driver {
        fn new() -> Self {
            let mut driver = Self {
                ctx: egui::Context::default(),
                editor: FlowEditor::new(),
            };
            driver.idle();
            driver.idle();
            driver
        }

        fn frame(&mut self, events: Vec<egui::Event>) {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1024.0, 768.0))),
                events,
                ..Default::default()
            };
            let editor = &mut self.editor;
            let _ = self.ctx.run(input, |ctx| editor.show(ctx));
        }

        fn idle(&mut self) {
            self.frame(Vec::new());
        }

        fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            }
        }

        fn press(&mut self, pos: egui::Pos2) {
            self.frame(vec![egui::Event::PointerMoved(pos), Self::button(pos, true)]);
        }

        fn release(&mut self, pos: egui::Pos2) {
            self.frame(vec![egui::Event::PointerMoved(pos), Self::button(pos, false)]);
        }

        fn click(&mut self, pos: egui::Pos2) {
            self.press(pos);
            self.release(pos);
            self.idle();
        }

        fn key(&mut self, key: egui::Key) {
            self.frame(vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }]);
            self.idle();
        }

        fn type_text(&mut self, text: &str) {
            self.frame(vec![egui::Event::Text(text.to_owned())]);
            self.idle();
        }

        /// Screen rect a widget occupied in the last frame
        fn widget_rect(&self, id: &str) -> egui::Rect {
            self.ctx
                .read_response(egui::Id::new(id))
                .map(|response| response.rect)
                .unwrap_or_else(|| panic!("widget {id} was not drawn"))
        }
    }

    #[test]
    fn test_dragging_a_card_onto_the_canvas() {
        let mut driver = Driver::new();
        let release = egui::pos2(700.0, 240.0);

        driver.press(FIRST_CARD);
        for step in 1..=20 {
            let t = step as f32 / 20.0;
            driver.frame(vec![egui::Event::PointerMoved(FIRST_CARD.lerp(release, t))]);
        }
        driver.release(release);
        driver.idle();

        let nodes = driver.editor.canvas().graph().nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label, "Home");
        assert_eq!(nodes[0].kind, NodeKind::Page);
        assert_eq!(nodes[0].position, driver.editor.canvas().project(release));
        assert!(!driver.editor.dialog().is_open());
    }

    #[test]
    fn test_card_click_opens_edit_and_backdrop_closes() {
        let mut driver = Driver::new();
        let before = driver.editor.palette().clone();

        driver.click(FIRST_CARD);
        assert_eq!(driver.editor.dialog().mode(), Some(DialogMode::Edit));
        assert_eq!(driver.editor.dialog().draft().unwrap().title, "Home");

        driver.click(egui::pos2(900.0, 700.0));
        assert!(!driver.editor.dialog().is_open());
        assert_eq!(driver.editor.palette(), &before);
        assert!(driver.editor.canvas().graph().nodes().is_empty());
    }

    #[test]
    fn test_add_card_then_escape_discards() {
        let mut driver = Driver::new();
        let before = driver.editor.palette().clone();

        driver.click(ADD_CARD);
        assert_eq!(driver.editor.dialog().mode(), Some(DialogMode::Create));

        driver.key(egui::Key::Escape);
        assert!(!driver.editor.dialog().is_open());
        assert_eq!(driver.editor.palette(), &before);
    }

    #[test]
    fn test_typed_title_is_saved() {
        use crate::constants::ids::{SUB_TITLE_FIELD, TITLE_FIELD};

        let mut driver = Driver::new();
        let count = driver.editor.palette().len();

        driver.click(ADD_CARD);
        driver.idle();

        let title = driver.widget_rect(TITLE_FIELD);
        driver.click(title.center());
        driver.type_text("Login");
        assert_eq!(driver.editor.dialog().draft().unwrap().title, "Login");

        // Commit button: right end of the row under the separator
        let sub_title = driver.widget_rect(SUB_TITLE_FIELD);
        driver.click(egui::pos2(sub_title.right() - 12.0, sub_title.bottom() + 29.0));

        assert!(!driver.editor.dialog().is_open());
        assert_eq!(driver.editor.palette().len(), count + 1);
        let created = driver.editor.palette().get(count).unwrap();
        assert_eq!(created.title, "Login");
        assert_eq!(created.kind, NodeKind::Element);
    }
}
