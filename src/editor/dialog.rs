//! Option editor dialog
//!
//! A modal with two text fields. The palette is only touched on save; every
//! other way out of the dialog throws the draft away.

use crate::constants::dialog::WIDTH;
use crate::constants::ids::{OPTION_DIALOG, SUB_TITLE_FIELD, TITLE_FIELD};
use crate::palette::{Draft, DraftField, Palette, PaletteOption, SaveOutcome};

/// Whether the open dialog creates a new option or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit,
}

impl DialogMode {
    pub fn window_title(&self) -> &'static str {
        match self {
            DialogMode::Create => "Create Option",
            DialogMode::Edit => "Edit Option",
        }
    }

    pub fn commit_label(&self) -> &'static str {
        match self {
            DialogMode::Create => "Save",
            DialogMode::Edit => "Edit",
        }
    }
}

/// Dialog visibility; an open dialog always carries its draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(Draft),
}

#[derive(Debug, Clone, Default)]
pub struct OptionDialog {
    state: DialogState,
}

impl OptionDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            DialogState::Open(draft) => Some(draft),
            DialogState::Closed => None,
        }
    }

    pub fn mode(&self) -> Option<DialogMode> {
        self.draft().map(|draft| {
            if draft.is_create() {
                DialogMode::Create
            } else {
                DialogMode::Edit
            }
        })
    }

    /// Open with an empty draft
    pub fn open_create(&mut self) {
        self.state = DialogState::Open(Draft::create());
    }

    /// Open with a copy of `option`
    pub fn open_edit(&mut self, option: &PaletteOption) {
        self.state = DialogState::Open(Draft::from_option(option));
    }

    /// Merge a field edit into the draft; ignored while closed
    pub fn on_field_change(&mut self, field: DraftField, value: impl Into<String>) {
        match &mut self.state {
            DialogState::Open(draft) => draft.set(field, value),
            DialogState::Closed => log::debug!("ignoring {field:?} edit on a closed dialog"),
        }
    }

    /// Commit the draft to the palette and close
    pub fn on_save(&mut self, palette: &mut Palette) -> Option<SaveOutcome> {
        match std::mem::take(&mut self.state) {
            DialogState::Open(draft) => Some(palette.save(draft)),
            DialogState::Closed => None,
        }
    }

    /// Discard the draft
    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Draw the modal while open
    ///
    /// Escape and clicks on the backdrop behave like the Close button.
    pub fn show(&mut self, ctx: &egui::Context, palette: &mut Palette) {
        let (mode, mut title, mut sub_title) = match &self.state {
            DialogState::Open(draft) => (
                self.mode().unwrap_or(DialogMode::Create),
                draft.title.clone(),
                draft.sub_title.clone(),
            ),
            DialogState::Closed => return,
        };

        let mut save = false;
        let mut close = false;

        let modal = egui::Modal::new(egui::Id::new(OPTION_DIALOG)).show(ctx, |ui| {
            ui.set_width(WIDTH);

            ui.horizontal(|ui| {
                ui.heading(mode.window_title());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        close = true;
                    }
                });
            });
            ui.separator();

            ui.label("Title");
            ui.add(
                egui::TextEdit::singleline(&mut title)
                    .id(egui::Id::new(TITLE_FIELD))
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label("Subtitle");
            ui.add(
                egui::TextEdit::singleline(&mut sub_title)
                    .id(egui::Id::new(SUB_TITLE_FIELD))
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.separator();
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(mode.commit_label()).clicked() {
                        save = true;
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });
        });

        if self.draft().is_some_and(|draft| draft.title != title) {
            self.on_field_change(DraftField::Title, title);
        }
        if self.draft().is_some_and(|draft| draft.sub_title != sub_title) {
            self.on_field_change(DraftField::SubTitle, sub_title);
        }

        if save {
            if let Some(outcome) = self.on_save(palette) {
                log::info!("palette option saved: {outcome:?}");
            }
        } else if close || modal.should_close() {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeKind;
    use crate::palette::OptionId;

    fn palette() -> Palette {
        Palette::new(vec![
            PaletteOption::new(OptionId::sequential(1), "Home", "Landing", NodeKind::Page),
            PaletteOption::new(OptionId::sequential(2), "Header", "Top bar", NodeKind::Element),
        ])
    }

    #[test]
    fn test_create_flow() {
        let mut palette = palette();
        let mut dialog = OptionDialog::new();
        assert_eq!(dialog.mode(), None);

        dialog.open_create();
        assert_eq!(dialog.mode(), Some(DialogMode::Create));
        dialog.on_field_change(DraftField::Title, "A");
        dialog.on_field_change(DraftField::SubTitle, "B");

        let outcome = dialog.on_save(&mut palette);
        assert_eq!(outcome, Some(SaveOutcome::Created(OptionId::new("node_3"))));
        assert!(!dialog.is_open());
        assert_eq!(palette.get(2).unwrap().kind, NodeKind::Element);
    }

    #[test]
    fn test_edit_flow() {
        let mut palette = palette();
        let mut dialog = OptionDialog::new();

        dialog.open_edit(palette.get(0).unwrap());
        assert_eq!(dialog.mode(), Some(DialogMode::Edit));
        assert_eq!(dialog.draft().unwrap().title, "Home");

        dialog.on_field_change(DraftField::SubTitle, "Start here");
        dialog.on_save(&mut palette);

        let edited = palette.get(0).unwrap();
        assert_eq!(edited.title, "Home");
        assert_eq!(edited.sub_title, "Start here");
        assert_eq!(edited.kind, NodeKind::Page);
        assert_eq!(palette.get(1).unwrap().sub_title, "Top bar");
    }

    #[test]
    fn test_close_discards_draft() {
        let mut palette = palette();
        let before = palette.clone();
        let mut dialog = OptionDialog::new();

        dialog.open_edit(palette.get(1).unwrap());
        dialog.on_field_change(DraftField::Title, "Changed");
        dialog.close();
        assert_eq!(dialog.on_save(&mut palette), None);

        dialog.open_create();
        dialog.on_field_change(DraftField::Title, "New");
        dialog.close();

        assert_eq!(palette, before);
        assert_eq!(dialog.state(), &DialogState::Closed);
    }

    #[test]
    fn test_field_change_while_closed_is_ignored() {
        let mut dialog = OptionDialog::new();
        dialog.on_field_change(DraftField::Title, "Orphan");
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(DialogMode::Create.window_title(), "Create Option");
        assert_eq!(DialogMode::Create.commit_label(), "Save");
        assert_eq!(DialogMode::Edit.window_title(), "Edit Option");
        assert_eq!(DialogMode::Edit.commit_label(), "Edit");
    }
}
