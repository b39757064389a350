//! Application-wide constants and default values

/// Native window settings
pub mod window {
    pub const TITLE: &str = "Cardflow";

    pub const APP_ID: &str = "com.cardflow.editor";

    pub const DEFAULT_SIZE: [f32; 2] = [1280.0, 800.0];

    pub const MIN_SIZE: [f32; 2] = [640.0, 400.0];
}

/// Palette panel sizing
pub mod panel {
    /// Fixed width of the palette side panel
    pub const PALETTE_WIDTH: f32 = 320.0;

    /// Height of a single option card
    pub const CARD_HEIGHT: f32 = 80.0;

    /// Vertical gap between cards
    pub const CARD_SPACING: f32 = 6.0;

    /// Egui id salt for the palette side panel
    pub const PANEL_ID: &str = "cardflow_palette";
}

/// Canvas viewport limits
pub mod viewport {
    pub const MIN_ZOOM: f32 = 0.1;

    pub const MAX_ZOOM: f32 = 5.0;

    /// Multiplier applied per control-button zoom step
    pub const ZOOM_STEP: f32 = 1.2;

    /// Scroll delta to exponent factor for wheel zoom
    pub const SCROLL_SENSITIVITY: f32 = 0.0015;

    /// Screen-space padding kept around content when fitting the view
    pub const FIT_PADDING: f32 = 40.0;

    /// Spacing of the background dot grid in canvas units
    pub const GRID_SPACING: f32 = 20.0;
}

/// Hit testing tolerances, in screen pixels
pub mod interaction {
    pub const HANDLE_HIT_RADIUS: f32 = 10.0;

    pub const EDGE_HIT_TOLERANCE: f32 = 6.0;
}

/// Egui ids shared across frames
pub mod ids {
    /// Modal layer id of the option editor dialog
    pub const OPTION_DIALOG: &str = "cardflow_option_dialog";

    pub const CANVAS_CONTROLS: &str = "cardflow_canvas_controls";

    pub const CANVAS_CONTEXT_MENU: &str = "cardflow_canvas_context_menu";

    /// Floating preview that follows the pointer while a card is dragged
    pub const DRAG_PREVIEW: &str = "cardflow_drag_preview";

    /// Text fields of the option editor dialog
    pub const TITLE_FIELD: &str = "cardflow_option_title";
    pub const SUB_TITLE_FIELD: &str = "cardflow_option_sub_title";
}

/// Option editor dialog sizing
pub mod dialog {
    pub const WIDTH: f32 = 360.0;
}
