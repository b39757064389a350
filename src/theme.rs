//! Centralized theme and styling constants for the Cardflow editor
//!
//! Single source of truth for the colors and dimensions shared by the palette,
//! the canvas and the node renderers.

use egui::{Color32, Vec2};

/// Color palette for the Cardflow editor
pub struct Colors {
    // Selection and highlighting
    pub selection_blue: Color32,
    pub drop_highlight: Color32,

    // Node shell
    pub node_body: Color32,
    pub node_border: Color32,
    pub node_bevel: Color32,
    pub node_text: Color32,
    pub node_icon: Color32,

    // Handles
    pub handle_target: Color32,
    pub handle_source: Color32,
    pub handle_border: Color32,

    // Background colors
    pub canvas_background: Color32,
    pub grid_dot: Color32,

    // Palette cards
    pub card_background: Color32,
    pub card_hover: Color32,
    pub card_border: Color32,
    pub card_subtitle: Color32,

    // Edge colors
    pub edge_default: Color32,
    pub edge_selected: Color32,
    pub edge_pending: Color32,

    // Menus
    pub menu_background: Color32,
    pub menu_hover: Color32,
}

impl Colors {
    /// Get the default color palette
    pub fn default() -> Self {
        Self {
            selection_blue: Color32::from_rgb(100, 150, 255),
            drop_highlight: Color32::from_rgba_unmultiplied(100, 150, 255, 160),

            node_body: Color32::from_rgb(236, 236, 236),
            node_border: Color32::from_rgb(64, 64, 64),
            node_bevel: Color32::from_rgb(166, 166, 166),
            node_text: Color32::from_rgb(28, 28, 28),
            node_icon: Color32::from_rgb(60, 60, 60),

            handle_target: Color32::from_rgb(70, 120, 90),
            handle_source: Color32::from_rgb(120, 70, 70),
            handle_border: Color32::from_rgb(38, 38, 38),

            canvas_background: Color32::from_rgb(28, 28, 28),
            grid_dot: Color32::from_rgb(58, 58, 58),

            card_background: Color32::from_rgb(40, 44, 52),
            card_hover: Color32::from_rgb(52, 58, 68),
            card_border: Color32::from_rgb(80, 86, 96),
            card_subtitle: Color32::from_gray(160),

            edge_default: Color32::from_rgb(200, 200, 200),
            edge_selected: Color32::from_rgb(100, 150, 255),
            edge_pending: Color32::from_rgb(150, 150, 150),

            menu_background: Color32::from_rgb(28, 28, 28),
            menu_hover: Color32::from_rgb(48, 48, 48),
        }
    }
}

/// Dimension constants for the Cardflow editor
pub struct Dimensions {
    // Node sizes
    pub default_node_size: Vec2,

    // UI element sizes
    pub handle_radius: f32,
    pub corner_radius: f32,
    pub border_width: f32,
    pub edge_width: f32,

    // Text
    pub label_font_size: f32,
    pub icon_font_size: f32,
}

impl Dimensions {
    /// Get the default dimensions
    pub fn default() -> Self {
        Self {
            default_node_size: Vec2::new(200.0, 80.0),

            handle_radius: 5.0,
            corner_radius: 5.0,
            border_width: 1.0,
            edge_width: 2.0,

            label_font_size: 16.0,
            icon_font_size: 18.0,
        }
    }
}

/// Complete theme containing all styling constants
pub struct Theme {
    pub colors: Colors,
    pub dimensions: Dimensions,
}

impl Theme {
    /// Get the default theme
    pub fn default() -> Self {
        Self {
            colors: Colors::default(),
            dimensions: Dimensions::default(),
        }
    }
}

/// Global theme instance
static GLOBAL_THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get the global theme
pub fn theme() -> &'static Theme {
    &GLOBAL_THEME
}

pub fn colors() -> &'static Colors {
    &theme().colors
}

pub fn dimensions() -> &'static Dimensions {
    &theme().dimensions
}
