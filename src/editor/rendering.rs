//! Painting of nodes, handles, edges and the canvas background

use super::viewport::Viewport;
use crate::constants::viewport::GRID_SPACING;
use crate::nodes::math_utils::edge_curve;
use crate::nodes::{HandleKind, Node};
use crate::theme::{colors, dimensions};
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Draws canvas elements in screen space
pub struct NodeRenderer;

impl NodeRenderer {
    /// Render a node shell: border, bevel, body, kind icon and label
    ///
    /// Every kind shares the same shell; only the icon differs.
    pub fn render_node(
        painter: &Painter,
        node: &Node,
        selected: bool,
        zoom: f32,
        transform_pos: impl Fn(Pos2) -> Pos2,
    ) {
        let node_rect = node.get_rect();
        let rect = Rect::from_two_pos(transform_pos(node_rect.min), transform_pos(node_rect.max));
        let radius = dimensions().corner_radius * zoom;

        // BORDER: 1px outside the node rect, blue when selected
        let border_color = if selected {
            colors().selection_blue
        } else {
            colors().node_border
        };
        let border_expand = (if selected { 2.0 } else { 1.0 }) * zoom;
        painter.rect_filled(rect.expand(border_expand), radius, border_color);

        // BEVEL then BODY, shrunk by 1px
        painter.rect_filled(rect, radius, colors().node_bevel);
        painter.rect_filled(rect.shrink(dimensions().border_width * zoom), radius, colors().node_body);

        painter.text(
            rect.center() - Vec2::new(0.0, rect.height() * 0.2),
            egui::Align2::CENTER_CENTER,
            node.kind.icon(),
            egui::FontId::proportional(dimensions().icon_font_size * zoom),
            colors().node_icon,
        );
        painter.text(
            rect.center() + Vec2::new(0.0, rect.height() * 0.2),
            egui::Align2::CENTER_CENTER,
            &node.label,
            egui::FontId::proportional(dimensions().label_font_size * zoom),
            colors().node_text,
        );

        for handle in [HandleKind::Target, HandleKind::Source] {
            Self::render_handle(
                painter,
                transform_pos(node.handle_position(handle)),
                handle,
                false,
                zoom,
            );
        }
    }

    /// Render a connection handle at a screen position
    pub fn render_handle(
        painter: &Painter,
        screen_pos: Pos2,
        handle: HandleKind,
        highlighted: bool,
        zoom: f32,
    ) {
        let radius = dimensions().handle_radius * zoom;
        let border_color = if highlighted {
            colors().selection_blue
        } else {
            colors().handle_border
        };
        let fill = match handle {
            HandleKind::Target => colors().handle_target,
            HandleKind::Source => colors().handle_source,
        };

        painter.circle_filled(screen_pos, radius + 1.0 * zoom, border_color);
        painter.circle_filled(screen_pos, radius, fill);
    }

    /// Render an edge between two canvas positions
    ///
    /// The curve is built in canvas units so it matches edge hit testing.
    pub fn render_edge(
        painter: &Painter,
        from: Pos2,
        to: Pos2,
        color: Color32,
        zoom: f32,
        transform_pos: impl Fn(Pos2) -> Pos2,
    ) {
        let points = edge_curve(from, to).map(transform_pos);

        painter.add(egui::Shape::CubicBezier(egui::epaint::CubicBezierShape {
            points,
            closed: false,
            fill: Color32::TRANSPARENT,
            stroke: Stroke::new(dimensions().edge_width * zoom, color).into(),
        }));
    }

    /// Dotted background grid aligned to canvas coordinates
    pub fn render_grid(painter: &Painter, canvas_rect: Rect, viewport: &Viewport) {
        let spacing = GRID_SPACING * viewport.zoom;
        if spacing < 6.0 {
            return;
        }

        let origin = canvas_rect.min + viewport.pan_offset;
        let start_x = canvas_rect.left() + (origin.x - canvas_rect.left()).rem_euclid(spacing);
        let start_y = canvas_rect.top() + (origin.y - canvas_rect.top()).rem_euclid(spacing);
        let dot_radius = (1.0 * viewport.zoom).clamp(0.5, 1.5);

        let mut y = start_y;
        while y < canvas_rect.bottom() {
            let mut x = start_x;
            while x < canvas_rect.right() {
                painter.circle_filled(Pos2::new(x, y), dot_radius, colors().grid_dot);
                x += spacing;
            }
            y += spacing;
        }
    }
}
