//! Diagram canvas: graph ownership, palette drops and pointer interactions

use super::interaction::InteractionManager;
use super::menus::{ContextMenu, ContextMenuAction, MenuOutcome};
use super::rendering::NodeRenderer;
use super::viewport::Viewport;
use crate::constants::{ids::CANVAS_CONTROLS, interaction, viewport::SCROLL_SENSITIVITY, viewport::ZOOM_STEP};
use crate::nodes::{Connection, EdgeId, GraphError, HandleKind, NodeGraph, NodeId};
use crate::palette::{Lookup, OptionId, Palette, PaletteDrag};
use crate::theme::colors;
use egui::{Pos2, Rect, Sense, Stroke, Vec2};

/// Feedback given while a palette card hovers the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
}

/// Why a drop created no node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRejection {
    /// The payload names an option that is no longer in the palette
    UnknownOption(OptionId),
    /// The option exists but has an empty title
    MissingTitle(OptionId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Created(NodeId),
    Rejected(DropRejection),
}

/// The node canvas
#[derive(Debug, Clone)]
pub struct Canvas {
    graph: NodeGraph,
    viewport: Viewport,
    interaction: InteractionManager,
    context_menu: ContextMenu,
    /// Screen rect the canvas occupied last frame
    rect: Rect,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            graph: NodeGraph::new(),
            viewport: Viewport::new(),
            interaction: InteractionManager::new(),
            context_menu: ContextMenu::new(),
            rect: Rect::ZERO,
        }
    }

    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut NodeGraph {
        &mut self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Screen position to canvas position under the current pan and zoom
    pub fn project(&self, screen_pos: Pos2) -> Pos2 {
        self.viewport.screen_to_world((screen_pos - self.rect.min).to_pos2())
    }

    /// Canvas position to screen position
    pub fn unproject(&self, world_pos: Pos2) -> Pos2 {
        self.viewport.world_to_screen(world_pos) + self.rect.min.to_vec2()
    }

    /// Drop effect for a hovering payload; `None` means the drop is not accepted
    pub fn drag_over(&self, payload: Option<&PaletteDrag>) -> Option<DropEffect> {
        payload.map(|_| DropEffect::Move)
    }

    /// Create a node from a palette drop at a screen position
    ///
    /// The payload is resolved against the palette as it is now. Unknown
    /// options and options without a title are dropped silently.
    pub fn handle_drop(&mut self, payload: &PaletteDrag, palette: &Palette, pointer: Pos2) -> DropOutcome {
        let option = match palette.find(&payload.option_id) {
            Lookup::Found(option) => option,
            Lookup::NotFound => {
                log::debug!("drop of unknown palette option {}", payload.option_id);
                return DropOutcome::Rejected(DropRejection::UnknownOption(payload.option_id.clone()));
            }
        };
        if !option.has_title() {
            log::debug!("drop of untitled palette option {}", option.id);
            return DropOutcome::Rejected(DropRejection::MissingTitle(option.id.clone()));
        }

        let position = self.project(pointer);
        let id = self.graph.add_node(option.kind, option.title.clone(), position);
        log::info!("created {} node {id} from {} at ({:.0}, {:.0})", option.kind, option.id, position.x, position.y);
        DropOutcome::Created(id)
    }

    /// Add an edge for a completed connect gesture
    pub fn on_connect(&mut self, connection: Connection) -> Result<EdgeId, GraphError> {
        let result = self.graph.connect(connection);
        match &result {
            Ok(id) => log::info!("connected {id}"),
            Err(error) => log::debug!("connection refused: {error}"),
        }
        result
    }

    /// Fit all nodes into the canvas; no-op on an empty graph
    pub fn fit_view(&mut self) {
        if let Some(bounds) = self.graph.bounds() {
            self.viewport.fit(bounds, self.rect.size());
        }
    }

    /// Zoom around the canvas centre
    pub fn zoom_by(&mut self, factor: f32) {
        let center = (self.rect.size() / 2.0).to_pos2();
        self.viewport.zoom_at_point(center, factor);
    }

    pub fn delete_selected(&mut self) {
        let removed = self.interaction.delete_selected(&mut self.graph);
        if removed > 0 {
            log::info!("deleted {removed} canvas item(s)");
        }
    }

    /// Draw the canvas and handle its input for one frame
    ///
    /// `interactive` is false while a modal is open; drops and pointer input
    /// are ignored then.
    pub fn show(&mut self, ui: &mut egui::Ui, palette: &Palette, interactive: bool) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        self.rect = rect;

        if interactive {
            self.handle_palette_drop(ui, &response, palette);
            self.handle_input(ui, &response);
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, colors().canvas_background);
        NodeRenderer::render_grid(&painter, rect, &self.viewport);
        self.render_graph(&painter, ui.ctx().pointer_hover_pos());

        if interactive && self.drag_over(response.dnd_hover_payload::<PaletteDrag>().as_deref()).is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            painter.rect_stroke(
                rect,
                0.0,
                Stroke::new(2.0, colors().drop_highlight),
                egui::StrokeKind::Inside,
            );
        }

        self.show_controls(ui.ctx());
        match self.context_menu.show(ui.ctx(), self.interaction.has_selection()) {
            MenuOutcome::Chosen(ContextMenuAction::FitView) => self.fit_view(),
            MenuOutcome::Chosen(ContextMenuAction::DeleteSelected) => self.delete_selected(),
            MenuOutcome::Open | MenuOutcome::Closed => {}
        }
    }

    fn handle_palette_drop(&mut self, ui: &egui::Ui, response: &egui::Response, palette: &Palette) {
        let Some(payload) = response.dnd_release_payload::<PaletteDrag>() else {
            return;
        };
        let Some(pointer) = ui.input(|i| i.pointer.interact_pos()) else {
            return;
        };
        self.handle_drop(&payload, palette, pointer);
    }

    /// Pan, zoom, select, move, connect and delete
    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let zoom = self.viewport.zoom;
        let handle_radius = interaction::HANDLE_HIT_RADIUS / zoom;

        // Wheel zoom around the pointer
        if let Some(hover) = response.hover_pos() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let anchor = (hover - self.rect.min).to_pos2();
                self.viewport.zoom_at_point(anchor, (scroll * SCROLL_SENSITIVITY).exp());
            }
        }

        if response.dragged_by(egui::PointerButton::Middle) {
            self.viewport.pan(response.drag_delta());
        }

        let pointer_world = response.interact_pointer_pos().map(|pos| self.project(pos));

        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(pos) = pointer_world {
                self.context_menu.close();
                if let Some((node, handle)) = self.graph.handle_at(pos, handle_radius) {
                    self.interaction.start_connection(node, handle);
                } else if let Some(node) = self.graph.node_at(pos) {
                    if !self.interaction.is_node_selected(node) {
                        self.interaction.select_node(node, false);
                    }
                    self.interaction.start_drag(pos, &self.graph);
                } else {
                    self.interaction.is_panning = true;
                }
            }
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if self.interaction.is_panning {
                self.viewport.pan(response.drag_delta());
            } else if let Some(pos) = pointer_world {
                if self.interaction.is_dragging_nodes() {
                    self.interaction.update_drag(pos, &mut self.graph);
                }
            }
        }

        if response.drag_stopped() {
            if self.interaction.pending_connection.is_some() {
                let landed = pointer_world.and_then(|pos| self.graph.handle_at(pos, handle_radius));
                self.finish_connection(landed);
            }
            self.interaction.end_drag();
        }

        if response.clicked() {
            self.context_menu.close();
            if let Some(pos) = pointer_world {
                let multi_select = ui.input(|i| i.modifiers.command || i.modifiers.ctrl);
                let edge_tolerance = interaction::EDGE_HIT_TOLERANCE / zoom;
                if let Some(node) = self.graph.node_at(pos) {
                    self.interaction.select_node(node, multi_select);
                } else if let Some(edge) = self.graph.edge_at(pos, edge_tolerance) {
                    self.interaction.select_edge(edge);
                } else {
                    self.interaction.clear_selection();
                }
            }
        }

        if response.secondary_clicked() {
            if let Some(screen_pos) = response.interact_pointer_pos() {
                if let Some(node) = self.graph.node_at(self.project(screen_pos)) {
                    if !self.interaction.is_node_selected(node) {
                        self.interaction.select_node(node, false);
                    }
                }
                self.context_menu.open_at(screen_pos);
            }
        }

        let typing = ui.ctx().wants_keyboard_input();
        if !typing && ui.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace)) {
            self.delete_selected();
        }
    }

    /// Complete the pending connect gesture on the handle it was released over
    ///
    /// A release away from any handle, or on a handle of the same kind, drops
    /// the gesture. Refused edges are logged by `on_connect`.
    fn finish_connection(&mut self, landed: Option<(NodeId, HandleKind)>) -> Option<EdgeId> {
        let connection = landed.and_then(|(node, handle)| self.interaction.complete_connection(node, handle));
        let Some(connection) = connection else {
            self.interaction.cancel_connection();
            return None;
        };
        self.on_connect(connection).ok()
    }

    fn render_graph(&self, painter: &egui::Painter, hover: Option<Pos2>) {
        let zoom = self.viewport.zoom;
        let transform = |pos: Pos2| self.unproject(pos);

        for edge in self.graph.edges() {
            if let Some((from, to)) = self.graph.edge_endpoints(edge) {
                let color = if self.interaction.selected_edge.as_ref() == Some(&edge.id) {
                    colors().edge_selected
                } else {
                    colors().edge_default
                };
                NodeRenderer::render_edge(painter, from, to, color, zoom, transform);
            }
        }

        for node in self.graph.nodes() {
            NodeRenderer::render_node(painter, node, self.interaction.is_node_selected(node.id), zoom, transform);
        }

        let Some(pending) = self.interaction.pending_connection else {
            return;
        };
        let (Some(node), Some(pointer)) = (self.graph.node(pending.node), hover) else {
            return;
        };
        let anchor = node.handle_position(pending.handle);
        let pointer = self.project(pointer);
        let (from, to) = if pending.handle.is_target() {
            (pointer, anchor)
        } else {
            (anchor, pointer)
        };
        NodeRenderer::render_edge(painter, from, to, colors().edge_pending, zoom, transform);
        NodeRenderer::render_handle(painter, transform(anchor), pending.handle, true, zoom);
    }

    /// Zoom in, zoom out and fit buttons in the bottom-left corner
    fn show_controls(&mut self, ctx: &egui::Context) {
        let position = self.rect.left_bottom() + Vec2::new(12.0, -12.0);
        egui::Area::new(egui::Id::new(CANVAS_CONTROLS))
            .fixed_pos(position)
            .pivot(egui::Align2::LEFT_BOTTOM)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        if ui.button("+").on_hover_text("Zoom in").clicked() {
                            self.zoom_by(ZOOM_STEP);
                        }
                        if ui.button("−").on_hover_text("Zoom out").clicked() {
                            self.zoom_by(1.0 / ZOOM_STEP);
                        }
                        if ui.button("⛶").on_hover_text("Fit view").clicked() {
                            self.fit_view();
                        }
                    });
                });
            });
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeKind;
    use crate::palette::PaletteOption;

    fn palette() -> Palette {
        Palette::new(vec![
            PaletteOption::new(OptionId::sequential(1), "Home", "Landing", NodeKind::Page),
            PaletteOption::new(OptionId::sequential(2), "", "No title yet", NodeKind::Element),
            PaletteOption::new(OptionId::sequential(3), "Link", "Menu link", NodeKind::ElementItem),
        ])
    }

    fn drag(id: &str) -> PaletteDrag {
        PaletteDrag::new(OptionId::new(id))
    }

    #[test]
    fn test_drop_creates_node_at_projection() {
        let palette = palette();
        let mut canvas = Canvas::new();
        canvas.rect = Rect::from_min_size(Pos2::new(320.0, 40.0), Vec2::new(800.0, 600.0));
        canvas.viewport.zoom = 2.0;
        canvas.viewport.pan_offset = Vec2::new(100.0, 0.0);

        let pointer = Pos2::new(520.0, 240.0);
        let expected = canvas.project(pointer);
        let outcome = canvas.handle_drop(&drag("node_3"), &palette, pointer);

        assert_eq!(expected, Pos2::new(50.0, 100.0));
        let DropOutcome::Created(id) = outcome else {
            panic!("expected a node, got {outcome:?}");
        };
        let node = canvas.graph().node(id).unwrap();
        assert_eq!(node.label, "Link");
        assert_eq!(node.kind, NodeKind::ElementItem);
        assert_eq!(node.position, expected);
        assert_eq!(canvas.graph().nodes().len(), 1);
    }

    #[test]
    fn test_projection_is_not_cached() {
        let palette = palette();
        let mut canvas = Canvas::new();
        let pointer = Pos2::new(100.0, 100.0);

        canvas.handle_drop(&drag("node_1"), &palette, pointer);
        canvas.viewport_mut().pan(Vec2::new(50.0, 50.0));
        canvas.handle_drop(&drag("node_1"), &palette, pointer);

        let nodes = canvas.graph().nodes();
        assert_eq!(nodes[0].position, Pos2::new(100.0, 100.0));
        assert_eq!(nodes[1].position, Pos2::new(50.0, 50.0));
        assert_ne!(nodes[0].id, nodes[1].id);
    }

    #[test]
    fn test_rejected_drops_leave_graph_unchanged() {
        let palette = palette();
        let mut canvas = Canvas::new();

        assert_eq!(
            canvas.handle_drop(&drag("node_9"), &palette, Pos2::ZERO),
            DropOutcome::Rejected(DropRejection::UnknownOption(OptionId::new("node_9")))
        );
        assert_eq!(
            canvas.handle_drop(&drag("node_2"), &palette, Pos2::ZERO),
            DropOutcome::Rejected(DropRejection::MissingTitle(OptionId::new("node_2")))
        );
        assert!(canvas.graph().nodes().is_empty());
    }

    #[test]
    fn test_drag_over_accepts_palette_payloads() {
        let canvas = Canvas::new();
        assert_eq!(canvas.drag_over(Some(&drag("node_1"))), Some(DropEffect::Move));
        assert_eq!(canvas.drag_over(None), None);
    }

    #[test]
    fn test_on_connect_grows_edges_once() {
        let palette = palette();
        let mut canvas = Canvas::new();
        let DropOutcome::Created(a) = canvas.handle_drop(&drag("node_1"), &palette, Pos2::ZERO) else {
            panic!("drop failed");
        };
        let DropOutcome::Created(b) = canvas.handle_drop(&drag("node_3"), &palette, Pos2::new(0.0, 300.0)) else {
            panic!("drop failed");
        };

        assert!(canvas.on_connect(Connection::new(a, b)).is_ok());
        assert!(canvas.on_connect(Connection::new(a, b)).is_err());
        assert_eq!(canvas.graph().edges().len(), 1);
    }

    #[test]
    fn test_finish_connection() {
        let mut canvas = Canvas::new();
        let a = canvas.graph_mut().add_node(NodeKind::Page, "Home", Pos2::ZERO);
        let b = canvas.graph_mut().add_node(NodeKind::Element, "Header", Pos2::new(0.0, 300.0));

        // Released away from any handle
        canvas.interaction.start_connection(a, HandleKind::Source);
        assert_eq!(canvas.finish_connection(None), None);
        assert!(canvas.interaction.pending_connection.is_none());

        canvas.interaction.start_connection(a, HandleKind::Source);
        let edge = canvas.finish_connection(Some((b, HandleKind::Target)));
        assert_eq!(edge.as_ref().map(EdgeId::as_str), Some("edge-dndnode_0-dndnode_1"));

        // Same pair again is refused and leaves the graph alone
        canvas.interaction.start_connection(b, HandleKind::Target);
        assert_eq!(canvas.finish_connection(Some((a, HandleKind::Source))), None);
        assert!(canvas.interaction.pending_connection.is_none());
        assert_eq!(canvas.graph().edges().len(), 1);
    }

    #[test]
    fn test_fit_view() {
        let palette = palette();
        let mut canvas = Canvas::new();
        canvas.rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0));

        canvas.fit_view();
        assert_eq!(canvas.viewport(), &Viewport::new());

        canvas.handle_drop(&drag("node_1"), &palette, Pos2::new(2000.0, 2000.0));
        canvas.fit_view();
        let node_rect = canvas.graph().nodes()[0].get_rect();
        assert!(canvas.rect.contains(canvas.unproject(node_rect.center())));
    }

    #[test]
    fn test_show_runs_headless() {
        let ctx = egui::Context::default();
        let palette = palette();
        let mut canvas = Canvas::new();
        canvas.graph_mut().add_node(NodeKind::Page, "Home", Pos2::new(10.0, 10.0));

        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1024.0, 768.0))),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                canvas.show(ui, &palette, true);
            });
        });
        assert!(canvas.rect.width() > 0.0);
        assert_eq!(canvas.graph().nodes().len(), 1);
    }
}
