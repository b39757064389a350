//! Viewport management for pan/zoom operations
//!
//! Screen coordinates here are relative to the canvas origin; callers subtract
//! the canvas rect's top-left before projecting.

use crate::constants::viewport::{FIT_PADDING, MAX_ZOOM, MIN_ZOOM};
use egui::{Pos2, Rect, Vec2};

/// Manages viewport state including pan and zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub pan_offset: Vec2,
    pub zoom: f32,
}

impl Viewport {
    /// Creates a new viewport with default settings
    pub fn new() -> Self {
        Self {
            pan_offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Multiply the zoom by `factor`, keeping `screen_point` stationary
    pub fn zoom_at_point(&mut self, screen_point: Pos2, factor: f32) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);

        let zoom_factor = self.zoom / old_zoom;
        let screen_point_vec = screen_point.to_vec2();
        self.pan_offset = screen_point_vec + (self.pan_offset - screen_point_vec) * zoom_factor;
    }

    /// Apply pan offset
    pub fn pan(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    /// Convert world coordinates to screen coordinates
    pub fn world_to_screen(&self, world_pos: Pos2) -> Pos2 {
        Pos2::new(
            world_pos.x * self.zoom + self.pan_offset.x,
            world_pos.y * self.zoom + self.pan_offset.y,
        )
    }

    /// Convert screen coordinates to world coordinates
    pub fn screen_to_world(&self, screen_pos: Pos2) -> Pos2 {
        Pos2::new(
            (screen_pos.x - self.pan_offset.x) / self.zoom,
            (screen_pos.y - self.pan_offset.y) / self.zoom,
        )
    }

    /// Zoom and pan so `content` fills a view of `view_size`, centred
    pub fn fit(&mut self, content: Rect, view_size: Vec2) {
        let available = (view_size - Vec2::splat(FIT_PADDING * 2.0)).max(Vec2::splat(1.0));
        let content_size = content.size().max(Vec2::splat(1.0));

        self.zoom = (available.x / content_size.x)
            .min(available.y / content_size.y)
            .clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan_offset = view_size / 2.0 - content.center().to_vec2() * self.zoom;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
