//! Arena geometry: the walled playfield
//!
//! An arena is a fixed-size rectangle plus a static list of axis-aligned
//! wall rectangles. Both are built once at setup and only ever read back for
//! collision queries; any finite wall list is accepted, including an empty
//! one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circle_intersects_rect;
use crate::consts::BOUNDARY_THICKNESS;

/// An axis-aligned rectangular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Wall {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// The fixed-size playfield and its wall set
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub walls: Vec<Wall>,
}

impl Arena {
    pub fn new(width: f32, height: f32, walls: Vec<Wall>) -> Self {
        Self {
            width,
            height,
            walls,
        }
    }

    /// The stock 8-wall layout: four boundary walls plus four interior bars
    /// forming a cross-like partition. Interior coordinates assume the
    /// default 800x600 field; hosts with other dimensions supply their own
    /// list through the config.
    pub fn default_layout(width: f32, height: f32) -> Vec<Wall> {
        let t = BOUNDARY_THICKNESS;
        vec![
            // Outer boundaries
            Wall::new(0.0, 0.0, width, t),
            Wall::new(0.0, height - t, width, t),
            Wall::new(0.0, 0.0, t, height),
            Wall::new(width - t, 0.0, t, height),
            // Central obstacles
            Wall::new(200.0, 100.0, 400.0, 20.0),
            Wall::new(200.0, 250.0, 20.0, 200.0),
            Wall::new(400.0, 200.0, 20.0, 200.0),
            Wall::new(280.0, 400.0, 220.0, 20.0),
        ]
    }

    /// First wall overlapping the given circle, in wall-list order
    pub fn first_wall_hit(&self, center: Vec2, radius: f32) -> Option<&Wall> {
        self.walls
            .iter()
            .find(|wall| circle_intersects_rect(center, radius, wall))
    }
}
