use cggeom::prelude::*;
use cgmath::{EuclideanSpace, Matrix3, Point2, Vector2};

use crate::config::scene::SceneConfig;

/// A 2D camera mapping an axis-aligned rectangle of the world space to the
/// normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    pub center: Point2<f32>,
    pub size: Vector2<f32>,
}

impl Camera2D {
    pub fn new(center: Point2<f32>, size: Vector2<f32>) -> Self {
        Self { center, size }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.camera_center, config.camera_size)
    }

    /// Get the view matrix, which moves `center` to the origin.
    pub fn view(&self) -> Matrix3<f32> {
        Matrix3::from_translation(-self.center.to_vec())
    }

    /// Get the projection matrix, which maps `size` to the extent of the
    /// normalized device coordinates (`2 × 2`).
    pub fn projection(&self) -> Matrix3<f32> {
        Matrix3::from_nonuniform_scale_2d(2.0 / self.size.x, 2.0 / self.size.y)
    }

    pub fn view_projection(&self) -> Matrix3<f32> {
        self.projection() * self.view()
    }
}
