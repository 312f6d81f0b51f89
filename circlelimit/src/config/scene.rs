//! The scene layout and the parameters of the user interactions.
use cgmath::{Point2, Vector2};

/// Describes the scene. `Default` provides the stock layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// The point of the world space at the center of the viewport.
    pub camera_center: Point2<f32>,
    /// The extent of the world space visible in the viewport.
    pub camera_size: Vector2<f32>,
    /// The point the star spins around.
    pub star_center: Point2<f32>,
    /// The point the star orbits around.
    pub orbit_center: Point2<f32>,
    /// The time (in seconds) needed for a full turn of both rotations.
    pub rotation_period: f32,
    /// The initial width and height of the pattern texture.
    pub texture_size: u32,
    /// The amount `r` and `R` change the texture size by.
    pub resolution_step: i32,
    /// The amount `h` and `H` move the star's inner vertices by.
    pub slimness_step: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_center: Point2::new(20.0, 30.0),
            camera_size: Vector2::new(150.0, 150.0),
            star_center: Point2::new(50.0, 30.0),
            orbit_center: Point2::new(20.0, 30.0),
            rotation_period: 10.0,
            texture_size: 300,
            resolution_step: 100,
            slimness_step: 10.0,
        }
    }
}
