//! The textured star shape.
use cggeom::prelude::*;
use cgmath::{Matrix3, Point2, Rad};
use circlelimit_pal::{iface::Device, Vertex};
use circlelimit_pattern::PoincareTexture;
use std::{f32::consts::PI, fmt::Debug};

use crate::{camera::Camera2D, config::scene::SceneConfig};

pub const NUM_VERTICES: usize = 10;

/// The positions and texture coordinates of the star's vertices, in the
/// triangle fan order. The first vertex is the hub, and the last one repeats
/// the second one to close the fan.
const INITIAL_VERTICES: [([f32; 2], [f32; 2]); NUM_VERTICES] = [
    ([50.0, 30.0], [0.5, 0.5]),
    ([70.0, 30.0], [1.0, 0.5]),
    ([90.0, 70.0], [1.0, 1.0]),
    ([50.0, 50.0], [0.5, 1.0]),
    ([10.0, 70.0], [0.0, 1.0]),
    ([30.0, 30.0], [0.0, 0.5]),
    ([10.0, -10.0], [0.0, 0.0]),
    ([50.0, 10.0], [0.5, 0.0]),
    ([90.0, -10.0], [1.0, 0.0]),
    ([70.0, 30.0], [1.0, 0.5]),
];

/// A four-pointed star covered by a [`PoincareTexture`], spinning around its
/// center while orbiting around another point.
#[derive(Debug)]
pub struct Star<H> {
    vertices: [Vertex; NUM_VERTICES],
    texture: PoincareTexture<H>,
    star_center: Point2<f32>,
    orbit_center: Point2<f32>,
    rotation_period: f32,
    orbit_angle: f32,
    self_rotation: f32,
}

impl<H: Debug> Star<H> {
    pub fn new(texture: PoincareTexture<H>, config: &SceneConfig) -> Self {
        let mut this = Self {
            vertices: [Vertex::new([0.0; 2], [0.0; 2]); NUM_VERTICES],
            texture,
            star_center: config.star_center,
            orbit_center: config.orbit_center,
            rotation_period: config.rotation_period,
            orbit_angle: 0.0,
            self_rotation: 0.0,
        };
        this.reset_vertices();
        this.animate(0.0);
        this
    }

    /// Restore the initial shape.
    pub fn reset_vertices(&mut self) {
        for (v, &(position, uv)) in self.vertices.iter_mut().zip(INITIAL_VERTICES.iter()) {
            *v = Vertex::new(position, uv);
        }
    }

    /// Set the rotation angles for the time `t` (in seconds).
    pub fn animate(&mut self, t: f32) {
        let speed = 2.0 * PI / self.rotation_period;
        self.orbit_angle = t * speed;
        self.self_rotation = t * speed;
    }

    /// Get the model matrix: the spin about the star's center followed by the
    /// orbital rotation.
    pub fn model(&self) -> Matrix3<f32> {
        Matrix3::from_angle_about(self.orbit_center, Rad(self.orbit_angle))
            * Matrix3::from_angle_about(self.star_center, Rad(self.self_rotation))
    }

    /// Move the inner vertices (the ones at the midpoints of the texture's
    /// edges) towards the hub by `s`. Negative values make the star fatter.
    pub fn adjust_slimness(&mut self, s: f32) {
        for v in self.vertices.iter_mut() {
            let uv = v.uv;
            if uv == Point2::new(0.5, 1.0) {
                v.position.y -= s;
            } else if uv == Point2::new(0.5, 0.0) {
                v.position.y += s;
            } else if uv == Point2::new(0.0, 0.5) {
                v.position.x += s;
            } else if uv == Point2::new(1.0, 0.5) {
                v.position.x -= s;
            }
        }
    }

    /// Draw the star as a textured triangle fan.
    pub fn draw<D>(&self, device: &mut D, camera: &Camera2D)
    where
        D: Device<HImage = H>,
    {
        let xform = camera.view_projection() * self.model();
        device.draw_triangle_fan(self.texture.himage(), &self.vertices, xform);
    }

    pub fn vertices(&self) -> &[Vertex; NUM_VERTICES] {
        &self.vertices
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.orbit_angle, self.self_rotation)
    }

    pub fn texture(&self) -> &PoincareTexture<H> {
        &self.texture
    }

    pub fn texture_mut(&mut self) -> &mut PoincareTexture<H> {
        &mut self.texture
    }

    /// Release the device resources.
    pub fn destroy<D>(self, device: &mut D)
    where
        D: Device<HImage = H>,
    {
        self.texture.remove(device);
    }
}
