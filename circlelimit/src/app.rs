use circlelimit_pal::{iface::Device, RGBAF32};
use circlelimit_pattern::{Motif, PoincareTexture, TextureError};
use log::{debug, info, warn};
use std::time::Duration;

use crate::{camera::Camera2D, config::scene::SceneConfig, input::Action, star::Star};

/// The color the render target is cleared with before drawing the star.
const CLEAR_COLOR: RGBAF32 = RGBAF32 {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// The application state. Timestamps passed to the methods are measured from
/// an arbitrary, fixed origin.
#[derive(Debug)]
pub struct AppContext<D: Device> {
    device: D,
    config: SceneConfig,
    camera: Camera2D,
    star: Star<D::HImage>,
    /// The time when the animation was turned on, or `None` if it's off.
    animation_start: Option<Duration>,
}

impl<D: Device> AppContext<D> {
    pub fn new(mut device: D, config: SceneConfig, motif: &Motif) -> Result<Self, TextureError> {
        let size = config.texture_size;
        let texture = PoincareTexture::with_motif(&mut device, [size, size], motif)?;
        let star = Star::new(texture, &config);

        Ok(Self {
            device,
            camera: Camera2D::from_config(&config),
            config,
            star,
            animation_start: None,
        })
    }

    /// Handle a keystroke. Returns `true` if the scene needs to be redrawn.
    pub fn handle_key(&mut self, key: char, now: Duration) -> bool {
        let action = if let Some(action) = Action::from_key(key, &self.config) {
            action
        } else {
            debug!("Ignoring an unbound key {:?}", key);
            return false;
        };
        debug!("Key {:?}: {:?}", key, action);

        match action {
            Action::AdjustSlimness(s) => {
                self.star.adjust_slimness(s);
                debug!("Star vertices: {:?}", self.star.vertices());
                true
            }
            Action::ToggleAnimation => {
                if self.animation_start.is_some() {
                    self.animation_start = None;
                    info!("Animation stopped");
                } else {
                    self.animation_start = Some(now);
                    info!("Animation started");
                }
                false
            }
            Action::IncreaseResolution(delta) => {
                let texture = self.star.texture_mut();
                match texture.increase_resolution(&mut self.device, delta) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Keeping the current texture: {}", e);
                        false
                    }
                }
            }
            Action::SetFilter(mode) => {
                self.star
                    .texture_mut()
                    .set_filtering_mode(&mut self.device, mode);
                true
            }
        }
    }

    /// Advance the animation. Returns `true` if the scene needs to be redrawn.
    pub fn idle(&mut self, now: Duration) -> bool {
        if let Some(start) = self.animation_start {
            let elapsed = now.checked_sub(start).unwrap_or_default();
            self.star.animate(elapsed.as_secs_f32());
            debug!("Angles at {:?}: {:?}", elapsed, self.star.angles());
            true
        } else {
            false
        }
    }

    /// Render the scene to the device's render target.
    pub fn display(&mut self) {
        self.device.clear(CLEAR_COLOR);
        self.star.draw(&mut self.device, &self.camera);
    }

    pub fn is_animating(&self) -> bool {
        self.animation_start.is_some()
    }

    pub fn star(&self) -> &Star<D::HImage> {
        &self.star
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Release the device resources and return the device.
    pub fn shutdown(self) -> D {
        let Self {
            mut device, star, ..
        } = self;
        star.destroy(&mut device);
        device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlelimit_pal::{swrast::SwDevice, FilterMode};
    use rgb::RGBA8;
    use std::f32::consts::PI;

    fn new_app() -> AppContext<SwDevice> {
        let config = SceneConfig {
            texture_size: 64,
            ..SceneConfig::default()
        };
        AppContext::new(SwDevice::new([60, 60]), config, &Motif::default()).unwrap()
    }

    #[test]
    fn resolution_keys() {
        let mut app = new_app();
        let t = Duration::from_secs(0);

        assert!(app.handle_key('r', t));
        assert_eq!(app.star().texture().size(), [164, 164]);
        assert!(app.handle_key('R', t));
        assert_eq!(app.star().texture().size(), [64, 64]);

        // 64 - 100 < 0 is rejected
        assert!(!app.handle_key('R', t));
        assert_eq!(app.star().texture().size(), [64, 64]);
    }

    #[test]
    fn filter_keys() {
        let mut app = new_app();
        let t = Duration::from_secs(0);
        assert!(app.handle_key('t', t));
        assert_eq!(app.star().texture().filtering_mode(), FilterMode::Nearest);
        assert!(app.handle_key('T', t));
        assert_eq!(app.star().texture().filtering_mode(), FilterMode::Linear);
    }

    #[test]
    fn slimness_keys() {
        let mut app = new_app();
        let t = Duration::from_secs(0);
        assert!(app.handle_key('H', t));
        assert_eq!(app.star().vertices()[3].position.y, 40.0);
        assert!(app.handle_key('h', t));
        assert!(app.handle_key('h', t));
        assert_eq!(app.star().vertices()[3].position.y, 60.0);
        assert!(!app.handle_key('x', t));
    }

    #[test]
    fn animation_is_measured_from_toggle() {
        let mut app = new_app();
        assert!(!app.is_animating());
        assert!(!app.idle(Duration::from_secs(5)));
        assert_eq!(app.star().angles(), (0.0, 0.0));

        assert!(!app.handle_key('a', Duration::from_secs(10)));
        assert!(app.is_animating());

        assert!(app.idle(Duration::from_millis(12_500)));
        let (orbit, spin) = app.star().angles();
        assert!((orbit - PI / 2.0).abs() < 1.0e-5);
        assert!((spin - PI / 2.0).abs() < 1.0e-5);

        // Stopping freezes the pose
        app.handle_key('a', Duration::from_secs(13));
        assert!(!app.idle(Duration::from_secs(20)));
        assert!((app.star().angles().0 - PI / 2.0).abs() < 1.0e-5);

        // Restarting resets the clock
        app.handle_key('a', Duration::from_secs(30));
        app.idle(Duration::from_secs(30));
        assert_eq!(app.star().angles(), (0.0, 0.0));
    }

    #[test]
    fn display_draws_star() {
        let mut app = new_app();
        app.display();

        let device = app.device();
        // The corners are outside the star and keep the clear color
        assert_eq!(device.pixel(0, 0), RGBA8::new(0, 0, 0, 0));
        assert_eq!(device.pixel(59, 59), RGBA8::new(0, 0, 0, 0));

        // The center of pixel (43, 29) is at (53.75, 31.25) in the world
        // space, which is close to the star's hub and samples the yellow
        // center of the texture
        assert_eq!(device.pixel(43, 29), RGBA8::new(255, 255, 0, 255));
    }

    #[test]
    fn shutdown_releases_images() {
        let app = new_app();
        let device = app.shutdown();
        assert_eq!(device.num_images(), 0);
    }
}
