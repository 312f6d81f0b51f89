use circlelimit_pal::{swrast::SwDevice, MAX_IMAGE_SIZE};
use circlelimit_pattern::{Construction, Motif};
use log::{debug, error, info};
use std::time::Duration;
use structopt::StructOpt;

mod app;
mod camera;
mod config;
mod error;
mod input;
mod output;
mod star;

use self::{
    app::AppContext,
    config::{cmdline::Opt, scene::SceneConfig},
    error::AppError,
};

fn main() {
    env_logger::init();

    // Parse command-line arguments
    let opt = Opt::from_args();
    debug!("{:?}", opt);

    if let Err(e) = run(&opt) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<(), AppError> {
    if opt.window_size == 0 || opt.window_size > MAX_IMAGE_SIZE {
        return Err(AppError::InvalidWindowSize(opt.window_size));
    }
    for &(name, value) in &[("time", opt.time), ("frame interval", opt.frame_interval)] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(AppError::InvalidTime(name, value));
        }
    }

    let config = SceneConfig {
        texture_size: opt.resolution,
        ..SceneConfig::default()
    };
    let motif = Motif {
        construction: if opt.geodesic {
            Construction::Geodesic
        } else {
            Construction::Nested
        },
        ..Motif::default()
    };

    let device = SwDevice::new([opt.window_size, opt.window_size]);
    let mut app = AppContext::new(device, config, &motif)?;

    debug!("Replaying keystrokes {:?}", opt.keys);
    let origin = Duration::from_secs(0);
    for key in opt.keys.chars() {
        app.handle_key(key, origin);
    }
    if !app.is_animating() && (opt.time != 0.0 || opt.frames > 1) {
        info!("The animation is off; all frames will be identical");
    }

    for i in 0..opt.frames {
        let t = opt.time + opt.frame_interval * f64::from(i);
        if t >= Duration::from_secs(u64::max_value()).as_secs_f64() {
            return Err(AppError::InvalidTime("frame time", t));
        }
        app.idle(Duration::from_secs_f64(t));
        app.display();
        let path = output::frame_path(&opt.output, i, opt.frames);
        output::save_frame(app.device(), &path)?;
    }

    if let Some(path) = &opt.texture_output {
        let texture = app.star().texture();
        output::save_texture(texture.pixels(), texture.size(), path)?;
    }

    app.shutdown();
    info!("Done");
    Ok(())
}
