//! Command-line argument parsing
use std::path::PathBuf;
use structopt::StructOpt;

/// Renders a star textured with a "Circle Limit"-style hyperbolic tiling into
/// PNG files.
///
/// The keys of the interactive version can be replayed with `--keys`:
/// `h`/`H` (slimness), `a` (animation), `r`/`R` (texture resolution), and
/// `t`/`T` (nearest/linear filtering).
#[derive(Debug, StructOpt)]
#[structopt(name = "circlelimit")]
pub struct Opt {
    /// The initial width and height of the pattern texture.
    #[structopt(short = "r", long = "resolution", default_value = "300")]
    pub resolution: u32,

    /// The width and height of the rendered frames.
    #[structopt(short = "s", long = "window-size", default_value = "600")]
    pub window_size: u32,

    /// The keystrokes to replay before rendering the first frame.
    #[structopt(short = "k", long = "keys", default_value = "")]
    pub keys: String,

    /// The time (in seconds) of the first frame. Only matters if the
    /// animation was turned on by `--keys`.
    #[structopt(short = "t", long = "time", default_value = "0")]
    pub time: f64,

    /// The number of frames to render.
    #[structopt(short = "n", long = "frames", default_value = "1")]
    pub frames: u32,

    /// The time (in seconds) between consecutive frames.
    #[structopt(long = "frame-interval", default_value = "0.1")]
    pub frame_interval: f64,

    /// Place the tiling points exactly on the hyperboloid instead of using the
    /// nested construction.
    #[structopt(long = "geodesic")]
    pub geodesic: bool,

    /// Also write the final pattern texture to the specified path.
    #[structopt(long = "texture-output", parse(from_os_str))]
    pub texture_output: Option<PathBuf>,

    /// The output path. When rendering multiple frames, the frame number is
    /// appended to the file stem.
    #[structopt(parse(from_os_str), default_value = "circlelimit.png")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opt = Opt::from_iter(&["circlelimit"]);
        assert_eq!(opt.resolution, 300);
        assert_eq!(opt.window_size, 600);
        assert_eq!(opt.keys, "");
        assert_eq!(opt.frames, 1);
        assert!(!opt.geodesic);
        assert_eq!(opt.texture_output, None);
        assert_eq!(opt.output, PathBuf::from("circlelimit.png"));
    }

    #[test]
    fn options() {
        let opt = Opt::from_iter(&[
            "circlelimit",
            "--keys",
            "hhaR",
            "--time",
            "2.5",
            "-n",
            "3",
            "--geodesic",
            "--texture-output",
            "tex.png",
            "out.png",
        ]);
        assert_eq!(opt.keys, "hhaR");
        assert_eq!(opt.time, 2.5);
        assert_eq!(opt.frames, 3);
        assert!(opt.geodesic);
        assert_eq!(opt.texture_output, Some(PathBuf::from("tex.png")));
        assert_eq!(opt.output, PathBuf::from("out.png"));
    }
}
