use circlelimit_pattern::TextureError;
use quick_error::quick_error;

quick_error! {
    #[derive(Debug)]
    pub enum AppError {
        InvalidWindowSize(size: u32) {
            display("invalid window size: {}", size)
        }
        InvalidTime(name: &'static str, value: f64) {
            display("invalid {}: {}", name, value)
        }
        Texture(err: TextureError) {
            from()
            cause(err)
            display("{}", err)
        }
        Image(err: image::ImageError) {
            from()
            cause(err)
            display("failed to write an image: {}", err)
        }
    }
}
