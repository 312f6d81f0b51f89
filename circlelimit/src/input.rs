use circlelimit_pal::FilterMode;

use crate::config::scene::SceneConfig;

/// A command issued by a keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    AdjustSlimness(f32),
    ToggleAnimation,
    IncreaseResolution(i32),
    SetFilter(FilterMode),
}

impl Action {
    /// Translate a keystroke. Returns `None` for unbound keys.
    pub fn from_key(key: char, config: &SceneConfig) -> Option<Self> {
        Some(match key {
            'h' => Action::AdjustSlimness(-config.slimness_step),
            'H' => Action::AdjustSlimness(config.slimness_step),
            'a' => Action::ToggleAnimation,
            'r' => Action::IncreaseResolution(config.resolution_step),
            'R' => Action::IncreaseResolution(-config.resolution_step),
            't' => Action::SetFilter(FilterMode::Nearest),
            'T' => Action::SetFilter(FilterMode::Linear),
            _ => return None,
        })
    }
}
