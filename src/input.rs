use crate::state::VisualizerState;

/// Base hue presets selectable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuePreset {
    Red,
    Green,
    Blue,
}

impl HuePreset {
    pub fn hue(self) -> f64 {
        match self {
            HuePreset::Red => 0.0,
            HuePreset::Green => 0.33,
            HuePreset::Blue => 0.66,
        }
    }
}

/// A discrete user action, already decoded from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextShape,
    SetHue(HuePreset),
    /// Pointer position in logical window coordinates
    PointerMoved { x: i32, y: i32 },
    ToggleDebug,
}

/// Applies a command to the visualizer state
pub fn apply(state: &mut VisualizerState, command: Command) {
    match command {
        Command::Quit => state.quit_requested = true,
        Command::NextShape => {
            state.shape = state.shape.next();
            log::debug!("shape changed to {}", state.shape.name());
        }
        Command::SetHue(preset) => {
            state.base_hue = preset.hue();
            log::debug!("base hue set to {:?} ({})", preset, state.base_hue);
        }
        Command::PointerMoved { x, y } => {
            state.mouse_x = x;
            state.mouse_y = y;
        }
        Command::ToggleDebug => state.debug = !state.debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    #[test]
    fn next_shape_wraps_after_star() {
        let mut state = VisualizerState::new();
        for _ in 0..5 {
            apply(&mut state, Command::NextShape);
        }
        assert_eq!(state.shape, ShapeKind::Star);
        apply(&mut state, Command::NextShape);
        assert_eq!(state.shape, ShapeKind::Circle);
    }

    #[test]
    fn hue_presets() {
        let mut state = VisualizerState::new();
        apply(&mut state, Command::SetHue(HuePreset::Green));
        assert_eq!(state.base_hue, 0.33);
        apply(&mut state, Command::SetHue(HuePreset::Blue));
        assert_eq!(state.base_hue, 0.66);
        apply(&mut state, Command::SetHue(HuePreset::Red));
        assert_eq!(state.base_hue, 0.0);
    }

    #[test]
    fn pointer_and_flags() {
        let mut state = VisualizerState::new();
        apply(&mut state, Command::PointerMoved { x: 12, y: 345 });
        assert_eq!((state.mouse_x, state.mouse_y), (12, 345));

        apply(&mut state, Command::ToggleDebug);
        assert!(state.debug);
        assert!(!state.quit_requested);
        apply(&mut state, Command::Quit);
        assert!(state.quit_requested);
    }
}
