use crate::shape::ShapeKind;

/// Side of the square logical window
pub const WINDOW_SIZE: i32 = 400;
/// Radius of the outermost layer before pulsing
pub const MAX_RADIUS: f64 = 300.0;
/// Number of concentric layers
pub const NUM_LAYERS: usize = 30;
/// Frame rate the loop is paced to
pub const TARGET_FPS: u32 = 60;
/// Fixed amount `time_offset` advances per rendered frame
pub const TIME_STEP: f64 = 0.02;
/// Rotation speed increment between adjacent layers, in degrees per frame
pub const LAYER_SPEED_STEP: f64 = 0.5;

/// Visualizer state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct VisualizerState {
    /// Shape every layer is drawn as
    pub shape: ShapeKind,
    /// Base hue in `[0, 1)`
    pub base_hue: f64,
    /// Animation time, advanced by [`TIME_STEP`] per frame
    pub time_offset: f64,
    /// Pointer position in logical window coordinates
    pub mouse_x: i32,
    pub mouse_y: i32,
    /// Accumulated rotation of each layer, in degrees
    pub layer_rotation: [f64; NUM_LAYERS],
    /// Rotation speed of each layer, in degrees per frame
    pub layer_speed: [f64; NUM_LAYERS],
    /// Debug overlay enabled
    pub debug: bool,
    /// Set once a quit has been requested
    pub quit_requested: bool,
}

impl VisualizerState {
    pub fn new() -> Self {
        let mut layer_speed = [0.0; NUM_LAYERS];
        for (i, speed) in layer_speed.iter_mut().enumerate() {
            *speed = i as f64 * LAYER_SPEED_STEP;
        }
        VisualizerState {
            shape: ShapeKind::Circle,
            base_hue: 0.5,
            time_offset: 0.0,
            mouse_x: WINDOW_SIZE / 2,
            mouse_y: WINDOW_SIZE / 2,
            layer_rotation: [0.0; NUM_LAYERS],
            layer_speed,
            debug: false,
            quit_requested: false,
        }
    }

    /// Advances animation time by one frame
    pub fn advance_time(&mut self) {
        self.time_offset += TIME_STEP;
    }
}

impl Default for VisualizerState {
    fn default() -> Self {
        Self::new()
    }
}
