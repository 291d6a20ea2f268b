use crate::graphics::{Color, Surface};
use crate::math::{hsv_to_rgb, layer_brightness, layer_hue, pulse};
use crate::shape::{shape_points, ShapeKind};
use crate::state::{VisualizerState, MAX_RADIUS, NUM_LAYERS, WINDOW_SIZE};
use crate::vertex::Vertex;

/// Layers with a radius below this are not drawn
pub const MIN_RADIUS: f64 = 2.0;
/// Outline width of every layer, in logical units
pub const STROKE_WIDTH: f64 = 2.0;
/// How far the vanishing point follows the pointer
const PARALLAX: f64 = 0.3;

/// Geometry and color of one layer for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub center: Vertex,
    pub radius: f64,
    pub color: Color,
}

/// Draws the wormhole as concentric, rotating, pulsing outlines
#[derive(Debug, Clone)]
pub struct LayerRenderer {
    max_radius: f64,
    center: Vertex,
}

impl LayerRenderer {
    pub fn new(max_radius: f64) -> Self {
        let half = (WINDOW_SIZE / 2) as f64;
        LayerRenderer {
            max_radius,
            center: Vertex::new(half, half),
        }
    }

    /// Computes layer `index` for the current state, or `None` when its
    /// radius is too small to draw
    pub fn layer(&self, state: &VisualizerState, index: usize) -> Option<Layer> {
        let progress = index as f64 / NUM_LAYERS as f64;
        let base_radius = self.max_radius * (1.0 - progress);
        let radius = base_radius * (1.0 + pulse(state.time_offset, index));
        if radius < MIN_RADIUS {
            return None;
        }

        // Inner layers (progress near 1) drift furthest toward the pointer
        let offset = Vertex::new(
            (state.mouse_x - WINDOW_SIZE / 2) as f64 * progress * PARALLAX,
            (state.mouse_y - WINDOW_SIZE / 2) as f64 * progress * PARALLAX,
        );

        let hue = layer_hue(state.base_hue, progress, state.time_offset);
        let brightness = layer_brightness(state.time_offset, index);

        Some(Layer {
            center: self.center.offset(offset),
            radius,
            color: hsv_to_rgb(hue, 1.0, brightness),
        })
    }

    /// Advances the layer's rotation and draws it. Skipped layers neither
    /// draw nor rotate.
    pub fn draw_layer<S: Surface>(
        &self,
        state: &mut VisualizerState,
        index: usize,
        surface: &mut S,
    ) {
        let Some(layer) = self.layer(state, index) else {
            return;
        };

        state.layer_rotation[index] += state.layer_speed[index];

        match state.shape {
            ShapeKind::Circle => {
                surface.stroke_circle(layer.center, layer.radius, layer.color, STROKE_WIDTH);
            }
            kind => {
                let rotation = state.layer_rotation[index];
                if let Some(points) = shape_points(kind, layer.center, layer.radius, rotation) {
                    if points.len() > 2 {
                        surface.stroke_polygon(&points, layer.color, STROKE_WIDTH);
                    }
                }
            }
        }
    }

    /// Renders one frame: clears the surface, advances time and draws every
    /// layer from the innermost to the outermost so nearer layers overdraw
    /// farther ones.
    pub fn render_frame<S: Surface>(&self, state: &mut VisualizerState, surface: &mut S) {
        surface.fill(Color::BLACK);
        state.advance_time();
        for index in (0..NUM_LAYERS).rev() {
            self.draw_layer(state, index, surface);
        }
    }
}

impl Default for LayerRenderer {
    fn default() -> Self {
        Self::new(MAX_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LAYER_SPEED_STEP;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Fill(Color),
        Circle {
            center: Vertex,
            radius: f64,
            color: Color,
        },
        Polygon {
            points: Vec<Vertex>,
            color: Color,
        },
    }

    /// Surface that records every draw call
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        fn fill(&mut self, color: Color) {
            self.calls.push(DrawCall::Fill(color));
        }

        fn stroke_circle(&mut self, center: Vertex, radius: f64, color: Color, width: f64) {
            assert_eq!(width, STROKE_WIDTH);
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                color,
            });
        }

        fn stroke_polygon(&mut self, points: &[Vertex], color: Color, width: f64) {
            assert_eq!(width, STROKE_WIDTH);
            self.calls.push(DrawCall::Polygon {
                points: points.to_vec(),
                color,
            });
        }
    }

    fn shape_calls(surface: &RecordingSurface) -> Vec<&DrawCall> {
        surface
            .calls
            .iter()
            .filter(|call| !matches!(call, DrawCall::Fill(_)))
            .collect()
    }

    #[test]
    fn base_radius_never_grows_inward() {
        let renderer = LayerRenderer::default();
        let base: Vec<f64> = (0..NUM_LAYERS)
            .map(|i| renderer.max_radius * (1.0 - i as f64 / NUM_LAYERS as f64))
            .collect();
        assert_eq!(base[0], MAX_RADIUS);
        assert!(base.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn layers_drawn_innermost_first() {
        let renderer = LayerRenderer::default();
        let mut state = VisualizerState::new();
        let mut surface = RecordingSurface::default();
        renderer.render_frame(&mut state, &mut surface);

        assert_eq!(surface.calls[0], DrawCall::Fill(Color::BLACK));
        let radii: Vec<f64> = shape_calls(&surface)
            .into_iter()
            .map(|call| match call {
                DrawCall::Circle { radius, .. } => *radius,
                other => panic!("unexpected draw call {other:?}"),
            })
            .collect();
        assert_eq!(radii.len(), NUM_LAYERS);

        // Match each recorded radius back to the layer that produced it
        let expected: Vec<f64> = (0..NUM_LAYERS)
            .rev()
            .map(|i| renderer.layer(&state, i).unwrap().radius)
            .collect();
        assert_eq!(radii, expected);
    }

    #[test]
    fn tiny_layers_are_skipped_silently() {
        let renderer = LayerRenderer::new(1.0);
        let mut state = VisualizerState::new();
        state.shape = ShapeKind::Star;
        let mut surface = RecordingSurface::default();
        renderer.render_frame(&mut state, &mut surface);

        assert!(shape_calls(&surface).is_empty());
        assert!(state.layer_rotation.iter().all(|&r| r == 0.0));
        assert!(renderer.layer(&state, 0).is_none());
    }

    #[test]
    fn rotation_accumulates_by_layer_speed() {
        let renderer = LayerRenderer::default();
        let mut state = VisualizerState::new();
        state.shape = ShapeKind::Hexagon;
        let mut surface = RecordingSurface::default();
        for _ in 0..3 {
            renderer.render_frame(&mut state, &mut surface);
        }
        for (i, rotation) in state.layer_rotation.iter().enumerate() {
            assert_eq!(*rotation, 3.0 * i as f64 * LAYER_SPEED_STEP);
        }
    }

    #[test]
    fn polygons_are_rotated_by_accumulated_angle() {
        let renderer = LayerRenderer::default();
        let mut state = VisualizerState::new();
        state.shape = ShapeKind::Square;
        let mut surface = RecordingSurface::default();
        renderer.render_frame(&mut state, &mut surface);

        // Last call is layer 0, which never rotates
        let Some(DrawCall::Polygon { points, .. }) = surface.calls.last() else {
            panic!("expected a polygon");
        };
        let layer = renderer.layer(&state, 0).unwrap();
        let half = layer.radius * 0.7;
        assert!((points[0].x - (200.0 - half)).abs() < 1e-9);
        assert!((points[0].y - (200.0 - half)).abs() < 1e-9);
    }

    #[test]
    fn pointer_parallax_grows_with_depth() {
        let renderer = LayerRenderer::default();
        let mut state = VisualizerState::new();
        state.mouse_x = 400;
        state.mouse_y = 100;

        let outer = renderer.layer(&state, 0).unwrap();
        assert_eq!(outer.center, Vertex::new(200.0, 200.0));

        let inner = renderer.layer(&state, 15).unwrap();
        assert!((inner.center.x - (200.0 + 200.0 * 0.5 * 0.3)).abs() < 1e-9);
        assert!((inner.center.y - (200.0 - 100.0 * 0.5 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn first_frame_golden_output() {
        let renderer = LayerRenderer::default();
        let mut state = VisualizerState::new();
        let mut surface = RecordingSurface::default();
        renderer.render_frame(&mut state, &mut surface);

        let calls = shape_calls(&surface);
        assert_eq!(calls.len(), NUM_LAYERS);

        // Outermost layer at t = 0.02
        let DrawCall::Circle {
            center,
            radius,
            color,
        } = calls[NUM_LAYERS - 1]
        else {
            panic!("expected a circle");
        };
        assert_eq!(*center, Vertex::new(200.0, 200.0));
        assert!((radius - 300.0 * (1.0 + 0.06f64.sin() * 0.2)).abs() < 1e-9);
        assert_eq!(*color, Color::rgb8(0, 179, 181));

        // Innermost layer
        let DrawCall::Circle { radius, color, .. } = calls[0] else {
            panic!("expected a circle");
        };
        assert!((radius - 10.0 * (1.0 + (0.06f64 + 14.5).sin() * 0.2)).abs() < 1e-9);
        assert_eq!(*color, Color::rgb8(170, 0, 226));

        // Same starting state reproduces the same frame
        let mut replay_state = VisualizerState::new();
        let mut replay = RecordingSurface::default();
        renderer.render_frame(&mut replay_state, &mut replay);
        assert_eq!(replay.calls, surface.calls);
    }
}
