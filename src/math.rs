use crate::graphics::Color;
use crate::vertex::Vertex;

/// Rotates a vertex around the origin by `degrees`
pub fn rotate(vertex: Vertex, degrees: f64) -> Vertex {
    let (sin_r, cos_r) = degrees.to_radians().sin_cos();
    Vertex::new(
        vertex.x * cos_r - vertex.y * sin_r,
        vertex.x * sin_r + vertex.y * cos_r,
    )
}

/// Places a vertex at `distance` from the origin along `degrees`
pub fn polar(distance: f64, degrees: f64) -> Vertex {
    let (sin_a, cos_a) = degrees.to_radians().sin_cos();
    Vertex::new(distance * cos_a, distance * sin_a)
}

/// Wraps a value into `[0, 1)`
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Converts an HSV triple (all components in `[0, 1]`) to an 8-bit color.
///
/// Channels are truncated, not rounded, when scaled to 0..=255.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Color {
    let (r, g, b) = if saturation == 0.0 {
        (value, value, value)
    } else {
        let h = wrap_unit(hue) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));
        match sector as u8 % 6 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        }
    };
    Color::rgb8(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0) as u8
}

/// Radius modulation factor of a layer, in `[-0.2, 0.2]`
pub fn pulse(time_offset: f64, layer_index: usize) -> f64 {
    (time_offset * 3.0 + layer_index as f64 * 0.5).sin() * 0.2
}

/// Hue of a layer, always in `[0, 1)`
pub fn layer_hue(base_hue: f64, progress: f64, time_offset: f64) -> f64 {
    let hue_shift = progress * 0.3 + time_offset * 0.1;
    wrap_unit(base_hue + hue_shift)
}

/// HSV value of a layer, in `[0.4, 1.0]`
pub fn layer_brightness(time_offset: f64, layer_index: usize) -> f64 {
    0.7 + 0.3 * (time_offset * 2.0 + layer_index as f64 * 0.3).sin()
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
