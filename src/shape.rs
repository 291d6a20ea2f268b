use crate::math::{polar, rotate};
use crate::vertex::Vertex;

/// Outline every layer of the wormhole is drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
    Octagon,
    Star,
}

/// Builds corners in shape-local space (origin-centered, unrotated)
type CornerFn = fn(f64) -> Vec<Vertex>;

/// Corner builders indexed by `ShapeKind as usize`. Circles have none.
const CORNERS: [Option<CornerFn>; ShapeKind::COUNT] = [
    None,
    Some(square_corners),
    Some(triangle_corners),
    Some(hexagon_corners),
    Some(octagon_corners),
    Some(star_corners),
];

impl ShapeKind {
    pub const COUNT: usize = 6;

    pub const ALL: [ShapeKind; ShapeKind::COUNT] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::Star,
    ];

    /// The next shape, wrapping back to the first
    pub fn next(self) -> ShapeKind {
        ShapeKind::ALL[(self as usize + 1) % ShapeKind::COUNT]
    }

    /// Capitalised display name
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Octagon => "Octagon",
            ShapeKind::Star => "Star",
        }
    }
}

/// Generates the outline of `kind` around `center`, rotated by `rotation`
/// degrees.
///
/// Returns `None` for [`ShapeKind::Circle`], which is drawn with a dedicated
/// circle primitive instead.
pub fn shape_points(
    kind: ShapeKind,
    center: Vertex,
    radius: f64,
    rotation: f64,
) -> Option<Vec<Vertex>> {
    let corners = CORNERS[kind as usize]?;
    Some(
        corners(radius)
            .into_iter()
            .map(|corner| rotate(corner, rotation).offset(center))
            .collect(),
    )
}

fn square_corners(radius: f64) -> Vec<Vertex> {
    let half_size = radius * 0.7;
    vec![
        Vertex::new(-half_size, -half_size),
        Vertex::new(half_size, -half_size),
        Vertex::new(half_size, half_size),
        Vertex::new(-half_size, half_size),
    ]
}

fn regular_corners(radius: f64, sides: usize) -> Vec<Vertex> {
    let step = 360.0 / sides as f64;
    (0..sides).map(|i| polar(radius, i as f64 * step)).collect()
}

fn triangle_corners(radius: f64) -> Vec<Vertex> {
    regular_corners(radius, 3)
}

fn hexagon_corners(radius: f64) -> Vec<Vertex> {
    regular_corners(radius, 6)
}

fn octagon_corners(radius: f64) -> Vec<Vertex> {
    regular_corners(radius, 8)
}

// Ten points alternating outer and inner radius, 36 degrees apart
fn star_corners(radius: f64) -> Vec<Vertex> {
    (0..10)
        .map(|i| {
            let distance = if i % 2 == 0 { radius } else { radius * 0.5 };
            polar(distance, i as f64 * 36.0)
        })
        .collect()
}
