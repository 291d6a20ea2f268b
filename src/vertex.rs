/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Vertex { x, y }
    }

    /// Translates this vertex by another one
    pub fn offset(self, by: Vertex) -> Vertex {
        Vertex::new(self.x + by.x, self.y + by.y)
    }
}
