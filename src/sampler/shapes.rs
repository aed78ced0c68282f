//! Shape vocabulary for mosaic samples

use rand::Rng;

/// Geometry kind a mosaic sample can take
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Regular polygon, first vertex pointing up
    Polygon {
        /// Number of sides, 3 through 8
        sides: u8,
    },
    /// Circle inscribed in the sample's bounding box
    Circle,
}

/// The fixed vocabulary: 3- through 8-sided regular polygons plus the circle
///
/// The 4-gon doubles as the square variant, so uniform selection stays
/// uniform over distinct shapes.
pub const VOCABULARY: [ShapeKind; 7] = [
    ShapeKind::Polygon { sides: 3 },
    ShapeKind::Polygon { sides: 4 },
    ShapeKind::Polygon { sides: 5 },
    ShapeKind::Polygon { sides: 6 },
    ShapeKind::Polygon { sides: 7 },
    ShapeKind::Polygon { sides: 8 },
    ShapeKind::Circle,
];

impl ShapeKind {
    /// Draw a kind uniformly at random, independently per sample
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let index = rng.random_range(0..VOCABULARY.len());
        VOCABULARY.get(index).copied().unwrap_or(Self::Circle)
    }
}
