//! Names for the legal `GeometrySet` parameters.

/// Positional dimension of a geometry set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryDimension {
    /// The plane.
    D2 = 2,
    /// Space.
    D3 = 3,
}

impl GeometryDimension {
    /// Number of positional components per sub-point.
    pub fn components(&self) -> usize {
        *self as usize
    }

    pub fn from_components(components: usize) -> Option<Self> {
        match components {
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            _ => None,
        }
    }
}

/// Shape of each element in a geometry set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeometryShape {
    Point = 1,
    Line = 2,
    #[default]
    Triangle = 3,
    Quad = 4,
}

impl GeometryShape {
    /// Get the number of sub-points per element.
    pub fn vertices_per_primitive(&self) -> usize {
        *self as usize
    }

    pub fn from_vertices_per_primitive(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Point),
            2 => Some(Self::Line),
            3 => Some(Self::Triangle),
            4 => Some(Self::Quad),
            _ => None,
        }
    }
}
