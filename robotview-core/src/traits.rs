//! Core traits for robotview geometry

use crate::{mesh::TriangleMesh, point::*};

/// Axis-aligned bounding extrema of a piece of geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: Point3f,
    pub max: Point3f,
}

impl Extrema {
    /// Extent along each axis
    pub fn span(&self) -> Vector3f {
        self.max - self.min
    }

    /// Largest extent of the three axes
    pub fn max_span(&self) -> f32 {
        self.span().max()
    }

    pub fn center(&self) -> Point3f {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Trait for geometry with a spatial extent
pub trait Bounded {
    /// Get the bounding box of the object
    fn extrema(&self) -> Extrema;

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        self.extrema().center()
    }
}

impl Bounded for TriangleMesh {
    fn extrema(&self) -> Extrema {
        let Some(first) = self.vertices.first() else {
            return Extrema {
                min: Point3f::origin(),
                max: Point3f::origin(),
            };
        };

        let mut min = *first;
        let mut max = *first;

        for vertex in &self.vertices {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);

            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }

        Extrema { min, max }
    }
}
