use glam::Vec3;
use std::io;

/// A drawn connection between two vertices of a [`Shape`], by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Static vertex/edge pairing. Vertices live in object space, normalized to [-1, 1]
/// per axis so a single scale maps every shape to the same screen footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub name: &'static str,
    pub verts: &'static [Vec3],
    pub edges: &'static [Edge],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Cube,
    Tetrahedron,
}

const CUBE_VERTS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

const CUBE_EDGES: [Edge; 12] = [
    // from (-1, -1, -1)
    Edge::new(0, 1),
    Edge::new(0, 2),
    Edge::new(0, 3),
    // from (1, 1, 1)
    Edge::new(7, 5),
    Edge::new(7, 4),
    Edge::new(7, 6),
    // from (-1, 1, 1)
    Edge::new(5, 2),
    Edge::new(5, 3),
    // from (1, 1, -1)
    Edge::new(4, 2),
    Edge::new(4, 1),
    // from (1, -1, 1)
    Edge::new(6, 3),
    Edge::new(6, 1),
];

// Alternate corners of the cube, so it shares the cube's footprint.
const TETRAHEDRON_VERTS: [Vec3; 4] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const TETRAHEDRON_EDGES: [Edge; 6] = [
    Edge::new(0, 1),
    Edge::new(0, 2),
    Edge::new(0, 3),
    Edge::new(1, 2),
    Edge::new(1, 3),
    Edge::new(2, 3),
];

pub const CUBE: Shape = Shape {
    name: "cube",
    verts: &CUBE_VERTS,
    edges: &CUBE_EDGES,
};

pub const TETRAHEDRON: Shape = Shape {
    name: "tetrahedron",
    verts: &TETRAHEDRON_VERTS,
    edges: &TETRAHEDRON_EDGES,
};

impl ShapeKind {
    pub fn shape(self) -> Shape {
        match self {
            ShapeKind::Cube => CUBE,
            ShapeKind::Tetrahedron => TETRAHEDRON,
        }
    }
}

impl Shape {
    /// Checks that every edge references a vertex that exists.
    pub fn validate(&self) -> io::Result<()> {
        let count = self.verts.len();
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.start >= count || edge.end >= count {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "{}: edge {} ({} -> {}) is out of range for {} vertices",
                        self.name, i, edge.start, edge.end, count
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Endpoints of every edge, in edge order.
    pub fn edge_points(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|edge| (self.verts[edge.start], self.verts[edge.end]))
    }
}
