//! Classification of a mesh before serialization: which element shapes are
//! present, which of them dominates, and whether the declared interpolation
//! order is one the cell type table knows about.

use crate::prelude::*;

use crate::mesh::{Order, Shape};

/// one element shape present in a mesh, with its element count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementKind {
    pub shape: Shape,
    pub count: usize,
}

/// the most geometrically significant element kind of a mesh
///
/// Highest topological dimension wins; among kinds of equal dimension the one
/// with the most elements wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominantKind {
    pub shape: Shape,
    pub count: usize,
    pub dimension: u32,
}

/// number of coordinate axes written to the geometry block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryAxes {
    Xy,
    Xyz,
}

impl GeometryAxes {
    /// axes for a mesh of the given topological dimension
    ///
    /// Only 2-dimensional meshes drop the z coordinate; 0- and 1-dimensional
    /// meshes keep full 3D coordinates like volume meshes do.
    pub fn from_dimension(dimension: u32) -> GeometryAxes {
        if dimension == 2 {
            GeometryAxes::Xy
        } else {
            GeometryAxes::Xyz
        }
    }

    /// number of coordinate columns per node
    pub fn components(&self) -> usize {
        match self {
            GeometryAxes::Xy => 2,
            GeometryAxes::Xyz => 3,
        }
    }

    /// value of the `GeometryType` attribute
    pub fn geometry_type(&self) -> &'static str {
        match self {
            GeometryAxes::Xy => "XY",
            GeometryAxes::Xyz => "XYZ",
        }
    }
}

/// every distinct element shape occurring in the mesh, with counts, in first
/// appearance order
pub fn element_kinds<M: ElementSet + ?Sized>(mesh: &M) -> Vec<ElementKind> {
    let mut kinds: Vec<ElementKind> = Vec::new();

    for element in mesh.elements() {
        if let Some(shape) = mesh.element_shape(element) {
            match kinds.iter_mut().find(|kind| kind.shape == shape) {
                Some(kind) => kind.count += 1,
                None => kinds.push(ElementKind { shape, count: 1 }),
            }
        }
    }

    kinds
}

/// select the dominant kind from a classification
pub fn dominant_kind(kinds: &[ElementKind]) -> Result<DominantKind, AmbiguousMesh> {
    kinds
        .iter()
        .map(|kind| DominantKind {
            shape: kind.shape,
            count: kind.count,
            dimension: kind.shape.dimension(),
        })
        .max_by_key(|kind| (kind.dimension, kind.count))
        .ok_or(AmbiguousMesh)
}

/// topological dimension of the mesh, taken from its dominant kind
pub fn mesh_dimension<M: ElementSet + ?Sized>(mesh: &M) -> Result<u32, AmbiguousMesh> {
    let kinds = element_kinds(mesh);
    Ok(dominant_kind(&kinds)?.dimension)
}

/// validate the mesh's declared interpolation order
pub fn mesh_order<M: ElementSet + ?Sized>(mesh: &M) -> Result<Order, UnsupportedOrder> {
    match mesh.declared_order() {
        1 => Ok(Order::Linear),
        2 => Ok(Order::Quadratic),
        other => Err(UnsupportedOrder::new(other)),
    }
}
