//! Failure modes of a mesh export.
//!
//! Every failure aborts the whole export. A correct exchange file is
//! all-or-nothing, so there is no partial-document recovery: the caller gets
//! the offending key or shape/order pair and nothing is written.

use crate::prelude::*;

use crate::mesh::{ElementId, NodeId, Shape};

#[derive(Debug, thiserror::Error, From)]
pub enum ExportError {
    #[error("{0}")]
    AmbiguousMesh(AmbiguousMesh),
    #[error("{0}")]
    UnsupportedOrder(UnsupportedOrder),
    #[error("{0}")]
    UnsupportedCellType(UnsupportedCellType),
    #[error("{0}")]
    DanglingReference(DanglingReference),
    #[error("{0}")]
    UnknownElement(UnknownElement),
    #[error("{0}")]
    MalformedElement(MalformedElement),
    #[error("{0}")]
    AttributeCountMismatch(AttributeCountMismatch),
}

/// the mesh carries no elements, so no dominant cell type exists
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "mesh contains no elements, a dominant cell type cannot be selected")]
pub struct AmbiguousMesh;

/// the mesh declares an interpolation order outside {1, 2}
#[derive(Debug, Clone, Copy, Display, Constructor)]
#[display(fmt = "mesh declares interpolation order {order}, only orders 1 and 2 are defined")]
pub struct UnsupportedOrder {
    pub(crate) order: u8,
}

/// the (shape, order) pair has no entry in the fixed cell type table
#[derive(Debug, Clone, Copy, Display, Constructor)]
#[display(fmt = "no cell type is defined for {shape:?} elements of order {order}")]
pub struct UnsupportedCellType {
    pub(crate) shape: Shape,
    pub(crate) order: u8,
}

/// an element references a node key absent from the node collection
#[derive(Debug, Clone, Copy, Display, Constructor)]
#[display(
    fmt = "element {element} references node {node} which is not part of the node collection"
)]
pub struct DanglingReference {
    pub(crate) element: ElementId,
    pub(crate) node: NodeId,
}

/// an element key produced by iteration could not be resolved back to its
/// node sequence
#[derive(Debug, Clone, Copy, Display, Constructor)]
#[display(fmt = "element {element} could not be resolved to a node sequence")]
pub struct UnknownElement {
    pub(crate) element: ElementId,
}

/// an element's node sequence length disagrees with the selected cell type
#[derive(Debug, Clone, Copy, Display, Constructor)]
#[display(
    fmt = "element {element} carries {actual} nodes, cell type {cell} requires {expected}"
)]
pub struct MalformedElement {
    pub(crate) element: ElementId,
    pub(crate) cell: &'static str,
    pub(crate) expected: usize,
    pub(crate) actual: usize,
}

/// a caller-supplied cell value block does not match the element count
#[derive(Debug, Clone, Copy, Display, Constructor)]
#[display(fmt = "cell attribute carries {values} values for {elements} elements")]
pub struct AttributeCountMismatch {
    pub(crate) elements: usize,
    pub(crate) values: usize,
}
