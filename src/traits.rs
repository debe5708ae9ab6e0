//! # Traits
//!
//! The seams between this crate and a host mesh structure. [`NodeSet`] and
//! [`ElementSet`] are the two narrow read-only capabilities an export needs:
//! iterate the collections in their storage order, and resolve an element key
//! back to its node sequence. The crate ships [`MeshBuffer`](crate::MeshBuffer)
//! as a ready-made implementor, but any host type can implement the pair and
//! be exported without an intermediate copy.
//!
//! Storage order is load-bearing. The node iteration order defines the dense
//! zero-based numbering written to the file, and the element iteration order
//! defines the connectivity row order.

use crate::mesh::{ElementId, NodeId, Point, Shape};

/// read-only view of a mesh's node collection
pub trait NodeSet {
    /// number of nodes in the collection, referenced by an element or not
    fn node_count(&self) -> usize;

    /// every node with its key, in storage order
    ///
    /// The iterator must yield exactly [`node_count`](NodeSet::node_count)
    /// items, each with a distinct key.
    fn nodes(&self) -> Box<dyn Iterator<Item = (NodeId, Point)> + '_>;
}

/// read-only view of a mesh's element collection
pub trait ElementSet {
    /// number of element keys yielded by [`elements`](ElementSet::elements)
    fn element_count(&self) -> usize;

    /// every element key, in storage order
    fn elements(&self) -> Box<dyn Iterator<Item = ElementId> + '_>;

    /// the shape category of one element
    fn element_shape(&self, element: ElementId) -> Option<Shape>;

    /// the node keys of one element, in the element's own node order
    fn element_nodes(&self, element: ElementId) -> Option<&[NodeId]>;

    /// the interpolation order declared on the mesh, as stored
    ///
    /// Validation into the supported `{1, 2}` range happens in
    /// [`mesh_order`](crate::mesh_order), not here.
    fn declared_order(&self) -> u8;
}

/// sink for the progress narration of an export
///
/// The pipeline reports what it derived from the mesh (dimension, element
/// kinds, the dominant cell type) through this hook instead of printing.
/// Closures work directly:
///
/// ```
/// # use xdmf::ExportLog;
/// let mut lines: Vec<String> = Vec::new();
/// let mut log = |message: &str| lines.push(message.to_string());
/// log.note("dimension of mesh: 3");
/// assert_eq!(lines.len(), 1);
/// ```
pub trait ExportLog {
    fn note(&mut self, message: &str);
}

/// discards all progress messages
pub struct Quiet;

impl ExportLog for Quiet {
    fn note(&mut self, _message: &str) {}
}

impl<F: FnMut(&str)> ExportLog for F {
    fn note(&mut self, message: &str) {
        self(message)
    }
}

/// a rectangular data block that can appear as a `DataItem` payload
pub trait DataItemArray {
    /// declared row count of the block
    fn rows(&self) -> usize;

    /// declared column count of the block
    fn cols(&self) -> usize;

    /// value for the `NumberType` attribute, when the block declares one
    fn number_type(&self) -> Option<&'static str> {
        None
    }

    /// group name under which the block lives in an external heavy-data
    /// container reference
    fn container_group(&self) -> &'static str;

    /// the payload rendered as inline text: space-separated columns,
    /// newline-separated rows, integers in plain decimal and floats with
    /// fixed 6-decimal precision
    fn ascii_text(&self) -> String;
}
