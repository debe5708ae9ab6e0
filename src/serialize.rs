//! Node and element serialization.
//!
//! The node pass walks the node collection in storage order and assigns every
//! node (referenced by an element or not) a dense zero-based index. The
//! resulting [`NodeIndexMap`] is the one piece of state shared with the
//! element pass, which translates each element's node keys through it. The
//! external format addresses nodes positionally, so the map is what bridges
//! the mesh's sparse key space and the file's dense one.

use crate::prelude::*;

use crate::celltype::{cell_type, CellType};
use crate::introspect::{DominantKind, GeometryAxes};
use crate::mesh::{NodeId, Order};

/// bijection from the mesh's node keys onto `[0, node_count)`
///
/// Indices follow the node collection's traversal order, so re-running the
/// node pass on an unchanged mesh reproduces the same map.
#[derive(Debug, Clone, Default)]
pub struct NodeIndexMap {
    indices: HashMap<NodeId, usize>,
}

impl NodeIndexMap {
    fn with_capacity(capacity: usize) -> NodeIndexMap {
        NodeIndexMap {
            indices: HashMap::with_capacity(capacity),
        }
    }

    /// the dense index assigned to a node key
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.indices.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Walk the node collection and emit the coordinate block plus the dense
/// index map.
///
/// The coordinate block has one row per node in traversal order; the z column
/// is dropped for [`GeometryAxes::Xy`]. The mesh is not mutated.
pub fn serialize_nodes<M: NodeSet + ?Sized>(
    mesh: &M,
    axes: GeometryAxes,
) -> (Coordinates, NodeIndexMap) {
    let count = mesh.node_count();
    let components = axes.components();

    let mut coordinates = Array2::<f64>::zeros((count, components));
    let mut index = NodeIndexMap::with_capacity(count);

    for (slot, (node, point)) in mesh.nodes().enumerate() {
        coordinates[[slot, 0]] = point.x;
        coordinates[[slot, 1]] = point.y;
        if components == 3 {
            coordinates[[slot, 2]] = point.z;
        }
        index.indices.insert(node, slot);
    }

    (Coordinates::new(coordinates), index)
}

/// Walk the elements of the dominant kind and emit the connectivity block.
///
/// Looks up the cell type for `(dominant.shape, order)`, then translates each
/// element's node keys through the index map, preserving both the element
/// traversal order and each element's own node order. Elements of other
/// shapes (lower-dimension entities registered alongside the dominant cells)
/// are skipped.
///
/// A node key missing from the map is a [`DanglingReference`]; an element key
/// that fails to resolve is an [`UnknownElement`]; a node sequence whose
/// length disagrees with the cell type is a [`MalformedElement`]. All three
/// abort the export.
pub fn serialize_elements<M: ElementSet + ?Sized>(
    mesh: &M,
    dominant: DominantKind,
    order: Order,
    index: &NodeIndexMap,
) -> Result<(CellType, Connectivity), ExportError> {
    let cell = cell_type(dominant.shape, order)?;

    let mut connectivity = Array2::<u64>::zeros((dominant.count, cell.nodes_per_element));
    let mut row = 0;

    for element in mesh.elements() {
        if mesh.element_shape(element) != Some(dominant.shape) {
            continue;
        }

        let nodes = mesh
            .element_nodes(element)
            .ok_or_else(|| UnknownElement::new(element))?;

        if nodes.len() != cell.nodes_per_element {
            return Err(MalformedElement::new(
                element,
                cell.name,
                cell.nodes_per_element,
                nodes.len(),
            )
            .into());
        }

        for (column, node) in nodes.iter().enumerate() {
            let dense = index
                .index_of(*node)
                .ok_or_else(|| DanglingReference::new(element, *node))?;
            connectivity[[row, column]] = dense as u64;
        }

        row += 1;
    }

    Ok((cell, Connectivity::new(connectivity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::{dominant_kind, element_kinds};
    use crate::mesh::{MeshBuffer, Point, Shape};
    use crate::traits::DataItemArray;

    fn tet_mesh() -> MeshBuffer {
        // sparse, out-of-order keys on purpose
        let mut mesh = MeshBuffer::new(1);
        mesh.insert_node(12, Point::new(0., 0., 0.));
        mesh.insert_node(4, Point::new(1., 0., 0.));
        mesh.insert_node(9, Point::new(0., 1., 0.));
        mesh.insert_node(25, Point::new(0., 0., 1.));
        mesh.insert_element(3, Shape::Tetra, [12u64, 4, 9, 25]);
        mesh
    }

    fn dominant(mesh: &MeshBuffer) -> DominantKind {
        dominant_kind(&element_kinds(mesh)).unwrap()
    }

    #[test]
    fn indices_are_a_bijection() {
        let mesh = tet_mesh();
        let (_, index) = serialize_nodes(&mesh, GeometryAxes::Xyz);

        assert_eq!(index.len(), mesh.node_count());

        let mut seen: Vec<usize> = mesh
            .nodes()
            .map(|(id, _)| index.index_of(id).unwrap())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn indices_follow_traversal_order() {
        let mesh = tet_mesh();
        let (_, index) = serialize_nodes(&mesh, GeometryAxes::Xyz);

        assert_eq!(index.index_of(NodeId::new(12)), Some(0));
        assert_eq!(index.index_of(NodeId::new(4)), Some(1));
        assert_eq!(index.index_of(NodeId::new(9)), Some(2));
        assert_eq!(index.index_of(NodeId::new(25)), Some(3));
    }

    #[test]
    fn rerunning_reproduces_the_map() {
        let mesh = tet_mesh();
        let (first_coords, first) = serialize_nodes(&mesh, GeometryAxes::Xyz);
        let (second_coords, second) = serialize_nodes(&mesh, GeometryAxes::Xyz);

        assert_eq!(first_coords, second_coords);
        for (id, _) in mesh.nodes() {
            assert_eq!(first.index_of(id), second.index_of(id));
        }
    }

    #[test]
    fn unreferenced_nodes_are_still_indexed() {
        let mut mesh = tet_mesh();
        mesh.insert_node(99, Point::new(5., 5., 5.));

        let (coordinates, index) = serialize_nodes(&mesh, GeometryAxes::Xyz);

        assert_eq!(coordinates.rows(), 5);
        assert_eq!(index.index_of(NodeId::new(99)), Some(4));
    }

    #[test]
    fn z_is_dropped_for_two_axes() {
        let mesh = tet_mesh();
        let (coordinates, _) = serialize_nodes(&mesh, GeometryAxes::Xy);

        assert_eq!(coordinates.cols(), 2);
        assert_eq!(coordinates[[3, 1]], 0.);
    }

    #[test]
    fn connectivity_translates_through_the_map() {
        let mesh = tet_mesh();
        let (_, index) = serialize_nodes(&mesh, GeometryAxes::Xyz);
        let (cell, connectivity) =
            serialize_elements(&mesh, dominant(&mesh), Order::Linear, &index).unwrap();

        assert_eq!(cell.name, "tetrahedron");
        assert_eq!(connectivity.rows(), 1);
        assert_eq!(connectivity.cols(), 4);
        assert_eq!(connectivity.ascii_text(), "0 1 2 3");
    }

    #[test]
    fn translated_indices_stay_in_range() {
        let mut mesh = tet_mesh();
        mesh.insert_node(30, Point::new(1., 1., 1.));
        mesh.insert_element(4, Shape::Tetra, [25u64, 9, 4, 30]);

        let (_, index) = serialize_nodes(&mesh, GeometryAxes::Xyz);
        let (_, connectivity) =
            serialize_elements(&mesh, dominant(&mesh), Order::Linear, &index).unwrap();

        for dense in connectivity.iter() {
            assert!((*dense as usize) < mesh.node_count());
        }
    }

    #[test]
    fn lower_dimension_elements_are_skipped() {
        let mut mesh = tet_mesh();
        mesh.insert_element(7, Shape::Triangle, [12u64, 4, 9]);

        let (_, index) = serialize_nodes(&mesh, GeometryAxes::Xyz);
        let (_, connectivity) =
            serialize_elements(&mesh, dominant(&mesh), Order::Linear, &index).unwrap();

        assert_eq!(connectivity.rows(), 1);
    }

    #[test]
    fn dangling_node_reference_is_fatal() {
        let mut mesh = tet_mesh();
        mesh.insert_element(5, Shape::Tetra, [12u64, 4, 9, 777]);

        let (_, index) = serialize_nodes(&mesh, GeometryAxes::Xyz);
        let result = serialize_elements(&mesh, dominant(&mesh), Order::Linear, &index);

        assert!(matches!(
            result,
            Err(ExportError::DanglingReference(_))
        ));
    }

    #[test]
    fn wrong_node_count_is_fatal() {
        let mut mesh = tet_mesh();
        mesh.insert_element(5, Shape::Tetra, [12u64, 4, 9]);

        let (_, index) = serialize_nodes(&mesh, GeometryAxes::Xyz);
        let result = serialize_elements(&mesh, dominant(&mesh), Order::Linear, &index);

        assert!(matches!(result, Err(ExportError::MalformedElement(_))));
    }
}
