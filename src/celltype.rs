//! The fixed (shape, order) → cell type table.
//!
//! The table is the XDMF cell vocabulary the dolfin reader understands. It is
//! deliberately closed: a pair without an entry is a hard error, because no
//! generic fallback cell type exists on the reading side.

use crate::prelude::*;

use crate::mesh::{Order, Shape};

/// one entry of the cell type table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellType {
    /// value of the `TopologyType` attribute
    pub name: &'static str,
    /// how many node references every connectivity row carries
    pub nodes_per_element: usize,
}

/// look up the external cell type for a shape at an interpolation order
pub fn cell_type(shape: Shape, order: Order) -> Result<CellType, UnsupportedCellType> {
    let (name, nodes_per_element) = match (shape, order) {
        (Shape::Node, Order::Linear) => ("polyvertex", 1),
        (Shape::Edge, Order::Linear) => ("polyline", 2),
        (Shape::Edge, Order::Quadratic) => ("edge_3", 3),
        (Shape::Triangle, Order::Linear) => ("triangle", 3),
        (Shape::Triangle, Order::Quadratic) => ("tri_6", 6),
        (Shape::Tetra, Order::Linear) => ("tetrahedron", 4),
        (Shape::Tetra, Order::Quadratic) => ("tet_10", 10),
        (shape, order) => return Err(UnsupportedCellType::new(shape, order.value())),
    };

    Ok(CellType {
        name,
        nodes_per_element,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_round_trips() {
        let table = [
            (Shape::Node, Order::Linear, "polyvertex", 1),
            (Shape::Edge, Order::Linear, "polyline", 2),
            (Shape::Edge, Order::Quadratic, "edge_3", 3),
            (Shape::Triangle, Order::Linear, "triangle", 3),
            (Shape::Triangle, Order::Quadratic, "tri_6", 6),
            (Shape::Tetra, Order::Linear, "tetrahedron", 4),
            (Shape::Tetra, Order::Quadratic, "tet_10", 10),
        ];

        for (shape, order, name, nodes_per_element) in table {
            let cell = cell_type(shape, order).unwrap();
            assert_eq!(cell.name, name);
            assert_eq!(cell.nodes_per_element, nodes_per_element);
        }
    }

    #[test]
    fn unlisted_pairs_are_errors() {
        assert!(cell_type(Shape::Hexa, Order::Linear).is_err());
        assert!(cell_type(Shape::Node, Order::Quadratic).is_err());
        assert!(cell_type(Shape::Quadrangle, Order::Linear).is_err());
        assert!(cell_type(Shape::Polyhedron, Order::Quadratic).is_err());
    }
}
