//! # Mesh structures
//!
//! A mesh is read through the [`NodeSet`](crate::NodeSet) and
//! [`ElementSet`](crate::ElementSet) traits; [`MeshBuffer`] is the
//! crate-provided implementor for callers that do not already own a suitable
//! structure. Node and element keys are opaque and may be sparse; the whole
//! point of the export is to re-derive a dense numbering from them.
//!
//! [`Shape`] is the fixed vocabulary of cell archetypes, independent of
//! interpolation order. The [`Order`] of a mesh says whether its elements are
//! straight-edged ([`Order::Linear`]) or carry mid-side nodes
//! ([`Order::Quadratic`]).

use crate::prelude::*;

/// opaque key of one node in the mesh's node collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor, Display, From, Into)]
pub struct NodeId(u64);

/// opaque key of one element in the mesh's element collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor, Display, From, Into)]
pub struct ElementId(u64);

/// a node's location in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// geometric archetype of an element, independent of interpolation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Node,
    Edge,
    Triangle,
    Quadrangle,
    Polygon,
    Tetra,
    Pyramid,
    Prism,
    Hexa,
    Polyhedron,
}

impl Shape {
    /// topological dimension of the archetype
    pub fn dimension(&self) -> u32 {
        match self {
            Shape::Node => 0,
            Shape::Edge => 1,
            Shape::Triangle | Shape::Quadrangle | Shape::Polygon => 2,
            Shape::Tetra | Shape::Pyramid | Shape::Prism | Shape::Hexa | Shape::Polyhedron => 3,
        }
    }

    /// the dolfin vocabulary for this archetype, used by the progress
    /// narration; shapes dolfin has no cell for report `"unknown"`
    pub fn dolfin_name(&self) -> &'static str {
        match self {
            Shape::Node => "point",
            Shape::Edge => "interval",
            Shape::Triangle => "triangle",
            Shape::Quadrangle => "quadrilateral",
            Shape::Tetra => "tetrahedron",
            Shape::Hexa => "hexahedron",
            Shape::Polygon | Shape::Pyramid | Shape::Prism | Shape::Polyhedron => "unknown",
        }
    }
}

/// interpolation order of a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// straight-edged elements
    Linear,
    /// curved elements with mid-side nodes
    Quadratic,
}

impl Order {
    /// the numeric order as declared on a mesh
    pub fn value(&self) -> u8 {
        match self {
            Order::Linear => 1,
            Order::Quadratic => 2,
        }
    }
}

#[derive(Debug, Clone)]
struct Element {
    shape: Shape,
    nodes: Vec<NodeId>,
}

/// Insertion-ordered mesh storage with O(1) resolve-by-key.
///
/// Nodes and elements are kept in the order they were inserted; that order is
/// what the export serializes. Node keys must be distinct, since the
/// exporter's dense numbering is a bijection over them. Re-inserting an element key
/// replaces the earlier definition.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    nodes: Vec<(NodeId, Point)>,
    elements: Vec<(ElementId, Element)>,
    by_id: HashMap<ElementId, usize>,
    order: u8,
}

impl MeshBuffer {
    /// an empty mesh declaring the given interpolation order
    pub fn new(order: u8) -> MeshBuffer {
        MeshBuffer {
            nodes: Vec::new(),
            elements: Vec::new(),
            by_id: HashMap::new(),
            order,
        }
    }

    /// append a node to the collection
    pub fn insert_node(&mut self, id: impl Into<NodeId>, point: Point) {
        self.nodes.push((id.into(), point));
    }

    /// append an element with its node keys in the element's own order
    pub fn insert_element<I>(&mut self, id: impl Into<ElementId>, shape: Shape, nodes: I)
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        let id = id.into();
        let element = Element {
            shape,
            nodes: nodes.into_iter().map(Into::into).collect(),
        };

        match self.by_id.get(&id) {
            Some(slot) => self.elements[*slot] = (id, element),
            None => {
                self.by_id.insert(id, self.elements.len());
                self.elements.push((id, element));
            }
        }
    }
}

impl NodeSet for MeshBuffer {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = (NodeId, Point)> + '_> {
        Box::new(self.nodes.iter().copied())
    }
}

impl ElementSet for MeshBuffer {
    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn elements(&self) -> Box<dyn Iterator<Item = ElementId> + '_> {
        Box::new(self.elements.iter().map(|(id, _)| *id))
    }

    fn element_shape(&self, element: ElementId) -> Option<Shape> {
        let slot = self.by_id.get(&element)?;
        Some(self.elements[*slot].1.shape)
    }

    fn element_nodes(&self, element: ElementId) -> Option<&[NodeId]> {
        let slot = self.by_id.get(&element)?;
        Some(&self.elements[*slot].1.nodes)
    }

    fn declared_order(&self) -> u8 {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut mesh = MeshBuffer::new(1);
        mesh.insert_node(10, Point::new(0., 0., 0.));
        mesh.insert_node(3, Point::new(1., 0., 0.));
        mesh.insert_node(7, Point::new(0., 1., 0.));

        let keys: Vec<u64> = mesh.nodes().map(|(id, _)| id.into()).collect();
        assert_eq!(keys, vec![10, 3, 7]);
    }

    #[test]
    fn element_resolves_by_key() {
        let mut mesh = MeshBuffer::new(1);
        mesh.insert_element(42, Shape::Triangle, [1u64, 2, 3]);

        assert_eq!(mesh.element_shape(ElementId::new(42)), Some(Shape::Triangle));
        let nodes = mesh.element_nodes(ElementId::new(42)).unwrap();
        assert_eq!(nodes.len(), 3);
        assert!(mesh.element_nodes(ElementId::new(43)).is_none());
    }

    #[test]
    fn reinserting_an_element_replaces_it() {
        let mut mesh = MeshBuffer::new(1);
        mesh.insert_element(1, Shape::Triangle, [1u64, 2, 3]);
        mesh.insert_element(1, Shape::Edge, [1u64, 2]);

        assert_eq!(mesh.element_count(), 1);
        assert_eq!(mesh.element_shape(ElementId::new(1)), Some(Shape::Edge));
    }

    #[test]
    fn shape_dimensions() {
        assert_eq!(Shape::Node.dimension(), 0);
        assert_eq!(Shape::Edge.dimension(), 1);
        assert_eq!(Shape::Quadrangle.dimension(), 2);
        assert_eq!(Shape::Hexa.dimension(), 3);
    }
}
