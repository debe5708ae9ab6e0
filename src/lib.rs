#![doc = include_str!("../README.md")]

pub mod array;
pub mod celltype;
mod data;
pub mod error;
pub mod introspect;
pub mod mesh;
pub mod prelude;
pub mod serialize;
mod traits;
mod write_xdmf;

pub use traits::DataItemArray;
pub use traits::ElementSet;
pub use traits::ExportLog;
pub use traits::NodeSet;
pub use traits::Quiet;

pub use data::GridData;

pub use mesh::{ElementId, MeshBuffer, NodeId, Order, Point, Shape};

pub use introspect::{
    dominant_kind, element_kinds, mesh_dimension, mesh_order, DominantKind, ElementKind,
    GeometryAxes,
};

pub use celltype::{cell_type, CellType};

pub use array::{CellValues, Connectivity, Coordinates};

pub use serialize::{serialize_elements, serialize_nodes, NodeIndexMap};

pub use write_xdmf::write_document;
pub use write_xdmf::{write_xdmf, write_xdmf_logged, Encoding};
pub use write_xdmf::{CELL_ATTRIBUTE_NAME, GRID_NAME};

pub use error::ExportError;

pub use ndarray;

pub use quick_xml::writer::Writer;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occurred: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not serialize the mesh: `{0}`")]
    Export(#[from] error::ExportError),
    #[error("Could not write XML data to file: `{0}`")]
    XmlWrite(#[from] quick_xml::Error),
}
