//! Common traits and types that are useful for working with `xdmf`
#![allow(unused_imports)]

pub use crate::data::GridData;
pub use crate::traits::{DataItemArray, ElementSet, ExportLog, NodeSet, Quiet};

pub use crate::array::{CellValues, Connectivity, Coordinates};
pub use crate::celltype::CellType;
pub use crate::introspect::{DominantKind, ElementKind, GeometryAxes};
pub use crate::mesh::{ElementId, MeshBuffer, NodeId, Order, Point, Shape};
pub use crate::serialize::NodeIndexMap;
pub use crate::write_xdmf::Encoding;

pub(crate) use crate::error::{
    AmbiguousMesh, AttributeCountMismatch, DanglingReference, ExportError, MalformedElement,
    UnknownElement, UnsupportedCellType, UnsupportedOrder,
};
pub(crate) use crate::Error;

pub(crate) use std::collections::HashMap;
pub(crate) use std::io::Write;

pub(crate) use crate::{array, celltype, introspect, serialize, write_xdmf};

pub(crate) use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};

pub(crate) use ndarray::{Array1, Array2, Axis};
