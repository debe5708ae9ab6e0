use crate::prelude::*;

use crate::introspect::{self, GeometryAxes};
use crate::serialize::{serialize_elements, serialize_nodes};

/// Everything one uniform grid of the output document holds.
///
/// The declared counts in the serialized document are taken from these arrays
/// directly, so the topology/geometry/attribute blocks can never disagree
/// with their declarations. Build one with [`GridData::from_mesh`], or
/// assemble the fields yourself when the arrays come from elsewhere.
#[derive(Debug, Clone)]
pub struct GridData {
    pub coordinates: Coordinates,
    pub connectivity: Connectivity,
    pub cell_values: CellValues,
    pub cell_type: CellType,
    pub axes: GeometryAxes,
}

impl GridData {
    /// run the full classification and serialization pipeline on a mesh
    pub fn from_mesh<M: NodeSet + ElementSet>(mesh: &M) -> Result<GridData, ExportError> {
        GridData::from_mesh_logged(mesh, &mut Quiet)
    }

    /// like [`from_mesh`](GridData::from_mesh), narrating progress through
    /// the given log
    pub fn from_mesh_logged<M, L>(mesh: &M, log: &mut L) -> Result<GridData, ExportError>
    where
        M: NodeSet + ElementSet,
        L: ExportLog,
    {
        let kinds = introspect::element_kinds(mesh);
        let dominant = introspect::dominant_kind(&kinds)?;
        let order = introspect::mesh_order(mesh)?;

        log.note(&format!("dimension of mesh: {}", dominant.dimension));
        for kind in &kinds {
            log.note(&format!(
                "element kind in mesh: {:?} x{}",
                kind.shape, kind.count
            ));
        }
        log.note(&format!(
            "dominant cell type: {:?} (dolfin name: {})",
            dominant.shape,
            dominant.shape.dolfin_name()
        ));

        let axes = GeometryAxes::from_dimension(dominant.dimension);
        let (coordinates, index) = serialize_nodes(mesh, axes);
        let (cell_type, connectivity) = serialize_elements(mesh, dominant, order, &index)?;
        let cell_values = CellValues::zeros(dominant.count);

        Ok(GridData {
            coordinates,
            connectivity,
            cell_values,
            cell_type,
            axes,
        })
    }

    /// replace the placeholder cell values with caller-supplied field data
    ///
    /// The block must carry exactly one value per connectivity row.
    pub fn with_cell_values(mut self, values: CellValues) -> Result<GridData, ExportError> {
        if values.rows() != self.connectivity.rows() {
            return Err(
                AttributeCountMismatch::new(self.connectivity.rows(), values.rows()).into(),
            );
        }

        self.cell_values = values;
        Ok(self)
    }
}
