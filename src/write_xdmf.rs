use crate::prelude::*;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

use crate::data::GridData;
use crate::Error;

/// name of the single uniform grid in the output document
pub const GRID_NAME: &str = "mesh";

/// name of the per-cell scalar attribute
pub const CELL_ATTRIBUTE_NAME: &str = "f";

// a DataItem element always sits at Xdmf/Domain/Grid/<section>/DataItem, so
// its closing tag is indented by four 2-space levels
const DATA_ITEM_INDENT: &str = "        ";

/// how the data blocks of the document are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// payloads embedded in the document as whitespace-delimited decimal text
    Ascii,
    /// payloads referenced from an external heavy-data container
    ///
    /// Only the reference nodes are emitted; writing the container itself is
    /// an extension seam this crate does not implement.
    Hdf5,
}

impl Encoding {
    fn format_attribute(&self) -> &'static str {
        match self {
            Encoding::Ascii => "XML",
            Encoding::Hdf5 => "HDF",
        }
    }
}

/// Export a mesh as one XDMF document written to `writer`.
///
/// Runs the whole pipeline (classification, node numbering, connectivity
/// translation, placeholder cell values) and serializes the result. Any
/// failure aborts before document bytes are produced.
pub fn write_xdmf<W, M>(writer: W, mesh: &M, encoding: Encoding) -> Result<(), Error>
where
    W: Write,
    M: NodeSet + ElementSet,
{
    write_xdmf_logged(writer, mesh, encoding, &mut Quiet)
}

/// like [`write_xdmf`], narrating progress through the given log
pub fn write_xdmf_logged<W, M, L>(
    writer: W,
    mesh: &M,
    encoding: Encoding,
    log: &mut L,
) -> Result<(), Error>
where
    W: Write,
    M: NodeSet + ElementSet,
    L: ExportLog,
{
    let grid = GridData::from_mesh_logged(mesh, log)?;
    write_document(writer, &grid, encoding)
}

/// Serialize an assembled [`GridData`] as a complete XDMF document.
///
/// The two-line preamble (XML declaration plus document type declaration) and
/// the payload layout are a bit-exact contract with downstream readers; the
/// declared counts on every node are taken from the arrays themselves.
pub fn write_document<W: Write>(
    writer: W,
    grid: &GridData,
    encoding: Encoding,
) -> Result<(), Error> {
    if grid.cell_values.rows() != grid.connectivity.rows() {
        let mismatch =
            AttributeCountMismatch::new(grid.connectivity.rows(), grid.cell_values.rows());
        return Err(ExportError::from(mismatch).into());
    }

    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    xml.write_event(Event::DocType(BytesText::from_escaped(
        r#"Xdmf SYSTEM "Xdmf.dtd" []"#,
    )))?;

    let mut root = BytesStart::new("Xdmf");
    root.push_attribute(("version", "3.0"));
    xml.write_event(Event::Start(root))?;

    xml.write_event(Event::Start(BytesStart::new("Domain")))?;

    let mut grid_element = BytesStart::new("Grid");
    grid_element.push_attribute(("Name", GRID_NAME));
    grid_element.push_attribute(("GridType", "Uniform"));
    xml.write_event(Event::Start(grid_element))?;

    let mut topology = BytesStart::new("Topology");
    topology.push_attribute(("TopologyType", grid.cell_type.name));
    topology.push_attribute((
        "NumberOfElements",
        grid.connectivity.rows().to_string().as_str(),
    ));
    topology.push_attribute((
        "NodesPerElement",
        grid.cell_type.nodes_per_element.to_string().as_str(),
    ));
    xml.write_event(Event::Start(topology))?;
    write_data_item(&mut xml, &grid.connectivity, encoding)?;
    xml.write_event(Event::End(BytesEnd::new("Topology")))?;

    let mut geometry = BytesStart::new("Geometry");
    geometry.push_attribute(("GeometryType", grid.axes.geometry_type()));
    xml.write_event(Event::Start(geometry))?;
    write_data_item(&mut xml, &grid.coordinates, encoding)?;
    xml.write_event(Event::End(BytesEnd::new("Geometry")))?;

    let mut attribute = BytesStart::new("Attribute");
    attribute.push_attribute(("AttributeType", "Scalar"));
    attribute.push_attribute(("Center", "Cell"));
    attribute.push_attribute(("Name", CELL_ATTRIBUTE_NAME));
    xml.write_event(Event::Start(attribute))?;
    write_data_item(&mut xml, &grid.cell_values, encoding)?;
    xml.write_event(Event::End(BytesEnd::new("Attribute")))?;

    xml.write_event(Event::End(BytesEnd::new("Grid")))?;
    xml.write_event(Event::End(BytesEnd::new("Domain")))?;
    xml.write_event(Event::End(BytesEnd::new("Xdmf")))?;

    let mut inner = xml.into_inner();
    inner.write_all(b"\n")?;

    Ok(())
}

/// write one `DataItem` element with its payload or container reference
fn write_data_item<W, A>(xml: &mut Writer<W>, array: &A, encoding: Encoding) -> Result<(), Error>
where
    W: Write,
    A: DataItemArray,
{
    let mut item = BytesStart::new("DataItem");
    if let Some(number_type) = array.number_type() {
        item.push_attribute(("NumberType", number_type));
    }
    let dimensions = format!("{} {}", array.rows(), array.cols());
    item.push_attribute(("Dimensions", dimensions.as_str()));
    item.push_attribute(("Format", encoding.format_attribute()));
    xml.write_event(Event::Start(item))?;

    let payload = match encoding {
        Encoding::Ascii => array.ascii_text(),
        Encoding::Hdf5 => container_reference(array),
    };

    // payload lines start at column 0, the closing tag keeps its indent
    let text = format!("\n{}\n{}", payload, DATA_ITEM_INDENT);
    xml.write_event(Event::Text(BytesText::new(&text)))?;

    xml.write_event(Event::End(BytesEnd::new("DataItem")))?;

    Ok(())
}

// the reference placeholder for the external container: conventional
// `<file>:<group path>` form, one group per section. The container file is
// never written here.
fn container_reference<A: DataItemArray>(array: &A) -> String {
    format!("{GRID_NAME}.h5:/{GRID_NAME}/{}", array.container_group())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Connectivity;
    use ndarray::array;

    #[test]
    fn format_attribute_values() {
        assert_eq!(Encoding::Ascii.format_attribute(), "XML");
        assert_eq!(Encoding::Hdf5.format_attribute(), "HDF");
    }

    #[test]
    fn container_references_name_their_group() {
        let connectivity = Connectivity::new(array![[0u64, 1]]);
        assert_eq!(container_reference(&connectivity), "mesh.h5:/mesh/topology");
    }
}
