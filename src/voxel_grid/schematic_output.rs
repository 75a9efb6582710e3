use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::NamedTempFile;

use crate::voxel_grid::error::ConvertError;
use crate::voxel_grid::grid::BlockGrid;
use crate::voxel_grid::nbt::{self, Tag};

/// Fixed schematic metadata, passed explicitly instead of living in
/// module state.
#[derive(Debug, Clone)]
pub struct SchematicOptions {
	pub materials: String,  // Value of the Materials tag
}

impl Default for SchematicOptions {
	fn default() -> Self {
		Self { materials: "Alpha".to_string() }
	}
}

impl BlockGrid {
	/// Build the schematic tag tree. Field order is fixed by the format;
	/// consumers depend on it byte for byte.
	pub fn to_schematic_tag(&self, opts: &SchematicOptions) -> Tag {
		Tag::Compound(vec![
			("Width".to_string(), Tag::Short(self.width as i16)),
			("Length".to_string(), Tag::Short(self.length as i16)),
			("Height".to_string(), Tag::Short(self.height as i16)),
			("Materials".to_string(), Tag::String(opts.materials.clone())),
			("Blocks".to_string(), Tag::ByteArray(self.blocks.clone())),
			("Data".to_string(), Tag::ByteArray(self.data.clone())),
			("Entities".to_string(), Tag::List {
				element_id: nbt::TAG_COMPOUND,
				items: Vec::new(),
			}),
			("TileEntities".to_string(), Tag::List {
				element_id: nbt::TAG_COMPOUND,
				items: Vec::new(),
			}),
		])
	}

	/// Serialize the grid to gzipped NBT bytes
	pub fn to_schematic_bytes(&self, opts: &SchematicOptions) -> Result<Vec<u8>, ConvertError> {
		let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
		nbt::write_root(&mut encoder, "Schematic", &self.to_schematic_tag(opts))?;
		Ok(encoder.finish()?)
	}

	/// Write the schematic file, replacing any existing file at `path`.
	/// Bytes land in a temp file in the destination directory first, so a
	/// failed run never leaves a truncated artifact behind.
	pub fn write_schematic_file(
		&self,
		path: &Path,
		opts: &SchematicOptions,
	) -> Result<(), ConvertError> {
		let bytes = self.to_schematic_bytes(opts)?;
		let dir = match path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};
		let mut tmp = NamedTempFile::new_in(dir)?;
		tmp.write_all(&bytes)?;
		tmp.flush()?;
		tmp.persist(path).map_err(|e| ConvertError::Io(e.error))?;
		Ok(())
	}
}
