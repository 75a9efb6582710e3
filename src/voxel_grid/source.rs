use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::voxel_grid::error::ConvertError;
use crate::voxel_grid::grid::{BlockGrid, Dimensions};
use crate::voxel_grid::{image_slice, vox_model};

/// Supported input kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceFormat {
	/// Single 2D slice with per-pixel alpha (requires explicit dimensions)
	Png,
	/// MagicaVoxel container
	Vox,
}

impl SourceFormat {
	/// Deduce the format from the file extension, case-insensitive.
	pub fn from_extension(path: &Path) -> Option<Self> {
		let ext = path.extension()?.to_str()?;
		match ext.to_ascii_lowercase().as_str() {
			"png" => Some(Self::Png),
			"vox" => Some(Self::Vox),
			_ => None,
		}
	}

	/// Decode `path` into a block grid.
	/// PNG needs caller-supplied dimensions; vox carries its own.
	pub fn decode(
		self,
		path: &Path,
		dims: Option<Dimensions>,
		block_id: u8,
	) -> Result<BlockGrid, ConvertError> {
		match self {
			Self::Png => {
				let dims = dims.ok_or(ConvertError::MissingDimensions)?;
				let img = image::open(path)?.to_rgba8();
				image_slice::grid_from_image(&img, dims, block_id)
			}
			Self::Vox => {
				let bytes = fs::read(path)?;
				let data = dot_vox::load_bytes(&bytes)
					.map_err(|e| ConvertError::Vox(e.to_string()))?;
				vox_model::grid_from_vox(&data, block_id)
			}
		}
	}
}
