use dot_vox::{DotVoxData, Model};
use indicatif::{ProgressBar, ProgressStyle};

use crate::voxel_grid::error::ConvertError;
use crate::voxel_grid::grid::{BlockGrid, Dimensions};

/// Build a grid from a parsed .vox container.
/// Only the first model is converted; additional models are ignored.
pub fn grid_from_vox(data: &DotVoxData, block_id: u8) -> Result<BlockGrid, ConvertError> {
	let model = data.models.first().ok_or(ConvertError::EmptyContainer)?;
	grid_from_model(model, block_id)
}

/// Build a dense grid from one .vox model.
/// Container axes differ from schematic axes: the size triple reads as
/// (length, width, height) and each voxel as (z, x, y). The record's
/// palette index is discarded; occupancy alone drives placement.
pub fn grid_from_model(model: &Model, block_id: u8) -> Result<BlockGrid, ConvertError> {
	let dims = Dimensions {
		width: model.size.y as usize,
		length: model.size.x as usize,
		height: model.size.z as usize,
	};
	let mut grid = BlockGrid::new(dims)?;

	let pb = ProgressBar::new(model.voxels.len() as u64);
	pb.set_style(
		ProgressStyle::default_bar()
		.template("Placing voxels: [{bar:40.cyan/blue}] {pos}/{len}")
		.unwrap()
		.progress_chars("#>-"),
	);

	for voxel in &model.voxels {
		let z = voxel.x as usize;
		let x = voxel.y as usize;
		let y = voxel.z as usize;
		grid.set_block(x, y, z, block_id)?;
		pb.inc(1);
	}
	pb.finish_and_clear();

	Ok(grid)
}

#[cfg(test)]
mod tests {
	use super::*;
	use dot_vox::{Model, Size, Voxel};

	fn model(size: (u32, u32, u32), voxels: Vec<Voxel>) -> Model {
		Model {
			size: Size { x: size.0, y: size.1, z: size.2 },
			voxels,
		}
	}

	#[test]
	fn size_triple_is_remapped_to_schematic_axes() {
		let grid = grid_from_model(&model((2, 3, 4), Vec::new()), 1).unwrap();
		assert_eq!(grid.width, 3);
		assert_eq!(grid.length, 2);
		assert_eq!(grid.height, 4);
		assert_eq!(grid.blocks.len(), 24);
		assert_eq!(grid.data.len(), 24);
	}

	#[test]
	fn single_record_lands_at_the_canonical_offset() {
		let voxels = vec![Voxel { x: 0, y: 1, z: 0, i: 7 }];
		let grid = grid_from_model(&model((2, 2, 1), voxels), 9).unwrap();
		// Container (z=0, x=1, y=0) maps to linear (0*2 + 0)*2 + 1.
		assert_eq!(grid.blocks[1], 9);
		assert_eq!(grid.count_filled(), 1);
	}

	#[test]
	fn palette_index_is_discarded_in_favor_of_the_block_id() {
		let voxels = vec![
			Voxel { x: 0, y: 0, z: 0, i: 42 },
			Voxel { x: 1, y: 0, z: 0, i: 200 },
		];
		let grid = grid_from_model(&model((2, 1, 1), voxels), 3).unwrap();
		assert_eq!(grid.blocks, vec![3, 3]);
	}

	#[test]
	fn record_outside_the_declared_box_is_fatal() {
		let voxels = vec![Voxel { x: 0, y: 5, z: 0, i: 1 }];
		let err = grid_from_model(&model((2, 2, 1), voxels), 1).unwrap_err();
		assert!(matches!(err, ConvertError::VoxelOutOfBounds { x: 5, .. }));
	}

	#[test]
	fn container_without_models_is_a_decode_error() {
		let data = DotVoxData {
			version: 150,
			models: Vec::new(),
			palette: Vec::new(),
			materials: Vec::new(),
			scenes: Vec::new(),
			layers: Vec::new(),
			index_map: Vec::new(),
		};
		let err = grid_from_vox(&data, 1).unwrap_err();
		assert!(matches!(err, ConvertError::EmptyContainer));
	}
}
