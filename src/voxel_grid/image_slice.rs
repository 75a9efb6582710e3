use image::RgbaImage;
use indicatif::{ProgressBar, ProgressStyle};

use crate::voxel_grid::error::ConvertError;
use crate::voxel_grid::grid::{BlockGrid, Dimensions};

/// Build a grid from a single 2D image slice.
/// A pixel becomes the block id when its alpha is non-zero, empty otherwise.
/// The image carries no depth of its own, so extents come from the caller
/// and must describe exactly as many cells as the image has pixels.
pub fn grid_from_image(
	img: &RgbaImage,
	dims: Dimensions,
	block_id: u8,
) -> Result<BlockGrid, ConvertError> {
	let pixels = (img.width() as usize) * (img.height() as usize);
	if pixels != dims.cells() {
		return Err(ConvertError::DimensionMismatch {
			supplied: pixels,
			width: dims.width,
			length: dims.length,
			height: dims.height,
			cells: dims.cells(),
		});
	}

	let pb = ProgressBar::new(img.height() as u64);
	pb.set_style(
		ProgressStyle::default_bar()
		.template("Scanning rows: [{bar:40.cyan/blue}] {pos}/{len}")
		.unwrap()
		.progress_chars("#>-"),
	);

	let mut blocks = Vec::with_capacity(pixels);
	for row in img.rows() {
		for pixel in row {
			blocks.push(if pixel.0[3] != 0 { block_id } else { 0 });
		}
		pb.inc(1);
	}
	pb.finish_and_clear();

	// The image origin is top-left and pixels arrive row-major; the
	// schematic layout grows bottom-up. Reversing the whole sequence
	// lines the two up for a single-layer slice (height == 1).
	// Multi-layer image input is unsupported.
	blocks.reverse();

	BlockGrid::from_blocks(dims, blocks)
}
