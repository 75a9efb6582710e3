use thiserror::Error;

/// Errors raised while turning a voxel source into a schematic file.
#[derive(Error, Debug)]
pub enum ConvertError {
	/// A flat image carries no depth, so extents must come from the caller.
	#[error("PNG input requires dimensions (pass --dimensions WIDTH LENGTH HEIGHT)")]
	MissingDimensions,

	#[error("input supplies {supplied} cells but dimensions {width}x{length}x{height} describe {cells}")]
	DimensionMismatch {
		supplied: usize,
		width: usize,
		length: usize,
		height: usize,
		cells: usize,
	},

	#[error("{axis} must be positive")]
	ZeroExtent { axis: &'static str },

	/// The schematic header stores extents as signed 16-bit fields.
	#[error("{axis} extent {value} exceeds the schematic limit of 32767")]
	ExtentTooLarge { axis: &'static str, value: usize },

	#[error("voxel ({x}, {y}, {z}) lies outside the declared size {width}x{length}x{height}")]
	VoxelOutOfBounds {
		x: usize,
		y: usize,
		z: usize,
		width: usize,
		length: usize,
		height: usize,
	},

	#[error("vox container holds no models")]
	EmptyContainer,

	#[error("failed to decode image: {0}")]
	Image(#[from] image::ImageError),

	#[error("failed to parse vox container: {0}")]
	Vox(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
