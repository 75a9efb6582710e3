pub mod voxel_grid {
	pub mod error;
	pub mod grid;
	pub mod image_slice;
	pub mod nbt;
	pub mod schematic_output;
	pub mod source;
	pub mod vox_model;
}
