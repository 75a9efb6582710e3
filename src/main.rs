use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use vox2schematic::voxel_grid::grid::Dimensions;
use vox2schematic::voxel_grid::schematic_output::SchematicOptions;
use vox2schematic::voxel_grid::source::SourceFormat;

/// Converts various voxel formats to minecraft .schematic files
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
	/// File to convert
	filename: PathBuf,

	/// Filename of the resulting file, defaults to <filename>.schematic
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Input file format; redundant if the file has a valid extension
	#[arg(short, long, value_enum)]
	format: Option<SourceFormat>,

	/// Dimensions as "width length height" (you can copy-paste it from MagicaVoxel)
	#[arg(short, long, num_args = 3, value_names = ["WIDTH", "LENGTH", "HEIGHT"])]
	dimensions: Option<Vec<usize>>,

	/// Block id to use when converting, defaults to 1 (stone)
	#[arg(short, long, default_value_t = 1)]
	blockid: u8,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let format = match cli.format {
		Some(format) => format,
		None => deduce_format(&cli.filename),
	};

	if format == SourceFormat::Png && cli.dimensions.is_none() {
		Cli::command()
			.error(
				ErrorKind::MissingRequiredArgument,
				"PNG format requires dimensions to be specified with -d",
			)
			.exit();
	}

	// clap enforces exactly three values for -d
	let dims = cli.dimensions.as_ref().map(|d| Dimensions {
		width: d[0],
		length: d[1],
		height: d[2],
	});
	let output = cli
		.output
		.clone()
		.unwrap_or_else(|| default_output(&cli.filename));

	let grid = format
		.decode(&cli.filename, dims, cli.blockid)
		.with_context(|| format!("failed to convert {}", cli.filename.display()))?;

	println!(
		"Grid: {} x {} x {} ({} cells, {} filled)",
		grid.width,
		grid.length,
		grid.height,
		grid.total_cells,
		grid.count_filled()
	);

	grid.write_schematic_file(&output, &SchematicOptions::default())
		.with_context(|| format!("failed to write {}", output.display()))?;

	println!("Schematic saved: {}", output.display());
	Ok(())
}

/// Deduce the input format from the file extension, exiting with a
/// usage error when that is not possible.
fn deduce_format(path: &Path) -> SourceFormat {
	match SourceFormat::from_extension(path) {
		Some(format) => format,
		None => {
			let message = if path.extension().is_none() {
				"Could not deduce format from filename because file extension is missing. Specify format explicitly with -f"
			} else {
				"Wrong input file extension. Change your input file extension or specify format explicitly with -f"
			};
			Cli::command().error(ErrorKind::ValueValidation, message).exit()
		}
	}
}

/// Default output path: the input's file stem plus `.schematic`, in the
/// current directory.
fn default_output(input: &Path) -> PathBuf {
	let stem = input.file_stem().unwrap_or_else(|| OsStr::new("output"));
	let mut name = stem.to_os_string();
	name.push(".schematic");
	PathBuf::from(name)
}
