use std::path::PathBuf;

use clap::Parser;

use contour_icon::export;
use contour_icon::fractal::{flow_height, FlowParams};
use contour_icon::heightmap::HeightMap;
use contour_icon::render::{render_contours, IconParams};
use contour_icon::seeds::NoiseSeeds;

#[derive(Parser, Debug)]
#[command(name = "contour_icon")]
#[command(about = "Generate contour flow pattern icons for the PWA")]
struct Args {
    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory to write the icon files into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    let args = Args::parse();

    let master = args.seed.unwrap_or_else(|| rand::random());
    let seeds = NoiseSeeds::from_master(master);
    println!("Generating contour icon with seed: {}", master);

    let flow = FlowParams::default();
    let icon = IconParams::default();

    println!(
        "Sampling height field ({}x{} cells at 1/{} resolution)...",
        icon.size / icon.resolution,
        icon.size / icon.resolution,
        icon.resolution
    );
    let mut height_map = HeightMap::sample(icon.size, icon.resolution, |x, y| {
        flow_height(x, y, &flow, &seeds)
    });
    height_map.normalize();

    println!(
        "Rendering {}x{} canvas with {} contour bands...",
        icon.size, icon.size, icon.contour_count
    );
    let img = render_contours(&height_map, &icon);

    if let Err(e) = export::export_icons(&img, &args.out_dir) {
        eprintln!("Failed to write icon files: {}", e);
        std::process::exit(1);
    }

    println!("Generated: {}", export::icon_file_names().join(", "));
}
