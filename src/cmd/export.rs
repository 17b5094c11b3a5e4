use std::path::PathBuf;

use cubecast::scene::{FormatVersion, Scene, export_scene_to_path};

/// Export a scene snapshot to a Cascade scene-description file.
pub fn run(scene_path: PathBuf, out: PathBuf, format: &str) -> cubecast::scene::Result<()> {
	let version = FormatVersion::parse(format)?;
	let scene = Scene::load(&scene_path)?;
	let report = export_scene_to_path(&scene, version, &out)?;

	for skip in &report.skipped {
		eprintln!("skipped {}: {}", skip.name, skip.reason);
	}

	println!("scene: {}", scene_path.display());
	println!("out: {}", out.display());
	println!("format: {}", version.as_str());
	println!("cubes: {}", report.cube_count);
	println!("skipped: {}", report.skipped.len());
	println!("max_frame: {}", report.max_frame);

	Ok(())
}
