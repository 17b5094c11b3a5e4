use std::path::PathBuf;

use cubecast::scene::{Scene, extract_keyframes};

/// Print the keyframe-extraction map for every animated object as
/// pretty-printed JSON on stdout.
pub fn run(scene_path: PathBuf) -> cubecast::scene::Result<()> {
	let scene = Scene::load(&scene_path)?;
	let map = extract_keyframes(&scene);
	println!("{}", serde_json::to_string_pretty(&map)?);
	Ok(())
}
