#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

#[test]
fn default_cube_exports_exactly_two_lines() {
	let out = out_path("v3_single.txt");
	let output = run(&["export", &fixture("single_cube.json"), "--out", &out, "--format", "v3"]);
	assert!(output.status.success(), "export should succeed");

	let text = std::fs::read_to_string(&out).expect("output file exists");
	let lines: Vec<_> = text.lines().collect();
	assert_eq!(lines.len(), 2);
	assert_eq!(lines[0], "# {\"origin\": \"blender\", \"version\": 3, \"maxFrame\": 0}");

	let json: Value = serde_json::from_str(lines[1]).expect("box line is valid json");
	assert_eq!(json["type"], "box");
	assert_eq!(json["name"], "Cube");
	assert_eq!(json["location"], serde_json::json!([0.0, 0.0, 0.0]));
	assert_eq!(json["scale"], serde_json::json!([1.0, 1.0, 1.0]));
	assert_eq!(json["keyframes"], serde_json::json!([]));
	let colors = json["face_colors"].as_array().expect("six colors");
	assert!(colors.iter().all(|color| color == "#ffffffff"));

	let _ = std::fs::remove_file(&out);
}

#[test]
fn animated_scene_declares_its_max_frame_and_embeds_keyframes() {
	let out = out_path("v3_animated.txt");
	let output = run(&["export", &fixture("animated_scene.json"), "--out", &out]);
	assert!(output.status.success(), "export should succeed");

	let text = std::fs::read_to_string(&out).expect("output file exists");
	let lines: Vec<_> = text.lines().collect();
	assert_eq!(lines.len(), 3);
	assert_eq!(lines[0], "# {\"origin\": \"blender\", \"version\": 3, \"maxFrame\": 10}");

	let anchor: Value = serde_json::from_str(lines[1]).expect("anchor line parses");
	assert_eq!(anchor["name"], "Anchor");
	assert_eq!(anchor["keyframes"], serde_json::json!([]));

	let mover: Value = serde_json::from_str(lines[2]).expect("mover line parses");
	assert_eq!(mover["name"], "Mover");
	let keyframes = mover["keyframes"].as_array().expect("keyframe array");
	let frames: Vec<_> = keyframes.iter().map(|kf| kf["frame"].as_i64().unwrap()).collect();
	assert_eq!(frames, vec![1, 5, 8, 10]);
	assert_eq!(keyframes[2]["loc"], serde_json::json!([7.0, 0.0, 0.0]));
	assert_eq!(keyframes[2]["scale"], serde_json::json!([1.0, 3.0, 1.0]));

	let _ = std::fs::remove_file(&out);
}

#[test]
fn unknown_format_fails_without_leaving_output() {
	let out = out_path("v3_badformat.txt");
	let output = run(&["export", &fixture("single_cube.json"), "--out", &out, "--format", "v9"]);
	assert!(!output.status.success(), "unknown format should fail");

	let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
	assert!(stderr.contains("unknown format version"), "got: {stderr}");
	assert!(!Path::new(&out).exists(), "no output file should be written");
}

fn run(args: &[&str]) -> std::process::Output {
	Command::new(env!("CARGO_BIN_EXE_cubecast")).args(args).output().expect("command executes")
}

fn fixture(name: &str) -> String {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name).display().to_string()
}

fn out_path(name: &str) -> String {
	PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name).display().to_string()
}
