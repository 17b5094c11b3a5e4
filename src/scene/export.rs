use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::scene::cube::{CubeRecord, describe_cube, walk_cubes};
use crate::scene::model::Scene;
use crate::scene::writer::{write_camera, write_cube, write_header};
use crate::scene::{FormatVersion, Result, SceneError};

/// One cube excluded from the export, with its diagnostic.
#[derive(Debug, Clone)]
pub struct SkippedCube {
	/// Object name.
	pub name: String,
	/// Human-readable reason, from the underlying error.
	pub reason: String,
}

/// Outcome of one export invocation.
#[derive(Debug, Clone)]
pub struct ExportReport {
	/// Number of cube records written.
	pub cube_count: usize,
	/// Largest sampled frame index across all cubes, 0 when unanimated.
	pub max_frame: i32,
	/// Cubes skipped over malformed geometry; the export still completed.
	pub skipped: Vec<SkippedCube>,
}

/// Run the full pipeline against a writer: walk, describe, sample, serialize.
///
/// Malformed cubes become [`SkippedCube`] diagnostics and the export
/// continues; only IO and serialization failures abort.
pub fn export_scene(scene: &Scene, version: FormatVersion, out: &mut impl std::io::Write) -> Result<ExportReport> {
	let (records, skipped) = collect_cubes(scene)?;

	let max_frame = records
		.iter()
		.flat_map(|record| record.keyframes.iter())
		.map(|keyframe| keyframe.frame)
		.max()
		.unwrap_or(0);

	write_header(out, version, max_frame)?;
	write_camera(out, version, scene.camera.as_ref())?;
	for record in &records {
		write_cube(out, version, record)?;
	}

	Ok(ExportReport {
		cube_count: records.len(),
		max_frame,
		skipped,
	})
}

/// Export to a file, writing to `<path>.tmp` and renaming onto the target so
/// a failed export never leaves a partial file behind.
pub fn export_scene_to_path(scene: &Scene, version: FormatVersion, path: impl AsRef<Path>) -> Result<ExportReport> {
	let path = path.as_ref();
	let mut tmp = path.as_os_str().to_owned();
	tmp.push(".tmp");
	let tmp = PathBuf::from(tmp);

	let result = write_file(scene, version, &tmp).and_then(|report| {
		fs::rename(&tmp, path)?;
		Ok(report)
	});

	if result.is_err() {
		let _ = fs::remove_file(&tmp);
	}
	result
}

fn write_file(scene: &Scene, version: FormatVersion, tmp: &Path) -> Result<ExportReport> {
	let file = fs::File::create(tmp)?;
	let mut out = std::io::BufWriter::new(file);
	let report = export_scene(scene, version, &mut out)?;
	out.flush()?;
	Ok(report)
}

fn collect_cubes(scene: &Scene) -> Result<(Vec<CubeRecord>, Vec<SkippedCube>)> {
	let mut records = Vec::new();
	let mut skipped = Vec::new();

	for (object, mesh) in walk_cubes(scene) {
		match describe_cube(object, mesh) {
			Ok(record) => records.push(record),
			Err(err @ (SceneError::MalformedFace { .. } | SceneError::DuplicateFace { .. })) => skipped.push(SkippedCube {
				name: object.name.clone(),
				reason: err.to_string(),
			}),
			Err(err) => return Err(err),
		}
	}

	Ok((records, skipped))
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use crate::scene::cube::tests::cube_object;
	use crate::scene::model::{Camera, CurveTarget, FCurve, Key, Scene};
	use crate::scene::{FormatVersion, export_scene};

	fn render(scene: &Scene, version: FormatVersion) -> (String, crate::scene::ExportReport) {
		let mut out = Vec::new();
		let report = export_scene(scene, version, &mut out).expect("export succeeds");
		(String::from_utf8(out).expect("utf8 output"), report)
	}

	#[test]
	fn default_cube_v3_output_is_exactly_two_lines() {
		let scene = Scene {
			objects: vec![cube_object("Cube")],
			camera: None,
		};

		let (text, report) = render(&scene, FormatVersion::V3);
		assert_eq!(report.cube_count, 1);
		assert_eq!(report.max_frame, 0);
		assert!(report.skipped.is_empty());

		let lines: Vec<_> = text.lines().collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], "# {\"origin\": \"blender\", \"version\": 3, \"maxFrame\": 0}");

		let json: Value = serde_json::from_str(lines[1]).expect("valid json line");
		assert_eq!(json["name"], "Cube");
		assert_eq!(json["location"], serde_json::json!([0.0, 0.0, 0.0]));
		assert_eq!(json["scale"], serde_json::json!([1.0, 1.0, 1.0]));
		assert_eq!(json["keyframes"], serde_json::json!([]));
		let colors = json["face_colors"].as_array().expect("six colors");
		assert_eq!(colors.len(), 6);
		assert!(colors.iter().all(|color| color == "#ffffffff"));
	}

	#[test]
	fn v3_round_trips_location_scale_and_colors() {
		let mut object = cube_object("Cube");
		object.transform.location = [1.0, 2.0, 3.0];

		let scene = Scene {
			objects: vec![object],
			camera: None,
		};

		let (text, _) = render(&scene, FormatVersion::V3);
		let line = text.lines().nth(1).expect("box line");
		let json: Value = serde_json::from_str(line).expect("valid json line");

		assert_eq!(json["location"], serde_json::json!([1.0, 2.0, 3.0]));
		assert_eq!(json["scale"], serde_json::json!([1.0, 1.0, 1.0]));
		assert_eq!(json["rotation"], serde_json::json!([0.0, 0.0, 0.0, 1.0]));
		assert_eq!(json["face_colors"][3], "#ffffffff");
	}

	#[test]
	fn v3_camera_line_sits_between_header_and_boxes() {
		let scene = Scene {
			objects: vec![cube_object("Cube")],
			camera: Some(Camera {
				location: [10.0, 0.0, 0.0],
				rotation_euler: [0.0, 1.5, 0.0],
			}),
		};

		let (text, _) = render(&scene, FormatVersion::V3);
		let lines: Vec<_> = text.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines[0].starts_with("# "));

		let camera: Value = serde_json::from_str(lines[1]).expect("camera line parses");
		assert_eq!(camera["type"], "camera");
		assert_eq!(camera["location"], serde_json::json!([10.0, 0.0, 0.0]));
		assert_eq!(camera["rotation"], serde_json::json!([0.0, 1.5, 0.0]));

		let cube: Value = serde_json::from_str(lines[2]).expect("box line parses");
		assert_eq!(cube["type"], "box");
	}

	#[test]
	fn malformed_cube_is_skipped_with_a_diagnostic() {
		let mut bad = cube_object("Sheared");
		bad.mesh.as_mut().unwrap().faces[0].normal = [0.6, 0.6, 0.0];

		let scene = Scene {
			objects: vec![bad, cube_object("Good")],
			camera: None,
		};

		let (text, report) = render(&scene, FormatVersion::V3);
		assert_eq!(report.cube_count, 1);
		assert_eq!(report.skipped.len(), 1);
		assert_eq!(report.skipped[0].name, "Sheared");
		assert!(report.skipped[0].reason.contains("not axis-aligned"));
		assert!(text.contains("\"Good\""));
		assert!(!text.contains("Sheared"));
	}

	#[test]
	fn max_frame_covers_all_animated_cubes() {
		let mut mover = cube_object("Mover");
		mover.curves = vec![FCurve {
			target: CurveTarget::Location,
			index: 0,
			keys: vec![Key { frame: 1.0, value: 0.0 }, Key { frame: 24.0, value: 5.0 }],
		}];

		let scene = Scene {
			objects: vec![cube_object("Still"), mover],
			camera: None,
		};

		let (text, report) = render(&scene, FormatVersion::V3);
		assert_eq!(report.max_frame, 24);
		assert!(text.starts_with("# {\"origin\": \"blender\", \"version\": 3, \"maxFrame\": 24}\n"));
	}
}
