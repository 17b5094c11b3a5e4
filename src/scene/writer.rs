use std::io::Write;

use serde::Serialize;

use crate::scene::cube::CubeRecord;
use crate::scene::model::Camera;
use crate::scene::sample::Keyframe;
use crate::scene::{FormatVersion, Result};

const V1_CAMERA_COMMENT: &str = "# type: camera posX posY posZ rotX rotY rotZ";
const V1_BOX_COMMENT: &str = "# type: box posX posY posZ sizeX sizeY sizeZ rotX rotY rotZ colorFrontFace colorLeftFace colorBackFace colorRightFace colorUpFace colorDownFace";

/// Write the format header. v1 has none; the other versions emit exactly one
/// `#`-prefixed metadata line.
pub fn write_header(out: &mut impl Write, version: FormatVersion, max_frame: i32) -> Result<()> {
	if let Some(line) = version.header_line(max_frame) {
		writeln!(out, "{line}")?;
	}
	Ok(())
}

/// Write the optional camera record. A scene without a camera writes nothing
/// (v1 keeps its field-order comment, matching the original layout).
pub fn write_camera(out: &mut impl Write, version: FormatVersion, camera: Option<&Camera>) -> Result<()> {
	match version {
		FormatVersion::V1 => {
			writeln!(out, "{V1_CAMERA_COMMENT}")?;
			if let Some(camera) = camera {
				let loc = version.remap_point(camera.location);
				let rot = version.remap_axes(camera.rotation_euler);
				writeln!(out, "camera {}\n", join_floats(&[loc[0], loc[1], loc[2], rot[0], rot[1], rot[2]]))?;
			}
		}
		FormatVersion::V2 | FormatVersion::V2_1 => {
			if let Some(camera) = camera {
				let loc = version.remap_point(camera.location);
				let rot = version.remap_axes(camera.rotation_euler);
				writeln!(out, "camera {}", join_floats(&[loc[0], loc[1], loc[2], rot[0], rot[1], rot[2]]))?;
			}
		}
		FormatVersion::V3 => {
			if let Some(camera) = camera {
				let line = CameraLine {
					kind: "camera",
					location: camera.location,
					rotation: camera.rotation_euler,
				};
				writeln!(out, "{}", serde_json::to_string(&line)?)?;
			}
		}
	}
	Ok(())
}

/// Write one cube record in the version's line layout.
pub fn write_cube(out: &mut impl Write, version: FormatVersion, record: &CubeRecord) -> Result<()> {
	match version {
		FormatVersion::V1 => {
			let loc = version.remap_point(record.location);
			let scale = version.remap_scale(record.scale);
			let euler = version.remap_axes(record.rotation.to_euler_xyz()).map(f32::to_degrees);

			writeln!(out, "{V1_BOX_COMMENT}")?;
			writeln!(
				out,
				"box {} {} {}\n",
				join_floats(&[loc[0], loc[1], loc[2], scale[0], scale[1], scale[2]]),
				join_floats(&euler),
				hex_colors(record)
			)?;
		}
		FormatVersion::V2 => {
			let loc = version.remap_point(record.location);
			let scale = version.remap_scale(record.scale);
			let euler = version.remap_axes(record.rotation.to_euler_xyz()).map(f32::to_degrees);

			writeln!(
				out,
				"box {} {} {}",
				join_floats(&[loc[0], loc[1], loc[2], scale[0], scale[1], scale[2]]),
				join_floats(&euler),
				hex_colors(record)
			)?;
		}
		FormatVersion::V2_1 => {
			let loc = version.remap_point(record.location);
			let scale = version.remap_scale(record.scale);
			let aa = record.rotation.to_axis_angle();
			let axis = version.remap_axes(aa.axis);

			writeln!(
				out,
				"box {} {} {}",
				join_floats(&[loc[0], loc[1], loc[2], scale[0], scale[1], scale[2]]),
				join_floats(&[aa.angle_deg.to_radians(), axis[0], axis[1], axis[2]]),
				hex_colors(record)
			)?;
		}
		FormatVersion::V3 => {
			let line = BoxLine {
				kind: "box",
				name: &record.name,
				location: record.location,
				scale: record.scale,
				rotation: record.rotation.to_axis_angle().to_array(),
				face_colors: record.face_colors.map(|color| color.to_hex()),
				keyframes: &record.keyframes,
			};
			writeln!(out, "{}", serde_json::to_string(&line)?)?;
		}
	}
	Ok(())
}

#[derive(Serialize)]
struct BoxLine<'a> {
	#[serde(rename = "type")]
	kind: &'static str,
	name: &'a str,
	location: [f32; 3],
	scale: [f32; 3],
	rotation: [f32; 4],
	face_colors: [String; 6],
	keyframes: &'a [Keyframe],
}

#[derive(Serialize)]
struct CameraLine {
	#[serde(rename = "type")]
	kind: &'static str,
	location: [f32; 3],
	rotation: [f32; 3],
}

fn hex_colors(record: &CubeRecord) -> String {
	record.face_colors.map(|color| color.to_hex()).join(" ")
}

fn join_floats(values: &[f32]) -> String {
	values.iter().map(|value| fmt_float(*value)).collect::<Vec<_>>().join(" ")
}

fn fmt_float(value: f32) -> String {
	// Sign-flipping remaps turn 0 into -0; keep text output clean.
	let value = if value == 0.0 { 0.0 } else { value };
	value.to_string()
}
