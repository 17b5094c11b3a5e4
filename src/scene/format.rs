use crate::scene::{Result, SceneError};

/// Output format revision, declared in the file header (v2 onward).
///
/// Each version owns its coordinate remapping into the consuming renderer's
/// frame; the remap tables live here so the walker, describer, resolver, and
/// sampler stay version-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
	/// Plain text with per-record comment lines, no header. Components are
	/// emitted in `(y, z, x)` order, cube rotation as Euler degrees.
	V1,
	/// Headered text, `box` lines with Euler-degree rotation. Converts the
	/// host's Z-up frame to the renderer's Y-up frame: `(x, z, -y)`.
	V2,
	/// As v2 but cube rotation is a raw axis-angle quadruple
	/// `rotA rotX rotY rotZ`, angle in radians.
	V2_1,
	/// JSON Lines with embedded keyframes; no coordinate remap.
	V3,
}

impl FormatVersion {
	/// Parse a CLI flag value (`v1`, `v2`, `v2.1`, `v3`).
	pub fn parse(value: &str) -> Result<Self> {
		match value {
			"v1" => Ok(FormatVersion::V1),
			"v2" => Ok(FormatVersion::V2),
			"v2.1" => Ok(FormatVersion::V2_1),
			"v3" => Ok(FormatVersion::V3),
			_ => Err(SceneError::UnknownFormat { value: value.to_owned() }),
		}
	}

	/// Flag-style label for status output.
	pub fn as_str(self) -> &'static str {
		match self {
			FormatVersion::V1 => "v1",
			FormatVersion::V2 => "v2",
			FormatVersion::V2_1 => "v2.1",
			FormatVersion::V3 => "v3",
		}
	}

	/// Header line for this version, without a trailing newline. v1 predates
	/// header metadata and has none.
	///
	/// The v2 header declares `"version": 1`; the consuming renderer matches
	/// on that literal, so the inherited numbering is preserved as-is.
	pub fn header_line(self, max_frame: i32) -> Option<String> {
		match self {
			FormatVersion::V1 => None,
			FormatVersion::V2 => Some("# {\"origin\": \"blender\", \"version\": 1}".to_owned()),
			FormatVersion::V2_1 => Some("# {\"origin\": \"blender\", \"version\": 2}".to_owned()),
			FormatVersion::V3 => Some(format!("# {{\"origin\": \"blender\", \"version\": 3, \"maxFrame\": {max_frame}}}")),
		}
	}

	/// Remap a location-like vector into this version's output frame.
	pub fn remap_point(self, v: [f32; 3]) -> [f32; 3] {
		match self {
			FormatVersion::V1 => [v[1], v[2], v[0]],
			FormatVersion::V2 | FormatVersion::V2_1 => [v[0], v[2], -v[1]],
			FormatVersion::V3 => v,
		}
	}

	/// Remap a scale vector. Scale is a magnitude per axis, so the Y-up
	/// conversion reorders without negating.
	pub fn remap_scale(self, v: [f32; 3]) -> [f32; 3] {
		match self {
			FormatVersion::V1 => [v[1], v[2], v[0]],
			FormatVersion::V2 | FormatVersion::V2_1 => [v[0], v[2], v[1]],
			FormatVersion::V3 => v,
		}
	}

	/// Remap per-axis rotation components (Euler angles or an axis-angle
	/// axis) into this version's output frame.
	pub fn remap_axes(self, v: [f32; 3]) -> [f32; 3] {
		match self {
			FormatVersion::V1 => [v[1], v[2], v[0]],
			FormatVersion::V2 | FormatVersion::V2_1 => [v[0], v[2], -v[1]],
			FormatVersion::V3 => v,
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::scene::{FormatVersion, SceneError};

	#[test]
	fn parse_accepts_the_four_flag_values() {
		assert_eq!(FormatVersion::parse("v1").unwrap(), FormatVersion::V1);
		assert_eq!(FormatVersion::parse("v2").unwrap(), FormatVersion::V2);
		assert_eq!(FormatVersion::parse("v2.1").unwrap(), FormatVersion::V2_1);
		assert_eq!(FormatVersion::parse("v3").unwrap(), FormatVersion::V3);
	}

	#[test]
	fn parse_rejects_unknown_values() {
		match FormatVersion::parse("v4") {
			Err(SceneError::UnknownFormat { value }) => assert_eq!(value, "v4"),
			other => panic!("expected UnknownFormat, got {other:?}"),
		}
	}

	#[test]
	fn v2_header_keeps_the_inherited_version_number() {
		assert_eq!(FormatVersion::V2.header_line(0).unwrap(), "# {\"origin\": \"blender\", \"version\": 1}");
		assert_eq!(FormatVersion::V2_1.header_line(0).unwrap(), "# {\"origin\": \"blender\", \"version\": 2}");
	}

	#[test]
	fn v3_header_carries_the_max_frame() {
		assert_eq!(FormatVersion::V3.header_line(42).unwrap(), "# {\"origin\": \"blender\", \"version\": 3, \"maxFrame\": 42}");
		assert!(FormatVersion::V1.header_line(42).is_none());
	}

	#[test]
	fn v1_reorders_without_negation() {
		assert_eq!(FormatVersion::V1.remap_point([1.0, 2.0, 3.0]), [2.0, 3.0, 1.0]);
		assert_eq!(FormatVersion::V1.remap_scale([1.0, 2.0, 3.0]), [2.0, 3.0, 1.0]);
	}

	#[test]
	fn v2_converts_z_up_to_y_up() {
		assert_eq!(FormatVersion::V2.remap_point([1.0, 2.0, 3.0]), [1.0, 3.0, -2.0]);
		assert_eq!(FormatVersion::V2.remap_scale([1.0, 2.0, 3.0]), [1.0, 3.0, 2.0]);
		assert_eq!(FormatVersion::V2_1.remap_axes([0.0, 1.0, 0.0]), [0.0, 0.0, -1.0]);
	}

	#[test]
	fn v3_is_identity() {
		assert_eq!(FormatVersion::V3.remap_point([1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
		assert_eq!(FormatVersion::V3.remap_axes([1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
	}
}
