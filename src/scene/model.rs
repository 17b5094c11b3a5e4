use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::scene::Result;

/// Read-only snapshot of a host scene, loaded from a JSON fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
	/// Objects in host iteration order.
	#[serde(default)]
	pub objects: Vec<SceneObject>,
	/// Active camera, when the scene has one.
	#[serde(default)]
	pub camera: Option<Camera>,
}

impl Scene {
	/// Load a scene snapshot from a JSON file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let text = fs::read_to_string(path)?;
		Self::from_json(&text)
	}

	/// Parse a scene snapshot from JSON text.
	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}
}

/// One object in the scene, with topology, transform, materials, and animation.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneObject {
	/// Unique object name.
	pub name: String,
	/// Host object kind.
	#[serde(default)]
	pub kind: ObjectKind,
	/// Mesh data, present for mesh objects.
	#[serde(default)]
	pub mesh: Option<Mesh>,
	/// Object transform at the scene's rest frame.
	#[serde(default)]
	pub transform: Transform,
	/// Material slots, indexed by face material indices.
	#[serde(default)]
	pub materials: Vec<Material>,
	/// Animation curves targeting this object's transform channels.
	#[serde(default)]
	pub curves: Vec<FCurve>,
}

impl SceneObject {
	/// Whether any animation curve targets this object.
	pub fn is_animated(&self) -> bool {
		self.curves.iter().any(|curve| !curve.keys.is_empty())
	}
}

/// Host object kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
	/// Mesh object carrying polygon data.
	Mesh,
	/// Any non-mesh object (camera, light, empty, ...).
	#[default]
	Other,
}

/// Mesh topology view: counts plus the per-face data the exporter reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Mesh {
	/// Number of vertices.
	#[serde(default)]
	pub vertex_count: usize,
	/// Number of edges.
	#[serde(default)]
	pub edge_count: usize,
	/// Faces in mesh order.
	#[serde(default)]
	pub faces: Vec<Face>,
}

/// One mesh face: its normal and the material slot it references.
#[derive(Debug, Clone, Deserialize)]
pub struct Face {
	/// Face normal in object space.
	pub normal: [f32; 3],
	/// Index into the owning object's material slots.
	#[serde(default)]
	pub material_index: usize,
}

/// Object transform: location, scale, and rotation in its source encoding.
#[derive(Debug, Clone, Deserialize)]
pub struct Transform {
	/// Location, host units, no conversion.
	#[serde(default)]
	pub location: [f32; 3],
	/// Per-axis scale.
	#[serde(default = "unit_scale")]
	pub scale: [f32; 3],
	/// Rotation in the object's current rotation mode.
	#[serde(default)]
	pub rotation: Rotation,
}

impl Default for Transform {
	fn default() -> Self {
		Self {
			location: [0.0; 3],
			scale: unit_scale(),
			rotation: Rotation::default(),
		}
	}
}

fn unit_scale() -> [f32; 3] {
	[1.0; 3]
}

/// Rotation in one of the host's rotation modes.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Rotation {
	/// Euler angles in radians, host XYZ order (x applied first, static axes).
	Euler {
		/// Angles about x, y, z.
		xyz: [f32; 3],
	},
	/// Unit quaternion, `w` first.
	Quaternion {
		/// Components `[w, x, y, z]`.
		wxyz: [f32; 4],
	},
	/// Axis-angle, angle in radians.
	AxisAngle {
		/// Rotation angle in radians.
		angle: f32,
		/// Rotation axis, not required to be normalized.
		axis: [f32; 3],
	},
}

impl Default for Rotation {
	fn default() -> Self {
		Rotation::Euler { xyz: [0.0; 3] }
	}
}

/// Material slot contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Material {
	/// Node-graph material; color comes from the first Principled node.
	Nodes {
		/// Shader nodes in the graph's native order.
		nodes: Vec<ShaderNode>,
	},
	/// Flat material with a single diffuse color.
	Flat {
		/// Diffuse color, RGB or RGBA; alpha defaults to 1 when absent.
		diffuse: Vec<f32>,
	},
}

/// One shader node in a node-graph material.
#[derive(Debug, Clone, Deserialize)]
pub struct ShaderNode {
	/// Node type identifier, e.g. `BSDF_PRINCIPLED`.
	pub kind: String,
	/// Base-color input default, RGBA in `[0, 1]`.
	#[serde(default)]
	pub base_color: Option<[f32; 4]>,
}

/// Scene camera: location plus Euler rotation in radians.
#[derive(Debug, Clone, Deserialize)]
pub struct Camera {
	/// Camera location.
	#[serde(default)]
	pub location: [f32; 3],
	/// Euler rotation in radians, host XYZ order.
	#[serde(default)]
	pub rotation_euler: [f32; 3],
}

/// Transform channel targeted by an animation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveTarget {
	/// `location[index]`.
	Location,
	/// `rotation_euler[index]`, radians.
	RotationEuler,
	/// `rotation_quaternion[index]`, components `[w, x, y, z]`.
	RotationQuaternion,
	/// `scale[index]`.
	Scale,
}

/// One animation curve: a channel target and its keyframe points.
#[derive(Debug, Clone, Deserialize)]
pub struct FCurve {
	/// Targeted transform channel.
	pub target: CurveTarget,
	/// Component index within the targeted channel.
	#[serde(default)]
	pub index: usize,
	/// Keyframe points, ascending by frame.
	#[serde(default)]
	pub keys: Vec<Key>,
}

/// One keyframe point on a curve.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Key {
	/// Frame time; integer frames in practice, fractional allowed.
	pub frame: f32,
	/// Channel value at this frame.
	pub value: f32,
}
