use crate::scene::model::{Mesh, ObjectKind, Rotation, Scene, SceneObject};
use crate::scene::sample::{Keyframe, sample_keyframes};
use crate::scene::{CanonicalFace, Rgba, Result, SceneError, resolve_face_color};

/// Unit-cube face count.
pub const CUBE_FACES: usize = 6;
/// Unit-cube vertex count.
pub const CUBE_VERTICES: usize = 8;
/// Unit-cube edge count.
pub const CUBE_EDGES: usize = 12;

/// Serialized description of one detected cube, built fresh per export.
#[derive(Debug, Clone)]
pub struct CubeRecord {
	/// Object name.
	pub name: String,
	/// Location, copied verbatim.
	pub location: [f32; 3],
	/// Per-axis scale, copied verbatim.
	pub scale: [f32; 3],
	/// Rotation in its source encoding; each format version picks its own
	/// representation at write time.
	pub rotation: Rotation,
	/// Face colors keyed by canonical face slot (`+X, -X, +Y, -Y, +Z, -Z`).
	pub face_colors: [Rgba; 6],
	/// Sampled animation snapshots, empty for unanimated objects.
	pub keyframes: Vec<Keyframe>,
}

/// Topology-only cube test: 6 faces, 8 vertices, 12 edges.
///
/// Necessary but not sufficient; any mesh matching the counts is treated as
/// a cube even when its shape is not cuboid. Intentional approximation.
pub fn is_unit_cube(mesh: &Mesh) -> bool {
	mesh.faces.len() == CUBE_FACES && mesh.vertex_count == CUBE_VERTICES && mesh.edge_count == CUBE_EDGES
}

/// Stable filter over the scene: mesh objects passing [`is_unit_cube`], in
/// scene iteration order.
pub fn walk_cubes(scene: &Scene) -> impl Iterator<Item = (&SceneObject, &Mesh)> {
	scene.objects.iter().filter_map(|object| {
		if object.kind != ObjectKind::Mesh {
			return None;
		}
		let mesh = object.mesh.as_ref()?;
		is_unit_cube(mesh).then_some((object, mesh))
	})
}

/// Build the cube record for an accepted object: verbatim transform, face
/// colors mapped into canonical slots, and sampled keyframes.
///
/// Fails with [`SceneError::MalformedFace`] or [`SceneError::DuplicateFace`]
/// when the mesh's face normals do not cover the six canonical directions
/// exactly once; callers skip the object and continue.
pub fn describe_cube(object: &SceneObject, mesh: &Mesh) -> Result<CubeRecord> {
	let mut slots: [Option<Rgba>; 6] = [None; 6];

	for (index, face) in mesh.faces.iter().enumerate() {
		let Some(canonical) = CanonicalFace::from_normal(face.normal) else {
			return Err(SceneError::MalformedFace {
				object: object.name.clone(),
				face: index,
				normal: face.normal,
			});
		};

		let slot = &mut slots[canonical.slot()];
		if slot.is_some() {
			return Err(SceneError::DuplicateFace {
				object: object.name.clone(),
				face: index,
				direction: canonical.label(),
			});
		}
		*slot = Some(resolve_face_color(face, &object.materials));
	}

	// Six faces over six distinct directions: every slot is filled.
	let face_colors = slots.map(|slot| slot.unwrap_or(Rgba::DEFAULT));

	Ok(CubeRecord {
		name: object.name.clone(),
		location: object.transform.location,
		scale: object.transform.scale,
		rotation: object.transform.rotation.clone(),
		face_colors,
		keyframes: sample_keyframes(object),
	})
}
