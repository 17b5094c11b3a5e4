use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::scene::curve::evaluate_transform;
use crate::scene::model::{FCurve, Scene, SceneObject};

/// One sampled animation snapshot: a full transform at one frame, not a delta.
#[derive(Debug, Clone, Serialize)]
pub struct Keyframe {
	/// Integer frame index.
	pub frame: i32,
	/// Location at this frame.
	pub loc: [f32; 3],
	/// Rotation as `[angle_deg, axis_x, axis_y, axis_z]`.
	pub rot: [f32; 4],
	/// Scale at this frame.
	pub scale: [f32; 3],
}

/// One keyframe in the side tool's output, rotation as a `[w, x, y, z]`
/// quaternion instead of axis-angle.
#[derive(Debug, Clone, Serialize)]
pub struct QuatKeyframe {
	/// Integer frame index.
	pub frame: i32,
	/// Location at this frame.
	pub loc: [f32; 3],
	/// Rotation quaternion, `w` first.
	pub rot: [f32; 4],
	/// Scale at this frame.
	pub scale: [f32; 3],
}

/// Distinct integer frame indices keyed on any of the given curves, sorted
/// ascending. Fractional key times truncate toward zero.
pub fn keyframe_union(curves: &[FCurve]) -> Vec<i32> {
	let mut frames = BTreeSet::new();
	for curve in curves {
		for key in &curve.keys {
			frames.insert(key.frame as i32);
		}
	}
	frames.into_iter().collect()
}

/// Sample an object's transform at every frame in its keyframe union.
///
/// Frames are visited strictly in ascending order, one at a time; the
/// evaluation replaces the host's global "set current frame" side effect and
/// must stay sequential.
pub fn sample_keyframes(object: &SceneObject) -> Vec<Keyframe> {
	keyframe_union(&object.curves)
		.into_iter()
		.map(|frame| {
			let transform = evaluate_transform(&object.transform, &object.curves, frame as f32);
			Keyframe {
				frame,
				loc: transform.location,
				rot: transform.rotation.to_axis_angle().to_array(),
				scale: transform.scale,
			}
		})
		.collect()
}

/// Build the keyframe-extraction map for every animated object in the scene:
/// object name to sampled snapshots with quaternion rotations. Map iteration
/// order is sorted by name.
pub fn extract_keyframes(scene: &Scene) -> BTreeMap<String, Vec<QuatKeyframe>> {
	let mut out = BTreeMap::new();
	for object in &scene.objects {
		if !object.is_animated() {
			continue;
		}

		let keyframes = keyframe_union(&object.curves)
			.into_iter()
			.map(|frame| {
				let transform = evaluate_transform(&object.transform, &object.curves, frame as f32);
				QuatKeyframe {
					frame,
					loc: transform.location,
					rot: transform.rotation.to_wxyz(),
					scale: transform.scale,
				}
			})
			.collect();
		out.insert(object.name.clone(), keyframes);
	}
	out
}
