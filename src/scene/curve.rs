use crate::scene::model::{CurveTarget, FCurve, Rotation, Transform};

impl FCurve {
	/// Evaluate this curve at `frame`: linear interpolation between the
	/// surrounding keys, constant extrapolation beyond the ends. Returns
	/// `None` for a curve with no keys.
	pub fn evaluate(&self, frame: f32) -> Option<f32> {
		let first = self.keys.first()?;
		if frame <= first.frame {
			return Some(first.value);
		}

		for pair in self.keys.windows(2) {
			let (left, right) = (pair[0], pair[1]);
			if frame <= right.frame {
				let span = right.frame - left.frame;
				if span <= 0.0 {
					return Some(right.value);
				}
				let t = (frame - left.frame) / span;
				return Some(left.value + (right.value - left.value) * t);
			}
		}

		self.keys.last().map(|key| key.value)
	}
}

/// Evaluate an object's transform as of `frame` by applying every curve's
/// value over the base transform.
///
/// This stands in for the host's "seek to time T, then read the transform"
/// operation; callers sample frames strictly in sequence. Channels without a
/// curve keep their base value. When any quaternion curve is present the
/// result is quaternion-encoded, otherwise Euler curves force Euler encoding,
/// otherwise the base rotation passes through unchanged.
pub fn evaluate_transform(base: &Transform, curves: &[FCurve], frame: f32) -> Transform {
	let mut location = base.location;
	let mut scale = base.scale;
	let mut euler = base.rotation.to_euler_xyz();
	let mut wxyz = base.rotation.to_wxyz();
	let mut saw_euler = false;
	let mut saw_quat = false;

	for curve in curves {
		let Some(value) = curve.evaluate(frame) else {
			continue;
		};

		match curve.target {
			CurveTarget::Location => {
				if let Some(slot) = location.get_mut(curve.index) {
					*slot = value;
				}
			}
			CurveTarget::Scale => {
				if let Some(slot) = scale.get_mut(curve.index) {
					*slot = value;
				}
			}
			CurveTarget::RotationEuler => {
				if let Some(slot) = euler.get_mut(curve.index) {
					*slot = value;
					saw_euler = true;
				}
			}
			CurveTarget::RotationQuaternion => {
				if let Some(slot) = wxyz.get_mut(curve.index) {
					*slot = value;
					saw_quat = true;
				}
			}
		}
	}

	let rotation = if saw_quat {
		Rotation::Quaternion { wxyz }
	} else if saw_euler {
		Rotation::Euler { xyz: euler }
	} else {
		base.rotation.clone()
	};

	Transform {
		location,
		scale,
		rotation,
	}
}
