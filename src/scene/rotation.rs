use glam::{EulerRot, Quat, Vec3};

use crate::scene::model::Rotation;

/// Angle below which a rotation is treated as zero, in radians.
const ZERO_ANGLE_EPS: f32 = 1e-6;

/// Axis reported for zero rotations, so a zero angle never yields an
/// undefined axis. The convention is `+Z`.
pub const ZERO_ROTATION_AXIS: [f32; 3] = [0.0, 0.0, 1.0];

/// Format-agnostic rotation: angle in degrees plus a unit axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
	/// Rotation angle in degrees.
	pub angle_deg: f32,
	/// Normalized rotation axis.
	pub axis: [f32; 3],
}

impl AxisAngle {
	/// The zero rotation under the documented axis convention.
	pub const IDENTITY: AxisAngle = AxisAngle {
		angle_deg: 0.0,
		axis: ZERO_ROTATION_AXIS,
	};

	/// Flattened `[angle_deg, x, y, z]` quadruple.
	pub fn to_array(self) -> [f32; 4] {
		[self.angle_deg, self.axis[0], self.axis[1], self.axis[2]]
	}
}

impl Rotation {
	/// Convert to a unit quaternion.
	///
	/// Euler input uses the host's XYZ order: x applied first about static
	/// axes, so the composed matrix is `Rz * Ry * Rx`.
	pub fn to_quat(&self) -> Quat {
		match self {
			Rotation::Euler { xyz } => Quat::from_euler(EulerRot::ZYX, xyz[2], xyz[1], xyz[0]),
			Rotation::Quaternion { wxyz } => Quat::from_xyzw(wxyz[1], wxyz[2], wxyz[3], wxyz[0]).normalize(),
			Rotation::AxisAngle { angle, axis } => {
				let axis = Vec3::from_array(*axis);
				if axis.length_squared() <= ZERO_ANGLE_EPS {
					Quat::IDENTITY
				} else {
					Quat::from_axis_angle(axis.normalize(), *angle)
				}
			}
		}
	}

	/// Convert to Euler angles in radians, host XYZ order.
	pub fn to_euler_xyz(&self) -> [f32; 3] {
		match self {
			Rotation::Euler { xyz } => *xyz,
			_ => {
				let (z, y, x) = self.to_quat().to_euler(EulerRot::ZYX);
				[x, y, z]
			}
		}
	}

	/// Convert to quaternion components `[w, x, y, z]`.
	pub fn to_wxyz(&self) -> [f32; 4] {
		let quat = self.to_quat();
		[quat.w, quat.x, quat.y, quat.z]
	}

	/// Convert to the canonical axis-angle form via quaternion.
	pub fn to_axis_angle(&self) -> AxisAngle {
		quat_to_axis_angle(self.to_quat())
	}
}

/// Decompose a quaternion into degrees-and-unit-axis form, applying the
/// zero-rotation axis convention.
pub fn quat_to_axis_angle(quat: Quat) -> AxisAngle {
	let (axis, angle) = quat.normalize().to_axis_angle();
	if angle.abs() <= ZERO_ANGLE_EPS {
		return AxisAngle::IDENTITY;
	}

	AxisAngle {
		angle_deg: angle.to_degrees(),
		axis: axis.normalize().to_array(),
	}
}
