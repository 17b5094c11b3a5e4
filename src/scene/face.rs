/// One of the six axis-aligned cube face directions.
///
/// Declaration order is the serialization slot order: `+X, -X, +Y, -Y, +Z, -Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalFace {
	/// `(+1, 0, 0)`
	PosX,
	/// `(-1, 0, 0)`
	NegX,
	/// `(0, +1, 0)`
	PosY,
	/// `(0, -1, 0)`
	NegY,
	/// `(0, 0, +1)`
	PosZ,
	/// `(0, 0, -1)`
	NegZ,
}

impl CanonicalFace {
	/// All directions in slot order.
	pub const ALL: [CanonicalFace; 6] = [
		CanonicalFace::PosX,
		CanonicalFace::NegX,
		CanonicalFace::PosY,
		CanonicalFace::NegY,
		CanonicalFace::PosZ,
		CanonicalFace::NegZ,
	];

	/// Classify a face normal by rounding each component to the nearest of
	/// `{-1, 0, 1}` and matching against the six unit vectors. Returns `None`
	/// for normals that do not round to an axis-aligned direction.
	pub fn from_normal(normal: [f32; 3]) -> Option<Self> {
		let rounded = [round_component(normal[0])?, round_component(normal[1])?, round_component(normal[2])?];
		match rounded {
			[1, 0, 0] => Some(CanonicalFace::PosX),
			[-1, 0, 0] => Some(CanonicalFace::NegX),
			[0, 1, 0] => Some(CanonicalFace::PosY),
			[0, -1, 0] => Some(CanonicalFace::NegY),
			[0, 0, 1] => Some(CanonicalFace::PosZ),
			[0, 0, -1] => Some(CanonicalFace::NegZ),
			_ => None,
		}
	}

	/// Slot index in the serialization order.
	pub fn slot(self) -> usize {
		self as usize
	}

	/// Direction label used in diagnostics.
	pub fn label(self) -> &'static str {
		match self {
			CanonicalFace::PosX => "+X",
			CanonicalFace::NegX => "-X",
			CanonicalFace::PosY => "+Y",
			CanonicalFace::NegY => "-Y",
			CanonicalFace::PosZ => "+Z",
			CanonicalFace::NegZ => "-Z",
		}
	}
}

fn round_component(value: f32) -> Option<i8> {
	if !value.is_finite() {
		return None;
	}
	match value.round() {
		v if v == -1.0 => Some(-1),
		v if v == 0.0 => Some(0),
		v if v == 1.0 => Some(1),
		_ => None,
	}
}
