use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors produced while loading scenes and exporting cube records.
#[derive(Debug, Error)]
pub enum SceneError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Scene fixture did not parse, or a JSON record failed to serialize.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Face normal did not round to any of the six axis-aligned directions.
	#[error("malformed cube {object}: face {face} normal {normal:?} is not axis-aligned")]
	MalformedFace {
		/// Owning object name.
		object: String,
		/// Face index within the mesh.
		face: usize,
		/// Raw face normal as read from the mesh.
		normal: [f32; 3],
	},
	/// Two faces of one cube rounded to the same canonical direction.
	#[error("malformed cube {object}: face {face} duplicates direction {direction}")]
	DuplicateFace {
		/// Owning object name.
		object: String,
		/// Face index within the mesh.
		face: usize,
		/// Canonical direction already claimed by an earlier face.
		direction: &'static str,
	},
	/// CLI format flag did not name a known format version.
	#[error("unknown format version: {value} (expected v1, v2, v2.1, or v3)")]
	UnknownFormat {
		/// User-provided format string.
		value: String,
	},
}
