mod color;
mod cube;
mod curve;
mod error;
mod export;
mod face;
mod format;
mod model;
mod rotation;
mod sample;
mod writer;

/// Face-color resolution and hex formatting.
pub use color::{PRINCIPLED_NODE_KIND, Rgba, resolve_face_color};
/// Cube detection, the scene walker, and record building.
pub use cube::{CUBE_EDGES, CUBE_FACES, CUBE_VERTICES, CubeRecord, describe_cube, is_unit_cube, walk_cubes};
/// Animation-curve transform evaluation.
pub use curve::evaluate_transform;
/// Error and result aliases.
pub use error::{Result, SceneError};
/// Whole-scene export entry points and reporting.
pub use export::{ExportReport, SkippedCube, export_scene, export_scene_to_path};
/// Canonical axis-aligned face directions.
pub use face::CanonicalFace;
/// Output format versions and their remap tables.
pub use format::FormatVersion;
/// Read-only scene snapshot model.
pub use model::{Camera, CurveTarget, FCurve, Face, Key, Material, Mesh, ObjectKind, Rotation, Scene, SceneObject, ShaderNode, Transform};
/// Rotation representation conversions.
pub use rotation::{AxisAngle, ZERO_ROTATION_AXIS, quat_to_axis_angle};
/// Keyframe union and transform sampling.
pub use sample::{Keyframe, QuatKeyframe, extract_keyframes, keyframe_union, sample_keyframes};
/// Per-version record serialization.
pub use writer::{write_camera, write_cube, write_header};
