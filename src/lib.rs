//! Public library API for exporting cube scenes to the Cascade scene-description format.

/// Scene model, cube detection, color resolution, keyframe sampling, and serialization.
pub mod scene;
