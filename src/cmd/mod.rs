/// Scene export command.
pub mod export;
/// Keyframe extraction command.
pub mod keyframes;
