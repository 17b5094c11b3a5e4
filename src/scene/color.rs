use crate::scene::model::{Face, Material};

/// Shader node type identifier holding the base-color input.
pub const PRINCIPLED_NODE_KIND: &str = "BSDF_PRINCIPLED";

/// RGBA color, channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(
	/// Channels `[r, g, b, a]`.
	pub [f32; 4],
);

impl Rgba {
	/// Opaque white, the single fallback used whenever a face color cannot be
	/// resolved (missing slot, missing node graph, missing Principled node).
	pub const DEFAULT: Rgba = Rgba([1.0, 1.0, 1.0, 1.0]);

	/// Format as `#rrggbbaa`, lowercase.
	///
	/// Channels scale by 255 and truncate toward zero; `0.5` becomes `7f`,
	/// never `80`. Consumers byte-compare output, so this must not round.
	pub fn to_hex(self) -> String {
		let [r, g, b, a] = self.0;
		format!("#{:02x}{:02x}{:02x}{:02x}", hex_channel(r), hex_channel(g), hex_channel(b), hex_channel(a))
	}
}

fn hex_channel(value: f32) -> u8 {
	if value.is_nan() {
		return 0;
	}
	((value * 255.0) as i32).clamp(0, 255) as u8
}

/// Resolve the color for one face from the object's material slots.
///
/// Out-of-range slot index, empty node graph, and missing Principled node all
/// resolve to [`Rgba::DEFAULT`]; this is a fallback policy, never an error.
pub fn resolve_face_color(face: &Face, materials: &[Material]) -> Rgba {
	let Some(material) = materials.get(face.material_index) else {
		return Rgba::DEFAULT;
	};

	match material {
		Material::Nodes { nodes } => nodes
			.iter()
			.find(|node| node.kind == PRINCIPLED_NODE_KIND)
			.and_then(|node| node.base_color)
			.map(Rgba)
			.unwrap_or(Rgba::DEFAULT),
		Material::Flat { diffuse } => {
			let channel = |index: usize| diffuse.get(index).copied().unwrap_or(1.0);
			Rgba([channel(0), channel(1), channel(2), channel(3)])
		}
	}
}
