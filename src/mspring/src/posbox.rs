use crate::V2;

pub struct Posbox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Default for Posbox {
	fn default() -> Self {
		Self {
			xmin: 0f32,
			xmax: 1f32,
			ymin: 0f32,
			ymax: 1f32,
		}
	}
}

impl Posbox {
	// clamp each axis independently, killing velocity along a clamped axis
	pub fn apply(&self, pos: &mut V2, vel: &mut V2) {
		if pos[0] < self.xmin {
			pos[0] = self.xmin;
			vel[0] = 0f32;
		} else if pos[0] > self.xmax {
			pos[0] = self.xmax;
			vel[0] = 0f32;
		}
		if pos[1] < self.ymin {
			pos[1] = self.ymin;
			vel[1] = 0f32;
		} else if pos[1] > self.ymax {
			pos[1] = self.ymax;
			vel[1] = 0f32;
		}
	}
}
