#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuneParam {
	SpringStiffness,
	DragDamping,
	DashpotDamping,
}

#[derive(Clone, Debug)]
pub struct SimParams {
	pub spring_stiffness: f32,
	pub drag_damping: f32,
	pub dashpot_damping: f32,
}

impl Default for SimParams {
	fn default() -> Self {
		Self {
			spring_stiffness: 1000f32,
			drag_damping: 1f32,
			dashpot_damping: 100f32,
		}
	}
}

impl SimParams {
	pub fn scale(&mut self, param: TuneParam, k: f32) {
		let v = match param {
			TuneParam::SpringStiffness => {
				self.spring_stiffness *= k;
				self.spring_stiffness
			}
			TuneParam::DragDamping => {
				self.drag_damping *= k;
				self.drag_damping
			}
			TuneParam::DashpotDamping => {
				self.dashpot_damping *= k;
				self.dashpot_damping
			}
		};
		eprintln!("INFO: {:?} = {}", param, v);
	}
}
