use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime};

use crate::controller_message::ControllerMessage;
use crate::error::SimError;
use crate::force::compute_forces;
use crate::integrator::integrate;
use crate::params::SimParams;
use crate::particle::{Particle, ParticleGroup};
use crate::posbox::Posbox;
use crate::spring::SpringTable;
use crate::V2;
use protocol::pr_model::{PrModel, PrParticle, PrSpring};

const ATTRACT_GAIN: f32 = 100f32;

pub struct MWorld {
	pub dt: f32,
	pub substeps: usize,
	pub time_scale: f32,
	pub connect_radius: f32,
	pub rest_length: f32,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,

	pub pg: ParticleGroup,
	pub springs: SpringTable,
	pub params: SimParams,
	posbox: Posbox,
	forces: Vec<V2>,
}

impl Default for MWorld {
	fn default() -> Self {
		Self {
			dt: 1e-3,
			substeps: 10,
			time_scale: 1.0,
			connect_radius: 0.15,
			rest_length: 0.1,
			forward_frames: -1,

			pg: ParticleGroup::default(),
			springs: SpringTable::default(),
			params: SimParams::default(),
			posbox: Posbox::default(),
			forces: Vec::new(),
		}
	}
}

impl MWorld {
	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_substeps(mut self, substeps: usize) -> Self {
		self.substeps = substeps;
		self
	}

	pub fn with_time_scale(mut self, time_scale: f32) -> Self {
		self.time_scale = time_scale;
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 0;
		self
	}

	pub fn with_max_particles(mut self, max: usize) -> Self {
		self.pg = ParticleGroup::new(max);
		self.springs = SpringTable::new(max);
		self
	}

	pub fn init_test(&mut self) {
		self.clear();
		self.add_particle(V2::new(0.3, 0.3), true).unwrap();
		self.add_particle(V2::new(0.3, 0.4), false).unwrap();
		self.add_particle(V2::new(0.4, 0.4), false).unwrap();
	}

	pub fn substep(&mut self) {
		compute_forces(&self.pg, &self.springs, &self.params, &mut self.forces);
		integrate(
			&mut self.pg,
			&self.forces,
			self.dt,
			&self.params,
			&self.posbox,
		);
	}

	pub fn run(&mut self) {
		for _ in 0..self.substeps {
			self.substep();
		}
	}

	pub fn add_particle(
		&mut self,
		pos: V2,
		fixed: bool,
	) -> Result<usize, SimError> {
		let id = self.pg.add(Particle::new(pos, fixed))?;
		for i in 0..id {
			if (pos - self.pg.get(i).pos).magnitude() < self.connect_radius {
				self.springs.set(id, i, self.rest_length);
			}
		}
		Ok(id)
	}

	// instantaneous velocity nudge toward point, bypassing the force
	// pipeline; fixed particles get the nudge too but the next substep
	// re-zeroes them
	pub fn attract(&mut self, point: V2) {
		let impulse = self.dt * self.substeps as f32 * ATTRACT_GAIN;
		for p in self.pg.iter_mut() {
			p.vel += -impulse * (p.pos - point);
		}
	}

	pub fn clear(&mut self) {
		eprintln!("INFO: clear scene");
		self.pg.clear();
		self.springs.clear();
	}

	pub fn toggle_pause(&mut self) {
		if self.forward_frames == 0 {
			self.forward_frames = -1;
		} else {
			self.forward_frames = 0;
		}
	}

	pub fn frame_forward(&mut self) {
		if self.forward_frames == 0 {
			self.forward_frames = 1;
		}
	}

	pub fn paused(&self) -> bool {
		self.forward_frames == 0
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self
			.pg
			.iter()
			.map(|p| PrParticle {
				pos: [p.pos[0], p.pos[1]],
				fixed: p.fixed,
			})
			.collect();
		let springs = self
			.springs
			.active_pairs(self.pg.len())
			.into_iter()
			.map(|ids| PrSpring { ids })
			.collect();
		PrModel { particles, springs }
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<PrModel>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut start_time = SystemTime::now();
		let rtime: u64 =
			(self.dt * 1e6 * self.substeps as f32 * self.time_scale) as u64;
		loop {
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				self.run();
				if tx.send(self.pr_model()).is_err() {
					return;
				}
			}

			let next_time = SystemTime::now();
			let dt = next_time
				.duration_since(start_time)
				.unwrap_or_default()
				.as_micros() as u64;
			while let Ok(msg) = rx.try_recv() {
				match msg {
					ControllerMessage::TogglePause => self.toggle_pause(),
					ControllerMessage::FrameForward => self.frame_forward(),
					ControllerMessage::AddParticle(pos, fixed) => {
						let pos = V2::new(pos[0], pos[1]);
						if let Err(e) = self.add_particle(pos, fixed) {
							eprintln!("WARN: {}", e);
						}
					}
					ControllerMessage::Attract(pos) => {
						self.attract(V2::new(pos[0], pos[1]))
					}
					ControllerMessage::ClearScene => self.clear(),
					ControllerMessage::ScaleParam(param, k) => {
						self.params.scale(param, k)
					}
					ControllerMessage::Shutdown => return,
				}
			}
			if dt < rtime {
				std::thread::sleep(Duration::from_micros(rtime - dt));
			}
			start_time = next_time;
		}
	}
}
