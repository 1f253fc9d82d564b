use crate::error::SimError;
use crate::{V2, MAX_PARTICLES};

#[derive(Clone, Debug)]
pub struct Particle {
	pub pos: V2,
	pub vel: V2,
	pub fixed: bool,
}

impl Particle {
	pub fn new(pos: V2, fixed: bool) -> Self {
		Self {
			pos,
			vel: V2::zeros(),
			fixed,
		}
	}
}

pub struct ParticleGroup {
	max: usize,
	particles: Vec<Particle>,
}

impl Default for ParticleGroup {
	fn default() -> Self {
		Self::new(MAX_PARTICLES)
	}
}

impl ParticleGroup {
	pub fn new(max: usize) -> Self {
		Self {
			max,
			particles: Vec::with_capacity(max),
		}
	}

	pub fn max(&self) -> usize {
		self.max
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn get(&self, id: usize) -> &Particle {
		&self.particles[id]
	}

	pub fn get_mut(&mut self, id: usize) -> &mut Particle {
		&mut self.particles[id]
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
		self.particles.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
		self.particles.iter_mut()
	}

	pub fn add(&mut self, p: Particle) -> Result<usize, SimError> {
		if self.particles.len() == self.max {
			return Err(SimError::CapacityExceeded { max: self.max });
		}
		self.particles.push(p);
		Ok(self.particles.len() - 1)
	}

	pub fn clear(&mut self) {
		self.particles.clear();
	}
}
