use crate::MAX_PARTICLES;

// dense symmetric table of rest lengths, 0 = no spring
pub struct SpringTable {
	max: usize,
	data: Vec<f32>,
}

impl Default for SpringTable {
	fn default() -> Self {
		Self::new(MAX_PARTICLES)
	}
}

impl SpringTable {
	pub fn new(max: usize) -> Self {
		Self {
			max,
			data: vec![0f32; max * max],
		}
	}

	pub fn set(&mut self, i: usize, j: usize, l0: f32) {
		debug_assert_ne!(i, j);
		self.data[i * self.max + j] = l0;
		self.data[j * self.max + i] = l0;
	}

	pub fn get(&self, i: usize, j: usize) -> f32 {
		self.data[i * self.max + j]
	}

	pub fn clear(&mut self) {
		self.data.fill(0f32);
	}

	pub fn active_pairs(&self, n: usize) -> Vec<[usize; 2]> {
		let mut result = Vec::new();
		for i in 0..n {
			for j in i + 1..n {
				if self.get(i, j) != 0f32 {
					result.push([i, j]);
				}
			}
		}
		result
	}
}
