use crate::params::SimParams;
use crate::particle::ParticleGroup;
use crate::spring::SpringTable;
use crate::{V2, PARTICLE_MASS};

// Each endpoint scans its springs independently, so every spring is
// visited twice per pass (once from i, once from j). The accumulation
// is intentionally not pairwise-reciprocal; do not fold it into a
// single equal-and-opposite pass.
fn particle_force(
	i: usize,
	pg: &ParticleGroup,
	springs: &SpringTable,
	params: &SimParams,
) -> V2 {
	let p = pg.get(i);
	let mut f = V2::new(0f32, -9.8) * PARTICLE_MASS;
	for j in 0..pg.len() {
		let l0 = springs.get(i, j);
		if l0 == 0f32 {
			continue;
		}
		let q = pg.get(j);
		let dp = p.pos - q.pos;
		let l = dp.magnitude();
		if !l.is_normal() {
			eprintln!("WARN: degenerate spring {}-{}, skipped", i, j);
			continue;
		}
		let d = dp / l;
		f += -params.spring_stiffness * (l / l0 - 1f32) * d;
		let v_rel = (p.vel - q.vel).dot(&d);
		f += -params.dashpot_damping * v_rel * d;
	}
	f
}

#[cfg(not(debug_assertions))]
pub fn compute_forces(
	pg: &ParticleGroup,
	springs: &SpringTable,
	params: &SimParams,
	forces: &mut Vec<V2>,
) {
	use rayon::prelude::*;
	forces.resize(pg.len(), V2::zeros());
	forces
		.par_iter_mut()
		.enumerate()
		.for_each(|(i, f)| *f = particle_force(i, pg, springs, params));
}

#[cfg(debug_assertions)]
pub fn compute_forces(
	pg: &ParticleGroup,
	springs: &SpringTable,
	params: &SimParams,
	forces: &mut Vec<V2>,
) {
	forces.resize(pg.len(), V2::zeros());
	forces
		.iter_mut()
		.enumerate()
		.for_each(|(i, f)| *f = particle_force(i, pg, springs, params));
}
