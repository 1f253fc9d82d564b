use crate::params::SimParams;
use crate::particle::ParticleGroup;
use crate::posbox::Posbox;
use crate::{V2, PARTICLE_MASS};

// semi-implicit euler with exponential drag
pub fn integrate(
	pg: &mut ParticleGroup,
	forces: &[V2],
	dt: f32,
	params: &SimParams,
	bounds: &Posbox,
) {
	for (i, p) in pg.iter_mut().enumerate() {
		if !p.fixed {
			p.vel += dt * forces[i] / PARTICLE_MASS;
			p.vel *= (-dt * params.drag_damping).exp();
			p.pos += p.vel * dt;
		} else {
			p.vel = V2::zeros();
		}
		bounds.apply(&mut p.pos, &mut p.vel);
	}
}
