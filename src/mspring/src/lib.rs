pub mod controller_message;
pub mod error;
pub mod force;
pub mod integrator;
pub mod mworld;
pub mod params;
pub mod particle;
pub mod posbox;
pub mod spring;

pub type V2 = nalgebra::Vector2<f32>;

pub const MAX_PARTICLES: usize = 1024;
pub const PARTICLE_MASS: f32 = 1.0;
