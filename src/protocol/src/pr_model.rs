// pr_model: simulation state handed to the renderer

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f32; 2],
	pub fixed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrSpring {
	// indices into PrModel::particles
	pub ids: [usize; 2],
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub springs: Vec<PrSpring>,
}
