use std::time::SystemTime;

use mspring::mworld::MWorld;
use mspring::V2;

fn main() {
	let mut world = MWorld::default();
	for m in 0..30 {
		for n in 0..30 {
			let x = 0.05 + 0.03 * m as f32;
			let y = 0.95 - 0.03 * n as f32;
			world.add_particle(V2::new(x, y), n == 0).unwrap();
		}
	}
	let start = SystemTime::now();
	let rframes = 100;
	for _ in 0..rframes {
		world.run();
	}
	let time = rframes as f32 * world.dt * world.substeps as f32;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
