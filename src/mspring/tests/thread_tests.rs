use std::sync::mpsc::channel;
use std::time::Duration;

use mspring::controller_message::ControllerMessage;
use mspring::mworld::MWorld;
use protocol::pr_model::PrModel;

#[test]
fn run_thread_round_trip() {
	let (model_tx, model_rx) = channel::<PrModel>();
	let (ctrl_tx, ctrl_rx) = channel::<ControllerMessage>();
	let handle = std::thread::spawn(move || {
		let mut world = MWorld::default();
		world.run_thread(model_tx, ctrl_rx);
	});

	// empty frames arrive first
	let model = model_rx.recv_timeout(Duration::from_secs(5)).unwrap();
	assert!(model.particles.is_empty());

	ctrl_tx
		.send(ControllerMessage::AddParticle([0.5, 0.9], false))
		.unwrap();
	let mut seen = None;
	for _ in 0..500 {
		let model = model_rx.recv_timeout(Duration::from_secs(5)).unwrap();
		if model.particles.len() == 1 {
			seen = Some(model);
			break;
		}
	}
	let model = seen.expect("particle never showed up in a frame");
	assert!(!model.particles[0].fixed);
	// it has been falling since it was added
	assert!(model.particles[0].pos[1] < 0.9);

	ctrl_tx.send(ControllerMessage::Shutdown).unwrap();
	handle.join().unwrap();
}
