use crate::params::TuneParam;

pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	AddParticle([f32; 2], bool),
	Attract([f32; 2]),
	ClearScene,
	ScaleParam(TuneParam, f32),
	Shutdown,
}
