use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::video::{GLContext, GLProfile, WindowBuildError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowError {
	#[error("SDL initialization failed: {0}")]
	Init(String),
	#[error("could not create window: {0}")]
	Build(#[from] WindowBuildError),
	#[error("could not create GL context: {0}")]
	Context(String),
}

pub struct Window {
	_video: sdl2::VideoSubsystem,
	window: sdl2::video::Window,
	_context: GLContext,
	events: sdl2::EventPump,
	pub should_exit: bool,
}

impl Window {
	/// Opens a window with a current GL 3.3 core context and loads the GL
	/// function pointers.
	pub fn new(title: &str, width: u32, height: u32) -> Result<Self, WindowError> {
		let sdl = sdl2::init().map_err(WindowError::Init)?;
		let video = sdl.video().map_err(WindowError::Init)?;

		let attributes = video.gl_attr();
		attributes.set_context_profile(GLProfile::Core);
		attributes.set_context_version(3, 3);

		let window = video
			.window(title, width, height)
			.opengl()
			.resizable()
			.build()?;
		let context = window.gl_create_context().map_err(WindowError::Context)?;
		gl::load_with(|name| video.gl_get_proc_address(name) as *const _);

		let events = sdl.event_pump().map_err(WindowError::Init)?;

		Ok(Self {
			_video: video,
			window,
			_context: context,
			events,
			should_exit: false,
		})
	}

	pub fn drawable_size(&self) -> (u32, u32) {
		self.window.drawable_size()
	}

	pub fn tick(&mut self) {
		for event in self.events.poll_iter() {
			match event {
				Event::Quit { .. } => self.should_exit = true,
				Event::KeyDown {
					keycode: Some(Keycode::Escape),
					..
				} => self.should_exit = true,
				_ => {}
			}
		}
	}

	pub fn present(&self) {
		self.window.gl_swap_window();
	}
}
