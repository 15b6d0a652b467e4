mod window;

use glcheck::{gl, Dispatch, Dispatcher, GlRegister, LogSink};

use window::{Window, WindowError};

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();

	if let Err(err) = run() {
		log::error!("{}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<(), WindowError> {
	let mut window = Window::new("glcheck", 900, 700)?;
	let dispatcher = Dispatcher::configured(GlRegister, LogSink);
	log::info!("GL call checks: {:?}", glcheck::VERBOSITY);

	let mut frame: usize = 0;
	while !window.should_exit {
		window.tick();

		let (width, height) = window.drawable_size();
		gl!(dispatcher, unsafe gl::Viewport, 0, 0, width as i32, height as i32);
		gl!(dispatcher, unsafe gl::ClearColor, 0.1, 0.1, 0.15, 1.0);
		gl!(dispatcher, unsafe gl::Clear, gl::COLOR_BUFFER_BIT);

		if frame == 0 {
			texture_roundtrip(&dispatcher);
		}

		window.present();
		frame += 1;
	}

	Ok(())
}

fn texture_roundtrip<D: Dispatch>(dispatcher: &D) {
	let mut texture: gl::types::GLuint = 0;
	gl!(dispatcher, unsafe gl::GenTextures, 1, &mut texture as *mut gl::types::GLuint);

	// Not a texture target: leaves INVALID_ENUM in the register.
	gl!(dispatcher, unsafe gl::BindTexture, gl::ARRAY_BUFFER, texture);

	let is_texture = gl!(dispatcher, unsafe gl::IsTexture, texture);
	log::debug!("texture {} valid: {}", texture, is_texture == gl::TRUE);

	gl!(dispatcher, unsafe gl::DeleteTextures, 1, &texture as *const gl::types::GLuint);
}
