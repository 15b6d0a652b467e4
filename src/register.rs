//! The external API's error register and stand-ins for it.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub type GLenum = u32;

pub const NO_ERROR: GLenum = 0;
pub const INVALID_ENUM: GLenum = 0x0500;
pub const INVALID_VALUE: GLenum = 0x0501;
pub const INVALID_OPERATION: GLenum = 0x0502;
pub const STACK_OVERFLOW: GLenum = 0x0503;
pub const STACK_UNDERFLOW: GLenum = 0x0504;
pub const OUT_OF_MEMORY: GLenum = 0x0505;
pub const INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;

/// Read access to a process-wide error code, `NO_ERROR` after a successful
/// call.
pub trait ErrorRegister {
	fn query(&self) -> GLenum;
}

impl<R: ErrorRegister + ?Sized> ErrorRegister for &R {
	fn query(&self) -> GLenum {
		(**self).query()
	}
}

impl<R: ErrorRegister + ?Sized> ErrorRegister for Arc<R> {
	fn query(&self) -> GLenum {
		(**self).query()
	}
}

/// Adapts a closure, e.g. a loaded `glGetError` pointer or a test stub.
#[derive(Copy, Clone, Debug)]
pub struct FnRegister<F>(pub F);

impl<F: Fn() -> GLenum> ErrorRegister for FnRegister<F> {
	fn query(&self) -> GLenum {
		(self.0)()
	}
}

/// Reads `glGetError` of the current context.
///
/// GL function pointers must already be loaded with `gl::load_with`.
#[cfg(feature = "gl")]
#[derive(Copy, Clone, Debug, Default)]
pub struct GlRegister;

#[cfg(feature = "gl")]
impl ErrorRegister for GlRegister {
	fn query(&self) -> GLenum {
		unsafe { gl::GetError() }
	}
}

/// In-memory register that reports queued codes in order, then `NO_ERROR`.
#[derive(Debug, Default)]
pub struct ScriptedRegister {
	codes: Mutex<VecDeque<GLenum>>,
	queries: AtomicUsize,
}

impl ScriptedRegister {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_codes<I: IntoIterator<Item = GLenum>>(codes: I) -> Self {
		Self {
			codes: Mutex::new(codes.into_iter().collect()),
			queries: AtomicUsize::new(0),
		}
	}

	/// Code reported by the next query.
	pub fn push(&self, code: GLenum) {
		self.lock().push_back(code);
	}

	/// How many times the register has been read.
	pub fn queries(&self) -> usize {
		self.queries.load(Ordering::SeqCst)
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<GLenum>> {
		self.codes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

impl ErrorRegister for ScriptedRegister {
	fn query(&self) -> GLenum {
		self.queries.fetch_add(1, Ordering::SeqCst);
		self.lock().pop_front().unwrap_or(NO_ERROR)
	}
}

/// A register value. Displays as the decimal code.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct ErrorCode(pub GLenum);

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
