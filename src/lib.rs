//! Checked calls into OpenGL-style APIs.
//!
//! APIs of this kind report failures through a global error register rather
//! than return values. Routing calls through [`gl!`] reads that register after
//! every call and writes a line naming the call, its arguments and where it was
//! made:
//!
//! ```text
//! glBindTexture(3553,7)
//! ERROR: gl error code 1282 in glBindTexture(3553,7) at src/scene.rs:42
//! ```
//!
//! The first line is only written with the `log-all` feature, the second with
//! `log-errors` or `log-all`. Without either, [`gl!`] is the bare call.
//! [`gl_checked!`] dispatches in every build.

#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;

pub mod config;
pub mod dispatch;
pub mod format;
pub mod register;
pub mod sink;

pub use config::{Configured, Level, Verbosity, VERBOSITY};
pub use dispatch::{CallSite, Callable, Dispatch, Dispatcher, Passthrough};
pub use format::{render, Arg, ArgList, Dbg, Formatted, Shown};
#[cfg(feature = "gl")]
pub use register::GlRegister;
pub use register::{ErrorCode, ErrorRegister, FnRegister, GLenum, ScriptedRegister, NO_ERROR};
pub use sink::{LogSink, MemorySink, Severity, Sink, StdioSink};
