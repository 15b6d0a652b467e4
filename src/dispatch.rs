//! Checked invocation of external API entry points.
//!
//! Every call goes through [`Dispatch::dispatch`], which receives the
//! callable, its arguments as a tuple and the [`CallSite`] it was made from.
//! [`Dispatcher`] echoes and checks the call as its [`Level`] asks;
//! [`Passthrough`] only makes it.

use std::marker::PhantomData;

use crate::config::{Configured, Level};
use crate::format::{render, ArgList};
use crate::register::{ErrorCode, ErrorRegister, NO_ERROR};
use crate::sink::{Severity, Sink};

/// Where a call was made, and to what.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct CallSite {
	pub name: &'static str,
	pub file: &'static str,
	pub line: u32,
}

impl CallSite {
	pub const fn new(name: &'static str, file: &'static str, line: u32) -> Self {
		Self { name, file, line }
	}
}

/// A callable invoked with the elements of an argument tuple.
///
/// Implemented for every `FnOnce` of up to twelve parameters. A callable
/// without a return value yields `()`, so void and non-void entry points
/// share the same path through the dispatcher.
pub trait Callable<Args, Ret> {
	fn invoke(self, args: Args) -> Ret;
}

macro_rules! callable {
	($($ty:ident $val:ident),*) => {
		impl<Func, Ret, $($ty),*> Callable<($($ty,)*), Ret> for Func
		where
			Func: FnOnce($($ty),*) -> Ret,
		{
			#[inline(always)]
			fn invoke(self, ($($val,)*): ($($ty,)*)) -> Ret {
				self($($val),*)
			}
		}
	};
}

callable!();
callable!(A a);
callable!(A a, B b);
callable!(A a, B b, C c);
callable!(A a, B b, C c, D d);
callable!(A a, B b, C c, D d, E e);
callable!(A a, B b, C c, D d, E e, F f);
callable!(A a, B b, C c, D d, E e, F f, G g);
callable!(A a, B b, C c, D d, E e, F f, G g, H h);
callable!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
callable!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
callable!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
callable!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);

pub trait Dispatch {
	/// Calls `func` with `args` and returns exactly what it returned.
	fn dispatch<F, A, T>(&self, site: CallSite, func: F, args: A) -> T
	where
		F: Callable<A, T>,
		A: ArgList;
}

impl<D: Dispatch + ?Sized> Dispatch for &D {
	#[inline(always)]
	fn dispatch<F, A, T>(&self, site: CallSite, func: F, args: A) -> T
	where
		F: Callable<A, T>,
		A: ArgList,
	{
		(**self).dispatch(site, func, args)
	}
}

/// Makes the call and nothing else.
#[derive(Copy, Clone, Debug, Default)]
pub struct Passthrough;

impl Dispatch for Passthrough {
	#[inline(always)]
	fn dispatch<F, A, T>(&self, _site: CallSite, func: F, args: A) -> T
	where
		F: Callable<A, T>,
		A: ArgList,
	{
		func.invoke(args)
	}
}

/// Echoes calls and reports register errors to a sink, as `L` selects.
pub struct Dispatcher<L, R, S> {
	register: R,
	sink: S,
	level: PhantomData<fn() -> L>,
}

impl<L: Level, R: ErrorRegister, S: Sink> Dispatcher<L, R, S> {
	pub fn new(register: R, sink: S) -> Self {
		Self {
			register,
			sink,
			level: PhantomData,
		}
	}

	pub fn register(&self) -> &R {
		&self.register
	}

	pub fn sink(&self) -> &S {
		&self.sink
	}
}

impl<R: ErrorRegister, S: Sink> Dispatcher<Configured, R, S> {
	/// A dispatcher at the level selected by the crate's features.
	pub fn configured(register: R, sink: S) -> Self {
		Self::new(register, sink)
	}
}

impl<L: Level, R: ErrorRegister, S: Sink> Dispatch for Dispatcher<L, R, S> {
	fn dispatch<F, A, T>(&self, site: CallSite, func: F, args: A) -> T
	where
		F: Callable<A, T>,
		A: ArgList,
	{
		// Arguments are consumed by the call, so the error line needs them
		// rendered beforehand.
		let rendered = if L::LOG_CALLS || L::LOG_ERRORS {
			render(&args)
		} else {
			String::new()
		};

		if L::LOG_CALLS {
			self.sink.write_line(
				Severity::Info,
				format_args!("{}{}", site.name, rendered),
			);
		}

		let result = func.invoke(args);

		if L::LOG_ERRORS {
			// Read once; further queued codes are left for the next call.
			let code = self.register.query();
			if code != NO_ERROR {
				self.sink.write_line(
					Severity::Error,
					format_args!(
						"gl error code {} in {}{} at {}:{}",
						ErrorCode(code),
						site.name,
						rendered,
						site.file,
						site.line
					),
				);
			}
		}

		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::cell::Cell;

	use crate::config::{All, ErrorsOnly, Off};
	use crate::register::{ScriptedRegister, INVALID_ENUM, INVALID_OPERATION, INVALID_VALUE};
	use crate::sink::MemorySink;

	const SITE: CallSite = CallSite::new("glBindTexture", "Context.cpp", 42);

	#[allow(non_snake_case)]
	fn glBindTexture(_target: u32, _texture: u32) {}

	#[allow(non_snake_case)]
	fn glIsTexture(texture: u32) -> u8 {
		(texture == 7) as u8
	}

	fn dispatcher<L: Level>(
		codes: Vec<u32>,
	) -> Dispatcher<L, ScriptedRegister, MemorySink> {
		Dispatcher::new(ScriptedRegister::with_codes(codes), MemorySink::new())
	}

	#[test]
	fn all_echoes_successful_call() {
		let d = dispatcher::<All>(vec![]);
		d.dispatch(SITE, glBindTexture, (3553, 7));

		assert_eq!(d.sink().lines(), vec!["glBindTexture(3553,7)"]);
		assert_eq!(d.register().queries(), 1);
	}

	#[test]
	fn all_reports_failing_call_after_echo() {
		let d = dispatcher::<All>(vec![INVALID_OPERATION]);
		d.dispatch(SITE, glBindTexture, (3553, 7));

		assert_eq!(
			d.sink().lines(),
			vec![
				"glBindTexture(3553,7)",
				"ERROR: gl error code 1282 in glBindTexture(3553,7) at Context.cpp:42",
			]
		);
	}

	#[test]
	fn errors_only_is_silent_on_success() {
		let d = dispatcher::<ErrorsOnly>(vec![]);
		let site = CallSite::new("glEnd", "Scene.cpp", 7);
		d.dispatch(site, || {}, ());

		assert!(d.sink().lines().is_empty());
		assert_eq!(d.register().queries(), 1);
	}

	#[test]
	fn errors_only_reports_exactly_one_line() {
		let d = dispatcher::<ErrorsOnly>(vec![1280, 1281]);
		let site = CallSite::new("glEnd", "Scene.cpp", 7);
		d.dispatch(site, || {}, ());

		assert_eq!(
			d.sink().lines(),
			vec!["ERROR: gl error code 1280 in glEnd() at Scene.cpp:7"]
		);
		// The second queued code is not drained.
		assert_eq!(d.register().queries(), 1);
	}

	#[test]
	fn off_neither_logs_nor_queries() {
		let d = dispatcher::<Off>(vec![INVALID_OPERATION]);
		for _ in 0..3 {
			d.dispatch(SITE, glBindTexture, (3553, 7));
		}

		assert!(d.sink().lines().is_empty());
		assert_eq!(d.register().queries(), 0);
	}

	#[test]
	fn return_value_is_unchanged_by_errors() {
		let ok = dispatcher::<All>(vec![]);
		let failing = dispatcher::<All>(vec![INVALID_OPERATION]);
		let site = CallSite::new("glIsTexture", "t.rs", 1);

		assert_eq!(ok.dispatch(site, glIsTexture, (7,)), 1);
		assert_eq!(failing.dispatch(site, glIsTexture, (7,)), 1);
		assert_eq!(Passthrough.dispatch(site, glIsTexture, (8,)), 0);
		assert_eq!(failing.sink().lines().len(), 2);
	}

	#[test]
	fn callable_runs_exactly_once() {
		let calls = Cell::new(0);
		let d = dispatcher::<All>(vec![INVALID_OPERATION]);
		let multiply = |a: i32, b: i32| {
			calls.set(calls.get() + 1);
			a * b
		};
		let value = d.dispatch(SITE, multiply, (6, 7));

		assert_eq!(value, 42);
		assert_eq!(calls.get(), 1);
	}

	#[test]
	fn pointer_arguments_reach_the_callee() {
		let d = dispatcher::<ErrorsOnly>(vec![]);
		let mut names = [0u32; 2];
		let site = CallSite::new("glGenTextures", "t.rs", 3);

		d.dispatch(
			site,
			|n: i32, out: *mut u32| {
				let out = unsafe { std::slice::from_raw_parts_mut(out, n as usize) };
				for (i, name) in out.iter_mut().enumerate() {
					*name = i as u32 + 1;
				}
			},
			(2, names.as_mut_ptr()),
		);

		assert_eq!(names, [1, 2]);
	}

	#[test]
	fn dispatch_through_reference() {
		let d = dispatcher::<All>(vec![]);
		let handle = &d;
		assert_eq!(handle.dispatch(SITE, |x: u8| x + 1, (1,)), 2);
		assert_eq!(d.sink().lines(), vec!["glBindTexture(1)"]);
	}

	fn fill(out: &mut [u32]) -> usize {
		for (i, slot) in out.iter_mut().enumerate() {
			*slot = i as u32 * 2;
		}
		out.len()
	}

	#[test]
	fn mutable_slices_are_forwarded_and_logged() {
		let d = dispatcher::<All>(vec![INVALID_VALUE]);
		let mut buffer = [7u32; 3];
		let site = CallSite::new("fill", "t.rs", 9);

		let written = d.dispatch(site, fill, (&mut buffer[..],));

		assert_eq!(written, 3);
		assert_eq!(buffer, [0, 2, 4]);
		assert_eq!(
			d.sink().lines(),
			vec![
				"fill([7,7,7])",
				"ERROR: gl error code 1281 in fill([7,7,7]) at t.rs:9",
			]
		);
	}

	#[test]
	fn owned_strings_are_accepted() {
		let d = dispatcher::<ErrorsOnly>(vec![INVALID_ENUM]);
		let site = CallSite::new("glObjectLabel", "t.rs", 11);

		let len = d.dispatch(site, |label: String| label.len(), (String::from("sky"),));

		assert_eq!(len, 3);
		assert_eq!(
			d.sink().lines(),
			vec!["ERROR: gl error code 1280 in glObjectLabel(sky) at t.rs:11"]
		);
	}
}
