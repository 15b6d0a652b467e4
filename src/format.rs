//! Rendering of call argument lists as `(a,b,c)`.

use std::fmt::{self, Debug, Display, Formatter, Write};

/// A single argument value that can be written into a log line.
///
/// Types without an implementation have to be wrapped in [`Shown`] or
/// [`Dbg`] at the call site, otherwise the call does not compile.
pub trait Arg {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

/// A fixed-length, possibly heterogeneous list of arguments.
pub trait ArgList {
	fn fmt_list(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! display_args {
	($($ty:ty),*) => {
		$(
			impl Arg for $ty {
				fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
					Display::fmt(self, f)
				}
			}
		)*
	};
}

display_args!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
	bool, char, str, String
);

impl<T: ?Sized> Arg for *const T {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
		fmt::Pointer::fmt(self, f)
	}
}

impl<T: ?Sized> Arg for *mut T {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
		fmt::Pointer::fmt(self, f)
	}
}

impl<T: Arg + ?Sized> Arg for &T {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
		(**self).fmt_arg(f)
	}
}

impl<T: Arg + ?Sized> Arg for &mut T {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
		(**self).fmt_arg(f)
	}
}

impl<T: Arg> Arg for [T] {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_char('[')?;
		for (i, item) in self.iter().enumerate() {
			if i > 0 {
				f.write_char(',')?;
			}
			item.fmt_arg(f)?;
		}
		f.write_char(']')
	}
}

/// Passes a value through its `Display` implementation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Shown<T>(pub T);

impl<T: Display> Arg for Shown<T> {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Passes a value through its `Debug` implementation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Dbg<T>(pub T);

impl<T: Debug> Arg for Dbg<T> {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Debug::fmt(&self.0, f)
	}
}

impl ArgList for () {
	fn fmt_list(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("()")
	}
}

impl Arg for () {
	fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.fmt_list(f)
	}
}

// Tuples format with the list rule, both as a whole argument list and as a
// single nested argument.
macro_rules! tuple_args {
	($first:ident $first_val:ident $(, $ty:ident $val:ident)*) => {
		impl<$first: Arg, $($ty: Arg),*> ArgList for ($first, $($ty,)*) {
			fn fmt_list(&self, f: &mut Formatter<'_>) -> fmt::Result {
				let ($first_val, $($val,)*) = self;
				f.write_char('(')?;
				$first_val.fmt_arg(f)?;
				$(
					f.write_char(',')?;
					$val.fmt_arg(f)?;
				)*
				f.write_char(')')
			}
		}

		impl<$first: Arg, $($ty: Arg),*> Arg for ($first, $($ty,)*) {
			fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
				self.fmt_list(f)
			}
		}
	};
}

tuple_args!(A a);
tuple_args!(A a, B b);
tuple_args!(A a, B b, C c);
tuple_args!(A a, B b, C c, D d);
tuple_args!(A a, B b, C c, D d, E e);
tuple_args!(A a, B b, C c, D d, E e, F f_);
tuple_args!(A a, B b, C c, D d, E e, F f_, G g);
tuple_args!(A a, B b, C c, D d, E e, F f_, G g, H h);
tuple_args!(A a, B b, C c, D d, E e, F f_, G g, H h, I i);
tuple_args!(A a, B b, C c, D d, E e, F f_, G g, H h, I i, J j);
tuple_args!(A a, B b, C c, D d, E e, F f_, G g, H h, I i, J j, K k);
tuple_args!(A a, B b, C c, D d, E e, F f_, G g, H h, I i, J j, K k, L l);

/// Borrowing `Display` adapter for an argument list.
pub struct Formatted<'a, L: ?Sized>(pub &'a L);

impl<L: ArgList + ?Sized> Display for Formatted<'_, L> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.0.fmt_list(f)
	}
}

pub fn render<L: ArgList + ?Sized>(args: &L) -> String {
	Formatted(args).to_string()
}
