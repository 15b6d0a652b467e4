/// Calls a GL entry point through a [`Dispatch`](crate::Dispatch),
/// recording its name and call site, whatever features are enabled.
///
/// ```ignore
/// let texture = gl_checked!(dispatcher, unsafe gl::IsTexture, name);
/// gl_checked!(dispatcher, unsafe gl::BindTexture, gl::TEXTURE_2D, name);
/// gl_checked!(dispatcher, bind_texture, target, name); // a safe fn
/// ```
///
/// Each argument is evaluated once.
#[macro_export]
macro_rules! gl_checked {
	// Pair each argument with a parameter name for the adapter closure.
	(__bind $d:expr, $func:expr, $name:expr, [$(($bound:ident $val:expr))*],
		[$next:ident $($names:ident)*], $arg:expr $(, $rest:expr)*) => {
		$crate::gl_checked!(__bind $d, $func, $name, [$(($bound $val))* ($next $arg)],
			[$($names)*] $(, $rest)*)
	};

	(__bind $d:expr, $func:expr, $name:expr, [$(($bound:ident $val:expr))*],
		[$($names:ident)*]) => {
		$crate::Dispatch::dispatch(
			&$d,
			$crate::CallSite::new($name, file!(), line!()),
			move |$($bound),*| unsafe { $func($($bound),*) },
			($($val,)*),
		)
	};

	($d:expr, unsafe $func:expr $(, $arg:expr)*) => {
		$crate::gl_checked!(__bind $d, $func, stringify!($func), [],
			[a0 a1 a2 a3 a4 a5 a6 a7 a8 a9 a10 a11] $(, $arg)*)
	};

	($d:expr, $func:expr $(, $arg:expr)*) => {
		$crate::Dispatch::dispatch(
			&$d,
			$crate::CallSite::new(stringify!($func), file!(), line!()),
			$func,
			($($arg,)*),
		)
	};
}

/// [`gl_checked!`] when built with `log-errors` or `log-all`, the bare call
/// `func(args..)` otherwise.
#[cfg(feature = "log-errors")]
#[macro_export]
macro_rules! gl {
	($($tokens:tt)*) => {
		$crate::gl_checked!($($tokens)*)
	};
}

#[cfg(not(feature = "log-errors"))]
#[macro_export]
macro_rules! gl {
	($d:expr, unsafe $func:expr $(, $arg:expr)*) => {{
		let _ = &$d;
		#[allow(unused_unsafe)]
		let result = unsafe { $func($($arg),*) };
		result
	}};

	($d:expr, $func:expr $(, $arg:expr)*) => {{
		let _ = &$d;
		$func($($arg),*)
	}};
}
