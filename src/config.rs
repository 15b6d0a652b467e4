//! Build-time selection of how much the dispatcher reports.
//!
//! The level is chosen with Cargo features: `log-errors` reports failing
//! calls, `log-all` additionally echoes every call. With neither, calls are
//! made bare. Levels are types, so a disabled branch is removed when the
//! dispatcher is monomorphized rather than skipped at run time.

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Verbosity {
	Off,
	ErrorsOnly,
	All,
}

pub trait Level {
	const VERBOSITY: Verbosity;
	/// Emit `<name><args>` before each call.
	const LOG_CALLS: bool;
	/// Query the error register after each call and report failures.
	const LOG_ERRORS: bool;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Off;

#[derive(Copy, Clone, Debug, Default)]
pub struct ErrorsOnly;

#[derive(Copy, Clone, Debug, Default)]
pub struct All;

impl Level for Off {
	const VERBOSITY: Verbosity = Verbosity::Off;
	const LOG_CALLS: bool = false;
	const LOG_ERRORS: bool = false;
}

impl Level for ErrorsOnly {
	const VERBOSITY: Verbosity = Verbosity::ErrorsOnly;
	const LOG_CALLS: bool = false;
	const LOG_ERRORS: bool = true;
}

impl Level for All {
	const VERBOSITY: Verbosity = Verbosity::All;
	const LOG_CALLS: bool = true;
	const LOG_ERRORS: bool = true;
}

#[cfg(feature = "log-all")]
pub type Configured = All;

#[cfg(all(feature = "log-errors", not(feature = "log-all")))]
pub type Configured = ErrorsOnly;

#[cfg(not(feature = "log-errors"))]
pub type Configured = Off;

/// The level this crate was compiled with.
pub const VERBOSITY: Verbosity = <Configured as Level>::VERBOSITY;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn levels_are_ordered() {
		assert!(!Off::LOG_CALLS && !Off::LOG_ERRORS);
		assert!(!ErrorsOnly::LOG_CALLS && ErrorsOnly::LOG_ERRORS);
		assert!(All::LOG_CALLS && All::LOG_ERRORS);
	}

	#[test]
	fn configured_matches_features() {
		let expected = if cfg!(feature = "log-all") {
			Verbosity::All
		} else if cfg!(feature = "log-errors") {
			Verbosity::ErrorsOnly
		} else {
			Verbosity::Off
		};
		assert_eq!(VERBOSITY, expected);
	}
}
