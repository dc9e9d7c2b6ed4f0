//! `env_logger` setup for assertion tests
//!
//! Both crates log through `tracing`, built with its `log` feature: with no
//! subscriber installed, every event is re-emitted as a `log` record under its
//! module path (`dbassert_query::backends::sqlite`, `dbassert_test::database`).
//! Installing `env_logger` is therefore enough to see issued SQL, counts and
//! sampling warnings.

use env_logger::Env;
use std::sync::Once;

/// Filter used when `RUST_LOG` is unset: only the "count positive but sample
/// empty" warnings
pub const DEFAULT_FILTER: &str = "dbassert_query=warn,dbassert_test=warn";

static INIT: Once = Once::new();

/// Install a test-mode `env_logger` the first time it is called
///
/// Later calls, and calls after another logger was installed, do nothing.
/// Set `RUST_LOG=dbassert_query=debug` to print every count and select.
///
/// # Examples
///
/// ```
/// use dbassert_test::logging::init_test_logging;
///
/// init_test_logging();
/// init_test_logging();
/// ```
pub fn init_test_logging() {
	INIT.call_once(|| {
		let _ = builder().try_init();
	});
}

fn builder() -> env_logger::Builder {
	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
	builder.is_test(true).format_target(true);
	builder
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_filter_stops_at_warn() {
		let logger = env_logger::Builder::new().parse_filters(DEFAULT_FILTER).build();

		assert_eq!(format!("{:?}", logger.filter()), "Warn");
	}

	#[rstest]
	fn test_repeated_init_is_harmless() {
		init_test_logging();
		init_test_logging();
	}
}
