// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use tracing_subscriber::EnvFilter;


fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Installs the global subscriber, writing to stderr so answers on stdout stay clean.
pub(crate) fn init(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}


#[test]
fn verbosity_levels() {
	assert_eq!(default_directive(0), "warn");
	assert_eq!(default_directive(1), "info");
	assert_eq!(default_directive(2), "debug");
	assert_eq!(default_directive(3), "trace");
	assert_eq!(default_directive(u8::MAX), "trace");
}
