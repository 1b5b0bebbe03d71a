// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod cli;
mod logging;
mod util;
util::mod_days![01, 02, 03, 04, 05, 06, 07];

fn main() -> anyhow::Result<()> {
	use {anyhow::Context as _, clap::Parser as _, cli::{Cli, Part}};

	let cli = Cli::parse();
	logging::init(cli.verbose);

	let input = util::read_input(&cli.input_file)
		.with_context(|| format!("reading input from {}", cli.input_file.display()))?;
	tracing::info!(day = cli.day, bytes = input.len(), "solving");

	match cli.part {
		Some(part) => println!("{}", solve(cli.day, part, &input)?),
		None => println!("Day {}; part 1: {}, part 2: {}", cli.day,
			solve(cli.day, Part::One, &input)?, solve(cli.day, Part::Two, &input)?),
	}
	Ok(())
}


#[test]
fn solves_by_day() {
	let input = "2-4,6-8\n2-8,3-7\n";
	assert_eq!(solve(4, cli::Part::One, input).unwrap(), "1");
	assert_eq!(solve(4, cli::Part::Two, input).unwrap(), "1");

	let err = solve(7, cli::Part::One, "ls\n").unwrap_err();
	assert_eq!(err.to_string(), "day 7, part 1");

	assert!(solve(8, cli::Part::One, "").is_err());
}
