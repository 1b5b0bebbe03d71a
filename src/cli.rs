// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::PathBuf;
use clap::{Parser, ValueEnum};


/// Advent of Code 2022 puzzle solutions
#[derive(Parser, Debug)]
#[command(name = "advent22", version)]
pub(crate) struct Cli {
	/// Puzzle day to solve
	#[arg(value_parser = clap::value_parser!(u8).range(1..=7))]
	pub(crate) day: u8,

	/// Puzzle input file; `-` reads from standard input
	#[arg(default_value = "-")]
	pub(crate) input_file: PathBuf,

	/// Only solve the given part
	#[arg(short, long)]
	pub(crate) part: Option<Part>,

	/// Increase log verbosity (repeatable); `RUST_LOG` takes precedence
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub(crate) verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Part {
	#[value(name = "1")]
	One,
	#[value(name = "2")]
	Two,
}

impl std::fmt::Display for Part {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Part::One => f.write_str("1"),
			Part::Two => f.write_str("2"),
		}
	}
}
