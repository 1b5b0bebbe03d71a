// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{io::Read as _, path::Path};


/// Declares the `dayNN` modules and a `solve` function dispatching to their
/// `part1` and `part2` functions.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	fn solve(day: u8, part: crate::cli::Part, input: &str) -> anyhow::Result<String> {
		use {anyhow::Context as _, crate::cli::Part};
		match day {
			$( $day => match part {
				Part::One => [<day $day>]::part1(input).map(|answer| answer.to_string()),
				Part::Two => [<day $day>]::part2(input).map(|answer| answer.to_string()),
			}.with_context(|| format!("day {}, part {part}", $day)), )*
			_ => anyhow::bail!("day {day} has no solution"),
		}
	}
} } }

pub(crate) use mod_days;


/// Reads the whole puzzle input, from standard input if `path` is `-`.
pub(crate) fn read_input(path: &Path) -> std::io::Result<String> {
	if path.as_os_str() == "-" {
		let mut input = String::new();
		std::io::stdin().lock().read_to_string(&mut input)?;
		tracing::debug!(bytes = input.len(), "read input from stdin");
		Ok(input)
	} else {
		let input = std::fs::read_to_string(path)?;
		tracing::debug!(bytes = input.len(), path = %path.display(), "read input from file");
		Ok(input)
	}
}


#[cfg(test)]
mod tests {
	use std::io::Write as _;
	use super::read_input;

	#[test]
	fn reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "$ cd /\n$ ls\n").unwrap();
		assert_eq!(read_input(file.path()).unwrap(), "$ cd /\n$ ls\n");
	}

	#[test]
	fn missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_input(&dir.path().join("day07.txt")).unwrap_err();
		assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
	}
}
