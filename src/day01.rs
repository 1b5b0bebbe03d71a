// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Sums consecutive calories, with `None` (a blank line) separating elves.
fn calories_per_elf(input_calories: impl Iterator<Item = Option<usize>>) -> impl Iterator<Item = usize> {
	use itertools::Itertools;
	input_calories
		.coalesce(|left, right|
			if let Some(right) = right {
				Ok(Some(left.unwrap_or(0) + right))
			} else {
				Err((left, Some(0)))
			})
		.flatten()
}


fn input_calories_from_str(s: &str) -> Result<Vec<Option<usize>>, parsing::CaloriesError> {
	let calories = parsing::calories_from_str(s).collect::<Result<Vec<_>, _>>()?;
	tracing::debug!(lines = calories.len(), "parsed calories");
	Ok(calories)
}


fn part1_impl(input_calories: impl Iterator<Item = Option<usize>>) -> usize {
	calories_per_elf(input_calories).max().unwrap_or_default()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::CaloriesError> {
	Ok(part1_impl(input_calories_from_str(input)?.into_iter()))
}


fn part2_impl(input_calories: impl Iterator<Item = Option<usize>>) -> usize {
	// Slot 0 takes the newcomer before sorting pushes the smallest back into it
	let mut top_three = [0; 4];
	for calories in calories_per_elf(input_calories) {
		if calories > top_three[1] {
			top_three[0] = calories;
			top_three.sort()
		}
	}
	top_three[1..].iter().sum()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::CaloriesError> {
	Ok(part2_impl(input_calories_from_str(input)?.into_iter()))
}


pub(crate) mod parsing {
	use {std::{iter::once, num::ParseIntError}, either::Either};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CaloriesError {
		#[error("empty input")]
		Empty,
		#[error("line {line}: invalid calories")]
		Invalid { line: usize, source: ParseIntError },
	}

	pub(super) fn calories_from_str(s: &str) -> impl Iterator<Item = Result<Option<usize>, CaloriesError>> + '_ {
		if s.trim().is_empty() { return Either::Left(once(Err(CaloriesError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| (!line.trim().is_empty())
				.then(|| line.trim().parse()
					.map_err(|e| CaloriesError::Invalid { line: l + 1, source: e }))
				.transpose()))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };

	#[test]
	fn example() {
		assert_eq!(part1(INPUT).unwrap(), 24_000);
		assert_eq!(part2(INPUT).unwrap(), 45_000);
	}

	#[test]
	fn fewer_than_three_elves() {
		assert_eq!(part1("300\n\n200\n").unwrap(), 300);
		assert_eq!(part2("300\n\n200\n").unwrap(), 500);
	}

	#[test]
	fn leading_blank_line() {
		assert_eq!(part1("\n100\n200\n\n50\n").unwrap(), 300);
		assert_eq!(part2("\n100\n200\n\n50\n").unwrap(), 350);
	}

	#[test]
	fn errors() {
		assert!(matches!(part1(""), Err(parsing::CaloriesError::Empty)));
		assert!(matches!(part2("\n\n"), Err(parsing::CaloriesError::Empty)));
		assert!(matches!(part1("100\n\nlots\n"),
			Err(parsing::CaloriesError::Invalid { line: 3, .. })));
	}
}
