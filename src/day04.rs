// Copyright (c) 2022 Bastiaan Marinus van de Weerd


type Assignment = std::ops::RangeInclusive<u32>;
struct AssignmentsPair([Assignment; 2]);

trait RangeInclusiveExt {
	fn contains_range(&self, other: &Self) -> bool;
	fn overlaps_range(&self, other: &Self) -> bool;
}

impl<T: PartialOrd> RangeInclusiveExt for std::ops::RangeInclusive<T> {
	fn contains_range(&self, other: &Self) -> bool {
		*self.start() <= *other.start() && *self.end() >= *other.end()
	}

	fn overlaps_range(&self, other: &Self) -> bool {
		*self.start() <= *other.end() && *self.end() >= *other.start()
	}
}


fn input_assignments_pairs_from_str(s: &str) -> Result<Vec<AssignmentsPair>, parsing::AssignmentsPairsError> {
	let pairs = parsing::assignments_pairs_from_str(s).collect::<Result<Vec<_>, _>>()?;
	tracing::debug!(pairs = pairs.len(), "parsed section assignments");
	Ok(pairs)
}


fn count_pairs(
	input: &str,
	predicate: impl Fn(&Assignment, &Assignment) -> bool,
) -> Result<usize, parsing::AssignmentsPairsError> {
	Ok(input_assignments_pairs_from_str(input)?.iter()
		.filter(|AssignmentsPair([left, right])| predicate(left, right))
		.count())
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::AssignmentsPairsError> {
	count_pairs(input, |left, right| left.contains_range(right) || right.contains_range(left))
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::AssignmentsPairsError> {
	count_pairs(input, |left, right| left.overlaps_range(right))
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Assignment, AssignmentsPair};

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum AssignmentError {
		#[error("expected `start-end`")]
		NoHyphen,
		#[error("invalid start")]
		Start(#[source] ParseIntError),
		#[error("invalid end")]
		End(#[source] ParseIntError),
		#[error("end {end} precedes start {start}")]
		Negative { start: u32, end: u32 },
	}

	fn assignment_from_str(s: &str) -> Result<Assignment, AssignmentError> {
		let (start, end) = s.split_once('-').ok_or(AssignmentError::NoHyphen)?;
		let start = start.trim().parse().map_err(AssignmentError::Start)?;
		let end = end.trim().parse().map_err(AssignmentError::End)?;
		if end < start { return Err(AssignmentError::Negative { start, end }) }
		Ok(start..=end)
	}

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum AssignmentsPairError {
		#[error("expected two comma-separated assignments")]
		NoComma,
		#[error("left assignment: {0}")]
		Left(#[source] AssignmentError),
		#[error("right assignment: {0}")]
		Right(#[source] AssignmentError),
	}

	impl FromStr for AssignmentsPair {
		type Err = AssignmentsPairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',').ok_or(AssignmentsPairError::NoComma)?;
			Ok(AssignmentsPair([
				assignment_from_str(left).map_err(AssignmentsPairError::Left)?,
				assignment_from_str(right).map_err(AssignmentsPairError::Right)?,
			]))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum AssignmentsPairsError {
		#[error("empty input")]
		Empty,
		#[error("line {line}: invalid assignments pair")]
		Pair { line: usize, source: AssignmentsPairError },
	}

	pub(super) fn assignments_pairs_from_str(s: &str) -> impl Iterator<Item = Result<AssignmentsPair, AssignmentsPairsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.trim().is_empty() { return Left(once(Err(AssignmentsPairsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| AssignmentsPairsError::Pair { line: l + 1, source: e })))
	}
}
