// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
enum Play { Rock = 1, Paper = 2, Scissors = 3 }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
enum End { Lose = 0, Draw = 3, Win = 6 }

/// The opponent's play and the second column, read either as your play or as the desired end.
struct Round<SecondColumn>(Play, SecondColumn);


fn input_rounds_from_str<SecondColumn: std::str::FromStr<Err = parsing::ColumnError>>(s: &str)
-> Result<Vec<Round<SecondColumn>>, parsing::RoundsError> {
	let rounds = parsing::rounds_from_str(s).collect::<Result<Vec<_>, _>>()?;
	tracing::debug!(rounds = rounds.len(), "parsed strategy guide");
	Ok(rounds)
}


fn part1_impl(input_rounds: impl Iterator<Item = Round<Play>>) -> u64 {
	input_rounds.map(|round| {
		use {Play::*, End::*, Round as R};
		round.1 as u64 + match round {
			R(Rock, Scissors) | R(Paper, Rock) | R(Scissors, Paper) => Lose as u64,
			R(Rock, Rock) | R(Paper, Paper) | R(Scissors, Scissors) => Draw as u64,
			R(Rock, Paper) | R(Paper, Scissors) | R(Scissors, Rock) => Win as u64,
		}
	}).sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::RoundsError> {
	Ok(part1_impl(input_rounds_from_str(input)?.into_iter()))
}


fn part2_impl(input_rounds: impl Iterator<Item = Round<End>>) -> u64 {
	input_rounds.map(|round| {
		use {Play::*, End::*, Round as R};
		round.1 as u64 + match round {
			R(Paper, Lose) | R(Rock, Draw) | R(Scissors, Win) => Rock as u64,
			R(Scissors, Lose) | R(Paper, Draw) | R(Rock, Win) => Paper as u64,
			R(Rock, Lose) | R(Scissors, Draw) | R(Paper, Win) => Scissors as u64,
		}
	}).sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::RoundsError> {
	Ok(part2_impl(input_rounds_from_str(input)?.into_iter()))
}


pub(crate) mod parsing {
	use {std::{iter::once, str::FromStr}, either::Either, itertools::Itertools as _};
	use super::{Play, End, Round};

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum ColumnError {
		#[error("expected a single character, found {len}")]
		Format { len: usize },
		#[error("{found:?} belongs in the other column")]
		WrongColumn { found: char },
		#[error("invalid character {found:?}")]
		Invalid { found: char },
	}

	fn exactly_one_char(s: &str) -> Result<char, ColumnError> {
		s.chars().exactly_one().map_err(|chars| ColumnError::Format { len: chars.count() })
	}

	fn opponent_play_from_str(s: &str) -> Result<Play, ColumnError> {
		use Play::*;
		match exactly_one_char(s)? {
			'A' => Ok(Rock),
			'B' => Ok(Paper),
			'C' => Ok(Scissors),
			found @ ('X' | 'Y' | 'Z') => Err(ColumnError::WrongColumn { found }),
			found => Err(ColumnError::Invalid { found }),
		}
	}

	impl FromStr for Play {
		type Err = ColumnError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use Play::*;
			match exactly_one_char(s)? {
				'X' => Ok(Rock),
				'Y' => Ok(Paper),
				'Z' => Ok(Scissors),
				found @ ('A' | 'B' | 'C') => Err(ColumnError::WrongColumn { found }),
				found => Err(ColumnError::Invalid { found }),
			}
		}
	}

	impl FromStr for End {
		type Err = ColumnError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use End::*;
			match exactly_one_char(s)? {
				'X' => Ok(Lose),
				'Y' => Ok(Draw),
				'Z' => Ok(Win),
				found @ ('A' | 'B' | 'C') => Err(ColumnError::WrongColumn { found }),
				found => Err(ColumnError::Invalid { found }),
			}
		}
	}

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum RoundError {
		#[error("expected two space-separated columns")]
		Format,
		#[error("first column: {0}")]
		Opponent(#[source] ColumnError),
		#[error("second column: {0}")]
		SecondColumn(#[source] ColumnError),
	}

	impl<SecondColumn: FromStr<Err = ColumnError>> FromStr for Round<SecondColumn> {
		type Err = RoundError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (opponent, second_column) = s.trim().split_once(' ')
				.ok_or(RoundError::Format)?;
			Ok(Round(
				opponent_play_from_str(opponent).map_err(RoundError::Opponent)?,
				second_column.parse().map_err(RoundError::SecondColumn)?,
			))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RoundsError {
		#[error("empty input")]
		Empty,
		#[error("line {line}: invalid round")]
		Round { line: usize, source: RoundError },
	}

	pub(super) fn rounds_from_str<'s, SecondColumn: FromStr<Err = ColumnError> + 's>(s: &'s str)
	-> impl Iterator<Item = Result<Round<SecondColumn>, RoundsError>> + 's {
		if s.trim().is_empty() { return Either::Left(once(Err(RoundsError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| RoundsError::Round { line: l + 1, source: e })))
	}
}
