// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Rucksack<'s>(&'s str);

/// Set of item types, bit `n` standing for the item of priority `n`.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
struct Items(u64);

impl Items {
	fn from_bytes(bytes: &[u8]) -> Self {
		Items(bytes.iter().fold(0, |acc, &b| acc | 1 << priority(b)))
	}

	fn intersection(self, other: Items) -> Items {
		Items(self.0 & other.0)
	}

	fn exactly_one_priority(self) -> Option<u64> {
		(self.0.count_ones() == 1).then(|| self.0.trailing_zeros() as u64)
	}
}

fn priority(item: u8) -> u64 {
	u64::from(if item >= b'a' { 1 + item - b'a' } else { 27 + item - b'A' })
}

impl Rucksack<'_> {
	fn compartments(&self) -> [Items; 2] {
		let (left, right) = self.0.as_bytes().split_at(self.0.len() / 2);
		[Items::from_bytes(left), Items::from_bytes(right)]
	}

	fn items(&self) -> Items {
		Items::from_bytes(self.0.as_bytes())
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Day03Error {
	#[error(transparent)]
	Parse(#[from] parsing::RucksacksError),
	#[error("rucksack {rucksack}: expected exactly one common item, found {found}")]
	CommonItems { rucksack: usize, found: u32 },
	#[error("{len} rucksacks cannot be split into groups of three")]
	IncompleteGroup { len: usize },
}

fn common_priority(rucksack: usize, items: Items) -> Result<u64, Day03Error> {
	let priority = items.exactly_one_priority()
		.ok_or(Day03Error::CommonItems { rucksack, found: items.0.count_ones() })?;
	tracing::trace!(rucksack, priority, "common item");
	Ok(priority)
}


fn input_rucksacks_from_str(s: &str) -> Result<Vec<Rucksack<'_>>, parsing::RucksacksError> {
	let rucksacks = parsing::rucksacks_from_str(s).collect::<Result<Vec<_>, _>>()?;
	tracing::debug!(rucksacks = rucksacks.len(), "parsed rucksacks");
	Ok(rucksacks)
}


fn part1_impl(input_rucksacks: &[Rucksack<'_>]) -> Result<u64, Day03Error> {
	input_rucksacks.iter()
		.enumerate()
		.map(|(r, rucksack)| {
			let [left, right] = rucksack.compartments();
			common_priority(r + 1, left.intersection(right))
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, Day03Error> {
	part1_impl(&input_rucksacks_from_str(input)?)
}


fn part2_impl(input_rucksacks: &[Rucksack<'_>]) -> Result<u64, Day03Error> {
	if input_rucksacks.len() % 3 != 0 {
		return Err(Day03Error::IncompleteGroup { len: input_rucksacks.len() })
	}
	input_rucksacks.chunks_exact(3)
		.enumerate()
		.map(|(g, group)| {
			let badge = group.iter()
				.map(Rucksack::items)
				.fold(Items(u64::MAX), Items::intersection);
			common_priority(3 * g + 1, badge)
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, Day03Error> {
	part2_impl(&input_rucksacks_from_str(input)?)
}


pub(crate) mod parsing {
	use super::Rucksack;

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum RucksackError {
		#[error("odd number of items ({0})")]
		OddLen(usize),
		#[error("invalid item {0:?}")]
		InvalidItem(char),
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			use RucksackError::*;
			if let Some(c) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
				return Err(InvalidItem(c))
			}
			if s.len() % 2 != 0 { return Err(OddLen(s.len())) }
			Ok(Rucksack(s))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RucksacksError {
		#[error("empty input")]
		Empty,
		#[error("line {line}: invalid rucksack")]
		Rucksack { line: usize, source: RucksackError },
	}

	pub(super) fn rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack<'_>, RucksacksError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.trim().is_empty() { return Left(once(Err(RucksacksError::Empty))) }
		Right(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().try_into()
				.map_err(|e| RucksacksError::Rucksack { line: l + 1, source: e })))
	}
}
