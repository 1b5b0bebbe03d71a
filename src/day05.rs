// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Crate(u8);

#[cfg_attr(test, derive(Debug))]
struct Stacks(Vec<Vec<Crate>>);

#[cfg_attr(test, derive(Debug))]
struct Step {
	num_crates: std::num::NonZeroUsize,
	from_stack: usize,
	to_stack: usize,
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Day05Error {
	#[error(transparent)]
	Parse(#[from] parsing::StacksAndStepsError),
	#[error("step {step}: cannot move {num_crates} crates off stack {stack} holding {held}")]
	NotEnoughCrates { step: usize, stack: usize, held: usize, num_crates: usize },
}

impl Stacks {
	fn take(&mut self, s: usize, step: &Step) -> Result<Vec<Crate>, Day05Error> {
		let from = &mut self.0[step.from_stack];
		let (held, num_crates) = (from.len(), step.num_crates.get());
		if held < num_crates {
			return Err(Day05Error::NotEnoughCrates { step: s + 1, stack: step.from_stack + 1, held, num_crates })
		}
		Ok(from.split_off(held - num_crates))
	}

	fn tops(&self) -> String {
		self.0.iter()
			.filter_map(|stack| stack.last())
			.map(|crat| crat.0 as char)
			.collect()
	}
}


fn part1and2_impl(input: &str, rearrange: impl Fn(&mut Vec<Crate>)) -> Result<String, Day05Error> {
	let (mut stacks, steps) = parsing::try_stacks_and_steps_from_str(input)?;
	tracing::debug!(stacks = stacks.0.len(), steps = steps.len(), "parsed stacks and steps");

	for (s, step) in steps.iter().enumerate() {
		let mut crates = stacks.take(s, step)?;
		rearrange(&mut crates);
		stacks.0[step.to_stack].extend(crates);
	}

	Ok(stacks.tops())
}

/// The CrateMover 9000 moves crates one at a time, reversing their order.
pub(crate) fn part1(input: &str) -> Result<String, Day05Error> {
	part1and2_impl(input, |crates| crates.reverse())
}

/// The CrateMover 9001 moves crates all at once.
pub(crate) fn part2(input: &str) -> Result<String, Day05Error> {
	part1and2_impl(input, |_| ())
}


pub(crate) mod parsing {
	use {std::num::{NonZeroUsize, ParseIntError}, itertools::Itertools as _};
	use super::{Crate, Stacks, Step};

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum StacksError {
		#[error("missing drawing of the stacks")]
		Empty,
		#[error("no stack labels")]
		NoLabels,
		#[error("column {column}: unexpected stack label {found:?}")]
		Label { column: usize, found: char },
		#[error("line {line}, column {column}: crate above an empty spot")]
		FloatingCrate { line: usize, column: usize },
	}

	fn try_stacks_from_lines(drawing: &[&str]) -> Result<Stacks, StacksError> {
		use StacksError::*;

		let (labels, rows) = drawing.split_last().ok_or(Empty)?;
		let mut stacks: Vec<Vec<Crate>> = vec![];

		for (c, b) in labels.bytes().enumerate().filter(|(_, b)| !b.is_ascii_whitespace()) {
			if !b.is_ascii_digit() || usize::from(b - b'0') != stacks.len() + 1 {
				return Err(Label { column: c + 1, found: b as char })
			}

			// Bottom to top, with the 1-based line number of each row
			let mut column = rows.iter().rev().enumerate()
				.map(|(r, row)| (rows.len() - r, row.as_bytes().get(c).copied()));

			let mut stack = vec![];
			for (_, b) in &mut column {
				match b {
					Some(b) if b.is_ascii_uppercase() => stack.push(Crate(b)),
					_ => break,
				}
			}
			if let Some((line, _)) = column.find(|(_, b)| matches!(b, Some(b) if b.is_ascii_uppercase())) {
				return Err(FloatingCrate { line, column: c + 1 })
			}

			stacks.push(stack);
		}

		if stacks.is_empty() { return Err(NoLabels) }
		Ok(Stacks(stacks))
	}

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum StepError {
		#[error("expected `move N from A to B`")]
		Format,
		#[error("invalid number of crates")]
		NumCrates(#[source] ParseIntError),
		#[error("invalid stack to move from")]
		FromStack(#[source] ParseIntError),
		#[error("invalid stack to move to")]
		ToStack(#[source] ParseIntError),
		#[error("moving within the same stack")]
		SameStack,
	}

	impl std::str::FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			type Words<'s> = (&'s str, &'s str, &'s str, &'s str, &'s str, &'s str);
			let (num_crates, from_stack, to_stack) = match s.split_whitespace().collect_tuple::<Words<'_>>() {
				Some(("move", num_crates, "from", from_stack, "to", to_stack)) =>
					(num_crates, from_stack, to_stack),
				_ => return Err(StepError::Format),
			};
			let num_crates = num_crates.parse().map_err(StepError::NumCrates)?;
			let from_stack = from_stack.parse::<NonZeroUsize>().map_err(StepError::FromStack)?;
			let to_stack = to_stack.parse::<NonZeroUsize>().map_err(StepError::ToStack)?;
			if from_stack == to_stack { return Err(StepError::SameStack) }
			Ok(Step { num_crates, from_stack: from_stack.get() - 1, to_stack: to_stack.get() - 1 })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum StacksAndStepsError {
		#[error("invalid stacks drawing")]
		Stacks(#[source] StacksError),
		#[error("no rearrangement steps")]
		NoSteps,
		#[error("line {line}: invalid step")]
		Step { line: usize, source: StepError },
		#[error("line {line}: no stack {from_stack} to move from")]
		InvalidFromStack { line: usize, from_stack: usize },
		#[error("line {line}: no stack {to_stack} to move to")]
		InvalidToStack { line: usize, to_stack: usize },
	}

	pub(super) fn try_stacks_and_steps_from_str(s: &str) -> Result<(Stacks, Vec<Step>), StacksAndStepsError> {
		let mut lines = s.lines().enumerate();

		let drawing = (&mut lines)
			.take_while(|(_, line)| !line.trim().is_empty())
			.map(|(_, line)| line)
			.collect::<Vec<_>>();
		let stacks = try_stacks_from_lines(&drawing).map_err(StacksAndStepsError::Stacks)?;

		let stacks_range = 0..stacks.0.len();
		let steps = lines
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| {
				let step = line.parse()
					.map_err(|e| StacksAndStepsError::Step { line: l + 1, source: e })?;
				let Step { from_stack, to_stack, .. } = step;
				if !stacks_range.contains(&from_stack) { return Err(
					StacksAndStepsError::InvalidFromStack { line: l + 1, from_stack: from_stack + 1 }) }
				if !stacks_range.contains(&to_stack) { return Err(
					StacksAndStepsError::InvalidToStack { line: l + 1, to_stack: to_stack + 1 }) }
				Ok(step)
			})
			.collect::<Result<Vec<_>, _>>()?;
		if steps.is_empty() { return Err(StacksAndStepsError::NoSteps) }

		Ok((stacks, steps))
	}
}
