// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// A datastream buffer of lowercase ASCII letters.
struct Datastream<'s>(&'s [u8]);

impl Datastream<'_> {
	/// Number of characters processed once the last `N` received are all different.
	fn end_of_first_marker<const N: usize>(&self) -> Option<usize> {
		self.0.windows(N)
			.position(|w| w.iter()
				.try_fold(0_u32, |seen, b| {
					let bit = 1 << (b - b'a');
					((seen & bit) == 0).then_some(seen | bit)
				})
				.is_some())
			.map(|p| p + N)
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Day06Error {
	#[error(transparent)]
	Parse(#[from] parsing::DatastreamError),
	#[error("no {marker_len} different characters in a row among {len}")]
	NoMarker { marker_len: usize, len: usize },
}

fn part1and2_impl<const N: usize>(input: &str) -> Result<usize, Day06Error> {
	let datastream = parsing::datastream_from_str(input)?;
	let end = datastream.end_of_first_marker::<N>()
		.ok_or(Day06Error::NoMarker { marker_len: N, len: datastream.0.len() })?;
	tracing::debug!(marker_len = N, end, "found marker");
	Ok(end)
}

pub(crate) fn part1(input: &str) -> Result<usize, Day06Error> {
	part1and2_impl::<4>(input)
}

pub(crate) fn part2(input: &str) -> Result<usize, Day06Error> {
	part1and2_impl::<14>(input)
}


pub(crate) mod parsing {
	use super::Datastream;

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum DatastreamError {
		#[error("empty input")]
		Empty,
		#[error("column {column}: invalid character {found:?}")]
		InvalidChar { column: usize, found: char },
	}

	/// Only the first line holds the datastream.
	pub(super) fn datastream_from_str(s: &str) -> Result<Datastream<'_>, DatastreamError> {
		let line = s.lines().next().map(str::trim).unwrap_or_default();
		if line.is_empty() { return Err(DatastreamError::Empty) }
		if let Some((c, found)) = line.chars().enumerate().find(|(_, c)| !c.is_ascii_lowercase()) {
			return Err(DatastreamError::InvalidChar { column: c + 1, found })
		}
		Ok(Datastream(line.as_bytes()))
	}
}
