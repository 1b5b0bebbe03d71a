// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::BTreeMap;


/// A command line of a shell transcript, with the lines it printed.
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub(crate) struct Record<'s> {
	command: &'s str,
	output: Vec<&'s str>,
}

#[cfg_attr(test, derive(Debug))]
enum Command<'s> {
	CdRoot,
	CdUp,
	CdInto(&'s str),
	Ls,
}

#[cfg_attr(test, derive(Debug))]
enum Listing<'s> {
	Dir,
	File { name: &'s str, size: u64 },
}

/// Components from the root, which itself is the empty path.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Path<'s>(Vec<&'s str>);

impl<'s> Path<'s> {
	fn root() -> Self {
		Path(vec![])
	}

	fn join(&self, name: &'s str) -> Self {
		Path(self.0.iter().copied().chain([name]).collect())
	}

	/// Strict prefixes, parent first and the root last.
	fn ancestors(&self) -> impl Iterator<Item = Path<'s>> + '_ {
		(0..self.0.len()).rev().map(|len| Path(self.0[..len].to_vec()))
	}
}

#[cfg(test)]
impl<'s, const N: usize> From<[&'s str; N]> for Path<'s> {
	fn from(components: [&'s str; N]) -> Self {
		Path(components.to_vec())
	}
}

impl std::fmt::Display for Path<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.0.is_empty() { return f.write_str("/") }
		self.0.iter().try_for_each(|component| write!(f, "/{component}"))
	}
}

/// File sizes by path.
pub(crate) type Files<'s> = BTreeMap<Path<'s>, u64>;

/// Total size of every file below a directory, by directory path.
pub(crate) type DirSizes<'s> = BTreeMap<Path<'s>, u64>;


#[derive(Debug, thiserror::Error)]
#[error("command {record} (`$ {command}`): {kind}")]
pub(crate) struct ReplayError {
	record: usize,
	command: String,
	kind: ReplayErrorKind,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ReplayErrorKind {
	#[error("unrecognized command")]
	InvalidCommand,
	#[error("cannot change out of the root directory")]
	CdUpFromRoot,
	#[error("unparseable output line {output_line}: {found:?}")]
	InvalidListing { output_line: usize, found: String },
}

/// Replays `records` from the root directory, collecting every listed file.
///
/// Directories are only known through the files listed in them. A file
/// listed twice keeps the size it was listed with last.
pub(crate) fn reconstruct<'s>(records: &[Record<'s>]) -> Result<Files<'s>, ReplayError> {
	let mut cwd = Path::root();
	let mut files = Files::new();

	for (r, record) in records.iter().enumerate() {
		let err = |kind: ReplayErrorKind|
			ReplayError { record: r + 1, command: record.command.to_owned(), kind };

		let command = Command::try_from(record.command)
			.map_err(|_| err(ReplayErrorKind::InvalidCommand))?;
		tracing::trace!(record = r + 1, command = record.command, %cwd, "replaying");

		match command {
			Command::CdRoot => cwd.0.clear(),
			Command::CdUp => if cwd.0.pop().is_none() {
				return Err(err(ReplayErrorKind::CdUpFromRoot))
			},
			Command::CdInto(name) => cwd.0.push(name),
			Command::Ls => for (o, &line) in record.output.iter().enumerate() {
				let listing = Listing::try_from(line).map_err(|_| err(ReplayErrorKind::InvalidListing {
					output_line: o + 1, found: line.to_owned() }))?;
				let Listing::File { name, size } = listing else { continue };
				let path = cwd.join(name);
				match files.insert(path, size) {
					Some(prev_size) if prev_size != size => tracing::debug!(
						%cwd, name, prev_size, size, "file listed again with a different size"),
					_ => (),
				}
			},
		}
	}

	Ok(files)
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("total size of {dir} exceeds {}", u64::MAX)]
pub(crate) struct SizeOverflowError {
	dir: String,
}

/// Sums file sizes into every directory containing them, the root included.
pub(crate) fn aggregate<'a, 's: 'a>(files: impl IntoIterator<Item = (&'a Path<'s>, &'a u64)>)
-> Result<DirSizes<'s>, SizeOverflowError> {
	let mut dir_sizes = DirSizes::from([(Path::root(), 0)]);
	for (path, &size) in files {
		for dir in path.ancestors() {
			let total = dir_sizes.get(&dir).copied().unwrap_or_default().checked_add(size)
				.ok_or_else(|| SizeOverflowError { dir: dir.to_string() })?;
			dir_sizes.insert(dir, total);
		}
	}
	Ok(dir_sizes)
}

fn total_size_at_most(dir_sizes: &DirSizes<'_>, threshold: u64) -> Option<u64> {
	dir_sizes.values()
		.filter(|&&size| size <= threshold)
		.try_fold(0_u64, |sum, &size| sum.checked_add(size))
}

fn smallest_at_least(dir_sizes: &DirSizes<'_>, deficit: u64) -> Option<u64> {
	dir_sizes.values().copied().filter(|&size| size >= deficit).min()
}


const SMALL_DIR_MAX_SIZE: u64 = 100_000;
const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Day07Error {
	#[error(transparent)]
	Transcript(#[from] parsing::TranscriptError),
	#[error(transparent)]
	Replay(#[from] ReplayError),
	#[error(transparent)]
	SizeOverflow(#[from] SizeOverflowError),
	#[error("sum of directories of at most {threshold} in size exceeds {}", u64::MAX)]
	SmallDirsOverflow { threshold: u64 },
	#[error("no directory is at least {deficit} in size")]
	NoDirLargeEnough { deficit: u64 },
}

fn input_dir_sizes_from_str(s: &str) -> Result<DirSizes<'_>, Day07Error> {
	let records = parsing::transcript_from_str(s)?;
	let files = reconstruct(&records)?;
	let dir_sizes = aggregate(&files)?;
	tracing::debug!(records = records.len(), files = files.len(), dirs = dir_sizes.len(),
		"reconstructed filesystem");
	Ok(dir_sizes)
}


pub(crate) fn part1(input: &str) -> Result<u64, Day07Error> {
	let dir_sizes = input_dir_sizes_from_str(input)?;
	total_size_at_most(&dir_sizes, SMALL_DIR_MAX_SIZE)
		.ok_or(Day07Error::SmallDirsOverflow { threshold: SMALL_DIR_MAX_SIZE })
}


pub(crate) fn part2(input: &str) -> Result<u64, Day07Error> {
	let dir_sizes = input_dir_sizes_from_str(input)?;
	let used = dir_sizes.get(&Path::root()).copied().unwrap_or_default();
	let deficit = used.saturating_sub(DISK_SIZE - UPDATE_SIZE);
	smallest_at_least(&dir_sizes, deficit).ok_or(Day07Error::NoDirLargeEnough { deficit })
}


pub(crate) mod parsing {
	use super::{Command, Listing, Record};

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	pub(crate) enum TranscriptError {
		#[error("line {line}: expected a command starting with `$`")]
		ExpectedCommand { line: usize },
	}

	/// Groups trimmed lines into records, each starting at a line prefixed with `$`.
	pub(crate) fn transcript_from_str(s: &str) -> Result<Vec<Record<'_>>, TranscriptError> {
		let mut records: Vec<Record<'_>> = vec![];
		for (l, line) in s.lines().map(str::trim).enumerate() {
			if let Some(command) = line.strip_prefix('$') {
				records.push(Record { command: command.trim(), output: vec![] })
			} else if let Some(record) = records.last_mut() {
				record.output.push(line)
			} else {
				return Err(TranscriptError::ExpectedCommand { line: l + 1 })
			}
		}
		Ok(records)
	}

	impl<'s> TryFrom<&'s str> for Command<'s> {
		type Error = ();
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			match s.split_whitespace().collect::<Vec<_>>()[..] {
				["cd", "/"] => Ok(Command::CdRoot),
				["cd", ".."] => Ok(Command::CdUp),
				["cd", name] => Ok(Command::CdInto(name)),
				["ls"] => Ok(Command::Ls),
				_ => Err(()),
			}
		}
	}

	impl<'s> TryFrom<&'s str> for Listing<'s> {
		type Error = ();
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			match s.split_whitespace().collect::<Vec<_>>()[..] {
				["dir", _] => Ok(Listing::Dir),
				[size, name] => Ok(Listing::File { name, size: size.parse().map_err(|_| ())? }),
				_ => Err(()),
			}
		}
	}
}


#[cfg(test)]
mod tests {
	use super::{*, parsing::{transcript_from_str, TranscriptError}};

	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };

	const SMALL_INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		$ cd a
		$ ls
		29116 f
	" };

	fn files<'s>(s: &'s str) -> Files<'s> {
		reconstruct(&transcript_from_str(s).unwrap()).unwrap()
	}

	fn replay_err(s: &str) -> ReplayError {
		reconstruct(&transcript_from_str(s).unwrap()).unwrap_err()
	}

	#[test]
	fn example() {
		assert_eq!(part1(INPUT).unwrap(), 95437);
		assert_eq!(part2(INPUT).unwrap(), 24933642);
	}

	#[test]
	fn example_dir_sizes() {
		let dir_sizes = aggregate(&files(INPUT)).unwrap();
		assert_eq!(dir_sizes, DirSizes::from([
			(Path::root(), 48381165),
			(Path::from(["a"]), 94853),
			(Path::from(["a", "e"]), 584),
			(Path::from(["d"]), 24933642),
		]));
	}

	#[test]
	fn small_transcript() {
		let files = files(SMALL_INPUT);
		assert_eq!(files, Files::from([
			(Path::from(["b.txt"]), 14848514),
			(Path::from(["a", "f"]), 29116),
		]));

		let dir_sizes = aggregate(&files).unwrap();
		assert_eq!(dir_sizes, DirSizes::from([
			(Path::root(), 14877630),
			(Path::from(["a"]), 29116),
		]));

		assert_eq!(total_size_at_most(&dir_sizes, 100_000), Some(29116));
		assert_eq!(total_size_at_most(&dir_sizes, 20_000_000), Some(14877630 + 29116));
		assert_eq!(smallest_at_least(&dir_sizes, 20_000), Some(29116));
		assert_eq!(smallest_at_least(&dir_sizes, 30_000), Some(14877630));
		assert_eq!(smallest_at_least(&dir_sizes, 20_000_000), None);
	}

	#[test]
	fn transcript_records() {
		assert!(transcript_from_str("").unwrap().is_empty());
		assert_eq!(transcript_from_str("  $ cd / \n$ls\n  dir a  \n123 b\n").unwrap(), vec![
			Record { command: "cd /", output: vec![] },
			Record { command: "ls", output: vec!["dir a", "123 b"] },
		]);
		assert_eq!(transcript_from_str("dir a\n$ ls\n").unwrap_err(),
			TranscriptError::ExpectedCommand { line: 1 });
	}

	#[test]
	fn dirs_are_not_files() {
		assert_eq!(files("$ cd /\n$ ls\ndir a\n"), Files::new());
		assert_eq!(aggregate(&files("$ ls\ndir a\n")).unwrap(), DirSizes::from([(Path::root(), 0)]));
	}

	#[test]
	fn starts_at_root() {
		assert_eq!(files("$ ls\n10 a\n"), Files::from([(Path::from(["a"]), 10)]));
	}

	#[test]
	fn cd_root_resets() {
		let files = files("$ cd x\n$ cd y\n$ cd /\n$ ls\n10 a\n$ cd z\n$ ls\n20 b\n");
		assert_eq!(files, Files::from([(Path::from(["a"]), 10), (Path::from(["z", "b"]), 20)]));
	}

	#[test]
	fn unvisited_dirs_are_absent() {
		let dir_sizes = aggregate(&files("$ cd /\n$ ls\ndir a\ndir b\n$ cd a\n$ ls\n5 f\n")).unwrap();
		assert_eq!(dir_sizes.get(&Path::from(["b"])), None);
		assert_eq!(dir_sizes.get(&Path::from(["a"])), Some(&5));
	}

	#[test]
	fn last_listing_wins() {
		let files = files("$ cd /\n$ ls\n10 a\n$ cd /\n$ ls\n30 a\n");
		assert_eq!(files, Files::from([(Path::from(["a"]), 30)]));
		assert_eq!(aggregate(&files).unwrap()[&Path::root()], 30);
	}

	#[test]
	fn cd_output_ignored() {
		assert_eq!(files("$ cd /\nwhatever\n$ ls\n1 a\n"), Files::from([(Path::from(["a"]), 1)]));
	}

	#[test]
	fn cd_up_from_root() {
		let err = replay_err("$ cd /\n$ ls\n10 a\n$ cd ..\n");
		assert_eq!(err.to_string(),
			"command 3 (`$ cd ..`): cannot change out of the root directory");
		assert_eq!((err.record, err.kind), (3, ReplayErrorKind::CdUpFromRoot));

		let err = replay_err("$ cd a\n$ cd ..\n$ cd ..\n");
		assert_eq!((err.record, err.kind), (3, ReplayErrorKind::CdUpFromRoot));
	}

	#[test]
	fn invalid_commands() {
		for command in ["$ rm -rf /", "$ cd", "$ cd a b", "$ ls -l", "$"] {
			let err = replay_err(command);
			assert_eq!((err.record, err.kind), (1, ReplayErrorKind::InvalidCommand), "{command}");
		}
	}

	#[test]
	fn invalid_listings() {
		for (line, found) in [("-1 a", "-1 a"), ("big a", "big a"), ("10", "10"), ("10 a b", "10 a b")] {
			let err = replay_err(&format!("$ ls\n1 ok\n{line}\n"));
			assert_eq!((err.record, err.kind), (1, ReplayErrorKind::InvalidListing {
				output_line: 2, found: found.to_owned() }));
		}
		assert!(matches!(part1("$ ls\n\n"), Err(Day07Error::Replay(_))));
	}

	#[test]
	fn empty_transcript() {
		assert_eq!(part1("").unwrap(), 0);
		assert_eq!(part2("").unwrap(), 0);
	}

	#[test]
	fn sizes_up_to_the_limit() {
		let files = files("$ ls\n18446744073709551614 a\n1 b\n");
		assert_eq!(aggregate(&files).unwrap()[&Path::root()], u64::MAX);
	}

	#[test]
	fn size_overflow() {
		assert!(matches!(part1("$ ls\n18446744073709551615 a\n1 b\n"),
			Err(Day07Error::SizeOverflow(SizeOverflowError { dir })) if dir == "/"));
		assert!(matches!(part2("$ ls\n18446744073709551615 a\n1 b\n"),
			Err(Day07Error::SizeOverflow(_))));

		let err = aggregate(&files("$ cd d\n$ ls\n18446744073709551615 x\n1 y\n")).unwrap_err();
		assert_eq!(err.to_string(), "total size of /d exceeds 18446744073709551615");
	}

	#[test]
	fn small_dirs_overflow() {
		let dir_sizes = DirSizes::from([(Path::root(), u64::MAX), (Path::from(["a"]), 1)]);
		assert_eq!(total_size_at_most(&dir_sizes, u64::MAX - 1), Some(1));
		assert_eq!(total_size_at_most(&dir_sizes, u64::MAX), None);
	}

	#[test]
	fn path_display() {
		assert_eq!(Path::root().to_string(), "/");
		assert_eq!(Path::from(["a", "e", "i"]).to_string(), "/a/e/i");
	}

	mod properties {
		use proptest::prelude::*;
		use super::super::{aggregate, DirSizes, Files, Path};

		fn entries() -> impl Strategy<Value = Vec<(Vec<String>, u64)>> {
			prop::collection::vec(
				(prop::collection::vec("[a-c]{1,2}", 1..5), 0..1_000_000_u64),
				0..24)
		}

		fn files_of(entries: &[(Vec<String>, u64)]) -> Files<'_> {
			entries.iter()
				.map(|(components, size)| (Path(components.iter().map(String::as_str).collect()), *size))
				.collect()
		}

		proptest! {
			#[test]
			fn root_is_total(entries in entries()) {
				let files = files_of(&entries);
				let dir_sizes = aggregate(&files).unwrap();
				prop_assert_eq!(dir_sizes[&Path::root()], files.values().sum::<u64>());
			}

			#[test]
			fn dirs_sum_their_descendants(entries in entries()) {
				let files = files_of(&entries);
				for (dir, &size) in &aggregate(&files).unwrap() {
					let expected: u64 = files.iter()
						.filter(|(path, _)| path.0.len() > dir.0.len() && path.0.starts_with(&dir.0))
						.map(|(_, size)| size)
						.sum();
					prop_assert_eq!(size, expected, "{}", dir);
				}
			}

			#[test]
			fn order_independent(entries in entries()) {
				let files = files_of(&entries);
				let forward = aggregate(&files).unwrap();
				let reversed: DirSizes<'_> = aggregate(files.iter().rev()).unwrap();
				prop_assert_eq!(forward, reversed);
			}

			#[test]
			fn overflows_exactly_when_the_total_does(
				sizes in prop::collection::vec(any::<u64>(), 0..4),
			) {
				let names = ["a", "b", "c", "d"];
				let files: Files<'_> = sizes.iter().zip(names)
					.map(|(&size, name)| (Path(vec!["x", name]), size))
					.collect();
				let total = sizes.iter().try_fold(0_u64, |sum, &size| sum.checked_add(size));
				prop_assert_eq!(aggregate(&files).ok().map(|dir_sizes| dir_sizes[&Path::root()]), total);
			}
		}
	}
}
