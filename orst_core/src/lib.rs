//! # Introduction
//!
//! Classic in-memory sorting algorithms, implemented for learning: bubble, bucket, counting,
//! heap, insertion, merge, quick, radix, selection and shell sort.
//!
//! The algorithms live in [`orst`]. [`OrstArgs`] is the command line front end used by the
//! `orst` binary.

pub mod orst;

use anyhow::{bail, Context};
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Deserialize;
use std::{fmt::Debug, path::PathBuf};

use orst::{
    BubbleSorter, CountingSorter, GapSequence, HeapSorter, InsertionSorter, MergeSorter,
    MergeStrategy, Partition, QuickSorter, RadixSorter, RangedBucketSorter, Selection,
    SelectionSorter, ShellSorter, Sorter, UniformBucketSorter,
};

/// Sort numbers on the commandline. Install the `orst` binary and run `orst --help` to see what
/// options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct OrstArgs {
    #[command(subcommand)]
    command: OrstCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum OrstCommands {
    /// Sort a sequence of numbers and print it before and after sorting.
    Sort {
        /// The sorting algorithm to use.
        #[arg(short, long, value_enum, required = true)]
        algorithm: Algorithm,

        /// Read the numbers from a file instead of the commandline.
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,

        /// Format of the file given with `--file`.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Range of values covered by one bucket of `bucket-ranged`.
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        width: i64,

        /// The numbers to sort.
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Compare all sorters on random input of growing size.
    Bench {
        /// Largest input size to benchmark.
        #[arg(short, long, default_value_t = 100_000)]
        max_size: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Format {
    /// A json array of numbers
    Json,

    /// A yaml sequence of numbers
    Yaml,
}

/// Every sorter variant selectable from the commandline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Insertion,
    BinaryInsertion,
    Selection,
    SelectionBidirectional,
    SelectionDescending,
    ShellHalving,
    ShellHibbard,
    ShellKnuth,
    ShellSedgewick,
    MergeCopy,
    MergeBuffered,
    MergeBottomUp,
    QuickGrouping,
    QuickLomuto,
    QuickRandom,
    QuickDutchFlag,
    QuickHoare,
    Heap,
    Counting,
    CountingStable,
    Radix,
    RadixSigned,
    BucketUniform,
    BucketRanged,
}

/// Numbers as read from the commandline or a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Numbers {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
}

impl Numbers {
    /// Parses every value as an integer, falling back to floats if any of them is not one.
    pub fn parse(values: &[String]) -> anyhow::Result<Self> {
        let integers: Result<Vec<i64>, _> = values.iter().map(|v| v.parse()).collect();
        if let Ok(integers) = integers {
            return Ok(Numbers::Integers(integers));
        }

        let floats = values
            .iter()
            .map(|v| {
                v.parse::<f64>()
                    .with_context(|| format!("`{v}` is not a number"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Numbers::Floats(floats))
    }
}

impl Algorithm {
    /// Sorts `numbers` in place with this algorithm.
    ///
    /// Integers are converted to floats for `bucket-uniform`; every other algorithm needs
    /// integers.
    pub fn run(self, numbers: &mut Numbers, width: i64) -> anyhow::Result<()> {
        if self == Algorithm::BucketUniform {
            let mut floats = match numbers {
                Numbers::Integers(integers) => integers.iter().map(|&x| x as f64).collect(),
                Numbers::Floats(floats) => floats.clone(),
            };
            UniformBucketSorter.try_sort(&mut floats)?;
            *numbers = Numbers::Floats(floats);
            return Ok(());
        }

        match numbers {
            Numbers::Integers(integers) => self.sort_integers(integers, width),
            Numbers::Floats(_) => {
                bail!("{self:?} sort needs integers, only bucket-uniform accepts decimals")
            }
        }
    }

    fn sort_integers(self, slice: &mut [i64], width: i64) -> anyhow::Result<()> {
        match self {
            Algorithm::Bubble => BubbleSorter.sort(slice),
            Algorithm::Insertion => InsertionSorter { smart: false }.sort(slice),
            Algorithm::BinaryInsertion => InsertionSorter { smart: true }.sort(slice),
            Algorithm::Selection => SelectionSorter::default().sort(slice),
            Algorithm::SelectionBidirectional => SelectionSorter {
                selection: Selection::Bidirectional,
            }
            .sort(slice),
            Algorithm::SelectionDescending => SelectionSorter::sort_descending(slice),
            Algorithm::ShellHalving => shell(GapSequence::Halving).sort(slice),
            Algorithm::ShellHibbard => shell(GapSequence::Hibbard).sort(slice),
            Algorithm::ShellKnuth => shell(GapSequence::Knuth).sort(slice),
            Algorithm::ShellSedgewick => shell(GapSequence::Sedgewick).sort(slice),
            Algorithm::MergeCopy => merge(MergeStrategy::TopDownCopy).sort(slice),
            Algorithm::MergeBuffered => merge(MergeStrategy::TopDownBuffered).sort(slice),
            Algorithm::MergeBottomUp => merge(MergeStrategy::BottomUp).sort(slice),
            Algorithm::QuickGrouping => quick(Partition::Grouping).sort(slice),
            Algorithm::QuickLomuto => quick(Partition::Lomuto).sort(slice),
            Algorithm::QuickRandom => quick(Partition::RandomLomuto).sort(slice),
            Algorithm::QuickDutchFlag => quick(Partition::DutchFlag).sort(slice),
            Algorithm::QuickHoare => quick(Partition::Hoare).sort(slice),
            Algorithm::Heap => HeapSorter.sort(slice),
            Algorithm::Counting => CountingSorter { stable: false }.try_sort(slice)?,
            Algorithm::CountingStable => CountingSorter { stable: true }.try_sort(slice)?,
            Algorithm::Radix => RadixSorter { signed: false }.try_sort(slice)?,
            Algorithm::RadixSigned => RadixSorter { signed: true }.try_sort(slice)?,
            Algorithm::BucketRanged => RangedBucketSorter { width }.try_sort(slice)?,
            Algorithm::BucketUniform => bail!("bucket-uniform sorts decimals"),
        }
        Ok(())
    }
}

fn shell(gaps: GapSequence) -> ShellSorter {
    ShellSorter { gaps }
}

fn merge(strategy: MergeStrategy) -> MergeSorter {
    MergeSorter { strategy }
}

fn quick(partition: Partition) -> QuickSorter {
    QuickSorter { partition }
}

impl OrstArgs {
    pub fn run(self) -> anyhow::Result<()> {
        // Run the commands
        match self.command {
            OrstCommands::Sort {
                algorithm,
                file,
                format,
                width,
                values,
            } => {
                let mut numbers = match file {
                    Some(file) => {
                        let bytes = std::fs::read(&file)
                            .with_context(|| format!("unable to read {}", file.display()))?;
                        match format {
                            Format::Json => serde_json::from_slice(&bytes)?,
                            Format::Yaml => serde_yaml::from_slice(&bytes)?,
                        }
                    }
                    None => Numbers::parse(&values)?,
                };

                print_numbers("Before ->", &numbers);
                algorithm
                    .run(&mut numbers, width)
                    .with_context(|| format!("{algorithm:?} sort failed"))?;
                print_numbers("After  ->", &numbers);
            }

            OrstCommands::Bench { max_size } => orst::benchmark::run_orst(max_size)?,
        }
        Ok(())
    }
}

fn print_numbers(label: &str, numbers: &Numbers) {
    fn show<T: Debug>(label: &str, values: &[T]) {
        println!("{} {:?}", label.bold().blue(), values);
    }

    match numbers {
        Numbers::Integers(integers) => show(label, integers),
        Numbers::Floats(floats) => show(label, floats),
    }
}
