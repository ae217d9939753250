use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{self, Rng};
use std::{cell::Cell, rc::Rc, time::Instant};

use prettytable::{row, Table};

use super::{
    BubbleSorter, CountingSorter, GapSequence, HeapSorter, InsertionSorter, MergeSorter,
    MergeStrategy, Partition, QuickSorter, RadixSorter, RangedBucketSorter, Result, Selection,
    SelectionSorter, ShellSorter, Sorter,
};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;
const MILLION: usize = 1_000_000;

// Largest input handed to the O(n^2) sorters.
const QUADRATIC_LIMIT: usize = TEN_THOUSAND;

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
#[derive(Clone)]
struct SortEvaluator<T> {
    // For making the comparisons
    elem: T,
    // Bumped on every comparison of `elem`. Shared between all elements of one run, hence the
    // reference counted cell.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

/// A comparison sorter taking part in the benchmark.
struct Entry {
    name: &'static str,
    sorter: Box<dyn Sorter<SortEvaluator<i32>>>,
    quadratic: bool,
}

impl Entry {
    fn new<S>(name: &'static str, sorter: S, quadratic: bool) -> Self
    where
        S: Sorter<SortEvaluator<i32>> + 'static,
    {
        Self {
            name,
            sorter: Box::new(sorter),
            quadratic,
        }
    }
}

fn comparison_sorters() -> Vec<Entry> {
    vec![
        Entry::new("Bubble Sort", BubbleSorter, true),
        Entry::new("Insertion Sort", InsertionSorter { smart: true }, true),
        Entry::new(
            "Insertion Sort (not smart)",
            InsertionSorter { smart: false },
            true,
        ),
        Entry::new("Selection Sort", SelectionSorter::default(), true),
        Entry::new(
            "Selection Sort (bidirectional)",
            SelectionSorter {
                selection: Selection::Bidirectional,
            },
            true,
        ),
        Entry::new(
            "Shell Sort (halving)",
            ShellSorter {
                gaps: GapSequence::Halving,
            },
            false,
        ),
        Entry::new(
            "Shell Sort (Hibbard)",
            ShellSorter {
                gaps: GapSequence::Hibbard,
            },
            false,
        ),
        Entry::new(
            "Shell Sort (Knuth)",
            ShellSorter {
                gaps: GapSequence::Knuth,
            },
            false,
        ),
        Entry::new(
            "Shell Sort (Sedgewick)",
            ShellSorter {
                gaps: GapSequence::Sedgewick,
            },
            false,
        ),
        Entry::new(
            "Merge Sort (copying)",
            MergeSorter {
                strategy: MergeStrategy::TopDownCopy,
            },
            false,
        ),
        Entry::new(
            "Merge Sort (buffered)",
            MergeSorter {
                strategy: MergeStrategy::TopDownBuffered,
            },
            false,
        ),
        Entry::new(
            "Merge Sort (bottom up)",
            MergeSorter {
                strategy: MergeStrategy::BottomUp,
            },
            false,
        ),
        Entry::new(
            "Quick Sort (grouping)",
            QuickSorter {
                partition: Partition::Grouping,
            },
            false,
        ),
        Entry::new(
            "Quick Sort (Lomuto)",
            QuickSorter {
                partition: Partition::Lomuto,
            },
            false,
        ),
        Entry::new(
            "Quick Sort (random pivot)",
            QuickSorter {
                partition: Partition::RandomLomuto,
            },
            false,
        ),
        Entry::new(
            "Quick Sort (Dutch flag)",
            QuickSorter {
                partition: Partition::DutchFlag,
            },
            false,
        ),
        Entry::new(
            "Quick Sort (Hoare)",
            QuickSorter {
                partition: Partition::Hoare,
            },
            false,
        ),
        Entry::new("Heap Sort", HeapSorter, false),
    ]
}

fn run_bench<S>(
    sorter: &S,
    values: &mut [SortEvaluator<i32>],
    comparisons: &Rc<Cell<usize>>,
) -> usize
where
    S: Sorter<SortEvaluator<i32>> + ?Sized,
{
    comparisons.set(0);
    sorter.sort(values);

    comparisons.get()
}

fn time<F: FnOnce() -> Result<()>>(f: F) -> Result<String> {
    let now = Instant::now();
    f()?;
    Ok(format!("{:?}", now.elapsed()))
}

/// Sorts random `i32` inputs of growing size with every sorter and prints one table per size.
///
/// Comparison sorters report the number of comparisons made. Sizes above `max_size` are
/// skipped.
pub fn run_orst(max_size: usize) -> Result<()> {
    let mut random = rand::thread_rng();
    let counter = Rc::new(Cell::new(0));
    let sorters = comparison_sorters();

    for &n in &[ZERO, ONE, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND, MILLION] {
        if n > max_size {
            break;
        }

        let raw = (0..n).map(|_| random.gen::<i32>()).collect::<Vec<_>>();
        let values = raw
            .iter()
            .map(|&x| SortEvaluator::new(x, counter.clone()))
            .collect::<Vec<_>>();

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let pb = ProgressBar::new((sorters.len() + 4) as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Sorters: ({pos}/{len}) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        for entry in &sorters {
            pb.set_message(entry.name);
            if entry.quadratic && n > QUADRATIC_LIMIT {
                table.add_row(row![entry.name, "Not Doing It".red(), "It is Stupid"]);
                pb.inc(1);
                continue;
            }

            let mut input = values.clone();
            let now = Instant::now();
            let took = run_bench(entry.sorter.as_ref(), &mut input, &counter);
            table.add_row(row![
                entry.name,
                took.to_string(),
                format!("{:?}", now.elapsed())
            ]);
            pb.inc(1);
        }

        // The distribution sorters never compare, so they only get timed.
        pb.set_message("Counting Sort");
        let mut input = raw.iter().map(|&x| x >> 16).collect::<Vec<_>>();
        let took = time(|| CountingSorter { stable: true }.try_sort(&mut input))?;
        table.add_row(row!["Counting Sort (16 bit keys)", "-", took]);
        pb.inc(1);

        pb.set_message("Radix Sort");
        let mut input = raw.clone();
        let took = time(|| RadixSorter { signed: true }.try_sort(&mut input))?;
        table.add_row(row!["Radix Sort (signed)", "-", took]);
        pb.inc(1);

        pb.set_message("Bucket Sort");
        let mut input = raw.clone();
        let took = time(|| RangedBucketSorter { width: 1 << 16 }.try_sort(&mut input))?;
        table.add_row(row!["Bucket Sort (width 2^16)", "-", took]);
        pb.inc(1);

        pb.set_message("Standard Library Sort");
        let mut input = raw.clone();
        let took = time(|| {
            input.sort();
            Ok(())
        })?;
        table.add_row(row!["Standard Library Sort Stable", "-", took]);
        pb.inc(1);

        pb.finish_and_clear();
        table.printstd();
        println!();
    }

    Ok(())
}
