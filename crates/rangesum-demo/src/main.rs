#![forbid(unsafe_code)]

//! Walkthrough binary for the `rangesum` tree.
//!
//! Builds an array of consecutive integers, applies two overlapping range
//! updates, and prints range sums before and after each one. `--verbose`
//! installs a tracing subscriber so the library's operation spans are
//! visible.

use rangesum::RangeSumTree;

mod cli;

/// Query and update ranges for a demo array of `count` elements.
///
/// For the default `count` of 8 these are [2, 5] (inner query), [1, 4]
/// (first update), and [3, 6] (second update).
#[derive(Debug, PartialEq, Eq)]
struct DemoRanges {
    inner: (usize, usize),
    first: (usize, usize),
    second: (usize, usize),
}

fn demo_ranges(count: usize) -> DemoRanges {
    let last = count - 1;
    DemoRanges {
        inner: (count / 4, last - count / 4),
        first: (1.min(last), (count / 2).min(last)),
        second: ((count * 3 / 8).min(last), last.max(1) - 1),
    }
}

fn main() {
    let opts = cli::Opts::parse();

    if opts.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_target(false)
            .init();
    }

    let values: Vec<i64> = (1..=opts.count as i64).collect();
    let mut tree = RangeSumTree::new(&values);

    let ranges = demo_ranges(opts.count);
    let last = opts.count - 1;
    let (inner_lo, inner_hi) = ranges.inner;
    let (first_lo, first_hi) = ranges.first;
    let (second_lo, second_hi) = ranges.second;
    let second_delta = -(opts.delta / 2);

    if opts.quiet {
        tree.update_range(first_lo, first_hi, opts.delta);
        tree.update_range(second_lo, second_hi, second_delta);
        println!("{}", tree.query_range(0, last));
        return;
    }

    println!("Range sum demo over [1..={}]", opts.count);
    println!();
    println!("Initial sum [0, {last}]: {}", tree.query_range(0, last));
    println!(
        "Sum [{inner_lo}, {inner_hi}]: {}",
        tree.query_range(inner_lo, inner_hi)
    );

    println!();
    println!(
        "Update: add {} to range [{first_lo}, {first_hi}]",
        opts.delta
    );
    tree.update_range(first_lo, first_hi, opts.delta);
    println!("Sum [0, {last}] after update: {}", tree.query_range(0, last));
    println!(
        "Sum [{inner_lo}, {inner_hi}] after update: {}",
        tree.query_range(inner_lo, inner_hi)
    );
    println!("Sum [0, 1] after update: {}", tree.query_range(0, 1.min(last)));

    println!();
    println!("Update: add {second_delta} to range [{second_lo}, {second_hi}]");
    tree.update_range(second_lo, second_hi, second_delta);
    println!("Sum [0, {last}] after update: {}", tree.query_range(0, last));
    println!(
        "Sum [{inner_lo}, {inner_hi}] after update: {}",
        tree.query_range(inner_lo, inner_hi)
    );
}
