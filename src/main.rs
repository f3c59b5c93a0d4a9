// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This executable solves sliding tile puzzles (the 8-puzzle by default) with
//! a uniform cost search or an A* search. The initial board is either given on
//! the command line or read interactively from the standard input.

use std::{io::{self, BufRead, Write}, time::{Duration, Instant}};

use anyhow::{anyhow, Context};
use bestfirst::*;
use bestfirst::puzzle::*;
use clap::Parser;
use log::{info, warn, LevelFilter};

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The tiles of the initial board in row major order (use 0 for the blank).
    /// When no tile is given, the board is read from the standard input
    tiles: Vec<u8>,
    /// The number of rows (and columns) of the board
    #[clap(short, long, default_value = "3")]
    size: usize,
    /// The search algorithm. When omitted, it is asked interactively if the
    /// board is read from the standard input and defaults to manhattan otherwise
    #[clap(short, long, value_enum)]
    algorithm: Option<HeuristicKind>,
    /// The maximum amount of time (in seconds) you would like this solver to run
    #[clap(short, long)]
    duration: Option<u64>,
    /// The maximum number of nodes the solver may expand
    #[clap(short = 'n', long)]
    max_expansions: Option<usize>,
    /// Log every node that is popped off the frontier
    #[clap(short, long)]
    trace: bool,
    /// Print every board of the solution path
    #[clap(short, long)]
    path: bool,
}

/// An utility function to return a cutoff heuristic that enforces the time
/// budget and the expansion budget that have been fixed (if any).
fn cutoff(timeout: Option<u64>, expansions: Option<usize>) -> Box<dyn Cutoff> {
    match (timeout, expansions) {
        (Some(t), Some(n)) => Box::new((TimeBudget::new(Duration::from_secs(t)), NodeBudget(n))),
        (Some(t), None)    => Box::new(TimeBudget::new(Duration::from_secs(t))),
        (None,    Some(n)) => Box::new(NodeBudget(n)),
        (None,    None)    => Box::new(NoCutoff),
    }
}

/// The trace of the search is written to the standard output, as plain lines.
/// Unless tracing is requested, only the warnings get through. `RUST_LOG`
/// overrides these defaults.
fn init_logger(trace: bool) {
    let level = if trace { LevelFilter::Info } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}

/// Reads a `size x size` board from the standard input, one row per line.
fn read_board(size: usize) -> anyhow::Result<Board> {
    println!("Enter the {}-puzzle you want to solve (HINT: enter {size} numbers per row, {size} rows in total, \
        separated by spaces; use 0 for the blank):", (size * size).saturating_sub(1));

    let expected = size * size;
    let mut tiles = vec![];
    for line in io::stdin().lock().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let tile = token.parse::<u8>().with_context(|| format!("'{token}' is not a tile"))?;
            tiles.push(tile);
        }
        if tiles.len() >= expected {
            break;
        }
    }
    Ok(Board::new(size, size, tiles)?)
}

/// Asks which algorithm should be used to solve the puzzle.
fn read_choice() -> anyhow::Result<HeuristicKind> {
    println!("Select the algorithm you want to use to solve the puzzle (HINT: enter 1-3 only):");
    for (i, kind) in HeuristicKind::ALL.iter().enumerate() {
        println!("{}. {kind}", i + 1);
    }

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let choice = line.trim().parse::<usize>().with_context(|| format!("'{}' is not a choice", line.trim()))?;
    HeuristicKind::from_choice(choice).ok_or_else(|| anyhow!("{choice} is not a valid choice"))
}

/// This is your executable's entry point. It is the place where all the pieces are put together
/// to create a solver for the sliding tile puzzles.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.trace);

    let (board, kind) = if args.tiles.is_empty() {
        let board = read_board(args.size)?;
        let kind  = match args.algorithm {
            Some(kind) => kind,
            None       => read_choice()?,
        };
        (board, kind)
    } else {
        let board = Board::new(args.size, args.size, args.tiles.clone())?;
        (board, args.algorithm.unwrap_or(HeuristicKind::Manhattan))
    };

    let goal = Board::goal(board.rows(), board.cols());
    if !board.is_solvable(&goal) {
        warn!("this board cannot reach the goal: the whole search space will be explored before the search fails");
    }

    let problem   = SlidingPuzzle::new(board, goal.clone())?;
    let heuristic = kind.build(&goal);
    let cutoff    = cutoff(args.duration, args.max_expansions);

    let mut tracer   = LogObserver;
    let mut silent   = EmptyObserver;
    let observer: &mut dyn Observer<Board> = if args.trace { &mut tracer } else { &mut silent };
    let mut frontier = SimpleFrontier::new(MinTotalCost);
    let mut visited  = SimpleVisited::<Board>::default();

    let mut solver = BestFirstSolver::custom(
        &problem,
        heuristic.as_ref(),
        cutoff.as_ref(),
        observer,
        &mut frontier,
        &mut visited,
    );

    info!("Solving with {kind}");
    let start    = Instant::now();
    let outcome  = solver.solve()?;
    let duration = start.elapsed();

    let config = ReportConfigBuilder::default()
        .show_path(args.path)
        .build()?;
    print!("{}", Report::new(&outcome).as_text(&config));

    if let Some(path) = outcome.path.as_ref() {
        let moves = moves(path).iter().map(|m| m.to_string()).collect::<Vec<_>>();
        println!("Moves: {}", moves.join(" "));
    }
    println!("Duration: {:.3} seconds", duration.as_secs_f32());
    Ok(())
}
