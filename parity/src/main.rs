use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use parity::{arena_file_to_arena, parse_arena};
use solver::{solve, Deadline, Parity, Player, SolveError};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ParityArg {
    Max,
    Min,
}

impl From<ParityArg> for Parity {
    fn from(value: ParityArg) -> Self {
        match value {
            ParityArg::Max => Parity::Max,
            ParityArg::Min => Parity::Min,
        }
    }
}

/// Decides whether the start vertex of each arena is won by the acceptance
/// player, using Zielonka's algorithm.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Arena files to solve.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Override the parity convention declared by the files.
    #[arg(long, value_enum)]
    parity: Option<ParityArg>,

    /// Override the start vertex declared by the files.
    #[arg(long)]
    start: Option<usize>,

    /// Time budget for each file, in seconds.
    #[arg(long, default_value_t = 480)]
    timeout: u64,

    /// Print timings and the winner of every vertex.
    #[arg(short, long)]
    verbose: bool,
}

struct Report {
    parity: Parity,
    acceptance: Player,
    realizable: bool,
    vertex_count: usize,
    elapsed: Duration,
    winners: Vec<(usize, Player)>,
}

fn check(path: &Path, args: &Args) -> Result<Report> {
    let now = Instant::now();
    let deadline = Deadline::after(Duration::from_secs(args.timeout));

    let source = std::fs::read_to_string(path).context("Failed to read arena file")?;
    let file = parse_arena(&source).map_err(|errors| match errors.first() {
        Some(e) => anyhow!("Parse error at {:?}: {e}", e.span()),
        None => anyhow!("Parse error"),
    })?;
    let (arena, start, ids) = arena_file_to_arena(&file).context("Invalid arena")?;

    let start = match args.start {
        Some(id) => {
            ids.get_index_of(&id).with_context(|| format!("Start vertex {id} doesn't exist"))?
        }
        None => start,
    };
    let parity = args.parity.map_or(file.parity, Parity::from);

    debug!("Preprocessing took {:?}", now.elapsed());

    let outcome = solve(&arena, parity, start, &deadline)?;

    let winners = outcome.solution.state_winners(arena.vertex_count())?;
    let winners = winners.enumerate().map(|(v, &winner)| (ids[v], winner)).collect();

    Ok(Report {
        parity,
        acceptance: file.acceptance,
        realizable: outcome.winner == file.acceptance,
        vertex_count: arena.vertex_count(),
        elapsed: now.elapsed(),
        winners,
    })
}

fn skip_reason(err: &anyhow::Error) -> String {
    let reason = match err.downcast_ref::<SolveError>() {
        Some(e) if e.is_timeout() => "timeout".to_string(),
        Some(e) if e.is_malformed() => format!("malformed arena: {e}"),
        _ => format!("{err:#}"),
    };
    reason.replace(['\t', '\n'], " ")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    info!("Solving {} arena files with a {}s budget each", args.paths.len(), args.timeout);

    for path in &args.paths {
        if !path.exists() {
            println!("SKIP\tmissing\t{}", path.display());
            continue;
        }

        let report = match check(path, &args) {
            Ok(report) => report,
            Err(e) => {
                println!("SKIP\t{}\t{}", skip_reason(&e), path.display());
                continue;
            }
        };

        let verdict = if report.realizable { "REAL" } else { "UNREAL" };
        if !args.verbose {
            println!("{verdict}\t{}", path.display());
            continue;
        }

        let parity = format!("{:?}", report.parity).to_uppercase();
        let acceptance = report.acceptance.to_string().to_uppercase();
        println!(
            "<{parity}, {acceptance}> {verdict} {:.3}s #vertices={} {}",
            report.elapsed.as_secs_f64(),
            report.vertex_count,
            path.display()
        );
        for (id, winner) in &report.winners {
            println!("  vertex {id}: {winner}");
        }
    }

    Ok(())
}
