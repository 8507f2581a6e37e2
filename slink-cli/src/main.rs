use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;
use slink::dendrogram::{singleton_labels, DendrogramBuilder};
use slink::emit::{emit_labelled, emit_mathematica};
use slink::{Euclidean, Observer, PiLambda, Point, PointSet, SlinkCore};

/// Single-linkage hierarchical clustering via the SLINK algorithm.
///
/// Reads a headerless CSV point file, runs the SLINK recurrence, and writes
/// the resulting dendrogram in two textual forms: a generic labelled form
/// and a Mathematica `Cluster[...]` form.
#[derive(Parser, Debug)]
#[command(name = "slink", version, about)]
struct Args {
    /// Point data: one point per line, `x,y[,...]`, no header.
    input: PathBuf,
    /// Where to write the labelled dendrogram.
    output: PathBuf,
    /// Where to write the Mathematica `Cluster[...]` form.
    mathematica_output: PathBuf,
    /// Character point labels start from, rather than a hardcoded
    /// constant, since different consumers display labels starting at
    /// `'1'` or at `'A'`.
    #[arg(long, default_value_t = '1')]
    start_label: char,
}

/// Errors surfaced at the CLI boundary: either the core library's own
/// [`slink::Error`], or an I/O failure opening/writing one of the three
/// paths on the command line.
#[derive(Debug)]
enum CliError {
    InvalidInput(String),
    Internal(String),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CliError::Internal(msg) => write!(f, "internal error: {}", msg),
            CliError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> CliError {
        CliError::Io(err)
    }
}

impl From<slink::Error> for CliError {
    fn from(err: slink::Error) -> CliError {
        match err {
            slink::Error::InvalidInput(msg) => CliError::InvalidInput(msg),
            slink::Error::Internal(msg) => CliError::Internal(msg),
        }
    }
}

impl CliError {
    /// 1 for a bad input file, 2 for everything else (I/O failures, or a
    /// library-side internal-invariant bug).
    fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) => 1,
            CliError::Internal(_) | CliError::Io(_) => 2,
        }
    }
}

/// Parse `path` as a headerless, comma-separated point file: exactly the
/// first two fields per line are interpreted as `x` and `y`. Extra trailing
/// fields are ignored; malformed or missing numeric fields fail with the
/// offending 1-based line number.
fn parse_points(path: &Path) -> Result<PointSet, CliError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut points = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let line_no = i + 1;
        let record = result.map_err(|err| {
            CliError::InvalidInput(format!(
                "{}: line {}: {}",
                path.display(),
                line_no,
                err
            ))
        })?;
        let field = |idx: usize, name: &str| -> Result<f64, CliError> {
            record
                .get(idx)
                .ok_or_else(|| {
                    CliError::InvalidInput(format!(
                        "{}: line {}: missing {} coordinate",
                        path.display(),
                        line_no,
                        name
                    ))
                })?
                .trim()
                .parse::<f64>()
                .map_err(|_| {
                    CliError::InvalidInput(format!(
                        "{}: line {}: malformed {} coordinate",
                        path.display(),
                        line_no,
                        name
                    ))
                })
        };
        points.push(Point::from((field(0, "x")?, field(1, "y")?)));
    }

    if points.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "{}: no points found",
            path.display()
        )));
    }
    Ok(PointSet::new(points))
}

/// Reports clustering progress to stderr as the recurrence runs. Prints
/// roughly every 5% of points processed so that large datasets don't flood
/// stderr with one line per insertion.
struct ProgressObserver {
    total: usize,
    next_report: usize,
}

impl ProgressObserver {
    fn new(total: usize) -> ProgressObserver {
        ProgressObserver { total, next_report: total / 20 }
    }
}

impl Observer for ProgressObserver {
    fn on_end_insert(&mut self, n: usize) {
        if n >= self.next_report || n + 1 == self.total {
            eprintln!("processed {}/{} points", n + 1, self.total);
            self.next_report = n + self.total / 20 + 1;
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let start = Instant::now();
    let points = parse_points(&args.input)?;
    eprintln!("parsing took: {:?}", start.elapsed());

    let start = Instant::now();
    let mut state = PiLambda::new();
    let mut observer = ProgressObserver::new(points.len());
    SlinkCore::cluster_with_observer(&mut state, &points, &Euclidean, &mut observer)?;
    eprintln!("clustering took: {:?}", start.elapsed());

    let start = Instant::now();
    let labels = singleton_labels(points.len(), args.start_label);
    let merges = DendrogramBuilder::build(&labels, state.pi(), state.lambda())?;
    let labelled = emit_labelled(&points, &labels, &merges);
    let mathematica = emit_mathematica(&merges);
    std::fs::write(&args.output, labelled)?;
    std::fs::write(&args.mathematica_output, mathematica)?;
    eprintln!("emission took: {:?}", start.elapsed());

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("slink: {}", err);
        process::exit(err.exit_code());
    }
}
