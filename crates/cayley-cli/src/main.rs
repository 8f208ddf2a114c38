//! `cayley`: exact eigen-analysis from the command line.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use cayley::eigen::{EngineConfig, EngineError, DEFAULT_MAX_MINPOLY_CANDIDATES};
use cayley::factor::DEFAULT_MAX_COMBINATIONS;
use cayley_cli::{OutputFormat, ReconstructInput, Session, Task, DEFAULT_MATRIX};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::{debug, error};

#[derive(Parser)]
#[command(
    name = "cayley",
    version,
    about = "Exact eigenvalues, diagonalization and Jordan forms over the rationals",
    after_help = r#"Matrix text:
  Rows are separated by newlines or `;`, entries by spaces. Entries are
  integers or fractions p/q, e.g. --matrix "1 3; 2 -4".

Exit codes:
  0  success
  1  invalid input or a configured limit was hit
  2  internal consistency check failed
"#
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Matrix text (defaults to "1 3; 2 -4")
    #[arg(short, long, global = true, conflicts_with = "file")]
    matrix: Option<String>,

    /// Read the matrix from a file, or `-` for stdin
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Cap on minimal polynomial candidates
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_MINPOLY_CANDIDATES)]
    max_candidates: usize,

    /// Cap on Kronecker divisor combinations during factorization
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_COMBINATIONS)]
    max_factor_combinations: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Eigenvalues with multiplicities and eigenvector bases
    Eigen,
    /// A = P·D·P⁻¹, or the Jordan form when that is impossible
    Diagonalize,
    /// Factored characteristic polynomial det(A - λI)
    CharPoly,
    /// Monic annihilating polynomial of least degree
    MinPoly,
    /// Check that the characteristic polynomial annihilates A
    CayleyHamilton,
    /// Orthonormalize the matrix rows
    GramSchmidt,
    /// Build A = P·D·P⁻¹ from eigenvectors and eigenvalues
    Reconstruct {
        /// Matrix size
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=3))]
        size: u8,

        /// An eigenvector, e.g. "1 0 0"; repeat once per eigenvalue
        #[arg(long = "vector")]
        vectors: Vec<String>,

        /// Eigenvalues in vector order, e.g. "1 2 3"
        #[arg(long)]
        eigenvalues: Option<String>,
    },
    /// Jordan canonical form J and transition matrix P
    Jordan,
}

impl Commands {
    fn into_task(self) -> Task {
        match self {
            Self::Eigen => Task::Eigen,
            Self::Diagonalize => Task::Diagonalize,
            Self::CharPoly => Task::CharacteristicPolynomial,
            Self::MinPoly => Task::MinimalPolynomial,
            Self::CayleyHamilton => Task::CayleyHamilton,
            Self::GramSchmidt => Task::GramSchmidt,
            Self::Reconstruct {
                size,
                vectors,
                eigenvalues,
            } => Task::Reconstruct(ReconstructInput {
                size: usize::from(size),
                vectors,
                eigenvalues,
            }),
            Self::Jordan => Task::Jordan,
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        2 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn read_matrix_text(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) if path == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read matrix from stdin")?;
            Ok(text)
        }
        (None, Some(path)) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read matrix from {}", path.display()))
        }
        (None, None) => Ok(DEFAULT_MATRIX.to_string()),
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = EngineConfig::new()
        .with_max_minpoly_candidates(cli.max_candidates)
        .with_max_factor_combinations(cli.max_factor_combinations);
    let text = read_matrix_text(cli.matrix, cli.file.as_deref())?;
    debug!("matrix text: {text:?}");

    let session = Session::new(config).with_matrix_text(text).with_format(cli.format);
    let report = session.run(&cli.command.into_task())?;
    Ok(session.render(&report)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.downcast_ref::<EngineError>().map_or(1, EngineError::exit_code);
            if code == 2 {
                error!("internal consistency failure");
            }
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}
