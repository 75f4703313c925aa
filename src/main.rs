use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use u_tspga::data::DistanceTable;
use u_tspga::ga::{GaConfig, GaRunner, Report};
use u_tspga::TspError;

#[derive(Parser)]
#[command(version, about = "Genetic-algorithm solver for the symmetric TSP")]
struct Args {
    /// `;`-delimited table: a header of city names, then one distance row per city
    #[arg(long)]
    data: PathBuf,

    /// population size
    #[arg(long, default_value_t = 100)]
    pop_size: usize,

    /// number of generations
    #[arg(long, default_value_t = 50)]
    generations: usize,

    /// number of leading cities of the table to route through
    #[arg(long, default_value_t = 10)]
    cities: usize,

    /// probability of a swap mutation per offspring
    #[arg(long, default_value_t = 0.6)]
    mutation_rate: f64,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// print only the shortest tour of the final generation
    #[arg(long, default_value_t = false)]
    best_only: bool,
}

fn run(args: &Args) -> Result<(), TspError> {
    let cities = DistanceTable::from_path(&args.data)?.select(args.cities)?;

    let mut config = GaConfig::default()
        .with_population_size(args.pop_size)
        .with_max_generations(args.generations)
        .with_n_cities(args.cities)
        .with_mutation_rate(args.mutation_rate);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let result = GaRunner::run(cities.matrix(), &config)?;
    let report = Report::new(&result, &cities)?;

    if args.best_only {
        if let Some(best) = report.best() {
            println!("{best}");
        }
    } else {
        print!("{report}");
    }
    Ok(())
}

fn exit_code(err: &TspError) -> ExitCode {
    match err {
        TspError::InvalidInput(_) => ExitCode::from(3),
        TspError::InvalidConfig(_) => ExitCode::from(4),
        TspError::InvalidPopulation(_) => ExitCode::from(5),
        TspError::InsufficientPool { .. } => ExitCode::from(6),
        TspError::DegenerateTour(_) => ExitCode::from(7),
        TspError::Io(_) => ExitCode::from(8),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            exit_code(&err)
        }
    }
}
