use clap::{Parser as ClapParser, Subcommand};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;
use zonespec::cli::{
    self, CheckOptions, CheckResult, CliError, ResolveOptions, render_diagnostic,
};

#[derive(ClapParser)]
#[command(name = "zonespec")]
#[command(about = "zonespec - compile zone specifications and resolve which zone governs a point")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a zone specification
    Check {
        /// The zone specification (reads from stdin if not provided)
        spec: Option<String>,

        /// Print the canonical compiled form
        #[arg(long)]
        ast: bool,
    },

    /// Find the zone governing a point
    Resolve {
        /// Zone file (reads from stdin if not provided)
        #[arg(short, long)]
        zones: Option<PathBuf>,

        /// World the point is in
        #[arg(short, long)]
        world: String,

        /// Biome at the point
        #[arg(short, long, default_value = "")]
        biome: String,

        /// List every matching zone in precedence order
        #[arg(long)]
        all: bool,

        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// List documentation categories, or show one
    Docs {
        /// Category name
        category: Option<String>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zonespec=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { spec, ast } => run_check(spec, ast),
        Commands::Resolve {
            zones,
            world,
            biome,
            all,
            x,
            y,
            z,
        } => run_resolve(zones, world, biome, all, x, y, z),
        Commands::Docs { category: None } => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Docs {
            category: Some(category),
        } => cli::get_doc_category(&category).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Read all of stdin, unless it is a terminal.
fn read_stdin() -> Result<Option<String>, CliError> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

fn run_check(spec: Option<String>, ast: bool) -> Result<(), CliError> {
    let spec = match spec {
        Some(s) => s,
        None => read_stdin()?.ok_or(CliError::NoInput)?,
    };

    let options = CheckOptions {
        spec,
        show_ast: ast,
    };

    match cli::execute_check(&options) {
        Ok(CheckResult::Valid) => println!("Zone specification is valid"),
        Ok(CheckResult::Compiled(canonical)) => println!("{}", canonical),
        Err(CliError::Compile(e)) => {
            eprintln!("{}", render_diagnostic(&options.spec, &e));
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn run_resolve(
    zones: Option<PathBuf>,
    world: String,
    biome: String,
    all: bool,
    x: f64,
    y: f64,
    z: f64,
) -> Result<(), CliError> {
    let zones = match zones {
        Some(path) => Some(fs::read_to_string(path)?),
        None => read_stdin()?,
    };

    let options = ResolveOptions {
        zones,
        world,
        biome,
        x,
        y,
        z,
        all,
    };

    for id in cli::execute_resolve(&options)? {
        println!("{}", id);
    }
    Ok(())
}
