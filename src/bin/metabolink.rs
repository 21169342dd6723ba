//! Metabolink CLI: converts association tables into JSON Lines documents.
//!
//! Usage:
//!   metabolink convert <dataset> <input> [--output file] [--config file] [--offline]
//!   metabolink columns <dataset>

use clap::{Parser, Subcommand, ValueEnum};
use metabolink::{
    BioThingsClient, Config, CsvSource, Dataset, GeneMetaboliteDataset, LookupClient,
    MicrobeMetaboliteDataset, OfflineClient, Pipeline,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "metabolink",
    version,
    about = "Association tables to knowledge graph documents"
)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a table into one JSON document per line
    Convert {
        /// Table layout of the input
        #[arg(value_enum)]
        dataset: DatasetKind,
        /// Path to the CSV file
        input: PathBuf,
        /// Write documents here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Path to a YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Skip the lookup service; no names or taxonomy are added
        #[arg(long)]
        offline: bool,
    },
    /// Print the column layout of a dataset
    Columns {
        #[arg(value_enum)]
        dataset: DatasetKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DatasetKind {
    GeneMetabolite,
    MicrobeMetabolite,
}

impl DatasetKind {
    fn dataset(self) -> Box<dyn Dataset> {
        match self {
            Self::GeneMetabolite => Box::new(GeneMetaboliteDataset),
            Self::MicrobeMetabolite => Box::new(MicrobeMetaboliteDataset),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, String> {
    let config = match path {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    };
    config.map_err(|e| e.to_string())
}

fn cmd_convert(
    dataset: &dyn Dataset,
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    offline: bool,
) -> i32 {
    if !input.is_file() {
        eprintln!("Error: input file '{}' does not exist", input.display());
        return 1;
    }
    let config = match load_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let client: Box<dyn LookupClient> = if offline {
        Box::new(OfflineClient)
    } else {
        match BioThingsClient::new(&config.lookup) {
            Ok(c) => Box::new(c),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    };
    let writer: Box<dyn Write> = match output {
        Some(path) => match File::create(path) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("Error: cannot create '{}': {}", path.display(), e);
                return 1;
            }
        },
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    let source = CsvSource::new(input);
    let pipeline = Pipeline::new(dataset, &source, client.as_ref(), &config.lookup);

    let mut written = 0usize;
    for document in pipeline.documents() {
        let document = match document {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        };
        let line = match serde_json::to_string(&document) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        };
        if let Err(e) = writeln!(writer, "{}", line) {
            eprintln!("Error: {}", e);
            return 1;
        }
        written += 1;
    }
    if let Err(e) = writer.flush() {
        eprintln!("Error: {}", e);
        return 1;
    }

    tracing::info!(dataset = dataset.id(), documents = written, "conversion finished");
    0
}

fn cmd_columns(dataset: &dyn Dataset) -> i32 {
    println!("INDEX  COLUMN");
    for (index, name) in dataset.columns().iter().enumerate() {
        println!("{:>5}  {}", index, name);
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Convert {
            dataset,
            input,
            output,
            config,
            offline,
        } => cmd_convert(
            dataset.dataset().as_ref(),
            &input,
            output.as_deref(),
            config.as_deref(),
            offline,
        ),
        Commands::Columns { dataset } => cmd_columns(dataset.dataset().as_ref()),
    };
    std::process::exit(code);
}
