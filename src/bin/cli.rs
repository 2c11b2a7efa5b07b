//! Gradebook CLI
//!
//! One-shot commands against the records in a data directory.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gradebook::command::Command;
use gradebook::student::parse_marks;
use gradebook::{Config, Registry, Result, Student};
use tracing_subscriber::{fmt, EnvFilter};

/// Gradebook CLI
#[derive(Parser, Debug)]
#[command(name = "gradebook-cli")]
#[command(about = "CLI for the Gradebook records manager")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./gradebook_data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert a student record
    Add {
        /// Student ID (positive integer)
        #[arg(long)]
        id: u32,

        /// Student name (letters and spaces)
        #[arg(long)]
        name: String,

        /// Marks out of 100, comma separated (e.g. "90,85,77.5")
        #[arg(long)]
        marks: String,

        /// Attendance percentage
        #[arg(long)]
        attendance: f64,
    },

    /// Show one student's profile
    Show {
        /// The student ID
        id: u32,
    },

    /// Delete a student record
    Delete {
        /// The student ID
        id: u32,
    },

    /// Rank students by CGPA
    Rank,

    /// List all students by ID
    List,

    /// Write the records to a snapshot file
    Export {
        /// Destination file
        file: PathBuf,
    },

    /// Replace the records with a snapshot file's contents
    Import {
        /// Source file
        file: PathBuf,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder().data_dir(&args.data_dir).build();
    let registry = Registry::open(config)?;

    let command = match args.command {
        Commands::Add {
            id,
            name,
            marks,
            attendance,
        } => Command::Add(Student::new(id, name, parse_marks(&marks)?, attendance)?),
        Commands::Show { id } => Command::Search { id },
        Commands::Delete { id } => Command::Delete { id },
        Commands::Rank => Command::Ranking,
        Commands::List => Command::List,
        Commands::Export { file } => Command::Save { path: Some(file) },
        Commands::Import { file } => Command::Load { path: file },
    };

    // An import only touches memory; persist it as the new default records
    let persist = matches!(command, Command::Load { .. });

    let outcome = registry.execute(command)?;
    println!("{}", outcome);

    if persist {
        registry.save()?;
    }

    Ok(())
}
