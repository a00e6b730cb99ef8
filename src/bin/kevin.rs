//! Binary entry point for "six degrees of Kevin Bacon".
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use incidence_graph::GraphError;
use incidence_graph::io::dot::to_dot;
use incidence_graph::io::movies::{KEVIN_BACON, MovieDatabase};

#[derive(Parser, Debug)]
#[command(
    name = "kevin",
    version,
    about = "Find the shortest chain of movies linking an actor to Kevin Bacon"
)]
struct Cli {
    #[arg(value_name = "DATABASE", help = "Movie database, one `Movie/Actor/Actor...` record per line")]
    database: PathBuf,

    #[arg(value_name = "ACTOR", help = "Actor to connect, exactly as written in the database")]
    actor: String,

    #[arg(long, default_value = KEVIN_BACON, help = "Reference actor the path ends at")]
    source: String,

    #[arg(long, help = "Print the graph in GraphViz DOT syntax instead of solving")]
    dot: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut db = match MovieDatabase::open(&cli.database) {
        Ok(db) => db,
        Err(err) => {
            eprintln!("Error: can't read {}: {err}", cli.database.display());
            return ExitCode::from(2);
        }
    };

    if cli.dot {
        return match to_dot(db.graph()) {
            Ok(dot) => {
                print!("{dot}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: can't render graph: {err}");
                ExitCode::FAILURE
            }
        };
    }

    match db.shortest_path(&cli.source, &cli.actor) {
        Ok(Some(path)) => match db.path_names(&path) {
            Ok(names) => {
                for name in names {
                    println!("{name}");
                }
                println!("{}", path.hops());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        },
        Ok(None) => {
            eprintln!("Error: {} is not connected to {}.", cli.actor, cli.source);
            ExitCode::FAILURE
        }
        Err(GraphError::NotFound(name)) => {
            println!("Error: Can't find {name} in database.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
