//! Command-line front end for the search query parser.
//!
//! Prints the parsed query as JSON, for scripting and for debugging the
//! filter the backend will receive.

use std::io::Read;

use clap::Parser;

#[derive(Parser)]
#[command(name = "paymap-search", about = "Parse a paymap search query")]
struct Cli {
    /// Query text; reads stdin when omitted
    query: Vec<String>,

    /// Also print the canonical filter string
    #[arg(long)]
    filter: bool,
}

fn main() {
    let cli = Cli::parse();

    let input = if cli.query.is_empty() {
        let mut buffer = String::new();
        if std::io::stdin().read_to_string(&mut buffer).is_err() {
            eprintln!("error: could not read stdin");
            std::process::exit(1);
        }
        buffer
    } else {
        cli.query.join(" ")
    };

    let query = paymap_search::parse(&input);

    match serde_json::to_string_pretty(&query) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }

    if cli.filter {
        println!("{}", paymap_search::build_filter_query(&query));
    }
}
