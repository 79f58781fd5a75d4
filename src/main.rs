use clap::Parser;

mod error;

use error::Error;

/// A CLI that renders the CircleCI API v2 OpenAPI document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
enum Cli {
    /// Render the document as JSON.
    Json(Dump),
    /// Render the document as YAML.
    Yaml(Dump),
}

#[derive(Parser, Debug)]
struct Dump {
    /// The path to write to; stdout when omitted.
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,
}

fn emit(rendered: String, output: Option<std::path::PathBuf>) -> Result<(), Error> {
    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli {
        Cli::Json(args) => emit(circleci_openapi::to_json_string()?, args.output),
        Cli::Yaml(args) => emit(circleci_openapi::to_yaml_string()?, args.output),
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
