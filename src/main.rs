use clap::Parser;

use comment_census::cli::Cli;
use comment_census::{CensusError, EXIT_CONFIG_ERROR, EXIT_RUNTIME_ERROR, commands};

fn main() {
    let cli = Cli::parse();

    let exit_code = match commands::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(source) = std::error::Error::source(&e) {
                eprintln!("  caused by: {source}");
            }
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

fn exit_code_for(error: &CensusError) -> i32 {
    match error {
        CensusError::Config(_)
        | CensusError::InvalidPattern { .. }
        | CensusError::InvalidGlob { .. }
        | CensusError::TomlParse(_) => EXIT_CONFIG_ERROR,
        CensusError::FileRead { .. } | CensusError::Io(_) | CensusError::JsonSerialize(_) => {
            EXIT_RUNTIME_ERROR
        }
    }
}
