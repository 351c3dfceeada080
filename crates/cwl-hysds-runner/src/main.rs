use clap::Parser;
use cwl_hysds_runner::{execute_convert, init_logging, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.log_level.as_str()) {
        eprintln!("{error}");
        std::process::exit(1);
    }

    match execute_convert(&cli) {
        Ok(report) => {
            println!("{report}");
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
