use std::process::ExitCode;

use seo_driver::{Argument, Parser};

fn main() -> ExitCode {
    // usage errors exit with 1 as well, not clap's default of 2
    match Argument::try_parse() {
        Ok(argument) => seo_driver::run(&argument),
        Err(error) => {
            let _ = error.print();

            if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
