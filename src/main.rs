#![allow(non_snake_case)]
use log::{error, info};
use std::io;
use std::process::ExitCode;

use RustedQuad::Utils::console_io::ConsoleIO;
use RustedQuad::Utils::logger::init_logger;
use RustedQuad::numerical::experiment_config::ExperimentConfig;
use RustedQuad::numerical::experiment_runner::ExperimentRunner;

fn main() -> ExitCode {
    let config = ExperimentConfig::default();
    if let Err(msg) = init_logger(config.loglevel.as_deref()) {
        eprintln!("{}", msg);
        return ExitCode::from(1);
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = ConsoleIO::new(stdin.lock(), stdout.lock());
    let runner = ExperimentRunner::new(config);
    match runner.execute(&mut console) {
        Ok(_) => {
            info!(" \n \n Program ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}
