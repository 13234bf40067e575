use log::info;
use simplelog::*;

/// Map a loglevel name to a filter. `None` means "use the default", which is Info.
/// "off" and "none" switch logging off.
pub fn parse_loglevel(loglevel: Option<&str>) -> Result<LevelFilter, String> {
    match loglevel {
        None => Ok(LevelFilter::Info),
        Some(level) => match level {
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            "off" | "none" => Ok(LevelFilter::Off),
            _ => Err(format!(
                "loglevel must be debug, info, warn, error, off or none, got '{}'",
                level
            )),
        },
    }
}

/// Install the terminal logger. Records go to stderr only: stdout carries prompts and results.
/// A logger that is already installed (second call, test harness) is left in place.
pub fn init_logger(loglevel: Option<&str>) -> Result<(), String> {
    let log_option = parse_loglevel(loglevel)?;
    if log_option == LevelFilter::Off {
        return Ok(());
    }
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => {
            info!("Program started with loglevel: {}", log_option);
            Ok(())
        }
        Err(_) => Ok(()),
    }
}
