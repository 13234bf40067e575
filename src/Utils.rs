//! different utility modules used throughout the project
/// terminal logger set-up (log + simplelog)
pub mod logger;
/// console collaborator: prompts, reads scalars, writes result lines
pub mod console_io;
