use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::error::AppError;
use crate::model::EventConfig;

/// # Errors
///
/// Will return `Err` if the command line or environment is invalid, or the event file does not describe a valid event
pub fn args_checks() -> Result<CleanArgs, AppError> {
    let args = Args::try_parse().map_err(|e| AppError::Config(e.to_string()))?;
    CleanArgs::new(args)
}

impl CleanArgs {
    /// # Errors
    ///
    /// Will return `Err` if the event json does not describe a valid course and roster
    pub fn new(args: Args) -> Result<Self, AppError> {
        let mut event = match args.event {
            Some(json) => EventConfig::from_json(json)
                .map_err(|e| AppError::Config(format!("event file: {e}")))?,
            None => EventConfig::default(),
        };
        if let Some(title) = args.title.filter(|t| !t.trim().is_empty()) {
            event.title = title;
        }

        Ok(CleanArgs {
            bind: args.bind,
            api_url: args.api_url,
            refresh_interval: Duration::from_secs(args.refresh_secs),
            event,
        })
    }
}
