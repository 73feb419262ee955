use clap::Parser;
use serde_json::Value;
use std::time::Duration;

use crate::model::EventConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the scoreboard listens on
    #[arg(long, env = "FORESCORE_BIND", default_value = "0.0.0.0:5201")]
    pub bind: String,

    /// Remote scores endpoint, read with GET and written with PUT
    #[arg(
        long,
        env = "FORESCORE_API_URL",
        default_value = "https://forescore.app/api/scores",
        value_parser = crate::args::validation::check_http_url
    )]
    pub api_url: String,

    /// Seconds between background refreshes
    #[arg(
        long,
        env = "FORESCORE_REFRESH_SECS",
        default_value = "30",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub refresh_secs: u64,

    /// Json file describing the course and the teams; the built-in event is used when absent
    #[arg(
        long,
        env = "FORESCORE_EVENT",
        value_name = "EVENT_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub event: Option<Value>,

    /// Overrides the event title
    #[arg(long, env = "FORESCORE_TITLE")]
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub api_url: String,
    pub refresh_interval: Duration,
    pub event: EventConfig,
}
