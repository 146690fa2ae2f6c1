use std::path::PathBuf;

use clap::{Parser, Subcommand};
use time::{macros::format_description, Date};

#[derive(Debug, Parser)]
#[command(name = "worktime")]
#[command(about = "Work-time balance and monthly recommendations")]
pub struct Cli {
    /// Directory holding base.yaml and the per-environment configuration
    #[arg(long, default_value = "config")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the annual and monthly balance of a user
    Summary {
        /// JSON request with the user, activities, vacations and holidays
        #[arg(short, long)]
        input: PathBuf,
        /// Evaluation date (YYYY-MM-DD), defaults to the request date or today
        #[arg(short, long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Print the workable days of each month of a year
    Calendar {
        /// JSON file with a `holidays` list
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        year: i32,
    },
}

fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}
