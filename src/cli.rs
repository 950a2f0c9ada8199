use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::UtilConfig;
use crate::expect::expect_or_exit;
use crate::fatal::{fatal, fatal_default};
use crate::metrics::{self, MetricsSnapshot};
use crate::random::{try_random_int, try_random_real};
use crate::range::is_in_range;

/// Probe CLI: every helper reachable from the shell.
#[derive(Parser, Debug)]
#[command(name = "utilkit", version, about = "utilkit helper probe")]
pub struct Cli {
    /// Exit code for `fatal` without --code (overrides UTILKIT_EXIT_CODE)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub default_exit_code: Option<i32>,
    /// Also emit an error! log record on fatal exits (like UTILKIT_LOG_FATAL=1)
    #[arg(long, global = true, default_value_t = false)]
    pub log_fatal: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print MESSAGE to stderr and exit with CODE
    Fatal {
        #[arg(long)]
        message: String,
        /// Defaults to UTILKIT_EXIT_CODE, or 1
        #[arg(long, allow_negative_numbers = true)]
        code: Option<i32>,
    },
    /// Print VALUE, or exit 1 with "ERROR: MESSAGE" if it is missing
    Expect {
        #[arg(long)]
        message: String,
        #[arg(long)]
        value: Option<String>,
    },
    /// Draw uniform integers in [min, max]
    RandInt {
        #[arg(long, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, allow_negative_numbers = true)]
        max: i64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Draw uniform reals in [min, max]
    RandReal {
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print whether VALUE lies in [center - margin, center + margin]
    InRange {
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        #[arg(long, allow_negative_numbers = true)]
        center: f64,
        #[arg(long, allow_negative_numbers = true)]
        margin: f64,
    },
}

#[derive(Serialize)]
struct DrawReport<T: Serialize> {
    min: T,
    max: T,
    samples: Vec<T>,
    metrics: MetricsSnapshot,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.default_exit_code.is_some() || cli.log_fatal {
        let mut cfg = UtilConfig::from_env();
        if let Some(code) = cli.default_exit_code {
            cfg = cfg.with_default_exit_code(code);
        }
        if cli.log_fatal {
            cfg = cfg.with_log_fatal(true);
        }
        cfg.install().context("apply CLI config")?;
    }

    match cli.cmd {
        Cmd::Fatal { message, code } => match code {
            Some(c) => fatal(&message, c),
            None => fatal_default(&message),
        },

        Cmd::Expect { message, value } => {
            let v = expect_or_exit(&value, &message);
            println!("{}", v);
            Ok(())
        }

        Cmd::RandInt { min, max, count, json } => {
            let samples = (0..count)
                .map(|_| try_random_int(min, max))
                .collect::<Result<Vec<_>>>()
                .context("rand-int")?;
            print_draws(min, max, samples, json)
        }

        Cmd::RandReal { min, max, count, json } => {
            let samples = (0..count)
                .map(|_| try_random_real(min, max))
                .collect::<Result<Vec<_>>>()
                .context("rand-real")?;
            print_draws(min, max, samples, json)
        }

        Cmd::InRange { value, center, margin } => {
            println!("{}", is_in_range(value, center, margin));
            Ok(())
        }
    }
}

fn print_draws<T>(min: T, max: T, samples: Vec<T>, json: bool) -> Result<()>
where
    T: Serialize + std::fmt::Display,
{
    if json {
        let report = DrawReport {
            min,
            max,
            samples,
            metrics: metrics::snapshot(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        for s in &samples {
            println!("{}", s);
        }
    }
    Ok(())
}
