use crate::scene::controller::SliderAxis;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum AxisArg {
    Theta,
    Phi,
}

impl From<AxisArg> for SliderAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Theta => SliderAxis::Theta,
            AxisArg::Phi => SliderAxis::Phi,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct GlobalOpts {
    /// Scene configuration file; built-in defaults apply when absent.
    #[arg(short, long)]
    pub config_file: Option<String>,
    #[arg(short, long, default_value = "640")]
    pub width: u32,
    #[arg(long, default_value = "640")]
    pub height: u32,
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct App {
    #[clap(flatten)]
    pub global_opts: GlobalOpts,
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Action {
    /// Render one frame for the given raw slider positions.
    Render {
        #[arg(long, default_value = "157")]
        theta_raw: i64,
        #[arg(long, default_value = "314")]
        phi_raw: i64,
        #[arg(long, default_value = "render.png")]
        filename: String,
    },
    /// Step one slider across its whole range, one frame per event.
    Sweep {
        #[arg(long, value_enum, default_value = "phi")]
        axis: AxisArg,
        #[arg(long, default_value = "60")]
        frames: u32,
        #[arg(long, default_value = "sweep")]
        prefix: String,
    },
    /// Print the ray endpoint and scene statistics, without an image.
    Probe {
        #[arg(long, default_value = "157")]
        theta_raw: i64,
        #[arg(long, default_value = "314")]
        phi_raw: i64,
    },
}
