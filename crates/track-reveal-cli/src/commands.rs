//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// track-reveal: watch, record or inspect a racing track being drawn point by point
#[derive(Parser, Debug)]
#[command(name = "track-reveal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML file overriding animation and render settings
    #[arg(short, long, global = true, env = "TRACK_REVEAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the animation in the terminal (q or Esc to quit)
    Play(PlayArgs),

    /// Record the animation to an animated GIF
    Record(RecordArgs),

    /// Save a PNG of the animation after a number of frames
    Snapshot(SnapshotArgs),

    /// Print the animation state after a number of frames
    Inspect(InspectArgs),

    /// Show the effective configuration as YAML
    Config(ConfigArgs),
}

/// Arguments for the play command
#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// Ticks per second
    #[arg(long, default_value = "60")]
    pub fps: u32,

    /// Stop after this many ticks instead of waiting for a key
    #[arg(long)]
    pub frames: Option<u64>,
}

/// Arguments for the record command
#[derive(Parser, Debug)]
pub struct RecordArgs {
    /// Output GIF file
    #[arg(short, long, default_value = "track.gif")]
    pub output: PathBuf,

    /// Ticks to simulate (default: until the line reaches full width)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Keep one GIF frame every N ticks
    #[arg(long, default_value = "20")]
    pub stride: u64,

    /// GIF playback rate in frames per second
    #[arg(long, default_value = "25")]
    pub fps: u8,

    /// Encoding quality (1-100)
    #[arg(long, default_value = "80")]
    pub quality: u8,
}

/// Arguments for the snapshot command
#[derive(Parser, Debug)]
pub struct SnapshotArgs {
    /// Number of ticks to advance before rendering
    #[arg(long)]
    pub frame: u64,

    /// Output PNG file
    #[arg(short, long, default_value = "track.png")]
    pub output: PathBuf,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Number of ticks to advance before inspecting
    #[arg(long)]
    pub frame: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: InspectFormat,
}

/// Output format for inspect
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InspectFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Full frame description as JSON
    Json,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print built-in defaults, ignoring --config
    #[arg(long)]
    pub defaults: bool,
}
