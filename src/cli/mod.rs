//! CLI argument definitions.

use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::device::{BACKLIGHT_CLASS_DIR, DEFAULT_DEVICE};

/// Adjust display backlight brightness through sysfs.
///
/// Examples: `bctl 40%` sets 40% of max, `bctl +10%` brightens, `bctl -10%` dims.
#[derive(Parser, Debug)]
#[command(name = "bctl", version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Percentage in the format of 10% (set brightness to 10%), -10% (10% less bright) or +10% (10% brighter)
    #[arg(
        value_name = "CHANGE_PERCENTAGE",
        allow_hyphen_values = true,
        required_unless_present_any = ["completions", "build_info"]
    )]
    pub change_percentage: Option<String>,

    /// sysfs backlight device in /sys/class/backlight you want to control
    #[arg(long, short = 'd', default_value = DEFAULT_DEVICE, env = "BCTL_DEVICE")]
    pub dev: String,

    /// Directory holding backlight devices
    #[arg(long, default_value = BACKLIGHT_CLASS_DIR, env = "BCTL_SYSFS_ROOT", hide = true)]
    pub sysfs_root: PathBuf,

    /// Show the computed change without writing it
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Output format (text for humans, json for scripts)
    #[arg(long, short = 'f', default_value = "text", env = "BCTL_FORMAT")]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long)]
    pub robot: bool,

    /// Verbose logging (repeat for more detail)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Disable colored output (also honours a non-empty NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Print build information and exit
    #[arg(long)]
    pub build_info: bool,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }

    /// Returns true if color is off via `--no-color` or the `NO_COLOR` value.
    pub fn colors_disabled(&self, no_color_env: Option<&OsStr>) -> bool {
        self.no_color || no_color_requested(no_color_env)
    }
}

/// `NO_COLOR` convention: any non-empty value disables color.
pub fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
