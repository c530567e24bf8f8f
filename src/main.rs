//! bctl - adjust display backlight brightness through sysfs.
//!
//! Silent on success; prints a single message and exits non-zero on failure.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};

use clap::Parser;
use console::style;
use serde::Serialize;

use bctl::adjust::{adjust, Adjustment};
use bctl::cli::Cli;
use bctl::device::SysfsBacklight;
use bctl::error::{BctlError, Result};
use bctl::logging::init_logging;
use bctl::output;

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> bool {
        option_env!("VERGEN_GIT_DIRTY") == Some("true")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    let no_color = cli.colors_disabled(std::env::var_os("NO_COLOR").as_deref());
    if no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
    }
    if no_color || !io::stderr().is_terminal() {
        console::set_colors_enabled_stderr(false);
    }

    init_logging(cli.use_json(), cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        cmd_completions(shell);
        return Ok(());
    }
    if cli.build_info {
        cmd_build_info(cli);
        return Ok(());
    }

    // clap enforces the positional unless one of the flags above is set
    let Some(expr) = cli.change_percentage.as_deref() else {
        return Ok(());
    };

    let device = SysfsBacklight::open(&cli.sysfs_root, &cli.dev)?;
    let outcome = adjust(&device, expr, cli.dry_run)?;

    if cli.dry_run {
        output_plan(cli, &outcome);
    }
    Ok(())
}

fn output_plan(cli: &Cli, outcome: &Adjustment) {
    if cli.use_json() {
        output_json(cli, outcome);
    } else {
        println!(
            "{}: {} -> {} (max {})",
            style(&outcome.device).bold(),
            outcome.previous,
            style(outcome.new).green(),
            outcome.max
        );
    }
}

fn cmd_build_info(cli: &Cli) {
    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({
                "version": build_info::VERSION,
                "git_sha": build_info::git_sha(),
                "git_dirty": build_info::git_dirty(),
                "build_timestamp": build_info::build_timestamp(),
                "rustc_version": build_info::rustc_semver(),
                "target": build_info::target(),
            }),
        );
    } else {
        println!("bctl {}", build_info::VERSION);
        println!(
            "git: {}{}",
            build_info::git_sha(),
            if build_info::git_dirty() { " (dirty)" } else { "" }
        );
        println!("built: {}", build_info::build_timestamp());
        println!("rustc: {}", build_info::rustc_semver());
        println!("target: {}", build_info::target());
    }
}

fn cmd_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    clap_complete::generate(shell, &mut Cli::command(), "bctl", &mut io::stdout());
}

fn output_json<T: Serialize>(cli: &Cli, data: &T) {
    let json = if cli.use_compact_json() {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    println!("{}", json.unwrap_or_default());
}

fn output_error(cli: &Cli, error: &BctlError) {
    if cli.use_json() {
        let json = output::error_json(error);
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
    } else {
        eprintln!("{}", output::human_error(error));
    }
}
