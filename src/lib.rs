//! bctl - adjust display backlight brightness through sysfs.
//!
//! This library exposes the core functionality of the `bctl` CLI for use in
//! tests and other tools.
//!
//! # Modules
//!
//! - `brightness`: Percentage expressions and the brightness calculation
//! - `device`: Backlight device abstraction (sysfs and mock)
//! - `adjust`: Read, calculate and write in one step
//! - `error`: Error types with user-recoverable hints
//! - `cli`: Command-line definitions
//! - `logging`: Tracing subscriber setup
//! - `output`: Human and robot error reports
#![forbid(unsafe_code)]

pub mod adjust;
pub mod brightness;
pub mod cli;
pub mod device;
pub mod error;
pub mod logging;
pub mod output;

pub use adjust::{adjust, Adjustment};
pub use brightness::{calc_new_brightness, PercentChange, Sign};
pub use error::{BctlError, Result};
