//! Apply a percentage expression to a backlight device.

use serde::Serialize;
use tracing::{debug, info};

use crate::brightness::calc_new_brightness;
use crate::device::Backlight;
use crate::error::{BctlError, Result};

/// Outcome of a brightness adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub device: String,
    pub max: u32,
    pub previous: u32,
    pub new: u32,
    /// False for dry runs.
    pub written: bool,
}

/// Read the device, compute the new level for `expr` and write it.
///
/// Devices whose maximum is 1 only support on/off and are rejected before
/// `expr` is looked at. With `dry_run` the new level is computed but never
/// written.
pub fn adjust<B>(device: &B, expr: &str, dry_run: bool) -> Result<Adjustment>
where
    B: Backlight + ?Sized,
{
    let max = device.max_brightness()?;
    if max == 1 {
        return Err(BctlError::UnsupportedDevice {
            path: device.path().to_path_buf(),
        });
    }

    let previous = device.brightness()?;
    let new = calc_new_brightness(previous, max, expr)?;
    debug!(device = device.name(), expr, previous, new, max, "Computed brightness");

    if !dry_run {
        device.set_brightness(new)?;
        info!(device = device.name(), previous, new, "Brightness updated");
    }

    Ok(Adjustment {
        device: device.name().to_string(),
        max,
        previous,
        new,
        written: !dry_run,
    })
}
