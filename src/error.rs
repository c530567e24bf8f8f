//! Error types for backlight operations.

use std::path::PathBuf;

use thiserror::Error;

/// Remediation printed when the brightness entry rejects our write.
pub const UDEV_HELP: &str = "\
You don't seem to have permission to write to the selected backlight brightness sysfs entry.
Add the below section to your udev rules,
for example in /etc/udev/rules.d/backlight.rules

ACTION==\"add\", SUBSYSTEM==\"backlight\", KERNEL==\"acpi_video0\", RUN+=\"/bin/chgrp video /sys/class/backlight/%k/brightness\"
ACTION==\"add\", SUBSYSTEM==\"backlight\", KERNEL==\"acpi_video0\", RUN+=\"/bin/chmod g+w /sys/class/backlight/%k/brightness\"

This allows everyone that is part of the `video` group to write to the brightness entry of the acpi_video0 backlight device.
So after you apply the new rule add yourself to the `video` group and relogin.";

/// Primary error type for backlight operations.
#[derive(Error, Debug)]
pub enum BctlError {
    // Expression errors
    #[error("Invalid change_percentage: {expr}")]
    InvalidExpression { expr: String },

    #[error("Percentage must be between 100 and 0, got {value}")]
    OutOfRange { value: f64 },

    // Device errors
    #[error("Invalid device name: {name}")]
    InvalidDeviceName { name: String },

    #[error("Backlight {name} not found")]
    DeviceNotFound { name: String },

    #[error("The backlight in {} doesn't support proper brightness controls", .path.display())]
    UnsupportedDevice { path: PathBuf },

    #[error("Permission denied writing {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BctlError {
    /// Short machine-friendly name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidExpression { .. } => "invalid_expression",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidDeviceName { .. } => "invalid_device_name",
            Self::DeviceNotFound { .. } => "device_not_found",
            Self::UnsupportedDevice { .. } => "unsupported_device",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::Io { .. } => "io",
        }
    }

    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        !matches!(self, Self::UnsupportedDevice { .. } | Self::Io { .. })
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidExpression { .. } => {
                Some("Use 10% to set, +10% to brighten or -10% to dim")
            }
            Self::OutOfRange { .. } => Some("Use a percentage between 0% and 100%"),
            Self::InvalidDeviceName { .. } => {
                Some("Pass a bare device name such as intel_backlight")
            }
            Self::DeviceNotFound { .. } => {
                Some("Check /sys/class/backlight for available devices")
            }
            Self::PermissionDenied { .. } => Some("Grant the video group write access"),
            Self::UnsupportedDevice { .. } | Self::Io { .. } => None,
        }
    }

    /// Multi-line operator guidance, printed in place of the short message.
    pub const fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::PermissionDenied { .. } => Some(UDEV_HELP),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using BctlError.
pub type Result<T> = std::result::Result<T, BctlError>;
