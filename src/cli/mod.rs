//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each binary's arguments:
//! - join: `join-settings` arguments
//! - split: `split-settings` arguments and lenient argument screening

use clap::builder::{Styles, styling::AnsiColor};

pub mod join;
pub mod split;

pub use join::JoinCli;
pub use split::{LenientArgs, SplitCli, screen_split_args};

/// Help styling shared by both binaries
pub fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}
