// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cli;
mod cmd_layout;
mod cmd_slots;
mod config;
mod layout_formatter;
mod slot_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
