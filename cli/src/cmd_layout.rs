// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use clap::{ArgMatches, Command};
use timeslot_core::{SchedulerItem, compute_layout};
use tokio::fs;

use crate::arg::{CommonArgs, LayoutArgs};
use crate::layout_formatter::LayoutFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdLayout {
    pub file: PathBuf,
    pub output_format: OutputFormat,
}

impl CmdLayout {
    pub const NAME: &str = "layout";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("l")
            .about("Assign columns to overlapping items read from a JSON file")
            .arg(LayoutArgs::file())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: LayoutArgs::get_file(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "computing layout...");
        let items = read_items(&self.file).await?;
        let layout = compute_layout(&items);
        let formatter = LayoutFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&layout));
        Ok(())
    }
}

#[derive(Debug, serde::Deserialize)]
struct ItemRaw {
    start: NaiveDateTime,
    end: NaiveDateTime,
    #[serde(default)]
    summary: String,
}

/// Reads the items to lay out, a JSON array of `{ start, end, summary }` objects.
async fn read_items(path: &Path) -> Result<Vec<SchedulerItem<String>>, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read items file at {}: {}", path.display(), e))?;
    let raw: Vec<ItemRaw> = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid items file {}: {}", path.display(), e))?;

    let items: Vec<_> = raw
        .into_iter()
        .map(|a| SchedulerItem::new(a.start, a.end, a.summary))
        .collect();

    let degenerate = items.iter().filter(|a| a.is_degenerate()).count();
    if degenerate > 0 {
        tracing::warn!(degenerate, "items ending before they start are laid out on their own");
    }
    Ok(items)
}
