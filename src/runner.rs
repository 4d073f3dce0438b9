// src/runner.rs
//! Command surface shared by the GUI buttons and the CLI.

use std::{fmt, str::FromStr};

use crate::{
    config::consts::*,
    config::options::TableSource,
    data::Outcome,
    error::Result,
    host::BlockHost,
    scrape,
    translate::Translator,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    CollapseAll,
    Summer1Farming,
    Summer1Projects,
    Summer2Farming,
    Summer2Projects,
}

use Command::*;

impl Command {
    pub const ALL: [Command; 5] = [CollapseAll, Summer1Farming, Summer1Projects, Summer2Farming, Summer2Projects];

    /// CLI name.
    pub fn name(&self) -> &'static str {
        match self {
            CollapseAll     => "collapse-all",
            Summer1Farming  => "summer1-farming",
            Summer1Projects => "summer1-projects",
            Summer2Farming  => "summer2-farming",
            Summer2Projects => "summer2-projects",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            CollapseAll     => "Collapse All",
            Summer1Farming  => "Summer 1 Farming",
            Summer1Projects => "Summer 1 Projects",
            Summer2Farming  => "Summer 2 Farming",
            Summer2Projects => "Summer 2 Projects",
        }
    }

    /// Accepts CLI names, button labels and the older "Parse Summer…" labels, case-insensitively.
    pub fn from_name(s: &str) -> Option<Command> {
        let key = s.trim().to_ascii_lowercase();
        if let Some(c) = Self::ALL.iter().find(|c| c.name() == key || c.label().to_ascii_lowercase() == key) {
            return Some(*c);
        }
        match key.as_str() {
            "parse summer" | "parse-summer" | "parse summer farming" => Some(Summer1Farming),
            "parse summer developments" | "parse-summer-developments" => Some(Summer1Projects),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Command::from_name(s).ok_or_else(|| {
            let names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
            format!("unknown command {s:?} (expected one of: {})", names.join(", "))
        })
    }
}

fn farm<H: BlockHost + ?Sized>(host: &mut H, tr: &Translator, preset: &FarmingPreset) -> Result<Outcome> {
    scrape::parse_farming(host, tr, preset.blocks, preset.exclude, Some(preset.resources))
        .map(Outcome::Farming)
}

fn projects<H: BlockHost + ?Sized>(host: &mut H, tr: &Translator, block: &str) -> Result<Outcome> {
    scrape::parse_projects_in(host, tr, block).map(Outcome::Projects)
}

/// Run one command to completion against `host`.
pub fn run<H: BlockHost + ?Sized>(cmd: Command, host: &mut H, tr: &Translator) -> Result<Outcome> {
    logf!("Run: {} (blocks={})", cmd.label(), host.block_count());

    let outcome = match cmd {
        CollapseAll     => Ok(Outcome::Collapsed(scrape::collapse_all(host))),
        Summer1Farming  => farm(host, tr, &SUMMER1_FARMING),
        Summer1Projects => projects(host, tr, SUMMER1_PROJECTS_BLOCK),
        Summer2Farming  => farm(host, tr, &SUMMER2_FARMING),
        Summer2Projects => projects(host, tr, SUMMER2_PROJECTS_BLOCK),
    };

    match &outcome {
        Ok(o) => logf!("Run: {} OK ({} entries)", cmd.label(), o.len()),
        Err(e) => loge!("Run: {} failed: {e}", cmd.label()),
    }
    outcome
}

pub fn load_translator(src: &TableSource) -> Result<Translator> {
    match src {
        TableSource::BuiltIn => Ok(Translator::builtin().clone()),
        TableSource::File(path) => Translator::load(path),
    }
}
