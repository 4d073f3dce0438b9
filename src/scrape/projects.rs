// src/scrape/projects.rs
// Project tables → material costs per project.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{MATERIAL_SEP, PROJECT_ID_PATTERN, PROJECT_PREFIX};
use crate::core::sanitize::parse_int_prefix;
use crate::data::{ProjectCost, ProjectsResult};
use crate::error::{Error, Result};
use crate::host::{BlockHost, ProjectTable};
use crate::translate::Translator;

use super::blocks::{open_blocks, set_block_open_state};

static PROJECT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PROJECT_ID_PATTERN).expect("PROJECT_ID_PATTERN is a valid regex")
});

/// `"開拓計畫 3 A：…"` → `"Project 3 A"`.
pub fn project_name(header: &str) -> Result<String> {
    let caps = PROJECT_ID
        .captures(header)
        .ok_or_else(|| Error::Schema(format!("no project id in header {header:?}")))?;
    Ok(format!("{PROJECT_PREFIX}{}", &caps[1]))
}

/// Pair translated material names with counts. Stops at the shorter list.
pub fn project_cost(table: &ProjectTable, tr: &Translator) -> Result<ProjectCost> {
    let materials = tr.translate(&table.materials);
    let mut cost = ProjectCost::new();

    for (material, count) in materials.split(MATERIAL_SEP).zip(table.counts.split(MATERIAL_SEP)) {
        let n = parse_int_prefix(count)
            .ok_or_else(|| Error::Number { what: "material count", text: s!(count) })?;
        cost.insert(s!(material.trim()), n);
    }
    Ok(cost)
}

/// Read the project tables of the *first* open block only.
/// Any other open block is ignored; open the right block first.
pub fn parse_projects<H: BlockHost + ?Sized>(host: &H, tr: &Translator) -> Result<ProjectsResult> {
    let mut projects = ProjectsResult::new();

    let open = open_blocks(host);
    if open.len() > 1 {
        logd!("Projects: {} blocks open, reading only the first", open.len());
    }

    if let Some(&ix) = open.first() {
        for table in host.project_tables(ix)? {
            let name = project_name(&table.header)?;
            let cost = project_cost(&table, tr)?;
            projects.insert(name, cost);
        }
    }

    logf!("Projects: {} projects", projects.len());
    Ok(projects)
}

/// Open exactly `block` (by translated header), then read its projects.
pub fn parse_projects_in<H: BlockHost + ?Sized>(
    host: &mut H,
    tr: &Translator,
    block: &str,
) -> Result<ProjectsResult> {
    set_block_open_state(host, tr, &[block], false);
    parse_projects(host, tr)
}
