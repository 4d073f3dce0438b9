// src/specs/project.rs
//! Reads one project table. The first body holds three rows of interest:
//! header (`…3 A…`), materials (`木材/石材`), counts (`10/5`). Materials and
//! counts are taken from the first cell of their row.

use scraper::ElementRef;

use crate::core::html::{first_child, nth_child, require, select_first, selector, text_of};
use crate::error::Result;
use crate::host::ProjectTable;

pub fn read_project(table: ElementRef<'_>) -> Result<ProjectTable> {
    let tbody = selector("tbody")?;
    let body = require(select_first(table, &tbody), "project table body")?;

    let header = text_of(require(first_child(body), "project header row")?);
    let cell = |row: usize, what: &str| -> Result<String> {
        let tr = require(nth_child(body, row), &format!("{what} row in {header:?}"))?;
        let td = require(first_child(tr), &format!("{what} cell in {header:?}"))?;
        Ok(text_of(td))
    };

    Ok(ProjectTable {
        materials: cell(1, "materials")?,
        counts: cell(2, "counts")?,
        header,
    })
}
