// src/tsv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::bonus::Evaluation;
use crate::config::consts::{TSV_CURRENCIES, TSV_ROUND_DIGITS, TSV_SKIP_PREFIX};
use crate::core::sanitize::{parse_float_prefix, round_to};
use crate::data::{DropEntry, FarmingResult, ProjectsResult};
use crate::error::{Error, Result};

pub const SEP: char = '\t';

/* ---------------- Parsing ---------------- */

/// Minimal TSV parser (quotes + CRLF tolerant). Blank lines are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled quote
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without newline, even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Currency drop sheet → farming result.
///
/// A row whose first cell names a currency starts that currency's section.
/// Any other row with a first cell is a location:
/// `location, initial, initial+stacks[, …]`. Locations are lower-cased.
/// Rows starting with "Your Bonus:" are skipped.
pub fn import_currency_drops(text: &str) -> Result<FarmingResult> {
    let mut out = FarmingResult::new();
    let mut current: Option<String> = None;

    for row in parse_rows(text, SEP) {
        let Some(first) = row.first() else { continue };
        if first.starts_with(TSV_SKIP_PREFIX) { continue; }

        let label = first.trim().to_lowercase();
        if TSV_CURRENCIES.contains(&label.as_str()) {
            current = Some(label);
            continue;
        }
        if label.is_empty() { continue; }

        let material = current.as_ref().ok_or_else(|| {
            Error::Schema(format!("location {label:?} before any currency row"))
        })?;

        let values = row[1..]
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(|c| parse_float_prefix(c).ok_or_else(|| Error::Number { what: "drop value", text: s!(c) }))
            .collect::<Result<Vec<f64>>>()?;
        let &[initial, with_stacks, ..] = values.as_slice() else {
            return Err(Error::Schema(format!("location {label:?} needs two values, found {}", values.len())));
        };

        out.entry(label).or_default().insert(
            material.clone(),
            DropEntry { initial, stacks: round_to(with_stacks - initial, TSV_ROUND_DIGITS) },
        );
    }

    logf!("Import: {} locations", out.len());
    Ok(out)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn rows_to_string(headers: Option<&[&str]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let h: Vec<String> = h.iter().map(|s| s!(*s)).collect();
        let _ = write_row(&mut buf, &h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// One row per (node, resource): `Node, Resource, Initial, Stacks`.
pub fn farming_to_string(result: &FarmingResult, include_headers: bool) -> String {
    let rows: Vec<Vec<String>> = result
        .iter()
        .flat_map(|(node, drops)| {
            drops.iter().map(move |(res, d)| {
                vec![node.clone(), res.clone(), d.initial.to_string(), d.stacks.to_string()]
            })
        })
        .collect();
    let headers = include_headers.then_some(&["Node", "Resource", "Initial", "Stacks"][..]);
    rows_to_string(headers, &rows, SEP)
}

/// One row per (node, resource): `Node, Resource, Expected`.
pub fn yields_to_string(result: &Evaluation, include_headers: bool) -> String {
    let rows: Vec<Vec<String>> = result
        .iter()
        .flat_map(|(node, y)| {
            y.iter().map(move |(res, n)| vec![node.clone(), res.clone(), n.to_string()])
        })
        .collect();
    let headers = include_headers.then_some(&["Node", "Resource", "Expected"][..]);
    rows_to_string(headers, &rows, SEP)
}

/// One row per (project, material): `Project, Material, Count`.
pub fn projects_to_string(result: &ProjectsResult, include_headers: bool) -> String {
    let rows: Vec<Vec<String>> = result
        .iter()
        .flat_map(|(project, cost)| {
            cost.iter().map(move |(mat, n)| vec![project.clone(), mat.clone(), n.to_string()])
        })
        .collect();
    let headers = include_headers.then_some(&["Project", "Material", "Count"][..]);
    rows_to_string(headers, &rows, SEP)
}
