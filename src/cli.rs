// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    bonus::{self, Bonus},
    config::options::{AppOptions, OutputFormat, OutputOptions, TableSource},
    data::{FarmingResult, Outcome},
    error::Result,
    file,
    host::BlockHost,
    output,
    runner::{self, Command},
    specs::Accordion,
    tsv,
};

#[derive(Parser, Debug)]
#[command(name = "kz_parse", version)]
#[command(about = "Parse drop chances and project costs from a saved Kazemai event page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Action,

    /// Debug-level lines in .store/debug.log
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Run one page command (collapse-all, summer1-farming, summer1-projects, summer2-farming, summer2-projects)
    Run {
        /// Command name or button label
        command: Command,

        /// Saved event page (HTML)
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// TSV only: first row holds column names
        #[arg(long)]
        headers: bool,

        /// Write here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Translation table (JSON array of [source, key] pairs) instead of the built-in one
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Farming only: print expected items per run with this bonus (repeatable, e.g. water=2)
        #[arg(short, long)]
        bonus: Vec<String>,
    },

    /// Expected items per run from a farming JSON file, with drop bonuses
    Eval {
        /// Farming JSON (from `run` or `import-tsv`)
        drops: PathBuf,

        /// resource=value, repeatable
        #[arg(short, long)]
        bonus: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        #[arg(long)]
        headers: bool,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the page's blocks and whether each starts open
    Blocks {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Convert a currency drop sheet (TSV) into farming JSON
    ImportTsv {
        sheet: PathBuf,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Tsv,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f { Format::Json => OutputFormat::Json, Format::Tsv => OutputFormat::Tsv }
    }
}

fn to_bonus(pairs: &[String]) -> Result<Bonus> {
    bonus::bonus_from_pairs(pairs.iter().map(String::as_str))
}

fn table_source(table: Option<PathBuf>) -> TableSource {
    table.map(TableSource::File).unwrap_or_default()
}

/// Print to stdout, or write to `out` and say where.
fn emit(text: &str, out: Option<&PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            let written = file::write_output(path, text)?;
            eprintln!("Wrote {}", written.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Action::Run { command, input, format, headers, out, table, bonus } => {
            let mut opts = AppOptions::default();
            opts.input = Some(input);
            opts.table = table_source(table);
            opts.output.format = format.into();
            opts.output.include_headers = headers;
            if let Some(p) = &out {
                opts.output.set_path(&p.to_string_lossy());
            }
            run_command(command, &opts, &to_bonus(&bonus)?)
        }
        Action::Eval { drops, bonus, format, headers, out } => {
            let result: FarmingResult = serde_json::from_str(&std::fs::read_to_string(&drops)?)?;
            let mut opts = OutputOptions::default();
            opts.format = format.into();
            opts.include_headers = headers;
            let eval = bonus::evaluate(&result, &to_bonus(&bonus)?);
            emit(&output::render_yields(&eval, &opts)?, out.as_ref())
        }
        Action::Blocks { input, table } => {
            let tr = runner::load_translator(&table_source(table))?;
            let page = Accordion::load(&input)?;
            for (ix, header) in page.block_headers().iter().enumerate() {
                let mark = if page.is_open(ix) { "open" } else { "closed" };
                println!("{ix}\t{mark}\t{}\t{header}", tr.translate(header));
            }
            Ok(())
        }
        Action::ImportTsv { sheet, out } => {
            let text = std::fs::read_to_string(&sheet)?;
            let result = tsv::import_currency_drops(&text)?;
            emit(&output::to_json(&result)?, out.as_ref())
        }
    }
}

/// With a non-empty `bonus`, a farming result is printed as expected items per run.
pub fn run_command(command: Command, opts: &AppOptions, bonus: &Bonus) -> Result<()> {
    let tr = runner::load_translator(&opts.table)?;
    let input = opts.input.as_deref().ok_or(crate::Error::NoDocument)?;
    let mut page = Accordion::load(input)?;

    let outcome = runner::run(command, &mut page, &tr)?;
    let text = match &outcome {
        Outcome::Farming(result) if !bonus.is_empty() => {
            Some(output::render_yields(&bonus::evaluate(result, bonus), &opts.output)?)
        }
        _ => output::render(&outcome, &opts.output)?,
    };
    match text {
        Some(text) => emit(&text, opts.output.custom_path().map(PathBuf::from).as_ref()),
        None => {
            eprintln!("{}: nothing to output", command.label());
            Ok(())
        }
    }
}
