// src/cli.rs
//
// One-shot lookup from the terminal:
//   cli                       today's meal
//   cli --date 2024-03-04     a given day
//   cli --date 2024-03-04 --json

use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{Result, eyre};

use crate::{
    config::{consts::MSG_LOADING, options::QueryOptions},
    core::{MealSource, NeisClient},
    date::{QueryDate, default_date},
    pipeline,
    progress::Progress,
    render::{self, Page, RenderState},
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "School meal menu and nutrition for one day")]
pub struct Args {
    /// Date as YYYY-MM-DD (default: today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, date: &QueryDate) {
        eprintln!("{MSG_LOADING} ({date})");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let client = NeisClient::new(QueryOptions::default())?;
    let stdout = io::stdout();
    run_with(&args, &client, &mut stdout.lock())
}

/// Everything but argument parsing and client construction.
pub fn run_with(args: &Args, source: &dyn MealSource, out: &mut dyn Write) -> Result<()> {
    let input = args.date.clone().unwrap_or_else(default_date);
    let state = pipeline::run(&input, source, &mut CliProgress);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
    } else if !matches!(state, RenderState::Error { .. }) {
        write_page(out, &render::render(&state))?;
    }

    match state {
        RenderState::Error { message } => Err(eyre!(message)),
        _ => Ok(()),
    }
}

fn write_page(out: &mut dyn Write, page: &Page) -> io::Result<()> {
    if !page.details_visible {
        return Ok(());
    }
    if page.date_display.visible {
        writeln!(out, "{}", page.date_display.text)?;
    }
    if page.status_heading.visible {
        writeln!(out, "{}", page.status_heading.text)?;
    }
    for (section, bullet) in [(&page.menu, "- "), (&page.nutrition, "  ")] {
        if section.is_empty() {
            continue;
        }
        writeln!(out)?;
        if let Some(h) = &section.heading {
            writeln!(out, "[{h}]")?;
        }
        for line in &section.lines {
            writeln!(out, "{bullet}{line}")?;
        }
    }
    Ok(())
}
