//! # mockup-layout CLI
//!
//! Usage:
//!   mockup-layout arrange screen.json --direction grid --columns 3 -o out.json
//!   cat screen.json | mockup-layout resolve
//!   mockup-layout tidy screen.json --options layout.json
//!   mockup-layout example > screen.json

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mockup_layout::layout::{Align, Direction, Padding};
use mockup_layout::model::{Edges, Screen};
use mockup_layout::screen::{arrange_screen, changed_ids, resolve_screen, tidy_screen};
use mockup_layout::{LayoutError, LayoutOptions, Result};

#[derive(Parser, Debug)]
#[command(
    name = "mockup-layout",
    about = "Arrange mockup screens and resolve unintended element overlaps"
)]
struct Cli {
    /// Log each push and layout pass to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flow elements vertically, horizontally, or into a grid.
    Arrange {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Push apart elements that overlap by accident.
    Resolve {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Arrange, then resolve overlaps.
    Tidy {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Print an example screen.
    Example,
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Screen JSON file. Reads stdin when omitted.
    input: Option<PathBuf>,
    /// Where to write the updated screen. Writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Layout options JSON file. Flags below override its values.
    #[arg(long)]
    options: Option<PathBuf>,
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,
    #[arg(long)]
    spacing: Option<i64>,
    /// One value for all sides, or `top,right,bottom,left`.
    #[arg(long)]
    padding: Option<String>,
    #[arg(long, value_enum)]
    align: Option<AlignArg>,
    #[arg(long)]
    columns: Option<i64>,
    /// Only reposition these ids.
    #[arg(long, value_delimiter = ',')]
    element_ids: Option<Vec<String>>,
    #[arg(long, allow_negative_numbers = true)]
    start_offset: Option<i64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    Vertical,
    Horizontal,
    Grid,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlignArg {
    Stretch,
    Center,
    Start,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Vertical => Direction::Vertical,
            DirectionArg::Horizontal => Direction::Horizontal,
            DirectionArg::Grid => Direction::Grid,
        }
    }
}

impl From<AlignArg> for Align {
    fn from(a: AlignArg) -> Self {
        match a {
            AlignArg::Stretch => Align::Stretch,
            AlignArg::Center => Align::Center,
            AlignArg::Start => Align::Start,
        }
    }
}

impl LayoutArgs {
    fn resolve(self) -> Result<LayoutOptions> {
        let mut options = match &self.options {
            Some(path) => mockup_layout::parse_options(&fs::read_to_string(path)?)?,
            None => LayoutOptions::default(),
        };
        if let Some(d) = self.direction {
            options.direction = d.into();
        }
        if let Some(s) = self.spacing {
            options.spacing = s;
        }
        if let Some(p) = &self.padding {
            options.padding = parse_padding(p)?;
        }
        if let Some(a) = self.align {
            options.align = a.into();
        }
        if let Some(c) = self.columns {
            options.columns = c;
        }
        if self.element_ids.is_some() {
            options.element_ids = self.element_ids;
        }
        if self.start_offset.is_some() {
            options.start_offset = self.start_offset;
        }
        Ok(options)
    }
}

fn parse_padding(raw: &str) -> Result<Padding> {
    let parts: Vec<i64> = raw
        .split(',')
        .map(|p| p.trim().parse::<i64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| LayoutError::InvalidOptions(format!("padding '{}': {}", raw, e)))?;
    match parts.as_slice() {
        [v] => Ok(Padding::Uniform(*v)),
        [top, right, bottom, left] => Ok(Padding::Edges(Edges {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        })),
        _ => Err(LayoutError::InvalidOptions(format!(
            "padding '{}': expected 1 or 4 comma-separated values",
            raw
        ))),
    }
}

fn read_screen(input: Option<&PathBuf>) -> Result<Screen> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn write_screen(screen: &Screen, output: Option<&PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(screen)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("✓ Written {} elements to {}", screen.elements.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn run(command: Command) -> Result<()> {
    let (io, before, after) = match command {
        Command::Example => {
            print!("{}", example_screen_json());
            return Ok(());
        }
        Command::Arrange { io, layout } => {
            let screen = read_screen(io.input.as_ref())?;
            let updated = arrange_screen(&screen, &layout.resolve()?)?;
            (io, screen, updated)
        }
        Command::Resolve { io } => {
            let screen = read_screen(io.input.as_ref())?;
            let updated = resolve_screen(&screen)?;
            (io, screen, updated)
        }
        Command::Tidy { io, layout } => {
            let screen = read_screen(io.input.as_ref())?;
            let updated = tidy_screen(&screen, &layout.resolve()?)?;
            (io, screen, updated)
        }
    };

    let moved = changed_ids(&before.elements, &after.elements);
    tracing::info!(moved = moved.len(), ids = ?moved, "screen updated");
    write_screen(&after, io.output.as_ref())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn example_screen_json() -> &'static str {
    r##"{
  "id": "scr_home",
  "name": "Home",
  "width": 393,
  "height": 852,
  "elements": [
    {
      "id": "nav",
      "type": "navbar",
      "x": 0, "y": 0, "width": 393, "height": 56,
      "zIndex": 10,
      "properties": { "title": "Dashboard" }
    },
    {
      "id": "card",
      "type": "card",
      "x": 20, "y": 180, "width": 350, "height": 90,
      "properties": { "title": "Weekly goal" }
    },
    {
      "id": "card-label",
      "type": "text",
      "x": 36, "y": 196, "width": 180, "height": 28,
      "properties": { "content": "3 of 5 workouts" }
    },
    {
      "id": "track",
      "type": "rectangle",
      "x": 20, "y": 246, "width": 350, "height": 8,
      "properties": { "fill": "#E5E7EB", "cornerRadius": 4 }
    },
    {
      "id": "fill",
      "type": "rectangle",
      "x": 20, "y": 246, "width": 210, "height": 8,
      "properties": { "fill": "#3B82F6", "cornerRadius": 4 }
    },
    {
      "id": "cta",
      "type": "button",
      "x": 20, "y": 250, "width": 160, "height": 44,
      "properties": { "label": "Start workout", "variant": "primary" }
    }
  ]
}
"##
}
