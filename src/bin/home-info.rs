use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, error, info, warn};

use homexml::content::DirectoryContentContext;
use homexml::xml::{self, HomeXmlOptions};
use homexml::{Home, WithWarnings};

/// Print a summary of a home document.
#[derive(Debug, Parser)]
#[command(name = "home-info", version)]
struct Args {
    /// Home document to read
    file: PathBuf,

    /// Directory holding the resources the document refers to by token
    content_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    if let Err(err) = run(&args) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut options = HomeXmlOptions::default();
    if let Some(dir) = &args.content_dir {
        options = options.with_content_context(DirectoryContentContext::new(dir));
    }

    info!("reading {}", args.file.display());
    let result = xml::from_path_with_warnings(&args.file, &options)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let (home, warnings): (Home, Vec<String>) = match result {
        WithWarnings::Ok(home) => (home, Vec::new()),
        WithWarnings::Warning(home, warnings) => (home, warnings),
    };
    for warning in &warnings {
        warn!("{}", warning);
    }
    print_summary(&home, warnings.len());
    Ok(())
}

fn print_summary(home: &Home, warning_count: usize) {
    println!("name:        {}", home.name.as_deref().unwrap_or("(unnamed)"));
    println!("version:     {}", home.version);
    println!("levels:      {}", home.levels.len());
    for level in &home.levels {
        let selected = if home.selected_level.as_ref() == Some(&level.id) { " *" } else { "" };
        println!(
            "  {} {} elevation {} height {}{}",
            level.id,
            level.name.as_deref().unwrap_or(""),
            level.elevation,
            level.height,
            selected
        );
    }
    let pieces: usize = home.furniture.iter().map(|p| p.all_pieces().len()).sum();
    println!("furniture:   {} ({} top level)", pieces, home.furniture.len());
    println!("walls:       {}", home.walls.len());
    println!("rooms:       {}", home.rooms.len());
    let area: f32 = home.rooms.iter().map(|room| room.area()).sum();
    println!("room area:   {:.2} m²", area / 10_000.0);
    println!("polylines:   {}", home.polylines.len());
    println!("dimensions:  {}", home.dimension_lines.len());
    println!("labels:      {}", home.labels.len());
    println!("cameras:     {} stored", home.stored_cameras.len());
    println!("warnings:    {}", warning_count);
}
