//! tagtint - per-tag-name markup highlighting
//!
//! Assigns each tag name in a markup document a distinct, stable color
//! and computes comment-aware highlight spans. The binary renders a
//! colorized preview of a file in the terminal; the engine itself is
//! host-agnostic and driven through the `EditorHost` trait.

mod config;
mod decoration;
mod error;
mod host;
mod palette;
mod render;
mod scan;
mod session;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use crossterm::style::Stylize;

use config::Config;
use error::Result;
use host::BufferHost;
use palette::ThemeMode;
use session::Colorizer;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut mode = ThemeMode::Dark;
    let mut list_only = false;
    let mut names_only = false;
    let mut file: Option<PathBuf> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--light" => mode = ThemeMode::Light,
            "--dark" => mode = ThemeMode::Dark,
            "--names-only" => names_only = true,
            "--list" | "-l" => list_only = true,
            other if !other.starts_with('-') => file = Some(PathBuf::from(other)),
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    let Some(path) = file else {
        print_usage();
        return Ok(());
    };

    let mut config = Config::load();
    if names_only {
        config.only_color_tag_name = true;
    }

    let text = fs::read_to_string(&path)?;
    let language_id = host::language_id_for(&path);
    let file_name = path.display().to_string();

    let mut host = BufferHost::new(text, language_id, file_name, mode);
    let mut colorizer = Colorizer::new(config);
    colorizer.activate(&mut host)?;

    if !list_only {
        print!("{}", render::render_ansi(host.text(), &host.applied()));
        if !host.text().ends_with('\n') {
            println!();
        }
        println!();
    }
    print_tag_table(&colorizer);

    colorizer.deactivate(&mut host);
    Ok(())
}

fn print_tag_table(colorizer: &Colorizer) {
    if colorizer.session().is_empty() {
        println!("No tags found.");
        return;
    }
    println!("Tags:");
    for record in colorizer.session().records() {
        match render::parse_hex(record.tag_color()) {
            Some(color) => {
                println!("  {:<16} {}", record.tag_name().with(color), record.tag_color())
            }
            None => println!("  {:<16} {}", record.tag_name(), record.tag_color()),
        }
    }
}

fn print_usage() {
    println!("tagtint {} - per-tag-name markup highlighting", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tagtint [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -h, --help        Show this help message");
    println!("  -V, --version     Show version information");
    println!("  -l, --list        List tags and their colors without the preview");
    println!("      --light       Use the light-mode color table");
    println!("      --dark        Use the dark-mode color table (default)");
    println!("      --names-only  Color only tag names, not whole tags");
    println!();
    println!("Configuration is read from ~/.tagtint.toml; see the config");
    println!("module documentation for the recognized keys.");
}

fn print_version() {
    println!("tagtint {}", env!("CARGO_PKG_VERSION"));
    println!("Per-tag-name markup highlighting for editor buffers");
}
