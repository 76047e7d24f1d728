//! Demo binary printing the text color palette for a theme.

use clap::Parser;
use themeset::{render_preview, Settings};

/// Print the text color palette for a theme.
#[derive(Parser)]
#[command(name = "themeset-preview", version)]
struct Args {
    /// Theme name to preview (defaults to the light theme).
    #[arg(long)]
    theme: Option<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match args.theme {
        Some(raw) => Settings::with_theme(raw)?,
        None => Settings::new(),
    };
    println!("{}", render_preview(&settings, console::colors_enabled())?);
    Ok(())
}
