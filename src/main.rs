//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatstat::ChatStatError;
use chatstat::cli::Args;
use chatstat::format::write_to_format;
use chatstat::report::{Analyzer, ChatReport};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        if e.is_input_format_error() {
            eprintln!("   The export could not be read as a WhatsApp chat.");
            eprintln!("   Check that it is a plain-text export, or pin --layout.");
        }
        process::exit(1);
    }
}

/// Installs a stderr fmt layer. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // a subscriber may already be set when embedded; ignore
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}

fn run(args: &Args) -> Result<(), ChatStatError> {
    let start = Instant::now();
    let config = args.to_config()?;
    let format = args.output_format()?;

    println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!(
        "📅 Dates:   {}",
        if config.day_first { "day-first" } else { "month-first" }
    );
    println!("👤 User:    {}", config.selection);
    println!();

    let analysis = Analyzer::new(config).analyze_path(&args.input)?;
    print_summary(&analysis.report);

    if let Some(output) = &args.output {
        write_to_format(&analysis, output, format)?;
        println!();
        println!("✅ {} saved to {}", format, output.display());
    }

    println!();
    println!("⚡ Done in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn print_summary(report: &ChatReport) {
    let counts = &report.counts;
    println!("📈 Summary:");
    println!("   Messages:        {}", counts.messages);
    println!("   Words:           {}", counts.words);
    println!("   Media shared:    {}", counts.media);
    println!("   Links shared:    {}", counts.links);
    println!("   Deleted:         {}", counts.deleted);
    println!("   Participants:    {}", report.participants.len());

    if let Some(top) = report.user_activity.first() {
        println!("   Most active:     {} ({:.2}%)", top.author, top.percentage);
    }
    if let Some(top) = report.emojis.first() {
        println!("   Top emoji:       {} x{}", top.emoji, top.count);
    }
    if let Some(words) = &report.common_words {
        let top: Vec<&str> = words.iter().take(5).map(|w| w.word.as_str()).collect();
        if !top.is_empty() {
            println!("   Top words:       {}", top.join(", "));
        }
    }
    if let (Some(first), Some(last)) = (report.daily_timeline.first(), report.daily_timeline.last())
    {
        println!("   Span:            {} to {}", first.date, last.date);
    }

    for warning in &report.warnings {
        println!("⚠️  {warning}");
    }
}
