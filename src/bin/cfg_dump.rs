//! Configuration table dump utility
//! Prints the command strings of a built-in table or a descriptor file

use si446x_config::formats::load_descriptor;
use si446x_config::{default_selector, ConfigSelector, RegisteredConfig};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [name | descriptor.json] [--hex]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {}                     # Dump the default table", args[0]);
        eprintln!("  {} device              # Dump a built-in table", args[0]);
        eprintln!("  {} bench.json --hex    # Dump a descriptor file", args[0]);
        std::process::exit(1);
    }

    let target = args.get(1).map(|s| s.as_str());
    let hex = args.iter().any(|a| a == "--hex");

    let mut selector = default_selector();
    let name = match target {
        Some(path) if path.ends_with(".json") => {
            let desc = load_descriptor(path)?;
            let name = desc.name.clone();
            desc.register_into(&mut selector);
            Some(name)
        }
        Some("--hex") | None => None,
        Some(name) => Some(name.to_string()),
    };

    let config = selector.selection(name.as_deref())?;
    print_config(config);

    if hex {
        println!("\n{}", config.table.printable());
    }

    print_available(&selector);
    Ok(())
}

fn print_config(config: &RegisteredConfig) {
    println!("Configuration: {} ({})", config.name, config.origin);
    for (key, value) in config.identifiers.to_pairs() {
        println!("  {:<10} {}", key, value);
    }
    println!();

    let mut total = 0;
    for entry in config.table.entries() {
        match entry {
            Ok(entry) => {
                println!("{}", entry);
                total += entry.record_len();
            }
            Err(err) => {
                tracing::warn!("{}", err);
                println!("!! {}", err);
            }
        }
    }
    println!("\n=== total: {} bytes", total);
}

fn print_available(selector: &ConfigSelector) {
    println!("\nAvailable: {}", selector.names().join(", "));
}
