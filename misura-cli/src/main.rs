//! Misura command line
//!
//! Thin caller around the conversion engine: builds the builtin
//! registry once, collects codes from the command line, runs the
//! conversion, renders the number. All conversion logic lives in
//! misura-units; this binary only handles input and output.
//!
//! Logging goes to stderr and is off by default; set MISURA_LOG
//! (e.g. MISURA_LOG=debug) to see resolution traces.

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use misura_core::{Category, System};
use misura_units::{convert, ConversionRequest, UnitRegistry};

#[derive(Parser)]
#[command(name = "misura")]
#[command(about = "Convert values between units of measure across measurement systems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Numeric value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Origin unit code (e.g., "kg")
        from_unit: String,

        /// Origin system code (IS, BIS, USC)
        from_system: String,

        /// Destination unit code (e.g., "lb")
        to_unit: String,

        /// Destination system code (IS, BIS, USC)
        to_system: String,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered units
    Units {
        /// Only units of this system code
        #[arg(short, long)]
        system: Option<String>,

        /// Only units of this category code
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the measurement systems
    Systems,

    /// List the measurement categories
    Categories,

    /// Dump the cross-system factor table
    Factors,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let registry = UnitRegistry::builtin();

    let result = match cli.command {
        Commands::Convert {
            value,
            from_unit,
            from_system,
            to_unit,
            to_system,
            json,
        } => run_convert(&registry, value, &from_unit, &from_system, &to_unit, &to_system, json),
        Commands::Units { system, category } => {
            list_units(&registry, system.as_deref(), category.as_deref())
        }
        Commands::Systems => list_systems(),
        Commands::Categories => list_categories(),
        Commands::Factors => list_factors(&registry),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MISURA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_convert(
    registry: &UnitRegistry,
    value: f64,
    from_unit: &str,
    from_system: &str,
    to_unit: &str,
    to_system: &str,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!(value, from_unit, from_system, to_unit, to_system, "running conversion");

    let request = ConversionRequest::new(value, from_unit, from_system, to_unit, to_system);
    let converted = convert(registry, &request)?;
    debug!(converted, "conversion finished");

    if as_json {
        let payload = json!({
            "value": value,
            "origin_unit": from_unit,
            "origin_system": from_system,
            "destination_unit": to_unit,
            "destination_system": to_system,
            "result": converted,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", converted);
    }

    Ok(())
}

fn list_units(
    registry: &UnitRegistry,
    system: Option<&str>,
    category: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let system = match system {
        Some(code) => Some(
            System::from_code(code).ok_or_else(|| format!("unknown system code: {}", code))?,
        ),
        None => None,
    };
    let category = match category {
        Some(code) => Some(
            Category::from_code(code).ok_or_else(|| format!("unknown category code: {}", code))?,
        ),
        None => None,
    };

    let units: Vec<_> = registry
        .units()
        .iter()
        .filter(|u| system.map_or(true, |s| u.system == s))
        .filter(|u| category.map_or(true, |c| u.category == c))
        .collect();

    println!("Units ({}):", units.len());
    for unit in units {
        let base = if unit.base_unit { " [base]" } else { "" };
        println!(
            "  - {} ({}) {}/{} value_from_base={}{}",
            unit.code, unit.label, unit.category, unit.system, unit.value_from_base, base
        );
    }

    Ok(())
}

fn list_systems() -> Result<(), Box<dyn std::error::Error>> {
    println!("Systems ({}):", System::ALL.len());
    for system in System::ALL {
        println!("  - {} ({})", system.code(), system.label());
    }

    Ok(())
}

fn list_categories() -> Result<(), Box<dyn std::error::Error>> {
    println!("Categories ({}):", Category::ALL.len());
    for category in Category::ALL {
        println!("  - {} ({})", category.code(), category.label());
    }

    Ok(())
}

fn list_factors(registry: &UnitRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let mut entries: Vec<_> = registry.factors().collect();
    entries.sort_by_key(|&(c, o, d, _)| (c.code(), o.code(), d.code()));

    println!("Cross-system factors ({}):", entries.len());
    for (category, origin, destination, factor) in entries {
        println!("  - {} {} -> {}: {}", category, origin, destination, factor);
    }

    Ok(())
}
