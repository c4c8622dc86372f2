//! Command-line interface for schemagen

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use schemagen::config::GenerationConfig;
#[cfg(feature = "cli")]
use schemagen::loaders::Loader;
#[cfg(feature = "cli")]
use schemagen::locations::{file_from_url, parse_protocol, parse_url};
#[cfg(feature = "cli")]
use schemagen::packages::{normalize_schema_id, package_name, IdentifierPolicy};
#[cfg(feature = "cli")]
use schemagen::rules::RuleFactory;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(author, version, about = "JSON Schema generation rules tool", long_about = None)]
struct Cli {
    /// Generation config file (JSON)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Mark model fields listed in the schema's ignore list
    Ignore {
        /// Schema locator (path or URL)
        #[arg(short, long, value_name = "SCHEMA")]
        schema: String,

        /// Generated model JSON file
        #[arg(short, long, value_name = "MODEL")]
        model: PathBuf,

        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a schema id and print its package name
    #[command(name = "check-id")]
    CheckId {
        /// Schema id to check
        #[arg(value_name = "ID")]
        id: String,

        /// Use the strict identifier policy
        #[arg(long)]
        strict: bool,
    },

    /// Classify and resolve a schema locator
    Locate {
        /// Locator (path or URL)
        #[arg(value_name = "LOCATOR")]
        locator: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_config(cli.config).and_then(|config| match cli.command {
        Commands::Ignore {
            schema,
            model,
            pretty,
            output,
        } => cmd_ignore(&config, &schema, model, pretty, output),
        Commands::CheckId { id, strict } => cmd_check_id(&config, &id, strict),
        Commands::Locate { locator, json } => cmd_locate(&locator, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn load_config(path: Option<PathBuf>) -> Result<GenerationConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(GenerationConfig::from_file(path)?),
        None => Ok(GenerationConfig::default()),
    }
}

#[cfg(feature = "cli")]
fn cmd_ignore(
    config: &GenerationConfig,
    schema_locator: &str,
    model_path: PathBuf,
    pretty: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let loader = Loader::from_config(config);
    let schema = loader.load_schema(schema_locator)?;
    let mut model = loader.load_model(&model_path)?;

    let factory = RuleFactory::new(config.clone());
    factory.apply_schema_rules(&schema, &mut model);

    let json_str = if pretty {
        serde_json::to_string_pretty(&model)?
    } else {
        serde_json::to_string(&model)?
    };

    if let Some(output_path) = output {
        fs::write(output_path, &json_str)?;
    } else {
        println!("{}", json_str);
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_check_id(
    config: &GenerationConfig,
    id: &str,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let policy = if strict {
        IdentifierPolicy::Strict
    } else {
        config.identifier_policy
    };

    let normalized = normalize_schema_id(id, policy)?;
    println!("Schema id: {}", normalized);
    println!("Package:   {}", package_name(id, policy)?);
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_locate(locator: &str, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let protocol = parse_protocol(locator);
    let url = parse_url(locator)?;
    let path = if url.scheme() == "file" {
        Some(file_from_url(&url)?)
    } else {
        None
    };

    if json_output {
        let json = serde_json::json!({
            "protocol": protocol,
            "url": url.as_str(),
            "path": path.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("Protocol: {}", protocol);
        println!("URL:      {}", url);
        if let Some(path) = path {
            println!("Path:     {}", path.display());
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
