mod fetch;
mod input;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use gqljs_core::config::{self, CONFIG_FILE_NAME, GqljsConfig};
use gqljs_core::parse::{IntrospectionQuery, TypeKind};
use gqljs_core::transform;

#[derive(Parser)]
#[command(name = "gqljs", about = "GraphQL introspection to JSON Schema converter", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an introspection result (endpoint, file, or stdin) to JSON Schema
    Convert(ConvertArgs),

    /// Summarize an introspection result
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new gqljs configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Where the introspection result comes from.
#[derive(Args)]
struct SourceArgs {
    /// Config file (default: ./.gqljs.yaml, then ~/.gqljs.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// File containing a GraphQL introspection result
    #[arg(short, long, env = "GQLJS_INPUT")]
    input: Option<PathBuf>,

    /// GraphQL endpoint URL to introspect
    #[arg(short, long, env = "GQLJS_ENDPOINT")]
    endpoint: Option<String>,

    /// HTTP header for the endpoint, as 'Key: Value' (repeatable)
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Timeout in seconds for the endpoint request [default: 30]
    #[arg(short, long, env = "GQLJS_TIMEOUT")]
    timeout: Option<u64>,
}

#[derive(Args)]
struct ConvertArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file for the JSON Schema (default: stdout)
    #[arg(short, long, env = "GQLJS_OUTPUT")]
    output: Option<PathBuf>,

    /// Leave out GraphQL internal (__-prefixed) types [default: true]
    #[arg(
        long,
        env = "GQLJS_IGNORE_INTERNALS",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    ignore_internals: Option<bool>,

    /// Allow null elements in arrays whose GraphQL items are nullable [default: false]
    #[arg(
        long,
        env = "GQLJS_NULLABLE_ARRAY_ITEMS",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    nullable_array_items: Option<bool>,

    /// How to represent ID: string, number, or both [default: string]
    #[arg(long = "id-type", env = "GQLJS_ID_TYPE")]
    id_type: Option<String>,
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => cmd_convert(args),

        Commands::Inspect { source, format } => cmd_inspect(source, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "gqljs", &mut std::io::stdout());
            Ok(())
        }
    }
}

impl SourceArgs {
    fn to_config(&self) -> GqljsConfig {
        GqljsConfig {
            input: self.input.clone(),
            endpoint: self.endpoint.clone(),
            headers: self.headers.clone(),
            timeout: self.timeout,
            ..GqljsConfig::default()
        }
    }
}

impl ConvertArgs {
    fn to_config(&self) -> GqljsConfig {
        GqljsConfig {
            output: self.output.clone(),
            ignore_internals: self.ignore_internals,
            nullable_array_items: self.nullable_array_items,
            id_type: self.id_type.clone(),
            ..self.source.to_config()
        }
    }
}

/// Load the config file and layer command-line/environment values on top.
fn resolve_config(config_path: Option<&Path>, overlay: GqljsConfig) -> Result<GqljsConfig> {
    let file = match config_path {
        Some(path) => config::load_config(path)?
            .with_context(|| format!("config file {} not found", path.display()))?,
        None => {
            let home = std::env::var_os("HOME").map(PathBuf::from);
            match config::discover_config(home.as_deref())? {
                Some((path, cfg)) => {
                    eprintln!("Using config file: {}", path.display());
                    cfg
                }
                None => GqljsConfig::default(),
            }
        }
    };
    Ok(file.merge(overlay))
}

/// Write the schema to a file (creating parent directories) or to stdout.
fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = output else {
        println!("{content}");
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  wrote {}", path.display());
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> Result<()> {
    let cfg = resolve_config(args.source.config.as_deref(), args.to_config())?;
    let options = cfg.convert_options()?;
    let introspection = input::load_introspection(&cfg)?;

    let schema = transform::convert(&introspection, &options);
    let json = serde_json::to_string_pretty(&schema).context("error serializing JSON Schema")?;
    write_output(cfg.output.as_deref(), &json)
}

fn cmd_inspect(source: SourceArgs, format: InspectFormat) -> Result<()> {
    let cfg = resolve_config(source.config.as_deref(), source.to_config())?;
    let introspection = input::load_introspection(&cfg)?;
    let summary = build_inspect_summary(&introspection);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(introspection: &IntrospectionQuery) -> serde_json::Value {
    let schema = &introspection.schema;

    let count = |kind: TypeKind| schema.types.iter().filter(|t| t.kind == kind).count();
    let internal = schema.types.iter().filter(|t| t.is_internal()).count();

    let types: Vec<serde_json::Value> = schema
        .types
        .iter()
        .filter(|t| !t.is_internal())
        .map(|t| {
            serde_json::json!({
                "name": t.name,
                "kind": t.kind.as_str(),
                "members": t.fields.len()
                    + t.input_fields.len()
                    + t.enum_values.len()
                    + t.possible_types.len(),
            })
        })
        .collect();

    serde_json::json!({
        "query_type": schema.query_type_name(),
        "mutation_type": schema.mutation_type_name(),
        "counts": {
            "object": count(TypeKind::Object),
            "interface": count(TypeKind::Interface),
            "input_object": count(TypeKind::InputObject),
            "enum": count(TypeKind::Enum),
            "union": count(TypeKind::Union),
            "scalar": count(TypeKind::Scalar),
            "internal": internal,
        },
        "types": types,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
