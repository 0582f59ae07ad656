// crates/rule-property-cli/src/main.rs
// ============================================================================
// Module: Rule Property CLI Entry Point
// Description: Command dispatcher for catalog checks and value conversion.
// Purpose: Expose type resolution and property descriptors from a TOML catalog.
// Dependencies: clap, rule-property-config, rule-property-core, serde, thiserror.
// ============================================================================

//! ## Overview
//! The rule property CLI loads a catalog config, builds the resolver and
//! declared descriptors, and reports results as JSON on stdout. Failures are
//! written to stderr and exit non-zero. Inputs are untrusted and go through the
//! same validation as library callers.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use rule_property_config::ConfiguredProperty;
use rule_property_config::RulePropertyConfig;
use rule_property_core::FieldMap;
use rule_property_core::TypeResolver;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "rule-property", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a type name against the catalog.
    Resolve(ResolveCommand),
    /// Validate the catalog and build every declared property.
    Check(ConfigArgs),
    /// Print the descriptor fields of a declared property.
    Describe(DescribeCommand),
    /// Parse, validate, and re-serialize a raw property value.
    Convert(ConvertCommand),
}

/// Shared config path argument.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// Optional config file path (defaults to rule-properties.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `resolve`.
#[derive(Args, Debug)]
struct ResolveCommand {
    /// Type name or alias to resolve.
    name: String,
    /// Config source.
    #[command(flatten)]
    config: ConfigArgs,
}

/// Arguments for `describe`.
#[derive(Args, Debug)]
struct DescribeCommand {
    /// Declared property name.
    property: String,
    /// Config source.
    #[command(flatten)]
    config: ConfigArgs,
}

/// Arguments for `convert`.
#[derive(Args, Debug)]
struct ConvertCommand {
    /// Declared property name.
    property: String,
    /// Raw value text.
    raw: String,
    /// Config source.
    #[command(flatten)]
    config: ConfigArgs,
}

// ============================================================================
// SECTION: Output Types
// ============================================================================

/// `resolve` output.
#[derive(Debug, Serialize)]
struct ResolveOutput {
    /// Input as given.
    input: String,
    /// Qualified name, or null for blank input.
    resolved: Option<String>,
    /// Type kind label, or null for blank input.
    kind: Option<&'static str>,
}

/// Per-property summary in `check` output.
#[derive(Debug, Serialize)]
struct PropertySummary {
    /// Property name.
    name: String,
    /// Value kind label.
    value_kind: &'static str,
    /// Serialized default value.
    default_value: String,
}

/// `check` output.
#[derive(Debug, Serialize)]
struct CheckOutput {
    /// Always `ok`; failures are reported as errors.
    status: &'static str,
    /// Number of declared types.
    types: usize,
    /// Number of declared aliases.
    aliases: usize,
    /// Built properties in definition order.
    properties: Vec<PropertySummary>,
}

/// `describe` output.
#[derive(Debug, Serialize)]
struct DescribeOutput {
    /// Property name.
    name: String,
    /// Value kind label.
    value_kind: &'static str,
    /// True for multi-valued properties.
    multi_value: bool,
    /// Exported descriptor fields.
    fields: FieldMap,
}

/// `convert` output.
#[derive(Debug, Serialize)]
struct ConvertOutput {
    /// Property name.
    property: String,
    /// Raw input as given.
    input: String,
    /// Normalized serialized value.
    value: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    match run(cli.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run(command: Commands, out: &mut impl Write) -> CliResult<()> {
    match command {
        Commands::Resolve(command) => {
            let config = load_config(command.config.config.as_deref())?;
            command_resolve(&config, &command.name, out)
        }
        Commands::Check(command) => {
            let config = load_config(command.config.as_deref())?;
            command_check(&config, out)
        }
        Commands::Describe(command) => {
            let config = load_config(command.config.config.as_deref())?;
            command_describe(&config, &command.property, out)
        }
        Commands::Convert(command) => {
            let config = load_config(command.config.config.as_deref())?;
            command_convert(&config, &command.property, &command.raw, out)
        }
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes `resolve`.
fn command_resolve(config: &RulePropertyConfig, name: &str, out: &mut impl Write) -> CliResult<()> {
    let resolver = build_resolver(config)?;
    let handle = resolver
        .class_from(name)
        .map_err(|err| CliError::new(format!("resolve failed: {err}")))?;
    let output = ResolveOutput {
        input: name.to_string(),
        resolved: handle.as_ref().map(|handle| handle.qualified_name().to_string()),
        kind: handle.as_ref().map(|handle| handle.kind().as_str()),
    };
    write_json(out, &output)
}

/// Executes `check`.
fn command_check(config: &RulePropertyConfig, out: &mut impl Write) -> CliResult<()> {
    let properties = build_properties(config)?;
    let output = CheckOutput {
        status: "ok",
        types: config.catalog.types.len(),
        aliases: config.catalog.aliases.len(),
        properties: properties
            .iter()
            .map(|property| PropertySummary {
                name: property.name().to_string(),
                value_kind: property.value_kind().as_str(),
                default_value: property.default_string(),
            })
            .collect(),
    };
    write_json(out, &output)
}

/// Executes `describe`.
fn command_describe(
    config: &RulePropertyConfig,
    property: &str,
    out: &mut impl Write,
) -> CliResult<()> {
    let properties = build_properties(config)?;
    let found = find_property(&properties, property)?;
    let output = DescribeOutput {
        name: found.name().to_string(),
        value_kind: found.value_kind().as_str(),
        multi_value: found.value_kind().is_multi(),
        fields: found.field_map(),
    };
    write_json(out, &output)
}

/// Executes `convert`.
fn command_convert(
    config: &RulePropertyConfig,
    property: &str,
    raw: &str,
    out: &mut impl Write,
) -> CliResult<()> {
    let properties = build_properties(config)?;
    let found = find_property(&properties, property)?;
    let value = found
        .normalize_value(raw)
        .map_err(|err| CliError::new(format!("convert failed for {property}: {err}")))?;
    let output = ConvertOutput {
        property: found.name().to_string(),
        input: raw.to_string(),
        value,
    };
    write_json(out, &output)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads and validates the catalog config.
fn load_config(path: Option<&Path>) -> CliResult<RulePropertyConfig> {
    RulePropertyConfig::load(path)
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))
}

/// Builds the resolver with the configured audit sink.
fn build_resolver(config: &RulePropertyConfig) -> CliResult<TypeResolver> {
    let audit = config
        .build_audit_sink()
        .map_err(|err| CliError::new(format!("failed to open audit sink: {err}")))?;
    Ok(config.build_resolver(audit))
}

/// Builds every declared property.
fn build_properties(config: &RulePropertyConfig) -> CliResult<Vec<ConfiguredProperty>> {
    let resolver = build_resolver(config)?;
    config.build_properties(&resolver).map_err(|err| CliError::new(err.to_string()))
}

/// Finds a declared property by name.
fn find_property<'a>(
    properties: &'a [ConfiguredProperty],
    name: &str,
) -> CliResult<&'a ConfiguredProperty> {
    properties
        .iter()
        .find(|property| property.name() == name)
        .ok_or_else(|| CliError::new(format!("unknown property: {name}")))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes one JSON document followed by a newline.
fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)
        .map_err(|err| CliError::new(format!("failed to serialize output: {err}")))?;
    writeln!(out).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
