use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use apply_spec::{EngineSettings, FormId, Locale, Metadata};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const CONFIG_ENV: &str = "GRANT_APPLY_CONFIG";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Grant application form CLI",
    long_about = "Describes, validates and summarises grant application data against the published form flows"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct FormArgs {
    /// Form flow to load (standard-proposal or get-advice).
    #[arg(long, value_name = "FORM", default_value_t = FormId::StandardProposal)]
    form: FormId,
    /// JSON file with the application data; omitted means a blank application.
    #[arg(long, value_name = "DATA")]
    data: Option<PathBuf>,
    /// Locale for labels and messages (en or cy).
    #[arg(long, value_name = "LOCALE", default_value = "en")]
    locale: Locale,
    /// JSON file with application metadata, e.g. the programme.
    #[arg(long, value_name = "METADATA")]
    metadata: Option<PathBuf>,
    /// Keep gated fields in the layout and flag them as conditional.
    #[arg(long)]
    show_all: bool,
    /// JSON engine settings (falls back to GRANT_APPLY_CONFIG).
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sections, steps and fields shown for the data.
    Describe(FormArgs),
    /// Validate application data; exits non-zero when invalid.
    Validate(FormArgs),
    /// Print per-section and per-step progress.
    Progress(FormArgs),
    /// Print the finalised submission payload.
    Submission(FormArgs),
    /// Print the listing summary for the data.
    Summary(FormArgs),
    /// Summarise a stored application (pending or submitted).
    Enrich {
        /// JSON file with the stored application.
        #[arg(long, value_name = "APPLICATION")]
        application: PathBuf,
        #[arg(long, value_name = "LOCALE", default_value = "en")]
        locale: Locale,
        /// JSON engine settings (falls back to GRANT_APPLY_CONFIG).
        #[arg(long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the JSON schemas of the request and response payloads.
    Schema,
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Describe(args) => run_form(args, apply_component::describe),
        Command::Validate(args) => run_validate(args),
        Command::Progress(args) => run_form(args, apply_component::progress),
        Command::Submission(args) => run_form(args, apply_component::for_submission),
        Command::Summary(args) => run_form(args, apply_component::summary),
        Command::Enrich {
            application,
            locale,
            config,
        } => run_enrich(application, locale, config),
        Command::Schema => print_response(apply_component::payload_schema()).map(|_| ()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_json(path: &Path) -> CliResult<Value> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    Ok(serde_json::from_str(&contents)
        .map_err(|err| format!("invalid JSON in {}: {}", path.display(), err))?)
}

fn load_settings(config: Option<PathBuf>) -> CliResult<Option<EngineSettings>> {
    let path = config.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading engine settings");
            Ok(Some(serde_json::from_value(read_json(&path)?)?))
        }
        None => Ok(None),
    }
}

fn build_request(args: &FormArgs) -> CliResult<String> {
    let data = match &args.data {
        Some(path) => read_json(path)?,
        None => Value::Object(Map::new()),
    };
    let metadata: Metadata = match &args.metadata {
        Some(path) => serde_json::from_value(read_json(path)?)?,
        None => Metadata::default(),
    };

    let mut request = json!({
        "locale": args.locale,
        "data": data,
        "metadata": metadata,
    });
    if args.show_all {
        request["showAllFields"] = Value::Bool(true);
    }
    if let Some(settings) = load_settings(args.config.clone())? {
        request["settings"] = serde_json::to_value(settings)?;
    }
    Ok(request.to_string())
}

/// Pretty-prints a component response, turning `{"error": ..}` into a
/// command failure.
fn print_response(response: String) -> CliResult<Value> {
    let value: Value = serde_json::from_str(&response)?;
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(error.to_string().into());
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(value)
}

fn run_form(args: FormArgs, operation: fn(&str, &str) -> String) -> CliResult<()> {
    let request = build_request(&args)?;
    print_response(operation(args.form.as_str(), &request))?;
    Ok(())
}

fn run_validate(args: FormArgs) -> CliResult<()> {
    let request = build_request(&args)?;
    let result = print_response(apply_component::validate(args.form.as_str(), &request))?;

    if result["isValid"].as_bool() == Some(true) {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn run_enrich(application: PathBuf, locale: Locale, config: Option<PathBuf>) -> CliResult<()> {
    let application = read_json(&application)?;
    let mut options = json!({ "locale": locale });
    if let Some(settings) = load_settings(config)? {
        options["settings"] = serde_json::to_value(settings)?;
    }
    print_response(apply_component::enrich(
        &application.to_string(),
        &options.to_string(),
    ))?;
    Ok(())
}
