//! classifai-cli: command-line access to the ClassifAI API
//!
//! Usage:
//!   classifai-cli classify [--labels a,b] [--description <text>] [--project <id>] <content>...
//!   classifai-cli feedback <detection_id> <label>...
//!   classifai-cli stats <project_id>
//!   classifai-cli health

use anyhow::{bail, Context};
use classifai::blocking::ClassifAiClient;
use classifai::{ClassifAiClientBuilder, ClassifyOptions, Error};
use std::time::Duration;

/// Flags that take a value, valid for every command.
const VALUE_FLAGS: &[&str] = &[
    "--labels",
    "--description",
    "--project",
    "--base-url",
    "--api-key",
    "--timeout",
];

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let rest = &args[2..];
    let outcome = match args[1].as_str() {
        "classify" => cmd_classify(rest),
        "feedback" => cmd_feedback(rest),
        "stats" => cmd_stats(rest),
        "health" => cmd_health(rest),
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = outcome {
        eprintln!("Error: {err:#}");
        let code = match err.downcast_ref::<Error>() {
            Some(Error::Validation { status: None, .. }) | Some(Error::Configuration { .. }) => 1,
            Some(_) => 2,
            None => 1,
        };
        std::process::exit(code);
    }
}

fn print_usage() {
    println!(
        r#"classifai-cli: ClassifAI command-line client

USAGE:
    classifai-cli <COMMAND> [OPTIONS]

COMMANDS:
    classify <content>...       Classify text, image files and image URLs jointly
        --labels <a,b,...>      Candidate labels (2-50)
        --description <text>    Describe the task to let the service infer labels
        --project <id>          Reuse a project's labels and record the call
    feedback <detection_id> <label>...
                                Submit the correct label(s) for a detection
    stats <project_id>          Show project statistics
    health                      Check service health
    version                     Show version information
    help                        Show this help message

GLOBAL OPTIONS:
    --base-url <url>            Service base URL
    --api-key <key>             API key (prefer CLASSIFAI_API_KEY)
    --timeout <secs>            Request timeout in seconds

ENVIRONMENT:
    CLASSIFAI_API_KEY           API key for authenticated requests
    CLASSIFAI_BASE_URL          Service base URL
    RUST_LOG                    Log filter (default: warn)"#
    );
}

fn cmd_version() {
    println!("classifai-cli {}", env!("CARGO_PKG_VERSION"));
}

/// Value following `name`, if present.
fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Arguments that are neither flags nor flag values.
fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        out.push(arg.as_str());
    }
    out
}

fn client(args: &[String]) -> anyhow::Result<ClassifAiClient> {
    let mut builder = ClassifAiClientBuilder::new();
    if let Some(url) = flag_value(args, "--base-url") {
        builder = builder.base_url(url);
    }
    if let Some(key) = flag_value(args, "--api-key") {
        builder = builder.api_key(key);
    }
    if let Some(secs) = flag_value(args, "--timeout") {
        let secs: u64 = secs
            .parse()
            .with_context(|| format!("invalid --timeout value '{secs}'"))?;
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build_blocking()?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_classify(args: &[String]) -> anyhow::Result<()> {
    let content = positionals(args);
    if content.is_empty() {
        bail!("classify needs at least one content argument");
    }

    let mut options = ClassifyOptions::new();
    if let Some(labels) = flag_value(args, "--labels") {
        options = options.labels(
            labels
                .split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty()),
        );
    }
    if let Some(description) = flag_value(args, "--description") {
        options = options.description(description);
    }
    if let Some(project) = flag_value(args, "--project") {
        options = options.project_id(project);
    }

    let result = client(args)?.classify(content, options)?;
    print_json(&result)
}

fn cmd_feedback(args: &[String]) -> anyhow::Result<()> {
    let positional = positionals(args);
    let Some((detection_id, labels)) = positional.split_first() else {
        bail!("feedback needs a detection id and at least one label");
    };

    let client = client(args)?;
    let result = match labels {
        [single] => client.submit_feedback(detection_id, *single)?,
        many => client.submit_feedback(detection_id, many.to_vec())?,
    };
    print_json(&result)
}

fn cmd_stats(args: &[String]) -> anyhow::Result<()> {
    let positional = positionals(args);
    let Some(project_id) = positional.first() else {
        bail!("stats needs a project id");
    };
    let stats = client(args)?.get_project_stats(project_id)?;
    print_json(&stats)
}

fn cmd_health(args: &[String]) -> anyhow::Result<()> {
    let health = client(args)?.health_check()?;
    print_json(&health)?;
    if !health.is_healthy() {
        bail!("service reports status '{}'", health.status);
    }
    Ok(())
}
