use clap::{Parser, Subcommand};
use log::info;
use std::time::Instant;
use veinflow::prelude::*;

/// Inspect, lint and exercise workflow node templates
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Extra template JSON files to register next to the built-in ones
    #[arg(short, long = "templates", global = true)]
    templates: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered task name
    List,
    /// Print the template of a task as JSON
    Show {
        task_name: String,
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Lint the registered templates, or a single template file
    Lint {
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Apply field values and report which fields are relevant and visible
    Inspect {
        task_name: String,
        /// Field assignment as name=value, repeatable
        #[arg(short, long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
    /// Apply field values and print the payload sent to the backend task
    Payload {
        task_name: String,
        #[arg(short, long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let registry = load_registry(&cli.templates);
    match cli.command {
        Command::List => {
            for task_name in registry.task_names() {
                println!("{}", task_name);
            }
        }
        Command::Show { task_name, compact } => {
            let template = require(&registry, &task_name);
            let json = if compact {
                template.to_json()
            } else {
                template.to_json_pretty()
            };
            println!(
                "{}",
                json.unwrap_or_else(|e| exit_with_error(&format!("Serialization failed: {}", e)))
            );
        }
        // Reaching `build` already linted every registered template.
        Command::Lint { file: None } => {
            println!("{} templates passed lint", registry.len());
        }
        Command::Lint { file: Some(path) } => run_lint_file(&path),
        Command::Inspect { task_name, set } => run_inspect(&registry, &task_name, set),
        Command::Payload { task_name, set } => {
            let template = require(&registry, &task_name);
            let node = apply_values(template, set);
            let payload = node
                .payload()
                .unwrap_or_else(|e| exit_with_error(&format!("Submission rejected: {}", e)));
            let json = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|e| exit_with_error(&format!("Serialization failed: {}", e)));
            println!("{}", json);
        }
    }
}

fn load_registry(extra: &[String]) -> TemplateRegistry {
    let start = Instant::now();
    let builder = extra
        .iter()
        .fold(TemplateRegistry::builder().with_defaults(), |b, path| {
            b.with_template_file(path)
        });
    let registry = builder
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build registry: {}", e)));
    info!(
        "Loaded {} templates in {:?}",
        registry.len(),
        start.elapsed()
    );
    registry
}

fn run_lint_file(path: &str) {
    let template = NodeTemplate::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load '{}': {}", path, e)));
    let defects = lint_template(&template);
    if defects.is_empty() {
        println!("'{}' ({}) passed lint", path, template.task_name);
        return;
    }
    println!("'{}' ({}) has {} defects:", path, template.task_name, defects.len());
    for defect in &defects {
        println!("  - {}", defect);
    }
    std::process::exit(1);
}

fn run_inspect(registry: &TemplateRegistry, task_name: &str, set: Vec<(String, String)>) {
    let template = require(registry, task_name);
    let node = apply_values(template, set);

    println!("\n--- {} ---", template.task_name);
    for field in &template.fields {
        let relevant = node
            .is_relevant(&field.name)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        let visible = node
            .is_visible(&field.name)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        let value = node.value(&field.name).unwrap_or(&field.value);
        let condition = field
            .condition
            .as_ref()
            .map_or(String::new(), |c| format!("  [when {}]", c));
        println!(
            "  {:<18} {:<9} relevant={:<5} visible={:<5} value={}{}",
            field.name,
            field.value_type.as_str(),
            relevant,
            visible,
            value,
            condition
        );
    }

    match node.validate_submission() {
        Ok(()) => println!("\n  -> Ready to submit"),
        Err(e) => println!("\n  -> Not ready: {}", e),
    }
}

fn apply_values<'t>(
    template: &'t NodeTemplate,
    set: Vec<(String, String)>,
) -> NodeInstance<'t> {
    let mut node = NodeInstance::new(template);
    for (name, raw) in set {
        let value = template
            .field(&name)
            .map_or_else(|| FieldValue::parse_loose(&raw), |f| f.value_type.parse_value(&raw));
        node.set_value(&name, value)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }
    node
}

fn require<'r>(registry: &'r TemplateRegistry, task_name: &str) -> &'r NodeTemplate {
    registry
        .require(task_name)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;
    Ok((name.trim().to_string(), value.to_string()))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
