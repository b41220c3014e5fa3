use clap::{Arg, Command};
use log::LevelFilter;
use phish_scan::classifier::MlpClassifier;
use phish_scan::config::Config;
use phish_scan::scanner::ScanEngine;
use phish_scan::Label;
use std::process;

#[tokio::main]
async fn main() {
    let matches = Command::new("phish-scan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("URL phishing classifier using lexical, host and page-content heuristics")
        .arg(
            Arg::new("url")
                .value_name("URL")
                .help("URL to check")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("/etc/phish-scan/config.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Test configuration validity")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("FILE")
                .help("Model artifact path (overrides config)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the full report as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        match Config::default().to_file(generate_path) {
            Ok(()) => {
                println!("Default configuration written to {generate_path}");
                return;
            }
            Err(e) => {
                eprintln!("Failed to write configuration: {e}");
                process::exit(1);
            }
        }
    }

    let config_path = matches.get_one::<String>("config").unwrap();
    let config = load_config(config_path);

    if matches.get_flag("test-config") {
        println!("Configuration OK");
        println!("  timeout: {}s", config.timeout_seconds);
        println!("  traffic endpoint: {}", config.traffic_endpoint);
        println!("  model: {}", config.model_path);
        return;
    }

    let url = match matches.get_one::<String>("url") {
        Some(url) if !url.trim().is_empty() => url.clone(),
        _ => {
            eprintln!("Please enter a URL to check.");
            process::exit(2);
        }
    };

    let model_path = matches
        .get_one::<String>("model")
        .unwrap_or(&config.model_path);
    let classifier = match MlpClassifier::from_file(model_path) {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("Failed to load classifier model: {e:#}");
            process::exit(1);
        }
    };

    let engine = match ScanEngine::new(&config, classifier) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to initialize scanner: {e:#}");
            process::exit(1);
        }
    };

    match engine.scan(&url).await {
        Ok(report) => {
            if matches.get_flag("json") {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {e}");
                        process::exit(1);
                    }
                }
            } else {
                match report.label {
                    Label::Phishing => {
                        println!("Phishing alert! This URL is classified as phishing.")
                    }
                    Label::Benign => println!("No phishing detected. This URL seems safe."),
                }
            }
        }
        Err(e) => {
            eprintln!("Scan failed: {e:#}");
            process::exit(1);
        }
    }
}

fn load_config(path: &str) -> Config {
    if std::path::Path::new(path).exists() {
        match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration from {path}: {e}");
                process::exit(1);
            }
        }
    } else {
        log::debug!("config file {path} not found, using defaults");
        Config::default()
    }
}
