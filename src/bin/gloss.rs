// Gloss - explain a code fragment as natural-language pseudocode

use gloss::config::{self, GlossConfig};
use gloss::presentation::TerminalPanel;
use gloss::translation::{Converter, CredentialResolver, HttpExplanationService, TranslationCache};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

fn print_usage() {
    println!("gloss - translate source code into plain-language pseudocode");
    println!();
    println!("USAGE:");
    println!("    gloss <file>       Explain the contents of a file");
    println!("    gloss -            Explain code read from stdin");
    println!();
    println!("OPTIONS:");
    println!("    --init     Create example .gloss.json config");
    println!("    --help     Show this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    Place .gloss.json in your project directory or home directory");
    println!("    Set GLOSS_API_KEY if api_key is not in the config file");
}

fn read_fragment(arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    let path = PathBuf::from(arg);
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }
    Ok(std::fs::read_to_string(&path)?)
}

fn build_converter(config: &GlossConfig) -> Converter {
    let service =
        HttpExplanationService::new(&config.endpoint, &config.model).with_temperature(config.temperature);
    let credentials = CredentialResolver::new().with_configured(config.api_key.clone());

    Converter::new(Arc::new(TranslationCache::new()), Arc::new(service), credentials)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        "--init" => {
            let path = PathBuf::from(".gloss.json");
            if path.exists() {
                eprintln!("❌ .gloss.json already exists");
                std::process::exit(1);
            }
            config::create_example_config(&path)?;
            return Ok(());
        }
        _ => {}
    }

    let config = config::load_config()?;
    let fragment = read_fragment(&args[1])?;
    let converter = build_converter(&config);

    println!("🤖 Model: {}", config.model);
    println!("⏳ Translating to pseudocode...\n");

    // Manual invocation: errors are always surfaced
    let mut panel = TerminalPanel::new();
    if let Err(e) = converter.convert_and_present(&fragment, &mut panel).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
