// Gloss Watch - re-explains a source file as it changes on disk
//
// Each save is turned into a content change by diffing against the previous
// snapshot. Meaningful changes clear the explanation cache and trigger a
// fresh translation; whitespace-only saves keep cached entries alive.

use gloss::config::{self, GlossConfig};
use gloss::presentation::TerminalPanel;
use gloss::translation::{
    ContentChange, Converter, CredentialResolver, HttpExplanationService, TranslationCache,
};
use notify::RecursiveMode;
use notify_debouncer_full::{DebounceEventResult, new_debouncer};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

fn print_usage() {
    println!("gloss-watch - keep a pseudocode view of a file up to date");
    println!();
    println!("USAGE:");
    println!("    gloss-watch <file>");
    println!();
    println!("OPTIONS:");
    println!("    --help     Show this help message");
    println!();
    println!("Watches the file for changes; whitespace-only edits reuse the");
    println!("cached explanation, meaningful edits request a fresh one.");
}

fn should_ignore(path: &Path, patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    patterns
        .iter()
        .any(|pattern| glob_match::glob_match(pattern, &path_str))
}

fn build_converter(config: &GlossConfig) -> Converter {
    let service =
        HttpExplanationService::new(&config.endpoint, &config.model).with_temperature(config.temperature);
    let credentials = CredentialResolver::new().with_configured(config.api_key.clone());

    Converter::new(Arc::new(TranslationCache::new()), Arc::new(service), credentials)
}

/// Background refresh: report failures as warnings, never abort the watch
async fn refresh(converter: &Converter, panel: &mut TerminalPanel, content: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S");
    println!("[{}] ⏳ Translating to pseudocode...", timestamp);

    if let Err(e) = converter.convert_and_present(content, panel).await {
        eprintln!("⚠️  Translation failed: {}", e);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return Ok(());
    }

    let file_path = PathBuf::from(&args[1]);
    if !file_path.exists() {
        eprintln!("❌ File not found: {}", file_path.display());
        std::process::exit(1);
    }

    let config = config::load_config()?;
    let converter = build_converter(&config);
    let mut panel = TerminalPanel::new();

    println!("\n🔍 Gloss Watcher");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📁 File: {}", file_path.display());
    println!("🤖 Model: {}", config.model);
    println!("⏱️  Debounce: {}ms", config.debounce_ms);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Watching for changes... (Press Ctrl+C to stop)\n");

    let mut last_content = fs::read_to_string(&file_path)?;
    refresh(&converter, &mut panel, &last_content).await;

    let (tx, rx) = std::sync::mpsc::channel();

    let mut debouncer = new_debouncer(
        Duration::from_millis(config.debounce_ms),
        None,
        move |result: DebounceEventResult| {
            let _ = tx.send(result);
        },
    )?;

    debouncer.watch(&file_path, RecursiveMode::NonRecursive)?;

    for result in rx {
        match result {
            Ok(events) => {
                let touched = events
                    .iter()
                    .flat_map(|event| event.event.paths.iter())
                    .any(|p| {
                        p.file_name() == file_path.file_name()
                            && !should_ignore(p, &config.ignore_patterns)
                    });
                if !touched {
                    continue;
                }

                let new_content = match fs::read_to_string(&file_path) {
                    Ok(content) => content,
                    Err(e) => {
                        eprintln!("⚠️  Could not read {}: {}", file_path.display(), e);
                        continue;
                    }
                };

                if new_content == last_content {
                    continue;
                }

                let change = ContentChange::between(&last_content, &new_content);
                let timestamp = chrono::Local::now().format("%H:%M:%S");

                if converter.cache().apply_change(&change) {
                    println!("[{}] ✏️  Content changed, cache cleared", timestamp);
                    last_content = new_content;
                    refresh(&converter, &mut panel, &last_content).await;
                } else {
                    println!("[{}] ◻️  Whitespace-only change, keeping cache", timestamp);
                    last_content = new_content;
                }
            }
            Err(errors) => {
                for error in errors {
                    eprintln!("⚠️  Watch error: {}", error);
                }
            }
        }
    }

    Ok(())
}
