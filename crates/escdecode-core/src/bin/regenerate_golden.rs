use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use escdecode_core::{DecoderConfig, decode_csv_file, render_plain};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.csv");
        if !input.exists() {
            continue;
        }
        regenerate_one(&path, &input, &path.join("expected.txt"))?;
    }

    Ok(())
}

fn regenerate_one(dir: &Path, input: &Path, output: &Path) -> Result<(), String> {
    let config_path = dir.join("config.json");
    let config = if config_path.exists() {
        DecoderConfig::from_json_file(&config_path)
            .map_err(|err| format!("failed to load {}: {}", config_path.display(), err))?
    } else {
        DecoderConfig::default()
    };

    let pipeline = decode_csv_file(input, &config)
        .map_err(|err| format!("failed to open {}: {}", input.display(), err))?;
    let mut text = String::new();
    for outcome in pipeline {
        let outcome = outcome.map_err(|err| format!("decoding {} failed: {}", input.display(), err))?;
        if let Some(line) = render_plain(&outcome) {
            text.push_str(&line);
            text.push('\n');
        }
    }
    fs::write(output, text).map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
