//! ChronoPulse cipher - interactive encoder/decoder

use chronopulse::{decode, encode, load_cipher, CipherTables};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const DEFAULT_CIPHER_PATH: &str = "chronopulse.json";

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cipher_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CIPHER_PATH.to_string());

    let config = match load_cipher(&cipher_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let tables = match CipherTables::build(&config) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== ChronoPulse Encoder/Decoder ===");
    let mode = match prompt("Mode (encode/decode): ") {
        Ok(mode) => mode.trim().to_lowercase(),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let input = match prompt("Input: ") {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = match mode.as_str() {
        "encode" => encode(&input, &tables),
        "decode" => decode(&input, &tables),
        _ => {
            eprintln!("Invalid mode. Please type 'encode' or 'decode'.");
            return ExitCode::FAILURE;
        }
    };

    println!("\nResult:\n{output}");

    // Unknown input degrades to '?' rather than failing; surface how much
    // of the result is degraded.
    let unknown = output.chars().filter(|&c| c == '?').count();
    if unknown > 0 {
        eprintln!("\n{unknown} character(s) could not be mapped (shown as '?')");
    }

    ExitCode::SUCCESS
}
