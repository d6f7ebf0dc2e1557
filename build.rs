//! Build script to generate embedded dictionaries
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("dictionaries.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary word lists").unwrap();
    writeln!(output).unwrap();

    generate_word_list(
        &mut output,
        "data/en-us-5.answers.txt",
        "EN_US_5_ANSWERS",
        "Standard English target words",
    );
    generate_word_list(
        &mut output,
        "data/en-us-5.allowed.txt",
        "EN_US_5_ALLOWED",
        "Extra English words accepted as guesses but never dealt",
    );
    generate_word_list(
        &mut output,
        "data/nerdy.answers.txt",
        "NERDY_ANSWERS",
        "Tech and science target words",
    );
    generate_word_list(
        &mut output,
        "data/nerdy.allowed.txt",
        "NERDY_ALLOWED",
        "Extra tech words accepted as guesses but never dealt",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data");
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    writeln!(output, "/// {doc} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
