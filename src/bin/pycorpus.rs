//! Command-line interface for pycorpus
//! Mines a Python source tree for comment and docstring prose and writes the
//! aggregated corpus to a text file.
//!
//! Usage:
//!   pycorpus [path] [--output <file>] [--docstrings] [--no-single-word] [--format <format>]

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, Command};
use pycorpus::corpus::{write_corpus, Corpus, ExtractOptions};

fn main() {
    let matches = Command::new("pycorpus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts comment and docstring prose from Python source trees")
        .arg(
            Arg::new("path")
                .help("Root of the source tree to mine (falls back to '.' when not a directory)")
                .default_value(".")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Corpus output file (text format only)")
                .default_value("corpus.txt"),
        )
        .arg(
            Arg::new("docstrings")
                .long("docstrings")
                .help("Include docstrings in each file's block")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-single-word")
                .long("no-single-word")
                .help("Drop comments consisting of a single word")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text' writes the corpus file, 'json' prints per-file blocks")
                .default_value("text"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("has a default");
    let root = if Path::new(path).is_dir() {
        PathBuf::from(path)
    } else {
        PathBuf::from(".")
    };

    let options = ExtractOptions {
        allow_single_word: !matches.get_flag("no-single-word"),
        docstrings: matches.get_flag("docstrings"),
        output: PathBuf::from(matches.get_one::<String>("output").expect("has a default")),
    };

    let format = matches.get_one::<String>("format").expect("has a default");
    match format.as_str() {
        "text" => {
            write_corpus(&root, &options).unwrap_or_else(|e| {
                eprintln!("Corpus build failed: {}", e);
                std::process::exit(1);
            });
        }
        "json" => {
            let corpus = Corpus::build(&root, &options).unwrap_or_else(|e| {
                eprintln!("Corpus build failed: {}", e);
                std::process::exit(1);
            });
            let rendered = serde_json::to_string_pretty(&corpus.blocks).unwrap_or_else(|e| {
                eprintln!("Error formatting blocks: {}", e);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: text, json");
            std::process::exit(2);
        }
    }
}
