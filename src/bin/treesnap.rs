//! # treesnap CLI Entry Point
//!
//! Builds the sample tree, snapshots it to the given file, loads the
//! snapshot back, and prints whether the round-tripped tree equals the
//! original.
//!
//! ## Usage
//!
//! ```bash
//! # Snapshot the sample tree to a file and verify the round trip
//! treesnap /tmp/tree.snap
//!
//! # Also print the pre-order key sequence before encoding
//! treesnap --print /tmp/tree.snap
//!
//! # Show version
//! treesnap --version
//!
//! # Show help
//! treesnap --help
//! ```

use std::env;
use std::path::PathBuf;

use eyre::{bail, Result};
use treesnap::snapshot::verify_round_trip;
use treesnap::{KeyPrinter, Record, Tree};

const SAMPLE_KEYS: [i64; 10] = [10, 7, 4, 1, 5, 9, 17, 15, 20, 30];

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let mut print_keys = false;
    let mut out_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("treesnap {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--print" | "-p" => {
                print_keys = true;
            }
            arg if arg.starts_with('-') => {
                bail!("Unknown option: {}", arg);
            }
            path => {
                if out_path.is_some() {
                    bail!("Multiple output paths specified");
                }
                out_path = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    let out_path = match out_path {
        Some(p) => p,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let tree = Tree::from_records(SAMPLE_KEYS.iter().map(|&k| Record::new(k, k.to_string())));

    if print_keys {
        let mut printer = KeyPrinter::new(std::io::stdout().lock());
        tree.traverse(&mut printer)?;
    }

    let same = verify_round_trip(&tree, &out_path)?;
    println!("{}", same);
    Ok(())
}

fn print_usage() {
    println!("treesnap - encode a binary search tree to a file and verify the round trip");
    println!();
    println!("USAGE:");
    println!("    treesnap [OPTIONS] <output-file>");
    println!();
    println!("OPTIONS:");
    println!("    -p, --print      Print the pre-order key sequence before encoding");
    println!("    -h, --help       Show this help message");
    println!("    -v, --version    Show version information");
}
