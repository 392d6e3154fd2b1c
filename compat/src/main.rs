use classlink_common::test_case::TestCase;
use clap::Parser;
use colored::Colorize;
use glob::glob;
use std::path::PathBuf;

mod test_runner;
use test_runner::{TestResult, TestRunner};

/// Runs the compatibility fixtures against a classlink binary

#[derive(Parser, Debug)]
struct Args {
    /// Path to the classlink CLI binary
    cli: PathBuf,

    /// Glob matching the compatibility fixtures (e.g. "compatibility-tests/*.md")
    compatibility_tests: String,
}

fn main() {
    let args = Args::parse();

    let paths = match glob(&args.compatibility_tests) {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("Invalid pattern `{}`: {}", args.compatibility_tests, err);
            std::process::exit(1);
        }
    };

    let runner = TestRunner::from_path(args.cli);
    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                eprintln!("{}", err);
                failed += 1;
                continue;
            }
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Could not read `{}`: {}", path.display(), err);
                failed += 1;
                continue;
            }
        };

        let test_case = TestCase::from_string(content, &path);
        if test_case.disabled {
            println!("{} {}", "SKIP".yellow(), test_case.name);
            skipped += 1;
            continue;
        }

        match runner.run(&test_case) {
            TestResult::Pass => {
                println!("{} {}", "PASS".green(), test_case.name);
                passed += 1;
            }
            TestResult::Fail { expected, actual } => {
                println!("{} {} ({})", "FAIL".red(), test_case.name, path.display());
                if let Some(expected) = expected {
                    println!("  expected:\n{}", expected);
                }
                println!("  actual:\n{}", actual);
                failed += 1;
            }
        }
    }

    println!(
        "\n{} passed, {} failed, {} skipped",
        passed.to_string().green(),
        failed.to_string().red(),
        skipped
    );

    if failed > 0 {
        std::process::exit(1);
    }
}
