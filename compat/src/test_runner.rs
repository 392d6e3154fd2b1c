use std::process::Command;

use crate::PathBuf;
use crate::TestCase;

#[derive(Debug, Clone)]
pub enum TestResult {
    Pass,
    Fail {
        expected: Option<String>,
        actual: String,
    },
}

pub struct TestRunner {
    cli_path: PathBuf,
}

impl TestRunner {
    pub fn from_path(path: PathBuf) -> Self {
        TestRunner { cli_path: path }
    }

    pub fn run(&self, test_case: &TestCase) -> TestResult {
        // Run the CLI with the fixture's arguments and compare stdout
        match Command::new(&self.cli_path).args(test_case.args()).output() {
            Ok(result) => {
                let output = String::from_utf8_lossy(&result.stdout).into_owned();
                compare(&test_case.result, output)
            }
            Err(err) => TestResult::Fail {
                expected: None,
                actual: format!("Error running {}: {}", self.cli_path.display(), err),
            },
        }
    }
}

fn compare(expected: &str, actual: String) -> TestResult {
    let actual_trimmed = actual.trim_end_matches(&['\r', '\n'][..]);
    let expected_trimmed = expected.trim_end_matches(&['\r', '\n'][..]);

    if expected_trimmed == actual_trimmed {
        TestResult::Pass
    } else {
        TestResult::Fail {
            expected: Some(expected.to_string()),
            actual,
        }
    }
}
