use std::path::Path;
use std::path::PathBuf;

/// A compatibility fixture: CLI arguments and the output they must produce.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    /// One CLI argument per line.
    pub command: String,
    pub result: String,
    pub path: PathBuf,
    pub disabled: bool,
}

fn parse_name(content: &str) -> String {
    content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn parse_markdown_block(content: &str, language: &str) -> String {
    content
        .split_once(&format!("```{}\n", language))
        .and_then(|(_, rest)| rest.split_once("```"))
        .map(|(block, _)| block.trim().to_string())
        .unwrap_or_default()
}

impl TestCase {
    pub fn from_string<A, B>(content: A, path: B) -> Self
    where
        A: AsRef<str>,
        B: AsRef<Path>,
    {
        let content = content.as_ref();
        let name = parse_name(content);
        let command = parse_markdown_block(content, "command");
        let result = parse_markdown_block(content, "result");
        let disabled = content.trim().ends_with("!!! disabled");

        TestCase {
            name,
            command,
            result,
            path: path.as_ref().into(),
            disabled,
        }
    }

    pub fn args(&self) -> Vec<&str> {
        self.command
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}
