use classlink_common::*;

mod parser;
pub use parser::Parser;

pub mod parsers;

#[cfg(test)]
mod tests;

/// Decodes a link with the default configuration.
pub fn parse(link: &str) -> NavigationState {
    Parser::new().parse(link)
}
