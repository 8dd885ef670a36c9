//! Pattern-to-color rules.

use crate::config::HighlightRuleConfig;
use nu_ansi_term::Color;
use regex::Regex;
use thiserror::Error;

/// Error raised when a highlight pattern does not compile.
#[derive(Error, Debug)]
#[error("Invalid highlight pattern {pattern:?}: {source}")]
pub struct RuleError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// A compiled pattern and the color it paints.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    regex: Regex,
    color: Color,
}

impl HighlightRule {
    pub fn new(pattern: &str, color: Color) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(HighlightRule { regex, color })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Built-in rule table: punctuation, `color_*` keywords, numbers and quoted strings.
const DEFAULT_RULES: &[(&str, Color)] = &[
    // single characters
    ("`", Color::LightCyan),
    ("'", Color::LightBlue),
    ("\"", Color::LightBlue),
    ("-", Color::LightBlue),
    ("\\+", Color::LightBlue),
    ("=", Color::LightBlue),
    ("/", Color::LightBlue),
    ("\\*", Color::LightBlue),
    ("\\^", Color::LightBlue),
    ("\\.", Color::LightMagenta),
    ("\\(", Color::LightMagenta),
    ("\\)", Color::LightMagenta),
    ("\\[", Color::LightMagenta),
    ("\\]", Color::LightMagenta),
    ("\\{", Color::LightMagenta),
    ("\\}", Color::LightMagenta),
    // color keywords
    ("color_black", Color::Black),
    ("color_red", Color::Red),
    ("color_green", Color::Green),
    ("color_brown", Color::Yellow),
    ("color_blue", Color::Blue),
    ("color_magenta", Color::Magenta),
    ("color_cyan", Color::Cyan),
    ("color_lightgray", Color::LightGray),
    ("color_gray", Color::DarkGray),
    ("color_brightred", Color::LightRed),
    ("color_brightgreen", Color::LightGreen),
    ("color_yellow", Color::LightYellow),
    ("color_brightblue", Color::LightBlue),
    ("color_brightmagenta", Color::LightMagenta),
    ("color_brightcyan", Color::LightCyan),
    ("color_white", Color::White),
    ("color_normal", Color::Default),
    // numbers
    ("[-+]?[0-9]+", Color::LightYellow),
    ("[-+]?[0-9]*\\.[0-9]+", Color::LightYellow),
    ("[-+]?[0-9]+e[-+]?[0-9]+", Color::LightYellow),
    // strings
    ("\".*?\"", Color::LightGreen),
    ("'.*?'", Color::LightGreen),
];

/// Compile the built-in rule table.
pub fn default_rules() -> Vec<HighlightRule> {
    compile(DEFAULT_RULES.iter().copied())
}

/// One literal rule per command name.
pub fn command_rules(names: &[String], color: Color) -> Vec<HighlightRule> {
    let patterns: Vec<String> = names
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| regex::escape(name))
        .collect();
    compile(patterns.iter().map(|p| (p.as_str(), color)))
}

/// Compile user-supplied rules. Invalid patterns are logged and skipped.
pub fn config_rules(rules: &[HighlightRuleConfig]) -> Vec<HighlightRule> {
    compile(rules.iter().map(|r| (r.pattern.as_str(), r.color)))
}

fn compile<'a>(rules: impl Iterator<Item = (&'a str, Color)>) -> Vec<HighlightRule> {
    rules
        .filter_map(|(pattern, color)| match HighlightRule::new(pattern, color) {
            Ok(rule) => Some(rule),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        })
        .collect()
}
