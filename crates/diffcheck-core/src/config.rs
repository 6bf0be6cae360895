use anyhow::{bail, Context, Result};
use regex::Regex;

// Raw directive values in order of appearance; echoed verbatim in the
// report header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    pub ignore_case: bool,
    pub ignore_whitespace: bool,
    pub ignore_wrap: bool,
    pub address_indexes: Vec<String>,
    pub ignore_regexes: Vec<String>,
    pub ignore_files: Vec<String>,
    pub replace_old: Vec<String>,
    pub replace_new: Vec<String>,
}

impl Directives {
    pub fn record(&mut self, entry: &str) {
        match entry.split_once('=') {
            Some((name, value)) => match name {
                "IgnoreAddressIndex" => self.address_indexes.push(value.to_string()),
                "IgnoreDiffsContainingRegex" => self.ignore_regexes.push(value.to_string()),
                "IgnoreFile" => self.ignore_files.push(value.to_string()),
                "RegexReplace" => self.replace_old.push(value.to_string()),
                "RegexReplaceNew" => self.replace_new.push(value.to_string()),
                _ => self.record_flag(name),
            },
            None => self.record_flag(entry),
        }
    }

    fn record_flag(&mut self, name: &str) {
        match name {
            "ExpIgnoreCase" => self.ignore_case = true,
            "IgnoreWhitespace" => self.ignore_whitespace = true,
            "IgnoreWrap" => self.ignore_wrap = true,
            _ => {}
        }
    }
}

#[derive(Debug)]
pub struct ReplaceRule {
    pub pattern: Regex,
    pub replacement: String,
}

#[derive(Debug)]
pub struct CheckConfig {
    pub directives: Directives,
    pub address_indexes: Vec<usize>,
    pub ignore_regexes: Vec<Regex>,
    pub replace_old: Vec<ReplaceRule>,
    pub replace_new: Vec<ReplaceRule>,
}

impl CheckConfig {
    pub fn from_directives(directives: Directives) -> Result<CheckConfig> {
        let address_indexes = directives
            .address_indexes
            .iter()
            .map(|value| {
                value
                    .parse::<usize>()
                    .with_context(|| format!("Invalid IgnoreAddressIndex value: '{}'", value))
            })
            .collect::<Result<Vec<_>>>()?;

        let ignore_regexes = directives
            .ignore_regexes
            .iter()
            .map(|value| {
                Regex::new(value).with_context(|| {
                    format!("Invalid IgnoreDiffsContainingRegex pattern: '{}'", value)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let replace_old = compile_rules(&directives.replace_old, "RegexReplace")?;
        let replace_new = compile_rules(&directives.replace_new, "RegexReplaceNew")?;

        Ok(CheckConfig {
            directives,
            address_indexes,
            ignore_regexes,
            replace_old,
            replace_new,
        })
    }
}

fn compile_rules(values: &[String], name: &str) -> Result<Vec<ReplaceRule>> {
    values
        .iter()
        .map(|value| {
            parse_rule(value).with_context(|| format!("Invalid {} rule: '{}'", name, value))
        })
        .collect()
}

// The rule's first character is the delimiter; only the first two
// delimited fields are used.
fn parse_rule(value: &str) -> Result<ReplaceRule> {
    let mut chars = value.chars();
    let delimiter = match chars.next() {
        Some(c) => c,
        None => bail!("empty rule"),
    };
    let mut fields = chars.as_str().split(delimiter);
    let pattern = fields.next().unwrap_or("");
    let replacement = match fields.next() {
        Some(r) => r,
        None => bail!("missing '{}' between pattern and replacement", delimiter),
    };
    Ok(ReplaceRule {
        pattern: Regex::new(pattern)?,
        replacement: replacement.to_string(),
    })
}
