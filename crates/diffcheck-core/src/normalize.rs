use crate::config::CheckConfig;
use crate::types::Hunk;

// Marker-stripped copies of the lines.
fn content(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| line[1..].to_string()).collect()
}

pub fn is_suppressed(hunk: &Hunk, config: &CheckConfig) -> bool {
    if let Some(file) = hunk.file.as_deref() {
        if config
            .directives
            .ignore_files
            .iter()
            .any(|suffix| file.ends_with(suffix))
        {
            return true;
        }
    }
    if !config.ignore_regexes.is_empty() {
        let all_lines: Vec<String> = content(&hunk.removed)
            .into_iter()
            .chain(content(&hunk.added))
            .collect();
        if config
            .ignore_regexes
            .iter()
            .any(|regex| all_lines.iter().any(|line| regex.is_match(line)))
        {
            return true;
        }
    }
    false
}

// Case folding never applies to the no-op test.
pub fn is_noop(hunk: &Hunk, config: &CheckConfig) -> bool {
    let mut removed = content(&hunk.removed);
    let mut added = content(&hunk.added);

    for rule in &config.replace_new {
        for line in added.iter_mut() {
            *line = rule
                .pattern
                .replace_all(line, rule.replacement.as_str())
                .into_owned();
        }
    }
    for rule in &config.replace_old {
        for line in removed.iter_mut() {
            *line = rule
                .pattern
                .replace_all(line, rule.replacement.as_str())
                .into_owned();
        }
    }

    if config.directives.ignore_whitespace {
        removed = strip_and_drop(&removed);
        added = strip_and_drop(&added);
    }

    if config.directives.ignore_wrap {
        removed = vec![removed.join(" ")];
        added = vec![added.join(" ")];
    }

    removed == added
}

fn strip_and_drop(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

// Baseline matching compares the raw marker-prefixed lines, not the
// rewritten content the no-op test works on.
pub fn comparison_pair(hunk: &Hunk, config: &CheckConfig) -> (Vec<String>, Vec<String>) {
    if config.directives.ignore_case {
        (
            hunk.removed.iter().map(|l| l.to_lowercase()).collect(),
            hunk.added.iter().map(|l| l.to_lowercase()).collect(),
        )
    } else {
        (hunk.removed.clone(), hunk.added.clone())
    }
}
