use std::collections::{BTreeSet, HashSet};

use crate::baseline::Baseline;
use crate::config::CheckConfig;
use crate::normalize::{comparison_pair, is_noop, is_suppressed};
use crate::types::Hunk;

#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    pub unexpected: Option<String>,
    pub confirmed: String,
}

pub fn check_diffs(
    candidates: &[Hunk],
    baseline: &Baseline,
    config: &CheckConfig,
    exp_name: &str,
    exp_found: bool,
) -> Report {
    let mut used: BTreeSet<usize> = BTreeSet::new();
    let mut seen: HashSet<(Vec<String>, Vec<String>)> = HashSet::new();
    let mut lines: Vec<String> = Vec::new();
    let mut last_file: Option<&str> = None;

    for hunk in candidates {
        if is_suppressed(hunk, config) {
            continue;
        }
        if is_noop(hunk, config) {
            continue;
        }

        let (removed, added) = comparison_pair(hunk, config);
        if let Some(entry) = baseline
            .entries
            .iter()
            .find(|entry| entry.removed == removed && entry.added == added)
        {
            used.insert(entry.source);
            continue;
        }

        if !seen.insert((hunk.removed.clone(), hunk.added.clone())) {
            continue;
        }

        if last_file != hunk.file.as_deref() {
            lines.push(format!("+++ {}", hunk.file.as_deref().unwrap_or("")));
            last_file = hunk.file.as_deref();
        }
        lines.extend(hunk.removed.iter().cloned());
        lines.extend(hunk.added.iter().cloned());
        lines.push(String::new());
    }

    let unexpected = if lines.is_empty() {
        None
    } else {
        Some(render_report(config, exp_name, exp_found, &lines))
    };

    Report {
        unexpected,
        confirmed: render_confirmed(baseline, &used),
    }
}

fn render_report(
    config: &CheckConfig,
    exp_name: &str,
    exp_found: bool,
    hunk_lines: &[String],
) -> String {
    let directives = &config.directives;
    let suffix = if exp_found { "" } else { " (not found)" };
    let mut out = Vec::new();

    out.push(format!("+ Expected diffs file: {}{}", exp_name, suffix));
    out.push("+".to_string());
    out.push(format!("+ @ExpIgnoreCase={}", directives.ignore_case));
    for value in &directives.address_indexes {
        out.push(format!("+ @IgnoreAddressIndex={}", value));
    }
    for value in &directives.ignore_regexes {
        out.push(format!("+ @IgnoreDiffsContainingRegex={}", value));
    }
    for value in &directives.ignore_files {
        out.push(format!("+ @IgnoreFile={}", value));
    }
    out.push(format!("+ @IgnoreWhitespace={}", directives.ignore_whitespace));
    out.push(format!("+ @IgnoreWrap={}", directives.ignore_wrap));
    for value in &directives.replace_old {
        out.push(format!("+ @RegexReplace={}", value));
    }
    for value in &directives.replace_new {
        out.push(format!("+ @RegexReplaceNew={}", value));
    }
    out.push(String::new());
    out.extend(hunk_lines.iter().cloned());
    out.join("\n")
}

fn render_confirmed(baseline: &Baseline, used: &BTreeSet<usize>) -> String {
    let mut out = String::new();
    for &source in used {
        let hunk = &baseline.originals[source];
        for line in hunk.removed.iter().chain(hunk.added.iter()) {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
