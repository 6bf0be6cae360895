use crate::config::Directives;
use crate::types::Hunk;

pub const OLD_FILE_PREFIX: &str = "--- ";
pub const NEW_FILE_PREFIX: &str = "+++ ";
pub const DIRECTIVE_PREFIX: &str = "; @";

// File tracking is on iff `default_file` is given. With tracking off,
// `+++ ` lines are not special-cased and are ingested as added lines.
pub fn extract_hunks(text: &str, default_file: Option<&str>) -> Vec<Hunk> {
    scan(text, default_file, None)
}

pub fn parse_expected(text: &str) -> (Vec<Hunk>, Directives) {
    let mut directives = Directives::default();
    let hunks = scan(text, None, Some(&mut directives));
    (hunks, directives)
}

fn scan(
    text: &str,
    default_file: Option<&str>,
    mut directives: Option<&mut Directives>,
) -> Vec<Hunk> {
    let track_files = default_file.is_some();
    let mut cur_file = default_file.map(|f| f.to_string());
    let mut hunks: Vec<Hunk> = Vec::new();
    // Consecutive marker lines form one hunk; anything else closes it.
    let mut in_hunk = false;

    for line in text.lines() {
        if let Some(directives) = directives.as_deref_mut() {
            if let Some(rest) = line.strip_prefix(DIRECTIVE_PREFIX) {
                directives.record(rest.trim_end());
                continue;
            }
        }
        if line.starts_with(OLD_FILE_PREFIX) {
            in_hunk = false;
            continue;
        }
        if track_files && line.starts_with(NEW_FILE_PREFIX) {
            if let Some(name) = line.split_whitespace().nth(1) {
                cur_file = Some(name.to_string());
            }
            continue;
        }
        if line.starts_with('-') || line.starts_with('+') {
            if !in_hunk {
                hunks.push(Hunk::new(cur_file.clone()));
            }
            if let Some(hunk) = hunks.last_mut() {
                if line.starts_with('-') {
                    hunk.removed.push(line.to_string());
                } else {
                    hunk.added.push(line.to_string());
                }
            }
            in_hunk = true;
        } else {
            in_hunk = false;
        }
    }

    hunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hunks_grouping() {
        let text = "--- a\n+++ f.txt\n-old\n+new\n\n-second\n";
        let hunks = extract_hunks(text, Some("diffs.txt"));
        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[0].file.as_deref(), Some("f.txt"));
        assert_eq!(hunks[0].removed, vec!["-old"]);
        assert_eq!(hunks[0].added, vec!["+new"]);
        assert_eq!(hunks[1].removed, vec!["-second"]);
        assert!(hunks[1].added.is_empty());
    }

    #[test]
    fn test_extract_hunks_default_file_before_header() {
        let text = "-early\n";
        let hunks = extract_hunks(text, Some("diffs.txt"));
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].file.as_deref(), Some("diffs.txt"));
    }

    #[test]
    fn test_context_line_splits_hunks() {
        let text = "+a\n context\n+b\n";
        let hunks = extract_hunks(text, Some("d"));
        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[0].added, vec!["+a"]);
        assert_eq!(hunks[1].added, vec!["+b"]);
    }

    #[test]
    fn test_old_file_marker_closes_hunk() {
        let text = "+a\n--- f\n+b\n";
        let hunks = extract_hunks(text, Some("d"));
        assert_eq!(hunks.len(), 2);
    }

    #[test]
    fn test_untracked_plus_header_is_added_line() {
        let hunks = extract_hunks("+++ f.txt\n", None);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].added, vec!["+++ f.txt"]);
        assert_eq!(hunks[0].file, None);
    }

    #[test]
    fn test_bare_plus_header_keeps_file_name() {
        let text = "+++ f.txt\n+a\n+++ \n+b\n";
        let hunks = extract_hunks(text, Some("d"));
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].file.as_deref(), Some("f.txt"));
        assert_eq!(hunks[0].added, vec!["+a", "+b"]);
    }

    #[test]
    fn test_parse_expected_diverts_directives() {
        let text = "; @ExpIgnoreCase\n; @IgnoreFile=skip.txt\n-old\n+new\n";
        let (hunks, directives) = parse_expected(text);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].removed, vec!["-old"]);
        assert!(directives.ignore_case);
        assert_eq!(directives.ignore_files, vec!["skip.txt"]);
    }

    #[test]
    fn test_directive_between_markers_splits_nothing() {
        // Directive lines are diverted before the marker test and do not
        // close the surrounding hunk.
        let text = "-a\n; @IgnoreWrap\n+b\n";
        let (hunks, directives) = parse_expected(text);
        assert!(directives.ignore_wrap);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].removed, vec!["-a"]);
        assert_eq!(hunks[0].added, vec!["+b"]);
    }

    #[test]
    fn test_singleton_hunks_when_separated() {
        let text = "-a\n\n+b\n\n-c\n";
        let hunks = extract_hunks(text, Some("d"));
        assert_eq!(hunks.len(), 3);
        for hunk in &hunks {
            assert_eq!(hunk.removed.len() + hunk.added.len(), 1);
        }
    }
}
