use crate::config::CheckConfig;
use crate::types::Hunk;

// `source` indexes the original hunk an entry was derived from.
#[derive(Debug)]
pub struct BaselineEntry {
    pub removed: Vec<String>,
    pub added: Vec<String>,
    pub source: usize,
}

#[derive(Debug)]
pub struct Baseline {
    pub originals: Vec<Hunk>,
    pub entries: Vec<BaselineEntry>,
}

impl Baseline {
    pub fn build(hunks: Vec<Hunk>, config: &CheckConfig) -> Baseline {
        let mut entries: Vec<BaselineEntry> = hunks
            .iter()
            .enumerate()
            .map(|(i, hunk)| BaselineEntry {
                removed: hunk.removed.clone(),
                added: hunk.added.clone(),
                source: i,
            })
            .collect();

        for &index in &config.address_indexes {
            for (i, hunk) in hunks.iter().enumerate() {
                let (removed_changed, hex_removed) = convert_addresses(&hunk.removed, index);
                let (added_changed, hex_added) = convert_addresses(&hunk.added, index);
                if removed_changed || added_changed {
                    entries.push(BaselineEntry {
                        removed: hex_removed,
                        added: hex_added,
                        source: i,
                    });
                }
            }
        }

        if config.directives.ignore_case {
            for entry in &mut entries {
                for line in entry.removed.iter_mut().chain(entry.added.iter_mut()) {
                    *line = line.to_lowercase();
                }
            }
        }

        Baseline {
            originals: hunks,
            entries,
        }
    }
}

pub fn convert_addresses(lines: &[String], index: usize) -> (bool, Vec<String>) {
    let mut changed = false;
    let hex_lines = lines
        .iter()
        .map(|line| match convert_address(line, index) {
            Some(hex_line) => {
                changed = true;
                hex_line
            }
            None => line.clone(),
        })
        .collect();
    (changed, hex_lines)
}

// The address field is the 5 characters after the marker at `index`,
// fewer if the line ends early; a wholly-numeric field still converts.
fn convert_address(line: &str, index: usize) -> Option<String> {
    let start = index.checked_add(1)?;
    let end = index.checked_add(6)?.min(line.len());
    if start >= end {
        return None;
    }
    let field = line.get(start..end)?;
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = field.parse().ok()?;
    Some(format!("{}${:04X}{}", &line[..start], value, &line[end..]))
}
