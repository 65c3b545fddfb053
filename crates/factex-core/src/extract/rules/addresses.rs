//! Sender/recipient address block extraction.

use regex::Regex;
use tracing::trace;

use super::patterns::{FROM_MARKERS, NON_ADDRESS_LINE, POSTAL_CODE, SECTION_BREAK, TO_MARKERS};

/// Maximum lines collected into one address block.
const MAX_BLOCK_LINES: usize = 5;

/// Characters examined after a section marker.
const MARKER_WINDOW: usize = 500;

/// Minimum joined length for a labeled block to count as an address.
const MIN_BLOCK_LEN: usize = 10;

/// Extract sender and recipient address blocks.
///
/// Labeled markers are tried first; any side still missing falls back to
/// postal-code-anchored block detection. Both sides default to the empty
/// string when nothing plausible is found.
pub fn extract_addresses(lines: &[String], full_text: &str) -> (String, String) {
    let mut from_address = find_labeled_block(full_text, &FROM_MARKERS[..]).unwrap_or_default();
    let mut to_address = find_labeled_block(full_text, &TO_MARKERS[..]).unwrap_or_default();

    if from_address.is_empty() || to_address.is_empty() {
        let blocks = find_postal_blocks(lines);
        trace!("postal fallback found {} candidate blocks", blocks.len());

        if blocks.len() >= 2 {
            if from_address.is_empty() {
                from_address = blocks[0].clone();
            }
            if to_address.is_empty() {
                to_address = blocks[1].clone();
            }
        } else if blocks.len() == 1 && to_address.is_empty() {
            to_address = blocks[0].clone();
        }
    }

    (
        from_address.trim().to_string(),
        to_address.trim().to_string(),
    )
}

/// First marker whose following window yields a plausible block wins.
fn find_labeled_block(text: &str, markers: &[Regex]) -> Option<String> {
    for marker in markers {
        if let Some(m) = marker.find(text) {
            let block = collect_block(text, m.end());
            if block.chars().count() > MIN_BLOCK_LEN {
                return Some(block);
            }
        }
    }
    None
}

/// Collect up to five lines from the window following a marker.
///
/// A blank line before any content is skipped; a blank line after content
/// or a line opening another labeled section ends the block.
fn collect_block(text: &str, start: usize) -> String {
    let window: String = text[start..].chars().take(MARKER_WINDOW).collect();

    let mut block_lines: Vec<&str> = Vec::new();
    for line in window.split('\n').take(MAX_BLOCK_LINES) {
        let line = line.trim();
        if line.is_empty() {
            if !block_lines.is_empty() {
                break;
            }
            continue;
        }
        if SECTION_BREAK.is_match(line) {
            break;
        }
        block_lines.push(line);
    }

    block_lines.join("\n")
}

/// Candidate blocks anchored on postal-code lines, in line order.
///
/// Each match at line i contributes the window [i-2, i+1] clipped to
/// bounds, minus lines that look like totals or metadata. Windows of two
/// nearby matches may share lines.
fn find_postal_blocks(lines: &[String]) -> Vec<String> {
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if POSTAL_CODE.is_match(&lines[i]) {
            let start = i.saturating_sub(2);
            let end = (i + 1).min(lines.len());

            let mut block_lines: Vec<&str> = Vec::new();
            for j in start..=end {
                if j >= lines.len() {
                    break;
                }
                let line = lines[j].trim();
                if !line.is_empty() && !NON_ADDRESS_LINE.is_match(line) {
                    block_lines.push(line);
                }
            }

            if !block_lines.is_empty() {
                blocks.push(block_lines.join("\n"));
            }
            i = end + 1;
        } else {
            i += 1;
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_labeled_markers_win() {
        let text = "From:\nAcme Studio\n12 Main Street\nSpringfield\n\nBill To:\nBeta LLC\n99 Side Road\nShelbyville\n";
        let (from, to) = extract_addresses(&lines(text), text);

        assert_eq!(from, "Acme Studio\n12 Main Street\nSpringfield");
        assert_eq!(to, "Beta LLC\n99 Side Road\nShelbyville");
    }

    #[test]
    fn test_marker_block_stops_at_section_break() {
        let text = "De :\nAtelier Dupont\n3 rue Verte\nTotal: 100,00\n";
        let (from, _) = extract_addresses(&lines(text), text);

        assert_eq!(from, "Atelier Dupont\n3 rue Verte");
    }

    #[test]
    fn test_short_marker_block_rejected() {
        // "X" after the marker is below the minimum block length
        let text = "From: X\n";
        let (from, to) = extract_addresses(&lines(text), text);

        assert_eq!(from, "");
        assert_eq!(to, "");
    }

    #[test]
    fn test_postal_fallback_fills_both_sides() {
        let text = "Acme Studio\n12 rue des Fleurs\n75001 Paris\nWidget Corp\n8 avenue Foch\n69002 Lyon\n";
        let (from, to) = extract_addresses(&lines(text), text);

        assert!(from.starts_with("Acme Studio"));
        assert!(from.contains("75001 Paris"));
        assert_eq!(to, "Widget Corp\n8 avenue Foch\n69002 Lyon");
    }

    #[test]
    fn test_single_postal_block_fills_recipient_only() {
        let text = "Widget Corp\n8 avenue Foch\n69002 Lyon\n";
        let (from, to) = extract_addresses(&lines(text), text);

        assert_eq!(from, "");
        assert_eq!(to, "Widget Corp\n8 avenue Foch\n69002 Lyon");
    }

    #[test]
    fn test_postal_block_drops_totals_lines() {
        let text = "Total: 90,00\nWidget Corp\n69002 Lyon\n";
        let (_, to) = extract_addresses(&lines(text), text);

        assert_eq!(to, "Widget Corp\n69002 Lyon");
    }

    #[test]
    fn test_no_addresses_found() {
        let text = "just some words\nnothing structured here\n";
        let (from, to) = extract_addresses(&lines(text), text);

        assert_eq!(from, "");
        assert_eq!(to, "");
    }
}
