#![allow(dead_code)]

use std::path::PathBuf;

use listing_lens::{
    HeadlessGeometry, HeadlessListing, HostClick, LensSettings, ListingSession, RecordingOverlay, TextPosition,
    expand_tabs,
};

pub const SCENARIO: &str = "let x = 1;\nconsole.log(x);";

pub type HeadlessSession = ListingSession<HeadlessListing, RecordingOverlay>;

pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(relative_path)
}

pub fn read_fixture(relative_path: &str) -> String {
    std::fs::read_to_string(fixture_path(relative_path)).expect("fixture must exist")
}

pub fn attach(source: &str) -> HeadlessSession {
    attach_with(source, &LensSettings::default())
}

pub fn attach_with(
    source: &str,
    settings: &LensSettings,
) -> HeadlessSession {
    let listing = HeadlessListing::new(source, HeadlessGeometry::default());
    ListingSession::attach(listing, RecordingOverlay::new(), settings).expect("headless listing calibrates")
}

/// Click the centre of the glyph at `position` (tab-expanded coordinates).
pub fn click(
    session: &mut HeadlessSession,
    position: TextPosition,
) -> listing_lens::ClickReport {
    let client = session.surface().client_point_for(position);
    session.on_click(HostClick::at(client))
}

pub fn meta_click(
    session: &mut HeadlessSession,
    position: TextPosition,
) -> listing_lens::ClickReport {
    let client = session.surface().client_point_for(position);
    session.on_click(HostClick {
        client,
        modifier: true,
        has_selection: false,
    })
}

/// Position of the `nth` whole-word occurrence of `needle` in the
/// tab-expanded `source`.
pub fn position_of_nth(
    source: &str,
    needle: &str,
    nth: usize,
) -> TextPosition {
    let expanded = expand_tabs(source, 8);
    let is_ident = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    let mut seen = 0;
    for (line_index, line) in expanded.lines().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let word: Vec<char> = needle.chars().collect();
        for start in 0..chars.len() {
            if chars[start..].starts_with(&word)
                && (start == 0 || !is_ident(chars[start - 1]))
                && chars.get(start + word.len()).is_none_or(|&c| !is_ident(c))
            {
                if seen == nth {
                    return TextPosition::new(line_index as u32, start as u32);
                }
                seen += 1;
            }
        }
    }
    panic!("no occurrence {nth} of {needle:?}");
}

pub fn position_of(
    source: &str,
    needle: &str,
) -> TextPosition {
    position_of_nth(source, needle, 0)
}
