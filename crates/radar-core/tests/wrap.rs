// File: crates/radar-core/tests/wrap.rs
// Purpose: Variable-name word wrapping — breaks between words, never inside.

use radar_core::wrap;

#[test]
fn short_names_stay_on_one_line() {
    assert_eq!(wrap("Speed", 15), vec!["Speed"]);
}

#[test]
fn long_names_break_between_words() {
    let lines = wrap("Average session duration", 15);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.chars().count() <= 15, "line '{line}' too wide");
        assert!(!line.starts_with(' ') && !line.ends_with(' '));
    }
    // No word is split across lines.
    let rejoined = lines.join(" ");
    assert_eq!(rejoined, "Average session duration");
}

#[test]
fn oversized_words_are_kept_whole() {
    let lines = wrap("Internationalization score", 15);
    assert_eq!(lines[0], "Internationalization");
    assert_eq!(lines[1], "score");
}

#[test]
fn empty_name_yields_no_lines() {
    assert!(wrap("", 15).is_empty());
}
