use super::*;

fn text(id: &str, content: &str) -> TextRef {
    TextRef {
        id: id.to_owned(),
        text_str: content.to_owned(),
        length: None,
    }
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

// =============================================================
// sets_equal
// =============================================================

#[test]
fn sets_equal_ignores_order() {
    assert!(sets_equal(&set(&["1", "2", "3"]), &set(&["3", "2", "1"])));
}

#[test]
fn sets_equal_rejects_different_sizes() {
    assert!(!sets_equal(&set(&["1", "2"]), &set(&["1", "2", "3"])));
}

#[test]
fn sets_equal_rejects_different_members() {
    assert!(!sets_equal(&set(&["1", "2"]), &set(&["1", "3"])));
}

#[test]
fn sets_equal_on_empty_sets() {
    assert!(sets_equal(&set(&[]), &set(&[])));
}

// =============================================================
// OptionsCache
// =============================================================

#[test]
fn cache_starts_needing_a_rebuild() {
    let cache = OptionsCache::new();
    assert!(cache.needs_rebuild(&[text("a", "x")]));
}

#[test]
fn cache_skips_rebuild_for_same_set_reordered() {
    let mut cache = OptionsCache::new();
    cache.mark_rendered(&[text("a", "x"), text("b", "y")]);
    assert!(!cache.needs_rebuild(&[text("b", "y"), text("a", "x")]));
}

#[test]
fn cache_detects_added_and_removed_ids() {
    let mut cache = OptionsCache::new();
    cache.mark_rendered(&[text("a", "x"), text("b", "y")]);
    assert!(cache.needs_rebuild(&[text("a", "x")]));
    assert!(cache.needs_rebuild(&[text("a", "x"), text("b", "y"), text("c", "z")]));
}

#[test]
fn cache_compares_ids_not_content() {
    let mut cache = OptionsCache::new();
    cache.mark_rendered(&[text("a", "old content")]);
    assert!(!cache.needs_rebuild(&[text("a", "new content")]));
}

// =============================================================
// build_entries
// =============================================================

#[test]
fn entries_start_with_the_placeholder() {
    let entries = build_entries(&[text("a", "hello")], None);
    assert_eq!(entries[0].label, PLACEHOLDER_LABEL);
    assert!(entries[0].value.is_none());
    assert!(entries[0].tooltip.is_none());
}

#[test]
fn entry_label_truncates_to_thirty_chars_with_id_suffix() {
    let content = "abcdefghijklmnopqrstuvwxyz0123456789";
    let entries = build_entries(&[text("doc-1", content)], None);
    assert_eq!(
        entries[1].label,
        "abcdefghijklmnopqrstuvwxyz0123... (ID: doc-1)"
    );
}

#[test]
fn short_text_still_gets_the_ellipsis() {
    let entries = build_entries(&[text("doc-1", "tiny")], None);
    assert_eq!(entries[1].label, "tiny... (ID: doc-1)");
}

#[test]
fn tooltip_carries_the_untruncated_content() {
    let content = "a".repeat(100);
    let entries = build_entries(&[text("doc-1", &content)], None);
    assert_eq!(entries[1].tooltip.as_deref(), Some(content.as_str()));
}

#[test]
fn previous_selection_is_kept_when_present() {
    let entries = build_entries(&[text("a", "x"), text("b", "y")], Some("b"));
    assert!(!entries[0].selected);
    assert!(!entries[1].selected);
    assert!(entries[2].selected);
}

#[test]
fn missing_previous_selection_falls_back_to_placeholder() {
    let entries = build_entries(&[text("a", "x"), text("b", "y")], Some("gone"));
    assert!(entries[0].selected);
    assert!(entries.iter().skip(1).all(|entry| !entry.selected));
}

#[test]
fn no_previous_selection_selects_placeholder() {
    let entries = build_entries(&[text("a", "x")], None);
    assert!(entries[0].selected);
}

#[test]
fn multibyte_content_truncates_on_char_boundaries() {
    let content = "é".repeat(40);
    let entries = build_entries(&[text("doc-1", &content)], None);
    let expected = format!("{}... (ID: doc-1)", "é".repeat(30));
    assert_eq!(entries[1].label, expected);
}
