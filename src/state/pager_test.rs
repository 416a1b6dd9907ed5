use super::*;

#[test]
fn pager_starts_at_first_page() {
    let pager = Pager::new();
    assert_eq!(pager.offset, 0);
    assert_eq!(pager.cur_page, 1);
}

#[test]
fn forward_moves_offset_and_counter_together() {
    let mut pager = Pager::new();
    pager.step(PageMove::Forward);
    assert_eq!(pager.offset, 50);
    assert_eq!(pager.cur_page, 2);
    pager.step(PageMove::Forward);
    assert_eq!(pager.offset, 100);
    assert_eq!(pager.cur_page, 3);
}

#[test]
fn back_from_later_page_moves_both_fields() {
    let mut pager = Pager::new();
    pager.step(PageMove::Forward);
    pager.step(PageMove::Forward);
    pager.step(PageMove::Back);
    assert_eq!(pager.offset, 50);
    assert_eq!(pager.cur_page, 2);
}

#[test]
fn back_past_first_window_clamps_offset_only() {
    let mut pager = Pager::new();
    pager.step(PageMove::Back);
    assert_eq!(pager.offset, 0);
    assert_eq!(pager.cur_page, 1);
}

#[test]
fn clamp_after_rewind_keeps_stale_counter() {
    let mut pager = Pager::new();
    pager.step(PageMove::Forward);
    pager.step(PageMove::Forward);
    pager.rewind();
    assert_eq!(pager.offset, 0);
    assert_eq!(pager.cur_page, 3);

    // Backing up from the rewound window clamps again and the counter
    // keeps its stale non-1 value.
    pager.step(PageMove::Back);
    assert_eq!(pager.offset, 0);
    assert_eq!(pager.cur_page, 3);
}

#[test]
fn stay_changes_nothing() {
    let mut pager = Pager::new();
    pager.step(PageMove::Forward);
    pager.step(PageMove::Stay);
    assert_eq!(pager.offset, 50);
    assert_eq!(pager.cur_page, 2);
}

#[test]
fn offset_never_negative_and_stays_window_aligned() {
    let script = [
        PageMove::Back,
        PageMove::Forward,
        PageMove::Forward,
        PageMove::Back,
        PageMove::Back,
        PageMove::Back,
        PageMove::Stay,
        PageMove::Forward,
        PageMove::Back,
        PageMove::Back,
        PageMove::Forward,
    ];
    let mut pager = Pager::new();
    for step in script {
        pager.step(step);
        assert_eq!(pager.offset % PAGE_LIMIT, 0);
        assert!(pager.cur_page >= 1);
    }
}

#[test]
fn direction_matches_contract() {
    assert_eq!(PageMove::Back.direction(), -1);
    assert_eq!(PageMove::Stay.direction(), 0);
    assert_eq!(PageMove::Forward.direction(), 1);
}
