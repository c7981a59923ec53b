mod common;
use common::*;

use core_actions::Editor;
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_text::Document;
use pretty_assertions::assert_eq;

fn redo(ed: &mut Editor) {
    ed.process(
        KeyEvent::char('r').with_mods(KeyModifiers::CTRL),
        COLS,
        ROWS,
    );
}

#[test]
fn undo_on_fresh_editor_is_idempotent() {
    let mut ed = editor("abc\n");
    type_keys(&mut ed, "uuu");
    assert_eq!(text(&ed), "abc\n");
    assert_eq!(ed.cursor(), 0);
    assert_eq!(ed.history_depth(), 1);
    assert_eq!(ed.notification(), "Already at oldest change");
}

#[test]
fn undo_reverts_last_edit() {
    let mut ed = editor("abc\n");
    type_keys(&mut ed, "x");
    type_keys(&mut ed, "u");
    assert_eq!(text(&ed), "abc\n");
    assert_eq!(ed.cursor(), 0);
}

#[test]
fn undo_restores_cursor_from_before_edit() {
    let mut ed = editor("abc\ndef\n");
    type_keys(&mut ed, "jlx");
    assert_eq!(text(&ed), "abc\ndf\n");
    type_keys(&mut ed, "kh");
    type_keys(&mut ed, "u");
    assert_eq!(text(&ed), "abc\ndef\n");
    assert_eq!(ed.cursor(), 5, "cursor where x was pressed");
}

#[test]
fn each_insert_key_is_one_undo_step() {
    let mut ed = editor("\n");
    type_keys(&mut ed, "iab");
    press(&mut ed, KeyCode::Esc);
    assert_eq!(text(&ed), "ab\n");
    type_keys(&mut ed, "u");
    assert_eq!(text(&ed), "a\n");
    type_keys(&mut ed, "u");
    assert_eq!(text(&ed), "\n");
}

#[test]
fn redo_reapplies_undone_edit() {
    let mut ed = editor("abc\n");
    type_keys(&mut ed, "xx");
    type_keys(&mut ed, "uu");
    assert_eq!(text(&ed), "abc\n");
    redo(&mut ed);
    assert_eq!(text(&ed), "bc\n");
    redo(&mut ed);
    assert_eq!(text(&ed), "c\n");
    redo(&mut ed);
    assert_eq!(text(&ed), "c\n");
    assert_eq!(ed.notification(), "Already at newest change");
}

#[test]
fn new_edit_discards_redo() {
    let mut ed = editor("abc\n");
    type_keys(&mut ed, "xu");
    type_keys(&mut ed, "lx");
    assert_eq!(text(&ed), "ac\n");
    redo(&mut ed);
    assert_eq!(text(&ed), "ac\n");
    assert_eq!(ed.notification(), "Already at newest change");
}

#[test]
fn motion_after_undo_keeps_redo() {
    let mut ed = editor("abc\ndef\n");
    type_keys(&mut ed, "xu");
    type_keys(&mut ed, "jk");
    redo(&mut ed);
    assert_eq!(text(&ed), "bc\ndef\n");
}

#[test]
fn history_never_exceeds_limit_plus_one() {
    let limit = 3;
    let mut ed = Editor::with_history_limit(Document::from_str("abcdefghijkl\n"), limit);
    for _ in 0..10 {
        type_keys(&mut ed, "x");
        assert!(ed.history_depth() <= limit + 1, "depth {}", ed.history_depth());
    }
    assert_eq!(text(&ed), "kl\n");
    for _ in 0..10 {
        type_keys(&mut ed, "u");
        assert!(ed.history_depth() <= limit + 1);
    }
    assert_eq!(ed.notification(), "Already at oldest change");
    assert_ne!(text(&ed), "abcdefghijkl\n", "oldest edits were evicted");
}

#[test]
fn undo_marks_document_dirty() {
    let mut ed = editor("abc\n");
    assert!(!ed.is_dirty());
    type_keys(&mut ed, "xu");
    assert!(ed.is_dirty());
}
