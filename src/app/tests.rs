use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tempfile::tempdir;

use crate::config::GradientConfig;
use crate::lifecycle::GutterGradient;

use super::{App, Message, Model, ToastLevel, update};

fn lines(n: usize) -> String {
    (1..=n).map(|i| format!("fn line_{i}() {{}}\n")).collect::<String>()
}

/// A model with one in-memory file of `n` lines plus a trailing newline,
/// and an active gutter.
fn active_model(n: usize) -> (Model, GutterGradient) {
    let mut model = Model::new((80, 24));
    model.open_text(Path::new("long.rs"), &lines(n));
    let mut gutter = GutterGradient::new(GradientConfig::default());
    gutter.activate(&mut model.host).unwrap();
    (model, gutter)
}

fn apply(model: &mut Model, gutter: &GutterGradient, msg: Message) {
    App::apply(model, &mut None, gutter, msg);
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_scroll_down_updates_viewport() {
    let (model, _) = active_model(100);
    let model = update(model, Message::ScrollDown(5));
    assert_eq!(model.viewport.offset(), 5);
}

#[test]
fn test_go_to_bottom_shows_last_page() {
    let (model, _) = active_model(100);
    let model = update(model, Message::GoToBottom);
    // 101 lines (trailing newline) in a 23-row viewport
    assert_eq!(model.viewport.offset(), 78);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(Model::new((80, 24)), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_resize_leaves_a_row_for_status() {
    let model = update(Model::new((80, 24)), Message::Resize(100, 40));
    assert_eq!(model.viewport.height(), 39);
}

#[test]
fn test_insert_line_recolors_gutter() {
    let (mut model, gutter) = active_model(149);
    let id = model.host.focused_id().unwrap();
    // 149 lines of text plus the empty line after the final newline.
    assert_eq!(model.host.color_at(id, 149), Some(gutter.styles()[0].bucket.color));
    assert_eq!(model.host.color_at(id, 150), None);

    apply(&mut model, &gutter, Message::InsertLine);
    assert_eq!(model.host.color_at(id, 150), Some(gutter.styles()[1].bucket.color));
}

#[test]
fn test_delete_line_drops_last_marker() {
    let (mut model, gutter) = active_model(150);
    let id = model.host.focused_id().unwrap();
    assert!(model.host.color_at(id, 150).is_some());

    apply(&mut model, &gutter, Message::DeleteLine);
    assert_eq!(model.host.color_at(id, 150), None);
    assert!(model.host.color_at(id, 149).is_some());
}

#[test]
fn test_switching_files_keeps_each_files_markers() {
    let mut model = Model::new((80, 24));
    let long = model.open_text(Path::new("long.rs"), &lines(299));
    let short = model.open_text(Path::new("short.rs"), &lines(49));
    let mut gutter = GutterGradient::new(GradientConfig::default());
    gutter.activate(&mut model.host).unwrap();
    assert_eq!(model.host.focused_id(), Some(short));

    apply(&mut model, &gutter, Message::NextDocument);
    assert_eq!(model.host.focused_id(), Some(long));
    let catch_all = gutter.styles().last().unwrap().style;
    let before = model.host.document(long).unwrap().decorations()[&catch_all].clone();

    apply(&mut model, &gutter, Message::NextDocument);
    assert_eq!(model.host.focused_id(), Some(short));
    assert!(model.host.document(short).unwrap().decorations().is_empty());
    assert_eq!(
        model.host.document(long).unwrap().decorations()[&catch_all],
        before
    );
}

#[test]
fn test_focus_change_restores_scroll_position() {
    let mut model = Model::new((80, 24));
    let first = model.open_text(Path::new("a.rs"), &lines(200));
    model.open_text(Path::new("b.rs"), &lines(200));
    model.host.focus(first);
    model.sync_viewport();

    let model = update(model, Message::ScrollDown(40));
    let model = update(model, Message::NextDocument);
    assert_eq!(model.viewport.offset(), 0);
    let model = update(model, Message::PrevDocument);
    assert_eq!(model.viewport.offset(), 40);
}

#[test]
fn test_closing_last_file_clears_gutter() {
    let (mut model, gutter) = active_model(200);
    let calls = model.host.apply_calls();

    apply(&mut model, &gutter, Message::CloseDocument);
    assert_eq!(model.host.focused_id(), None);
    assert_eq!(model.viewport.total_lines(), 0);
    assert_eq!(model.host.apply_calls(), calls + gutter.styles().len());
}

#[test]
fn test_file_changed_reloads_matching_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grow.rs");
    std::fs::write(&path, lines(10)).unwrap();

    let mut model = Model::new((80, 24));
    let id = model.open_file(&path).unwrap();
    let mut gutter = GutterGradient::new(GradientConfig::default());
    gutter.activate(&mut model.host).unwrap();
    assert_eq!(model.tail_color(), None);

    std::fs::write(&path, lines(400)).unwrap();
    apply(&mut model, &gutter, Message::FileChanged(path));
    assert_eq!(model.host.document(id).unwrap().line_count(), 401);
    assert_eq!(model.tail_color(), Some(GradientConfig::default().end_color));
}

#[test]
fn test_file_changed_for_unknown_path_is_ignored() {
    let (mut model, gutter) = active_model(10);
    let calls = model.host.apply_calls();
    apply(
        &mut model,
        &gutter,
        Message::FileChanged(PathBuf::from("/nowhere/else.rs")),
    );
    assert_eq!(model.host.apply_calls(), calls);
    assert!(model.toast().is_none());
}

#[test]
fn test_force_reload_of_missing_file_shows_error() {
    let (mut model, gutter) = active_model(10);
    apply(&mut model, &gutter, Message::ForceReload);
    assert!(matches!(model.toast(), Some((ToastLevel::Error, _))));
}

#[test]
fn test_toast_expires() {
    let mut model = Model::new((80, 24));
    model.show_toast(ToastLevel::Info, "hello");
    assert!(!model.expire_toast(Instant::now()));
    assert!(model.expire_toast(Instant::now() + Duration::from_secs(10)));
    assert!(model.toast().is_none());
}

#[test]
fn test_keys_map_to_messages() {
    let model = Model::new((80, 24));
    assert_eq!(App::handle_event(&key(KeyCode::Char('q')), &model), Some(Message::Quit));
    assert_eq!(App::handle_event(&key(KeyCode::Tab), &model), Some(Message::NextDocument));
    assert_eq!(App::handle_event(&key(KeyCode::BackTab), &model), Some(Message::PrevDocument));
    assert_eq!(App::handle_event(&key(KeyCode::Char('o')), &model), Some(Message::InsertLine));
    assert_eq!(App::handle_event(&key(KeyCode::Char('D')), &model), Some(Message::DeleteLine));
    assert_eq!(App::handle_event(&key(KeyCode::Char('Z')), &model), None);
    assert_eq!(
        App::handle_event(&Event::Resize(120, 30), &model),
        Some(Message::Resize(120, 30))
    );
}

#[test]
fn test_any_key_closes_help() {
    let mut model = Model::new((80, 24));
    model.help_visible = true;
    assert_eq!(App::handle_event(&key(KeyCode::Char('j')), &model), Some(Message::HideHelp));
    assert_eq!(App::handle_event(&key(KeyCode::Char('q')), &model), Some(Message::Quit));
}

#[test]
fn test_no_redecoration_after_deactivate() {
    let (mut model, mut gutter) = active_model(200);
    gutter.deactivate(&mut model.host);
    let calls = model.host.apply_calls();

    apply(&mut model, &gutter, Message::InsertLine);
    assert_eq!(model.host.apply_calls(), calls);
    assert_eq!(model.host.live_style_count(), 0);
}
