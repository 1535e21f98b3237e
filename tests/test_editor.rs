use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rat_schema_table::editor::{handle_events, CellEditor, CellEditorState, EditorKind};
use rat_schema_table::event::Outcome;
use rat_schema_table::{CellValue, SelectOption};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Cat", "cat"),
        SelectOption::new("Mouse", "mouse"),
        SelectOption::new("Plumbus", "plumbus"),
    ]
}

#[test]
fn test_text() {
    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Text, CellValue::from("añb"));
    assert_eq!(state.cursor(), 3);

    assert!(state.delete_prev_char());
    assert_eq!(state.text(), "añ");
    assert!(state.move_to_line_start());
    assert!(state.insert_char('x'));
    assert_eq!(state.text(), "xañ");
    assert_eq!(state.cursor(), 1);
    assert!(state.delete_next_char());
    assert_eq!(state.value(), CellValue::from("xñ"));

    assert!(!state.flip_checked());
    assert!(!state.select_next());
    assert!(!state.clear_value());
}

#[test]
fn test_text_from_number() {
    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Text, CellValue::from(42));
    assert_eq!(state.text(), "42");
    // untouched values keep their type
    assert_eq!(state.value(), CellValue::from(42));
    state.insert_char('!');
    assert_eq!(state.value(), CellValue::from("42!"));
}

#[test]
fn test_digit() {
    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Digit, CellValue::Null);
    assert_eq!(state.text(), "");

    assert!(!state.insert_char('a'));
    assert!(state.insert_char('-'));
    assert_eq!(state.value(), CellValue::Null);
    assert!(state.insert_char('1'));
    assert!(state.insert_char('.'));
    assert!(state.insert_char('5'));
    assert_eq!(state.value(), CellValue::Number(-1.5));
}

#[test]
fn test_checkbox() {
    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Checkbox, CellValue::Null);
    assert!(state.flip_checked());
    assert_eq!(state.value(), CellValue::from(true));
    assert!(state.flip_checked());
    assert_eq!(state.value(), CellValue::from(false));
    assert!(state.clear_value());
    assert_eq!(state.value(), CellValue::Null);
    assert!(!state.clear_value());
    assert!(!state.insert_char('x'));
}

#[test]
fn test_select() {
    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Select(options()), CellValue::from("unknown"));
    assert_eq!(state.selected(), None);

    assert!(state.select_next());
    assert_eq!(state.value(), CellValue::from("cat"));
    assert!(state.select_prev());
    assert_eq!(state.value(), CellValue::from("plumbus"));
    assert!(state.select_next());
    assert_eq!(state.selected(), Some(0));

    state.set_value(EditorKind::Select(Vec::new()), CellValue::Null);
    assert!(!state.select_next());
}

#[test]
fn test_events() {
    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Select(options()), CellValue::from("cat"));

    assert_eq!(
        handle_events(&mut state, false, &key(KeyCode::Char(' '))),
        Outcome::Continue
    );
    assert_eq!(
        handle_events(&mut state, true, &key(KeyCode::Char(' '))),
        Outcome::Changed
    );
    assert_eq!(state.value(), CellValue::from("mouse"));
    assert_eq!(
        handle_events(&mut state, true, &key(KeyCode::PageUp)),
        Outcome::Changed
    );
    assert_eq!(state.value(), CellValue::from("cat"));
    assert_eq!(
        handle_events(&mut state, true, &key(KeyCode::Char('x'))),
        Outcome::Continue
    );
    assert_eq!(
        handle_events(&mut state, true, &key(KeyCode::Delete)),
        Outcome::Changed
    );
    assert_eq!(state.value(), CellValue::Null);
    // arrows belong to the table
    assert_eq!(
        handle_events(&mut state, true, &key(KeyCode::Left)),
        Outcome::Continue
    );
}

#[test]
fn test_render() {
    let area = Rect::new(0, 0, 10, 1);
    let mut buf = Buffer::empty(area);

    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Select(options()), CellValue::from("mouse"));
    CellEditor::new().render(area, &mut buf, &mut state);
    assert_eq!(state.area, area);
    assert_eq!(buf[(0, 0)].symbol(), "M");
    assert_eq!(buf[(9, 0)].symbol(), "▾");

    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Text, CellValue::from("0123456789abc"));
    state.focus.set(true);
    CellEditor::new().render(area, &mut buf, &mut state);
    assert_eq!(state.offset, 4);
    assert_eq!(buf[(0, 0)].symbol(), "4");
    assert_eq!(state.screen_cursor(), Some((9, 0)));
}

#[test]
fn test_combining_char() {
    let mut state = CellEditorState::new();
    state.set_value(EditorKind::Text, CellValue::from("ab"));
    state.set_cursor(1);

    assert!(state.insert_char('\u{301}'));
    assert_eq!(state.text(), "a\u{301}b");
    assert_eq!(state.cursor(), 1);

    assert!(state.insert_char('x'));
    assert_eq!(state.text(), "a\u{301}xb");
    assert_eq!(state.cursor(), 2);
}
