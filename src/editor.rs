//!
//! Editor for a single table cell.
//!
//! The kind of editor follows the column type.
//!
//! * Checkbox: Space or a click flips the value, Backspace/Delete reset
//!   it to Null.
//! * Text: character input, Backspace/Delete, Home/End.
//! * Digit: like Text but only accepts `0-9 + - . e E`. The value is
//!   the parsed number, or Null if the input doesn't parse.
//! * Select: Space/PageDown/`+` next option, PageUp/`-` previous option,
//!   Backspace/Delete reset to Null.
//!
//! The arrow keys are left alone, they belong to the table.
//!
use crate::_private::NonExhaustive;
use crate::format::{check_glyph, UNKNOWN};
use crate::model::{ColumnDef, ColumnType, SelectOption};
use crate::util::reset_buf_area;
use crate::value::CellValue;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rat_event::{ct_event, HandleEvent, MouseOnly, Outcome, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::{relocate_area, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::widgets::StatefulWidget;
use std::cmp::min;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Marker for the select editor.
const SELECT_MARKER: &str = "▾";

/// Kind of editor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum EditorKind {
    Checkbox,
    #[default]
    Text,
    Digit,
    Select(Vec<SelectOption>),
}

/// Renders the editor into one cell.
#[derive(Debug, Default, Clone)]
pub struct CellEditor {
    style: Style,
    focus_style: Option<Style>,
    invalid_style: Option<Style>,
    invalid: bool,
}

/// Editor state.
#[derive(Debug)]
pub struct CellEditorState {
    /// Cell area.
    /// __read only__. renewed for each render.
    pub area: Rect,
    /// First visible grapheme for text input.
    /// __read only__. renewed for each render.
    pub offset: usize,

    kind: EditorKind,
    value: CellValue,
    buffer: String,
    // grapheme index
    cursor: usize,

    /// Current focus state.
    /// __read+write__
    pub focus: FocusFlag,

    pub non_exhaustive: NonExhaustive,
}

impl EditorKind {
    /// Editor for the column type.
    pub fn for_column(column: &ColumnDef) -> Self {
        match column.column_type {
            ColumnType::Checkbox => EditorKind::Checkbox,
            ColumnType::Text => EditorKind::Text,
            ColumnType::Digit => EditorKind::Digit,
            ColumnType::Select => EditorKind::Select(column.options.clone()),
        }
    }

    /// Text input kinds.
    pub fn is_text(&self) -> bool {
        matches!(self, EditorKind::Text | EditorKind::Digit)
    }
}

impl CellEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }

    /// Style when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Style for an invalid value.
    #[inline]
    pub fn invalid_style(mut self, style: impl Into<Style>) -> Self {
        self.invalid_style = Some(style.into());
        self
    }

    /// Current value is invalid.
    #[inline]
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl StatefulWidget for &CellEditor {
    type State = CellEditorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for CellEditor {
    type State = CellEditorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &CellEditor, area: Rect, buf: &mut Buffer, state: &mut CellEditorState) {
    state.area = area;

    let mut style = widget.style;
    if state.is_focused() {
        if let Some(focus_style) = widget.focus_style {
            style = style.patch(focus_style);
        }
    }
    if widget.invalid {
        style = style.patch(widget.invalid_style.unwrap_or(Style::new().red()));
    }

    reset_buf_area(area, buf);
    buf.set_style(area, style);

    match state.kind {
        EditorKind::Checkbox => {
            buf.set_stringn(
                area.x,
                area.y,
                check_glyph(&state.value),
                area.width as usize,
                style,
            );
        }
        EditorKind::Select(_) => {
            let text = state.select_text();
            buf.set_stringn(
                area.x,
                area.y,
                text,
                area.width.saturating_sub(2) as usize,
                style,
            );
            if area.width >= 2 {
                buf.set_stringn(area.right() - 1, area.y, SELECT_MARKER, 1, style);
            }
        }
        EditorKind::Text | EditorKind::Digit => {
            state.scroll_to_cursor(area.width);
            let visible = state
                .buffer
                .graphemes(true)
                .skip(state.offset)
                .collect::<String>();
            buf.set_stringn(area.x, area.y, visible, area.width as usize, style);
        }
    }
}

impl Default for CellEditorState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            offset: Default::default(),
            kind: Default::default(),
            value: Default::default(),
            buffer: Default::default(),
            cursor: Default::default(),
            focus: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl HasFocus for CellEditorState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for CellEditorState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
    }
}

impl CellEditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::new().with_name(name),
            ..Default::default()
        }
    }

    /// Start with a new value.
    pub fn set_value(&mut self, kind: EditorKind, value: CellValue) {
        self.buffer = if kind.is_text() {
            value.as_string().unwrap_or_default()
        } else {
            String::new()
        };
        self.cursor = self.buffer.graphemes(true).count();
        self.offset = 0;
        self.kind = kind;
        self.value = value;
    }

    /// Current value.
    pub fn value(&self) -> CellValue {
        self.value.clone()
    }

    /// Editor kind.
    pub fn kind(&self) -> &EditorKind {
        &self.kind
    }

    /// Text of a text input.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Text cursor as grapheme index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set the text cursor.
    pub fn set_cursor(&mut self, cursor: usize) -> bool {
        let old_cursor = self.cursor;
        self.cursor = min(cursor, self.buffer.graphemes(true).count());
        old_cursor != self.cursor
    }

    /// Text cursor to the start.
    pub fn move_to_line_start(&mut self) -> bool {
        self.set_cursor(0)
    }

    /// Text cursor to the end.
    pub fn move_to_line_end(&mut self) -> bool {
        self.set_cursor(usize::MAX)
    }

    /// Insert a char at the text cursor.
    ///
    /// Digit inputs only take the chars of a number.
    pub fn insert_char(&mut self, c: char) -> bool {
        match self.kind {
            EditorKind::Text => {}
            EditorKind::Digit => {
                if !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E') {
                    return false;
                }
            }
            _ => return false,
        }
        let pos = self.byte_pos(self.cursor);
        self.buffer.insert(pos, c);
        // combining chars join the previous grapheme
        self.cursor = self.buffer[..pos + c.len_utf8()].graphemes(true).count();
        self.buffer_changed();
        true
    }

    /// Remove the grapheme before the cursor.
    pub fn delete_prev_char(&mut self) -> bool {
        if !self.kind.is_text() || self.cursor == 0 {
            return false;
        }
        let start = self.byte_pos(self.cursor - 1);
        let end = self.byte_pos(self.cursor);
        self.buffer.replace_range(start..end, "");
        self.cursor -= 1;
        self.buffer_changed();
        true
    }

    /// Remove the grapheme after the cursor.
    pub fn delete_next_char(&mut self) -> bool {
        if !self.kind.is_text() || self.cursor >= self.buffer.graphemes(true).count() {
            return false;
        }
        let start = self.byte_pos(self.cursor);
        let end = self.byte_pos(self.cursor + 1);
        self.buffer.replace_range(start..end, "");
        self.buffer_changed();
        true
    }

    /// Flip a checkbox. Anything but true becomes true.
    pub fn flip_checked(&mut self) -> bool {
        if self.kind != EditorKind::Checkbox {
            return false;
        }
        self.value = CellValue::Bool(!matches!(self.value, CellValue::Bool(true)));
        true
    }

    /// Index of the current option.
    pub fn selected(&self) -> Option<usize> {
        match (&self.kind, &self.value) {
            (EditorKind::Select(options), CellValue::Text(v)) => {
                options.iter().position(|o| o.value == *v)
            }
            _ => None,
        }
    }

    /// Select the next option. Wraps around.
    pub fn select_next(&mut self) -> bool {
        let EditorKind::Select(options) = &self.kind else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        let idx = match self.selected() {
            Some(idx) => (idx + 1) % options.len(),
            None => 0,
        };
        self.value = CellValue::Text(options[idx].value.clone());
        true
    }

    /// Select the previous option. Wraps around.
    pub fn select_prev(&mut self) -> bool {
        let EditorKind::Select(options) = &self.kind else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        let idx = match self.selected() {
            Some(0) | None => options.len() - 1,
            Some(idx) => idx - 1,
        };
        self.value = CellValue::Text(options[idx].value.clone());
        true
    }

    /// Reset a checkbox or select to Null.
    pub fn clear_value(&mut self) -> bool {
        if self.kind.is_text() || self.value.is_null() {
            return false;
        }
        self.value = CellValue::Null;
        true
    }

    /// Screen position of the text cursor, if the editor
    /// has the focus.
    pub fn screen_cursor(&self) -> Option<(u16, u16)> {
        if self.is_focused() && self.kind.is_text() && !self.area.is_empty() {
            let width = self
                .buffer
                .graphemes(true)
                .skip(self.offset)
                .take(self.cursor.saturating_sub(self.offset))
                .map(|v| v.width())
                .sum::<usize>();
            let width = min(width, self.area.width.saturating_sub(1) as usize) as u16;
            Some((self.area.x + width, self.area.y))
        } else {
            None
        }
    }

    fn select_text(&self) -> String {
        if let EditorKind::Select(options) = &self.kind {
            if let Some(idx) = self.selected() {
                return options[idx].label.clone();
            }
        }
        match self.value.as_string() {
            Some(v) => format!("{} {}", v, UNKNOWN),
            None => String::new(),
        }
    }

    fn byte_pos(&self, grapheme: usize) -> usize {
        self.buffer
            .grapheme_indices(true)
            .nth(grapheme)
            .map(|(idx, _)| idx)
            .unwrap_or(self.buffer.len())
    }

    fn buffer_changed(&mut self) {
        self.value = match self.kind {
            EditorKind::Digit => match self.buffer.trim().parse::<f64>() {
                Ok(v) => CellValue::Number(v),
                Err(_) => CellValue::Null,
            },
            _ => CellValue::Text(self.buffer.clone()),
        };
    }

    // Keeps the cursor inside the visible part.
    fn scroll_to_cursor(&mut self, width: u16) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        let widths = self
            .buffer
            .graphemes(true)
            .map(|v| v.width())
            .collect::<Vec<_>>();
        while self.offset < self.cursor
            && widths[self.offset..self.cursor].iter().sum::<usize>() >= width as usize
        {
            self.offset += 1;
        }
    }

    // Grapheme index for a screen column.
    fn grapheme_at(&self, x: u16) -> usize {
        let mut pos = self.area.x;
        let mut idx = self.offset;
        for g in self.buffer.graphemes(true).skip(self.offset) {
            let w = g.width() as u16;
            if x < pos + w {
                break;
            }
            pos += w;
            idx += 1;
        }
        idx
    }
}

fn changed(changed: bool) -> Outcome {
    if changed {
        Outcome::Changed
    } else {
        Outcome::Unchanged
    }
}

impl HandleEvent<Event, Regular, Outcome> for CellEditorState {
    fn handle(&mut self, event: &Event, _qualifier: Regular) -> Outcome {
        let r = if self.is_focused() {
            match event {
                ct_event!(keycode press Backspace) => {
                    if self.kind.is_text() {
                        changed(self.delete_prev_char())
                    } else {
                        changed(self.clear_value())
                    }
                }
                ct_event!(keycode press Delete) => {
                    if self.kind.is_text() {
                        changed(self.delete_next_char())
                    } else {
                        changed(self.clear_value())
                    }
                }
                ct_event!(keycode press Home) if self.kind.is_text() => {
                    changed(self.move_to_line_start())
                }
                ct_event!(keycode press End) if self.kind.is_text() => {
                    changed(self.move_to_line_end())
                }
                ct_event!(keycode press PageDown) => changed(self.select_next()),
                ct_event!(keycode press PageUp) => changed(self.select_prev()),
                Event::Key(KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                    kind: KeyEventKind::Press | KeyEventKind::Repeat,
                    ..
                }) => self.handle_char(*c),
                _ => Outcome::Continue,
            }
        } else {
            Outcome::Continue
        };

        if r == Outcome::Continue {
            HandleEvent::handle(self, event, MouseOnly)
        } else {
            r
        }
    }
}

impl CellEditorState {
    fn handle_char(&mut self, c: char) -> Outcome {
        match self.kind {
            EditorKind::Checkbox if c == ' ' => changed(self.flip_checked()),
            EditorKind::Select(_) if c == ' ' || c == '+' => changed(self.select_next()),
            EditorKind::Select(_) if c == '-' => changed(self.select_prev()),
            // digit swallows what it doesn't take
            EditorKind::Text | EditorKind::Digit => changed(self.insert_char(c)),
            _ => Outcome::Continue,
        }
    }
}

impl HandleEvent<Event, MouseOnly, Outcome> for CellEditorState {
    fn handle(&mut self, event: &Event, _qualifier: MouseOnly) -> Outcome {
        match event {
            ct_event!(mouse down Left for x, y) if self.area.contains((*x, *y).into()) => {
                match self.kind {
                    EditorKind::Checkbox => changed(self.flip_checked()),
                    EditorKind::Select(_) => changed(self.select_next()),
                    EditorKind::Text | EditorKind::Digit => {
                        let pos = self.grapheme_at(*x);
                        self.set_cursor(pos);
                        // the click is used either way
                        Outcome::Changed
                    }
                }
            }
            _ => Outcome::Continue,
        }
    }
}

/// Handle all events.
/// Key events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(state: &mut CellEditorState, focus: bool, event: &Event) -> Outcome {
    state.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(state: &mut CellEditorState, event: &Event) -> Outcome {
    HandleEvent::handle(state, event, MouseOnly)
}
