//!
//! Table widget driven by a [TableModel].
//!
//! The state keeps the normalized data grid and one [RowForm] per
//! row. At most one cell is in edit mode and renders a
//! [CellEditor](crate::editor::CellEditor) instead of its value.
//! Edits go to the row forms and are copied back to the grid on
//! commit.
//!
//! Keys
//! * Enter - Start editing the focused cell, or commit.
//! * Esc - Commit. There is no cancel.
//! * Up/Down/Left/Right - Move the focused cell. Works while editing too.
//! * Insert - Append an empty row.
//! * Double-Click - Commit the current edit, if any, and edit the
//!   clicked cell.
//!
//! ```rust ignore
//! SchemaTable::new()
//!     .styles(THEME.schema_table_style())
//!     .block(Block::bordered())
//!     .render(area, frame.buffer_mut(), &mut state.table);
//! ```
//!
use crate::_private::NonExhaustive;
use crate::editor::{CellEditor, CellEditorState, EditorKind};
use crate::event::EditOutcome;
use crate::form::{build_forms, RowForm};
use crate::format;
use crate::grid::{offset_address, CellPos, ViewGrid};
use crate::model::TableModel;
use crate::util::{fallback_select_style, revert_style};
use crate::value::CellValue;
use crossterm::event::Event;
use log::{debug, warn};
use rat_event::util::{Clicks, MouseFlags};
use rat_event::{ct_event, flow, HandleEvent, MouseOnly, Outcome, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus, Navigation};
use rat_reloc::{relocate_area, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::BlockExt;
use ratatui::style::Style;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use std::cmp::{max, min};
use unicode_width::UnicodeWidthStr;

/// Table widget.
#[derive(Debug, Clone)]
pub struct SchemaTable<'a> {
    widths: Vec<Constraint>,
    column_spacing: u16,
    block: Option<Block<'a>>,

    style: Style,
    header_style: Option<Style>,
    focus_style: Option<Style>,
    select_style: Option<Style>,
    editor_style: Option<Style>,
    invalid_style: Option<Style>,
}

/// Composite style.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchemaTableStyle {
    /// Base style.
    pub style: Style,
    /// Header line.
    pub header: Option<Style>,
    /// Focused cell while the table has the focus.
    pub focus: Option<Style>,
    /// Focused cell while the table doesn't have the focus.
    pub select: Option<Style>,
    /// Cell editor.
    pub editor: Option<Style>,
    /// Cell editor with an invalid value.
    pub invalid: Option<Style>,
    /// Border
    #[cfg_attr(feature = "serde", serde(skip))]
    pub block: Option<Block<'static>>,
    /// Space between the columns.
    pub column_spacing: Option<u16>,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub non_exhaustive: NonExhaustive,
}

/// State.
#[derive(Debug)]
pub struct SchemaTableState {
    /// Total area.
    /// __read only__. renewed for each render.
    pub area: Rect,
    /// Area inside the block.
    /// __read only__. renewed for each render.
    pub inner: Rect,
    /// Header line.
    /// __read only__. renewed for each render.
    pub header_area: Rect,
    /// Area for the rows.
    /// __read only__. renewed for each render.
    pub table_area: Rect,
    /// Areas of all visible cells.
    /// __read only__. renewed for each render.
    pub cell_areas: Vec<(CellPos, Rect)>,
    /// First visible row.
    /// __read+write__ corrected with each render to show the focused cell.
    pub row_offset: usize,

    model: TableModel,
    grid: ViewGrid,
    forms: Vec<RowForm>,
    editing: Option<CellPos>,
    // 1-based cell address
    cursor: Option<usize>,

    /// Cell editor.
    /// __read+write__
    pub editor: CellEditorState,

    /// Current focus state.
    /// __read+write__
    pub focus: FocusFlag,
    /// Mouse helper.
    /// __read+write__
    pub mouse: MouseFlags,

    pub non_exhaustive: NonExhaustive,
}

impl Default for SchemaTableStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            header: Default::default(),
            focus: Default::default(),
            select: Default::default(),
            editor: Default::default(),
            invalid: Default::default(),
            block: Default::default(),
            column_spacing: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Default for SchemaTable<'_> {
    fn default() -> Self {
        Self {
            widths: Default::default(),
            column_spacing: 1,
            block: Default::default(),
            style: Default::default(),
            header_style: Default::default(),
            focus_style: Default::default(),
            select_style: Default::default(),
            editor_style: Default::default(),
            invalid_style: Default::default(),
        }
    }
}

impl<'a> SchemaTable<'a> {
    /// New.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all styles.
    pub fn styles(mut self, styles: SchemaTableStyle) -> Self {
        self.style = styles.style;
        if styles.header.is_some() {
            self.header_style = styles.header;
        }
        if styles.focus.is_some() {
            self.focus_style = styles.focus;
        }
        if styles.select.is_some() {
            self.select_style = styles.select;
        }
        if styles.editor.is_some() {
            self.editor_style = styles.editor;
        }
        if styles.invalid.is_some() {
            self.invalid_style = styles.invalid;
        }
        if let Some(block) = styles.block {
            self.block = Some(block);
        }
        if let Some(column_spacing) = styles.column_spacing {
            self.column_spacing = column_spacing;
        }
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Style for the header line.
    #[inline]
    pub fn header_style(mut self, style: impl Into<Style>) -> Self {
        self.header_style = Some(style.into());
        self
    }

    /// Style for the focused cell.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Style for the focused cell, when the table is not focused.
    #[inline]
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.select_style = Some(style.into());
        self
    }

    /// Style for the cell editor.
    #[inline]
    pub fn editor_style(mut self, style: impl Into<Style>) -> Self {
        self.editor_style = Some(style.into());
        self
    }

    /// Style for the cell editor with an invalid value.
    #[inline]
    pub fn invalid_style(mut self, style: impl Into<Style>) -> Self {
        self.invalid_style = Some(style.into());
        self
    }

    /// Block.
    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Column widths.
    ///
    /// If not set the widths are calculated from the labels and
    /// the displayed values.
    pub fn widths<I>(mut self, widths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        self.widths = widths.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Space between columns.
    #[inline]
    pub fn column_spacing(mut self, spacing: u16) -> Self {
        self.column_spacing = spacing;
        self
    }
}

impl<'a> StatefulWidget for &SchemaTable<'a> {
    type State = SchemaTableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for SchemaTable<'_> {
    type State = SchemaTableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(
    widget: &SchemaTable<'_>,
    area: Rect,
    buf: &mut Buffer,
    state: &mut SchemaTableState,
) {
    state.area = area;
    state.inner = widget.block.inner_if_some(area);

    let header_height = min(1, state.inner.height);
    state.header_area = Rect::new(
        state.inner.x,
        state.inner.y,
        state.inner.width,
        header_height,
    );
    state.table_area = Rect::new(
        state.inner.x,
        state.inner.y + header_height,
        state.inner.width,
        state.inner.height - header_height,
    );

    buf.set_style(area, widget.style);
    if let Some(block) = &widget.block {
        block.render(area, buf);
    }

    let widths = if widget.widths.is_empty() {
        auto_widths(state)
    } else {
        widget.widths.clone()
    };
    let columns = Layout::horizontal(widths)
        .flex(Flex::Start)
        .spacing(widget.column_spacing)
        .split(state.inner);

    if !state.header_area.is_empty() {
        let header_style = if let Some(header_style) = widget.header_style {
            widget.style.patch(header_style)
        } else {
            widget.style
        };
        for (column, col_area) in state.model.columns().iter().zip(columns.iter()) {
            buf.set_stringn(
                col_area.x,
                state.header_area.y,
                &column.label,
                col_area.width as usize,
                header_style,
            );
        }
    }

    // keep the focused cell visible
    let page_len = state.table_area.height as usize;
    let cursor = state.focused_cell();
    if let Some(pos) = cursor {
        if pos.row < state.row_offset {
            state.row_offset = pos.row;
        } else if page_len > 0 && pos.row >= state.row_offset + page_len {
            state.row_offset = pos.row + 1 - page_len;
        }
    }
    state.row_offset = min(state.row_offset, state.grid.rows().saturating_sub(1));

    let focus_style = if let Some(focus_style) = widget.focus_style {
        widget.style.patch(focus_style)
    } else {
        revert_style(widget.style)
    };
    let select_style = if let Some(select_style) = widget.select_style {
        widget.style.patch(select_style)
    } else {
        fallback_select_style(widget.style)
    };
    let editor_style = if let Some(editor_style) = widget.editor_style {
        widget.style.patch(editor_style)
    } else {
        fallback_select_style(widget.style)
    };
    let focused = state.is_focused();

    state.cell_areas.clear();
    let mut editor_area = None;
    for (idx, row) in (state.row_offset..state.grid.rows())
        .take(page_len)
        .enumerate()
    {
        let y = state.table_area.y + idx as u16;
        for (col, col_area) in columns.iter().enumerate().take(state.grid.columns()) {
            let pos = CellPos::new(row, col);
            let cell_area = Rect::new(col_area.x, y, col_area.width, 1);
            state.cell_areas.push((pos, cell_area));

            if state.editing == Some(pos) {
                editor_area = Some(cell_area);
                continue;
            }

            let style = if cursor == Some(pos) {
                if focused {
                    focus_style
                } else {
                    select_style
                }
            } else {
                widget.style
            };
            let text = state.view_value(pos).unwrap_or_default();
            buf.set_style(cell_area, style);
            buf.set_stringn(
                cell_area.x,
                cell_area.y,
                text,
                cell_area.width as usize,
                style,
            );
        }
    }

    match (state.editing, editor_area) {
        (Some(pos), Some(editor_area)) => {
            state.sync_editor_focus();
            let invalid = state
                .form(pos.row)
                .and_then(|v| v.field(pos.col))
                .map(|v| !v.is_valid())
                .unwrap_or_default();

            let mut editor = CellEditor::new().style(editor_style).invalid(invalid);
            if let Some(focus_style) = widget.focus_style {
                editor = editor.focus_style(focus_style);
            }
            if let Some(invalid_style) = widget.invalid_style {
                editor = editor.invalid_style(invalid_style);
            }
            editor.render(editor_area, buf, &mut state.editor);
        }
        _ => {
            // editor is out of view
            state.editor.area = Rect::default();
        }
    }
}

// Widest of label and displayed values.
fn auto_widths(state: &SchemaTableState) -> Vec<Constraint> {
    state
        .model
        .columns()
        .iter()
        .enumerate()
        .map(|(col, column)| {
            let mut width = column.label.width();
            for row in 0..state.grid.rows() {
                if let Some(text) = state.view_value(CellPos::new(row, col)) {
                    width = max(width, text.width());
                }
            }
            Constraint::Length(max(width, 1) as u16)
        })
        .collect()
}

impl Default for SchemaTableState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            inner: Default::default(),
            header_area: Default::default(),
            table_area: Default::default(),
            cell_areas: Default::default(),
            row_offset: Default::default(),
            model: Default::default(),
            grid: Default::default(),
            forms: Default::default(),
            editing: Default::default(),
            cursor: Default::default(),
            editor: Default::default(),
            focus: Default::default(),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl HasFocus for SchemaTableState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }

    fn navigable(&self) -> Navigation {
        if self.is_editing() {
            Navigation::Lock
        } else {
            Navigation::Regular
        }
    }
}

impl RelocatableState for SchemaTableState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.inner = relocate_area(self.inner, shift, clip);
        self.header_area = relocate_area(self.header_area, shift, clip);
        self.table_area = relocate_area(self.table_area, shift, clip);
        for (_, cell_area) in self.cell_areas.iter_mut() {
            *cell_area = relocate_area(*cell_area, shift, clip);
        }
        self.editor.relocate(shift, clip);
    }
}

impl SchemaTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::new().with_name(name),
            ..Default::default()
        }
    }

    /// Set model and data.
    ///
    /// The rows are normalized to the column count and the
    /// row forms are built anew. Any edit is dropped.
    pub fn set_data<I, R>(&mut self, model: TableModel, rows: I)
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = CellValue>,
    {
        self.model = model;
        self.set_rows(rows);
    }

    /// Set the data for the current model.
    pub fn set_rows<I, R>(&mut self, rows: I)
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = CellValue>,
    {
        self.grid = ViewGrid::from_raw(self.model.len(), rows);
        self.forms = build_forms(&self.model, &self.grid);
        self.editing = None;
        self.editor.focus.set(false);
        if self.cursor.is_some_and(|v| v > self.grid.cells()) {
            self.cursor = None;
        }
        self.row_offset = 0;
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.set_rows(Vec::<Vec<CellValue>>::new());
        self.cursor = None;
    }

    /// Column schema.
    pub fn model(&self) -> &TableModel {
        &self.model
    }

    /// Displayed data.
    pub fn grid(&self) -> &ViewGrid {
        &self.grid
    }

    /// Copy of the displayed data.
    ///
    /// Pending edits are not included, they are only
    /// written back on commit.
    pub fn value(&self) -> Vec<Vec<CellValue>> {
        self.grid.to_vec()
    }

    /// All row forms.
    pub fn forms(&self) -> &[RowForm] {
        &self.forms
    }

    /// Form for one row.
    pub fn form(&self, row: usize) -> Option<&RowForm> {
        self.forms.get(row)
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Column count.
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        self.grid.cells()
    }

    /// Display text for a cell.
    pub fn view_value(&self, pos: CellPos) -> Option<String> {
        let column = self.model.column(pos.col)?;
        let value = self.grid.get(pos)?;
        Some(format::view_value(value, column))
    }

    /// Is a cell in edit mode.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Cell in edit mode.
    pub fn editing_position(&self) -> Option<CellPos> {
        self.editing
    }

    /// Address of the focused cell. 1-based, row-major.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Focus the cell with the given address.
    ///
    /// Returns false if there is no such cell.
    pub fn set_cursor(&mut self, address: usize) -> bool {
        if (1..=self.grid.cells()).contains(&address) {
            self.cursor = Some(address);
            true
        } else {
            false
        }
    }

    /// Focus the cell.
    ///
    /// Returns false if there is no such cell.
    pub fn focus_cell(&mut self, pos: CellPos) -> bool {
        if pos.row < self.grid.rows() && pos.col < self.grid.columns() {
            self.set_cursor(pos.address(self.grid.columns()))
        } else {
            false
        }
    }

    /// Position of the focused cell.
    pub fn focused_cell(&self) -> Option<CellPos> {
        CellPos::from_address(
            self.cursor.unwrap_or_default(),
            self.grid.cells(),
            self.grid.rows(),
        )
    }

    /// Move the focus by the given number of cells.
    ///
    /// Without a focused cell this starts at address 0.
    /// Does nothing if the target is not a cell.
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        match offset_address(self.cursor.unwrap_or_default(), delta, self.grid.cells()) {
            Some(address) => {
                self.cursor = Some(address);
                true
            }
            None => {
                debug!("no cell {:?}{:+}", self.cursor, delta);
                false
            }
        }
    }

    /// Focus the cell above.
    pub fn move_up(&mut self) -> bool {
        self.move_cursor(-(self.grid.columns() as isize))
    }

    /// Focus the cell below.
    pub fn move_down(&mut self) -> bool {
        self.move_cursor(self.grid.columns() as isize)
    }

    /// Focus the previous cell.
    pub fn move_left(&mut self) -> bool {
        self.move_cursor(-1)
    }

    /// Focus the next cell.
    pub fn move_right(&mut self) -> bool {
        self.move_cursor(1)
    }

    /// Cell at the given screen position.
    pub fn cell_at(&self, pos: (u16, u16)) -> Option<CellPos> {
        self.cell_areas
            .iter()
            .find(|(_, area)| area.contains(pos.into()))
            .map(|(cell, _)| *cell)
    }

    /// Edit the focused cell.
    ///
    /// A running edit is committed first. Returns false if
    /// there is no focused cell.
    pub fn start_editing(&mut self) -> bool {
        if self.editing.is_some() {
            self.stop_editing();
        }
        let Some(pos) = self.focused_cell() else {
            debug!("no focused cell to edit");
            return false;
        };
        debug!("edit {:?}", pos);
        self.editing = Some(pos);
        self.seed_editor();
        true
    }

    /// Commit.
    ///
    /// Every row of the grid is replaced with the values of
    /// its row form. Invalid values are taken as they are.
    pub fn stop_editing(&mut self) {
        if self.forms.len() != self.grid.rows() {
            warn!(
                "{} row forms for {} rows",
                self.forms.len(),
                self.grid.rows()
            );
        }
        let rows = self.forms.iter().map(|v| v.values()).collect();
        self.grid.replace_rows(rows);
        self.editing = None;
        self.editor.focus.set(false);
        debug!("commit");
    }

    /// Append an empty row.
    ///
    /// All row forms are built anew from the grid, which discards
    /// edits not yet committed.
    pub fn add_row(&mut self) {
        self.grid.push_empty_row();
        self.forms = build_forms(&self.model, &self.grid);
        self.seed_editor();
        debug!("add row {}", self.grid.rows());
    }

    /// Screen position of the text cursor while editing.
    pub fn screen_cursor(&self) -> Option<(u16, u16)> {
        if self.is_focused() && self.editor_active() {
            self.editor.screen_cursor()
        } else {
            None
        }
    }

    // The focused cell is the one in edit mode.
    fn editor_active(&self) -> bool {
        self.editing.is_some() && self.editing == self.focused_cell()
    }

    fn sync_editor_focus(&self) {
        self.editor
            .focus
            .set(self.is_focused() && self.editor_active());
    }

    fn seed_editor(&mut self) {
        let Some(pos) = self.editing else {
            return;
        };
        let Some(column) = self.model.column(pos.col) else {
            warn!("no column {}", pos.col);
            return;
        };
        let value = self
            .forms
            .get(pos.row)
            .and_then(|v| v.field(pos.col))
            .map(|v| v.value().clone())
            .unwrap_or_default();
        self.editor.set_value(EditorKind::for_column(column), value);
        self.editor.area = Rect::default();
    }

    fn sync_editor_value(&mut self) {
        let Some(pos) = self.editing else {
            return;
        };
        let value = self.editor.value();
        match self.forms.get_mut(pos.row) {
            Some(form) => {
                form.set_value(pos.col, value);
            }
            None => {
                warn!("no row form for row {}", pos.row);
            }
        }
    }
}

fn moved(moved: bool) -> EditOutcome {
    if moved {
        EditOutcome::Changed
    } else {
        EditOutcome::Unchanged
    }
}

impl HandleEvent<Event, Regular, EditOutcome> for SchemaTableState {
    fn handle(&mut self, event: &Event, _qualifier: Regular) -> EditOutcome {
        flow!(HandleEvent::handle(self, event, MouseOnly));

        if self.is_focused() {
            self.sync_editor_focus();
            if self.editor_active() {
                flow!(match HandleEvent::handle(&mut self.editor, event, Regular) {
                    Outcome::Changed => {
                        self.sync_editor_value();
                        EditOutcome::Changed
                    }
                    r => EditOutcome::from(r),
                });
            }

            flow!(match event {
                ct_event!(keycode press Enter) => {
                    if self.is_editing() {
                        self.stop_editing();
                        EditOutcome::Commit
                    } else if self.start_editing() {
                        EditOutcome::Edit
                    } else {
                        EditOutcome::Unchanged
                    }
                }
                ct_event!(keycode press Esc) => {
                    if self.is_editing() {
                        self.stop_editing();
                        EditOutcome::Commit
                    } else {
                        EditOutcome::Continue
                    }
                }
                ct_event!(keycode press Up) => moved(self.move_up()),
                ct_event!(keycode press Down) => moved(self.move_down()),
                ct_event!(keycode press Left) => moved(self.move_left()),
                ct_event!(keycode press Right) => moved(self.move_right()),
                ct_event!(keycode press Insert) => {
                    self.add_row();
                    EditOutcome::Append
                }
                _ => EditOutcome::Continue,
            });
        }

        EditOutcome::Continue
    }
}

impl HandleEvent<Event, MouseOnly, EditOutcome> for SchemaTableState {
    fn handle(&mut self, event: &Event, _qualifier: MouseOnly) -> EditOutcome {
        flow!(match event {
            ct_event!(mouse any for m) if self.mouse.doubleclick(self.area, m) => {
                if let Some(pos) = self.cell_at((m.column, m.row)) {
                    self.focus_cell(pos);
                }
                if self.start_editing() {
                    EditOutcome::Edit
                } else {
                    EditOutcome::Unchanged
                }
            }
            _ => EditOutcome::Continue,
        });

        // the second press of a double-click is not for the editor
        let second_click = matches!(self.mouse.click.get(), Clicks::Down2(_));
        if let (Some(pos), false) = (self.editing, second_click) {
            flow!(match HandleEvent::handle(&mut self.editor, event, MouseOnly) {
                Outcome::Changed => {
                    self.focus_cell(pos);
                    self.sync_editor_value();
                    EditOutcome::Changed
                }
                r => EditOutcome::from(r),
            });
        }

        flow!(match event {
            ct_event!(mouse down Left for x, y) => match self.cell_at((*x, *y)) {
                Some(pos) => {
                    self.focus_cell(pos);
                    EditOutcome::Changed
                }
                None => EditOutcome::Continue,
            },
            _ => EditOutcome::Continue,
        });

        EditOutcome::Continue
    }
}

/// Handle all events.
/// Key events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(state: &mut SchemaTableState, focus: bool, event: &Event) -> EditOutcome {
    state.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(state: &mut SchemaTableState, event: &Event) -> EditOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}
