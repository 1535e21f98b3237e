use crate::mini_salsa::{run_ui, setup_logging, MiniSalsaState};
use rat_schema_table::event::{EditOutcome, HandleEvent, Outcome, Regular};
use rat_schema_table::focus::FocusBuilder;
use rat_schema_table::{CellValue, SchemaTable, SchemaTableState, SchemaTableStyle, TableModel};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, StatefulWidget, Widget};
use std::fs;

mod mini_salsa;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let model: TableModel =
        serde_json::from_str(&fs::read_to_string("demos/data/model.json")?)?;
    let rows: Vec<Vec<CellValue>> =
        serde_json::from_str(&fs::read_to_string("demos/data/rows.json")?)?;

    let mut state = State {
        table: SchemaTableState::named("table"),
    };
    state.table.set_data(model, rows);

    run_ui("schema_table1", init, event, render, &mut state)
}

struct State {
    table: SchemaTableState,
}

fn init(_ctx: &mut MiniSalsaState, state: &mut State) -> Result<(), anyhow::Error> {
    state.table.focus.set(true);
    state.table.set_cursor(1);
    Ok(())
}

fn table_style() -> SchemaTableStyle {
    SchemaTableStyle {
        style: Style::new().white().on_black(),
        header: Some(Style::new().bold().on_dark_gray()),
        focus: Some(Style::new().black().on_cyan()),
        select: Some(Style::new().black().on_gray()),
        editor: Some(Style::new().black().on_light_yellow()),
        invalid: Some(Style::new().white().on_red()),
        block: Some(Block::bordered().border_type(BorderType::Rounded)),
        ..Default::default()
    }
}

fn render(
    buf: &mut Buffer,
    area: Rect,
    ctx: &mut MiniSalsaState,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    let l1 = Layout::vertical([
        Constraint::Fill(1), //
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    SchemaTable::new()
        .styles(table_style())
        .render(l1[0], buf, &mut state.table);
    ctx.cursor = state.table.screen_cursor();

    let info = match state.table.editing_position() {
        Some(pos) => format!("editing {}:{}", pos.row, pos.col),
        None => "Enter edit | Esc commit | Insert add row".to_string(),
    };
    Line::from(info).render(l1[1], buf);

    let errors = state
        .table
        .forms()
        .iter()
        .enumerate()
        .flat_map(|(row, form)| {
            form.errors()
                .into_iter()
                .map(move |(key, err)| format!("{}.{}: {}", row, key, err))
        })
        .collect::<Vec<_>>();
    Line::from(errors.join(" | "))
        .style(Style::new().light_red())
        .render(l1[2], buf);

    Ok(())
}

fn event(
    event: &crossterm::event::Event,
    ctx: &mut MiniSalsaState,
    state: &mut State,
) -> Result<Outcome, anyhow::Error> {
    let mut fb = FocusBuilder::new(None);
    fb.widget(&state.table);
    let mut focus = fb.build();
    ctx.focus_outcome = focus.handle(event, Regular);

    let r = match state.table.handle(event, Regular) {
        EditOutcome::Commit => {
            ctx.status[0] = format!("commit {} rows", state.table.rows());
            Outcome::Changed
        }
        EditOutcome::Append => {
            ctx.status[0] = format!("{} rows", state.table.rows());
            Outcome::Changed
        }
        r => r.into(),
    };

    Ok(r)
}
