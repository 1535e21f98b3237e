#![allow(unreachable_pub)]
#![allow(dead_code)]

use anyhow::anyhow;
use crossterm::cursor::{DisableBlinking, EnableBlinking, SetCursorStyle};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::error;
use rat_schema_table::event::Outcome;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::cmp::max;
use std::fs;
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use unicode_segmentation::UnicodeSegmentation;

pub struct MiniSalsaState {
    pub name: String,
    pub frame: usize,
    pub event_cnt: usize,

    pub last_render: Duration,
    pub last_event: Duration,

    pub status: [String; 3],
    pub focus_outcome: Outcome,

    pub cursor: Option<(u16, u16)>,

    pub quit: bool,
}

impl MiniSalsaState {
    fn new(name: &str) -> Self {
        let mut s = Self {
            name: name.to_string(),
            frame: Default::default(),
            event_cnt: Default::default(),
            last_render: Default::default(),
            last_event: Default::default(),
            status: Default::default(),
            focus_outcome: Outcome::Continue,
            cursor: Default::default(),
            quit: Default::default(),
        };
        s.status[0] = "Ctrl-Q to quit.".into();
        s
    }
}

pub fn run_ui<State>(
    name: &str,
    init: fn(&mut MiniSalsaState, &mut State) -> Result<(), anyhow::Error>,
    handle: fn(&Event, &mut MiniSalsaState, state: &mut State) -> Result<Outcome, anyhow::Error>,
    repaint: fn(&mut Buffer, Rect, &mut MiniSalsaState, &mut State) -> Result<(), anyhow::Error>,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    stdout().execute(EnableBlinking)?;
    stdout().execute(SetCursorStyle::BlinkingBar)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut istate = MiniSalsaState::new(name);

    init(&mut istate, state)?;

    istate.frame = repaint_ui(&mut terminal, repaint, &mut istate, state)?;

    let r = 'l: loop {
        istate.focus_outcome = Outcome::Continue;

        let o = match crossterm::event::poll(Duration::from_millis(10)) {
            Ok(true) => {
                let event = match crossterm::event::read() {
                    Ok(v) => v,
                    Err(e) => break 'l Err(anyhow!(e)),
                };
                match handle_event(handle, event, &mut istate, state) {
                    Ok(v) => max(v, istate.focus_outcome),
                    Err(e) => break 'l Err(e),
                }
            }
            Ok(false) => continue,
            Err(e) => {
                istate.status[0] = format!("{}", e);
                Outcome::Changed
            }
        };

        if istate.quit {
            break 'l Ok(());
        }

        if o == Outcome::Changed {
            match repaint_ui(&mut terminal, repaint, &mut istate, state) {
                Ok(f) => istate.frame = f,
                Err(e) => break 'l Err(e),
            };
        }
    };

    stdout().execute(SetCursorStyle::DefaultUserShape)?;
    stdout().execute(DisableBlinking)?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    r
}

fn repaint_ui<State>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    repaint: fn(&mut Buffer, Rect, &mut MiniSalsaState, &mut State) -> Result<(), anyhow::Error>,
    ctx: &mut MiniSalsaState,
    state: &mut State,
) -> Result<usize, anyhow::Error> {
    terminal.hide_cursor()?;

    let completed = terminal.draw(|frame| {
        match repaint_tui(frame.buffer_mut(), repaint, ctx, state) {
            Ok(_) => {}
            Err(e) => {
                error!("{:?}", e)
            }
        };
        if let Some(cursor) = ctx.cursor {
            frame.set_cursor_position(cursor);
            ctx.cursor = None;
        }
    })?;

    Ok(completed.count)
}

fn repaint_tui<State>(
    buf: &mut Buffer,
    repaint: fn(&mut Buffer, Rect, &mut MiniSalsaState, &mut State) -> Result<(), anyhow::Error>,
    ctx: &mut MiniSalsaState,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    let area = *buf.area();

    let l1 = Layout::vertical([
        Constraint::Fill(1), //
        Constraint::Length(1),
    ])
    .split(area);

    buf.set_style(l1[1], Style::new().white().on_dark_gray());

    let t0 = SystemTime::now();

    repaint(buf, l1[0], ctx, state)?;

    ctx.last_render = t0.elapsed().unwrap_or(Duration::from_nanos(0));
    ctx.status[1] = format!("Render #{} | {:.0?}", ctx.frame, ctx.last_render).to_string();

    let l_status = Layout::horizontal([
        Constraint::Length(2 + ctx.name.graphemes(true).count() as u16),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Length(18),
    ])
    .split(l1[1]);

    Line::from_iter(["[", ctx.name.as_str(), "]"]).render(l_status[0], buf);
    Line::from(" ").render(l_status[1], buf);
    Line::from(ctx.status[0].as_str()).render(l_status[2], buf);
    Line::from(ctx.status[1].as_str())
        .style(Style::new().fg(Color::LightBlue))
        .render(l_status[3], buf);
    Line::from(ctx.status[2].as_str())
        .style(Style::new().fg(Color::LightBlue))
        .render(l_status[4], buf);

    Ok(())
}

fn handle_event<State>(
    handle: fn(&Event, ctx: &mut MiniSalsaState, state: &mut State) -> Result<Outcome, anyhow::Error>,
    event: Event,
    ctx: &mut MiniSalsaState,
    state: &mut State,
) -> Result<Outcome, anyhow::Error> {
    ctx.event_cnt += 1;

    let t0 = SystemTime::now();

    let r = {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                ..
            }) => {
                ctx.quit = true;
                return Ok(Outcome::Changed);
            }
            Event::Resize(_, _) => return Ok(Outcome::Changed),
            _ => {}
        }

        handle(&event, ctx, state)?
    };

    ctx.last_event = t0.elapsed().unwrap_or(Duration::from_nanos(0));
    ctx.status[2] = format!(" Handle {:.0?}", ctx.last_event).to_string();

    Ok(r)
}

pub fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("log.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{} {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
