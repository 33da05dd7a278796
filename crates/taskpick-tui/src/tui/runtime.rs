/*
[INPUT]:  Controller state, crossterm input events, log buffer
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use taskpick_tui::Controller;

use super::app::{AppState, Tab};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

/// Bounded backlog of tracing output feeding the Logs tab.
///
/// Old lines are evicted as new ones arrive; the panel only ever reads
/// the newest `tail(count)` lines, so no full copy is kept around.
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// The newest `count` lines, oldest first
    pub fn tail(&self, count: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(skip).cloned().collect()
    }
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

/// Assembles tracing's byte chunks into whole lines for the buffer.
/// A trailing fragment without a newline stays pending until the next
/// write or flush.
pub struct LogWriter {
    buffer: LogBufferHandle,
    pending: String,
}

impl LogWriter {
    fn commit(&mut self, rest: &str) {
        let mut line = std::mem::take(&mut self.pending);
        line.push_str(rest.trim_end_matches('\r'));
        self.buffer.lock().expect("log buffer lock").push_line(line);
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for chunk in String::from_utf8_lossy(buf).split_inclusive('\n') {
            match chunk.strip_suffix('\n') {
                Some(rest) => self.commit(rest),
                None => self.pending.push_str(chunk),
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.commit("");
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            pending: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[s]", key_style),
        Span::raw(" Session  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Activate  "),
        Span::styled("[Left/Right]", key_style),
        Span::raw(" Focus  "),
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Select"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[m]", key_style),
        Span::raw(" Manual type  "),
        Span::styled("[c]", key_style),
        Span::raw(" Custom task  "),
        Span::styled("[Tab/1/2]", key_style),
        Span::raw(" Tabs  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub async fn run_tui(controller: Controller, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(controller, log_buffer);

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    if handle_key_event(&mut app, key.code).await {
                        should_quit = true;
                    }
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_tabs(frame, layout[1], app.current_tab);

    match app.current_tab {
        Tab::Workflow => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(25),
                    Constraint::Percentage(35),
                    Constraint::Percentage(40),
                ])
                .split(layout[0]);

            let left = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(5)])
                .split(columns[0]);
            draw_session(frame, left[0], app);
            draw_task_types(frame, left[1], app);

            draw_subtasks(frame, columns[1], app);

            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(columns[2]);
            draw_datasets(frame, right[0], app);
            draw_result(frame, right[1], app);
        }
        Tab::Logs => {
            draw_logs(frame, layout[0], &app.log_buffer);
        }
    }

    draw_footer(frame, layout[2], app);

    if app.active_modal.is_some() {
        draw_modal(frame, area, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_buffer_tail_keeps_newest_lines() {
        let mut buffer = LogBuffer::new(3);
        for n in 0..5 {
            buffer.push_line(format!("line {n}"));
        }
        assert_eq!(buffer.tail(2), ["line 3", "line 4"]);
        assert_eq!(buffer.tail(10), ["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_log_buffer_zero_capacity_discards() {
        let mut buffer = LogBuffer::new(0);
        buffer.push_line("dropped".to_string());
        assert!(buffer.tail(10).is_empty());
    }

    #[test]
    fn test_log_writer_assembles_lines_across_chunks() {
        let buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(10)));
        let factory = LogWriterFactory::new(buffer.clone());
        let mut writer = factory.make_writer();

        writer.write_all(b"first ").expect("write");
        writer.write_all(b"half\r\nsecond").expect("write");
        writer.flush().expect("flush");

        let lines = buffer.lock().expect("log buffer lock").tail(10);
        assert_eq!(lines, ["first half", "second"]);
    }
}
