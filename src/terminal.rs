use crate::graphics::{Color, RasterCanvas, Viewport};
use crate::input::{Command, HuePreset};
use crate::shape::ShapeKind;
use crate::vertex::Vertex;
use anyhow::{anyhow, bail, Context};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

/// Each cell shows two stacked pixels: foreground on top, background below
const HALF_BLOCK: char = '\u{2580}';

const CONTROLS: [&str; 3] = [
    "SPACE: Change shape",
    "R/G/B: Change base color",
    "Mouse: Guide wormhole",
];

/// Extra diagnostics shown in debug mode
#[derive(Debug, Clone, Copy)]
pub struct DebugInfo {
    pub fps: f64,
    pub time_offset: f64,
}

/// Text drawn over the wormhole
#[derive(Debug, Clone, Copy)]
pub struct Hud {
    pub shape: ShapeKind,
    pub debug: Option<DebugInfo>,
}

impl Hud {
    /// Lines of text with the terminal row each one goes on
    pub fn lines(&self, rows: u16) -> Vec<(u16, String)> {
        let mut lines = vec![(0, format!("Shape: {}", self.shape.name()))];

        if let Some(debug) = self.debug {
            lines.push((
                1,
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            ));
            lines.push((2, format!("FPS: {:.2}", debug.fps)));
            lines.push((3, format!("Time: {:.2}", debug.time_offset)));
        }

        let first_control = rows.saturating_sub(CONTROLS.len() as u16);
        for (i, control) in CONTROLS.iter().enumerate() {
            let row = first_control + i as u16;
            if row > 0 && row < rows {
                lines.push((row, control.to_string()));
            }
        }
        lines
    }
}

/// Decodes a terminal event into a visualizer command
pub fn translate(event: &Event, viewport: &Viewport) -> Option<Command> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, viewport),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::NextShape),
        KeyCode::Char('r' | 'R') => Some(Command::SetHue(HuePreset::Red)),
        KeyCode::Char('g' | 'G') => Some(Command::SetHue(HuePreset::Green)),
        KeyCode::Char('b' | 'B') => Some(Command::SetHue(HuePreset::Blue)),
        KeyCode::Char('d' | 'D') => Some(Command::ToggleDebug),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, viewport: &Viewport) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            // Center of the cell, which spans two device rows
            let device = Vertex::new(
                mouse.column as f64 + 0.5,
                mouse.row as f64 * 2.0 + 1.0,
            );
            let (x, y) = viewport.to_logical(device);
            Some(Command::PointerMoved { x, y })
        }
        _ => None,
    }
}

fn to_term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Size of the terminal in cells
fn terminal_size() -> anyhow::Result<(u16, u16)> {
    let (cols, rows) = termsize::get()
        .map(|size| (size.cols, size.rows))
        .or_else(|| terminal::size().ok())
        .ok_or_else(|| anyhow!("unable to determine terminal size"))?;
    if cols == 0 || rows == 0 {
        bail!("terminal has no usable area ({cols}x{rows})");
    }
    Ok((cols, rows))
}

/// The user's terminal, put into raw full-screen mode for the lifetime of the
/// session and restored on drop
pub struct TerminalSession {
    out: BufWriter<Stdout>,
    cols: u16,
    rows: u16,
    viewport: Viewport,
    restored: bool,
}

impl TerminalSession {
    pub fn enter() -> anyhow::Result<Self> {
        let (cols, rows) = terminal_size()?;

        enable_raw_mode().context("failed to enable raw mode")?;
        // From here on, dropping the session puts the terminal back
        let mut session = TerminalSession {
            out: BufWriter::new(io::stdout()),
            cols,
            rows,
            viewport: Viewport::new(cols as usize, rows as usize * 2),
            restored: false,
        };
        execute!(
            session.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        )
        .context("failed to switch to the alternate screen")?;

        log::info!(
            "terminal {}x{} cells, viewport scale {:.3}",
            cols,
            rows,
            session.viewport.scale
        );
        Ok(session)
    }

    /// Device pixel dimensions of the drawable area
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.viewport.device_width, self.viewport.device_height)
    }

    /// Drains pending input without blocking
    pub fn poll_commands(&mut self) -> anyhow::Result<Vec<Command>> {
        let mut commands = Vec::new();
        while event::poll(Duration::ZERO).context("failed to poll terminal input")? {
            let event = event::read().context("failed to read terminal input")?;
            if let Event::Resize(cols, rows) = event {
                self.resize(cols, rows);
                continue;
            }
            if let Some(command) = translate(&event, &self.viewport) {
                commands.push(command);
            }
        }
        Ok(commands)
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        log::info!("terminal resized to {}x{} cells", cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.viewport = Viewport::new(cols as usize, rows as usize * 2);
    }

    /// Writes the canvas and the HUD to the terminal
    pub fn present(&mut self, canvas: &RasterCanvas, hud: &Hud) -> io::Result<()> {
        let (width, height) = canvas.size();
        let cols = (self.cols as usize).min(width);
        let rows = (self.rows as usize).min(height / 2);

        let mut fg = None;
        let mut bg = None;
        for row in 0..rows {
            queue!(self.out, MoveTo(0, row as u16))?;
            for col in 0..cols {
                let top = canvas.pixel(col, row * 2).unwrap_or(Color::BLACK);
                let bottom = canvas.pixel(col, row * 2 + 1).unwrap_or(Color::BLACK);
                if fg != Some(top) {
                    queue!(self.out, SetForegroundColor(to_term_color(top)))?;
                    fg = Some(top);
                }
                if bg != Some(bottom) {
                    queue!(self.out, SetBackgroundColor(to_term_color(bottom)))?;
                    bg = Some(bottom);
                }
                queue!(self.out, Print(HALF_BLOCK))?;
            }
        }

        queue!(
            self.out,
            SetForegroundColor(to_term_color(Color::WHITE)),
            SetBackgroundColor(to_term_color(Color::BLACK))
        )?;
        for (row, text) in hud.lines(self.rows) {
            let text: String = text.chars().take(self.cols as usize).collect();
            queue!(self.out, MoveTo(0, row), Print(text))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Puts the terminal back the way it was found
    pub fn restore(&mut self) -> anyhow::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        execute!(
            self.out,
            ResetColor,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("failed to leave the alternate screen")?;
        disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::warn!("terminal restore failed: {err:#}");
        }
    }
}
