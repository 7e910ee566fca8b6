use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use dobutsu::{Game, GameConfig, GameView, InputEvent, InputOutcome, Orientation, Point};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};

#[derive(Parser)]
struct Args {
    /// Path to a game config JSON file. Without it, the game starts from the standard position
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut app = App::new(config)?;

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Restore the terminal even if drawing fails
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    let mut should_quit = false;
    while !should_quit {
        let view = app.game.view();
        terminal.draw(|frame| app.ui(frame, &view))?;
        should_quit = handle_events(app)?;
    }
    Ok(())
}

/// Maps keys to cursor movement and game inputs.
struct App {
    config: GameConfig,
    game: Game,
    /// In board coordinates.
    cursor: Point,
    status: String,
}

impl App {
    fn new(config: GameConfig) -> anyhow::Result<Self> {
        let game = config.build()?;
        Ok(Self {
            config,
            game,
            cursor: Point::new(0, 0),
            status: String::from("Arrow keys to move, Enter to pick a cell, 1-9 to pick from the reserve"),
        })
    }

    fn restart(&mut self) -> anyhow::Result<()> {
        self.game = self.config.build()?;
        self.cursor = Point::new(0, 0);
        self.status = String::from("New game");
        Ok(())
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let moved = self.cursor + Point::new(dx, dy);
        if self.game.board().contains(moved) {
            self.cursor = moved;
        }
    }

    fn input(&mut self, event: InputEvent) {
        let side = self.game.turn();
        self.status = match self.game.apply(event) {
            InputOutcome::Selected { at, candidates } => {
                format!("Selected {} ({} possible moves)", at, candidates)
            }
            InputOutcome::ReserveSelected { kind, .. } => format!("Dropping a {}", kind),
            InputOutcome::Deselected => String::from("Nothing selected"),
            InputOutcome::Moved {
                from,
                to,
                captured: Some(kind),
            } => format!("{} moved {} -> {} and captured a {}", side, from, to, kind),
            InputOutcome::Moved { from, to, .. } => format!("{} moved {} -> {}", side, from, to),
            InputOutcome::Dropped { kind, at } => format!("{} dropped a {} on {}", side, kind, at),
            InputOutcome::Ignored => String::from("Not possible"),
        };
    }

    fn ui(&self, frame: &mut Frame, view: &GameView) {
        let board_height = span(view.rows, CELL_HEIGHT);
        let main_layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Length(board_height),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(frame.size());
        frame.render_widget(ReserveWidget { view, owner: Orientation::Backward }, main_layout[0]);
        frame.render_widget(BoardWidget { view, cursor: self.cursor }, main_layout[1]);
        frame.render_widget(ReserveWidget { view, owner: Orientation::Forward }, main_layout[2]);
        let status = format!("{} to move | {} | q: quit, r: restart", view.turn, self.status);
        frame.render_widget(Paragraph::new(status), main_layout[4]);
    }
}

fn handle_events(app: &mut App) -> anyhow::Result<bool> {
    if event::poll(std::time::Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind != event::KeyEventKind::Press {
                return Ok(false);
            }
            match key.code {
                KeyCode::Char('q') => return Ok(true),
                KeyCode::Char('r') => app.restart()?,
                KeyCode::Left => app.move_cursor(-1, 0),
                KeyCode::Right => app.move_cursor(1, 0),
                // Row 0 is drawn at the bottom
                KeyCode::Up => app.move_cursor(0, 1),
                KeyCode::Down => app.move_cursor(0, -1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let Point { x, y } = app.cursor;
                    app.input(InputEvent::Cell { x, y });
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let slot = c as usize - '1' as usize;
                    let owner = app.game.turn();
                    app.input(InputEvent::Reserve { owner, slot });
                }
                _ => {}
            }
        }
    }
    Ok(false)
}

const CELL_WIDTH: u16 = 5;

const CELL_HEIGHT: u16 = 3;

/// Terminal size of `count` cells of `size` each, saturating at the maximum.
fn span(count: usize, size: u16) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX).saturating_mul(size)
}

/// Where the cell at board coordinates `(x, y)` is drawn, or `None` if it
/// lies beyond what a terminal can address.
fn cell_rect(area: Rect, rows: usize, x: i32, y: i32) -> Option<Rect> {
    let row_from_top = i64::try_from(rows).ok()? - 1 - i64::from(y);
    let col = u16::try_from(x).ok()?;
    let row = u16::try_from(row_from_top).ok()?;
    Some(Rect {
        x: area.x.checked_add(col.checked_mul(CELL_WIDTH)?)?,
        y: area.y.checked_add(row.checked_mul(CELL_HEIGHT)?)?,
        width: CELL_WIDTH,
        height: CELL_HEIGHT,
    })
}

struct BoardWidget<'a> {
    view: &'a GameView,
    cursor: Point,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board_width = span(self.view.cols, CELL_WIDTH);
        let area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(board_width),
                Constraint::Min(0),
            ])
            .split(area)[1];
        for cell in &self.view.cells {
            let Some(rect) = cell_rect(area, self.view.rows, cell.x, cell.y) else {
                continue;
            };
            let rect = rect.intersection(area);
            if rect.is_empty() {
                continue;
            }

            let p = Point::new(cell.x, cell.y);
            let mut border_style = Style::new();
            if p == self.cursor {
                border_style = border_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            let mut fill = Style::new();
            if cell.highlighted {
                fill = fill.bg(Color::Red);
            }
            if self.view.selected_square == Some(p) {
                fill = fill.bg(Color::Blue);
            }
            Block::new()
                .border_type(BorderType::Rounded)
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(fill)
                .render(rect, buf);

            // Skip the symbol for cells that are cut off by a small terminal
            let fully_visible = rect.width == CELL_WIDTH && rect.height == CELL_HEIGHT;
            if let Some(piece) = cell.piece.filter(|_| fully_visible) {
                let color = match piece.orientation {
                    Orientation::Forward => Color::White,
                    Orientation::Backward => Color::Green,
                };
                buf.set_string(
                    rect.x + CELL_WIDTH / 2,
                    rect.y + CELL_HEIGHT / 2,
                    piece.symbol().to_string(),
                    fill.fg(color),
                );
            }
        }
    }
}

struct ReserveWidget<'a> {
    view: &'a GameView,
    owner: Orientation,
}

impl Widget for ReserveWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(format!("{:>8}: ", self.owner))];
        for (slot_idx, slot) in self.view.reserves.of(self.owner).iter().enumerate() {
            let mut style = Style::new();
            if self.view.turn == self.owner && self.view.pending_reserve == Some(slot.kind) {
                style = style.bg(Color::Red);
            }
            spans.push(Span::styled(
                format!("[{}] {} x{}", slot_idx + 1, slot.kind, slot.count),
                style,
            ));
            spans.push(Span::raw("  "));
        }
        Line::from(spans).alignment(Alignment::Center).render(area, buf);
    }
}
