//! Main UI Application
//!
//! Draws the level and turns key presses into player moves.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::data::Palette;
use crate::entities::{Direction, MoveResult};
use crate::game::LevelState;

/// Map a key to a cardinal step (arrows or vi keys)
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::North),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::South),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::West),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::East),
        _ => None,
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Main UI application
pub struct App {
    palette: Palette,
    title: String,
    /// Outcome of the most recent player move
    last_move: Option<MoveResult>,
}

impl App {
    pub fn new(palette: Palette, title: impl Into<String>) -> Self {
        Self {
            palette,
            title: title.into(),
            last_move: None,
        }
    }

    pub fn last_move(&self) -> Option<MoveResult> {
        self.last_move
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent, level: &mut LevelState) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(true),
            code => {
                if let Some(dir) = direction_for_key(code) {
                    self.last_move = Some(level.move_player(dir));
                }
            }
        }

        Ok(false)
    }

    /// Draw the board, then the status rows underneath
    pub fn render(&self, frame: &mut Frame, level: &LevelState) {
        let map_rows = level.board().height().max(0) as u16;
        let [map_area, status_area] =
            Layout::vertical([Constraint::Length(map_rows), Constraint::Min(0)]).areas(frame.area());

        self.render_map(frame, level, map_area);
        self.render_status(frame, level, status_area);
    }

    fn render_map(&self, frame: &mut Frame, level: &LevelState, area: Rect) {
        let board = level.board();
        let view_width = (board.width().max(0) as u16).min(area.width);
        let view_height = (board.height().max(0) as u16).min(area.height);
        let buf = frame.buffer_mut();

        for screen_y in 0..view_height {
            for screen_x in 0..view_width {
                let tile = board.get(screen_x as i32, screen_y as i32);
                let color = if tile.blocked {
                    self.palette.dark_wall
                } else {
                    self.palette.dark_ground
                };
                if let Some(cell) = buf.cell_mut((area.x + screen_x, area.y + screen_y)) {
                    cell.set_char(tile.glyph()).set_fg(rgb(color));
                }
            }
        }

        for object in level.objects_by_layer() {
            let (x, y) = (object.pos.x, object.pos.y);
            if x < 0 || y < 0 || x >= view_width as i32 || y >= view_height as i32 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + y as u16)) {
                cell.set_char(object.renderable.glyph)
                    .set_fg(rgb(object.renderable.fg));
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, level: &LevelState, area: Rect) {
        let pos = level.player_position();

        let mut lines = vec![Line::from(vec![
            Span::styled(
                self.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  seed {} | {} rooms | @ ({}, {})",
                level.seed(),
                level.rooms().len(),
                pos.x,
                pos.y
            )),
        ])];

        if let Some(result) = self.last_move {
            if !result.moved {
                lines.push(Line::from(Span::styled(
                    "You bump into the wall.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        lines.push(Line::from(Span::styled(
            "[arrows/hjkl] move  [q/Esc] quit",
            Style::default().fg(Color::Gray),
        )));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::LevelConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn level() -> LevelState {
        LevelState::new(&LevelConfig {
            seed: 5,
            ..LevelConfig::default()
        })
        .unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_direction_keys() {
        assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::North));
        assert_eq!(direction_for_key(KeyCode::Char('j')), Some(Direction::South));
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::West));
        assert_eq!(direction_for_key(KeyCode::Char('l')), Some(Direction::East));
        assert_eq!(direction_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Palette::default(), "test");
        let mut level = level();

        assert!(app.handle_input(press(KeyCode::Esc), &mut level).unwrap());
        assert!(app.handle_input(press(KeyCode::Char('q')), &mut level).unwrap());
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.handle_input(ctrl_q, &mut level).unwrap());
        assert!(!app.handle_input(press(KeyCode::Char('x')), &mut level).unwrap());
    }

    #[test]
    fn test_arrow_moves_player() {
        let mut app = App::new(Palette::default(), "test");
        let mut level = level();
        let start = level.player_position();

        assert!(!app.handle_input(press(KeyCode::Right), &mut level).unwrap());
        assert_eq!(app.last_move().map(|m| m.moved), Some(true));
        assert_eq!(level.player_position(), start.offset(1, 0));

        app.handle_input(press(KeyCode::Left), &mut level).unwrap();
        assert_eq!(level.player_position(), start);
    }

    #[test]
    fn test_render_draws_board_and_player() {
        let app = App::new(Palette::default(), "test");
        let level = level();
        let mut terminal = Terminal::new(TestBackend::new(80, 50)).unwrap();

        terminal.draw(|frame| app.render(frame, &level)).unwrap();

        let buffer = terminal.backend().buffer();
        let pos = level.player_position();
        assert_eq!(buffer[(pos.x as u16, pos.y as u16)].symbol(), "@");
        assert_eq!(buffer[(0u16, 0u16)].symbol(), "#");

        let floor = level.rooms()[0]
            .interior()
            .find(|p| level.objects().iter().all(|o| o.pos != *p))
            .unwrap();
        assert_eq!(buffer[(floor.x as u16, floor.y as u16)].symbol(), ".");
    }
}
