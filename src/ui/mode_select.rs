use prospector::session::GameMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Difficulty picker shown after name entry.
pub struct ModeSelectScreen {
    pub selected_index: usize,
}

impl ModeSelectScreen {
    pub fn new() -> Self {
        Self { selected_index: 1 } // default to normal
    }

    pub fn navigate_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < GameMode::all().len() {
            self.selected_index += 1;
        }
    }

    pub fn selected_mode(&self) -> GameMode {
        GameMode::all()[self.selected_index]
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(7),    // Mode list
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Choose your difficulty")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let lines: Vec<Line> = GameMode::all()
            .iter()
            .enumerate()
            .map(|(idx, mode)| {
                let label = format!(
                    "{} {:<8} {}",
                    if idx == self.selected_index { ">" } else { " " },
                    mode.name(),
                    mode_blurb(*mode)
                );
                if idx == self.selected_index {
                    Line::styled(
                        label,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(label)
                }
            })
            .collect();

        let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(list, chunks[1]);

        let controls = Paragraph::new("[Up/Down] Select    [Enter] Start    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[2]);
    }
}

fn mode_blurb(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Easy => "full refunds, friendly towns, extra gold",
        GameMode::Normal => "the classic hunt",
        GameMode::Hard => "stingy shops and tough towns",
        GameMode::Test => "a stocked kit and a heavy purse",
        GameMode::Samurai => "an extra kit slot",
    }
}
