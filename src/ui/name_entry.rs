use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MAX_NAME_LEN: usize = 16;

/// The opening screen: the hunter signs their name.
pub struct NameEntryScreen {
    pub name_input: String,
}

impl NameEntryScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Tagline
                Constraint::Length(3), // Input field
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("TREASURE HUNTER")
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let tagline = Paragraph::new("Going hunting for the big treasure, eh?")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(tagline, chunks[1]);

        let input = Paragraph::new(format!("{}_", self.name_input))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" What's your name, Hunter? "),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(input, chunks[2]);

        let controls = Paragraph::new("[Enter] Continue    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[4]);
    }

    pub fn handle_char_input(&mut self, c: char) {
        if self.name_input.chars().count() < MAX_NAME_LEN {
            self.name_input.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.pop();
    }

    pub fn is_valid(&self) -> bool {
        !self.name_input.trim().is_empty()
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_lowercase()
    }
}
