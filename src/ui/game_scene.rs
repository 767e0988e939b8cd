use crossterm::event::KeyCode;
use prospector::items::Item;
use prospector::outcome::Command;
use prospector::session::Session;
use prospector::shop::ShopAction;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LOG_CAPACITY: usize = 100;

/// Item picker popped over the scene while buying or selling.
pub struct ShopOverlay {
    pub action: ShopAction,
    pub selected: usize,
}

impl ShopOverlay {
    /// The items on offer: the shop's stock when buying, the hunter's
    /// kit when selling. Each entry carries its price.
    fn entries(&self, session: &Session) -> Vec<(Item, u32)> {
        match self.action {
            ShopAction::Buy => session.shop().stock(),
            ShopAction::Sell => session
                .hunter()
                .kit
                .items()
                .into_iter()
                .map(|item| (item, session.shop().sell_price(item)))
                .collect(),
        }
    }
}

/// The in-town scene: status panels, the message log, and the command
/// menu. Holds no game state beyond what it needs to render.
pub struct GameScene {
    pub log: Vec<String>,
    pub shop_overlay: Option<ShopOverlay>,
}

impl GameScene {
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            shop_overlay: None,
        }
    }

    /// Appends a rendered message to the log, trimming the oldest
    /// entries past capacity.
    pub fn push_message(&mut self, message: String) {
        self.log.push(message);
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }

    /// Routes a key press to an engine command, or absorbs it as scene
    /// navigation (shop overlay handling).
    pub fn handle_key(&mut self, key: KeyCode, session: &Session) -> Option<Command> {
        if let Some(overlay) = &mut self.shop_overlay {
            let entries = overlay.entries(session);
            match key {
                KeyCode::Up => {
                    if overlay.selected > 0 {
                        overlay.selected -= 1;
                    }
                }
                KeyCode::Down => {
                    if overlay.selected + 1 < entries.len() {
                        overlay.selected += 1;
                    }
                }
                KeyCode::Enter => {
                    let picked = entries.get(overlay.selected).map(|(item, _)| *item);
                    let action = overlay.action;
                    self.shop_overlay = None;
                    if let Some(item) = picked {
                        return Some(match action {
                            ShopAction::Buy => Command::Buy(item),
                            ShopAction::Sell => Command::Sell(item),
                        });
                    }
                }
                KeyCode::Esc => self.shop_overlay = None,
                _ => {}
            }
            return None;
        }

        match key {
            KeyCode::Char('b') => {
                self.shop_overlay = Some(ShopOverlay {
                    action: ShopAction::Buy,
                    selected: 0,
                });
                None
            }
            KeyCode::Char('s') => {
                self.shop_overlay = Some(ShopOverlay {
                    action: ShopAction::Sell,
                    selected: 0,
                });
                None
            }
            KeyCode::Char('e') => Some(Command::Explore),
            KeyCode::Char('m') => Some(Command::Move),
            KeyCode::Char('l') => Some(Command::Trouble),
            KeyCode::Char('d') => Some(Command::Dig),
            KeyCode::Char('h') => Some(Command::Hunt),
            KeyCode::Char('x') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, session: &Session) {
        let snapshot = session.snapshot();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Hunter header
                Constraint::Min(8),    // Town + log
                Constraint::Length(3), // Menu
            ])
            .split(area);

        // Header: gold, kit, treasures.
        let kit_line = if snapshot.kit.is_empty() {
            "empty kit".to_string()
        } else {
            snapshot
                .kit
                .iter()
                .map(|item| item.name())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let treasure_line = if snapshot.treasures.is_empty() {
            "none yet".to_string()
        } else {
            snapshot
                .treasures
                .iter()
                .map(|treasure| treasure.name())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let header = Paragraph::new(vec![
            Line::from(format!(
                "{} has {} gold",
                snapshot.hunter_name, snapshot.gold
            )),
            Line::from(format!("Kit: {}    Treasure found: {}", kit_line, treasure_line)),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Hunter "));
        f.render_widget(header, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        // Town panel.
        let town = Paragraph::new(vec![
            Line::from(format!("Surrounded by {}", snapshot.terrain.name())),
            Line::from(format!(
                "Crossing needs a {}",
                snapshot.terrain.required_item().name()
            )),
            Line::from(if snapshot.tough_town {
                "A rough place. Watch yourself."
            } else {
                "Sleepy, mild mannered folk."
            }),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Town "));
        f.render_widget(town, columns[0]);

        // Message log, newest at the bottom.
        let log_height = columns[1].height.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .log
            .iter()
            .rev()
            .take(log_height)
            .rev()
            .map(|entry| Line::raw(entry.as_str()))
            .collect();
        let log = Paragraph::new(lines)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" News "));
        f.render_widget(log, columns[1]);

        // Command menu.
        let menu = Paragraph::new(
            "(B)uy  (S)ell  (E)xplore  (M)ove on  (L)ook for trouble  (D)ig  (H)unt treasure  e(X)it",
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(menu, rows[2]);

        if let Some(overlay) = &self.shop_overlay {
            self.draw_shop_overlay(f, area, session, overlay);
        }

        if snapshot.is_win || snapshot.is_lose {
            let banner = if snapshot.is_win {
                "Congratulations, you have found the last of the three treasures. You win!"
            } else {
                "Game over! Your gold is gone. Press any key."
            };
            let style = if snapshot.is_win {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            };
            let popup = centered_rect(area, 60, 5);
            f.render_widget(Clear, popup);
            let widget = Paragraph::new(banner)
                .style(style)
                .alignment(Alignment::Center)
                .wrap(ratatui::widgets::Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(widget, popup);
        }
    }

    fn draw_shop_overlay(
        &self,
        f: &mut Frame,
        area: Rect,
        session: &Session,
        overlay: &ShopOverlay,
    ) {
        let entries = overlay.entries(session);
        let title = match overlay.action {
            ShopAction::Buy => " Buy what? ",
            ShopAction::Sell => " Sell what? ",
        };

        let mut lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .map(|(idx, (item, price))| {
                let label = format!(
                    "{} {:<8} {:>3} gold",
                    if idx == overlay.selected { ">" } else { " " },
                    item.name(),
                    price
                );
                if idx == overlay.selected {
                    Line::styled(label, Style::default().fg(Color::Yellow))
                } else {
                    Line::raw(label)
                }
            })
            .collect();
        if lines.is_empty() {
            lines.push(Line::raw("Nothing to sell."));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "[Enter] Confirm  [Esc] Cancel",
            Style::default().fg(Color::Gray),
        ));

        let popup = centered_rect(area, 36, (entries.len() + 4).max(6) as u16);
        f.render_widget(Clear, popup);
        let widget =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(widget, popup);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
