mod ui;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use prospector::outcome::Outcome;
use prospector::session::{GameMode, Session, SessionPhase};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use ui::game_scene::GameScene;
use ui::messages;
use ui::mode_select::ModeSelectScreen;
use ui::name_entry::NameEntryScreen;

const STARTING_GOLD: u32 = 20;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal even when the game loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Term) -> io::Result<()> {
    let Some(name) = name_entry_loop(terminal)? else {
        return Ok(());
    };
    let Some(mode) = mode_select_loop(terminal)? else {
        return Ok(());
    };

    let mut rng = rand::thread_rng();
    let mut session = Session::new(name, STARTING_GOLD, mode, &mut rng);
    game_loop(terminal, &mut session, &mut rng)
}

/// Name entry screen. Returns `None` when the player bails out.
fn name_entry_loop(terminal: &mut Term) -> io::Result<Option<String>> {
    let mut screen = NameEntryScreen::new();
    loop {
        terminal.draw(|f| screen.draw(f, f.size()))?;
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char(c) => screen.handle_char_input(c),
                KeyCode::Backspace => screen.handle_backspace(),
                KeyCode::Enter if screen.is_valid() => {
                    return Ok(Some(screen.get_name()));
                }
                KeyCode::Esc => return Ok(None),
                _ => {}
            }
        }
    }
}

/// Difficulty selection. Returns `None` when the player bails out.
fn mode_select_loop(terminal: &mut Term) -> io::Result<Option<GameMode>> {
    let mut screen = ModeSelectScreen::new();
    loop {
        terminal.draw(|f| screen.draw(f, f.size()))?;
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Up => screen.navigate_up(),
                KeyCode::Down => screen.navigate_down(),
                KeyCode::Enter => return Ok(Some(screen.selected_mode())),
                KeyCode::Esc => return Ok(None),
                _ => {}
            }
        }
    }
}

/// The in-town turn loop: draw, read a key, hand the command to the
/// engine, and log whatever came of it.
fn game_loop(terminal: &mut Term, session: &mut Session, rng: &mut impl rand::Rng) -> io::Result<()> {
    let mut scene = GameScene::new();
    scene.push_message(messages::describe(&session.snapshot().latest));

    loop {
        terminal.draw(|f| scene.draw(f, f.size(), session))?;
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Once the banner is up, any key leaves the game.
        if session.phase() != SessionPhase::Playing {
            return Ok(());
        }

        if let Some(command) = scene.handle_key(key.code, session) {
            let outcome = session.process_command(command, rng);
            scene.push_message(messages::describe(&outcome));
            if matches!(outcome, Outcome::Farewell) {
                return Ok(());
            }
        }
    }
}
