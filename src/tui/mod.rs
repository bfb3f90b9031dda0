//! Terminal UI: mode menu, game screen, and the play/replay loop.

mod app;
mod input;
mod mode;
mod orchestrator;
mod players;
mod ui;

pub use mode::GameMode;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::game::{Coord, Player as Mark};
use app::App;
use orchestrator::{GameEvent, Orchestrator};
use players::{HumanPlayer, PerfectPlayer, Player};

/// What to do after a finished game.
enum AfterGame {
    Replay,
    Menu,
    Quit,
}

/// Input senders for the human seats; `None` for engine seats.
struct Inputs {
    x: Option<mpsc::UnboundedSender<Coord>>,
    o: Option<mpsc::UnboundedSender<Coord>>,
}

impl Inputs {
    fn sender_for(&self, mark: Mark) -> Option<&mpsc::UnboundedSender<Coord>> {
        match mark {
            Mark::X => self.x.as_ref(),
            Mark::O => self.o.as_ref(),
        }
    }
}

/// Runs the TUI until the user quits.
///
/// With `Some(mode)` the menu is skipped for the first game.
pub async fn run(initial_mode: Option<GameMode>) -> Result<()> {
    init_tracing()?;
    info!("starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, initial_mode).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI error");
    }
    res
}

/// Logs go to a file while the TUI owns the terminal.
fn init_tracing() -> Result<()> {
    let log_file = std::fs::File::create("tictactoe.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    initial_mode: Option<GameMode>,
) -> Result<()> {
    let mut next_mode = initial_mode;
    loop {
        let mode = match next_mode.take() {
            Some(mode) => mode,
            None => match select_mode(terminal)? {
                Some(mode) => mode,
                None => return Ok(()),
            },
        };

        match play_game(terminal, mode).await? {
            AfterGame::Replay => next_mode = Some(mode),
            AfterGame::Menu => {}
            AfterGame::Quit => return Ok(()),
        }
    }
}

/// Menu loop; returns `None` when the user quits from the menu.
fn select_mode<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<Option<GameMode>> {
    let modes: Vec<GameMode> = GameMode::iter().collect();
    let mut selected = 0usize;

    loop {
        terminal.draw(|frame| ui::draw_menu(frame, selected))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Up => selected = selected.saturating_sub(1),
                    KeyCode::Down => selected = (selected + 1).min(modes.len() - 1),
                    KeyCode::Enter => return Ok(Some(modes[selected])),
                    _ => {}
                }
            }
        }
    }
}

/// Builds the two seats for a mode. Every human seat gets its own input
/// channel; the UI loop routes selections to whichever side moves.
fn seats(mode: GameMode) -> (Box<dyn Player>, Box<dyn Player>, Inputs) {
    fn human(name: &str) -> (Box<dyn Player>, Option<mpsc::UnboundedSender<Coord>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Box::new(HumanPlayer::new(name, rx)), Some(tx))
    }
    fn engine(name: &str) -> Box<dyn Player> {
        Box::new(PerfectPlayer::new(name))
    }

    match mode {
        GameMode::SoloX => {
            let (player_x, x) = human("You");
            (player_x, engine("Computer"), Inputs { x, o: None })
        }
        GameMode::SoloO => {
            let (player_o, o) = human("You");
            (engine("Computer"), player_o, Inputs { x: None, o })
        }
        GameMode::Versus => {
            let (player_x, x) = human("Player X");
            let (player_o, o) = human("Player O");
            (player_x, player_o, Inputs { x, o })
        }
        GameMode::Demo => (
            engine("Computer X"),
            engine("Computer O"),
            Inputs { x: None, o: None },
        ),
    }
}

/// Plays one game to completion and reports what the user wants next.
async fn play_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mode: GameMode,
) -> Result<AfterGame> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (player_x, player_o, inputs) = seats(mode);

    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);
    let handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "orchestrator error");
        }
    });

    let mut app = App::new(mode);
    let result = game_loop(terminal, &mut app, &inputs, &mut event_rx).await;

    handle.abort();
    result
}

async fn game_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    inputs: &Inputs,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<AfterGame> {
    loop {
        terminal.draw(|frame| ui::draw_game(frame, app))?;

        while let Ok(game_event) = event_rx.try_recv() {
            app.handle_event(game_event);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(AfterGame::Quit),
                    KeyCode::Char('r') if !app.in_progress() => return Ok(AfterGame::Replay),
                    KeyCode::Char('m') if !app.in_progress() => return Ok(AfterGame::Menu),
                    KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                        app.set_cursor(input::move_cursor(app.cursor(), key.code));
                    }
                    KeyCode::Enter => send_selection(app, inputs, app.cursor()),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        // Digits address cells 1-9 in row-major order.
                        if let Some(coord) = c
                            .to_digit(10)
                            .and_then(|digit| digit.checked_sub(1))
                            .and_then(|index| Coord::from_index(index as usize))
                        {
                            send_selection(app, inputs, coord);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Routes a cell selection to whichever human owns the current turn.
fn send_selection(app: &App, inputs: &Inputs, coord: Coord) {
    if !app.in_progress() {
        return;
    }
    if let Some(tx) = inputs.sender_for(app.to_move()) {
        let _ = tx.send(coord);
    }
}
