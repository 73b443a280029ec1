#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

use stackfall::app::{App, AppResult};
use stackfall::config::{Config, loader};
use stackfall::{input, ui};

const LOG_PATH: &str = "stackfall.log";

// How long to wait for a key before checking the timers again
const INPUT_POLL: Duration = Duration::from_millis(5);

fn main() -> AppResult<()> {
    // The terminal belongs to the UI, so log lines go to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_PATH)
        .with_context(|| format!("failed to create {LOG_PATH}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting stackfall");

    let config = match loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            Config::default()
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
        return Err(err);
    }

    info!("Bye");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> AppResult<()> {
    let idle_interval = app.config.idle_decoration_interval();
    let mut last_tick = Instant::now();
    let mut last_idle = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|f| ui::render(f, &app))?;
            dirty = false;
        }

        if app.should_quit {
            return Ok(());
        }

        // Ticks and key presses are handled on this one thread, never interleaved
        if last_tick.elapsed() >= app.game.tick_interval() {
            last_tick = Instant::now();
            dirty |= app.on_tick();
        }

        if last_idle.elapsed() >= idle_interval {
            last_idle = Instant::now();
            dirty |= app.on_idle();
        }

        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) => {
                    debug!("Key event: {key:?}");
                    if let Some(command) = input::map_key(key) {
                        let was_running = app.game.is_running();
                        dirty |= app.handle_command(command);
                        // Resuming restarts the gravity clock
                        if !was_running && app.game.is_running() {
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }
    }
}
