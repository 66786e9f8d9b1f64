use arcade::app::App;
use arcade::build_info;
use arcade::config::{self, AppConfig, CliCommand};
use arcade::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use arcade::core::game_loop::FrameClock;
use arcade::input::{InputState, KeyTracker};
use arcade::ui::canvas::{canvas_inner, fit_play_area, glyph_width_for, render_display_list};
use arcade::ui::renderer::DisplayList;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let command = match config::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'arcade --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = match command {
        CliCommand::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", config::USAGE);
            return Ok(());
        }
        CliCommand::Run(config) => config,
    };

    init_logging(&config)?;
    log::info!(
        "{} starting, target {} fps",
        build_info::version_line(),
        config.target_fps
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    // Release events need the kitty keyboard protocol
    let release_events = matches!(supports_keyboard_enhancement(), Ok(true));
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
        ))?;
        log::info!("keyboard enhancement available, tracking key releases");
    } else {
        log::info!("no key release events, using hold window");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, release_events);

    // Restore terminal even if the loop failed
    let restored = restore_terminal(&mut terminal, release_events);
    let result = first_error([result, restored]);

    match &result {
        Ok(()) => log::info!("shut down cleanly"),
        Err(e) => log::error!("terminal error: {}", e),
    }
    result
}

/// Runs every restore step even when an earlier one fails.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    release_events: bool,
) -> io::Result<()> {
    let pop_flags = if release_events {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)
            .map(|_| ())
    } else {
        Ok(())
    };
    let raw_mode = disable_raw_mode();
    let alternate_screen = terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map(|_| ());
    let cursor = terminal.show_cursor();
    first_error([pop_flags, raw_mode, alternate_screen, cursor])
}

/// The earliest error among `results`, or `Ok` when all succeeded.
fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    results.into_iter().collect()
}

/// Logs go to a file when one is given. Otherwise no logger is installed, so
/// nothing can write over the game screen.
fn init_logging(config: &AppConfig) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &AppConfig,
    release_events: bool,
) -> io::Result<()> {
    let mut app = App::default();
    let mut tracker = KeyTracker::new(release_events);
    let mut input = InputState::new();
    let mut clock = FrameClock::new(config.target_fps);
    let mut list = DisplayList::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    while app.is_running() {
        let dt = clock.begin_frame();

        // Drain every pending event without blocking
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => tracker.handle_key(key, Instant::now()),
                Event::FocusLost => tracker.clear(),
                _ => {}
            }
        }
        if tracker.quit_requested() {
            app.request_quit();
            break;
        }

        let (held, fresh) = tracker.take_frame(Instant::now());
        input.update(held, fresh);
        app.update(dt, &input);

        let title = app.title();
        terminal.draw(|frame| {
            let area = fit_play_area(frame.size(), SCREEN_WIDTH, SCREEN_HEIGHT);
            list.set_glyph_width(glyph_width_for(canvas_inner(area), SCREEN_WIDTH));
            app.render(&mut list);
            render_display_list(frame, area, &list, title);
        })?;

        clock.end_frame();
    }

    Ok(())
}
