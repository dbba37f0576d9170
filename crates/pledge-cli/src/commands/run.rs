use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use pledge_core::share::ShareLinks;
use pledge_core::AppConfig;
use pledge_tui::{
    app::{App, Focus, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    live,
    page::SectionKind,
    widgets::{PageWidget, PopupWidget, StatusBarWidget},
    Theme,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Share links are static for the session; build them up front
    let share_links = ShareLinks::build(&config.campaign)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle(config.campaign.title.as_str())
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.clone(), Theme::default(), share_links);

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    // Background interval driving the simulated live counter
    let (live_tx, mut live_rx) = mpsc::unbounded_channel::<()>();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(live::UPDATE_INTERVAL);
        interval.tick().await; // consume the immediate first tick
        loop {
            interval.tick().await;
            if live_tx.send(()).is_err() {
                break;
            }
        }
    });

    debug!("starting page loop");

    // Track if we need high frame rate for animations. Checked at the END
    // of each iteration to determine the NEXT iteration's tick rate.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Process any live counter ticks (non-blocking)
        while live_rx.try_recv().is_ok() {
            app.live.tick();
        }

        // Advance scroll, reveal, and counter animations
        app.update_animations();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: page + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            PageWidget::render(frame, main_layout[0], &mut app);
            StatusBarWidget::render(frame, main_layout[1], &app);

            // Render overlays on top
            match app.mode {
                Mode::Share => PopupWidget::render_share_menu(frame, &app),
                Mode::Help => PopupWidget::render_help(frame, &app.theme),
                Mode::Normal => {}
            }
        })?;

        // Handle events (faster tick rate while animations run)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(_, _) => {
                    // Geometry is recomputed on the next draw; scroll is
                    // clamped by the next update_animations()
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG && action != Action::JumpToTop {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }

        // --- page scrolling ---
        Action::ScrollLineDown => app.scroll_line_down(),
        Action::ScrollLineUp => app.scroll_line_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page(true),
        Action::ScrollHalfPageUp => app.scroll_half_page(false),
        Action::ScrollPageDown => app.scroll_full_page(true),
        Action::ScrollPageUp => app.scroll_full_page(false),
        Action::JumpToTop => {
            app.clear_pending_key();
            app.jump_to_top();
        }
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::GotoSection(index) => app.goto_section(index),

        // --- calculator ---
        Action::OpenCalculator => {
            app.focus = Focus::Calculator;
            // Bring the panel into view, like following an anchor link
            app.scroll_to_section(SectionKind::Calculator);
        }
        Action::LeaveCalculator => {
            app.focus = Focus::Page;
        }
        Action::ToggleCalcField => app.calculator.toggle_field(),
        Action::InputChar(c) => app.calculator.insert_char(c),
        Action::Backspace => app.calculator.backspace(),
        Action::DeleteChar => app.calculator.delete(),
        Action::CursorLeft => app.calculator.move_left(),
        Action::CursorRight => app.calculator.move_right(),
        Action::CursorHome => app.calculator.move_home(),
        Action::CursorEnd => app.calculator.move_end(),
        Action::PercentUp => app.calculator.adjust_percent(1),
        Action::PercentDown => app.calculator.adjust_percent(-1),

        // --- sharing ---
        Action::OpenShareMenu => {
            app.mode = Mode::Share;
        }
        Action::ShareVia(provider) => {
            let link = app.share_links.for_provider(provider).to_string();
            match open::that(&link) {
                Ok(_) => {
                    app.set_status(format!("Opening {} share...", provider.label()));
                }
                Err(e) => {
                    warn!("failed to open share link: {}", e);
                    app.set_status(format!("Failed to open browser: {}", e));
                }
            }
            app.mode = Mode::Normal;
        }
        Action::OpenCampaignUrl => {
            let url = app.config.campaign.url.clone();
            match open::that(&url) {
                Ok(_) => app.set_status("Opening page in browser..."),
                Err(e) => {
                    warn!("failed to open campaign url: {}", e);
                    app.set_status(format!("Failed to open browser: {}", e));
                }
            }
        }

        // --- overlays ---
        Action::ShowHelp => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
        }

        Action::None => {}
    }
}
