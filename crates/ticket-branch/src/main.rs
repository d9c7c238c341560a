use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste,
            EnableFocusChange, Event, KeyEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tb_config::AppConfig;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, FlowAction, GlobalAction};
use middleware::{
    flow_middleware::FlowMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware, prompt_middleware::PromptMiddleware,
    selector_middleware::SelectorMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting ticket-branch, logging to {}", log_file.display());

    let config = Arc::new(AppConfig::load());

    let mut store = Store::new(AppState::new(config.clone()));

    // Middleware runs in insertion order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(PromptMiddleware::new()));
    store.add_middleware(Box::new(SelectorMiddleware::new()));
    store.add_middleware(Box::new(FlowMiddleware::new(&config)?));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableFocusChange,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.dispatch(Action::Flow(FlowAction::Start));
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("ticket-branch failed: {:#}", err);
    }
    log::info!("Exiting ticket-branch");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        // Results of background work
        store.process_pending();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::FocusLost => store.dispatch(Action::Global(GlobalAction::FocusLost)),
                Event::Paste(text) => store.dispatch(Action::Global(GlobalAction::Pasted(text))),
                _ => {}
            }
        }
    }

    Ok(())
}
