mod panes;
mod setup;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use haptica_core::{dispatch_action, Action, AppState, Catalog, Config};
use panes::{EffectListPane, HelpPane};
use ui::{keybindings, InputEvent, Keymap, Pane};

fn main() -> io::Result<()> {
    let config = Config::load();
    setup::init_logging(&config);

    let backend = config.backend.backend();
    let catalog = match Catalog::build(backend.as_ref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            // Binding happens before the terminal is taken over, so this may
            // still print.
            eprintln!("haptica: failed to bind haptic generators: {}", e);
            std::process::exit(1);
        }
    };
    let mut state = AppState::new(catalog, &config);

    // The cursor starts on row 0: arm it so the first Enter is low-latency.
    if let Err(e) = state.catalog.prepare_row(0) {
        log::error!("initial prepare: {}", e);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let crossterm_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(crossterm_backend)?;

    let result = run(&mut terminal, &mut state);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> io::Result<()> {
    let mut keymaps = keybindings::load_keymaps();
    let list_keymap = keymaps.remove("effect_list").unwrap_or_else(Keymap::new);
    let mut help_pane = HelpPane::new(
        keymaps.remove("help").unwrap_or_else(Keymap::new),
        &list_keymap,
    );
    let mut list_pane = EffectListPane::new(list_keymap);
    let mut active: &'static str = list_pane.id();

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            list_pane.render(area, buf, state);
            if active == help_pane.id() {
                help_pane.render(area, buf, state);
            }
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(input) = InputEvent::from_crossterm(key) else {
            continue;
        };

        let action = if active == help_pane.id() {
            help_pane.handle_input(&input, state)
        } else {
            list_pane.handle_input(&input, state)
        };

        match action {
            Action::SwitchPane(id) => active = id,
            action => {
                let result = dispatch_action(&action, state);
                if result.status.is_some() {
                    state.status = result.status;
                }
                if result.quit {
                    return Ok(());
                }
            }
        }
    }
}
