use crate::config::{Config, SecureString};
use crate::gemini::GeminiClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the terminal UI until the user quits.
///
/// The event loop is the only writer of the session; transformation calls
/// run on a tokio runtime and report back as [`AppEvent::TransformSettled`].
pub fn run(config: &Config, api_key: Option<SecureString>) -> io::Result<()> {
    let client = GeminiClient::new(&config.gemini, api_key)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let client = Arc::new(client);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config.download.dir.clone(), client.is_configured(), client.model());

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let action = match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => {
                app.insert_text(&text);
                InputAction::None
            }
            Ok(AppEvent::Tick) => {
                app.on_tick();
                InputAction::None
            }
            Ok(AppEvent::Resize(_, _)) => InputAction::None,
            Ok(AppEvent::TransformSettled { ticket, outcome }) => {
                app.on_transform_settled(ticket, outcome);
                InputAction::None
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => InputAction::None,
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        };

        if action == InputAction::Generate {
            if let Some(ticket) = app.begin_generate() {
                let client = Arc::clone(&client);
                let tx = events.sender();
                runtime.spawn(async move {
                    let outcome = ticket.run(client.as_ref()).await;
                    let _ = tx.send(AppEvent::TransformSettled {
                        ticket: ticket.id(),
                        outcome,
                    });
                });
            }
        }
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
