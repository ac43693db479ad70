//! Event loop for the interactive form.
//!
//! Single-threaded: a submission blocks the loop until the service answers or
//! the transport fails. The busy frame is drawn before the call starts.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use log::debug;

use super::input::map_key_event;
use super::model::{FormCmd, FormModel, FormMsg};
use super::render::render;
use super::terminal_guard::TerminalGuard;
use super::update::update;
use crate::core::config::ApiConfig;
use crate::predict::PredictionClient;
use crate::present::Theme;

/// ANSI escape sequences for screen control.
const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Everything the form session needs from configuration.
#[derive(Debug, Clone)]
pub struct FormRuntimeConfig {
    pub api: ApiConfig,
    pub theme: Theme,
}

/// Run the interactive form until the user quits.
///
/// # Errors
/// Returns I/O errors from the terminal layer. Submission failures are
/// rendered in the form, never returned.
pub fn run_form(config: &FormRuntimeConfig) -> io::Result<()> {
    let _guard = TerminalGuard::new()?;
    let client = PredictionClient::from_config(&config.api);
    let mut model = FormModel::new(client.endpoint(), TerminalGuard::terminal_size());
    let mut stdout = io::stdout();

    loop {
        draw(&mut stdout, &model, &config.theme)?;
        if model.quit {
            break;
        }

        let cmd = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                update(&mut model, FormMsg::Action(map_key_event(key)))
            }
            Event::Resize(cols, rows) => update(&mut model, FormMsg::Resize { cols, rows }),
            _ => FormCmd::None,
        };
        execute_cmd(
            &mut model,
            &client,
            cmd,
            &mut stdout,
            &config.theme,
            &mut queued_events,
        )?;
    }

    // TerminalGuard drop restores the terminal.
    Ok(())
}

/// Bridge between the pure state machine and the network.
///
/// `queued` yields whatever input piled up while the request blocked. Keys
/// from that backlog are dropped so a repeated Enter cannot start a second
/// request; resizes are still applied.
fn execute_cmd(
    model: &mut FormModel,
    client: &PredictionClient,
    cmd: FormCmd,
    out: &mut impl Write,
    theme: &Theme,
    queued: &mut impl FnMut() -> io::Result<Vec<Event>>,
) -> io::Result<()> {
    match cmd {
        FormCmd::None => {}
        FormCmd::Quit => model.quit = true,
        FormCmd::Submit(request) => {
            draw(out, model, theme)?;
            debug!("dispatching prediction request for city {:?}", request.city);
            let result = client.send(&request);

            let backlog = queued()?;
            let mut dropped = 0usize;
            for event in backlog {
                match event {
                    Event::Resize(cols, rows) => {
                        update(model, FormMsg::Resize { cols, rows });
                    }
                    _ => dropped += 1,
                }
            }
            if dropped > 0 {
                debug!("discarded {dropped} input events received during the request");
            }

            let next = update(model, FormMsg::Completed(Box::new(result)));
            execute_cmd(model, client, next, out, theme, queued)?;
        }
    }
    Ok(())
}

/// Everything already waiting in the terminal input queue.
fn queued_events() -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}

fn draw(out: &mut impl Write, model: &FormModel, theme: &Theme) -> io::Result<()> {
    let frame = render(model, theme);
    out.write_all(CLEAR_SCREEN)?;
    out.write_all(CURSOR_HOME)?;
    out.write_all(raw_mode_lines(&frame).as_bytes())?;
    out.flush()
}

/// Raw mode disables output post-processing, so each line needs an explicit
/// carriage return.
fn raw_mode_lines(frame: &str) -> String {
    frame.replace('\n', "\r\n")
}
