//! Terminal UI for revbot.
//!
//! Edit or paste code on the left, request a review or an auto-fix, read
//! severity-tagged results on the right. All requests go through the local
//! proxy service; see `revbot-server`.

pub mod app;
pub mod editor;
pub mod event;
pub mod services;
pub mod terminal;
pub mod ui;

use anyhow::Result;
use revbot_api::ApiClient;
use tokio::sync::mpsc;

use crate::app::App;
use crate::event::spawn_input_task;

/// Run the TUI until the user quits. The terminal is restored on every exit
/// path; panics are covered by the hook installed before init.
pub async fn run(service_url: String) -> Result<()> {
    let client = ApiClient::new(service_url);

    terminal::install_panic_hook();
    let mut tui = terminal::init()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_task(tx.clone());
    let mut app = App::new(client, tx);

    let run_result = loop {
        if let Err(err) = tui.draw(|f| ui::render(f, &mut app.state)) {
            break Err(err.into());
        }
        // Draw once per event; ticks keep the spinner and toasts moving.
        let Some(event) = rx.recv().await else {
            break Ok(());
        };
        app.handle(event);
        if app.state.should_quit {
            break Ok(());
        }
    };

    terminal::restore()?;
    run_result
}
