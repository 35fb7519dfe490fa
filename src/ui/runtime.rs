use std::time::Duration;

use anyhow::Context;

use crate::api::{ApiClient, FetchWorker, ProductQuery};
use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::controls::handle_mouse;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config, initial_query: ProductQuery) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api);
    let worker = FetchWorker::new(client, &config.cache);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("building async runtime")?;

    let shutdown = ShutdownCoordinator::new();
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate, shutdown.handle());

    // Fetch worker: commands in, outcomes back on the event channel.
    let (fetch_tx, mut fetch_rx) = tokio::sync::mpsc::channel(16);
    let outcome_tx = events.sender();
    runtime.spawn(async move {
        while let Some(command) = fetch_rx.recv().await {
            let outcome = worker.handle(command).await;
            if outcome_tx.send(AppEvent::Fetch(outcome)).is_err() {
                break;
            }
        }
    });

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, initial_query);
    app.set_event_sender(events.sender());
    app.set_fetch_sender(fetch_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.request_categories();
    app.request_products();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Settle { generation }) => app.on_settle(generation),
            Ok(AppEvent::Fetch(outcome)) => app.on_fetch(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
