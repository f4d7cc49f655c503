use std::{sync::Arc, time::Duration};

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, time::interval};

use crate::{data::LocationProvider, domain::weather::Location};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    LocationResolved(Location),
    LocationFailed(String),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Periodic redraw so background fetch and search results show up without input.
pub fn start_frame_task(tx: mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(5);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

pub fn spawn_location_lookup(tx: mpsc::Sender<AppEvent>, locator: Arc<dyn LocationProvider>) {
    tokio::spawn(async move {
        let event = match locator.get_user_location().await {
            Ok(location) => AppEvent::LocationResolved(location),
            Err(err) => AppEvent::LocationFailed(err.to_string()),
        };
        let _ = tx.send(event).await;
    });
}
