//! Backend main event loop.
//!
//! Actions are handled strictly one at a time, so ingestion batches never
//! overlap even when the UI queues several drops in a row.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tracing::{error, info};

use super::handlers::{self, ChannelNotifier, ChannelStyles};
use crate::library::{BusyFlag, FontLibrary, IngestOptions};
use crate::protocol::{BackendAction, GuiEvent};

/// Run the backend event loop on a tokio runtime
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    busy: BusyFlag,
    options: IngestOptions,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let notifier = Arc::new(ChannelNotifier::new(event_tx.clone()));
        let styles = Arc::new(ChannelStyles::new(event_tx.clone()));
        let mut library = FontLibrary::new(notifier, styles)
            .with_busy_flag(busy)
            .with_options(options);

        loop {
            match action_rx.try_recv() {
                Ok(action) => {
                    if !handlers::handle_backend_action(action, &mut library, &event_tx).await {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => {
                    // Nothing queued, sleep a bit to avoid busy-looping
                    tokio::time::sleep(Duration::from_millis(20)).await;
                }
                Err(TryRecvError::Disconnected) => break,
            }
        }
        info!(fonts = library.fonts().len(), "Backend stopped");
    });
}
