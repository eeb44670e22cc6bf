//! Worker thread owning the tokio runtime and the generation client.

use std::thread;

use client_core::GenerationClient;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker. Commands are served strictly one at a time, so
/// at most one generation request is ever in flight; each command produces
/// exactly one terminal `UiEvent`.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, server_url: String) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(%err, "failed to build backend runtime");
                let _ = ui_tx.try_send(UiEvent::Info(
                    "Reply worker failed to start; restart the app".to_string(),
                ));
                return;
            }
        };

        runtime.block_on(async move {
            let client = GenerationClient::new(server_url);
            let _ = ui_tx.try_send(UiEvent::Info("Ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::GenerateReply { request } => {
                        match client.generate_reply(&request).await {
                            Ok(reply) => {
                                debug!(reply_len = reply.len(), "generation succeeded");
                                let _ = ui_tx.try_send(UiEvent::ReplyGenerated(reply));
                            }
                            Err(err) => {
                                // Diagnostics only; the UI renders a fixed message.
                                error!(%err, "reply generation failed");
                                let _ = ui_tx.try_send(UiEvent::GenerationFailed);
                            }
                        }
                    }
                }
            }
        });
    });
}
