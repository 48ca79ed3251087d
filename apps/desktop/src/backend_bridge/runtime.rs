//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{ingest_image, LocalFileSource};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::debug!("backend worker ready");
            let mut reads = Vec::new();
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::ReadImage { pending, path } => {
                        let ui_tx = ui_tx.clone();
                        reads.push(tokio::spawn(async move {
                            let result = ingest_image(&LocalFileSource::new(path)).await;
                            let _ = ui_tx.send(UiEvent::ImageLoaded { pending, result });
                        }));
                    }
                }
                reads.retain(|read: &tokio::task::JoinHandle<()>| !read.is_finished());
            }

            for read in reads {
                let _ = read.await;
            }
            tracing::debug!("backend worker stopped");
        });
    })
}
