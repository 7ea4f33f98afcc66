use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Sender;
use blizzard_core::protocol::SOCKET_PATH;
use std::path::Path;
use std::thread;

/// Runs the control socket and the config watcher on their own thread.
///
/// Neither service is needed to draw the rings, so a failure here is logged
/// and the indicator keeps spinning.
pub fn start_background_services(tx: Sender<AppEvent>) {
    let spawned = thread::Builder::new()
        .name("blizzard-services".into())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create Tokio runtime: {}", e);
                    return;
                }
            };

            clear_stale_socket(Path::new(SOCKET_PATH));

            rt.block_on(async {
                tokio::join!(
                    server::run_server(tx.clone()),
                    config::run_async_watcher(tx),
                );
            });
            log::debug!("Background services finished");
        });

    if let Err(e) = spawned {
        log::error!("Failed to start background services: {}", e);
    }
}

// a previous instance that crashed leaves its socket behind and bind() fails
fn clear_stale_socket(path: &Path) {
    if path.exists() {
        match fs_err::remove_file(path) {
            Ok(()) => log::debug!("Removed stale socket {}", path.display()),
            Err(e) => log::warn!("Could not remove stale socket: {}", e),
        }
    }
}
