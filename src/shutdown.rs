/// Resolves when the process is asked to stop (SIGINT or SIGTERM).
#[cfg(unix)]
pub async fn wait() {
    use futures::future::{select, Either};
    use std::pin::pin;
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt =
        signal(SignalKind::interrupt()).expect("failed to register SIGINT handler");
    let mut terminate =
        signal(SignalKind::terminate()).expect("failed to register SIGTERM handler");

    let interrupt = pin!(interrupt.recv());
    let terminate = pin!(terminate.recv());
    match select(interrupt, terminate).await {
        Either::Left(..) => log::info!("Received SIGINT, shutting down"),
        Either::Right(..) => log::info!("Received SIGTERM, shutting down"),
    }
}

/// Resolves when the process is asked to stop (Ctrl+C).
#[cfg(not(unix))]
pub async fn wait() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received interrupt, shutting down"),
        Err(e) => {
            // no handler means a stop request can never arrive
            log::error!("Failed to register interrupt handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_once_a_signal_arrives() {
        let mut wait = std::pin::pin!(wait());

        // the first poll installs the handlers, so the raise cannot race them
        assert!(futures::poll!(wait.as_mut()).is_pending());
        assert_eq!(unsafe { libc::raise(libc::SIGTERM) }, 0);

        wait.await;
    }
}
