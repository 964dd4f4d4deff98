use crate::err::{AppliesTo, IoErrorExt};
use crate::routes::{self, State};
use futures::future::{select, Either};
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use hyper_util::server::graceful::GracefulShutdown;
use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::pin::pin;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// A bound listener plus the state request handlers read from.
///
/// Binding and serving are split so callers own the lifecycle: bind, learn
/// the local address, then serve until a shutdown future resolves.
pub struct Server {
    listener: TcpListener,
    state: Arc<State>,
}

impl Server {
    pub async fn bind(addr: SocketAddr, state: State) -> Result<Self, io::Error> {
        log::info!("Binding to: {}", addr);
        let listener = TcpListener::bind(addr).await?;
        Ok(Server {
            listener,
            state: Arc::new(state),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, io::Error> {
        self.listener.local_addr()
    }

    /// Serve connections until `shutdown` resolves, then stop accepting and
    /// drain in-flight exchanges before returning.
    pub async fn serve(self, shutdown: impl Future<Output = ()>) -> Result<(), io::Error> {
        let Server { listener, state } = self;
        let builder = auto::Builder::new(TokioExecutor::new());
        let graceful = GracefulShutdown::new();
        let mut shutdown = pin!(shutdown);

        loop {
            let stream = {
                let next = pin!(accept(&listener));
                match select(next, shutdown.as_mut()).await {
                    Either::Left((accepted, _)) => accepted?,
                    Either::Right(((), _)) => break,
                }
            };

            let state = Arc::clone(&state);
            let serve = service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { Ok::<_, Infallible>(routes::respond_to_request(req, &state).await) }
            });

            let conn = builder.serve_connection(TokioIo::new(stream), serve);
            let conn = graceful.watch(conn.into_owned());
            tokio::spawn(async move {
                if let Err(e) = conn.await {
                    log::error!("Error serving connection: {}", e);
                }
            });
        }

        // close the socket first so new connections are refused while
        // in-flight responses finish
        drop(listener);
        log::info!("Draining in-flight connections");
        graceful.shutdown().await;

        Ok(())
    }
}

async fn accept(listener: &TcpListener) -> Result<TcpStream, io::Error> {
    loop {
        match listener.accept().await {
            Ok((stream, _addr)) => {
                stream.set_nodelay(true)?;
                return Ok(stream);
            }
            Err(e) => match e.applies_to() {
                AppliesTo::Connection => log::debug!("Aborted connection dropped: {}", e),
                AppliesTo::Listener => return Err(e),
            },
        }
    }
}
