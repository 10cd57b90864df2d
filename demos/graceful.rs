//! End-to-end wind-down demo with OS signal dispatch.
//!
//! Run with: `cargo run --example graceful --features logging`
//! Then press Ctrl-C to shut down, or send SIGUSR1 to drain first:
//! `kill -USR1 <pid>`.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use winddown::{Config, Coordinator, LogWriter, ServiceError, ServiceFn, ServiceRef};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = Config::default();
    cfg.timeout = Duration::from_secs(5);
    cfg.force = false;

    let coordinator = Coordinator::builder(cfg)
        .with_subscriber(Arc::new(LogWriter::new()))
        .build()?;

    // A periodic job that honors the cancellation hint.
    coordinator.launch(|ctx: CancellationToken| async move {
        loop {
            tokio::select! {
                _ = ctx.cancelled() => break,
                _ = tokio::time::sleep(Duration::from_secs(1)) => println!("tick"),
            }
        }
    })?;

    // A service with explicit start/stop operations.
    let server: ServiceRef = ServiceFn::arc(
        "echo-server",
        |_ctx| async move {
            println!("echo-server: listening");
            Ok::<_, ServiceError>(())
        },
        |_ctx| async move {
            println!("echo-server: closed");
            Ok::<_, ServiceError>(())
        },
    );
    coordinator.track(Some(server)).await?;

    println!("running; Ctrl-C to shut down, SIGUSR1 to drain");
    coordinator.wait().await;
    Ok(())
}
