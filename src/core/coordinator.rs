//! # Coordinator: two-phase graceful wind-down for concurrent components.
//!
//! The [`Coordinator`] owns two independent cancellation scopes, the task
//! tracker, and the wind-down configuration. Components register through
//! [`Coordinator::launch`] (background tasks) and [`Coordinator::track`]
//! (services with explicit start/stop), and the coordinator drives the
//! two-phase protocol when an operator signal or a programmatic call asks
//! for it.
//!
//! ## High-level architecture
//! ```text
//! Registration (while the runtime scope is live):
//!   launch(task) ──► tracker token ──► spawned task(child runtime token)
//!   track(svc)   ──► tracker token ──► waiter: runtime cancelled ─► svc.stop(winddown child)
//!                                      then svc.start(child runtime token) (errors returned)
//!
//! Wind-down (phase 1 → phase 2):
//!   drain()/shutdown()
//!     └─► runtime.cancel()          → every waiter fires, launched tasks see the hint
//!     └─► tracker.close()
//!     └─► observer: tracker.wait() ─► publish AllTasksCompleted ─► (shutdown only) winddown.cancel()
//!
//!   shutdown() resolver race:
//!     ├─ winddown cancelled first  → publish ShutdownCompleted
//!     └─ cfg.timeout elapses first → winddown.cancel(), publish GraceExceeded,
//!                                    if cfg.force: exit_fn(EXIT_CODE_SIGTERM)
//!
//!   wait()/completion(): runtime cancelled, then winddown cancelled
//! ```
//!
//! Per wind-down episode the coordinator moves
//! `Running → Draining → {Completed | TimedOut}`; both scopes are one-shot,
//! so re-entering `drain`/`shutdown` past `Running` never restarts the episode.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::config::Config;
use crate::core::builder::CoordinatorBuilder;
use crate::error::CoordinatorError;
use crate::events::{Bus, Event, EventKind};
use crate::services::ServiceRef;

/// Exit status reported on forced termination: 128 + SIGTERM (15), the POSIX
/// convention for "terminated by signal". Lets orchestrators tell a
/// self-imposed unclean shutdown apart from an external kill.
pub const EXIT_CODE_SIGTERM: i32 = 143;

/// Pluggable process-termination seam; defaults to [`std::process::exit`].
pub(crate) type ExitFn = Arc<dyn Fn(i32) + Send + Sync>;

/// Graceful-lifecycle coordinator for a process hosting concurrent components.
///
/// Construct exactly one per process with [`Coordinator::new`] (OS signals
/// wired) or [`Coordinator::builder`] (custom signal source, subscribers,
/// exit seam), then thread clones to collaborators — all fields are cheap
/// handles, cloning shares the same scopes and tracker.
#[derive(Clone)]
pub struct Coordinator {
    /// Live while the process accepts and performs work; cancelling begins
    /// phase 1 of wind-down. Cancellation is cooperative for launched tasks.
    runtime: CancellationToken,
    /// Live while wind-down itself is in progress; cancelled by exactly one
    /// of {tracker drained, grace timeout}.
    winddown: CancellationToken,
    /// Counting wait-group for in-flight tasks and service waiters.
    tracker: TaskTracker,
    /// Lifecycle event bus (the observability seam).
    bus: Bus,
    /// Immutable wind-down configuration.
    cfg: Config,
    /// Process-termination seam.
    exit_fn: ExitFn,
    /// Elects the single shutdown call that runs the grace race, so
    /// concurrent calls produce one completion event and at most one exit.
    resolved: Arc<AtomicBool>,
}

impl Coordinator {
    /// Creates a coordinator with OS signal dispatch and default settings.
    ///
    /// Equivalent to `Coordinator::builder(cfg).build()`. Must be called
    /// inside a tokio runtime; the signal dispatcher is spawned alongside
    /// the coordinator and lives as long as it does.
    pub fn new(cfg: Config) -> Result<Self, CoordinatorError> {
        CoordinatorBuilder::new(cfg).build()
    }

    /// Returns a builder for a coordinator with optional features.
    pub fn builder(cfg: Config) -> CoordinatorBuilder {
        CoordinatorBuilder::new(cfg)
    }

    pub(crate) fn new_internal(cfg: Config, bus: Bus, exit_fn: ExitFn) -> Self {
        Self {
            runtime: CancellationToken::new(),
            winddown: CancellationToken::new(),
            tracker: TaskTracker::new(),
            bus,
            cfg,
            exit_fn,
            resolved: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a child of the runtime scope for cancellation observation.
    ///
    /// Use this for collaborators that need to see phase-1 cancellation but
    /// must not themselves be tracked. Cancelling the returned token affects
    /// only that child, never the coordinator.
    pub fn runtime_token(&self) -> CancellationToken {
        self.runtime.child_token()
    }

    /// Number of tasks and service waiters currently tracked as in-flight.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Launches a tracked background task under the runtime scope.
    ///
    /// The task receives a child runtime token as a cooperative cancellation
    /// hint; the coordinator never terminates the task's internal logic. The
    /// tracked count is incremented before the task starts and released when
    /// it ends, however it ends.
    ///
    /// Returns [`CoordinatorError::ScopeClosed`] if the runtime scope is
    /// already cancelled.
    pub fn launch<F, Fut>(&self, task: F) -> Result<(), CoordinatorError>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.runtime.is_cancelled() {
            return Err(CoordinatorError::ScopeClosed);
        }

        let token = self.tracker.token();
        self.bus.publish(Event::new(EventKind::TaskLaunched));

        let fut = task(self.runtime.child_token());
        tokio::spawn(async move {
            let _token = token;
            fut.await;
        });

        Ok(())
    }

    /// Attaches a service to the coordinator's lifecycle.
    ///
    /// `None` is a defined no-op success, so callers with sometimes-nothing
    /// to attach keep a uniform registration path; the tracked count still
    /// round-trips symmetrically.
    ///
    /// For `Some(service)`: the tracked count is incremented, a waiter is
    /// spawned that blocks until the runtime scope cancels and then invokes
    /// `stop` with a child of the shutdown scope (stop errors are published,
    /// never returned), and `start` is invoked with a child runtime token.
    /// A start error is returned as [`CoordinatorError::StartFailed`];
    /// the coordinator does not retry starts.
    ///
    /// Returns [`CoordinatorError::ScopeClosed`] if the runtime scope is
    /// already cancelled.
    pub async fn track(&self, service: Option<ServiceRef>) -> Result<(), CoordinatorError> {
        if self.runtime.is_cancelled() {
            return Err(CoordinatorError::ScopeClosed);
        }

        let token = self.tracker.token();
        let Some(service) = service else {
            drop(token);
            return Ok(());
        };

        let runtime = self.runtime.clone();
        let stop_scope = self.winddown.child_token();
        let bus = self.bus.clone();
        let waited = Arc::clone(&service);
        tokio::spawn(async move {
            let _token = token;
            runtime.cancelled().await;
            if let Err(err) = waited.stop(stop_scope).await {
                bus.publish(
                    Event::new(EventKind::ServiceStopFailed)
                        .with_service(waited.name().to_string())
                        .with_reason(err.as_message()),
                );
            }
        });

        self.bus.publish(
            Event::new(EventKind::ServiceStarting).with_service(service.name().to_string()),
        );
        service
            .start(self.runtime.child_token())
            .await
            .map_err(|source| CoordinatorError::StartFailed { source })
    }

    /// Initiates a graceful drain without termination.
    ///
    /// Cancels the runtime scope (phase 1 only) and observes for all tracked
    /// work to finish, but leaves the shutdown scope live and never forces
    /// exit. Use this to stop accepting new connections or long-running
    /// tasks while the process stays alive.
    pub fn drain(&self) {
        self.bus.publish(Event::new(EventKind::DrainRequested));
        self.runtime.cancel();
        self.tracker.close();
        self.spawn_drained_observer(None);
    }

    /// Initiates a graceful shutdown.
    ///
    /// Cancels the runtime scope, then races "all tracked work drained"
    /// against the configured grace timeout. The graceful outcome cancels
    /// the shutdown scope and publishes completion; the timeout outcome
    /// force-cancels the shutdown scope, publishes the grace violation,
    /// returns [`CoordinatorError::GraceTimeout`], and — when
    /// [`Config::force`] is set — terminates the process through the exit
    /// seam with [`EXIT_CODE_SIGTERM`].
    ///
    /// Idempotent: only the first call runs the race; concurrent or repeat
    /// calls re-enter the same (one-shot) cancellations, await the same
    /// outcome, and return `Ok`.
    pub async fn shutdown(&self) -> Result<(), CoordinatorError> {
        self.bus.publish(Event::new(EventKind::ShutdownRequested));
        self.runtime.cancel();
        self.tracker.close();

        if self.resolved.swap(true, AtomicOrdering::SeqCst) {
            self.winddown.cancelled().await;
            return Ok(());
        }

        self.spawn_drained_observer(Some(self.winddown.clone()));

        let outcome = tokio::select! {
            _ = self.winddown.cancelled() => {
                self.bus.publish(Event::new(EventKind::ShutdownCompleted));
                Ok(())
            }
            _ = tokio::time::sleep(self.cfg.timeout) => {
                let pending = self.tracker.len();
                self.winddown.cancel();
                self.bus.publish(
                    Event::new(EventKind::GraceExceeded)
                        .with_reason(format!("pending={pending}")),
                );
                Err(CoordinatorError::GraceTimeout {
                    timeout: self.cfg.timeout,
                    pending,
                })
            }
        };

        if outcome.is_err() && self.cfg.force {
            self.bus.publish(Event::new(EventKind::ForcedExit));
            (self.exit_fn)(EXIT_CODE_SIGTERM);
        }

        outcome
    }

    /// Blocks until both scopes have been cancelled.
    ///
    /// Use this as the final call of the process entry point: it returns only
    /// after phase 1 (runtime cancelled) and phase 2 (shutdown scope
    /// cancelled, gracefully or by timeout) have both happened.
    pub async fn wait(&self) {
        self.runtime.cancelled().await;
        self.winddown.cancelled().await;
    }

    /// Returns an owned future with the same readiness as [`Coordinator::wait`].
    ///
    /// Becomes ready only after the runtime scope is cancelled *and* the
    /// shutdown scope is subsequently cancelled; handy for composing into
    /// `select!` arms without borrowing the coordinator.
    pub fn completion(&self) -> impl Future<Output = ()> + Send + 'static {
        let runtime = self.runtime.clone();
        let winddown = self.winddown.clone();
        async move {
            runtime.cancelled().await;
            winddown.cancelled().await;
        }
    }

    pub(crate) fn publish(&self, ev: Event) {
        self.bus.publish(ev);
    }

    /// Spawns the drained observer: waits for the tracked count to reach
    /// zero, publishes completion of all tasks, and optionally cancels the
    /// shutdown scope (the `shutdown()` path; `drain()` passes `None`).
    fn spawn_drained_observer(&self, cancel: Option<CancellationToken>) {
        let tracker = self.tracker.clone();
        let bus = self.bus.clone();
        tokio::spawn(async move {
            tracker.wait().await;
            bus.publish(Event::new(EventKind::AllTasksCompleted));
            if let Some(token) = cancel {
                token.cancel();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::mpsc;
    use tokio::time::sleep;

    use crate::core::signals::SignalEvent;
    use crate::error::ServiceError;
    use crate::services::{ServiceFn, ServiceRef};
    use crate::subscribers::Subscribe;

    struct Recorder {
        kinds: Mutex<Vec<EventKind>>,
    }

    impl Recorder {
        fn arc() -> Arc<Self> {
            Arc::new(Self {
                kinds: Mutex::new(Vec::new()),
            })
        }

        fn count(&self, kind: EventKind) -> usize {
            self.kinds.lock().unwrap().iter().filter(|k| **k == kind).count()
        }
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, event: &Event) {
            self.kinds.lock().unwrap().push(event.kind);
        }
    }

    fn config(timeout: Duration, force: bool) -> Config {
        Config { timeout, force }
    }

    fn build(cfg: Config) -> (Coordinator, Arc<AtomicUsize>, Arc<Mutex<Vec<i32>>>) {
        build_with(cfg, Vec::new())
    }

    fn build_with(
        cfg: Config,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> (Coordinator, Arc<AtomicUsize>, Arc<Mutex<Vec<i32>>>) {
        let exits = Arc::new(AtomicUsize::new(0));
        let codes = Arc::new(Mutex::new(Vec::new()));
        let (e, c) = (Arc::clone(&exits), Arc::clone(&codes));
        let coordinator = Coordinator::builder(cfg)
            .without_signals()
            .with_subscribers(subscribers)
            .with_exit_fn(move |code| {
                e.fetch_add(1, AtomicOrdering::SeqCst);
                c.lock().unwrap().push(code);
            })
            .build()
            .unwrap();
        (coordinator, exits, codes)
    }

    fn slow_stop_service(stop_for: Duration, stopped: Arc<AtomicUsize>) -> ServiceRef {
        ServiceFn::arc(
            "slow-stop",
            |_ctx| async move { Ok::<(), ServiceError>(()) },
            move |_ctx| {
                let stopped = Arc::clone(&stopped);
                async move {
                    sleep(stop_for).await;
                    stopped.fetch_add(1, AtomicOrdering::SeqCst);
                    Ok::<(), ServiceError>(())
                }
            },
        )
    }

    /// Lets spawned waiters, observers, and subscriber listeners run.
    async fn settle() {
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_blocks_until_tracked_service_stops() {
        let (coordinator, exits, _) = build(config(Duration::from_secs(2), true));
        let stopped = Arc::new(AtomicUsize::new(0));
        coordinator
            .track(Some(slow_stop_service(
                Duration::from_secs(1),
                Arc::clone(&stopped),
            )))
            .await
            .unwrap();
        assert_eq!(coordinator.pending(), 1);

        coordinator.shutdown().await.unwrap();
        coordinator.wait().await;

        assert_eq!(stopped.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(coordinator.pending(), 0);
        assert_eq!(exits.load(AtomicOrdering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_launched_task_runs_to_natural_completion() {
        let (coordinator, _, _) = build(config(Duration::from_secs(5), false));
        let finished = Arc::new(AtomicUsize::new(0));
        let f = Arc::clone(&finished);
        coordinator
            .launch(move |_ctx| async move {
                sleep(Duration::from_millis(200)).await;
                f.fetch_add(1, AtomicOrdering::SeqCst);
            })
            .unwrap();
        assert_eq!(coordinator.pending(), 1);

        coordinator.shutdown().await.unwrap();
        assert_eq!(finished.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(coordinator.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_registration_after_shutdown_is_scope_closed() {
        let (coordinator, _, _) = build(config(Duration::from_secs(1), false));
        coordinator.shutdown().await.unwrap();

        for _ in 0..3 {
            let launched = coordinator.launch(|_ctx| async {});
            assert!(matches!(launched, Err(CoordinatorError::ScopeClosed)));
            let tracked = coordinator.track(None).await;
            assert!(matches!(tracked, Err(CoordinatorError::ScopeClosed)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_registration_after_drain_is_scope_closed() {
        let (coordinator, _, _) = build(config(Duration::from_secs(1), false));
        coordinator.drain();

        let launched = coordinator.launch(|_ctx| async {});
        assert!(matches!(launched, Err(CoordinatorError::ScopeClosed)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_track_none_is_noop_with_symmetric_count() {
        let (coordinator, _, _) = build(config(Duration::from_secs(1), false));
        coordinator.track(None).await.unwrap();
        assert_eq!(coordinator.pending(), 0);

        coordinator.shutdown().await.unwrap();
        coordinator.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_error_is_propagated() {
        let (coordinator, _, _) = build(config(Duration::from_secs(1), false));
        let service: ServiceRef = ServiceFn::arc(
            "wont-start",
            |_ctx| async move { Err::<(), ServiceError>(ServiceError::fail("bind: address in use")) },
            |_ctx| async move { Ok::<(), ServiceError>(()) },
        );

        let tracked = coordinator.track(Some(service)).await;
        assert!(matches!(
            tracked,
            Err(CoordinatorError::StartFailed { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_error_is_published_not_propagated() {
        let recorder = Recorder::arc();
        let (coordinator, _, _) = build_with(
            config(Duration::from_secs(1), false),
            vec![recorder.clone() as Arc<dyn Subscribe>],
        );
        let service: ServiceRef = ServiceFn::arc(
            "bad-stop",
            |_ctx| async move { Ok::<(), ServiceError>(()) },
            |_ctx| async move { Err::<(), ServiceError>(ServiceError::fail("already closed")) },
        );
        coordinator.track(Some(service)).await.unwrap();

        coordinator.shutdown().await.unwrap();
        coordinator.wait().await;
        settle().await;

        assert_eq!(recorder.count(EventKind::ServiceStopFailed), 1);
        assert_eq!(recorder.count(EventKind::ShutdownCompleted), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_grace_timeout_forces_exit_with_sigterm_code() {
        let (coordinator, exits, codes) = build(config(Duration::from_millis(100), true));
        let stopped = Arc::new(AtomicUsize::new(0));
        coordinator
            .track(Some(slow_stop_service(
                Duration::from_secs(60),
                Arc::clone(&stopped),
            )))
            .await
            .unwrap();

        let outcome = coordinator.shutdown().await;
        assert!(matches!(
            outcome,
            Err(CoordinatorError::GraceTimeout { pending: 1, .. })
        ));
        assert_eq!(exits.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(codes.lock().unwrap().as_slice(), &[EXIT_CODE_SIGTERM]);

        // The shutdown scope was force-cancelled, so wait() still returns.
        coordinator.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_graceful_completion_never_invokes_exit() {
        let (coordinator, exits, _) = build(config(Duration::from_secs(2), true));
        let stopped = Arc::new(AtomicUsize::new(0));
        coordinator
            .track(Some(slow_stop_service(
                Duration::from_secs(1),
                Arc::clone(&stopped),
            )))
            .await
            .unwrap();

        coordinator.shutdown().await.unwrap();
        assert_eq!(exits.load(AtomicOrdering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_grace_timeout_without_force_only_reports() {
        let (coordinator, exits, _) = build(config(Duration::from_millis(50), false));
        let stopped = Arc::new(AtomicUsize::new(0));
        coordinator
            .track(Some(slow_stop_service(
                Duration::from_secs(60),
                Arc::clone(&stopped),
            )))
            .await
            .unwrap();

        let outcome = coordinator.shutdown().await;
        assert!(matches!(outcome, Err(CoordinatorError::GraceTimeout { .. })));
        assert_eq!(exits.load(AtomicOrdering::SeqCst), 0);
        coordinator.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_shutdown_resolves_once() {
        let recorder = Recorder::arc();
        let (coordinator, _, _) = build_with(
            config(Duration::from_secs(1), false),
            vec![recorder.clone() as Arc<dyn Subscribe>],
        );
        let other = coordinator.clone();

        let (a, b) = tokio::join!(coordinator.shutdown(), other.shutdown());
        assert!(a.is_ok());
        assert!(b.is_ok());
        settle().await;

        assert_eq!(recorder.count(EventKind::ShutdownCompleted), 1);
        assert_eq!(recorder.count(EventKind::GraceExceeded), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_shutdown_forces_exit_at_most_once() {
        let recorder = Recorder::arc();
        let (coordinator, exits, _) = build_with(
            config(Duration::from_millis(50), true),
            vec![recorder.clone() as Arc<dyn Subscribe>],
        );
        let stopped = Arc::new(AtomicUsize::new(0));
        coordinator
            .track(Some(slow_stop_service(
                Duration::from_secs(60),
                Arc::clone(&stopped),
            )))
            .await
            .unwrap();
        let other = coordinator.clone();

        let _ = tokio::join!(coordinator.shutdown(), other.shutdown());
        settle().await;

        assert_eq!(exits.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(recorder.count(EventKind::GraceExceeded), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_stops_services_but_wait_still_blocks() {
        let recorder = Recorder::arc();
        let (coordinator, exits, _) = build_with(
            config(Duration::from_secs(5), true),
            vec![recorder.clone() as Arc<dyn Subscribe>],
        );
        let stopped = Arc::new(AtomicUsize::new(0));
        coordinator
            .track(Some(slow_stop_service(
                Duration::from_millis(10),
                Arc::clone(&stopped),
            )))
            .await
            .unwrap();

        coordinator.drain();
        sleep(Duration::from_millis(100)).await;

        // Phase 1 happened: the service was stopped and the drained
        // observer reported, but the shutdown scope is still live.
        assert_eq!(stopped.load(AtomicOrdering::SeqCst), 1);
        settle().await;
        assert_eq!(recorder.count(EventKind::AllTasksCompleted), 1);
        let waited = tokio::time::timeout(Duration::from_millis(500), coordinator.wait()).await;
        assert!(waited.is_err());
        assert_eq!(exits.load(AtomicOrdering::SeqCst), 0);

        // An explicit shutdown finishes phase 2.
        coordinator.shutdown().await.unwrap();
        coordinator.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_future_is_two_phase() {
        let (coordinator, _, _) = build(config(Duration::from_secs(1), false));
        let completion = coordinator.completion();

        coordinator.drain();
        let pending = tokio::time::timeout(Duration::from_millis(100), completion).await;
        assert!(pending.is_err());

        coordinator.shutdown().await.unwrap();
        coordinator.completion().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatcher_drain_then_terminate() {
        let (tx, rx) = mpsc::channel(8);
        let exits = Arc::new(AtomicUsize::new(0));
        let e = Arc::clone(&exits);
        let coordinator = Coordinator::builder(config(Duration::from_secs(1), false))
            .with_signal_source(rx)
            .with_exit_fn(move |_code| {
                e.fetch_add(1, AtomicOrdering::SeqCst);
            })
            .build()
            .unwrap();
        let stopped = Arc::new(AtomicUsize::new(0));
        coordinator
            .track(Some(slow_stop_service(
                Duration::from_millis(10),
                Arc::clone(&stopped),
            )))
            .await
            .unwrap();

        tx.send(SignalEvent::Drain).await.unwrap();
        sleep(Duration::from_millis(100)).await;
        assert_eq!(stopped.load(AtomicOrdering::SeqCst), 1);
        assert!(matches!(
            coordinator.launch(|_ctx| async {}),
            Err(CoordinatorError::ScopeClosed)
        ));

        // The dispatcher kept listening, so a termination still shuts down.
        tx.send(SignalEvent::Terminate).await.unwrap();
        coordinator.wait().await;
        assert_eq!(exits.load(AtomicOrdering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatcher_shuts_down_when_source_closes() {
        let (tx, rx) = mpsc::channel(8);
        let coordinator = Coordinator::builder(config(Duration::from_secs(1), false))
            .with_signal_source(rx)
            .build()
            .unwrap();

        drop(tx);
        coordinator.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_runtime_token_observes_phase_one() {
        let (coordinator, _, _) = build(config(Duration::from_secs(1), false));
        let observer = coordinator.runtime_token();
        assert!(!observer.is_cancelled());

        // A child cancelling itself must not begin wind-down.
        observer.cancel();
        assert!(coordinator.launch(|_ctx| async {}).is_ok());

        let observer = coordinator.runtime_token();
        coordinator.drain();
        observer.cancelled().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_timeout_blocks_construction() {
        let built = Coordinator::builder(config(Duration::ZERO, true))
            .without_signals()
            .build();
        assert!(matches!(
            built,
            Err(CoordinatorError::InvalidTimeout { .. })
        ));
    }
}
