// src/core/dispatch.rs

use crate::core::engine::EngineClient;
use crate::core::error::DispatchError;
use crate::core::models::{DispatchEvent, DispatchId, DispatchOutcome, TargetRequest};
use std::ffi::{c_int, CString};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Forwards validated targets to the engine without blocking the caller.
///
/// Each accepted request runs on tokio's blocking pool. When the engine
/// call returns, a `DispatchEvent` is sent on the channel given at
/// construction, which the UI loop drains on its next tick.
pub struct DispatchGateway {
    engine: Option<EngineClient>,
    events: mpsc::UnboundedSender<DispatchEvent>,
    runtime: Handle,
    next_id: AtomicU64,
}

impl DispatchGateway {
    /// Creates a gateway bound to the current tokio runtime.
    ///
    /// # Arguments
    /// * `engine` - The engine handle, or `None` when it failed to load.
    /// * `events` - Where completion events are delivered.
    ///
    /// # Panics
    /// When called outside a tokio runtime.
    pub fn new(engine: Option<EngineClient>, events: mpsc::UnboundedSender<DispatchEvent>) -> Self {
        Self::with_runtime(engine, events, Handle::current())
    }

    pub fn with_runtime(
        engine: Option<EngineClient>,
        events: mpsc::UnboundedSender<DispatchEvent>,
        runtime: Handle,
    ) -> Self {
        Self { engine, events, runtime, next_id: AtomicU64::new(1) }
    }

    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Hands `request` to the engine on a worker and returns at once.
    ///
    /// Rejections happen before anything crosses the engine boundary. An
    /// accepted dispatch is never retried or cancelled.
    pub fn dispatch(&self, request: TargetRequest) -> DispatchOutcome {
        match self.try_dispatch(request) {
            Ok(id) => DispatchOutcome::Accepted(id),
            Err(e) => {
                warn!(error = %e, "Dispatch rejected.");
                DispatchOutcome::Rejected(e.to_string())
            }
        }
    }

    fn try_dispatch(&self, request: TargetRequest) -> Result<DispatchId, DispatchError> {
        let engine = self.engine.clone().ok_or(DispatchError::EngineUnavailable)?;
        let host = CString::new(request.host.as_str()).map_err(|_| DispatchError::Encoding)?;
        let port = c_int::from(request.port);

        let id = DispatchId(self.next_id.fetch_add(1, Ordering::Relaxed));
        info!(%id, target = %request, engine = engine.label(), "Dispatching target to engine.");

        let events = self.events.clone();
        let worker = self.runtime.spawn_blocking(move || {
            let started = Instant::now();
            engine.call(&host, port);
            started.elapsed()
        });

        // The join is awaited on a regular task so a panicking engine call
        // still produces an event.
        self.runtime.spawn(async move {
            let event = match worker.await {
                Ok(elapsed) => {
                    info!(%id, target = %request, ?elapsed, "Engine call returned.");
                    DispatchEvent::Completed { id, host: request.host, port: request.port, elapsed }
                }
                Err(e) => {
                    error!(%id, error = %e, "Engine worker failed.");
                    DispatchEvent::Failed { id, reason: e.to_string() }
                }
            };
            // The receiver is gone only when the UI is shutting down.
            let _ = events.send(event);
        });

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::ScanEngine;
    use crate::core::request;
    use std::ffi::CStr;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Engine double that sleeps to stand in for a long scan.
    struct SlowEngine {
        delay: Duration,
        calls: Arc<Mutex<Vec<(String, c_int)>>>,
    }

    impl ScanEngine for SlowEngine {
        fn process_data_input(&self, host: &CStr, port: c_int) {
            std::thread::sleep(self.delay);
            self.calls.lock().unwrap().push((host.to_string_lossy().into_owned(), port));
        }
    }

    struct PanickingEngine;

    impl ScanEngine for PanickingEngine {
        fn process_data_input(&self, _host: &CStr, _port: c_int) {
            panic!("engine exploded");
        }
    }

    fn gateway(
        delay: Duration,
    ) -> (DispatchGateway, mpsc::UnboundedReceiver<DispatchEvent>, Arc<Mutex<Vec<(String, c_int)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let engine = SlowEngine { delay, calls: calls.clone() };
        let (tx, rx) = mpsc::unbounded_channel();
        let gateway = DispatchGateway::new(Some(EngineClient::new(engine, "slow")), tx);
        (gateway, rx, calls)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_dispatch_returns_before_engine_finishes() {
        let (gateway, mut rx, calls) = gateway(Duration::from_millis(300));
        let request = request::build("scanme.nmap.org", "22").unwrap();

        let started = Instant::now();
        let outcome = gateway.dispatch(request);
        assert!(started.elapsed() < Duration::from_millis(100));
        assert_eq!(outcome, DispatchOutcome::Accepted(DispatchId(1)));

        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("completion event should arrive")
            .expect("channel open");
        match event {
            DispatchEvent::Completed { id, host, port, elapsed } => {
                assert_eq!(id, DispatchId(1));
                assert_eq!(host, "scanme.nmap.org");
                assert_eq!(port, 22);
                assert!(elapsed >= Duration::from_millis(300));
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(*calls.lock().unwrap(), vec![("scanme.nmap.org".to_string(), 22)]);
    }

    #[tokio::test]
    async fn test_gateway_reports_engine_presence() {
        let (gateway, _rx, _calls) = gateway(Duration::ZERO);
        assert!(gateway.has_engine());
    }

    #[tokio::test]
    async fn test_ids_increase_per_dispatch() {
        let (gateway, mut rx, _calls) = gateway(Duration::ZERO);
        let first = gateway.dispatch(request::build("10.0.0.1", "").unwrap());
        let second = gateway.dispatch(request::build("10.0.0.2", "").unwrap());
        assert_eq!(first, DispatchOutcome::Accepted(DispatchId(1)));
        assert_eq!(second, DispatchOutcome::Accepted(DispatchId(2)));

        let mut seen = Vec::new();
        for _ in 0..2 {
            let event = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
            seen.push(event.id());
        }
        seen.sort();
        assert_eq!(seen, vec![DispatchId(1), DispatchId(2)]);
    }

    #[tokio::test]
    async fn test_interior_nul_is_encoding_error() {
        let (gateway, mut rx, calls) = gateway(Duration::ZERO);
        let request = TargetRequest { host: "scan\0me".to_string(), port: 80 };
        assert_eq!(gateway.dispatch(request), DispatchOutcome::Rejected("encoding error".to_string()));
        assert!(calls.lock().unwrap().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_missing_engine_is_rejected() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let gateway = DispatchGateway::new(None, tx);
        assert!(!gateway.has_engine());
        let outcome = gateway.dispatch(request::build("scanme.nmap.org", "22").unwrap());
        assert_eq!(outcome, DispatchOutcome::Rejected("engine unavailable".to_string()));
    }

    #[tokio::test]
    async fn test_panicking_engine_reports_failure() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let gateway = DispatchGateway::new(Some(EngineClient::new(PanickingEngine, "panics")), tx);
        let outcome = gateway.dispatch(request::build("scanme.nmap.org", "22").unwrap());
        assert_eq!(outcome, DispatchOutcome::Accepted(DispatchId(1)));

        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
        assert!(matches!(event, DispatchEvent::Failed { id: DispatchId(1), .. }));
    }
}
