//! Engine lifecycle: load once, share the outcome, stay ready
//!
//! ```text
//! Uninitialized --initialize()--> Initializing --load ok--> Ready
//!        ^                             |
//!        +------ load failed ----------+   (FailurePolicy::Retry)
//!                                      |
//!                                      +----> Failed       (FailurePolicy::Sticky)
//! ```
//!
//! An [`EngineLifecycle`] is an explicitly owned handle. Clones share the
//! same state, so every call site that should see one engine gets a clone of
//! one lifecycle.
//!
//! While a load is in flight, every `initialize` call awaits the same
//! [`Shared`] future, so the loader runs once per attempt and all waiters see
//! the same outcome. The engine handle lives in a [`OnceLock`] that is set
//! before the attempt resolves, which is what makes
//! [`is_initialized`](EngineLifecycle::is_initialized) a plain read.

use crate::{
    bootstrap::BootstrapSource,
    config::{FailurePolicy, LifecycleConfig},
    error::{LoadError, QrError, Result},
    traits::{EngineLoader, QrEngine},
};
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

type LoadOutcome = std::result::Result<(), Arc<LoadError>>;
type LoadFuture = Shared<BoxFuture<'static, LoadOutcome>>;

/// One load attempt, shared by everyone who waits on it
struct Attempt {
    id: u64,
    outcome: LoadFuture,
}

/// Lifecycle bookkeeping guarded by the slot mutex
///
/// `Ready` is not represented here: it is the engine `OnceLock` being set.
enum Slot {
    Idle,
    Loading(Attempt),
    Failed(Arc<LoadError>),
}

/// What `initialize` has to do after inspecting the slot
enum Step {
    Ready,
    Wait(LoadFuture),
    Failed(Arc<LoadError>),
}

struct LifecycleState {
    loader: Arc<dyn EngineLoader>,
    config: LifecycleConfig,
    engine: OnceLock<Arc<dyn QrEngine>>,
    slot: Mutex<Slot>,
    attempts: AtomicU64,
}

impl LifecycleState {
    /// Record the result of attempt `id`; runs inside the shared future
    fn finish(
        &self,
        id: u64,
        loaded: std::result::Result<Arc<dyn QrEngine>, LoadError>,
    ) -> LoadOutcome {
        let mut slot = self.slot.lock();
        match loaded {
            Ok(engine) => {
                let name = engine.name();
                // Only one attempt is ever in flight, so the cell is still empty
                if self.engine.set(engine).is_err() {
                    log::warn!("Engine already set; discarding result of load #{}", id);
                }
                *slot = Slot::Idle;
                log::info!("QR engine '{}' ready (load #{})", name, id);
                Ok(())
            }
            Err(e) => {
                let err = Arc::new(e);
                log::warn!(
                    "QR engine load #{} failed: {} (policy: {})",
                    id,
                    err,
                    self.config.failure_policy
                );
                *slot = match self.config.failure_policy {
                    FailurePolicy::Retry => Slot::Idle,
                    FailurePolicy::Sticky => Slot::Failed(Arc::clone(&err)),
                };
                Err(err)
            }
        }
    }
}

/// Owns the engine handle and its single-flight initialization
///
/// ```no_run
/// # use std::sync::Arc;
/// # use styled_qr_core::{EngineLifecycle, EngineLoader};
/// # async fn demo(loader: Arc<dyn EngineLoader>) -> styled_qr_core::Result<()> {
/// let lifecycle = EngineLifecycle::new(loader);
/// assert!(!lifecycle.is_initialized());
///
/// // Overlapping calls share one load
/// let (a, b) = futures::join!(lifecycle.initialize(None), lifecycle.initialize(None));
/// a?;
/// b?;
/// assert!(lifecycle.is_initialized());
/// assert_eq!(lifecycle.load_attempts(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EngineLifecycle {
    state: Arc<LifecycleState>,
}

impl EngineLifecycle {
    /// Lifecycle with the default configuration
    pub fn new(loader: Arc<dyn EngineLoader>) -> Self {
        Self::with_config(loader, LifecycleConfig::default())
    }

    pub fn with_config(loader: Arc<dyn EngineLoader>, config: LifecycleConfig) -> Self {
        Self {
            state: Arc::new(LifecycleState {
                loader,
                config,
                engine: OnceLock::new(),
                slot: Mutex::new(Slot::Idle),
                attempts: AtomicU64::new(0),
            }),
        }
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.state.config
    }

    /// Load the engine, or join the load already in progress
    ///
    /// - Ready: returns immediately, the loader is not touched.
    /// - Loading: waits for the in-flight attempt; `source` is ignored.
    /// - Uninitialized: starts an attempt with `source`.
    ///
    /// A failed attempt fails every caller that waited on it with the same
    /// [`QrError::EngineLoad`]. Whether a later call may start over depends
    /// on the configured [`FailurePolicy`]. A loader that panics fails the
    /// attempt with [`LoadError::Panicked`] under the same rules.
    pub async fn initialize(&self, source: Option<BootstrapSource>) -> Result<()> {
        match self.begin(source) {
            Step::Ready => Ok(()),
            Step::Failed(err) => Err(QrError::EngineLoad(err)),
            Step::Wait(outcome) => outcome.await.map_err(QrError::EngineLoad),
        }
    }

    /// Whether the engine has finished loading. Never blocks, never loads.
    pub fn is_initialized(&self) -> bool {
        self.state.engine.get().is_some()
    }

    /// Number of load attempts started so far
    pub fn load_attempts(&self) -> u64 {
        self.state.attempts.load(Ordering::SeqCst)
    }

    /// Name of the loaded engine, once ready
    pub fn engine_name(&self) -> Option<&'static str> {
        self.engine().map(|engine| engine.name())
    }

    /// The loaded engine, for the generation facade
    pub(crate) fn engine(&self) -> Option<&Arc<dyn QrEngine>> {
        self.state.engine.get()
    }

    fn begin(&self, source: Option<BootstrapSource>) -> Step {
        if self.is_initialized() {
            log::trace!("QR engine already initialized");
            return Step::Ready;
        }

        let mut slot = self.state.slot.lock();
        // The attempt may have finished between the check above and the lock
        if self.is_initialized() {
            return Step::Ready;
        }

        match &*slot {
            Slot::Loading(attempt) => {
                log::debug!("Joining in-flight QR engine load #{}", attempt.id);
                if source.is_some() {
                    log::debug!("Bootstrap source ignored: load #{} already running", attempt.id);
                }
                return Step::Wait(attempt.outcome.clone());
            }
            Slot::Failed(err) => return Step::Failed(Arc::clone(err)),
            Slot::Idle => {}
        }

        let attempt = self.start(source);
        let outcome = attempt.outcome.clone();
        *slot = Slot::Loading(attempt);
        Step::Wait(outcome)
    }

    fn start(&self, source: Option<BootstrapSource>) -> Attempt {
        let id = self.state.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let loader = Arc::clone(&self.state.loader);
        // Weak, so an unfinished attempt does not keep a dropped lifecycle alive
        let state = Arc::downgrade(&self.state);

        log::info!(
            "Loading QR engine via '{}' (load #{}, source: {:?})",
            loader.name(),
            id,
            source
        );

        let outcome = async move {
            // A panic would poison the shared future for every later caller
            let loaded = match AssertUnwindSafe(loader.load(source)).catch_unwind().await {
                Ok(loaded) => loaded,
                Err(payload) => Err(LoadError::Panicked(panic_message(&*payload))),
            };
            match state.upgrade() {
                Some(state) => state.finish(id, loaded),
                None => loaded.map(|_| ()).map_err(Arc::new),
            }
        }
        .boxed()
        .shared();

        Attempt { id, outcome }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl fmt::Debug for EngineLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineLifecycle")
            .field("loader", &self.state.loader.name())
            .field("initialized", &self.is_initialized())
            .field("load_attempts", &self.load_attempts())
            .field("config", &self.state.config)
            .finish()
    }
}
