use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use editor_logging::{editor_error, editor_info, editor_warn};
use job_editor_core::{DraftChange, SaveMode};

use crate::autosave::{AutosavePolicy, AutosaveTimer};
use crate::session::{DraftSession, EditorProfile};
use crate::store::{FileJobStore, JobStore};
use crate::{HostConfig, HostEvent, JobId, JobStatus, SaveFailure};

enum HostCommand {
    Apply(DraftChange),
    Save(SaveMode),
    Load(JobId),
}

/// Handle to the host thread that owns the draft.
///
/// Edits are applied in the order they are sent. Saves and loads run as tasks
/// on a tokio runtime; store writes are serialized so a new job is created once.
pub struct EditorHost {
    cmd_tx: mpsc::Sender<HostCommand>,
    event_rx: mpsc::Receiver<HostEvent>,
}

impl EditorHost {
    pub fn new(config: HostConfig, profile: EditorProfile) -> Self {
        let store = Arc::new(FileJobStore::new(
            config.store_dir.clone(),
            config.clock.clone(),
        ));
        Self::with_store(config, profile, store)
    }

    pub fn with_store(config: HostConfig, profile: EditorProfile, store: Arc<dyn JobStore>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let session = DraftSession::new(profile, (config.today)());

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_time()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    editor_error!("Failed to start host runtime: {}", err);
                    return;
                }
            };
            let host = HostLoop {
                shared: Arc::new(Shared {
                    session: Mutex::new(session),
                    write_lock: tokio::sync::Mutex::new(()),
                    store,
                    event_tx,
                }),
                timer: AutosaveTimer::new(),
                policy: config.autosave,
            };
            host.run(&runtime, cmd_rx, config.poll_interval);
        });

        Self { cmd_tx, event_rx }
    }

    pub fn apply(&self, change: DraftChange) {
        let _ = self.cmd_tx.send(HostCommand::Apply(change));
    }

    pub fn save(&self, mode: SaveMode) {
        let _ = self.cmd_tx.send(HostCommand::Save(mode));
    }

    pub fn load(&self, id: JobId) {
        let _ = self.cmd_tx.send(HostCommand::Load(id));
    }

    pub fn try_recv(&self) -> Option<HostEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<HostEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

struct Shared {
    session: Mutex<DraftSession>,
    write_lock: tokio::sync::Mutex<()>,
    store: Arc<dyn JobStore>,
    event_tx: mpsc::Sender<HostEvent>,
}

impl Shared {
    fn with_session<R>(&self, f: impl FnOnce(&mut DraftSession) -> R) -> R {
        let mut guard = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn emit(&self, event: HostEvent) {
        let _ = self.event_tx.send(event);
    }

    fn sync(&self) {
        let props = self.with_session(|session| session.props());
        self.emit(HostEvent::Synced(Box::new(props)));
    }
}

struct HostLoop {
    shared: Arc<Shared>,
    timer: AutosaveTimer,
    policy: AutosavePolicy,
}

impl HostLoop {
    fn run(
        mut self,
        runtime: &tokio::runtime::Runtime,
        cmd_rx: mpsc::Receiver<HostCommand>,
        poll_interval: Duration,
    ) {
        self.shared.sync();
        loop {
            match cmd_rx.recv_timeout(poll_interval) {
                Ok(command) => self.handle(runtime, command),
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
            if self.timer.is_due(Instant::now(), &self.policy) {
                // A running save defers the autosave; the timer stays armed.
                if !self.shared.with_session(|session| session.is_saving()) {
                    self.timer.clear();
                    self.start_autosave(runtime);
                }
            }
        }
        editor_info!("Host loop stopped");
    }

    fn handle(&mut self, runtime: &tokio::runtime::Runtime, command: HostCommand) {
        match command {
            HostCommand::Apply(change) => {
                self.shared.with_session(|session| session.apply(change));
                self.timer.touch(Instant::now());
                self.shared.sync();
            }
            HostCommand::Save(mode) => {
                let (started, generation) = self
                    .shared
                    .with_session(|session| (session.begin_save(mode), session.generation()));
                self.shared.sync();
                match started {
                    Err(errors) => {
                        editor_info!("Save {:?} rejected with {} error(s)", mode, errors.len());
                        self.shared.emit(HostEvent::SaveFinished {
                            mode,
                            result: Err(SaveFailure::Invalid(errors)),
                        });
                    }
                    Ok(draft) => {
                        self.timer.clear();
                        let shared = self.shared.clone();
                        runtime.spawn(async move { run_save(shared, mode, draft, generation).await });
                    }
                }
            }
            HostCommand::Load(id) => {
                let shared = self.shared.clone();
                runtime.spawn(async move { run_load(shared, id).await });
            }
        }
    }

    fn start_autosave(&mut self, runtime: &tokio::runtime::Runtime) {
        let Some((draft, generation)) = self
            .shared
            .with_session(|session| Some((session.begin_autosave()?, session.generation())))
        else {
            return;
        };
        self.shared.sync();
        let shared = self.shared.clone();
        runtime.spawn(async move { run_autosave(shared, draft, generation).await });
    }
}

/// Job id to save under, or `None` when a load replaced the draft since
/// `generation` was taken.
fn save_target(shared: &Shared, generation: u64) -> Option<Option<JobId>> {
    shared.with_session(|session| {
        (session.generation() == generation).then(|| session.job_id())
    })
}

async fn run_save(
    shared: Arc<Shared>,
    mode: SaveMode,
    draft: job_editor_core::JobDraft,
    generation: u64,
) {
    let _write = shared.write_lock.lock().await;
    let Some(id) = save_target(&shared, generation) else {
        editor_warn!("Save {:?} discarded: another job was opened", mode);
        shared.emit(HostEvent::SaveFinished {
            mode,
            result: Err(SaveFailure::Store(
                "discarded because another job was opened".to_string(),
            )),
        });
        return;
    };
    let result = shared.store.save(id, JobStatus::for_mode(mode), draft).await;
    let result = match result {
        Ok(stored) => {
            shared.with_session(|session| session.finish_save(mode, &stored));
            Ok(stored)
        }
        Err(err) => {
            editor_warn!("Save {:?} failed: {}", mode, err);
            shared.with_session(|session| session.fail_save(mode));
            Err(SaveFailure::Store(err.to_string()))
        }
    };
    shared.sync();
    shared.emit(HostEvent::SaveFinished { mode, result });
}

async fn run_autosave(shared: Arc<Shared>, draft: job_editor_core::JobDraft, generation: u64) {
    let _write = shared.write_lock.lock().await;
    let Some(id) = save_target(&shared, generation) else {
        editor_info!("Autosave discarded: another job was opened");
        return;
    };
    match shared.store.save(id, JobStatus::Draft, draft).await {
        Ok(stored) => shared.with_session(|session| session.finish_autosave(&stored)),
        Err(err) => {
            editor_warn!("Autosave failed: {}", err);
            shared.with_session(|session| session.fail_autosave());
        }
    }
    shared.sync();
}

async fn run_load(shared: Arc<Shared>, id: JobId) {
    // Waits for in-flight saves so none lands on the job loaded here.
    let _write = shared.write_lock.lock().await;
    match shared.store.load(id).await {
        Ok(stored) => {
            editor_info!("Loaded job {}", id);
            shared.with_session(|session| session.load(stored));
            shared.sync();
        }
        Err(err) => {
            editor_warn!("Load of job {} failed: {}", id, err);
            shared.emit(HostEvent::LoadFailed {
                id,
                message: err.to_string(),
            });
        }
    }
}
