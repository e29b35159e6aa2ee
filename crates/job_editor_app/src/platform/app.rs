use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use editor_logging::{editor_info, editor_warn, parse_level};
use job_editor_core::{update, EditorProps, EditorState, EditorViewModel, Msg, SaveMode};
use job_editor_host::{
    EditorHost, EditorProfile, HostConfig, HostEvent, JobStatus, SaveFailure,
};

use super::config::load_config;
use super::effects::{save_requests, EffectRunner, TerminalSurface};
use super::input::{parse_command, Command, HELP};
use super::logging;
use super::persistence::{load_session, save_session, SessionMemo};
use super::ui;
use crate::Cli;

const TICK_INTERVAL: Duration = Duration::from_millis(75);
/// How long `quit` waits for requested saves to come back.
const QUIT_GRACE: Duration = Duration::from_secs(5);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli.config)?;
    logging::initialize(cli.log, parse_level(&config.log_level));

    let store_dir = config.resolve_store_dir(cli.store.as_deref());
    editor_info!("Job editor starting, store {:?}", store_dir);
    let memo = load_session(&store_dir);

    let profile = EditorProfile {
        categories: config.categories.clone(),
        companies: config.companies.clone(),
        is_admin: cli.admin,
        user_role: cli.role,
    };
    let mut host_config = HostConfig::default_with_store(store_dir.clone());
    host_config.autosave = config.autosave_policy();
    let runner = EffectRunner::new(EditorHost::new(host_config, profile));

    let job = cli.job.or(memo.last_job);
    if let Some(id) = job {
        runner.load(id);
    }

    let state = EditorState::new(EditorProps::default())
        .with_summary_limit(config.summary_limit)
        .with_wide_min_width(config.wide_min_width);

    let (event_tx, event_rx) = mpsc::channel();
    spawn_stdin_reader(event_tx.clone());
    spawn_ticker(event_tx);

    let mut app = App::new(
        state,
        runner,
        io::stdout(),
        store_dir,
        SessionMemo {
            last_job: job,
            last_section: memo.last_section.clone(),
        },
    );
    app.dispatch(Msg::ViewportResized {
        width: cli.width.unwrap_or(config.width),
    });
    if let Some(section) = memo.section() {
        app.dispatch(Msg::SectionSelected(section));
    }
    app.notices.push("Type `help` for commands.".to_string());
    app.run(event_rx)
}

enum AppEvent {
    Line(String),
    InputClosed,
    Tick,
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    editor_warn!("Reading stdin failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while tx.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });
}

struct App<W: Write> {
    state: EditorState,
    runner: EffectRunner,
    out: W,
    store_dir: PathBuf,
    memo: SessionMemo,
    notices: Vec<String>,
    last_view: Option<EditorViewModel>,
    focused: Option<&'static str>,
    force_render: bool,
    pending_saves: usize,
    quitting_since: Option<Instant>,
}

impl<W: Write> App<W> {
    fn new(
        state: EditorState,
        runner: EffectRunner,
        out: W,
        store_dir: PathBuf,
        memo: SessionMemo,
    ) -> Self {
        Self {
            state,
            runner,
            out,
            store_dir,
            memo,
            notices: Vec::new(),
            last_view: None,
            focused: None,
            force_render: false,
            pending_saves: 0,
            quitting_since: None,
        }
    }

    fn run(&mut self, events: mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        self.flush()?;
        while let Ok(event) = events.recv() {
            match event {
                AppEvent::Line(line) => self.handle_line(&line),
                AppEvent::InputClosed => self.begin_quit(),
                AppEvent::Tick => self.dispatch(Msg::Tick),
            }
            while let Some(host_event) = self.runner.poll() {
                self.handle_host_event(host_event);
            }
            self.flush()?;
            if self.ready_to_quit() {
                break;
            }
        }

        self.memo.last_section = Some(self.state.section().as_str().to_string());
        save_session(&self.store_dir, &self.memo);
        editor_info!("Job editor closed");
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if effects.is_empty() {
            return;
        }

        self.pending_saves += save_requests(&effects);
        let view = self.state.view();
        let mut surface = TerminalSurface::mount(&view);
        let notes = self.runner.run(effects, &mut surface);
        if let Some(field) = surface.focused() {
            self.focused = Some(field);
            self.force_render = true;
        }
        self.notices.extend(notes);
    }

    fn handle_line(&mut self, line: &str) {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return,
            Err(err) => {
                self.notices.push(format!("! {err}"));
                return;
            }
        };

        if command != Command::Show {
            // The cursor marks the last jump target until the user moves on.
            self.focused = None;
        }

        match command {
            Command::Edit(change) => self.dispatch(Msg::FieldEdited(change)),
            Command::Section(section) => self.dispatch(Msg::SectionSelected(section)),
            Command::Width(width) => self.dispatch(Msg::ViewportResized { width }),
            Command::Go(row) => {
                let field = self.state.view().error_summary.and_then(|summary| {
                    row.checked_sub(1)
                        .and_then(|index| summary.rows.into_iter().nth(index))
                        .map(|row| row.field)
                });
                match field {
                    Some(field) => self.dispatch(Msg::ErrorRowActivated { field }),
                    None => self.notices.push(format!("! No error in row {row}")),
                }
            }
            Command::Draft => self.dispatch(Msg::SaveDraftClicked),
            Command::Submit => self.dispatch(Msg::SubmitClicked),
            Command::Show => self.force_render = true,
            Command::Help => self.notices.push(HELP.to_string()),
            Command::Quit => self.begin_quit(),
        }
    }

    fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Synced(props) => self.dispatch(Msg::PropsChanged(props)),
            HostEvent::SaveFinished { mode, result } => {
                self.pending_saves = self.pending_saves.saturating_sub(1);
                match result {
                    Ok(stored) => {
                        self.memo.last_job = Some(stored.id);
                        let status = match stored.status {
                            JobStatus::Draft => "draft",
                            JobStatus::Published => "published",
                        };
                        self.notices
                            .push(format!("Saved job {} ({status})", stored.id));
                        self.dispatch(Msg::SaveFinished {
                            mode,
                            result: Ok(()),
                        });
                    }
                    Err(SaveFailure::Invalid(errors)) => self.dispatch(Msg::SaveFinished {
                        mode,
                        result: Err(errors),
                    }),
                    Err(SaveFailure::Store(message)) => {
                        let action = match mode {
                            SaveMode::Draft => "Saving draft",
                            SaveMode::Submit => "Publishing",
                        };
                        self.notices.push(format!("! {action} failed: {message}"));
                    }
                }
            }
            HostEvent::LoadFailed { id, message } => {
                self.memo.last_job = None;
                self.notices
                    .push(format!("! Could not open job {id}: {message}"));
            }
        }
    }

    fn begin_quit(&mut self) {
        if self.quitting_since.is_none() {
            self.quitting_since = Some(Instant::now());
        }
    }

    fn ready_to_quit(&self) -> bool {
        self.quitting_since
            .is_some_and(|since| self.pending_saves == 0 || since.elapsed() >= QUIT_GRACE)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        let pending = self.state.consume_render_pending();
        if pending || self.force_render {
            let view = self.state.view();
            let lines = match &self.last_view {
                Some(previous) if !self.force_render && *previous == view => Vec::new(),
                Some(previous)
                    if !self.force_render && ui::render::differs_only_in_badges(previous, &view) =>
                {
                    vec![ui::render::header_line(&view)]
                }
                _ => ui::render::render(&view, self.focused),
            };
            for line in lines {
                writeln!(self.out, "{line}")?;
            }
            self.last_view = Some(view);
            self.force_render = false;
        }

        for notice in self.notices.drain(..) {
            writeln!(self.out, "{notice}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
