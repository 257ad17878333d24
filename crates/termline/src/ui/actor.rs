//! UI Actor - Single-threaded event processing
//!
//! This module implements the actor pattern for terminal output.
//! All operations are channeled through a single thread that owns the
//! [`Engine`], so spinner frames, log lines and prompts can never be written
//! at the same time.
//!
/// # Implementation Note: Ticks and Input
///
/// 1. **Ticks**: While a spinner runs, the loop waits on the channel with a
///    timeout that ends at the next tick deadline. Events arriving in
///    between are handled immediately and do not delay the tick.
///
/// 2. **Input**: Reading stdin blocks, so a separate reader thread owns the
///    [`InputSource`]. The actor asks it for exactly one line per prompt
///    cycle and the line comes back as [`UiEvent::Input`]. The actor stays
///    responsive (debug-only logs are still captured) while the user types.
///    At most one request is outstanding. A line that arrives after its
///    prompt was reset is held for the next prompt, never dropped.
///
/// 3. **Retries**: A rejected answer just requests another line. The retry
///    loop is the event loop itself, so the stack never grows.
use super::console::{Console, InputSource};
use super::engine::Engine;
use super::format::LogEntry;
use super::prompt::PromptSession;
use crate::config::TerminalConfig;
use crate::severity::State;
use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// Events that can be sent to the UI actor
pub enum UiEvent {
    /// Print and/or capture a log line
    Log(LogEntry),
    /// Start a spinner
    Animate(String),
    /// Change the message of the running spinner
    UpdateAnimation(String),
    /// Stop the running spinner
    StopAnimation {
        /// Picks the end bullet color
        state: State,
        /// Replacement final message
        message: Option<String>,
    },
    /// Ask a question; the answer (or `None` if refused) goes to `reply`
    Ask {
        /// The question
        session: PromptSession,
        /// Receives the accepted answer
        reply: oneshot::Sender<Option<String>>,
    },
    /// A line from the input reader; `None` once input is exhausted
    Input(Option<String>),
    /// Change the debug log directory
    SetDebugDirectory(PathBuf),
    /// Toggle 24-hour timestamps
    SetDebugMilitaryTime(bool),
    /// Toggle debug log capture
    SetDebugEnabled(bool),
    /// Toggle console timestamps
    SetTimestampsEnabled(bool),
    /// Force back to Idle
    Reset,
    /// Synchronize (wait for all pending events)
    Sync(oneshot::Sender<()>),
    /// Shutdown the actor
    Shutdown,
}

impl fmt::Debug for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log(entry) => f.debug_tuple("Log").field(entry).finish(),
            Self::Animate(message) => f.debug_tuple("Animate").field(message).finish(),
            Self::UpdateAnimation(message) => {
                f.debug_tuple("UpdateAnimation").field(message).finish()
            }
            Self::StopAnimation { state, message } => f
                .debug_struct("StopAnimation")
                .field("state", state)
                .field("message", message)
                .finish(),
            Self::Ask { session, .. } => f
                .debug_struct("Ask")
                .field("session", session)
                .finish_non_exhaustive(),
            Self::Input(line) => f.debug_tuple("Input").field(line).finish(),
            Self::SetDebugDirectory(path) => f.debug_tuple("SetDebugDirectory").field(path).finish(),
            Self::SetDebugMilitaryTime(on) => {
                f.debug_tuple("SetDebugMilitaryTime").field(on).finish()
            }
            Self::SetDebugEnabled(on) => f.debug_tuple("SetDebugEnabled").field(on).finish(),
            Self::SetTimestampsEnabled(on) => {
                f.debug_tuple("SetTimestampsEnabled").field(on).finish()
            }
            Self::Reset => write!(f, "Reset"),
            Self::Sync(_) => write!(f, "Sync"),
            Self::Shutdown => write!(f, "Shutdown"),
        }
    }
}

/// Handle to the UI actor thread
pub struct UiActor {
    sender: mpsc::Sender<UiEvent>,
    handle: Option<thread::JoinHandle<()>>,
}

impl UiActor {
    /// Spawn the actor thread and its input reader.
    pub fn spawn<C, I>(config: &TerminalConfig, console: C, input: I) -> Self
    where
        C: Console + 'static,
        I: InputSource + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let line_requests = spawn_input_reader(input, sender.clone());
        let engine = Engine::new(console, config);
        let tick_interval = config.tick_interval();

        let handle = thread::Builder::new()
            .name("termline-ui".into())
            .spawn(move || run_event_loop(engine, &receiver, &line_requests, tick_interval))
            .ok();

        if handle.is_none() {
            tracing::warn!("failed to spawn UI thread; terminal output disabled");
        }

        Self { sender, handle }
    }

    /// Get a cloneable sender for this actor
    pub fn sender(&self) -> mpsc::Sender<UiEvent> {
        self.sender.clone()
    }
}

impl fmt::Debug for UiActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiActor")
            .field("running", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for UiActor {
    fn drop(&mut self) {
        // Send shutdown signal (ignore errors if already shut down)
        let _ = self.sender.send(UiEvent::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Reader thread: one line per request, posted back as [`UiEvent::Input`].
fn spawn_input_reader<I>(mut input: I, events: mpsc::Sender<UiEvent>) -> mpsc::Sender<()>
where
    I: InputSource + 'static,
{
    let (requests, request_rx) = mpsc::channel::<()>();

    let spawned = thread::Builder::new()
        .name("termline-input".into())
        .spawn(move || {
            while request_rx.recv().is_ok() {
                let line = match input.read_line() {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read input line");
                        None
                    }
                };
                if events.send(UiEvent::Input(line)).is_err() {
                    break;
                }
            }
        });

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "failed to spawn input reader; prompts will be cancelled");
    }

    requests
}

/// Actor side of the input reader.
///
/// Tracks whether a line has been requested but not yet delivered, and holds
/// a delivered line until a prompt takes it. `Some(None)` in `buffered` is
/// end of input.
struct LineFeed<'a> {
    requests: &'a mpsc::Sender<()>,
    in_flight: bool,
    buffered: Option<Option<String>>,
}

impl<'a> LineFeed<'a> {
    fn new(requests: &'a mpsc::Sender<()>) -> Self {
        Self {
            requests,
            in_flight: false,
            buffered: None,
        }
    }

    /// Take the held line, or make sure one is on its way.
    ///
    /// Returns `None` while waiting for the reader. A missing reader reads
    /// as end of input.
    fn poll(&mut self) -> Option<Option<String>> {
        if let Some(line) = self.buffered.take() {
            return Some(line);
        }
        if !self.in_flight {
            if self.requests.send(()).is_err() {
                return Some(None);
            }
            self.in_flight = true;
        }
        None
    }

    fn received(&mut self, line: Option<String>) {
        self.in_flight = false;
        self.buffered = Some(line);
    }
}

type Reply = oneshot::Sender<Option<String>>;

/// Feed available lines to the active prompt until it is answered,
/// cancelled, or has to wait for the reader.
fn pump_prompt<C: Console>(engine: &mut Engine<C>, feed: &mut LineFeed<'_>, pending: &mut Option<Reply>) {
    while pending.is_some() {
        let Some(line) = feed.poll() else {
            return;
        };

        let answer = match line {
            Some(text) => match engine.submit_input(&text) {
                None if engine.is_prompting() => continue,
                answer => answer,
            },
            None => {
                engine.cancel_prompt();
                None
            }
        };

        if let Some(tx) = pending.take() {
            let _ = tx.send(answer);
        }
    }
}

/// Main event loop for the UI actor
///
/// This runs in a dedicated thread and processes all UI events sequentially.
fn run_event_loop<C: Console>(
    mut engine: Engine<C>,
    receiver: &mpsc::Receiver<UiEvent>,
    line_requests: &mpsc::Sender<()>,
    tick_interval: Duration,
) {
    let mut next_tick: Option<Instant> = None;
    let mut pending_reply: Option<Reply> = None;
    let mut feed = LineFeed::new(line_requests);

    loop {
        let event = match next_tick {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                receiver.recv_timeout(timeout)
            }
            None => receiver
                .recv()
                .map_err(|_| mpsc::RecvTimeoutError::Disconnected),
        };

        match event {
            Ok(UiEvent::Log(entry)) => {
                if let Err(e) = engine.log(&entry) {
                    tracing::warn!(error = %e, "debug log write failed");
                }
            }
            Ok(UiEvent::Animate(message)) => {
                if engine.animate(message).entered() {
                    next_tick = Some(Instant::now() + tick_interval);
                }
            }
            Ok(UiEvent::UpdateAnimation(message)) => {
                engine.update_animation(message);
            }
            Ok(UiEvent::StopAnimation { state, message }) => {
                engine.stop_animation(state, message);
            }
            Ok(UiEvent::Ask { session, reply }) => {
                if pending_reply.is_none() && engine.begin_prompt(session) {
                    pending_reply = Some(reply);
                    pump_prompt(&mut engine, &mut feed, &mut pending_reply);
                } else {
                    let _ = reply.send(None);
                }
            }
            Ok(UiEvent::Input(line)) => {
                feed.received(line);
                pump_prompt(&mut engine, &mut feed, &mut pending_reply);
            }
            Ok(UiEvent::SetDebugDirectory(path)) => engine.set_debug_directory(path),
            Ok(UiEvent::SetDebugMilitaryTime(on)) => engine.set_debug_military_time(on),
            Ok(UiEvent::SetDebugEnabled(on)) => engine.set_debug_enabled(on),
            Ok(UiEvent::SetTimestampsEnabled(on)) => engine.set_timestamps_enabled(on),
            Ok(UiEvent::Reset) => {
                engine.reset();
                if let Some(tx) = pending_reply.take() {
                    let _ = tx.send(None);
                }
            }
            Ok(UiEvent::Sync(tx)) => {
                // All previous events are processed because of sequential mpsc
                let _ = tx.send(());
            }
            Ok(UiEvent::Shutdown) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                // Leave the cursor on a fresh line.
                engine.reset();
                if let Some(tx) = pending_reply.take() {
                    let _ = tx.send(None);
                }
                break;
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                engine.tick();
                if let Some(deadline) = next_tick.as_mut() {
                    let now = Instant::now();
                    *deadline += tick_interval;
                    // Skip missed frames instead of bursting to catch up.
                    if *deadline <= now {
                        *deadline = now + tick_interval;
                    }
                }
            }
        }

        if !engine.animation().is_running() {
            next_tick = None;
        }
    }
}
