use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One periodic tick, tagged with the session epoch that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub epoch: u64,
}

/// What a delivered tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick(u32),
    TimeExpired,
    /// The tick belonged to a stopped timer or an earlier session.
    Ignored,
}

/// Cancellation handle for one scheduled periodic task.
#[derive(Debug)]
pub struct TickHandle {
    cancelled: Arc<AtomicBool>,
}

impl TickHandle {
    pub fn new(cancelled: Arc<AtomicBool>) -> Self {
        Self { cancelled }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Something that can deliver a tick every [`TICK_PERIOD`] until cancelled.
pub trait TickSource {
    fn start(&self, epoch: u64) -> TickHandle;
}

/// Tick source for hosts that call `Session::tick` themselves (tests,
/// embedding in an existing event loop). Scheduling is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostDriven;

impl TickSource for HostDriven {
    fn start(&self, _epoch: u64) -> TickHandle {
        TickHandle::new(Arc::new(AtomicBool::new(false)))
    }
}

/// Spawns one sleeper thread per started timer and sends ticks over a channel.
/// The receiving event loop applies them, so all countdown mutation stays on
/// the loop's thread.
#[derive(Debug, Clone)]
pub struct ThreadTicker {
    tx: mpsc::Sender<TimerTick>,
}

impl ThreadTicker {
    pub fn new(tx: mpsc::Sender<TimerTick>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::Receiver<TimerTick>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }
}

impl TickSource for ThreadTicker {
    fn start(&self, epoch: u64) -> TickHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let tx = self.tx.clone();

        thread::spawn(move || loop {
            thread::sleep(TICK_PERIOD);
            if flag.load(Ordering::SeqCst) {
                break;
            }
            if tx.send(TimerTick { epoch }).is_err() {
                break;
            }
        });

        TickHandle::new(cancelled)
    }
}

/// Owns the single active timer registration of a session.
pub struct TimerController {
    source: Box<dyn TickSource>,
    handle: Option<TickHandle>,
    expired: bool,
}

impl TimerController {
    pub fn new(source: Box<dyn TickSource>) -> Self {
        Self {
            source,
            handle: None,
            expired: false,
        }
    }

    /// Starts a fresh countdown registration, stopping any previous one first.
    pub fn start(&mut self, epoch: u64) {
        self.stop();
        self.expired = false;
        self.handle = Some(self.source.start(epoch));
        log::debug!("timer started for session {}", epoch);
    }

    /// Safe to call when nothing is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            log::debug!("timer stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// True once a countdown has reached zero, until the next `start`.
    pub fn has_expired(&self) -> bool {
        self.expired
    }

    pub fn reset(&mut self) {
        self.stop();
        self.expired = false;
    }

    /// Applies one tick to `remaining`. This is the only place the countdown
    /// is decremented. Reaching zero stops the timer and reports expiry once.
    pub fn on_tick(&mut self, remaining: &mut u32) -> TimerEvent {
        if !self.is_running() {
            return TimerEvent::Ignored;
        }

        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
            self.stop();
            self.expired = true;
            log::info!("time expired");
            TimerEvent::TimeExpired
        } else {
            TimerEvent::Tick(*remaining)
        }
    }
}

impl std::fmt::Debug for TimerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerController")
            .field("running", &self.is_running())
            .field("expired", &self.expired)
            .finish()
    }
}

/// Formats seconds as `mm:ss`.
pub fn format_time(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
