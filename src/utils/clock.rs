//! Injectable time source. The engine never reads the wall clock itself:
//! callers hand it an instant obtained from one of these.

use chrono::{DateTime, Local};

/// Trait for sources of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock reading the local wall time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant. Backs the hidden `--now` flag so
/// integration tests get deterministic elapsed/earnings output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Adjustable clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct MockClock {
    current: DateTime<Local>,
}

impl MockClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self { current: start }
    }

    pub fn advance(&mut self, delta: chrono::Duration) {
        self.current += delta;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Local> {
        self.current
    }
}

/// Clock selection for the CLI: the wall clock, or one pinned by `--now`.
#[derive(Debug, Clone, Copy)]
pub enum AppClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl AppClock {
    pub fn system() -> Self {
        AppClock::System(SystemClock)
    }

    pub fn fixed(instant: DateTime<Local>) -> Self {
        AppClock::Fixed(FixedClock(instant))
    }
}

impl Clock for AppClock {
    fn now(&self) -> DateTime<Local> {
        match self {
            AppClock::System(c) => c.now(),
            AppClock::Fixed(c) => c.now(),
        }
    }
}
