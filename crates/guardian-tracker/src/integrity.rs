//! # Integrity Check
//!
//! A one-shot deferred check. `run` arms it; the first `poll` at or after
//! the configured delay completes it with a random seal string. While armed
//! the monitor is busy and further `run` calls are ignored. A completed
//! check can be run again, which arms a new one-shot.
//!
//! ```text
//! Idle ──run──▶ Running ──poll (delay elapsed)──▶ Sealed ──run──▶ Running
//! ```
//!
//! Time and randomness are injected so the check is deterministic in tests.

use std::cell::Cell;

use chrono::{DateTime, TimeDelta, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Delay between arming the check and its completion.
pub const DEFAULT_INTEGRITY_DELAY_MS: u64 = 1500;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: i64) {
        self.now.set(self.now.get() + TimeDelta::milliseconds(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Where the integrity check is in its cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IntegrityStatus {
    /// Never run.
    #[default]
    Idle,
    /// Armed, waiting for the delay to elapse.
    Running { started_at: DateTime<Utc> },
    /// Completed.
    Sealed {
        seal: String,
        completed_at: DateTime<Utc>,
    },
}

/// The integrity check state for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityMonitor {
    delay_ms: u64,
    status: IntegrityStatus,
}

impl IntegrityMonitor {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            status: IntegrityStatus::Idle,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn status(&self) -> &IntegrityStatus {
        &self.status
    }

    /// Whether a check is armed and has not completed.
    pub fn is_busy(&self) -> bool {
        matches!(self.status, IntegrityStatus::Running { .. })
    }

    /// The most recent seal, if a check has completed.
    pub fn seal(&self) -> Option<&str> {
        match &self.status {
            IntegrityStatus::Sealed { seal, .. } => Some(seal),
            _ => None,
        }
    }

    /// When the armed check becomes due. `None` when idle, sealed, or when
    /// the delay overflows the calendar (such a check never fires).
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            IntegrityStatus::Running { started_at } => started_at.checked_add_signed(self.delay()),
            _ => None,
        }
    }

    /// Arm the check. Ignored while busy. Returns whether a check was armed.
    pub fn run(&mut self, clock: &impl Clock) -> bool {
        if self.is_busy() {
            tracing::debug!("integrity check already running");
            return false;
        }
        let started_at = clock.now();
        tracing::debug!(%started_at, delay_ms = self.delay_ms, "integrity check armed");
        self.status = IntegrityStatus::Running { started_at };
        true
    }

    /// Complete the armed check if its delay has elapsed.
    ///
    /// Returns the new seal exactly once per `run`; `None` otherwise.
    pub fn poll(&mut self, clock: &impl Clock, rng: &mut impl RngCore) -> Option<String> {
        let due = self.due_at()?;
        let now = clock.now();
        if now < due {
            return None;
        }
        let seal = generate_seal(rng);
        tracing::info!(%seal, completed_at = %now, "integrity check sealed");
        self.status = IntegrityStatus::Sealed {
            seal: seal.clone(),
            completed_at: now,
        };
        Some(seal)
    }

    fn delay(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::try_from(self.delay_ms).unwrap_or(i64::MAX))
    }
}

impl Default for IntegrityMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_INTEGRITY_DELAY_MS)
    }
}

/// `SEAL-` followed by 12 lowercase hex characters.
fn generate_seal(rng: &mut impl RngCore) -> String {
    format!("SEAL-{:012x}", rng.next_u64() & 0xffff_ffff_ffff)
}
