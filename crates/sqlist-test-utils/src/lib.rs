//! Test utilities and mock types for sqlist development.
//!
//! Provides a scriptable [`FailingAllocator`] for exercising
//! out-of-memory paths, a [`RecordingDiagnostics`] sink for asserting on
//! emitted notices, and a few value fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sqlist_core::{AllocError, Diagnostics, Elem, Notice};
use sqlist_storage::{Allocator, SystemAllocator};

/// A panicking test may poison a shared handle; the data is still usable.
fn lock<T>(shared: &Mutex<T>) -> MutexGuard<'_, T> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct Script {
    calls: usize,
    /// Upcoming outcomes; `true` means fail. Empty means succeed.
    plan: VecDeque<bool>,
}

/// Allocator that delegates to [`SystemAllocator`] unless told to fail.
///
/// The list takes ownership of the allocator, so failures are scripted
/// through the [`AllocatorControl`] handle returned alongside it.
#[derive(Debug)]
pub struct FailingAllocator {
    script: Arc<Mutex<Script>>,
}

/// Handle for scripting a [`FailingAllocator`] after it has been moved
/// into a list.
#[derive(Clone, Debug)]
pub struct AllocatorControl {
    script: Arc<Mutex<Script>>,
}

impl FailingAllocator {
    pub fn new() -> (Self, AllocatorControl) {
        let script = Arc::new(Mutex::new(Script::default()));
        (
            Self {
                script: Arc::clone(&script),
            },
            AllocatorControl { script },
        )
    }
}

impl Allocator for FailingAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Box<[Elem]>, AllocError> {
        let fail = {
            let mut script = lock(&self.script);
            script.calls += 1;
            script.plan.pop_front().unwrap_or(false)
        };
        if fail {
            return Err(AllocError { requested: slots });
        }
        SystemAllocator.allocate(slots)
    }
}

impl AllocatorControl {
    /// Make the next `n` allocations fail.
    pub fn fail_next(&self, n: usize) {
        let mut script = lock(&self.script);
        script.plan.clear();
        script.plan.extend(std::iter::repeat_n(true, n));
    }

    /// Succeed `skip` times, then fail once.
    pub fn fail_after(&self, skip: usize) {
        let mut script = lock(&self.script);
        script.plan.clear();
        script.plan.extend(std::iter::repeat_n(false, skip));
        script.plan.push_back(true);
    }

    /// Number of allocation attempts so far, successful or not.
    pub fn calls(&self) -> usize {
        lock(&self.script).calls
    }
}

/// Diagnostics sink that records every notice it receives.
#[derive(Debug)]
pub struct RecordingDiagnostics {
    log: Arc<Mutex<Vec<Notice>>>,
}

/// Read side of a [`RecordingDiagnostics`] sink.
#[derive(Clone, Debug)]
pub struct NoticeLog {
    log: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> (Self, NoticeLog) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                log: Arc::clone(&log),
            },
            NoticeLog { log },
        )
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn notice(&mut self, notice: &Notice) {
        lock(&self.log).push(notice.clone());
    }
}

impl NoticeLog {
    /// Copy of every notice recorded so far.
    pub fn snapshot(&self) -> Vec<Notice> {
        lock(&self.log).clone()
    }

    /// Number of recorded notices whose [`Notice::kind`] is `kind`.
    pub fn count_of(&self, kind: &str) -> usize {
        lock(&self.log).iter().filter(|n| n.kind() == kind).count()
    }

    pub fn clear(&self) {
        lock(&self.log).clear();
    }
}

/// The insert sequence from the walkthrough scenario as `(position, value)`.
pub fn walkthrough_inserts() -> [(usize, Elem); 4] {
    [(1, 10), (2, 15), (3, 20), (2, 5)]
}

fn fixture_len(count: usize) -> Elem {
    Elem::try_from(count).expect("fixture length exceeds Elem::MAX")
}

/// `count` values alternating odd and even, starting at 1.
///
/// # Panics
///
/// Panics if `count > Elem::MAX`.
pub fn alternating_parity(count: usize) -> Vec<Elem> {
    (1..=fixture_len(count)).collect()
}

/// `count` values in strictly descending order, ending at 1.
///
/// # Panics
///
/// Panics if `count > Elem::MAX`.
pub fn descending(count: usize) -> Vec<Elem> {
    (1..=fixture_len(count)).rev().collect()
}
