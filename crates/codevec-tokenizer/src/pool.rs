//! Fixed pool of long-lived parser workers.
//!
//! Each worker thread owns its grammar parser instances (one per registered
//! language, built lazily and kept warm), so tokenizing a row never pays
//! parser construction cost. Rows are routed to slot `row_index % workers`
//! for deterministic load spreading; each call is a blocking
//! request/response over a channel. A row that times out or loses its
//! worker fails alone: the slot is recycled and unrelated rows proceed.

use crate::languages::Language;
use crate::walk;
use codevec_core::config::PoolConfig;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, SyncSender};
use std::sync::{Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

/// Pool-level failure: no worker could be started at all. Fatal, since no
/// specialized tokenization can proceed without workers.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to start parser worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Row-level failure on the specialized path, isolated to the offending row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("grammar rejected snippet")]
    Parse,
    #[error("worker timed out after {0} ms")]
    Timeout(u64),
    #[error("worker unavailable after {0} restart attempts")]
    WorkerUnavailable(usize),
}

struct Job {
    language: Language,
    code: String,
    reply: SyncSender<Result<Vec<String>, RowError>>,
}

struct WorkerSlot {
    tx: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

/// A fixed set of `P` pre-started parser workers behind slot mutexes.
///
/// Callers beyond `P` simply queue on their slot's mutex, so concurrency is
/// bounded by pool size. Dropping the pool tears every worker down.
pub struct ParserPool {
    slots: Vec<Mutex<WorkerSlot>>,
    row_timeout: Duration,
    max_restarts: usize,
}

impl ParserPool {
    /// Start `config.workers` workers. Construct once, before any
    /// tokenization request, and share by reference.
    pub fn new(config: &PoolConfig) -> Result<Self, PoolError> {
        let workers = config.workers.max(1);
        let mut slots = Vec::with_capacity(workers);
        for slot_id in 0..workers {
            slots.push(Mutex::new(spawn_worker(slot_id)?));
        }
        tracing::debug!(workers, "parser pool started");
        Ok(Self {
            slots,
            row_timeout: Duration::from_millis(config.row_timeout_ms),
            max_restarts: config.max_restarts,
        })
    }

    /// Number of worker slots.
    pub fn workers(&self) -> usize {
        self.slots.len()
    }

    /// Tokenize one row on its assigned slot, blocking until the worker
    /// responds or the row timeout elapses.
    pub fn tokenize(
        &self,
        row_index: usize,
        language: Language,
        code: &str,
    ) -> Result<Vec<String>, RowError> {
        let slot_id = row_index % self.slots.len();
        let mut slot = self.slots[slot_id]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut restarts = 0;
        loop {
            let (reply_tx, reply_rx) = mpsc::sync_channel(1);
            let job = Job {
                language,
                code: code.to_string(),
                reply: reply_tx,
            };

            // A slot without a sender was shut down; it is not resurrected.
            let Some(tx) = slot.tx.as_ref() else {
                return Err(RowError::WorkerUnavailable(restarts));
            };
            if tx.send(job).is_err() {
                if restarts >= self.max_restarts {
                    return Err(RowError::WorkerUnavailable(restarts));
                }
                restarts += 1;
                tracing::warn!(slot = slot_id, restarts, "parser worker died, restarting");
                restart_slot(&mut slot, slot_id);
                continue;
            }

            match reply_rx.recv_timeout(self.row_timeout) {
                Ok(result) => return result,
                Err(RecvTimeoutError::Timeout) => {
                    // Fail only this row. The slot gets a fresh worker so a
                    // wedged parse cannot poison later rows; the old thread
                    // exits on its own once its job channel is gone.
                    tracing::warn!(slot = slot_id, "row timed out, recycling worker");
                    restart_slot(&mut slot, slot_id);
                    return Err(RowError::Timeout(self.row_timeout.as_millis() as u64));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    if restarts >= self.max_restarts {
                        restart_slot(&mut slot, slot_id);
                        return Err(RowError::WorkerUnavailable(restarts));
                    }
                    restarts += 1;
                    tracing::warn!(slot = slot_id, restarts, "parser worker died mid-row, retrying");
                    restart_slot(&mut slot, slot_id);
                }
            }
        }
    }

    /// Tear down every worker. Runs on drop too, so the pool never leaves
    /// workers behind on either the success or the failure path.
    pub fn shutdown(&mut self) {
        // Close every job channel first so workers drain concurrently.
        for slot in &mut self.slots {
            let slot = slot.get_mut().unwrap_or_else(PoisonError::into_inner);
            slot.tx.take();
        }
        for slot in &mut self.slots {
            let slot = slot.get_mut().unwrap_or_else(PoisonError::into_inner);
            if let Some(handle) = slot.handle.take() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for ParserPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn spawn_worker(slot_id: usize) -> std::io::Result<WorkerSlot> {
    let (tx, rx) = mpsc::channel::<Job>();
    let handle = std::thread::Builder::new()
        .name(format!("codevec-parser-{slot_id}"))
        .spawn(move || worker_loop(&rx))?;
    Ok(WorkerSlot {
        tx: Some(tx),
        handle: Some(handle),
    })
}

/// Replace a slot's worker. If the spawn fails the dead slot stays in
/// place and the caller's retry budget decides when to give up.
fn restart_slot(slot: &mut WorkerSlot, slot_id: usize) {
    match spawn_worker(slot_id) {
        Ok(fresh) => {
            let old = std::mem::replace(slot, fresh);
            if let Some(handle) = old.handle
                && handle.is_finished()
            {
                let _ = handle.join();
            }
        }
        Err(err) => {
            tracing::warn!(slot = slot_id, %err, "failed to respawn parser worker");
        }
    }
}

fn worker_loop(rx: &Receiver<Job>) {
    let mut parsers: HashMap<Language, tree_sitter::Parser> = HashMap::new();
    while let Ok(job) = rx.recv() {
        let result = match panic::catch_unwind(AssertUnwindSafe(|| {
            parse_and_walk(&mut parsers, job.language, &job.code)
        })) {
            Ok(result) => result,
            Err(_) => {
                // A panicking walk must not take the worker down with it;
                // drop the possibly-inconsistent parser and fail the row.
                parsers.remove(&job.language);
                Err(RowError::Parse)
            }
        };
        // The caller may have timed out and dropped its receiver.
        let _ = job.reply.send(result);
    }
}

fn parse_and_walk(
    parsers: &mut HashMap<Language, tree_sitter::Parser>,
    language: Language,
    code: &str,
) -> Result<Vec<String>, RowError> {
    let parser = match parsers.entry(language) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            let mut parser = tree_sitter::Parser::new();
            parser
                .set_language(&language.ts_language())
                .map_err(|_| RowError::Parse)?;
            entry.insert(parser)
        }
    };

    let Some(tree) = parser.parse(code.as_bytes(), None) else {
        return Err(RowError::Parse);
    };
    // Error-recovery trees are rejection, not best effort: a snippet the
    // grammar cannot fully parse is flagged and excluded row-locally.
    if tree.root_node().has_error() {
        return Err(RowError::Parse);
    }
    Ok(walk::tokenize(language, &tree, code))
}
