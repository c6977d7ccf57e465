//! Fire-and-forget slot writer.
//!
//! # Responsibility
//! - Apply slot writes off the interactive path on a dedicated thread.
//!
//! # Invariants
//! - Jobs are drained in FIFO order, so the persisted copy of a slot always
//!   converges to the most recently enqueued state.
//! - A failed write is logged and dropped; there is no retry and no error
//!   surfaced to the caller.
//! - A job, once enqueued, runs to completion or fails silently; there is
//!   no cancellation.

use crate::repo::kv::KvStore;
use log::{debug, warn};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

enum Job {
    Write { slot: &'static str, bytes: Vec<u8> },
    Flush(Sender<()>),
}

/// Cloneable handle to the writer thread.
#[derive(Clone)]
pub struct WriteBehind {
    tx: Sender<Job>,
}

impl WriteBehind {
    /// Spawns the writer thread, handing it ownership of the slot store.
    ///
    /// The thread exits when every handle has been dropped and the queue is
    /// drained.
    pub fn spawn(kv: KvStore) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("shoebox-writer".to_string())
            .spawn(move || run(kv, rx));
        if let Err(err) = spawned {
            // Writes enqueued after this will be dropped on send, matching
            // the silent-failure persistence contract.
            warn!("event=writer_spawn module=store status=error error={err}");
        }
        Self { tx }
    }

    /// Enqueues a full-slot overwrite. Never blocks on storage I/O.
    pub fn enqueue(&self, slot: &'static str, bytes: Vec<u8>) {
        if self.tx.send(Job::Write { slot, bytes }).is_err() {
            warn!("event=slot_write module=store status=dropped slot={slot}");
        }
    }

    /// Blocks until every previously enqueued write has been attempted.
    ///
    /// Used on shutdown and by tests; mutation paths never call this.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = mpsc::channel();
        if self.tx.send(Job::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

fn run(kv: KvStore, rx: Receiver<Job>) {
    for job in rx {
        match job {
            Job::Write { slot, bytes } => match kv.put(slot, &bytes) {
                Ok(()) => debug!(
                    "event=slot_write module=store status=ok slot={slot} bytes={}",
                    bytes.len()
                ),
                Err(err) => {
                    warn!("event=slot_write module=store status=error slot={slot} error={err}")
                }
            },
            Job::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}
