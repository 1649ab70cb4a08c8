//! Queued event delivery on a dedicated thread.
//!
//! [`ScreenReader`] serializes callers with a lock, which blocks the host's
//! UI thread while a long narration runs. An [`EventQueue`] instead moves the
//! router onto its own worker thread and feeds it through a bounded channel:
//! the host posts an owned [`Element`] snapshot and returns immediately, and
//! events are handled one at a time in posting order.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_narrator::{EventKind, EventQueue, EventValue, Narrator, ScreenReader};
//! use horizon_narrator_core::{AccessibleRole, Element, RecordingSpeech, StateSet};
//!
//! let speech = Arc::new(RecordingSpeech::new());
//! let queue = EventQueue::spawn(ScreenReader::new(Narrator::new(speech.clone()))).unwrap();
//!
//! let button = Element::new(AccessibleRole::PushButton)
//!     .with_name("Send")
//!     .with_states(StateSet::FOCUSED);
//! queue
//!     .post(
//!         EventKind::StateChanged,
//!         EventValue::State(StateSet::NONE),
//!         EventValue::State(StateSet::FOCUSED),
//!         button,
//!     )
//!     .unwrap();
//!
//! queue.flush().unwrap();
//! assert_eq!(speech.utterances(), vec!["Send button focused"]);
//! queue.stop_and_join();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use horizon_narrator_core::logging::targets;
use horizon_narrator_core::{Element, NarratorError, Result};
use parking_lot::{Mutex, RwLock};

use crate::event::{EventKind, EventValue};
use crate::router::ScreenReader;

/// Name of the worker thread.
const WORKER_THREAD_NAME: &str = "horizon-narrator";

/// An item on the worker's queue.
enum QueueItem {
    /// Route one event.
    Event {
        kind: EventKind,
        old_value: EventValue,
        new_value: EventValue,
        node: Element,
    },
    /// Acknowledge once everything before this item has been handled.
    Flush(Sender<()>),
    /// Stop the worker.
    Shutdown,
}

/// State shared between the queue handle and the worker thread.
struct QueueState {
    /// Whether new events are accepted.
    running: AtomicBool,
    /// Events posted but not yet handled.
    pending: AtomicUsize,
}

/// A single-consumer queue feeding a [`ScreenReader`] on its own thread.
///
/// Dropping the queue stops the worker after the events already posted
/// have been handled.
pub struct EventQueue {
    sender: Sender<QueueItem>,
    /// Held shared by `post` and exclusively by `stop`, so no event is
    /// accepted after the shutdown marker has been queued.
    admission: RwLock<()>,
    handle: Mutex<Option<JoinHandle<()>>>,
    state: Arc<QueueState>,
    capacity: usize,
}

static_assertions::assert_impl_all!(EventQueue: Send, Sync);

impl EventQueue {
    /// Start a worker thread that owns `reader`.
    ///
    /// The queue capacity comes from the reader's configuration.
    pub fn spawn(reader: ScreenReader) -> Result<Self> {
        let capacity = reader.narrator().config().queue_capacity.max(1);
        let (sender, receiver) = bounded(capacity);
        let state = Arc::new(QueueState {
            running: AtomicBool::new(true),
            pending: AtomicUsize::new(0),
        });

        let thread_state = state.clone();
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                worker_loop(&reader, &receiver, &thread_state);
                thread_state.running.store(false, Ordering::Release);
            })
            .map_err(NarratorError::WorkerSpawn)?;

        tracing::debug!(target: targets::QUEUE, capacity, "event queue started");

        Ok(Self {
            sender,
            admission: RwLock::new(()),
            handle: Mutex::new(Some(handle)),
            state,
            capacity,
        })
    }

    /// Queue an event for the worker.
    ///
    /// Fails with [`NarratorError::QueueFull`] when the queue is at capacity
    /// and [`NarratorError::QueueClosed`] after [`stop`](Self::stop).
    pub fn post(
        &self,
        kind: EventKind,
        old_value: EventValue,
        new_value: EventValue,
        node: Element,
    ) -> Result<()> {
        let _admitted = self.admission.read();
        if !self.is_running() {
            return Err(NarratorError::QueueClosed);
        }

        self.state.pending.fetch_add(1, Ordering::AcqRel);
        let item = QueueItem::Event {
            kind,
            old_value,
            new_value,
            node,
        };

        match self.sender.try_send(item) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.state.pending.fetch_sub(1, Ordering::AcqRel);
                match err {
                    TrySendError::Full(_) => {
                        tracing::warn!(target: targets::QUEUE, capacity = self.capacity, "event queue full, dropping event");
                        Err(NarratorError::QueueFull {
                            capacity: self.capacity,
                        })
                    }
                    TrySendError::Disconnected(_) => Err(NarratorError::QueueClosed),
                }
            }
        }
    }

    /// Block until every event posted before this call has been handled.
    pub fn flush(&self) -> Result<()> {
        if !self.is_running() {
            return Err(NarratorError::QueueClosed);
        }

        let (ack_sender, ack_receiver) = bounded(1);
        self.sender
            .send(QueueItem::Flush(ack_sender))
            .map_err(|_| NarratorError::QueueClosed)?;
        ack_receiver.recv().map_err(|_| NarratorError::QueueClosed)
    }

    /// Number of events posted but not yet handled.
    pub fn pending(&self) -> usize {
        self.state.pending.load(Ordering::Acquire)
    }

    /// Whether the queue accepts new events.
    pub fn is_running(&self) -> bool {
        self.state.running.load(Ordering::Acquire)
    }

    /// The queue capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stop accepting events.
    ///
    /// Events already posted are still handled. Use [`join`](Self::join) to
    /// wait for the worker to finish them.
    pub fn stop(&self) {
        let _closing = self.admission.write();
        if self.state.running.swap(false, Ordering::AcqRel) {
            // Blocks only while the worker drains a full queue.
            let _ = self.sender.send(QueueItem::Shutdown);
        }
    }

    /// Wait for the worker thread to exit.
    ///
    /// Returns `false` if the worker was already joined or panicked.
    pub fn join(&self) -> bool {
        match self.handle.lock().take() {
            Some(handle) => handle.join().is_ok(),
            None => false,
        }
    }

    /// Stop the queue and wait for the worker to finish.
    pub fn stop_and_join(&self) -> bool {
        self.stop();
        self.join()
    }
}

impl Drop for EventQueue {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

impl std::fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventQueue")
            .field("running", &self.is_running())
            .field("pending", &self.pending())
            .field("capacity", &self.capacity)
            .finish()
    }
}

fn worker_loop(reader: &ScreenReader, receiver: &Receiver<QueueItem>, state: &QueueState) {
    for item in receiver.iter() {
        match item {
            QueueItem::Event {
                kind,
                old_value,
                new_value,
                node,
            } => {
                reader.on_accessible_event(kind, &old_value, &new_value, Some(&node));
                state.pending.fetch_sub(1, Ordering::AcqRel);
            }
            QueueItem::Flush(ack) => {
                let _ = ack.send(());
            }
            QueueItem::Shutdown => break,
        }
    }
    tracing::debug!(target: targets::QUEUE, "event queue stopped");
}
