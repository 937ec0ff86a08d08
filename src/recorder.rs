use crate::events::{annotations_suffix, event_line, involved_object_suffix};
use kube::Resource;
use std::collections::BTreeMap;
use std::fmt::Arguments;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, SyncSender, TrySendError, sync_channel};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Makes a new fake event recorder that prints the involved object of each event.
///
/// Recorded strings can be compared with [`event_string`](crate::events::event_string).
pub fn new_recorder(buffer_size: usize) -> FakeRecorder {
    FakeRecorder::new(buffer_size).with_include_object(true)
}

/// FakeRecorder: in memory event recorder used as a test double of a Kubernetes event recorder.
///
/// Each event is rendered as `<type> <reason> <message>` and pushed into a bounded buffer.
/// When the buffer is full the event is dropped and counted. A buffer of size 0 drops every event
/// unless a reader is already waiting in [`FakeRecorder::next_event_timeout`].
pub struct FakeRecorder {
    sender: SyncSender<String>,
    receiver: Mutex<Receiver<String>>,
    buffer_size: usize,
    include_object: bool,
    dropped_events: AtomicUsize,
}

impl FakeRecorder {
    pub fn new(buffer_size: usize) -> FakeRecorder {
        let (sender, receiver) = sync_channel(buffer_size);
        FakeRecorder {
            sender,
            receiver: Mutex::new(receiver),
            buffer_size,
            include_object: false,
            dropped_events: AtomicUsize::new(0),
        }
    }

    /// Appends ` involvedObject{kind=..,apiVersion=..}` to every recorded event when enabled.
    pub fn with_include_object(mut self, include_object: bool) -> FakeRecorder {
        self.include_object = include_object;
        self
    }

    pub fn include_object(&self) -> bool {
        self.include_object
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Number of events dropped because the buffer was full.
    pub fn dropped_events(&self) -> usize {
        self.dropped_events.load(Ordering::Relaxed)
    }

    pub fn event<K>(&self, object: &K, event_type: impl AsRef<str>, reason: &str, message: &str)
    where
        K: Resource<DynamicType = ()>,
    {
        self.write_event(object, &BTreeMap::new(), event_type.as_ref(), reason, format_args!("{message}"));
    }

    pub fn eventf<K>(&self, object: &K, event_type: impl AsRef<str>, reason: &str, message: Arguments<'_>)
    where
        K: Resource<DynamicType = ()>,
    {
        self.write_event(object, &BTreeMap::new(), event_type.as_ref(), reason, message);
    }

    pub fn annotated_eventf<K>(
        &self,
        object: &K,
        annotations: &BTreeMap<String, String>,
        event_type: impl AsRef<str>,
        reason: &str,
        message: Arguments<'_>,
    ) where
        K: Resource<DynamicType = ()>,
    {
        self.write_event(object, annotations, event_type.as_ref(), reason, message);
    }

    /// Pops the oldest recorded event, if any, without blocking.
    pub fn try_next_event(&self) -> Option<String> {
        self.receiver().try_recv().ok()
    }

    /// Waits up to `timeout` for an event, useful when events are recorded from another thread.
    pub fn next_event_timeout(&self, timeout: Duration) -> Option<String> {
        self.receiver().recv_timeout(timeout).ok()
    }

    /// Drains every event currently buffered, oldest first.
    pub fn events(&self) -> Vec<String> {
        self.receiver().try_iter().collect()
    }

    fn receiver(&self) -> MutexGuard<'_, Receiver<String>> {
        self.receiver.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_event<K>(
        &self,
        object: &K,
        annotations: &BTreeMap<String, String>,
        event_type: &str,
        reason: &str,
        message: Arguments<'_>,
    ) where
        K: Resource<DynamicType = ()>,
    {
        let mut event = event_line(event_type, reason, message);
        if self.include_object {
            event.push_str(&involved_object_suffix(object));
        }
        event.push_str(&annotations_suffix(annotations));

        match self.sender.try_send(event) {
            Ok(()) => debug!(reason, "fake recorder recorded event"),
            Err(TrySendError::Full(event)) | Err(TrySendError::Disconnected(event)) => {
                self.dropped_events.fetch_add(1, Ordering::Relaxed);
                warn!(
                    buffer_size = self.buffer_size,
                    "fake recorder buffer is full, dropping event: {}", event
                );
            }
        }
    }
}
