use std::sync::mpsc::{self, Receiver, Sender};

use log::{debug, warn};

use crate::communication::{Mutation, MutationKind};

/// holds the alarms of the current session in the order they were created
///
/// alarms are plain strings, nothing checks that they are actually times
#[derive(Debug, Default)]
pub struct AlarmStore {
    alarms: Vec<String>,
    subscribers: Vec<Sender<Mutation>>,
}

impl AlarmStore {
    pub const ID: &'static str = "alarm";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// appends `time` to the end of the list and tells every subscriber about it
    pub fn create_alarm(&mut self, time: impl Into<String>) {
        let time = time.into();
        let index = self.alarms.len();
        debug!("creating alarm {index} at `{time}`");
        self.alarms.push(time.clone());
        self.notify(&MutationKind::AlarmCreated { index, time });
    }

    #[must_use]
    pub fn alarms(&self) -> &[String] {
        &self.alarms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    /// every mutation after this call is sent to the returned receiver
    /// dropping the receiver unsubscribes
    pub fn subscribe(&mut self) -> Receiver<Mutation> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, kind: &MutationKind) {
        let before = self.subscribers.len();
        self.subscribers
            .retain(|sub| sub.send(Mutation::new(Self::ID, kind.clone())).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            warn!("removed {dropped} disconnected subscriber(s) from the {} store", Self::ID);
        }
    }
}
