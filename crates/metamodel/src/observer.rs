//! Inference decisions as an observable side channel.
//!
//! Every classification the factory performs is reported as an
//! [`InferenceEvent`] through the injected [`InferenceObserver`], keeping the
//! classification logic itself free of hidden effects. The default observer
//! emits one structured log record per decision.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use auditkit_core::ClassRef;

use crate::object_type::ObjectTypeKind;

/// How a classification was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceSource {
    /// Spawned from a previously resolved prototype of the given kind.
    Prototype(ObjectTypeKind),
    /// Inferred from the class's own declared markers.
    Markers,
    /// Forced to Value because the type is used as an id property.
    IdPropertyPolicy,
}

/// One classification decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceEvent {
    event_id: Uuid,
    class: String,
    kind: ObjectTypeKind,
    source: InferenceSource,
    occurred_at: DateTime<Utc>,
}

impl InferenceEvent {
    pub(crate) fn new(class: &ClassRef, kind: ObjectTypeKind, source: InferenceSource) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            class: class.name().to_owned(),
            kind,
            source,
            occurred_at: Utc::now(),
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// Fully-qualified name of the classified class.
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn kind(&self) -> ObjectTypeKind {
        self.kind
    }

    pub fn source(&self) -> InferenceSource {
        self.source
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Observes classification decisions as they are made.
pub trait InferenceObserver: Send + Sync {
    fn type_inferred(&self, event: &InferenceEvent);
}

/// Default observer: one structured log record per decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl InferenceObserver for TracingObserver {
    fn type_inferred(&self, event: &InferenceEvent) {
        match event.source() {
            InferenceSource::Prototype(prototype) => tracing::info!(
                class = event.class(),
                kind = %event.kind(),
                prototype = %prototype,
                "type inferred from prototype"
            ),
            InferenceSource::Markers => tracing::info!(
                class = event.class(),
                kind = %event.kind(),
                "type inferred from markers"
            ),
            InferenceSource::IdPropertyPolicy => tracing::info!(
                class = event.class(),
                "type inferred as Value, used as id-property type"
            ),
        }
    }
}

/// In-memory observer for tests/dev and for embedders that persist
/// inference decisions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<InferenceEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Snapshot of everything observed so far.
    pub fn events(&self) -> Vec<InferenceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InferenceObserver for RecordingObserver {
    fn type_inferred(&self, event: &InferenceEvent) {
        // If the lock is poisoned we drop the record rather than poison the
        // factory call that triggered it.
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
