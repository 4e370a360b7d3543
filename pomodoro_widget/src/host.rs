use serde::Serialize;
use std::{
    collections::{BTreeMap, BTreeSet},
    io::{self, Write},
    sync::{Mutex, PoisonError},
};
use thiserror::Error;
use types::{WidgetId, WidgetPresentation};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Widget {0} is not placed on the host")]
    UnknownInstance(WidgetId),
    #[error("Failed to serialize presentation for widget {id}: {source}")]
    Serialize {
        id: WidgetId,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write presentation for widget {id}: {source}")]
    Io {
        id: WidgetId,
        #[source]
        source: io::Error,
    },
}

/// The host's widget manager, as seen by the presenter.
pub trait WidgetHost: Send + Sync {
    /// Replace whatever `id` currently shows with `presentation`.
    ///
    /// # Errors
    /// If the host rejects or cannot deliver the update.
    fn update_widget(
        &self,
        id: WidgetId,
        presentation: WidgetPresentation,
    ) -> Result<(), HostError>;
}

/// Keeps the latest presentation of every instance in memory.
///
/// When built with [`MemoryHost::with_instances`] only those ids are accepted,
/// like a home screen that only knows the widgets the user has placed.
#[derive(Debug, Default)]
pub struct MemoryHost {
    placed: Option<BTreeSet<WidgetId>>,
    presentations: Mutex<BTreeMap<WidgetId, WidgetPresentation>>,
    updates: Mutex<usize>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instances(ids: impl IntoIterator<Item = WidgetId>) -> Self {
        Self {
            placed: Some(ids.into_iter().collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn presentation(&self, id: WidgetId) -> Option<WidgetPresentation> {
        self.presentations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presentations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of accepted updates, including repeats for one id.
    #[must_use]
    pub fn update_count(&self) -> usize {
        *self.updates.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WidgetHost for MemoryHost {
    fn update_widget(
        &self,
        id: WidgetId,
        presentation: WidgetPresentation,
    ) -> Result<(), HostError> {
        if let Some(placed) = &self.placed {
            if !placed.contains(&id) {
                return Err(HostError::UnknownInstance(id));
            }
        }

        self.presentations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, presentation);
        *self.updates.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct HostUpdate<'a> {
    widget_id: WidgetId,
    presentation: &'a WidgetPresentation,
}

/// Writes each update as one JSON line, for a host process reading our
/// output.
#[derive(Debug)]
pub struct JsonLinesHost<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesHost<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> WidgetHost for JsonLinesHost<W> {
    fn update_widget(
        &self,
        id: WidgetId,
        presentation: WidgetPresentation,
    ) -> Result<(), HostError> {
        let mut line = serde_json::to_vec(&HostUpdate {
            widget_id: id,
            presentation: &presentation,
        })
        .map_err(|source| HostError::Serialize { id, source })?;
        line.push(b'\n');

        let mut writer =
            self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer
            .write_all(&line)
            .and_then(|()| writer.flush())
            .map_err(|source| HostError::Io { id, source })
    }
}
