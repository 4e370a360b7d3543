//! Renders the Pinknote pomodoro timer onto home-screen widget instances.
//!
//! The application's timer engine publishes a small key/value blob
//! ([`types::WidgetData`]); on every host refresh the [`WidgetPresenter`]
//! reads it through a [`SnapshotStore`], derives the theme and text, binds
//! the tap action and hands one [`types::WidgetPresentation`] per instance to
//! a [`WidgetHost`].

pub mod config;
pub mod host;
pub mod navigation;
pub mod presenter;
pub mod snapshot;
pub mod theme;

pub use config::Config;
pub use host::{HostError, JsonLinesHost, MemoryHost, WidgetHost};
pub use presenter::WidgetPresenter;
pub use snapshot::{
    JsonFileStore, MemoryStore, SnapshotStore, StoreError, read_snapshot,
};
pub use theme::{normalize_phase, select_background, select_theme};
