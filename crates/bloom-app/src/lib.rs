//! bloom-app - Application state and orchestration for Bloom
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events,
//! [`handler::update`] the transition function and [`composer`] builds the
//! view as a [`bloom_core::VisualTree`]. It also owns configuration
//! loading, the image loading collaborator and signal handling. Nothing in
//! here depends on a terminal library.

pub mod actions;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod focus;
pub mod handler;
pub mod image;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod process;
pub mod rows;
pub mod signals;
pub mod state;
pub mod tabs;

// Re-export primary types
pub use catalog::Catalog;
pub use composer::{compose, render, render_with, ViewContext};
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use image::{ImageCache, ImageLoader, LocalImageLoader, OfflineImageLoader};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::NavigationHost;
pub use process::process_message;
pub use rows::ItemRowState;
pub use state::{AppPhase, AppState};
pub use tabs::TabSelection;
