//! Core of a side-scrolling platformer: object model, collision, entity
//! state machines, level orchestration and scene sequencing.
//!
//! Rendering and input are consumed through the [`render::Renderer`] and
//! [`input::InputSource`] traits; the terminal front end in `main.rs`
//! provides the concrete implementations.

pub mod camera;
pub mod collectable;
pub mod config;
pub mod entities;
pub mod error;
pub mod flag;
pub mod game;
pub mod input;
pub mod layout;
pub mod level;
pub mod object;
pub mod platform;
pub mod render;
pub mod scene;
pub mod text;
