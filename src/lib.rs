//! Keyboard navigation and command dispatch for embedded timeline viewers.
//!
//! This library binds key combinations to named actions, routes actions to
//! built-in handlers or externally registered ones, and moves a focus
//! cursor through a dynamically changing, partially rendered item list
//! with minimal, correct scrolling. Hosts implement the collaborator
//! traits in [`view`] over their document and window machinery and feed
//! key events into a [`dispatch::Dispatcher`].

// Module declarations
pub mod actions;
pub mod combo;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod handlers;
pub mod navigator;
pub mod view;
