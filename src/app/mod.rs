//! Core page logic: greeting data, state, event handling, and the
//! subscriptions that feed events into the loop.

pub mod action;
pub mod event;
pub mod greetings;
pub mod handler;
pub mod rotator;
pub mod state;
pub mod tracker;
