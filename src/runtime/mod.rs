//! Host capabilities: repeating timers, the pointer stream, and the
//! subscriptions that tie them to the page's lifetime.

pub mod pointer;
pub mod scheduler;
pub mod subscription;
