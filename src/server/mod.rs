//! Socket ownership and the worker pool that serves it.

pub mod listener;
pub mod pool;

pub use listener::Listener;
pub use pool::WorkerPool;
