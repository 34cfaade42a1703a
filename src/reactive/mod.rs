//! A small single-threaded signal/effect runtime.
//!
//! Writes flush subscribed effects synchronously, so anything derived from a
//! signal (such as an input's width) is up to date before `set` returns.

mod effect;
mod runtime;
mod signal;

pub use effect::{create_effect, Effect};
pub use runtime::batch;
pub use signal::{create_signal, Signal};
