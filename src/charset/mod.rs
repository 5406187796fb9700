//! Character classes and the pools they are drawn from.

mod class;
mod pool;

pub use class::{classify, CharClass, ClassifyError};
pub use pool::{CharPool, ClassPools, PoolError};
