//! Bidirectional search: two directional workers joined by a coordinator.
//!
//! One worker searches forward from the start configuration, one backward
//! from the goal, over the same invertible move relation. Each publishes
//! every board it expands to the other and polls for the peer's boards;
//! a configuration seen by both sides is a meeting state, and the final
//! path is the forward partial path joined to the reversed-and-inverted
//! backward partial path.

pub mod channel;
pub mod coordinator;
pub mod worker;

pub use channel::{SearchDirection, WorkerReport};
pub use coordinator::solve;
pub use worker::DirectionalSearch;
