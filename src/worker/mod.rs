//! Background fetch worker.
//!
//! Photo Service calls run on spawned tokio tasks so the event loop never
//! blocks on the network. Results come back to the controller as events.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol between controller and worker
//! - `handler`: worker implementation and task spawning

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{FetchRequest, FetchResponse};
