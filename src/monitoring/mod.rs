/*!
 * Monitoring Module
 * Tracing setup and partition events
 */

mod collector;
pub mod events;
mod tracer;

pub use collector::Collector;
pub use events::{Event, Payload, Severity};
pub use tracer::init_tracing;
