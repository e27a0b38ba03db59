//! Resource synchronization: session events and the load coordinator.

mod coordinator;
mod events;

pub use coordinator::{SyncCoordinator, run_event_loop};
pub use events::SessionConnected;
