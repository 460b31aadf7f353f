pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::{CameraFit, ControllerEvent, MapEvent};
pub use handler::{EventCallback, EventManager, SubscriberFilter};
