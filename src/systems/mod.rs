//! Host integration
//!
//! This module wires the distance display into the host editor:
//! - Notifications and the bus that delivers them
//! - The per-view display adapter
//! - The extension object managing adapters across view lifecycles

pub mod display_adapter;
pub mod events;
pub mod notifications;
pub mod plugins;

// Re-export commonly used items
pub use display_adapter::{DisplayAdapter, TextDisplay, WidgetHost};
pub use events::{EventKind, HostEvent, ViewId};
pub use notifications::{NotificationBus, Subscription, SubscriptionId};
pub use plugins::ShowDistExtension;
