//! Service layer
//!
//! Services wrap the outbound side effects of the bot. They are trait-based
//! so the poller can be tested without a real chat.

mod notifier;

pub use notifier::{Notifier, TelegramNotifier};
