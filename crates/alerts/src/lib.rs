//! Volume-move alerting.
//!
//! This crate provides:
//! - threshold evaluation against the prior poll's total
//! - snapshot summary formatting
//! - best-effort Telegram delivery

pub mod evaluator;
pub mod telegram;

pub use evaluator::{format_summary, should_alert, AlertThresholds};
pub use telegram::{TelegramConfig, TelegramNotifier};
