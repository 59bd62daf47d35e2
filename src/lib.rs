pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod events;
pub mod favorites;
pub mod filter;
pub mod layout;
pub mod listing;
pub mod palette;
pub mod state;
pub mod toast;
