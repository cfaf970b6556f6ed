//! Portfolio Page UI Components
//!
//! Small Dioxus building blocks shared by the page sections:
//! - **Buttons**: primary/ghost actions and the `close-btn` dismiss button
//! - **Form fields**: labelled inputs whose ids match the page's DOM contract
//! - **Feedback line**: a form notice with its warning/accent color cue

pub mod components;

pub use components::*;
