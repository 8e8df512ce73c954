// eKill shared type definitions
// Each submodule defines types used across the coordination core.

pub mod badge;
pub mod errors;
pub mod message;
pub mod settings;
