pub mod setup;
pub mod webhook;
