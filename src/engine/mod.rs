pub mod engine;
pub mod notify;
pub mod settings;
pub mod snapshot;
