pub mod client;
pub mod control;
pub mod state;

pub use client::SigfoxClient;
pub use control::Sigfox;
pub use state::DeviceState;
