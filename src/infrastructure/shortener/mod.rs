//! External shortening service clients.

mod shrtco_client;

pub use shrtco_client::{DEFAULT_API_URL, ShrtcoClient};
