pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

pub use config::registry::ServiceRegistry;
pub use core::address::resolve_address;
pub use core::client::ServiceClient;
pub use domain::model::{AuthToken, FeedRecord, ServiceAddress};
pub use services::{PaypalHelper, SlackHelper};
pub use utils::error::{HelperError, Result};
