pub mod address;
pub mod client;

pub use crate::domain::model::{AuthToken, FeedRecord, ServiceAddress};
pub use crate::domain::ports::{BackendClient, ServiceLocator};
pub use crate::utils::error::Result;
