pub mod registry;

pub use registry::{ServiceDescriptor, ServiceRegistry};
