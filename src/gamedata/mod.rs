//! Game-definition datasets: models, loading and publication.

mod http;
mod loader;
mod model;
mod store;

pub use http::HttpGameDataLoader;
pub use loader::GameDataLoader;
pub use model::{ExternalTexts, FurniData, FurniIndex, FurniInfo};
pub use store::GameDataStore;

#[cfg(test)]
pub(crate) use loader::MockGameDataLoader;
