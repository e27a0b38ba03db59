//! Symbolic endpoint names and the domain-resolved endpoint table.

mod id;
mod provider;
mod table;

pub use id::{HotelEndpoint, UnknownEndpointName};
pub use provider::EndpointProvider;
pub use table::EndpointTable;
