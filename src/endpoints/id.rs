//! The closed set of symbolic endpoint names.

use std::fmt;
use std::str::FromStr;

/// A symbolically named web resource exposed by the hotel's web services.
///
/// The set is closed and known at build time; configuration may only refer
/// to these names. Name matching is case-sensitive on the exact variant
/// name (`"Catalog"` parses, `"catalog"` does not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HotelEndpoint {
    /// Public REST API root
    Api,
    /// In-client catalog page
    Catalog,
    /// Help / customer support page
    Help,
    /// Avatar imaging service
    ImagerAvatar,
    /// Badge imaging service
    ImagerBadge,
    /// Furniture definition data
    FurniData,
    /// Avatar figure part definition data
    FigureData,
    /// Purchasable product definition data
    ProductData,
    /// Localized text definitions
    ExternalTexts,
    /// Hashes describing the current game-data revision
    GameDataHashes,
}

impl HotelEndpoint {
    /// All members of the closed set, in declaration order
    pub const ALL: [HotelEndpoint; 10] = [
        HotelEndpoint::Api,
        HotelEndpoint::Catalog,
        HotelEndpoint::Help,
        HotelEndpoint::ImagerAvatar,
        HotelEndpoint::ImagerBadge,
        HotelEndpoint::FurniData,
        HotelEndpoint::FigureData,
        HotelEndpoint::ProductData,
        HotelEndpoint::ExternalTexts,
        HotelEndpoint::GameDataHashes,
    ];

    /// The configuration name of this endpoint
    pub fn name(&self) -> &'static str {
        match self {
            HotelEndpoint::Api => "Api",
            HotelEndpoint::Catalog => "Catalog",
            HotelEndpoint::Help => "Help",
            HotelEndpoint::ImagerAvatar => "ImagerAvatar",
            HotelEndpoint::ImagerBadge => "ImagerBadge",
            HotelEndpoint::FurniData => "FurniData",
            HotelEndpoint::FigureData => "FigureData",
            HotelEndpoint::ProductData => "ProductData",
            HotelEndpoint::ExternalTexts => "ExternalTexts",
            HotelEndpoint::GameDataHashes => "GameDataHashes",
        }
    }
}

impl fmt::Display for HotelEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a member of the closed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEndpointName(pub String);

impl FromStr for HotelEndpoint {
    type Err = UnknownEndpointName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HotelEndpoint::ALL
            .iter()
            .copied()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| UnknownEndpointName(s.to_string()))
    }
}
