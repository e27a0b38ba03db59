//! Mapping from game-server hosts to public web domains.
//!
//! Regional game servers follow the naming pattern `game-{cc}.habbo.com`;
//! the region code determines which public web domain the session belongs
//! to. Unrecognized hosts resolve to nothing, which callers must treat as
//! fatal for that connection attempt.

/// Derive the public web domain from a raw game-server host.
///
/// # Arguments
///
/// * `host` - Raw host string of the connected game server, e.g.
///   `game-us.habbo.com`
///
/// # Returns
///
/// * `Some(domain)` - The web domain for the host's region, e.g. `habbo.com`
/// * `None` - The host does not match any known regional server pattern
pub fn domain_from_game_host(host: &str) -> Option<String> {
    let region = host
        .strip_prefix("game-")?
        .strip_suffix(".habbo.com")?;

    let domain = match region {
        "us" => "habbo.com",
        "br" => "habbo.com.br",
        "tr" => "habbo.com.tr",
        "de" => "habbo.de",
        "es" => "habbo.es",
        "fi" => "habbo.fi",
        "fr" => "habbo.fr",
        "it" => "habbo.it",
        "nl" => "habbo.nl",
        _ => return None,
    };

    Some(domain.to_string())
}
