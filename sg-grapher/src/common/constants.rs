/// Shared constants so the client, config, and tests agree on defaults.

pub const SCRYFALL_API_NAME: &str = "scryfall";
pub const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";
pub const SCRYFALL_USER_AGENT: &str = "sg-grapher/0.1";

// Scryfall asks for at most 10 requests per second
pub const DEFAULT_RATE_LIMIT_RPM: u64 = 600;

pub const DEFAULT_PORT: u16 = 8080;

/// Marker between the oracle texts of the faces of a split card.
pub const FACE_SEPARATOR: &str = "\n//\n";
