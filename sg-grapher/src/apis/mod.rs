pub mod rate_limiter;
pub mod scryfall;

pub use scryfall::ScryfallClient;
