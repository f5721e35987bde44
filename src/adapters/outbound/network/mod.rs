/// Network adapters for remote manifest retrieval
mod http_fetcher;
mod routing_fetcher;

pub use http_fetcher::HttpManifestFetcher;
pub use routing_fetcher::RoutingManifestFetcher;
