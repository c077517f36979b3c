// Adapters layer: concrete lookup implementations behind the
// AvailabilityLookup port (demo mock, http).

pub mod demo;
pub mod http;

pub use demo::DemoLookup;
pub use http::HttpLookup;
