pub mod http;

pub use http::HttpRequester;
