//! Request extractors.

pub mod headers;
pub mod path;

pub use headers::HeadersQuery;
pub use path::YearPath;
