pub mod provider;
pub mod types;
pub mod youtube;

pub use provider::{SearchError, SearchProvider, SearchRequest};
pub use types::{SearchOrder, SearchResult};
pub use youtube::YouTubeProvider;
