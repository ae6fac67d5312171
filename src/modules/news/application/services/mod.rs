pub mod news_listing_service;
pub mod news_service;

pub use news_listing_service::NewsListingService;
pub use news_service::NewsService;
