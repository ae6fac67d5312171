mod listing;
mod stories;

pub use listing::{
    list_news_handler, my_news_handler, NewsListQuery, __path_list_news_handler,
    __path_my_news_handler,
};
pub use stories::{
    create_news_handler, delete_news_handler, get_news_handler, update_news_handler, NewsForm,
    NewsRequest, __path_create_news_handler, __path_delete_news_handler, __path_get_news_handler,
    __path_update_news_handler,
};
