mod content;
mod dashboard;
mod users;

pub use content::{
    list_content_handler, toggle_content_handler, ContentQuery, ToggleRequest,
    __path_list_content_handler, __path_toggle_content_handler,
};
pub use dashboard::{
    dashboard_handler, settings_handler, __path_dashboard_handler, __path_settings_handler,
};
pub use users::{
    delete_user_handler, list_users_handler, verify_user_handler, UserListQuery,
    __path_delete_user_handler, __path_list_users_handler, __path_verify_user_handler,
};
