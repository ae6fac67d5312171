mod fetch_user;
mod login_user;
mod register_user;

pub use fetch_user::get_current_user_handler;
pub use login_user::{login_user_handler, LoginRequestDto, __path_login_user_handler};
pub use register_user::{
    register_user_handler, AuthResponse, RegisterUserRequest, __path_register_user_handler,
};
