pub mod use_cases;

pub use use_cases::{
    AdminError, ContentList, DashboardUseCase, DeleteUserUseCase, ListContentUseCase,
    ListUsersUseCase, ToggleContentUseCase, UserList, VerifyUserUseCase,
};
