pub mod fetch_current_user;
pub mod login_user;
pub mod register_user;
pub mod resolve_caller;

pub use fetch_current_user::{FetchCurrentUserUseCase, FetchUserError};
pub use login_user::{LoginError, LoginOutput, LoginRequest, LoginUserUseCase};
pub use register_user::{
    CreateUserError, CreateUserUseCase, RegisterUserCommand, RegisterUserInput,
    RegisterUserUseCase, RegistrationError, RegistrationOutput,
};
pub use resolve_caller::{ResolveCallerError, ResolveCallerUseCase};
