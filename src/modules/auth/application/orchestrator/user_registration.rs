use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{Role, User, UserView},
    ports::{
        incoming::use_cases::{
            CreateUserUseCase, RegisterUserCommand, RegisterUserUseCase, RegistrationError,
            RegistrationOutput,
        },
        outgoing::{TokenProvider, UserRepository},
    },
};
use crate::email::application::ports::outgoing::{VerificationNotifier, VerificationRecipient};

pub const FAN_REGISTRATION_MESSAGE: &str = "Registration successful";
pub const VERIFIED_ROLE_REGISTRATION_MESSAGE: &str =
    "Registration successful. Please check your email for verification instructions.";

// ============================================================================
// User Registration Service (Orchestration Layer)
// ============================================================================

/// Creates the account, issues the first token and sends the verification-request email for roles
/// that need one. A failure after the account exists undoes it so the address can register again.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user: Arc<dyn CreateUserUseCase + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    notifier: Arc<dyn VerificationNotifier + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user: Arc<dyn CreateUserUseCase + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        notifier: Arc<dyn VerificationNotifier + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            create_user,
            user_repository,
            notifier,
            token_provider,
        }
    }

    async fn request_verification(&self, user: &User) -> Result<(), RegistrationError> {
        let recipient = VerificationRecipient {
            email: user.email.clone(),
            username: user.username.clone(),
            account_kind: user.role.display_name().to_string(),
        };

        let Err(send_err) = self.notifier.notify_verification_request(&recipient).await else {
            return Ok(());
        };

        tracing::warn!(
            user_id = %user.id,
            error = %send_err,
            "Verification email failed, rolling back registration"
        );
        self.roll_back(user).await;

        Err(RegistrationError::VerificationEmailFailed(
            send_err.to_string(),
        ))
    }

    async fn roll_back(&self, user: &User) {
        if let Err(delete_err) = self.user_repository.delete_user(user.id).await {
            tracing::error!(
                user_id = %user.id,
                error = %delete_err,
                "Rollback of registration failed, account left behind"
            );
        }
    }
}

#[async_trait]
impl RegisterUserUseCase for UserRegistrationOrchestrator {
    async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegistrationOutput, RegistrationError> {
        // Step 1: Create user account
        let user = self.create_user.execute(&command).await?;

        // Step 2: Token, before any email goes out
        let token = match self.token_provider.generate_access_token(user.id.value()) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(
                    user_id = %user.id,
                    error = %e,
                    "Token generation failed, rolling back registration"
                );
                self.roll_back(&user).await;
                return Err(RegistrationError::TokenGenerationFailed(e.to_string()));
            }
        };

        // Step 3: Verification request, awaited so a failure can be undone
        if user.role.requests_verification() {
            self.request_verification(&user).await?;
        }

        let message = if user.role == Role::Fan {
            FAN_REGISTRATION_MESSAGE
        } else {
            VERIFIED_ROLE_REGISTRATION_MESSAGE
        };

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(RegistrationOutput {
            token,
            user: UserView::from(user),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::{
        domain::entities::UserId,
        ports::{
            incoming::use_cases::{CreateUserError, RegisterUserInput},
            outgoing::{NewUser, TokenClaims, TokenError, UserRepositoryError},
        },
    };
    use crate::email::application::ports::outgoing::EmailError;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    // =====================================================
    // Mocks
    // =====================================================

    struct MockCreateUser {
        result: Result<User, CreateUserError>,
    }

    #[async_trait]
    impl CreateUserUseCase for MockCreateUser {
        async fn execute(&self, _command: &RegisterUserCommand) -> Result<User, CreateUserError> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct MockUserRepository {
        deleted: Mutex<Vec<UserId>>,
        fail_delete: bool,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, _user: NewUser) -> Result<User, UserRepositoryError> {
            unimplemented!("Creation goes through the create-user use case")
        }

        async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
            self.deleted.lock().unwrap().push(user_id);
            if self.fail_delete {
                return Err(UserRepositoryError::DatabaseError("gone".into()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        fail: bool,
        sent: Mutex<Vec<VerificationRecipient>>,
    }

    #[async_trait]
    impl VerificationNotifier for MockNotifier {
        async fn notify_verification_request(
            &self,
            recipient: &VerificationRecipient,
        ) -> Result<(), EmailError> {
            self.sent.lock().unwrap().push(recipient.clone());
            if self.fail {
                return Err(EmailError::Transport("smtp down".into()));
            }
            Ok(())
        }
    }

    struct StubTokens;

    impl TokenProvider for StubTokens {
        fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Ok("jwt".into())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!()
        }
    }

    struct BrokenTokens;

    impl TokenProvider for BrokenTokens {
        fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Err(TokenError::EncodingError("missing key".into()))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!()
        }
    }

    // =====================================================
    // Helpers
    // =====================================================

    fn user(role: Role) -> User {
        let now = Utc::now();
        User {
            id: UserId::from(Uuid::new_v4()),
            username: "pelican".into(),
            email: "pelican@example.com".into(),
            password_hash: "hash".into(),
            role,
            genre: None,
            home_city: None,
            is_active: true,
            is_verified: false,
            verification_requested: role.requests_verification(),
            created_at: now,
            updated_at: now,
        }
    }

    fn command() -> RegisterUserCommand {
        RegisterUserCommand::new(RegisterUserInput {
            username: Some("pelican".into()),
            email: Some("pelican@example.com".into()),
            password: Some("secret1".into()),
            role: Some("fan".into()),
            genre: None,
            home_city: None,
        })
        .unwrap()
    }

    fn orchestrator(
        created: Result<User, CreateUserError>,
        repository: Arc<MockUserRepository>,
        notifier: Arc<MockNotifier>,
    ) -> UserRegistrationOrchestrator {
        UserRegistrationOrchestrator::new(
            Arc::new(MockCreateUser { result: created }),
            repository,
            notifier,
            Arc::new(StubTokens),
        )
    }

    // =====================================================
    // Tests
    // =====================================================

    #[tokio::test]
    async fn fan_registration_sends_no_email() {
        let notifier = Arc::new(MockNotifier::default());
        let orch = orchestrator(
            Ok(user(Role::Fan)),
            Arc::new(MockUserRepository::default()),
            notifier.clone(),
        );

        let output = orch.register(command()).await.unwrap();

        assert_eq!(output.token, "jwt");
        assert_eq!(output.message, FAN_REGISTRATION_MESSAGE);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn venue_registration_sends_verification_request() {
        let notifier = Arc::new(MockNotifier::default());
        let orch = orchestrator(
            Ok(user(Role::Venue)),
            Arc::new(MockUserRepository::default()),
            notifier.clone(),
        );

        let output = orch.register(command()).await.unwrap();

        assert_eq!(output.message, VERIFIED_ROLE_REGISTRATION_MESSAGE);
        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].account_kind, "Venue");
        assert_eq!(sent[0].email, "pelican@example.com");
    }

    #[tokio::test]
    async fn email_failure_deletes_the_new_account() {
        let account = user(Role::Artist);
        let id = account.id;
        let repository = Arc::new(MockUserRepository::default());
        let notifier = Arc::new(MockNotifier {
            fail: true,
            ..Default::default()
        });
        let orch = orchestrator(Ok(account), repository.clone(), notifier);

        let result = orch.register(command()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::VerificationEmailFailed(_))
        ));
        assert_eq!(repository.deleted.lock().unwrap().as_slice(), &[id]);
    }

    #[tokio::test]
    async fn failed_rollback_still_reports_email_failure() {
        let repository = Arc::new(MockUserRepository {
            fail_delete: true,
            ..Default::default()
        });
        let notifier = Arc::new(MockNotifier {
            fail: true,
            ..Default::default()
        });
        let orch = orchestrator(Ok(user(Role::Journalist)), repository, notifier);

        let result = orch.register(command()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::VerificationEmailFailed(_))
        ));
    }

    #[tokio::test]
    async fn token_failure_deletes_the_new_account_before_any_email() {
        let account = user(Role::Venue);
        let id = account.id;
        let repository = Arc::new(MockUserRepository::default());
        let notifier = Arc::new(MockNotifier::default());
        let orch = UserRegistrationOrchestrator::new(
            Arc::new(MockCreateUser { result: Ok(account) }),
            repository.clone(),
            notifier.clone(),
            Arc::new(BrokenTokens),
        );

        let result = orch.register(command()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::TokenGenerationFailed(_))
        ));
        assert_eq!(repository.deleted.lock().unwrap().as_slice(), &[id]);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_failure_skips_email_and_token() {
        let notifier = Arc::new(MockNotifier::default());
        let orch = orchestrator(
            Err(CreateUserError::EmailTaken),
            Arc::new(MockUserRepository::default()),
            notifier.clone(),
        );

        let result = orch.register(command()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::CreateUser(CreateUserError::EmailTaken))
        ));
        assert!(notifier.sent.lock().unwrap().is_empty());
    }
}
