use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::RngCore;
use sea_orm::DatabaseConnection;

use crate::server::data::staff_user::StaffUserRepository;
use crate::server::error::{AuthError, Error};

/// Hashes a password into an argon2 PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|err| Error::PasswordHash(err.to_string()))?;
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| Error::PasswordHash(err.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string. An unparseable hash
/// counts as a failed verification.
pub fn verify_password(hash: &str, password: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and returns the staff user. Unknown usernames and
    /// wrong passwords both come back as [`AuthError::InvalidCredentials`];
    /// deactivated accounts are rejected after the password check.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::staff_user::Model, Error> {
        let repository = StaffUserRepository::new(self.db);

        let Some(user) = repository.get_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&user.password_hash, password) {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    mod password_tests {
        use crate::server::service::auth::{hash_password, verify_password};

        #[test]
        fn hash_then_verify() {
            let hash = hash_password("muster123").unwrap();

            assert!(verify_password(&hash, "muster123"));
            assert!(!verify_password(&hash, "wrong"));
        }

        #[test]
        fn garbage_hash_fails_verification() {
            assert!(!verify_password("not-a-phc-string", "muster123"));
        }
    }

    mod login_tests {
        use entity::staff_user::StaffRole;
        use muster_test_utils::constant::TEST_PASSWORD;
        use muster_test_utils::prelude::*;

        use crate::server::error::{AuthError, Error};
        use crate::server::service::auth::AuthService;

        /// Expect success with the fixture password
        #[tokio::test]
        async fn test_login_success() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;
            let service = AuthService::new(&test.state.db);

            fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;

            let user = service.login("crewing", TEST_PASSWORD).await.unwrap();

            assert_eq!(user.username, "crewing");

            Ok(())
        }

        /// Expect InvalidCredentials for a wrong password
        #[tokio::test]
        async fn test_login_wrong_password() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;
            let service = AuthService::new(&test.state.db);

            fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;

            let result = service.login("crewing", "wrong").await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }

        /// Expect InvalidCredentials for an unknown username
        #[tokio::test]
        async fn test_login_unknown_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;
            let service = AuthService::new(&test.state.db);

            let result = service.login("nobody", TEST_PASSWORD).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }

        /// Expect AccountDisabled for a deactivated account with the right
        /// password
        #[tokio::test]
        async fn test_login_disabled_account() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;
            let service = AuthService::new(&test.state.db);

            fixtures::staff::create_inactive_staff_user(
                &test.state.db,
                "former",
                StaffRole::OperationalStaff,
            )
            .await?;

            let result = service.login("former", TEST_PASSWORD).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::AccountDisabled))
            ));

            Ok(())
        }
    }
}
