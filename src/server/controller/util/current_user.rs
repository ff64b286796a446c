use tower_sessions::Session;

use crate::server::{
    data::staff_user::StaffUserRepository,
    error::{AuthError, Error},
    model::{app::AppState, session::SessionUserId},
};

/// Resolves the logged-in staff user from the session.
///
/// # Returns
/// - `Ok(Model)`: the staff user behind the session cookie
/// - `Err(AuthError::NotLoggedIn)`: no user ID in the session
/// - `Err(AuthError::UserNotInDatabase)`: stale session; the session is
///   cleared so the next request starts clean
pub async fn current_user(
    state: &AppState,
    session: &Session,
) -> Result<entity::staff_user::Model, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::NotLoggedIn.into());
    };

    let Some(user) = StaffUserRepository::new(&state.db).get_by_id(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            user_id,
            "session cleared: user no longer exists in the database"
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}

#[cfg(test)]
mod tests {
    mod current_user_tests {
        use entity::staff_user::StaffRole;
        use muster_test_utils::prelude::*;

        use crate::server::controller::util::current_user::current_user;
        use crate::server::error::{AuthError, Error};
        use crate::server::model::session::SessionUserId;

        /// Expect the staff user behind the session cookie
        #[tokio::test]
        async fn test_current_user_success() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

            let user = fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;
            SessionUserId::insert(&test.session, user.id).await.unwrap();

            let resolved = current_user(&test.state(), &test.session).await.unwrap();

            assert_eq!(resolved.username, "crewing");

            Ok(())
        }

        /// Expect NotLoggedIn without a session entry
        #[tokio::test]
        async fn test_current_user_not_logged_in() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

            let result = current_user(&test.state(), &test.session).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::NotLoggedIn))
            ));

            Ok(())
        }

        /// Expect a stale session to be cleared and flagged
        #[tokio::test]
        async fn test_current_user_stale_session() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

            SessionUserId::insert(&test.session, 999).await.unwrap();

            let result = current_user(&test.state(), &test.session).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::UserNotInDatabase(999)))
            ));

            Ok(())
        }
    }
}
