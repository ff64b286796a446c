use sea_orm::DatabaseConnection;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{
    catalog::Catalog,
    config::Config,
    data::{form::FormTemplateRepository, staff_user::StaffUserRepository},
    error::Error,
    service::auth::hash_password,
};

use entity::staff_user::StaffRole;

/// Default staff accounts seeded into an empty database, one per role.
static SEED_ACCOUNTS: &[(&str, &str, StaffRole)] = &[
    ("director", "Director", StaffRole::Director),
    ("crewing", "Crewing Manager", StaffRole::CrewingManager),
    ("expert", "Expert Staff", StaffRole::ExpertStaff),
    ("documentation", "Documentation Officer", StaffRole::DocumentationOfficer),
    ("accounting", "Accounting Officer", StaffRole::AccountingOfficer),
    ("training", "Training Officer", StaffRole::TrainingOfficer),
    ("operations", "Operational Staff", StaffRole::OperationalStaff),
];

/// Load the reference catalog, with `CATALOG_DIR` overriding the bundled
/// files when set.
pub fn load_catalog(config: &Config) -> Result<Catalog, Error> {
    match &config.catalog_dir {
        Some(dir) => Catalog::load(dir),
        None => Catalog::bundled(),
    }
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure cookie-based session management backed by an in-memory store.
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    // Secure cookies outside of debug builds.
    let development_mode = cfg!(debug_assertions);

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(!development_mode)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Seed one staff account per role. Accounts that already exist are left
/// untouched, so a changed `DEFAULT_STAFF_PASSWORD` never rotates passwords.
pub async fn seed_staff_users(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let repository = StaffUserRepository::new(db);

    for (username, full_name, role) in SEED_ACCOUNTS {
        if repository.get_by_username(username).await?.is_some() {
            continue;
        }

        let password_hash = hash_password(&config.seed_password)?;
        repository
            .create(
                username.to_string(),
                format!("{username}@example.com"),
                password_hash,
                full_name.to_string(),
                *role,
            )
            .await?;

        tracing::info!(username, "seeded staff account");
    }

    Ok(())
}

/// Copy the catalog's form definitions into the template table on first
/// start. A non-empty table is assumed to be current.
pub async fn seed_form_templates(db: &DatabaseConnection, catalog: &Catalog) -> Result<(), Error> {
    let repository = FormTemplateRepository::new(db);

    if repository.count().await? > 0 {
        return Ok(());
    }

    for form in &catalog.forms {
        let fields = serde_json::to_string(&form.fields)?;
        repository
            .create(
                form.code.clone(),
                form.title.clone(),
                form.category.clone(),
                form.pages,
                fields,
            )
            .await?;
    }

    tracing::info!(count = catalog.forms.len(), "seeded form templates");

    Ok(())
}

#[cfg(test)]
mod tests {
    mod seed_tests {
        use muster_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::catalog::Catalog;
        use crate::server::startup::seed_form_templates;

        /// Expect seeding to fill an empty table once and then no-op
        #[tokio::test]
        async fn test_seed_form_templates_idempotent() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::FormTemplate)?;
            let catalog = Catalog::bundled().unwrap();

            seed_form_templates(&test.state.db, &catalog).await.unwrap();
            seed_form_templates(&test.state.db, &catalog).await.unwrap();

            let templates = entity::prelude::FormTemplate::find()
                .all(&test.state.db)
                .await?;
            assert_eq!(templates.len(), catalog.forms.len());

            Ok(())
        }
    }
}
