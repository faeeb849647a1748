//! Startup routines: database, session layer, reference data seeding,
//! and the initial admin account.

use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::catalog::CatalogRepository,
    error::AppError,
    service::password,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the same SQLite pool the
/// application uses, migrating the session table if needed.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("failed to migrate session store: {}", e)))?;

    let layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(layer)
}

struct CategorySeed {
    name: &'static str,
    description: &'static str,
    max_occupancy: i32,
    nightly_rate: i64,
    room_count: i32,
    floor: i32,
}

const CATEGORY_SEEDS: &[CategorySeed] = &[
    CategorySeed {
        name: "Individual",
        description: "Single room for one guest",
        max_occupancy: 1,
        nightly_rate: 6000,
        room_count: 9,
        floor: 2,
    },
    CategorySeed {
        name: "King Size",
        description: "Double room with a king size bed",
        max_occupancy: 2,
        nightly_rate: 9000,
        room_count: 10,
        floor: 1,
    },
    CategorySeed {
        name: "Family",
        description: "Family room for up to four guests",
        max_occupancy: 4,
        nightly_rate: 12000,
        room_count: 9,
        floor: 3,
    },
    CategorySeed {
        name: "Suite",
        description: "Suite with living area for up to three guests",
        max_occupancy: 3,
        nightly_rate: 18000,
        room_count: 2,
        floor: 4,
    },
];

/// Seeds the room catalog on first start.
///
/// Runs only when the room table is empty, so an already-populated
/// database is never touched. The whole seed runs in one transaction.
/// Room numbers are `<floor><nn>`, e.g. `201` for the first room on
/// floor two.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<(), AppError> {
    if CatalogRepository::new(db).count_rooms().await? > 0 {
        return Ok(());
    }

    let txn = db.begin().await?;

    for seed in CATEGORY_SEEDS {
        let category = entity::prelude::RoomCategory::insert(entity::room_category::ActiveModel {
            name: ActiveValue::Set(seed.name.to_string()),
            description: ActiveValue::Set(Some(seed.description.to_string())),
            max_occupancy: ActiveValue::Set(seed.max_occupancy),
            nightly_rate: ActiveValue::Set(seed.nightly_rate),
            total_rooms: ActiveValue::Set(seed.room_count),
            ..Default::default()
        })
        .exec_with_returning(&txn)
        .await?;

        for n in 1..=seed.room_count {
            entity::prelude::Room::insert(entity::room::ActiveModel {
                number: ActiveValue::Set(format!("{}{:02}", seed.floor, n)),
                category_id: ActiveValue::Set(category.id),
                state: ActiveValue::Set(entity::room::RoomState::Active),
                ..Default::default()
            })
            .exec(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    tracing::info!("Seeded room catalog");

    Ok(())
}

/// Creates the initial admin account from the environment if no admin
/// exists yet.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if entity::prelude::Admin::find().count(db).await? > 0 {
        return Ok(());
    }

    let password_hash = password::hash_password(&config.admin_password)?;

    entity::prelude::Admin::insert(entity::admin::ActiveModel {
        username: ActiveValue::Set(config.admin_username.clone()),
        password_hash: ActiveValue::Set(password_hash),
        ..Default::default()
    })
    .exec(db)
    .await?;

    tracing::info!("Created initial admin account '{}'", config.admin_username);

    Ok(())
}
