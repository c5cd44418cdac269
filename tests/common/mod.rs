use northwind_model::schema::create_all_tables;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);
        let db = Database::connect(options)
            .await
            .expect("could not connect to sqlite");

        // sqlite only enforces foreign keys with the pragma on.
        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("could not enable foreign keys");

        create_all_tables(&db).await.expect("could not create schema");

        Self { db }
    }
}
