#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use diesel::{connection::SimpleConnection as _, r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use evspot_core::{repositories as repo, usecases as uc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type Connection = SqliteConnection;

type ConnectionManager = r2d2::ConnectionManager<Connection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedConnectionPool = Arc<RwLock<ConnectionPool>>;

/// Read access for queries.
///
/// Holds the shared side of the pool lock, so no write transaction
/// can start while it is alive.
pub struct DbReadOnly<'a> {
    _locked_pool: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.read();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("No database connection available for reading: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }
}

/// The single writer.
pub struct DbReadWrite<'a> {
    _locked_pool: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// A connection inside of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.write();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("No database connection available for writing: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    /// Run a use case in a transaction that is rolled back on any error.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        // diesel only returns its own error type from a transaction
        let mut usecase_error = None;
        self.conn
            .get_mut()
            .transaction(|conn| {
                f(&DbConnection::new(conn)).map_err(|err| {
                    usecase_error = Some(err.into());
                    diesel::result::Error::RollbackTransaction
                })
            })
            .map_err(|err| match usecase_error {
                Some(usecase_error) => usecase_error,
                None => uc::Error::Repo(match err {
                    diesel::result::Error::NotFound => repo::Error::NotFound,
                    err => repo::Error::Other(err.into()),
                }),
            })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

/// Applied to every connection the pool opens.
///
/// SQLite keeps these settings per connection. Without them a station
/// could be deleted while its comments and reactions stay behind.
#[derive(Debug)]
struct ConnectionOptions;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(
            r#"
PRAGMA busy_timeout = 5000;  -- other processes may hold the file lock
PRAGMA synchronous = NORMAL; -- sufficient with WAL
PRAGMA foreign_keys = 1;     -- cascading deletes of child rows
"#,
        )
        .map_err(r2d2::Error::QueryError)
    }
}

/// The pool of SQLite connections.
///
/// Readers share the pool lock, a writer locks it exclusively. SQLite
/// only allows one writer per file and answers concurrent writes with
/// `SQLITE_BUSY`, so requests queue up here instead.
#[derive(Clone)]
pub struct Connections {
    pool: SharedConnectionPool,
}

/// Settings of the database file itself, applied once on startup.
///
/// The encoding can only be set before any table exists.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    connection.batch_execute(
        r#"
PRAGMA journal_mode = WAL;       -- readers don't block the writer
PRAGMA wal_checkpoint(TRUNCATE); -- shrink the WAL file left by the last run
PRAGMA encoding = 'UTF-8';
"#,
    )?;
    Ok(())
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // r2d2 would keep retrying a file that cannot be opened
        use diesel::Connection as _;
        SqliteConnection::establish(url)?;
        let manager = ConnectionManager::new(url);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionOptions))
            .build(manager)?;
        initialize_database(&mut *pool.get()?)?;
        Ok(Self::new(pool))
    }

    fn new(pool: ConnectionPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        DbReadWrite::try_new(&self.pool)
    }
}

pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let mut sqlite_conn = conn.sqlite_conn();
    let applied = sqlite_conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    for version in applied {
        log::debug!("Applied database migration {version}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::{sql_types::Integer, RunQueryDsl as _};

    #[derive(QueryableByName)]
    struct ForeignKeys {
        #[diesel(sql_type = Integer)]
        foreign_keys: i32,
    }

    fn foreign_keys(conn: &mut SqliteConnection) -> i32 {
        diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<ForeignKeys>(conn)
            .unwrap()
            .foreign_keys
    }

    #[test]
    fn enforce_foreign_keys_on_every_connection() {
        let db = Connections::init(":memory:", 3).unwrap();
        let readers = [
            db.shared().unwrap(),
            db.shared().unwrap(),
            db.shared().unwrap(),
        ];
        for reader in &readers {
            assert_eq!(1, foreign_keys(&mut reader.conn.borrow_mut()));
        }
    }
}
