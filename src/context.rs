//! Application context handed to every command handler: configuration,
//! session gate, state database and (lazily) the record store.

use crate::config::Config;
use crate::core::session::{KvStore, MemoryStore, SessionGate};
use crate::db::kv::SqliteStore;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::warning;
use std::rc::Rc;

pub struct AppContext {
    pub cfg: Config,
    pub session: SessionGate<Box<dyn KvStore>>,
    /// Connection used for the internal log; `None` when the state database
    /// could not be opened.
    pub state_db: Option<Rc<DbPool>>,
    /// Why the session cannot be persisted, if it cannot.
    pub storage_error: Option<String>,
    records: Option<RecordStore>,
}

impl AppContext {
    /// Open the state database named in `cfg`. Never fails: without a usable
    /// database the session lives in memory and starts logged out.
    pub fn open(cfg: Config) -> Self {
        let (store, state_db, storage_error): (
            Box<dyn KvStore>,
            Option<Rc<DbPool>>,
            Option<String>,
        ) = match DbPool::new(&cfg.database) {
            Ok(pool) => {
                let pool = Rc::new(pool);
                let store = SqliteStore::from_pool(Rc::clone(&pool));
                (Box::new(store), Some(pool), None)
            }
            Err(e) => (Box::new(MemoryStore::new()), None, Some(e.to_string())),
        };

        Self {
            cfg,
            session: SessionGate::open(store),
            state_db,
            storage_error,
            records: None,
        }
    }

    pub fn require_login(&self) -> AppResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }

    /// Records, loaded on first use.
    pub fn records(&mut self) -> AppResult<&RecordStore> {
        let records = match self.records.take() {
            Some(r) => r,
            None => {
                let dataset = self.cfg.dataset_path();
                RecordStore::load(dataset.as_deref(), self.cfg.total_floors)?
            }
        };
        Ok(&*self.records.insert(records))
    }

    /// Write to the internal log. Failures are reported, never fatal.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        let Some(db) = &self.state_db else {
            return;
        };
        if let Err(e) = log::audit(&db.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}
