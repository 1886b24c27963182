//! Account Repository

use super::{BaseRepository, RepoResult, strip_table_prefix};
use shared::models::Account;
use shared::util::now_rfc3339;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

const ACCOUNT_TABLE: &str = "account";

#[derive(Clone)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find account by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Account>> {
        let pure_id = strip_table_prefix(ACCOUNT_TABLE, id);
        let mut result = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM type::thing($table, $id)")
            .bind(("table", ACCOUNT_TABLE))
            .bind(("id", pure_id.to_string()))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Create an account record. The auth/billing service owns accounts;
    /// this exists for provisioning and tests.
    pub async fn create(&self, mut account: Account) -> RepoResult<Account> {
        let key = Uuid::new_v4().simple().to_string();
        account.id = None;
        account.created_at = Some(now_rfc3339());

        self.base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", ACCOUNT_TABLE))
            .bind(("id", key.clone()))
            .bind(("data", account))
            .await?
            .check()?;

        self.find_by_id(&key)
            .await?
            .ok_or_else(|| super::RepoError::Database("Failed to create account".into()))
    }
}
