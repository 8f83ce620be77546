use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::query::Query;
use crate::error::{AppError, AppResult};

/// Thin client for the remote table API. Stateless apart from the two
/// configuration strings; every call is one request/response with no retry
/// and no timeout beyond the transport's own.
#[derive(Clone)]
pub struct TableClient {
    http: Client,
    base_url: String,
    service_key: String,
}

#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl TableClient {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> AppResult<Vec<T>> {
        let response = self
            .http
            .get(self.table_url(table))
            .query(&query.to_params())
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(store_error(table, response).await);
        }
        Ok(response.json().await?)
    }

    /// Bulk insert; the store assigns ids and returns the full rows.
    pub async fn insert<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        rows: &[B],
    ) -> AppResult<Vec<T>> {
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(store_error(table, response).await);
        }
        Ok(response.json().await?)
    }

    /// Targeted update by primary key. Returns the updated row, or NotFound
    /// when the id matches nothing.
    pub async fn update<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        id: Uuid,
        patch: &B,
    ) -> AppResult<T> {
        let response = self
            .http
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(store_error(table, response).await);
        }
        let mut rows: Vec<T> = response.json().await?;
        if rows.is_empty() {
            return Err(AppError::NotFound(format!(
                "No {table} row with id {id}"
            )));
        }
        Ok(rows.remove(0))
    }

    pub async fn delete(&self, table: &str, query: &Query) -> AppResult<()> {
        let response = self
            .http
            .delete(self.table_url(table))
            .query(&query.to_params())
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(store_error(table, response).await);
        }
        Ok(())
    }
}

/// Maps a non-2xx store response. The one case callers branch on is a table
/// that does not exist at all (the store was provisioned without it), which
/// must surface with remediation instead of reading like a transient fault.
async fn store_error(table: &str, response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let parsed: Option<StoreErrorBody> = serde_json::from_str(&body).ok();
    let code = parsed.as_ref().and_then(|b| b.code.as_deref());
    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone())
        .unwrap_or_else(|| body.clone());

    if is_table_missing(code, &message) {
        return AppError::TableMissing {
            table: table.to_string(),
        };
    }

    AppError::StoreError(format!("{table}: {status}: {message}"))
}

/// Error-code/message pattern match for "the table itself is absent".
/// `42P01` is the SQL undefined-table code; `PGRST205` is the table API's
/// schema-cache miss for an unknown table.
pub(crate) fn is_table_missing(code: Option<&str>, message: &str) -> bool {
    if matches!(code, Some("42P01") | Some("PGRST205")) {
        return true;
    }
    let pattern =
        Regex::new(r#"relation .* does not exist|[Cc]ould not find the table"#).unwrap();
    pattern.is_match(message)
}
