//! Create, Read, Update, Delete operations
//!
//! The six HR modules share one conventional JSON CRUD contract:
//!
//! - list: `GET /api/admin/hr/{resource}`
//! - retrieve: `GET /api/admin/hr/{resource}/{id}`
//! - create: `POST /api/admin/hr/{resource}`
//! - update: `PUT /api/admin/hr/{resource}/{id}`
//! - delete: `DELETE /api/admin/hr/{resource}/{id}`
//!
//! Writes are pessimistic: create and update return the server's copy of the
//! record, which the caller merges into local state (see
//! [`ModuleStore`](crate::store::ModuleStore)).

use reqwest::Method;

use super::HrModule;
use super::response;
use crate::HrClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Record;
use crate::model::RecordId;

impl HrClient {
    /// Lists all records for a module.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hrdesk::HrClient;
    /// use hrdesk::api::HrModule;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), hrdesk::error::Error> {
    /// let client = HrClient::builder().url("https://hr.example.com").build()?;
    /// let awards = client.list(HrModule::Awards).await?;
    /// println!("{} award records", awards.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, module: HrModule) -> Result<Vec<Record>, Error> {
        log::debug!("listing {}", module.resource());
        let response = self
            .request(Method::GET, &module.collection_path(), None)
            .await?;
        let body: serde_json::Value = response.json().await.map_err(ApiError::from)?;
        Ok(response::unwrap_records(body)?)
    }

    /// Retrieves a single record by id.
    pub async fn retrieve(&self, module: HrModule, id: &RecordId) -> Result<Record, Error> {
        let response = self
            .request(Method::GET, &module.record_path(id), None)
            .await?;
        let body: serde_json::Value = response.json().await.map_err(ApiError::from)?;
        Ok(response::unwrap_record(body)?)
    }

    /// Creates a record and returns the server's copy.
    pub async fn create(&self, module: HrModule, record: &Record) -> Result<Record, Error> {
        log::debug!("creating {} record", module.resource());
        let body = serde_json::to_string(record)?;
        let response = self
            .request(Method::POST, &module.collection_path(), Some(body))
            .await?;
        let body: serde_json::Value = response.json().await.map_err(ApiError::from)?;
        Ok(response::unwrap_record(body)?)
    }

    /// Updates a record and returns the server's copy.
    pub async fn update(
        &self,
        module: HrModule,
        id: &RecordId,
        record: &Record,
    ) -> Result<Record, Error> {
        log::debug!("updating {} record {}", module.resource(), id);
        let body = serde_json::to_string(record)?;
        let response = self
            .request(Method::PUT, &module.record_path(id), Some(body))
            .await?;
        let body: serde_json::Value = response.json().await.map_err(ApiError::from)?;
        Ok(response::unwrap_record(body)?)
    }

    /// Deletes a record.
    pub async fn delete(&self, module: HrModule, id: &RecordId) -> Result<(), Error> {
        log::debug!("deleting {} record {}", module.resource(), id);
        self.request(Method::DELETE, &module.record_path(id), None)
            .await?;
        Ok(())
    }

    /// Fetches the employee lookup feed used by every module's add/edit form.
    ///
    /// This endpoint is the worst offender for envelope inconsistency; the
    /// body always passes through [`response::unwrap_records`].
    pub async fn employees(&self) -> Result<Vec<Record>, Error> {
        log::debug!("fetching employee lookup feed");
        let response = self
            .request(Method::GET, "/api/admin/employees", None)
            .await?;
        let body: serde_json::Value = response.json().await.map_err(ApiError::from)?;
        Ok(response::unwrap_records(body)?)
    }
}
