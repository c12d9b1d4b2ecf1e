//! Employee registration.

use reqwest::{Method, StatusCode};
use tracing::info;

use newsdesk_core::error::AppError;
use newsdesk_entity::employee::NewEmployee;

use crate::client::ApiClient;

impl ApiClient {
    /// `POST register_user`. Only `201 Created` counts as success.
    pub async fn register_employee(
        &self,
        employee: &NewEmployee,
    ) -> Result<Option<String>, AppError> {
        let url = self.endpoints().url(&["register_user"]);
        let (status, text) = self.send_raw(Method::POST, url, Some(employee)).await?;

        if status != StatusCode::CREATED {
            return Err(AppError::external_service(format!(
                "Unexpected status {} while registering employee",
                status.as_u16()
            )));
        }

        info!(email = %employee.email, "Employee registered");
        Ok(super::acknowledgement(&text))
    }
}
