use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use crate::configs::settings::Controller;
use crate::errors::ClientError;
use crate::models::{Device, DevicePowerState, DeviceState};

/// JSON client for the remote smart-home controller.
///
/// Pure I/O boundary: every method maps to one HTTP request and reports
/// non-2xx statuses as [`ClientError::UnexpectedStatus`]. Callers decide
/// what a failure means.
pub struct ControllerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ControllerClient {
    /// Build from controller settings, injecting the authorization token
    /// as a default header on every request.
    pub fn new(controller: &Controller) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", controller.auth_token))
            .map_err(|_| ClientError::InvalidAuthToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(&controller.base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Ensure the base URL ends with a slash so relative joins append.
    fn normalize_base_url(raw: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));

        Ok(url)
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path)?;
        tracing::debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let url = self.url(path)?;
        tracing::debug!("POST {url}");

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    pub async fn find_all_devices(&self) -> Result<Vec<Device>, ClientError> {
        self.get("devices").await
    }

    pub async fn find_all_device_states(&self) -> Result<Vec<DeviceState>, ClientError> {
        self.get("device-states").await
    }

    pub async fn set_power_state(
        &self,
        device_id: &str,
        power_state: DevicePowerState,
    ) -> Result<(), ClientError> {
        self.post(
            &format!("devices/{device_id}/power-state"),
            &json!({ "powerState": power_state }),
        )
        .await
    }

    pub async fn set_percentage(&self, device_id: &str, percentage: u8) -> Result<(), ClientError> {
        self.post(
            &format!("devices/{device_id}/percentage"),
            &json!({ "percentage": percentage }),
        )
        .await
    }

    pub async fn set_target_temperature(
        &self,
        device_id: &str,
        target_temperature: i32,
    ) -> Result<(), ClientError> {
        self.post(
            &format!("devices/{device_id}/target-temperature"),
            &json!({ "targetTemperature": target_temperature }),
        )
        .await
    }
}
