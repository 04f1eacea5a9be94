/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Client for the platform's Notify REST API: device bindings and notifications.
//!
//! Request fields are forwarded as form parameters in the platform's
//! PascalCase naming (`Identity`, `BindingType`, `Address`, ...). Failures are
//! reported as upstream errors and never retried.

use comms_api_types::requests::RegisterBindingRequest;
use serde::Deserialize;
use url::Url;

use crate::config::{
    Config, ACCOUNT_SID_VAR, API_KEY_VAR, API_SECRET_VAR, NOTIFICATION_SERVICE_SID_VAR,
};
use crate::error::AppError;

/// Binding resource returned by `POST /v1/Services/{sid}/Bindings`.
#[derive(Debug, Deserialize, Clone)]
pub struct BindingResource {
    pub sid: String,
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub binding_type: Option<String>,
}

/// Notification resource returned by `POST /v1/Services/{sid}/Notifications`.
#[derive(Debug, Deserialize, Clone)]
pub struct NotificationResource {
    pub sid: String,
    #[serde(default)]
    pub identities: Vec<String>,
}

/// A Notify client bound to one notification service.
#[derive(Clone)]
pub struct NotifyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    service_sid: String,
}

impl NotifyClient {
    /// Build a client from the process configuration, sharing `http`'s connection pool.
    ///
    /// The account SID is not sent to the Notify API, but it is still required
    /// so a half-configured deployment fails the same way for every endpoint.
    pub fn from_config(config: &Config, http: reqwest::Client) -> Result<Self, AppError> {
        if config.account_sid.is_none() {
            return Err(AppError::configuration(ACCOUNT_SID_VAR));
        }
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AppError::configuration(API_KEY_VAR))?;
        let api_secret = config
            .api_secret
            .clone()
            .ok_or_else(|| AppError::configuration(API_SECRET_VAR))?;
        let service_sid = config
            .notification_service_sid
            .clone()
            .ok_or_else(|| AppError::configuration(NOTIFICATION_SERVICE_SID_VAR))?;

        Ok(Self {
            http,
            base_url: config.notify_base_url.clone(),
            api_key,
            api_secret,
            service_sid,
        })
    }

    /// Register a device binding for an identity.
    pub async fn create_binding(
        &self,
        req: &RegisterBindingRequest,
    ) -> Result<BindingResource, AppError> {
        let mut params = vec![
            ("Identity", req.identity.as_str()),
            ("BindingType", req.binding_type.as_str()),
            ("Address", req.address.as_str()),
        ];
        if let Some(endpoint) = req.endpoint.as_deref() {
            params.push(("Endpoint", endpoint));
        }

        let binding: BindingResource = self.post_form("Bindings", &params).await?;
        tracing::info!(
            "Created {} binding {} for {}",
            binding.binding_type.as_deref().unwrap_or(req.binding_type.as_str()),
            binding.sid,
            binding.identity.as_deref().unwrap_or(req.identity.as_str())
        );
        Ok(binding)
    }

    /// Send a notification to every binding of `identity`.
    pub async fn send_notification(
        &self,
        identity: &str,
        body: &str,
    ) -> Result<NotificationResource, AppError> {
        let params = [("Identity", identity), ("Body", body)];
        let notification: NotificationResource = self.post_form("Notifications", &params).await?;
        tracing::info!(
            "Created notification {} for {}",
            notification.sid,
            if notification.identities.is_empty() {
                identity.to_string()
            } else {
                notification.identities.join(", ")
            }
        );
        Ok(notification)
    }

    fn service_url(&self, resource: &str) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::internal(&format!("invalid Notify base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::internal("Notify base URL cannot have a path"))?
            .pop_if_empty()
            .extend(["v1", "Services", self.service_sid.as_str(), resource]);
        Ok(url)
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = self.service_url(resource)?;

        let response = self
            .http
            .post(url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .form(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Notify {resource} request failed. Status: {status}, Body: {body}");
            return Err(AppError::upstream(&format!(
                "Notify {resource} request returned {status}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse Notify {resource} response: {e}");
            AppError::upstream(&format!("unreadable Notify {resource} response"))
        })
    }
}
