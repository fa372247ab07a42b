use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::models::{Account, DateType, PeriodStatistic, ViewType};

/// Thin JSON client for the finance backend's read endpoints.
#[derive(Debug, Clone)]
pub struct StatisticsClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatisticsClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::Validation(format!(
                "Backend URL must start with http:// or https://, got {}",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn statistics_path(date_type: DateType, view_type: ViewType) -> String {
        format!(
            "/api/statistics/{}/{}/",
            date_type.path_segment(),
            view_type.path_segment()
        )
    }

    pub async fn fetch_statistics(
        &self,
        date_type: DateType,
        view_type: ViewType,
    ) -> AppResult<Vec<PeriodStatistic>> {
        self.get(&Self::statistics_path(date_type, view_type)).await
    }

    pub async fn fetch_accounts(&self) -> AppResult<Vec<Account>> {
        self.get("/api/account/").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(AppError::Backend {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}
