//! reqwest-backed `SeasonSource` against the JSON-over-HTTP bridge API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::logging::{json_log, obj, v_num, v_str};
use crate::model::{Driver, Race, SeasonOverview};
use crate::state::Config;

use super::{ApiError, ApiResult, SeasonSource};

pub struct HttpSource {
    client: Client,
    base: String,
}

impl HttpSource {
    pub fn new(cfg: &Config) -> ApiResult<Self> {
        let client = Client::builder().timeout(cfg.http_timeout).build()?;
        Ok(Self {
            client,
            base: cfg.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str, season: u32) -> ApiResult<Url> {
        let raw = format!("{}/{}", self.base, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw)?;
        url.query_pairs_mut()
            .append_pair("season", &season.to_string());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, season: u32) -> ApiResult<T> {
        let url = self.endpoint(path, season)?;
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        json_log(
            "api_request",
            obj(&[
                ("path", v_str(path)),
                ("season", v_num(season as f64)),
                ("status", v_num(status.as_u16() as f64)),
            ]),
        );

        if status.as_u16() == 404 {
            return Err(ApiError::NotFound {
                resource: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                resource: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SeasonSource for HttpSource {
    async fn drivers(&self, season: u32) -> ApiResult<Vec<Driver>> {
        self.get_json("drivers", season).await
    }

    async fn races(&self, season: u32) -> ApiResult<Vec<Race>> {
        self.get_json("races", season).await
    }

    async fn race(&self, id: &str, season: u32) -> ApiResult<Race> {
        self.get_json(&format!("races/{}", id), season).await
    }

    async fn overview(&self, season: u32) -> ApiResult<SeasonOverview> {
        self.get_json("overview", season).await
    }
}
