use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;

use crate::config::Config;
use crate::error::Error;

const USER_AGENT: &str = concat!("htbseasons/", env!("CARGO_PKG_VERSION"));

/// A fully read HTTP response, before any interpretation of its body.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    pub async fn read(resp: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }
}

/// The v4 endpoints, one method each. Non-2xx answers are still `Ok`;
/// only transport failures are errors at this level.
#[async_trait]
pub trait V4Api: Send + Sync {
    async fn get_season_list(&self) -> Result<RawResponse, reqwest::Error>;
    async fn get_season_machines(&self) -> Result<RawResponse, reqwest::Error>;
    async fn get_season_machine_active(&self) -> Result<RawResponse, reqwest::Error>;
    async fn get_season_rewards(&self, id: u32) -> Result<RawResponse, reqwest::Error>;
    async fn get_season_user_rank(&self, id: u32) -> Result<RawResponse, reqwest::Error>;
    async fn get_season_user_followers(&self, id: u32) -> Result<RawResponse, reqwest::Error>;
}

pub struct V4Client {
    client: reqwest::Client,
    base_url: String,
}

impl V4Client {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut auth = HeaderValue::try_from(format!("Bearer {}", config.token))
            .map_err(|_| Error::Config("HTB_TOKEN is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .user_agent(USER_AGENT)
                .timeout(config.timeout)
                .build()?,
            base_url: config.base_url.trim_end_matches('/').into(),
        })
    }

    async fn get(&self, path: &str) -> Result<RawResponse, reqwest::Error> {
        let url = format!("{}{path}", self.base_url);
        tracing::trace!(%url, "GET");
        let resp = self.client.get(url).send().await?;
        RawResponse::read(resp).await
    }
}

#[async_trait]
impl V4Api for V4Client {
    async fn get_season_list(&self) -> Result<RawResponse, reqwest::Error> {
        self.get("/season/list").await
    }
    async fn get_season_machines(&self) -> Result<RawResponse, reqwest::Error> {
        self.get("/season/machines").await
    }
    async fn get_season_machine_active(&self) -> Result<RawResponse, reqwest::Error> {
        self.get("/season/machine/active").await
    }
    async fn get_season_rewards(&self, id: u32) -> Result<RawResponse, reqwest::Error> {
        self.get(&format!("/season/rewards/{id}")).await
    }
    async fn get_season_user_rank(&self, id: u32) -> Result<RawResponse, reqwest::Error> {
        self.get(&format!("/season/user/rank/{id}")).await
    }
    async fn get_season_user_followers(&self, id: u32) -> Result<RawResponse, reqwest::Error> {
        self.get(&format!("/season/user/followers/{id}")).await
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::error::Error;
    use crate::httpclient::{V4Api, V4Client};

    #[tokio::test]
    async fn test_get_season_list() {
        let mut server = mockito::Server::new_async().await;
        let client = V4Client::new(&Config::new("asdf1234").with_base_url(server.url())).unwrap();

        let json = r###"{"data":[{"id":7,"name":"Winter"}]}"###;

        let mock = server
            .mock("GET", "/season/list")
            .match_header("authorization", "Bearer asdf1234")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json)
            .create_async()
            .await;

        let raw = client.get_season_list().await.unwrap();
        mock.assert_async().await;

        assert_eq!(raw.status, 200);
        assert_eq!(&raw.body[..], json.as_bytes());
    }

    #[tokio::test]
    async fn test_season_paths_carry_id() {
        let mut server = mockito::Server::new_async().await;
        let client =
            V4Client::new(&Config::new("asdf1234").with_base_url(format!("{}/", server.url())))
                .unwrap();

        let rewards = server
            .mock("GET", "/season/rewards/7")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let rank = server
            .mock("GET", "/season/user/rank/7")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let followers = server
            .mock("GET", "/season/user/followers/7")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        client.get_season_rewards(7).await.unwrap();
        client.get_season_user_rank(7).await.unwrap();
        client.get_season_user_followers(7).await.unwrap();

        rewards.assert_async().await;
        rank.assert_async().await;
        followers.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let client = V4Client::new(&Config::new("asdf1234").with_base_url(server.url())).unwrap();

        let mock = server
            .mock("GET", "/season/machine/active")
            .with_status(401)
            .with_header("cf-ray", "8a1b2c3d4e5f6a7b-AMS")
            .with_body(r#"{"message":"Unauthenticated."}"#)
            .create_async()
            .await;

        let raw = client.get_season_machine_active().await.unwrap();
        mock.assert_async().await;

        assert_eq!(raw.status, 401);
        assert_eq!(raw.headers["cf-ray"], "8a1b2c3d4e5f6a7b-AMS");
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let err = V4Client::new(&Config::new("asdf\n1234")).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }
}
