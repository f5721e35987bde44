use crate::ports::outbound::{Credentials, ManifestFetcher, StagedManifest};
use crate::shared::error::PomGraphError;
use crate::shared::security::MAX_FILE_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Outcome of a single GET, before retry handling
enum Attempt {
    Fetched(StagedManifest),
    /// Permanent: retrying cannot help
    Failed(PomGraphError),
    /// Transient: worth another attempt
    Retryable(PomGraphError),
}

fn fetch_error(location: &str, details: String) -> PomGraphError {
    PomGraphError::ManifestFetchError {
        location: location.to_string(),
        details,
    }
}

/// HttpManifestFetcher adapter for manifests served over HTTP(S)
///
/// Sends basic auth on every request when credentials are configured.
/// The response body is streamed into its own temporary file, written and
/// closed before it is handed back. Bodies larger than the size limit are
/// rejected without being buffered.
pub struct HttpManifestFetcher {
    client: reqwest::Client,
    credentials: Option<Credentials>,
    max_attempts: u32,
    max_body_size: u64,
}

impl HttpManifestFetcher {
    /// Creates a fetcher with the default timeout and retry configuration
    pub fn new(credentials: Option<Credentials>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("pom-graph/{}", version);
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            credentials,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_body_size: MAX_FILE_SIZE,
        })
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_max_body_size(mut self, max_body_size: u64) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    async fn fetch_with_retry(&self, location: &str) -> Result<StagedManifest> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(location).await {
                Attempt::Fetched(staged) => return Ok(staged),
                Attempt::Failed(error) => return Err(error.into()),
                Attempt::Retryable(error) if attempt >= self.max_attempts => {
                    return Err(error.into())
                }
                Attempt::Retryable(_) => {
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn fetch_once(&self, location: &str) -> Attempt {
        let mut request = self.client.get(location);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(credentials.username(), Some(credentials.password()));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_builder() => return Attempt::Failed(fetch_error(location, e.to_string())),
            Err(e) => return Attempt::Retryable(fetch_error(location, e.to_string())),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Attempt::Failed(PomGraphError::ManifestNotFound {
                location: location.to_string(),
            });
        }
        if status.is_server_error() {
            return Attempt::Retryable(fetch_error(
                location,
                format!("server returned status {}", status),
            ));
        }
        if !status.is_success() {
            return Attempt::Failed(fetch_error(
                location,
                format!("server returned status {}", status),
            ));
        }

        if response
            .content_length()
            .is_some_and(|length| length > self.max_body_size)
        {
            return Attempt::Failed(self.too_large(location));
        }

        self.stage(location, response).await
    }

    fn too_large(&self, location: &str) -> PomGraphError {
        fetch_error(
            location,
            format!("manifest is larger than the {} byte limit", self.max_body_size),
        )
    }

    /// Streams the body into a fresh temporary file and closes it
    async fn stage(&self, location: &str, mut response: Response) -> Attempt {
        let stage_error =
            |e: std::io::Error| fetch_error(location, format!("Failed to stage manifest: {}", e));

        let mut file = match NamedTempFile::new() {
            Ok(file) => file,
            Err(e) => return Attempt::Failed(stage_error(e)),
        };

        // Content-Length may be absent or wrong, so count what actually arrives
        let mut received: u64 = 0;
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => {
                    received += chunk.len() as u64;
                    if received > self.max_body_size {
                        return Attempt::Failed(self.too_large(location));
                    }
                    if let Err(e) = file.write_all(&chunk) {
                        return Attempt::Failed(stage_error(e));
                    }
                }
                Ok(None) => break,
                Err(e) => return Attempt::Retryable(fetch_error(location, e.to_string())),
            }
        }

        if let Err(e) = file.flush() {
            return Attempt::Failed(stage_error(e));
        }

        Attempt::Fetched(StagedManifest::scratch(location, file.into_temp_path()))
    }
}

#[async_trait]
impl ManifestFetcher for HttpManifestFetcher {
    async fn fetch(&self, location: &str) -> Result<StagedManifest> {
        self.fetch_with_retry(location).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const POM: &str = "<project><groupId>com.x</groupId><artifactId>core</artifactId></project>";

    #[test]
    fn test_http_fetcher_creation() {
        assert!(HttpManifestFetcher::new(None).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_stages_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repo/pom.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(POM))
            .mount(&server)
            .await;

        let fetcher = HttpManifestFetcher::new(None).unwrap();
        let location = format!("{}/repo/pom.xml", server.uri());
        let staged = fetcher.fetch(&location).await.unwrap();

        assert_eq!(staged.location(), location);
        assert_eq!(staged.read_to_string().unwrap(), POM);
    }

    #[tokio::test]
    async fn test_fetch_sends_basic_auth() {
        let server = MockServer::start().await;
        // base64("user:pass")
        Mock::given(method("GET"))
            .and(path("/secure/pom.xml"))
            .and(header("authorization", "Basic dXNlcjpwYXNz"))
            .respond_with(ResponseTemplate::new(200).set_body_string(POM))
            .expect(1)
            .mount(&server)
            .await;

        let credentials =
            Credentials::from_parts(Some("user".to_string()), Some("pass".to_string()));
        let fetcher = HttpManifestFetcher::new(credentials).unwrap();
        let staged = fetcher
            .fetch(&format!("{}/secure/pom.xml", server.uri()))
            .await
            .unwrap();

        assert_eq!(staged.read_to_string().unwrap(), POM);
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpManifestFetcher::new(None).unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing/pom.xml", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PomGraphError>(),
            Some(PomGraphError::ManifestNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let fetcher = HttpManifestFetcher::new(None).unwrap().with_max_attempts(2);
        let err = fetcher
            .fetch(&format!("{}/flaky/pom.xml", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PomGraphError>(),
            Some(PomGraphError::ManifestFetchError { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_unauthorized_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpManifestFetcher::new(None).unwrap();
        let err = fetcher
            .fetch(&format!("{}/secure/pom.xml", server.uri()))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_oversized_body_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpManifestFetcher::new(None).unwrap().with_max_body_size(16);
        let err = fetcher
            .fetch(&format!("{}/huge/pom.xml", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PomGraphError>(),
            Some(PomGraphError::ManifestFetchError { .. })
        ));
        assert!(err.to_string().contains("larger than the 16 byte limit"));
    }

    #[tokio::test]
    async fn test_fetch_accepts_body_at_size_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("y".repeat(16)))
            .mount(&server)
            .await;

        let fetcher = HttpManifestFetcher::new(None).unwrap().with_max_body_size(16);
        let staged = fetcher
            .fetch(&format!("{}/exact/pom.xml", server.uri()))
            .await
            .unwrap();

        assert_eq!(staged.read_to_string().unwrap(), "y".repeat(16));
    }

    #[tokio::test]
    async fn test_concurrent_fetches_use_separate_scratch_files() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a/pom.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("a"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/b/pom.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("b"))
            .mount(&server)
            .await;

        let fetcher = HttpManifestFetcher::new(None).unwrap();
        let location_a = format!("{}/a/pom.xml", server.uri());
        let location_b = format!("{}/b/pom.xml", server.uri());
        let (a, b) = futures::join!(fetcher.fetch(&location_a), fetcher.fetch(&location_b));
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.path(), b.path());
        assert_eq!(a.read_to_string().unwrap(), "a");
        assert_eq!(b.read_to_string().unwrap(), "b");
    }
}
