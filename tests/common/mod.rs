// wiremock stand-in for an Artifactory instance. The mock server lives on
// its own tokio runtime so the blocking client can be called directly
// from the test thread.

#![allow(dead_code)]

use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const BASIC_ADMIN: &str = "Basic YWRtaW46cGFzc3dvcmQ=";

pub struct MockArtifactory {
    server: MockServer,
    rt: Runtime,
}

impl MockArtifactory {
    pub fn start() -> Self {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let server = rt.block_on(MockServer::start());
        MockArtifactory { server, rt }
    }

    /// Base URL handed to the client, with the usual context path.
    pub fn url(&self) -> String {
        format!("{}/artifactory/", self.server.uri())
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Panics if any mounted `expect(..)` was not met.
    pub fn verify(&self) {
        self.rt.block_on(self.server.verify());
    }
}

/// Body of a pattern search answering with `files`.
pub fn search_response(pattern: &str, files: &[&str]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "repoUri": "http://localhost:8081/artifactory/libs",
        "sourcePattern": pattern,
        "files": files,
    }))
}
