//! Configuration schema definitions.
//!
//! Every setting can be given as a command line flag or through the
//! environment variable of the same name. The struct is parsed once at
//! startup and shared read-only afterwards.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::Parser;

/// Path appended to the OpenShift API server to look up the token owner.
pub const OPENSHIFT_USER_INFO_PATH: &str = "/apis/user.openshift.io/v1/users/~";

/// Root configuration for the BFF.
#[derive(Clone, Parser)]
#[command(name = "llama-stack-bff", version, about = "Backend-for-frontend for the Llama Stack UI")]
pub struct EnvConfig {
    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory holding the compiled frontend.
    #[arg(long, env = "STATIC_ASSETS_DIR", default_value = "./static")]
    pub static_assets_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Origins allowed to make cross-origin requests (`*` for any).
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Base URL of the upstream Llama Stack service.
    #[arg(long, env = "LLAMA_STACK_URL", default_value = "")]
    pub llama_stack_url: String,

    /// Require OAuth bearer tokens on the protected API.
    #[arg(long, env = "OAUTH_ENABLED", default_value_t = false, value_parser = BoolishValueParser::new(), action = clap::ArgAction::Set)]
    pub oauth_enabled: bool,

    #[arg(long, env = "OAUTH_CLIENT_ID", default_value = "")]
    pub oauth_client_id: String,

    #[arg(long, env = "OAUTH_CLIENT_SECRET", default_value = "", hide_env_values = true)]
    pub oauth_client_secret: String,

    #[arg(long, env = "OAUTH_REDIRECT_URI", default_value = "")]
    pub oauth_redirect_uri: String,

    #[arg(long, env = "OAUTH_SERVER_URL", default_value = "")]
    pub oauth_server_url: String,

    /// OpenShift API server used to resolve the user behind a token.
    #[arg(long, env = "OPENSHIFT_API_SERVER_URL", default_value = "")]
    pub openshift_api_server_url: String,

    /// Explicit user-info endpoint; overrides the OpenShift default.
    #[arg(long, env = "OAUTH_USER_INFO_ENDPOINT", default_value = "")]
    pub oauth_user_info_endpoint: String,
}

impl EnvConfig {
    /// Address the listener binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Upstream base URL without a trailing slash, `None` when unset.
    pub fn llama_stack_url(&self) -> Option<&str> {
        let url = self.llama_stack_url.trim().trim_end_matches('/');
        (!url.is_empty()).then_some(url)
    }

    /// Configured CORS origins, blanks removed.
    pub fn cors_origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
    }

    /// Endpoint used to validate bearer tokens.
    ///
    /// Falls back from the explicit endpoint to the OpenShift API server and
    /// finally to the OAuth server itself.
    pub fn user_info_endpoint(&self) -> String {
        if !self.oauth_user_info_endpoint.is_empty() {
            return self.oauth_user_info_endpoint.clone();
        }
        let base = if self.openshift_api_server_url.is_empty() {
            &self.oauth_server_url
        } else {
            &self.openshift_api_server_url
        };
        format!("{}{}", base.trim_end_matches('/'), OPENSHIFT_USER_INFO_PATH)
    }

    /// Token endpoint of the OAuth server.
    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth/token", self.oauth_server_url.trim_end_matches('/'))
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            static_assets_dir: PathBuf::from("./static"),
            log_level: "info".to_string(),
            allowed_origins: Vec::new(),
            llama_stack_url: String::new(),
            oauth_enabled: false,
            oauth_client_id: String::new(),
            oauth_client_secret: String::new(),
            oauth_redirect_uri: String::new(),
            oauth_server_url: String::new(),
            openshift_api_server_url: String::new(),
            oauth_user_info_endpoint: String::new(),
        }
    }
}

// Hand-written so the client secret never reaches the logs.
impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.oauth_client_secret.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("EnvConfig")
            .field("port", &self.port)
            .field("static_assets_dir", &self.static_assets_dir)
            .field("log_level", &self.log_level)
            .field("allowed_origins", &self.allowed_origins)
            .field("llama_stack_url", &self.llama_stack_url)
            .field("oauth_enabled", &self.oauth_enabled)
            .field("oauth_client_id", &self.oauth_client_id)
            .field("oauth_client_secret", &secret)
            .field("oauth_redirect_uri", &self.oauth_redirect_uri)
            .field("oauth_server_url", &self.oauth_server_url)
            .field("openshift_api_server_url", &self.openshift_api_server_url)
            .field("oauth_user_info_endpoint", &self.oauth_user_info_endpoint)
            .finish()
    }
}
