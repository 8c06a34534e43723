use crate::server::error::ServerResult;
use config::Config;
use doku::Document;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct TradukoConfig {
    /// Address where the frontend is served
    #[default(SocketAddr::from(([127, 0, 0, 1], 8131)))]
    #[doku(as = "String", example = "127.0.0.1:8131")]
    pub bind: SocketAddr,
    /// Details of the translation platform api the pages fetch from
    pub api: TradukoConfigApi,
}

impl TradukoConfig {
    pub fn read() -> ServerResult<Self> {
        let config = Config::builder()
            .add_source(config::File::with_name("config.toml"))
            // Cant use _ as separator due to https://github.com/mehcode/config-rs/issues/391
            .add_source(config::Environment::with_prefix("TRADUKO").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct TradukoConfigApi {
    /// Hostname of the api, requests go to `http://{hostname}{path}`
    #[default("localhost:8160")]
    #[doku(example = "localhost:8160")]
    pub hostname: String,
}
