use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

use crate::config::{ApiKey, Config};
use crate::error::RequestFailure;
use crate::model::RequestParams;
use crate::providers::anthropic;

pub use crate::providers::anthropic::MessageResponse;

pub type GatewayFuture<'a> =
    Pin<Box<dyn Future<Output = Result<MessageResponse, RequestFailure>> + 'a>>;

/// The remote generation service, reduced to the one call the relay makes.
pub trait MessageGateway {
    fn create_message<'a>(
        &'a self,
        api_key: &'a ApiKey,
        params: &'a RequestParams,
    ) -> GatewayFuture<'a>;
}

impl<G: MessageGateway + ?Sized> MessageGateway for &G {
    fn create_message<'a>(
        &'a self,
        api_key: &'a ApiKey,
        params: &'a RequestParams,
    ) -> GatewayFuture<'a> {
        (**self).create_message(api_key, params)
    }
}

pub struct AnthropicGateway<'a> {
    client: &'a Client,
    cfg: &'a Config,
}

impl<'a> AnthropicGateway<'a> {
    pub fn new(client: &'a Client, cfg: &'a Config) -> Self {
        Self { client, cfg }
    }
}

impl MessageGateway for AnthropicGateway<'_> {
    fn create_message<'b>(
        &'b self,
        api_key: &'b ApiKey,
        params: &'b RequestParams,
    ) -> GatewayFuture<'b> {
        Box::pin(anthropic::create_message(
            self.client,
            &self.cfg.base_url,
            api_key,
            params,
        ))
    }
}
