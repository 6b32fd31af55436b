use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::Serialize;

use crate::{gmc_product::product_rest_id, AccessToken, GmcApiError, GmcConfig, GmcProduct, ONLINE_CHANNEL};

#[derive(Clone)]
pub struct GmcApi {
    config: GmcConfig,
    client: Arc<Client>,
}

/// `products.insert` takes the product resource plus the channel it is listed on.
#[derive(Serialize)]
struct ChannelProduct<'a> {
    #[serde(flatten)]
    product: &'a GmcProduct,
    channel: &'a str,
}

impl GmcApi {
    pub fn new(config: GmcConfig) -> Result<Self, GmcApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GmcApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn products_path(&self) -> String {
        format!("{}/products", self.config.merchant_id)
    }

    pub fn product_path(&self, offer_id: &str) -> String {
        let id = product_rest_id(&urlencoding::encode(offer_id));
        format!("{}/products/{id}", self.config.merchant_id)
    }

    /// Sends an authenticated request and checks the status. Any 2xx reply is a success, whatever its body; the
    /// body of a non-2xx reply becomes the `message` of [`GmcApiError::QueryError`].
    pub async fn rest_command<B: Serialize>(
        &self,
        token: &AccessToken,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<(), GmcApiError> {
        let url = self.url(path);
        trace!("Sending Merchant Center request: {method} {url}");
        let mut req = self.client.request(method, url).bearer_auth(token.reveal());
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| GmcApiError::RestResponseError(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            trace!("Merchant Center request successful. {status}");
            Ok(())
        } else {
            let message = response.text().await.map_err(|e| GmcApiError::RestResponseError(e.to_string()))?;
            Err(GmcApiError::QueryError { status: status.as_u16(), message })
        }
    }

    /// Creates a new online listing. Merchant Center answers `409 Conflict` if the offer already exists; see
    /// [`GmcApiError::is_conflict`].
    pub async fn insert_product(&self, token: &AccessToken, product: &GmcProduct) -> Result<(), GmcApiError> {
        let body = ChannelProduct { product, channel: ONLINE_CHANNEL };
        debug!("Inserting product {}", product.offer_id);
        self.rest_command(token, Method::POST, &self.products_path(), Some(body)).await?;
        info!("Inserted product {} ({})", product.offer_id, product.title);
        Ok(())
    }

    /// Updates an existing online listing, addressed by `online:en:US:<offerId>`.
    pub async fn update_product(&self, token: &AccessToken, product: &GmcProduct) -> Result<(), GmcApiError> {
        let path = self.product_path(&product.offer_id);
        debug!("Updating product {}", product.offer_id);
        self.rest_command(token, Method::PATCH, &path, Some(product)).await?;
        info!("Updated product {} ({})", product.offer_id, product.title);
        Ok(())
    }
}
