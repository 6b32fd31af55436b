use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, LINK},
    Client,
    Method,
    Request,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{config::ShopifyConfig, pagination::next_page_cursor, ShopifyApiError, ShopifyProduct};

/// Shopify's maximum page size for the products listing.
pub const PRODUCT_PAGE_LIMIT: u32 = 250;
/// The product fields requested from Shopify. Anything else is left out of the response to keep pages small.
pub const PRODUCT_FIELDS: &str = "id,title,body_html,variants,images,product_type,tags,vendor,handle";

#[derive(Clone)]
pub struct ShopifyApi {
    config: ShopifyConfig,
    client: Arc<Client>,
}

/// A decoded REST response, along with the raw `Link` header (if Shopify sent one).
pub struct RestResponse<T> {
    pub body: T,
    pub link: Option<String>,
}

/// One page of the products listing.
#[derive(Debug, Clone, Default)]
pub struct ProductPage {
    pub products: Vec<ShopifyProduct>,
    /// The `page_info` cursor for the following page. `None` means this was the last page.
    pub next_page: Option<String>,
}

impl ShopifyApi {
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let val = HeaderValue::from_str(config.admin_access_token.reveal().as_str())
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        headers.insert("X-Shopify-Access-Token", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    async fn execute<T: DeserializeOwned>(&self, req: Request) -> Result<RestResponse<T>, ShopifyApiError> {
        trace!("Sending REST query: {}", req.url());
        let response = self.client.execute(req).await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            let link = response.headers().get(LINK).and_then(|v| v.to_str().ok()).map(String::from);
            let body = response.json::<T>().await.map_err(|e| ShopifyApiError::JsonError(e.to_string()))?;
            Ok(RestResponse { body, link })
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
            Err(ShopifyApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("https://{}/admin/api/{}{path}", self.config.shop, self.config.api_version)
    }

    /// The request for one page of the products listing: `limit`, `fields` and, when continuing, `page_info`.
    pub fn products_page_request(&self, cursor: Option<&str>) -> Result<Request, ShopifyApiError> {
        let limit = PRODUCT_PAGE_LIMIT.to_string();
        let mut params = vec![("limit", limit.as_str()), ("fields", PRODUCT_FIELDS)];
        if let Some(cursor) = cursor {
            params.push(("page_info", cursor));
        }
        self.client
            .request(Method::GET, self.url("/products.json"))
            .query(&params)
            .build()
            .map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))
    }

    /// Fetches a single page of products. Pass the `next_page` cursor of the previous page to continue, or `None` to
    /// start from the beginning of the catalog.
    pub async fn fetch_products_page(&self, cursor: Option<&str>) -> Result<ProductPage, ShopifyApiError> {
        #[derive(Deserialize)]
        struct ProductsResponse {
            products: Vec<ShopifyProduct>,
        }
        debug!("Fetching products page (cursor: {})", cursor.unwrap_or("none"));
        let req = self.products_page_request(cursor)?;
        let response = self.execute::<ProductsResponse>(req).await?;
        let next_page = next_page_cursor(response.link.as_deref());
        debug!(
            "Fetched {} products. Next page: {}",
            response.body.products.len(),
            next_page.as_deref().unwrap_or("none")
        );
        Ok(ProductPage { products: response.body.products, next_page })
    }
}
