use gmc_tools::{AccessToken, GmcApiError, GmcProduct};

#[allow(async_fn_in_trait)]
pub trait MerchantCenter {
    /// Create a new listing. Must fail with an error for which [`GmcApiError::is_conflict`] is true when the offer
    /// already exists.
    async fn insert_product(&self, token: &AccessToken, product: &GmcProduct) -> Result<(), GmcApiError>;
    /// Update the existing listing for `product.offer_id`.
    async fn update_product(&self, token: &AccessToken, product: &GmcProduct) -> Result<(), GmcApiError>;
}
