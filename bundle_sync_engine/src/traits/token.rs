use gmc_tools::{AccessToken, GmcApiError};

#[allow(async_fn_in_trait)]
pub trait AccessTokenSource {
    async fn acquire_access_token(&self) -> Result<AccessToken, GmcApiError>;
}
