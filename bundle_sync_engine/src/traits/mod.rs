//! # Provider interfaces
//!
//! These traits are the seams between the sync logic and the outside world. Real implementations live in
//! [`crate::integrations`]; tests supply mocks.
//!
//! * [`BundleCatalog`] serves the source catalog one page at a time.
//! * [`MerchantCenter`] creates and updates destination listings.
//! * [`AccessTokenSource`] provides the bearer token that [`MerchantCenter`] calls are made with.
mod catalog;
mod merchant;
mod token;

pub use catalog::BundleCatalog;
pub use merchant::MerchantCenter;
pub use token::AccessTokenSource;
