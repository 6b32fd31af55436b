//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A sync can take a while (one request per catalog page and one or two per bundle), but every step is awaited, so
//! a running sync does not block the worker thread from serving other requests.
use actix_web::{get, web, HttpResponse, Responder};
use bundle_sync_engine::{
    AccessTokenSource,
    BundleCatalog,
    BundleSyncApi,
    MerchantCenter,
    SyncReport,
    NO_BUNDLES_MESSAGE,
};
use log::*;

use crate::{
    data_objects::{BundleTag, SyncResponse},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Sync  ----------------------------------------------------
route!(sync_bundles => Post "/sync" impl BundleCatalog, MerchantCenter, AccessTokenSource);
/// Route handler for the sync endpoint
///
/// Runs a full sync for the configured bundle tag.
/// * If no product carries the tag, responds `200` with a plain-text message and Merchant Center is not contacted.
/// * Otherwise responds `200` with `{"status": "Done syncing bundles!", "details": [...]}`, one line per bundle.
///   Bundles that failed individually are listed as `Error for <title>: <reason>`.
/// * If the sync itself fails (Shopify unreachable, no access token, or an aborted batch), responds `500` with
///   `{"error": "..."}`.
pub async fn sync_bundles<C, M, T>(
    tag: web::Data<BundleTag>,
    api: web::Data<BundleSyncApi<C, M, T>>,
) -> Result<HttpResponse, ServerError>
where
    C: BundleCatalog,
    M: MerchantCenter,
    T: AccessTokenSource,
{
    debug!("💻️ POST sync for tag '{}'", tag.0);
    let report = api.sync(&tag.0).await.map_err(|e| {
        error!("💻️ Sync failed. {e}");
        ServerError::from(e)
    })?;
    match report {
        SyncReport::NoBundles => Ok(HttpResponse::Ok().body(NO_BUNDLES_MESSAGE)),
        report => Ok(HttpResponse::Ok().json(SyncResponse::done(report.details()))),
    }
}
