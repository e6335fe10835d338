use crate::{context::Context, naming::PageName};
use std::convert::Infallible;
use warp::{path::FullPath, Filter, Rejection};

pub fn with_context(ctx: Context) -> impl Filter<Extract = (Context,), Error = Infallible> + Clone {
    warp::any().map(move || ctx.clone())
}

/// Extracts the next path segment as a page name.
///
/// The segment is percent-decoded first. Anything outside the routable character set is
/// rejected as not found, before any handler gets to see it.
pub fn page_name(ctx: Context) -> impl Filter<Extract = (PageName,), Error = Rejection> + Clone {
    warp::path::param().and_then(move |segment: String| {
        let name = urlencoding::decode(&segment)
            .ok()
            .and_then(|decoded| ctx.naming.parse(&decoded));
        async move {
            name.ok_or_else(|| {
                tracing::debug!("rejected page name {:?}", segment);
                warp::reject::not_found()
            })
        }
    })
}

/// Like `warp::path::end`, but a trailing slash is left over instead of matching.
pub fn exact_end() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::path::full()
        .and(warp::path::end())
        .and_then(|full: FullPath| async move {
            if full.as_str().ends_with('/') {
                Err(warp::reject::not_found())
            } else {
                Ok(())
            }
        })
        .untuple_one()
}

pub fn create_enabled(ctx: Context) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::any()
        .and_then(move || {
            let enabled = ctx.config.create_enabled;
            async move {
                if enabled {
                    Ok(())
                } else {
                    Err(warp::reject::not_found())
                }
            }
        })
        .untuple_one()
}
