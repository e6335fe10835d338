use crate::{context::Context, error::Error, page::RootPage, templates::View};
use warp::{reject::Rejection, Reply};

pub async fn index(ctx: Context) -> Result<impl Reply, Rejection> {
    let pages = ctx.store.list(&ctx.naming).await.map_err(|e| {
        tracing::error!("{}", e);
        warp::reject::custom(Error::ListPages(e))
    })?;

    let root = RootPage::new(pages);
    render!(View::Root(&root))
}
