use crate::{
    context::Context, error::Error, forms, naming::PageName, page::Page, templates::View,
};
use warp::{http::StatusCode, reject::Rejection, reply::Response, Reply};

const INVALID_TITLE: &str = "Invalid page title: use letters, digits and spaces only";

pub async fn view(ctx: Context, name: PageName) -> Result<impl Reply, Rejection> {
    let page = ctx.store.load(name).await.map_err(|e| {
        tracing::warn!("{}", e);
        warp::reject::not_found()
    })?;

    render!(View::Page(&page))
}

pub async fn edit(ctx: Context, name: PageName) -> Result<impl Reply, Rejection> {
    let page = match ctx.store.load(name.clone()).await {
        Ok(page) => page,
        Err(e) => {
            tracing::debug!("{}, editing a new page", e);
            Page::stub(name)
        }
    };

    render!(View::Edit(&page))
}

pub async fn save(
    ctx: Context,
    name: PageName,
    form: forms::SavePage,
) -> Result<impl Reply, Rejection> {
    let page = Page::new(name, form.body.into_bytes());
    store(&ctx, &page).await?;
    Ok(super::found(super::view_url(&page.filename)))
}

pub async fn new_page() -> Result<impl Reply, Rejection> {
    render!(View::New { error: None })
}

pub async fn create(ctx: Context, form: forms::CreatePage) -> Result<Response, Rejection> {
    let name = match ctx.naming.from_title(&form.title) {
        Some(name) => name,
        None => {
            tracing::warn!("Rejected page title {:?}", form.title);
            return render!(
                StatusCode::BAD_REQUEST,
                View::New {
                    error: Some(INVALID_TITLE)
                }
            )
            .map(Reply::into_response);
        }
    };

    let page = Page::new(name, form.body.into_bytes());
    store(&ctx, &page).await?;
    Ok(super::found(super::view_url(&page.filename)).into_response())
}

async fn store(ctx: &Context, page: &Page) -> Result<(), Rejection> {
    ctx.store.save(page).await.map_err(|e| {
        tracing::error!("{}", e);
        warp::reject::custom(Error::Save(e))
    })?;
    tracing::info!("Saved page {}", page.filename);
    Ok(())
}
