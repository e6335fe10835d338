use crate::{context::Context, filters, handlers};
use std::convert::Infallible;
use warp::Filter;

pub fn routes(
    ctx: Context,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    let context = filters::with_context(ctx.clone());
    let page_name = filters::page_name(ctx.clone());
    let create_enabled = filters::create_enabled(ctx.clone());
    let form_size_limit = warp::body::content_length_limit(ctx.config.max_form_size);

    // path filters come before method filters so a bad path is a 404, not a 405
    let root = warp::path::end()
        .and(warp::get())
        .and(context.clone())
        .and_then(handlers::root::index);

    let view = warp::path("view")
        .and(context.clone())
        .and(page_name.clone())
        .and(filters::exact_end())
        .and(warp::get())
        .and_then(handlers::wiki::view);
    let edit = warp::path("edit")
        .and(context.clone())
        .and(page_name.clone())
        .and(filters::exact_end())
        .and(warp::get())
        .and_then(handlers::wiki::edit);
    let save = warp::path("save")
        .and(context.clone())
        .and(page_name)
        .and(filters::exact_end())
        .and(warp::post())
        .and(form_size_limit)
        .and(warp::body::form())
        .and_then(handlers::wiki::save);

    let new = warp::path("new")
        .and(warp::path::end())
        .and(create_enabled.clone())
        .and(warp::get())
        .and_then(handlers::wiki::new_page);
    let create = warp::path("create")
        .and(warp::path::end())
        .and(create_enabled)
        .and(warp::post())
        .and(context)
        .and(form_size_limit)
        .and(warp::body::form())
        .and_then(handlers::wiki::create);

    let static_ = warp::path("static").and(warp::fs::dir(ctx.config.static_dir.clone()));

    let routes = routes! {
        root,
        view,
        edit,
        save,
        new,
        create,
        static_
    };

    routes
        .with(warp::trace::request())
        .recover(handlers::handle_rejection)
}
