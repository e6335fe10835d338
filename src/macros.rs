macro_rules! render {
    ($view:expr) => {
        render!(warp::http::StatusCode::OK, $view)
    };
    ($status:expr, $view:expr) => {
        $view
            .render()
            .map(|html| warp::reply::with_status(warp::reply::html(html), $status))
            .map_err(|e| {
                tracing::error!("Can't render template: {}", e);
                warp::reject::custom(crate::error::Error::Render(e))
            })
    };
}

macro_rules! routes {
    ($x:expr, $($y:expr),*) => { {
            let filter = boxed_on_debug!($x);
            $(
                let filter = boxed_on_debug!(filter.or($y));
            )*
            filter
    } }
}

#[cfg(debug_assertions)]
macro_rules! boxed_on_debug {
    ($x:expr) => {
        $x.boxed()
    };
}

#[cfg(not(debug_assertions))]
macro_rules! boxed_on_debug {
    ($x:expr) => {
        $x
    };
}
