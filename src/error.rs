use crate::store;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Save(store::Error),

    #[error("Unable to read list")]
    ListPages(#[source] store::Error),

    #[error("{0}")]
    Render(#[from] askama::Error),
}

impl warp::reject::Reject for Error {}
