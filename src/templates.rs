use crate::page::{Page, RootPage};
use askama::Template;

#[derive(Template)]
#[template(path = "root.html")]
pub struct Root<'a> {
    pub root: &'a RootPage,
}

#[derive(Template)]
#[template(path = "view.html")]
pub struct ViewPage<'a> {
    pub page: &'a Page,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditPage<'a> {
    pub page: &'a Page,
}

#[derive(Template)]
#[template(path = "new.html")]
pub struct NewPage<'a> {
    pub error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct Error<'a> {
    code: u16,
    msg: &'a str,
}

impl<'a> Error<'a> {
    pub fn not_found() -> Self {
        Self {
            code: 404,
            msg: "Not found",
        }
    }
}

/// Every page the wiki can render, each bound to its template.
pub enum View<'a> {
    Root(&'a RootPage),
    Page(&'a Page),
    Edit(&'a Page),
    New { error: Option<&'a str> },
}

impl View<'_> {
    pub fn render(&self) -> askama::Result<String> {
        match *self {
            View::Root(root) => Root { root }.render(),
            View::Page(page) => ViewPage { page }.render(),
            View::Edit(page) => EditPage { page }.render(),
            View::New { error } => NewPage { error }.render(),
        }
    }
}
