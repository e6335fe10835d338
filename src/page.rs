use crate::naming::PageName;
use std::borrow::Cow;

#[derive(Debug)]
pub struct Page {
    pub title: String,
    pub filename: PageName,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(filename: PageName, body: Vec<u8>) -> Self {
        Self {
            title: filename.title(),
            filename,
            body,
        }
    }

    /// Page that doesn't exist on disk yet, used to edit it into existence.
    pub fn stub(filename: PageName) -> Self {
        Self::new(filename, Vec::new())
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[derive(Debug)]
pub struct RootPage {
    pub title: &'static str,
    pub pages: Vec<Page>,
}

impl RootPage {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            title: "Home",
            pages,
        }
    }
}
