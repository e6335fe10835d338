use regex::Regex;

/// A page identifier that is known to match the routable character set.
///
/// The only way to get one is through [`Naming`], so anything holding a `PageName`
/// can safely be turned into a path below the data directory.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Deref, derive_more::Display)]
pub struct PageName(String);

impl PageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn title(&self) -> String {
        title_from_filename(&self.0)
    }
}

pub struct Naming {
    pattern: Regex,
}

impl Naming {
    pub fn new(allow_hyphens: bool) -> Self {
        let pattern = if allow_hyphens {
            r"^[a-zA-Z0-9-]+$"
        } else {
            r"^[a-zA-Z0-9]+$"
        };

        Self {
            // a literal pattern can't fail to compile
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    pub fn parse(&self, segment: &str) -> Option<PageName> {
        if self.pattern.is_match(segment) {
            Some(PageName(segment.to_owned()))
        } else {
            None
        }
    }

    pub fn from_title(&self, title: &str) -> Option<PageName> {
        self.parse(&title.replace(' ', "-"))
    }

    pub fn from_entry(&self, file_name: &str) -> Option<PageName> {
        let stem = match file_name.rfind('.') {
            Some(i) => &file_name[..i],
            None => file_name,
        };
        self.parse(&stem.to_lowercase())
    }
}

pub fn title_from_filename(filename: &str) -> String {
    filename.replace('-', " ")
}
