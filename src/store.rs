use crate::{
    naming::{Naming, PageName},
    page::Page,
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};
use tokio::{fs, io::AsyncWriteExt};

const EXTENSION: &str = "txt";

pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, name: &PageName) -> PathBuf {
        self.data_dir
            .join(name.as_str())
            .with_extension(EXTENSION)
    }

    pub async fn load(&self, name: PageName) -> Result<Page, Error> {
        let path = self.path(&name);
        tracing::debug!("attempting to load {}", path.display());
        match fs::read(&path).await {
            Ok(body) => Ok(Page::new(name, body)),
            Err(source) => Err(Error::NotFound {
                name: name.to_string(),
                source,
            }),
        }
    }

    pub async fn save(&self, page: &Page) -> Result<(), Error> {
        let path = self.path(&page.filename);
        match write_private(&path, &page.body).await {
            Ok(()) => Ok(()),
            Err(source) => Err(Error::Write { path, source }),
        }
    }

    /// Loads every page in the data directory, sorted by file name.
    ///
    /// Fails as a whole when any single entry can't be turned into a page.
    pub async fn list(&self, naming: &Naming) -> Result<Vec<Page>, Error> {
        let list_err = |source: std::io::Error| Error::List {
            path: self.data_dir.clone(),
            source,
        };

        let mut dir = fs::read_dir(&self.data_dir).await.map_err(list_err)?;
        let mut file_names = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(list_err)? {
            file_names.push(entry.file_name());
        }
        file_names.sort_unstable();

        let mut pages = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            let name = file_name
                .to_str()
                .and_then(|s| naming.from_entry(s))
                .ok_or_else(|| Error::InvalidEntry(file_name.clone()))?;
            pages.push(self.load(name).await?);
        }

        Ok(pages)
    }
}

#[cfg(unix)]
async fn write_private(path: &Path, body: &[u8]) -> Result<(), std::io::Error> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
        .await?;
    file.write_all(body).await?;
    file.flush().await
}

#[cfg(not(unix))]
async fn write_private(path: &Path, body: &[u8]) -> Result<(), std::io::Error> {
    let mut file = fs::File::create(path).await?;
    file.write_all(body).await?;
    file.flush().await
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Page {name} not found: {source}")]
    NotFound {
        name: String,
        source: std::io::Error,
    },

    #[error("open {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Can't list {}: {}", path.display(), source)]
    List {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Not a page file: {0:?}")]
    InvalidEntry(OsString),
}

#[cfg(test)]
mod test {
    use super::*;

    fn setup() -> (tempfile::TempDir, PageStore, Naming) {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path().to_owned());
        (dir, store, Naming::new(true))
    }

    #[tokio::test]
    async fn save_then_load() {
        let (dir, store, naming) = setup();
        let name = naming.parse("my-page").unwrap();
        store
            .save(&Page::new(name.clone(), b"content X".to_vec()))
            .await
            .unwrap();

        assert_eq!(
            std::fs::read(dir.path().join("my-page.txt")).unwrap(),
            b"content X"
        );

        let page = store.load(name).await.unwrap();
        assert_eq!(page.title, "my page");
        assert_eq!(page.body, b"content X");
    }

    #[tokio::test]
    async fn later_save_replaces_content() {
        let (_dir, store, naming) = setup();
        let name = naming.parse("page").unwrap();
        store
            .save(&Page::new(name.clone(), b"a much longer first body".to_vec()))
            .await
            .unwrap();
        store
            .save(&Page::new(name.clone(), b"second".to_vec()))
            .await
            .unwrap();

        assert_eq!(store.load(name).await.unwrap().body, b"second");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn saved_pages_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, store, naming) = setup();
        let name = naming.parse("secret").unwrap();
        store.save(&Page::stub(name)).await.unwrap();

        let mode = std::fs::metadata(dir.path().join("secret.txt"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn missing_page_is_not_found() {
        let (_dir, store, naming) = setup();
        let err = store.load(naming.parse("nope").unwrap()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn save_into_missing_dir_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path().join("gone"));
        let name = Naming::new(true).parse("page").unwrap();

        let err = store.save(&Page::stub(name)).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("open "), "{}", msg);
        assert!(msg.contains("page.txt"), "{}", msg);
    }

    #[tokio::test]
    async fn list_loads_every_page_in_order() {
        let (dir, store, naming) = setup();
        std::fs::write(dir.path().join("zebra.txt"), "z").unwrap();
        std::fs::write(dir.path().join("apple-pie.txt"), "a").unwrap();

        let pages = store.list(&naming).await.unwrap();
        let titles = pages.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["apple pie", "zebra"]);
        assert_eq!(pages[0].body, b"a");
    }

    #[tokio::test]
    async fn list_fails_on_a_single_unreadable_page() {
        let (dir, store, naming) = setup();
        std::fs::write(dir.path().join("fine.txt"), "ok").unwrap();
        std::fs::create_dir(dir.path().join("broken.txt")).unwrap();

        assert!(matches!(
            store.list(&naming).await,
            Err(Error::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn list_fails_on_unroutable_entries() {
        let (dir, store, naming) = setup();
        std::fs::write(dir.path().join("has space.txt"), "x").unwrap();

        assert!(matches!(
            store.list(&naming).await,
            Err(Error::InvalidEntry(_))
        ));
    }

    #[tokio::test]
    async fn list_of_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path().join("gone"));
        assert!(matches!(
            store.list(&Naming::new(true)).await,
            Err(Error::List { .. })
        ));
    }
}
