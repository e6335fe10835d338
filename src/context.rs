use crate::{naming::Naming, serde::Parsed, store::PageStore};
use std::{
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
    sync::Arc,
};

/// Everything a handler needs, built once before serving and never mutated afterwards.
#[derive(derive_more::Deref, Clone)]
pub struct Context(Arc<ContextInner>);

impl Context {
    pub fn new(cfg: Config) -> Result<Self, anyhow::Error> {
        mkdir_p(&cfg.data_dir)?;

        Ok(Self(Arc::new(ContextInner {
            naming: Naming::new(cfg.allow_hyphens),
            store: PageStore::new(cfg.data_dir.clone()),
            config: cfg,
        })))
    }
}

fn mkdir_p(path: impl AsRef<Path>) -> Result<(), anyhow::Error> {
    let path = path.as_ref();
    match std::fs::create_dir_all(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(anyhow::format_err!(
            "Can't create dir {}: {}",
            path.display(),
            e
        )),
    }
}

pub struct ContextInner {
    pub config: Config,
    pub naming: Naming,
    pub store: PageStore,
}

#[derive(serde::Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_ip_addr")]
    pub ip_addr: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "tru")]
    pub allow_hyphens: bool,

    #[serde(default = "tru")]
    pub create_enabled: bool,

    #[serde(default = "default_max_form_size")]
    pub max_form_size: u64,

    #[serde(default = "default_log_level")]
    pub log_level: Parsed<tracing::Level>,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            static_dir: default_static_dir(),
            ip_addr: default_ip_addr(),
            port: default_port(),
            allow_hyphens: true,
            create_enabled: true,
            max_form_size: default_max_form_size(),
            log_level: default_log_level(),
        }
    }
}

fn tru() -> bool {
    true
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_ip_addr() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_max_form_size() -> u64 {
    1 << 20
}

fn default_log_level() -> Parsed<tracing::Level> {
    Parsed(tracing::Level::INFO)
}

#[cfg(test)]
mod test {
    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> Config {
        envy::from_iter(vars.iter().map(|(k, v)| (k.to_string(), v.to_string()))).unwrap()
    }

    #[test]
    fn defaults() {
        let cfg = from_vars(&[]);
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.static_dir, PathBuf::from("static"));
        assert_eq!(cfg.port, 8080);
        assert!(cfg.allow_hyphens);
        assert!(cfg.create_enabled);
        assert_eq!(cfg.log_level.0, tracing::Level::INFO);
    }

    #[test]
    fn overrides() {
        let cfg = from_vars(&[
            ("DATA_DIR", "/srv/wiki"),
            ("PORT", "3000"),
            ("IP_ADDR", "127.0.0.1"),
            ("ALLOW_HYPHENS", "false"),
            ("CREATE_ENABLED", "false"),
            ("MAX_FORM_SIZE", "1024"),
            ("LOG_LEVEL", "trace"),
        ]);
        assert_eq!(cfg.data_dir, PathBuf::from("/srv/wiki"));
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.ip_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(!cfg.allow_hyphens);
        assert!(!cfg.create_enabled);
        assert_eq!(cfg.max_form_size, 1024);
        assert_eq!(cfg.log_level.0, tracing::Level::TRACE);
    }

    #[test]
    fn creates_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested").join("data");
        let ctx = Context::new(Config {
            data_dir: data_dir.clone(),
            ..Config::default()
        })
        .unwrap();

        assert!(data_dir.is_dir());
        assert_eq!(ctx.store.data_dir(), data_dir.as_path());
    }
}
