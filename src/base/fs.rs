use crate::base;

/// Application filesystem.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Serde: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Serde for base::Config {
    const FILENAME: &'static str = ".tissuelog.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path::<base::Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Serde,
    {
        self.dir.join(T::FILENAME)
    }

    /// Returns the path of the table named in `config`.
    pub fn table_path(&self, config: &base::Config) -> std::path::PathBuf {
        self.dir.join(format!("{}.csv", config.table))
    }

    /// Opens the table named in `config`. Nothing is read or written yet.
    pub fn store(&self, config: &base::Config) -> base::CsvStore {
        base::CsvStore::new(self.table_path(config))
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Serde,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(self.path::<T>()) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(T::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Serde,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a filesystem object anchored at a temporary directory. The `Fs`
    /// must not outlive the returned `TempDir`.
    fn tempfs() -> (Fs, tempfile::TempDir) {
        let td = tempfile::TempDir::new().unwrap();
        let fs = Fs::new(td.path());
        (fs, td)
    }

    #[test]
    fn test_config() {
        let (fs, _td) = tempfs();

        assert!(!fs.is_repo());
        assert_eq!(fs.read::<base::Config>().unwrap(), base::Config::default());

        let s = r#"{"table": "Gudang", "windowDays": 0}"#;
        let config = s.parse::<base::Config>().unwrap();
        std::fs::write(fs.path::<base::Config>(), s).unwrap();
        assert!(fs.is_repo());
        assert_eq!(fs.read::<base::Config>().unwrap(), config);

        fs.write(&config).unwrap();
        assert_eq!(
            std::fs::read_to_string(fs.path::<base::Config>()).unwrap(),
            config.to_string()
        );
        assert_eq!(fs.table_path(&config), fs.dir().join("Gudang.csv"));
    }

    #[test]
    fn test_config_invalid() {
        let (fs, _td) = tempfs();
        std::fs::write(fs.path::<base::Config>(), "{").unwrap();
        assert!(matches!(fs.read::<base::Config>(), Err(ReadError::Serde(_))));
    }
}
