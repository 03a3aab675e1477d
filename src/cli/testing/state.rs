use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// Renders JSON-line records as the CSV table a store would hold, header
/// included.
pub fn table(rl: &str) -> String {
    let rl = rl.parse::<base::Recordlist>().unwrap();
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(base::store::HEADER).unwrap();
    for r in rl.iter() {
        wtr.serialize(r.to_row()).unwrap();
    }
    String::from_utf8(wtr.into_inner().unwrap()).unwrap()
}

/// The expected or actual contents of a repo directory. Unset fields
/// correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    /// Raw contents of the table named in the config.
    table: Option<String>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the table to a header followed by `rl`'s records.
    pub fn with_rl(self, rl: &str) -> Self {
        self.with_table(&table(rl))
    }

    /// Sets the table's raw contents.
    pub fn with_table(mut self, s: &str) -> Self {
        self.table = Some(s.to_string());
        self
    }

    /// Reads the config and table from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = fs
            .path::<base::Config>()
            .exists()
            .then(|| fs.read::<base::Config>().unwrap());
        let table_path = fs.table_path(config.as_ref().unwrap_or(&base::Config::default()));
        let table = table_path
            .exists()
            .then(|| std::fs::read_to_string(table_path).unwrap());
        Self { config, table }
    }
}

/// Representation of a repo directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    table: Option<std::borrow::Cow<'a, str>>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the table to a header followed by `rl`'s records.
    pub fn with_rl(mut self, rl: &str) -> Self {
        self.table = Some(table(rl).into());
        self
    }

    /// Sets the table's raw contents.
    pub fn with_table(mut self, s: &'a str) -> Self {
        self.table = Some(s.into());
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not
    /// valid.
    pub fn to_fs(&self, fs: &base::Fs) {
        let config = match self.config {
            Some(s) => {
                let config = s.parse::<base::Config>();
                assert!(config.is_ok(), "{:?}", config);
                std::fs::write(fs.path::<base::Config>(), s).unwrap();
                config.unwrap()
            }
            None => base::Config::default(),
        };
        if let Some(ref s) = self.table {
            std::fs::write(fs.table_path(&config), s.as_ref()).unwrap();
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(ref s) = self.table {
            os = os.with_table(s);
        }
        os
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(
            table(
                r#"
                    {"c":"Roll","d":"2015-03-30","s":"1","o":10}
                    {"c":"Roll","d":"2015-03-31","s":"","i":30}
                "#
            ),
            indoc!(
                "
                Jenis,Tanggal,Hari,Shift,Pengeluaran,Pemasukan
                Roll,2015-03-30,Senin,1,10,0
                Roll,2015-03-31,Selasa,,0,30
                "
            )
        );
    }

    #[test]
    fn test_roundtrip_through_fs() {
        let (fs, _td) = tempfs();
        let ss = StrState::new()
            .with_config(r#"{"table":"Gudang"}"#)
            .with_rl(r#"{"c":"Roll","d":"2015-03-30","s":"1","o":10}"#);
        ss.to_fs(&fs);
        assert!(fs.dir().join("Gudang.csv").is_file());
        assert_eq!(State::from_fs(&fs), ss.to_state());
    }
}
