use crate::base;

/// Header row every table starts with.
pub const HEADER: [&str; 6] = [
    "Jenis",
    "Tanggal",
    "Hari",
    "Shift",
    "Pengeluaran",
    "Pemasukan",
];

/// One stored transaction, fields in table column order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    #[serde(rename = "Jenis")]
    pub category: String,
    /// `yyyy-mm-dd`
    #[serde(rename = "Tanggal")]
    pub date: String,
    #[serde(rename = "Hari")]
    pub weekday: String,
    #[serde(rename = "Shift")]
    pub shift: String,
    #[serde(rename = "Pengeluaran")]
    pub outbound: base::Qty,
    #[serde(rename = "Pemasukan")]
    pub inbound: base::Qty,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid row at line {line}")]
    Row {
        line: usize,
        #[source]
        source: csv::Error,
    },
    #[error("invalid record at line {line}")]
    Record {
        line: usize,
        #[source]
        source: base::record::RowError,
    },
    #[error("unexpected header [{}]", .found.join(", "))]
    HeaderMismatch { found: Vec<String> },
    #[error("failed to reset header")]
    Reset(#[source] StoreWriteError),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreWriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// An ordered, append-only table of transaction rows.
pub trait Store {
    /// Returns the first row of the table, or `None` if the table is empty.
    fn header(&self) -> Result<Option<Vec<String>>, StoreReadError>;

    /// Clears the table and writes [`HEADER`].
    fn reset(&mut self) -> Result<(), StoreWriteError>;

    fn append(&mut self, row: &Row) -> Result<(), StoreWriteError>;

    /// Returns every row after the header, in append order.
    fn read_all(&self) -> Result<Vec<Row>, StoreReadError>;

    /// Makes sure the table starts with [`HEADER`] before first use. An empty
    /// table always gets the header. A table with any other first row is
    /// reset if `reset_mismatched_header` is set, and is an error otherwise.
    fn prepare(&mut self, reset_mismatched_header: bool) -> Result<(), StoreReadError> {
        match self.header()? {
            Some(found) if found.iter().map(String::as_str).eq(HEADER) => Ok(()),
            Some(found) if !reset_mismatched_header => {
                Err(StoreReadError::HeaderMismatch { found })
            }
            Some(found) => {
                tracing::warn!(?found, "header mismatch, resetting table");
                self.reset().map_err(StoreReadError::Reset)
            }
            None => {
                tracing::info!("writing header to empty table");
                self.reset().map_err(StoreReadError::Reset)
            }
        }
    }

    /// Reads every row as a record.
    fn snapshot(&self) -> Result<base::Recordlist, StoreReadError> {
        self.read_all()?
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                base::Record::try_from(row).map_err(|e| StoreReadError::Record {
                    line: i + 2,
                    source: e,
                })
            })
            .collect()
    }
}

/// A table kept as a CSV file.
pub struct CsvStore {
    path: std::path::PathBuf,
}

impl CsvStore {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Opens the file for reading, or returns `None` if it does not exist.
    fn open(&self) -> std::io::Result<Option<std::fs::File>> {
        match std::fs::File::open(&self.path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn reader(file: std::fs::File, has_headers: bool) -> csv::Reader<std::fs::File> {
        csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file)
    }
}

impl Store for CsvStore {
    fn header(&self) -> Result<Option<Vec<String>>, StoreReadError> {
        let Some(file) = self.open()? else {
            return Ok(None);
        };
        let mut rdr = Self::reader(file, false);
        match rdr.records().next() {
            Some(Ok(record)) => Ok(Some(record.iter().map(str::to_string).collect())),
            Some(Err(e)) => Err(StoreReadError::Row { line: 1, source: e }),
            None => Ok(None),
        }
    }

    fn reset(&mut self) -> Result<(), StoreWriteError> {
        let file = std::fs::File::create(&self.path)?;
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(HEADER)?;
        wtr.flush()?;
        tracing::debug!(path = %self.path.display(), "table reset");
        Ok(())
    }

    /// Rows start on a fresh line even when the table was saved without a
    /// final newline.
    fn append(&mut self, row: &Row) -> Result<(), StoreWriteError> {
        use std::io::Write;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;
        if !ends_with_newline(&mut file)? {
            tracing::debug!(path = %self.path.display(), "terminating last line");
            file.write_all(b"\n")?;
        }
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.serialize(row)?;
        wtr.flush()?;
        tracing::debug!(path = %self.path.display(), ?row, "row appended");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Row>, StoreReadError> {
        let Some(file) = self.open()? else {
            return Ok(Vec::new());
        };
        let rows = Self::reader(file, true)
            .deserialize::<Row>()
            .enumerate()
            .map(|(i, res)| res.map_err(|e| StoreReadError::Row { line: i + 2, source: e }))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "table read");
        Ok(rows)
    }
}

/// True for an empty file or one whose last byte is a line feed.
fn ends_with_newline(file: &mut std::fs::File) -> std::io::Result<bool> {
    use std::io::{Read, Seek};

    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(std::io::SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
