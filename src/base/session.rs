use crate::base;

/// One form session against a store. Records submitted during the session are
/// kept in a buffer whether or not the store accepted them.
pub struct Session<S> {
    store: S,
    buffer: Vec<Submitted>,
}

#[derive(Debug)]
struct Submitted {
    record: base::Record,
    saved: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] base::entry::ValidationError),
    #[error("failed to save record")]
    Write {
        record: base::Record,
        #[source]
        source: base::store::StoreWriteError,
    },
}

impl<S> Session<S>
where
    S: base::Store,
{
    /// Prepares the store's header and starts an empty session.
    pub fn open(
        mut store: S,
        reset_mismatched_header: bool,
    ) -> Result<Self, base::store::StoreReadError> {
        store.prepare(reset_mismatched_header)?;
        Ok(Self {
            store,
            buffer: Vec::new(),
        })
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records submitted so far, including unsaved ones.
    #[cfg(test)]
    pub fn buffer(&self) -> impl Iterator<Item = &base::Record> {
        self.buffer.iter().map(|s| &s.record)
    }

    /// Submitted records the store did not accept.
    pub fn unsaved(&self) -> impl Iterator<Item = &base::Record> {
        self.buffer.iter().filter(|s| !s.saved).map(|s| &s.record)
    }

    /// Parses `raw` and appends it to the store. A record that fails
    /// validation touches neither the buffer nor the store.
    pub fn submit(&mut self, raw: base::RawEntry) -> Result<base::Record, SubmitError> {
        let mode = raw.quantity.mode();
        let record = raw.parse()?;
        let res = self.store.append(&record.to_row());
        self.buffer.push(Submitted {
            record: record.clone(),
            saved: res.is_ok(),
        });
        match res {
            Ok(()) => {
                tracing::debug!(%mode, %record, "record submitted");
                Ok(record)
            }
            Err(source) => {
                tracing::warn!(%record, error = %source, "record not saved");
                Err(SubmitError::Write { record, source })
            }
        }
    }

    /// Reads the store back.
    pub fn snapshot(&self) -> Result<base::Recordlist, base::store::StoreReadError> {
        self.store.snapshot()
    }

    /// Reads the store back and recomputes everything over `window`.
    pub fn recompute(
        &self,
        window: base::Window,
        threshold: i64,
    ) -> Result<(base::Recordlist, base::Report), base::store::StoreReadError> {
        let rl = self.snapshot()?;
        let report = base::Report::new(&rl, window.interval(base::Date::today()), threshold);
        Ok((rl, report))
    }
}
