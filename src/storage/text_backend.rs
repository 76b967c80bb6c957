use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    errors::{LedgerError, Result},
    ledger::{Ledger, Transaction},
};

use super::codec;

const TMP_SUFFIX: &str = "tmp";

/// One line that failed to decode during a bulk load.
#[derive(Debug)]
pub struct LineError {
    /// 1-based line number within the loaded file.
    pub line_number: usize,
    /// Raw line text, as read.
    pub line: String,
    pub error: LedgerError,
}

/// Outcome of a bulk load: how many records were appended, and which
/// lines were skipped with their individual errors.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub errors: Vec<LineError>,
}

/// Store for the primary data file.
///
/// The file holds one encoded transaction per line, rewritten in full on
/// every persist. Single-process, single-writer: two processes sharing
/// one data file would overwrite each other.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    data_file: PathBuf,
}

impl LedgerStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Loads the primary data file into the ledger at startup.
    ///
    /// A missing file is not an error: the ledger simply starts empty.
    pub fn load_initial(&self, ledger: &mut Ledger) -> Result<LoadReport> {
        if !self.data_file.exists() {
            info!(path = %self.data_file.display(), "no existing data file, starting fresh");
            return Ok(LoadReport::default());
        }
        self.load_from(ledger, &self.data_file)
    }

    /// Reads all lines from `path` in order and appends every decodable
    /// record to the ledger.
    ///
    /// Blank lines and lines whose first non-whitespace character is `#`
    /// are skipped before decoding. A line that fails to decode is skipped
    /// individually and reported in the returned `LoadReport`; one bad
    /// line never aborts the rest of the load. Only an unreadable file is
    /// an error.
    pub fn load_from(&self, ledger: &mut Ledger, path: &Path) -> Result<LoadReport> {
        let contents = fs::read_to_string(path)?;
        let mut report = LoadReport::default();

        for (index, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match codec::decode(line) {
                Ok(transaction) => {
                    ledger.append(transaction);
                    report.loaded += 1;
                }
                Err(error) => {
                    warn!(line_number = index + 1, %error, "skipping undecodable line");
                    report.errors.push(LineError {
                        line_number: index + 1,
                        line: line.to_string(),
                        error,
                    });
                }
            }
        }

        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.errors.len(),
            "loaded transactions"
        );
        Ok(report)
    }

    /// Merges records from an external file into the ledger, then rewrites
    /// the primary data file to include them.
    pub fn import(&self, ledger: &mut Ledger, path: &Path) -> Result<LoadReport> {
        let report = self.load_from(ledger, path)?;
        self.persist(ledger)?;
        Ok(report)
    }

    /// Appends one transaction and persists the ledger.
    ///
    /// The append always takes effect; a persist failure is returned but
    /// does not roll the in-memory entry back.
    pub fn record(&self, ledger: &mut Ledger, transaction: Transaction) -> Result<()> {
        ledger.append(transaction);
        self.persist(ledger)
    }

    /// Overwrites the primary data file with the full current ledger, one
    /// encoded line per transaction, in in-memory insertion order.
    ///
    /// The write goes through a temporary file and a rename, so a failed
    /// write leaves any previous file contents untouched.
    pub fn persist(&self, ledger: &Ledger) -> Result<()> {
        let mut data = String::new();
        for transaction in ledger.transactions() {
            data.push_str(&codec::encode(transaction));
            data.push('\n');
        }

        let tmp = tmp_path(&self.data_file);
        write_all(&tmp, &data)?;
        fs::rename(&tmp, &self.data_file)?;
        debug!(
            path = %self.data_file.display(),
            records = ledger.len(),
            "persisted ledger"
        );
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
