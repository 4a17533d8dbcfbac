use std::{
    fs::File,
    io::{self, BufWriter, Read, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use skillscope_analysis::config::AnalysisConfig;
use skillscope_survey::{Record, RecordStore};
use tracing::info;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        if let Output::File { path, .. } = self {
            info!(path = %path.display(), "output written");
        }
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read survey records from a JSON file
///
/// The file must hold a non-empty JSON array of record objects. Keys may be
/// either `snake_case` field names or the original spreadsheet column headers.
///
/// # Errors
///
/// Returns error if the file cannot be opened or parsed, or holds no records
pub fn read_records_file<P>(path: P) -> anyhow::Result<RecordStore>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
    let store = read_records(io::BufReader::new(file), &path.display().to_string())?;
    info!(records = store.len(), path = %path.display(), "dataset loaded");
    Ok(store)
}

/// Parse survey records from a reader; `source` names it in error messages.
pub fn read_records<R>(reader: R, source: &str) -> anyhow::Result<RecordStore>
where
    R: Read,
{
    let records: Vec<Record> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse dataset JSON: {source}"))?;
    if records.is_empty() {
        anyhow::bail!("No records in dataset: {source}");
    }
    Ok(RecordStore::new(records))
}

/// Read analysis limits from a JSON file, or the defaults when no path is given
pub fn read_config_file(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    match path {
        Some(path) => read_json_file("config", path),
        None => Ok(AnalysisConfig::default()),
    }
}
