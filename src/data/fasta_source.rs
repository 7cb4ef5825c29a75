// ============================================================
// Layer 4 — FASTA Record Source
// ============================================================
// Finds the .fasta file for one split and reads all of its
// records into memory using bio::io::fasta.
//
// Expected directory layout:
//   <dest_path>/
//     <dataset_name>/
//       train.fasta
//       test.fasta
//
// Record names are the raw header line after '>', exactly as
// written. bio splits the header into an identifier and a
// description at the first whitespace; joining those back
// would turn a tab into a space and make distinct headers
// collide, so the header lines are taken from the text itself.
//
//   >chr2:500-700\tpromoter 0
//     name = "chr2:500-700\tpromoter 0"

use anyhow::Result;
use std::{
    collections::HashSet,
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};
use bio::io::fasta;

use crate::data::split::Split;
use crate::domain::error::DatasetError;
use crate::domain::record::SequenceRecord;
use crate::domain::traits::RecordSource;

/// Reads records from a single FASTA file.
#[derive(Debug, Clone)]
pub struct FastaSource {
    path: PathBuf,
}

impl FastaSource {
    /// Point directly at a FASTA file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Find the FASTA file for `split` inside `dest_path/dataset_name`.
    ///
    /// The file name must end in ".fasta" and contain the split
    /// name. Candidates are sorted so the choice is stable when
    /// more than one file matches.
    pub fn locate(
        dest_path:    impl AsRef<Path>,
        dataset_name: &str,
        split:        Split,
    ) -> Result<Self, DatasetError> {
        let base = dest_path.as_ref().join(dataset_name);
        if !base.exists() {
            return Err(DatasetError::MissingBasePath(base));
        }

        let scan_err = |source| DatasetError::ScanDir { dir: base.clone(), source };

        let mut candidates: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&base).map_err(scan_err)? {
            let path = entry.map_err(scan_err)?.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if file_name.ends_with(".fasta") && file_name.contains(split.as_str()) {
                candidates.push(path);
            }
        }
        candidates.sort();

        let mut matches = candidates.into_iter();
        let chosen = matches.next().ok_or_else(|| DatasetError::NoSplitFile {
            split: split.to_string(),
            dir:   base.clone(),
        })?;

        for ignored in matches {
            tracing::warn!(
                "Multiple fasta files match split '{}'; ignoring '{}'",
                split,
                ignored.display()
            );
        }

        tracing::debug!("Split '{}' → '{}'", split, chosen.display());
        Ok(Self::new(chosen))
    }

    /// Path of the FASTA file this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FastaSource {
    fn load_records(&self) -> Result<Vec<SequenceRecord>> {
        let file = File::open(&self.path).map_err(|source| DatasetError::Fasta {
            path: self.path.clone(),
            source,
        })?;

        let records = read_records(file, &self.path)?;
        tracing::info!(
            "Read {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Parse FASTA text from any reader.
/// `origin` is only used in error messages.
pub fn read_records<R: Read>(mut reader: R, origin: &Path) -> Result<Vec<SequenceRecord>, DatasetError> {
    let fasta_err = |source| DatasetError::Fasta { path: origin.to_path_buf(), source };

    let mut text = Vec::new();
    reader.read_to_end(&mut text).map_err(fasta_err)?;

    let mut headers = header_lines(&text);
    let mut seen    = HashSet::new();
    let mut records = Vec::new();

    for record in fasta::Reader::new(text.as_slice()).records() {
        let record = record.map_err(fasta_err)?;

        // bio and header_lines agree on what starts a record
        let name = headers.next().unwrap_or_else(|| match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None       => record.id().to_string(),
        });

        if !seen.insert(name.clone()) {
            return Err(DatasetError::DuplicateName(name));
        }

        records.push(SequenceRecord::new(name, record.seq().to_vec()));
    }

    Ok(records)
}

/// Every header line of `text` without its '>' and line ending
fn header_lines(text: &[u8]) -> impl Iterator<Item = String> + '_ {
    text.split(|&b| b == b'\n')
        .filter_map(|line| line.strip_prefix(b">"))
        .map(|header| {
            let header = header.strip_suffix(b"\r").unwrap_or(header);
            String::from_utf8_lossy(header).into_owned()
        })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, body: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn test_long_names_and_order() {
        let fasta = ">seq_b promoter 1\nACGT\nAC\n>seq_a 0\nTTTT\n";
        let records = read_records(fasta.as_bytes(), Path::new("mem")).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "seq_b promoter 1");
        assert_eq!(records[0].sequence, b"ACGTAC");
        assert_eq!(records[1].name, "seq_a 0");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let fasta = ">x 1\nAC\n>x 1\nGT\n";
        let err = read_records(fasta.as_bytes(), Path::new("mem")).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateName(n) if n == "x 1"));
    }

    #[test]
    fn test_missing_base_path() {
        let tmp = tempfile::tempdir().unwrap();
        let err = FastaSource::locate(tmp.path(), "nope", Split::Train).unwrap_err();
        assert!(matches!(err, DatasetError::MissingBasePath(_)));
    }

    #[test]
    fn test_locate_picks_split_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("enhancers");
        fs::create_dir(&dir).unwrap();
        write_file(&dir, "enhancers_train.fasta", ">a 1\nAC\n");
        write_file(&dir, "enhancers_test.fasta", ">b 0\nGT\n");
        write_file(&dir, "test_notes.txt", "not fasta");

        let train = FastaSource::locate(tmp.path(), "enhancers", Split::Train).unwrap();
        assert!(train.path().ends_with("enhancers_train.fasta"));

        let val = FastaSource::locate(tmp.path(), "enhancers", "val".parse().unwrap()).unwrap();
        assert!(val.path().ends_with("enhancers_test.fasta"));

        let records = val.load_records().unwrap();
        assert_eq!(records[0].name, "b 0");
    }

    #[test]
    fn test_no_split_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("ds");
        fs::create_dir(&dir).unwrap();
        write_file(&dir, "train.fasta", ">a 1\nAC\n");

        let err = FastaSource::locate(tmp.path(), "ds", Split::Test).unwrap_err();
        assert!(matches!(err, DatasetError::NoSplitFile { .. }));
    }

    #[test]
    fn test_header_kept_verbatim() {
        let fasta = ">a\tb 1\r\nAC\r\n>a b 1\nGT\n>c  2\nTT\n";
        let records = read_records(fasta.as_bytes(), Path::new("mem")).unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a\tb 1", "a b 1", "c  2"]);
        assert_eq!(records[1].sequence, b"GT");
    }

    #[test]
    fn test_first_sorted_match_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("ds");
        fs::create_dir(&dir).unwrap();
        write_file(&dir, "b_train.fasta", ">b 1\nAC\n");
        write_file(&dir, "a_train.fasta", ">a 1\nAC\n");

        let train = FastaSource::locate(tmp.path(), "ds", Split::Train).unwrap();
        assert!(train.path().ends_with("a_train.fasta"));
    }

    #[test]
    fn test_split_matched_on_file_name_only() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("train_runs");
        let dir  = dest.join("ds");
        fs::create_dir_all(&dir).unwrap();
        write_file(&dir, "test.fasta", ">a 1\nAC\n");

        let err = FastaSource::locate(&dest, "ds", Split::Train).unwrap_err();
        assert!(matches!(err, DatasetError::NoSplitFile { .. }));

        // The dataset directory itself carries the split name
        write_file(&dest, "test.fasta", ">b 0\nGT\n");
        let err = FastaSource::locate(tmp.path(), "train_runs", Split::Train).unwrap_err();
        assert!(matches!(err, DatasetError::NoSplitFile { .. }));
    }

    #[test]
    fn test_non_fasta_split_file_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("ds");
        fs::create_dir(&dir).unwrap();
        write_file(&dir, "train.fa", ">a 1\nAC\n");
        write_file(&dir, "train.fasta.gz", "");
        fs::create_dir(dir.join("train.fasta")).unwrap();

        let err = FastaSource::locate(tmp.path(), "ds", Split::Train).unwrap_err();
        assert!(matches!(err, DatasetError::NoSplitFile { .. }));
    }

    #[test]
    fn test_unreadable_base_is_a_scan_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "ds", "a file, not a directory");

        let err = FastaSource::locate(tmp.path(), "ds", Split::Train).unwrap_err();
        assert!(matches!(err, DatasetError::ScanDir { .. }));
        assert!(err.to_string().starts_with("cannot scan dataset directory"));
    }
}
