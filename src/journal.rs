//! An append-only log of corrections, one JSON object per line.

use fs_err::{File, OpenOptions};
use parking_lot::Mutex;
use std::{
    io::{BufWriter, Write},
    path::Path,
};

use crate::{types::Correction, Error};

pub struct Journal {
    writer: Mutex<BufWriter<File>>,
}

impl Journal {
    /// Opens the journal at `path`, creating the file if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;

        Ok(Journal {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Appends the corrections and flushes. Safe to call from multiple threads.
    pub fn append(&self, corrections: &[Correction]) -> Result<(), Error> {
        let mut writer = self.writer.lock();

        for correction in corrections {
            serde_json::to_writer(&mut *writer, correction)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        log::debug!("journaled {} corrections", corrections.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};

    fn correction(original: &str, corrected: &str) -> Correction {
        Correction {
            original: original.into(),
            corrected: corrected.into(),
        }
    }

    #[test]
    fn writes_one_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.jsonl");

        let journal = Journal::open(&path).unwrap();
        journal
            .append(&[correction("من رفت", "من رفتم."), correction("سلام", "سلام")])
            .unwrap();
        drop(journal);

        // reopening appends instead of truncating
        let journal = Journal::open(&path).unwrap();
        journal.append(&[correction("او رفتم", "او رفت.")]).unwrap();

        let lines: Vec<String> = BufReader::new(std::fs::File::open(&path).unwrap())
            .lines()
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines.len(), 3);

        let last: Correction = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(last, correction("او رفتم", "او رفت."));
    }
}
