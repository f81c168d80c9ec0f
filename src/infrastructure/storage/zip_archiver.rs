// src/infrastructure/storage/zip_archiver.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::archive::BundleArchiver,
};
use crate::domain::files::UploadedFile;
use std::{
    collections::HashSet,
    io::{Cursor, Seek, Write},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Writes one deflated entry per `(name, bytes)` pair into `sink`.
pub fn write_zip<W, I, N, B>(sink: W, entries: I) -> ApplicationResult<W>
where
    W: Write + Seek,
    I: IntoIterator<Item = (N, B)>,
    N: AsRef<str>,
    B: AsRef<[u8]>,
{
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(sink);

    for (name, bytes) in entries {
        writer
            .start_file(name.as_ref(), options)
            .map_err(|err| ApplicationError::infrastructure(format!("zip entry: {err}")))?;
        writer
            .write_all(bytes.as_ref())
            .map_err(|err| ApplicationError::infrastructure(format!("zip write: {err}")))?;
    }

    writer
        .finish()
        .map_err(|err| ApplicationError::infrastructure(format!("zip finish: {err}")))
}

/// `name (n).ext`, numbering before the extension.
fn numbered(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({n}).{ext}"),
        _ => format!("{name} ({n})"),
    }
}

/// Entry names in input order, with repeats renamed so the archive never
/// holds two entries of the same name.
fn unique_entry_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let names: Vec<&str> = names.into_iter().collect();
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    let mut unique = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.to_string();
        let mut n = 0;
        while taken.contains(&candidate) {
            n += 1;
            candidate = numbered(name, n);
        }
        taken.insert(candidate.clone());
        unique.push(candidate);
    }
    unique
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ZipBundleArchiver;

impl BundleArchiver for ZipBundleArchiver {
    fn bundle(&self, files: &[UploadedFile]) -> ApplicationResult<Vec<u8>> {
        let names = unique_entry_names(files.iter().map(|file| file.file_name.as_str()));
        let entries = names
            .into_iter()
            .zip(files.iter().map(|file| file.bytes.as_ref()));
        let cursor = write_zip(Cursor::new(Vec::new()), entries)?;
        Ok(cursor.into_inner())
    }
}
