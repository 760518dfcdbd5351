// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    error::{self, Result},
    metadata,
};

use super::{check_key, IsPersistent, Store};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug)]
pub(crate) struct File {
    dir: PathBuf,
}

impl File {
    pub(crate) fn new() -> Result<Self> {
        metadata::PROJECT_DIRS
            .as_ref()
            .map(|dirs| Self::with_dir(dirs.data_dir()))
            .ok_or_else(|| error::Storage::NoProjectDirs.into())
    }

    pub(crate) fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_owned(),
        }
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl IsPersistent for File {
    fn is_persistent(&self) -> bool {
        true
    }
}

impl Store for File {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let bytes = match fs::read(self.path(key)?) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| error::Storage::NotText(key.to_owned()).into())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)?) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
