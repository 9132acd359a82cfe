//! Time and path constants captured once at process start.

use crate::Result;
use chrono::{DateTime, Local};
use std::env;
use std::path::{Path, PathBuf};

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constants {
    /// Unix timestamp, eg. `1617351251`.
    pub timestamp: i64,
    /// eg. `2021-04-02 16:14:11`
    pub date_time: String,
    /// eg. `20210402161411`
    pub date_stamp: String,
    pub current_path: PathBuf,
    pub script_file: PathBuf,
    pub script_dir: PathBuf,
    pub script_basename: String,
    /// Basename without its extension.
    pub script_title: String,
    pub script_ext: String,
}

impl Constants {
    /// Capture the clock, working directory and running executable.
    pub fn capture() -> Result<Self> {
        Ok(Self::from_parts(Local::now(), env::current_dir()?, env::current_exe()?))
    }

    pub fn from_parts(now: DateTime<Local>, current_path: PathBuf, script_file: PathBuf) -> Self {
        let script_dir = script_file.parent().map(Path::to_path_buf).unwrap_or_default();
        let lossy = |part: Option<&std::ffi::OsStr>| {
            part.map(|p| p.to_string_lossy().into_owned()).unwrap_or_default()
        };

        Self {
            timestamp: now.timestamp(),
            date_time: now.format(DATE_TIME_FORMAT).to_string(),
            date_stamp: now.format(DATE_STAMP_FORMAT).to_string(),
            script_dir,
            script_basename: lossy(script_file.file_name()),
            script_title: lossy(script_file.file_stem()),
            script_ext: lossy(script_file.extension()),
            current_path,
            script_file,
        }
    }

    /// `(NAME, value)` pairs for debug dumps.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("TIMESTAMP", self.timestamp.to_string()),
            ("DATE_TIME", self.date_time.clone()),
            ("DATE_STAMP", self.date_stamp.clone()),
            ("CURRENT_PATH", self.current_path.display().to_string()),
            ("SCRIPT_FILE", self.script_file.display().to_string()),
            ("SCRIPT_DIR", self.script_dir.display().to_string()),
            ("SCRIPT_BASENAME", self.script_basename.clone()),
            ("SCRIPT_BASENAME_TITLE", self.script_title.clone()),
            ("SCRIPT_BASENAME_EXT", self.script_ext.clone()),
        ]
    }
}
