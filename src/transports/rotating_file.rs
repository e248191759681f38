//! Date-rotating file transport
//!
//! Writes to a date-stamped file (`%DATE%` in the configured filename is
//! replaced by the current local date rendered with the configured pattern).
//! When the stamp changes between writes, the current file is closed and,
//! when archiving is enabled, gzip-compressed; a fresh file is opened for
//! the new stamp. Retention of old archives is left to the operator.

use crate::core::error::{LoggerError, Result};
use crate::core::{LineFormatter, LogLevel, LogRecord, RotatorConfig, Transport, TransportConfig};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Convert a `YYYY`/`MM`/`DD`-style date pattern into a strftime string.
///
/// Supported tokens: `YYYY`, `YY`, `MM`, `DD`, `HH`, `mm`, `ss`. Everything
/// else is passed through literally; `%` is escaped so user input cannot
/// inject format directives.
#[must_use]
pub fn date_pattern_to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let rest = &chars[i..];
        let (token, len) = match rest {
            ['Y', 'Y', 'Y', 'Y', ..] => ("%Y", 4),
            ['Y', 'Y', ..] => ("%y", 2),
            ['M', 'M', ..] => ("%m", 2),
            ['D', 'D', ..] => ("%d", 2),
            ['H', 'H', ..] => ("%H", 2),
            ['m', 'm', ..] => ("%M", 2),
            ['s', 's', ..] => ("%S", 2),
            ['%', ..] => ("%%", 1),
            _ => {
                out.push(chars[i]);
                i += 1;
                continue;
            }
        };
        out.push_str(token);
        i += len;
    }

    out
}

#[derive(Debug)]
pub struct RotatingFileTransport {
    level: LogLevel,
    formatter: LineFormatter,
    config: RotatorConfig,
    strftime_pattern: String,
    current_stamp: String,
    writer: Option<BufWriter<File>>,
}

impl RotatingFileTransport {
    /// Build a file-rotator transport from its config and formatting
    /// pipeline.
    ///
    /// Creates the target directory and opens the current stamped file in
    /// append mode. A missing `level` defaults to `info`; missing rotation
    /// options fall back to [`RotatorConfig::default`].
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created or the file cannot be
    /// opened.
    pub fn new(transport: &TransportConfig, formatter: LineFormatter) -> Result<Self> {
        let config = transport.config.clone().unwrap_or_default();

        if !config.filename.contains("%DATE%") {
            return Err(LoggerError::config(
                "RotatingFileTransport",
                format!("filename '{}' has no %DATE% placeholder", config.filename),
            ));
        }

        fs::create_dir_all(&config.dirname).map_err(|e| {
            LoggerError::io_operation(
                "creating log directory",
                format!("Failed to create directory '{}'", config.dirname.display()),
                e,
            )
        })?;

        let strftime_pattern = date_pattern_to_strftime(&config.date_pattern);
        let current_stamp = Local::now().format(&strftime_pattern).to_string();
        let writer = Self::open_stamped(&config, &current_stamp)?;

        Ok(Self {
            level: transport.level.unwrap_or_default(),
            formatter,
            config,
            strftime_pattern,
            current_stamp,
            writer: Some(writer),
        })
    }

    /// Path of the log file for a given date stamp
    fn stamped_path(config: &RotatorConfig, stamp: &str) -> PathBuf {
        config.dirname.join(config.filename.replace("%DATE%", stamp))
    }

    fn open_stamped(config: &RotatorConfig, stamp: &str) -> Result<BufWriter<File>> {
        let path = Self::stamped_path(config, stamp);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_transport(
                    path.display().to_string(),
                    format!("Failed to open: {}", e),
                )
            })?;
        Ok(BufWriter::new(file))
    }

    /// Close the current file and open the one for `stamp`, archiving the
    /// previous file when configured.
    fn rotate(&mut self, stamp: String) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    Self::stamped_path(&self.config, &self.current_stamp)
                        .display()
                        .to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
            // Writer dropped here, releasing the file handle before archiving
        }

        if self.config.zipped_archive {
            let old_path = Self::stamped_path(&self.config, &self.current_stamp);
            if old_path.exists() {
                self.compress_file(&old_path)?;
            }
        }

        self.writer = Some(Self::open_stamped(&self.config, &stamp)?);
        self.current_stamp = stamp;
        Ok(())
    }

    /// Gzip a rotated log file with transactional safety.
    ///
    /// Compresses into a `.gz.tmp` sibling first and only renames and
    /// removes the original once compression fully succeeded, so a failure
    /// mid-way never loses log data.
    fn compress_file(&self, path: &Path) -> Result<()> {
        let gz_path = {
            let mut p = path.as_os_str().to_owned();
            p.push(".gz");
            PathBuf::from(p)
        };
        let tmp_path = {
            let mut p = gz_path.as_os_str().to_owned();
            p.push(".tmp");
            PathBuf::from(p)
        };

        let input = File::open(path).map_err(|e| {
            LoggerError::io_operation(
                "compressing rotated log",
                format!("Failed to open '{}'", path.display()),
                e,
            )
        })?;
        let output = File::create(&tmp_path).map_err(|e| {
            LoggerError::io_operation(
                "compressing rotated log",
                format!("Failed to create '{}'", tmp_path.display()),
                e,
            )
        })?;

        let mut reader = BufReader::with_capacity(64 * 1024, input);
        let mut encoder = flate2::write::GzEncoder::new(
            BufWriter::with_capacity(64 * 1024, output),
            flate2::Compression::default(),
        );

        let copy_result = std::io::copy(&mut reader, &mut encoder)
            .and_then(|_| encoder.finish())
            .and_then(|mut writer| writer.flush());
        if let Err(e) = copy_result {
            let _ = fs::remove_file(&tmp_path);
            return Err(LoggerError::io_operation(
                "compressing rotated log",
                format!("Failed to compress '{}'", path.display()),
                e,
            ));
        }

        fs::rename(&tmp_path, &gz_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            LoggerError::io_operation(
                "compressing rotated log",
                format!("Failed to rename archive to '{}'", gz_path.display()),
                e,
            )
        })?;

        // Only drop the original once the archive is in place. Leaving both
        // behind on failure is recoverable; losing the data is not.
        if let Err(e) = fs::remove_file(path) {
            eprintln!(
                "[WARN] Archived '{}' but failed to remove the original: {}",
                path.display(),
                e
            );
        }

        Ok(())
    }

    /// Path of the file currently being written
    #[must_use]
    pub fn current_path(&self) -> PathBuf {
        Self::stamped_path(&self.config, &self.current_stamp)
    }

    /// Rotation options this transport was built with
    #[must_use]
    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }
}

impl Transport for RotatingFileTransport {
    fn log(&mut self, record: &LogRecord) -> Result<()> {
        let stamp = Local::now().format(&self.strftime_pattern).to_string();
        if stamp != self.current_stamp {
            self.rotate(stamp)?;
        }

        let mut line = self.formatter.format(record);
        line.push('\n');

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::other("File writer not initialized"))?;
        writer.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::file_transport(
                Self::stamped_path(&self.config, &self.current_stamp)
                    .display()
                    .to_string(),
                format!("Failed to write log record: {}", e),
            )
        })?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_transport(
                    Self::stamped_path(&self.config, &self.current_stamp)
                        .display()
                        .to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file_rotator"
    }

    fn level(&self) -> LogLevel {
        self.level
    }
}

impl Drop for RotatingFileTransport {
    fn drop(&mut self) {
        // Best effort flush so buffered lines reach disk
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
