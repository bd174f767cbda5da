//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary project directory holding a `data` directory of record files
pub struct DataDirBuilder {
    temp_dir: TempDir,
    dir_name: String,
}

impl DataDirBuilder {
    /// Create a new builder with an empty `data` directory
    pub fn new() -> Self {
        Self::named("data")
    }

    /// Create a new builder whose data directory has a custom name
    pub fn named(dir_name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join(dir_name)).expect("Failed to create data dir");
        Self { temp_dir, dir_name: dir_name.to_string() }
    }

    /// Add a file under the data directory; intermediate directories are created
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.data_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write data file");
        self
    }

    /// Add a CSV file from key/value pairs
    pub fn with_csv(self, relative: &str, rows: &[(&str, &str)]) -> Self {
        let content =
            rows.iter().map(|(k, v)| format!("{},{}", k, v)).collect::<Vec<_>>().join("\n");
        self.with_file(relative, &content)
    }

    /// Add a JSON file from key/value pairs
    pub fn with_json(self, relative: &str, rows: &[(&str, &str)]) -> Self {
        let objects = rows
            .iter()
            .map(|(k, v)| format!(r#"{{"Key":"{}","Value":"{}"}}"#, k, v))
            .collect::<Vec<_>>()
            .join(",");
        self.with_file(relative, &format!("[{}]", objects))
    }

    /// Add an XML file from key/value pairs
    pub fn with_xml(self, relative: &str, rows: &[(&str, &str)]) -> Self {
        let items = rows
            .iter()
            .map(|(k, v)| format!("<Data><Key>{}</Key><Value>{}</Value></Data>", k, v))
            .collect::<String>();
        self.with_file(relative, &format!("<Datas>{}</Datas>", items))
    }

    /// The project directory (parent of the data directory)
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The data directory
    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join(&self.dir_name)
    }

    /// Finish building (consumes self)
    pub fn build(self) -> DataDir {
        DataDir { temp_dir: self.temp_dir, dir_name: self.dir_name }
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built data directory; removed from disk when dropped
pub struct DataDir {
    temp_dir: TempDir,
    dir_name: String,
}

impl DataDir {
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join(&self.dir_name)
    }
}

/// Expected `FileName:` text for a file under the data directory, with the
/// platform's separators
pub fn relative(parts: &[&str]) -> String {
    parts.iter().collect::<PathBuf>().display().to_string()
}

/// The mixed-format fixture most search tests start from
pub fn sample_data_dir() -> DataDirBuilder {
    DataDirBuilder::new()
        .with_file("file1.csv", "hello1,value1\nfoo,value2")
        .with_file("sub/file2.csv", "hello2,value3\nbar,value4")
        .with_file("file3.json", r#"[{"Key": "hello3", "Value": "value5"}]"#)
        .with_file(
            "file4.xml",
            "<Datas><Data><Key>hello4</Key><Value>value6</Value></Data></Datas>",
        )
}
