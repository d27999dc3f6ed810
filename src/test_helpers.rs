//! Shared test utilities.
//!
//! Build a [`Config`] rooted in a temp directory, drop JSON inputs into its
//! input folder, and inspect the generated output tree.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let config = test_config(tmp.path());
//! write_input(&config, "prayers.json", &json!([{"id": "a", "content_ru": "x"}]));
//!
//! convert::run(&config, None).unwrap();
//! assert_eq!(output_files(&config), vec!["молитвы/a/ru.md"]);
//! ```

use crate::config::Config;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// =========================================================================
// Fixture setup
// =========================================================================

/// Default config with input and output redirected under `root`.
pub fn test_config(root: &Path) -> Config {
    Config {
        input_dir: root.join("data_input"),
        output_dir: root.join("out"),
        ..Config::default()
    }
}

/// Write `value` as a JSON file in the config's input folder.
pub fn write_input(config: &Config, name: &str, value: &serde_json::Value) {
    fs::create_dir_all(&config.input_dir).unwrap();
    let json = serde_json::to_string_pretty(value).unwrap();
    fs::write(config.input_dir.join(name), json).unwrap();
}

// =========================================================================
// Output inspection
// =========================================================================

/// Every file under the output root as a `/`-separated relative path, sorted.
///
/// A missing output root reads as empty.
pub fn output_files(config: &Config) -> Vec<String> {
    snapshot_output(config).into_keys().collect()
}

/// Contents of one output file. Panics with the available files on a miss.
pub fn read_output(config: &Config, relative: &str) -> String {
    fs::read_to_string(config.output_dir.join(relative)).unwrap_or_else(|_| {
        let files = output_files(config);
        panic!("output '{relative}' not found. Available: {files:?}")
    })
}

/// Relative path → bytes for the whole output tree.
pub fn snapshot_output(config: &Config) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    if config.output_dir.is_dir() {
        collect_files(&config.output_dir, &config.output_dir, &mut files);
    }
    files
}

fn collect_files(root: &Path, dir: &Path, files: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, files);
        } else {
            let relative = path
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            files.insert(relative, fs::read(&path).unwrap());
        }
    }
}
