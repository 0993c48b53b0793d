use crate::gradient::Rgba;
use approx::assert_relative_eq;
use constants::colour::RgbaArray;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fresh directory under the system temp dir, unique per call
pub fn unique_temp_dir(tag: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "level_cloud_{}_{}_{}",
        tag,
        std::process::id(),
        n
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_temp_csv(tag: &str, contents: &str) -> PathBuf {
    let path = unique_temp_dir(tag).join("data.csv");
    fs::write(&path, contents).unwrap();
    path
}

pub fn temp_dir_with(tag: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = unique_temp_dir(tag);
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
    dir
}

/// Gradient output goes through f64 and back, so compare channels loosely
pub fn assert_colour(actual: Rgba, expected: RgbaArray) {
    assert_relative_eq!(actual.r, expected[0], epsilon = 1e-6);
    assert_relative_eq!(actual.g, expected[1], epsilon = 1e-6);
    assert_relative_eq!(actual.b, expected[2], epsilon = 1e-6);
    assert_relative_eq!(actual.a, expected[3], epsilon = 1e-6);
}
