use std::fs;
use std::path::Path;

use r1c_init::{
    MemStore, R1cInitErrno, ReadMode, clear, init, property_get, set_property_store,
    set_source_root,
};
use tempfile::TempDir;

pub const PRJ_VERSION_FILE: &str = "proc/oppoVersion/prjVersion";
pub const BOOT_REASON_FILE: &str = "proc/sys/kernel/boot_reason";
pub const POWER_OFF_ALARM_FILE: &str = "persist/alarm/powerOffAlarmSet";

pub const MODEL_KEYS: [&str; 6] = [
    "ro.product.model",
    "ro.common.soft",
    "ro.product.name",
    "ro.build.product",
    "ro.build.fingerprint",
    "ro.build.description",
];

pub fn ensure_ok(code: R1cInitErrno, op: &str) {
    assert_eq!(code, R1cInitErrno::Ok, "{op} failed: {code:?}");
}

pub fn write_source(root: &Path, rel_path: &str, content: &str) {
    let path = root.join(rel_path);
    fs::create_dir_all(path.parent().expect("source file has parent"))
        .expect("create source dir failed");
    fs::write(path, content).expect("write source file failed");
}

// 每个场景用独立的临时沙箱和内存属性存储重建运行时
pub fn sandbox_runtime(mode: ReadMode, op: &str) -> TempDir {
    clear();
    let dir = tempfile::tempdir().expect("create sandbox dir failed");
    set_property_store(Box::new(MemStore::new()));
    ensure_ok(init(mode, true), op);
    ensure_ok(set_source_root(dir.path()), "set source root");
    dir
}

pub fn assert_prop(key: &str, expected: &str) {
    assert_eq!(
        property_get(key).as_deref(),
        Some(expected),
        "unexpected value for {key}"
    );
}

pub fn assert_prop_unset(key: &str) {
    assert_eq!(property_get(key), None, "{key} should stay unset");
}

pub fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
