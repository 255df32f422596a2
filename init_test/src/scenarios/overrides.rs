use std::io::{Read, Seek};
use std::os::unix::io::AsRawFd;

use r1c_init::{
    R1cInitErrno, RECORD_ITEM_ALL, RECORD_ITEM_KEY, RECORD_ITEM_OP, ReadMode, clear, dump_records,
    get_records, load_device_model, property_get, property_override, property_set, set_recordable,
};

use crate::test_ctx::{PRJ_VERSION_FILE, assert_prop, ensure_ok, sandbox_runtime, write_source};

pub fn scenario_create_update() {
    let _dir = sandbox_runtime(ReadMode::Buffered, "init override create");

    ensure_ok(
        property_override("ro.product.model", "R8200"),
        "override create",
    );
    assert_prop("ro.product.model", "R8200");
    ensure_ok(
        property_override("ro.product.model", "R8207"),
        "override update",
    );
    assert_prop("ro.product.model", "R8207");
    clear();
}

pub fn scenario_ro_guard() {
    let _dir = sandbox_runtime(ReadMode::Buffered, "init override guard");
    ensure_ok(property_override("ro.product.model", "R8207"), "seed model");

    // 常规 set 不得改写只读属性，等值重写保持幂等
    let status = property_set("ro.product.model", "R8205");
    assert_eq!(
        status,
        R1cInitErrno::RoOverwrite,
        "unexpected status {status:?}"
    );
    assert_prop("ro.product.model", "R8207");
    ensure_ok(
        property_set("ro.product.model", "R8207"),
        "identical rewrite",
    );
    assert_eq!(property_get("ro.common.soft"), None);
    clear();
}

pub fn scenario_records() {
    let dir = sandbox_runtime(ReadMode::Buffered, "init override records");
    set_recordable(true);
    write_source(dir.path(), PRJ_VERSION_FILE, "14046\n");
    ensure_ok(load_device_model(), "load for records");

    let text = get_records(RECORD_ITEM_ALL).expect("records missing");
    assert_eq!(text.lines().count(), 6, "one record per property write");
    assert!(text.contains("OVERRIDE,ro.product.model,R8200,0,"));
    assert!(text.contains("SET,ro.common.soft,MSM_14046,0,"));

    let mut sink = tempfile::tempfile().expect("create sink file failed");
    ensure_ok(
        dump_records(sink.as_raw_fd(), RECORD_ITEM_OP | RECORD_ITEM_KEY),
        "dump records",
    );
    sink.rewind().expect("rewind sink failed");
    let mut dumped = String::new();
    sink.read_to_string(&mut dumped).expect("read sink failed");
    assert_eq!(
        dumped,
        get_records(RECORD_ITEM_OP | RECORD_ITEM_KEY).expect("records missing"),
        "dump and snapshot must agree"
    );

    let status = dump_records(-1, RECORD_ITEM_ALL);
    assert_eq!(
        status,
        R1cInitErrno::InvalidArg,
        "unexpected status {status:?}"
    );

    // 审计内容同时打到 stderr，便于人工核对
    ensure_ok(
        dump_records(libc::STDERR_FILENO, RECORD_ITEM_OP | RECORD_ITEM_KEY),
        "dump records to stderr",
    );
    clear();
}
