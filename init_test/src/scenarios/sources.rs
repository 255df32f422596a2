use r1c_init::{
    MemStore, ReadMode, clear, get_mode, init, load_alarm_boot, load_device_model, property_get,
    set_property_store, set_source_root, vendor_load_properties,
};

use crate::test_ctx::{
    BOOT_REASON_FILE, MODEL_KEYS, POWER_OFF_ALARM_FILE, PRJ_VERSION_FILE, assert_prop,
    assert_prop_unset, ensure_ok, sandbox_runtime, write_source,
};

// 两种读取方式跑同一份沙箱，结果必须完全一致
pub fn scenario_read_modes_agree() {
    clear();
    let dir = tempfile::tempdir().expect("create sandbox dir failed");
    write_source(dir.path(), PRJ_VERSION_FILE, "14047\n");
    write_source(dir.path(), BOOT_REASON_FILE, "3\n");
    write_source(dir.path(), POWER_OFF_ALARM_FILE, "1\n");

    let mut outcomes = Vec::new();
    for mode in [ReadMode::Buffered, ReadMode::RawFd] {
        clear();
        set_property_store(Box::new(MemStore::new()));
        ensure_ok(init(mode, true), "init read mode");
        ensure_ok(set_source_root(dir.path()), "set source root");
        ensure_ok(load_device_model(), "load model");
        ensure_ok(load_alarm_boot(), "load alarm");

        let mut snapshot: Vec<Option<String>> =
            MODEL_KEYS.iter().map(|key| property_get(key)).collect();
        snapshot.push(property_get("ro.alarm_boot"));
        outcomes.push(snapshot);
    }

    assert_eq!(outcomes[0], outcomes[1], "read modes disagree");
    assert_eq!(outcomes[0][0].as_deref(), Some("R8205"));
    assert_eq!(outcomes[0][6].as_deref(), Some("true"));
    clear();
}

pub fn scenario_vendor_hook() {
    // 沙箱就绪时导出入口一次完成机型与闹钟两条流程
    let dir = sandbox_runtime(ReadMode::Buffered, "init vendor hook");
    write_source(dir.path(), PRJ_VERSION_FILE, "14046\n");
    write_source(dir.path(), BOOT_REASON_FILE, "3\n");
    write_source(dir.path(), POWER_OFF_ALARM_FILE, "1\n");

    vendor_load_properties();
    assert_prop("ro.product.model", "R8200");
    assert_prop(
        "ro.build.fingerprint",
        "OPPO/R8200/R1C:4.4.4/KTU84P/1390465867:user/release-keys",
    );
    assert_prop("ro.alarm_boot", "true");
    clear();

    // 未初始化时导出入口自举，来源文件缺失则静默返回
    vendor_load_properties();
    assert_prop_unset("ro.product.model");
    assert_prop_unset("ro.alarm_boot");
    assert_eq!(get_mode(), ReadMode::Buffered, "self-init default mode");
    clear();
}
