use r1c_init::{R1cInitErrno, ReadMode, clear, load_alarm_boot, property_set};

use crate::test_ctx::{
    BOOT_REASON_FILE, POWER_OFF_ALARM_FILE, assert_prop, assert_prop_unset, ensure_ok,
    sandbox_runtime, write_source,
};

pub fn scenario_rtc_flag() {
    let dir = sandbox_runtime(ReadMode::Buffered, "init alarm rtc");
    write_source(dir.path(), BOOT_REASON_FILE, "3\n");
    write_source(dir.path(), POWER_OFF_ALARM_FILE, "1\n");

    ensure_ok(load_alarm_boot(), "load_alarm_boot rtc");
    assert_prop("ro.alarm_boot", "true");
    clear();
}

pub fn scenario_flag_cleared() {
    for (boot_reason, power_off_alarm) in [("3", "0"), ("8", "1"), ("0", "0")] {
        let dir = sandbox_runtime(ReadMode::Buffered, "init alarm cleared");
        write_source(dir.path(), BOOT_REASON_FILE, boot_reason);
        write_source(dir.path(), POWER_OFF_ALARM_FILE, power_off_alarm);

        ensure_ok(load_alarm_boot(), "load_alarm_boot cleared");
        assert_prop("ro.alarm_boot", "false");
        clear();
    }
}

// 部分机型由 bootloader 直接透传 ro.boot.alarmboot
pub fn scenario_bootloader_prop() {
    let dir = sandbox_runtime(ReadMode::Buffered, "init alarm bootloader");
    write_source(dir.path(), BOOT_REASON_FILE, "8\n");
    write_source(dir.path(), POWER_OFF_ALARM_FILE, "1\n");
    ensure_ok(
        property_set("ro.boot.alarmboot", "true"),
        "seed ro.boot.alarmboot",
    );

    ensure_ok(load_alarm_boot(), "load_alarm_boot bootloader");
    assert_prop("ro.alarm_boot", "true");
    clear();
}

pub fn scenario_missing_files() {
    // 任一来源文件缺失时不得写入属性
    let dir = sandbox_runtime(ReadMode::Buffered, "init alarm missing power file");
    write_source(dir.path(), BOOT_REASON_FILE, "3\n");
    let status = load_alarm_boot();
    assert_eq!(
        status,
        R1cInitErrno::ReadSource,
        "unexpected status {status:?}"
    );
    assert_prop_unset("ro.alarm_boot");
    clear();

    let dir = sandbox_runtime(ReadMode::Buffered, "init alarm missing reason file");
    write_source(dir.path(), POWER_OFF_ALARM_FILE, "1\n");
    let status = load_alarm_boot();
    assert_eq!(
        status,
        R1cInitErrno::ReadSource,
        "unexpected status {status:?}"
    );
    assert_prop_unset("ro.alarm_boot");
    clear();
}
