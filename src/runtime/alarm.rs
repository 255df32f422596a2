// 闹钟开机判定：RTC 启动原因与持久化闹钟标志的组合规则

pub(super) const KEY_ALARM_BOOT: &str = "ro.alarm_boot";
pub(super) const KEY_BOOT_ALARM_PROP: &str = "ro.boot.alarmboot";

// PMIC 上报的 boot_reason 取值:
// 0 未知, 1 硬复位, 2 瞬时掉电 SMPL, 3 实时时钟 RTC,
// 4 DC 充电器插入, 5 USB 充电器插入, 6 PON1 引脚,
// 7 CBLPWR_N 引脚, 8 KPDPWR_N 电源键
const RTC_BOOT_REASON: &str = "3";
const ALARM_FLAG_SET: &str = "1";

// RTC 触发（或 bootloader 上报闹钟开机）且持久化闹钟标志已置位时为 "true"
pub(super) fn alarm_boot_value(
    boot_reason: &str,
    power_off_alarm: &str,
    boot_alarm_prop: Option<&str>,
) -> &'static str {
    let rtc_boot = boot_reason == RTC_BOOT_REASON || boot_alarm_prop == Some("true");
    if rtc_boot && power_off_alarm == ALARM_FLAG_SET {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::alarm_boot_value;

    #[test]
    fn rtc_reason_with_flag_set_is_true() {
        assert_eq!(alarm_boot_value("3", "1", None), "true");
        assert_eq!(alarm_boot_value("3", "1", Some("false")), "true");
    }

    #[test]
    fn rtc_reason_without_flag_is_false() {
        assert_eq!(alarm_boot_value("3", "0", None), "false");
        assert_eq!(alarm_boot_value("3", "", None), "false");
    }

    #[test]
    fn other_reasons_are_false() {
        assert_eq!(alarm_boot_value("0", "1", None), "false");
        assert_eq!(alarm_boot_value("1", "1", None), "false");
        assert_eq!(alarm_boot_value("8", "1", None), "false");
    }

    #[test]
    fn bootloader_prop_is_alternate_trigger() {
        assert_eq!(alarm_boot_value("8", "1", Some("true")), "true");
        assert_eq!(alarm_boot_value("8", "1", Some("1")), "false");
        assert_eq!(alarm_boot_value("8", "0", Some("true")), "false");
    }

    #[test]
    fn reason_must_match_exactly() {
        assert_eq!(alarm_boot_value("33", "1", None), "false");
        assert_eq!(alarm_boot_value("3x", "1", None), "false");
    }
}
