// 启动属性加载入口：机型变体属性与闹钟开机标志
use crate::api::ReadMode;
use crate::errno::Errno;
use crate::log;

use super::entry_init;
use super::prop_ops;
use super::super::alarm;
use super::super::model;
use super::super::source;
use super::super::state::{GLOBAL, MutexPoisonRecover};

// init 进程的厂商入口：未初始化时按默认参数自动初始化
// 单个属性写入失败不影响其余写入，整体结果对宿主静默
pub(super) fn vendor_load_properties() {
    let initialized = {
        let state = GLOBAL.state.lock_or_poison();
        state.init.status == Errno::Ok
    };
    if !initialized {
        let _ = entry_init::init(ReadMode::Buffered, false);
    }
    let _ = load_device_model();
    let _ = load_alarm_boot();
}

// 读取项目号并写入对应机型的六个固定属性
// 文件不可读或项目号未知时不写任何属性
pub(super) fn load_device_model() -> Errno {
    let mut state = GLOBAL.state.lock_or_poison();
    if state.init.status != Errno::Ok {
        return Errno::Uninit;
    }

    let mode = state.init.mode;
    let Some(code) = source::read_trimmed(mode, &state.source_root, source::PRJ_VERSION_FILE)
    else {
        log::debug(format_args!(
            "project version file unreadable, model properties untouched"
        ));
        return Errno::ReadSource;
    };
    let Some(variant) = model::match_variant(&code) else {
        log::warn(format_args!(
            "unknown project version {code:?}, model properties untouched"
        ));
        return Errno::NoMatch;
    };

    log::info(format_args!(
        "project version {} maps to model {}",
        variant.code, variant.model
    ));
    // 出厂预置的五个 ro.build/ro.product 键已存在，必须走覆写路径；
    // ro.common.soft 由本模块首次写入，走常规 set
    let results = [
        prop_ops::override_in(&mut state, model::KEY_PRODUCT_MODEL, variant.model),
        prop_ops::set_in(&mut state, model::KEY_COMMON_SOFT, variant.soft_version),
        prop_ops::override_in(&mut state, model::KEY_PRODUCT_NAME, variant.name),
        prop_ops::override_in(&mut state, model::KEY_BUILD_PRODUCT, variant.product),
        prop_ops::override_in(&mut state, model::KEY_BUILD_FINGERPRINT, variant.fingerprint),
        prop_ops::override_in(&mut state, model::KEY_BUILD_DESCRIPTION, variant.description),
    ];
    results
        .into_iter()
        .find(|status| *status != Errno::Ok)
        .unwrap_or(Errno::Ok)
}

// 依据启动原因与持久化闹钟标志设置 ro.alarm_boot
// 任一文件不可读时不写，保持标志缺省
pub(super) fn load_alarm_boot() -> Errno {
    let mut state = GLOBAL.state.lock_or_poison();
    if state.init.status != Errno::Ok {
        return Errno::Uninit;
    }

    let mode = state.init.mode;
    let boot_reason = source::read_trimmed(mode, &state.source_root, source::BOOT_REASON_FILE);
    let power_off_alarm =
        source::read_trimmed(mode, &state.source_root, source::POWER_OFF_ALARM_FILE);
    let (Some(boot_reason), Some(power_off_alarm)) = (boot_reason, power_off_alarm) else {
        log::debug(format_args!("alarm boot files unreadable, flag left unset"));
        return Errno::ReadSource;
    };

    let boot_alarm_prop = prop_ops::get_in(&mut state, alarm::KEY_BOOT_ALARM_PROP);
    let value = alarm::alarm_boot_value(&boot_reason, &power_off_alarm, boot_alarm_prop.as_deref());
    log::debug(format_args!(
        "boot_reason={boot_reason:?} power_off_alarm={power_off_alarm:?} -> {}={value}",
        alarm::KEY_ALARM_BOOT
    ));
    prop_ops::set_in(&mut state, alarm::KEY_ALARM_BOOT, value)
}
