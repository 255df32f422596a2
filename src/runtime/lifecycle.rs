// 生命周期管理模块，作为 runtime 子模块的统一入口
// 将初始化/加载/控制操作分发到各入口子模块
use crate::api::{PropertyStore, ReadMode};
use crate::errno::Errno;
use std::path::Path;

mod prop_ops;

mod entry_control;
mod entry_init;
mod entry_load;

pub(super) fn get_version() -> String {
    entry_init::get_version()
}

pub(super) fn init(mode: ReadMode, debug: bool) -> Errno {
    entry_init::init(mode, debug)
}

pub(super) fn vendor_load_properties() {
    entry_load::vendor_load_properties()
}

pub(super) fn load_device_model() -> Errno {
    entry_load::load_device_model()
}

pub(super) fn load_alarm_boot() -> Errno {
    entry_load::load_alarm_boot()
}

pub(super) fn property_get(key: &str) -> Option<String> {
    entry_control::property_get(key)
}

pub(super) fn property_set(key: &str, value: &str) -> Errno {
    entry_control::property_set(key, value)
}

pub(super) fn property_override(key: &str, value: &str) -> Errno {
    entry_control::property_override(key, value)
}

pub(super) fn set_property_store(store: Box<dyn PropertyStore>) {
    entry_control::set_property_store(store)
}

pub(super) fn set_source_root(root: &Path) -> Errno {
    entry_control::set_source_root(root)
}

pub(super) fn clear() {
    entry_control::clear();
}

pub(super) fn get_mode() -> ReadMode {
    entry_control::get_mode()
}

pub(super) fn get_debug() -> bool {
    entry_control::get_debug()
}

pub(super) fn set_debug(debug: bool) {
    entry_control::set_debug(debug)
}

pub(super) fn get_recordable() -> bool {
    entry_control::get_recordable()
}

pub(super) fn set_recordable(recordable: bool) {
    entry_control::set_recordable(recordable)
}

pub(super) fn get_records(item_flags: u32) -> Option<String> {
    entry_control::get_records(item_flags)
}

pub(super) fn dump_records(fd: i32, item_flags: u32) -> Errno {
    entry_control::dump_records(fd, item_flags)
}
