// runtime 模块入口，将内部子模块的功能统一暴露为 crate 级公共接口
use crate::api::{PropertyStore, ReadMode};
use crate::errno::Errno;
use std::path::Path;

mod alarm;
mod lifecycle;
mod model;
mod record;
mod source;
mod state;
mod store;


pub use store::MemStore;

pub(crate) fn get_version() -> String {
    lifecycle::get_version()
}

pub(crate) fn init(mode: ReadMode, debug: bool) -> Errno {
    lifecycle::init(mode, debug)
}

pub(crate) fn vendor_load_properties() {
    lifecycle::vendor_load_properties()
}

pub(crate) fn load_device_model() -> Errno {
    lifecycle::load_device_model()
}

pub(crate) fn load_alarm_boot() -> Errno {
    lifecycle::load_alarm_boot()
}

pub(crate) fn property_get(key: &str) -> Option<String> {
    lifecycle::property_get(key)
}

pub(crate) fn property_set(key: &str, value: &str) -> Errno {
    lifecycle::property_set(key, value)
}

pub(crate) fn property_override(key: &str, value: &str) -> Errno {
    lifecycle::property_override(key, value)
}

pub(crate) fn set_property_store(store: Box<dyn PropertyStore>) {
    lifecycle::set_property_store(store)
}

pub(crate) fn set_source_root(root: &Path) -> Errno {
    lifecycle::set_source_root(root)
}

pub(crate) fn clear() {
    lifecycle::clear();
}

pub(crate) fn get_mode() -> ReadMode {
    lifecycle::get_mode()
}

pub(crate) fn get_debug() -> bool {
    lifecycle::get_debug()
}

pub(crate) fn set_debug(debug: bool) {
    lifecycle::set_debug(debug)
}

pub(crate) fn get_recordable() -> bool {
    lifecycle::get_recordable()
}

pub(crate) fn set_recordable(recordable: bool) {
    lifecycle::set_recordable(recordable)
}

pub(crate) fn get_records(item_flags: u32) -> Option<String> {
    lifecycle::get_records(item_flags)
}

pub(crate) fn dump_records(fd: i32, item_flags: u32) -> Errno {
    lifecycle::dump_records(fd, item_flags)
}
