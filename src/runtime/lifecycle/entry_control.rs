// 运行时控制入口，提供 clear/debug/record/存储注入等控制操作的实现
use crate::api::{PropertyStore, ReadMode};
use crate::errno::Errno;
use std::path::{Path, PathBuf};

use super::prop_ops;
use super::super::record;
use super::super::state::{GLOBAL, InitInfo, MutexPoisonRecover};

// 完全重置运行时状态：卸下属性存储、清空记录、回到未初始化
pub(super) fn clear() {
    let mut state = GLOBAL.state.lock_or_poison();
    state.store = None;
    state.recordable = false;
    state.records.clear();
    state.source_root = PathBuf::from("/");
    state.init = InitInfo::default();
}

pub(super) fn get_mode() -> ReadMode {
    let state = GLOBAL.state.lock_or_poison();
    state.init.mode
}

pub(super) fn get_debug() -> bool {
    let state = GLOBAL.state.lock_or_poison();
    state.debug
}

pub(super) fn set_debug(debug: bool) {
    let mut state = GLOBAL.state.lock_or_poison();
    state.debug = debug;
    crate::log::set_debug_enabled(debug);
}

pub(super) fn get_recordable() -> bool {
    let state = GLOBAL.state.lock_or_poison();
    state.recordable
}

pub(super) fn set_recordable(recordable: bool) {
    let mut state = GLOBAL.state.lock_or_poison();
    state.recordable = recordable;
}

pub(super) fn get_records(item_flags: u32) -> Option<String> {
    let state = GLOBAL.state.lock_or_poison();
    record::get_records_text(&state, item_flags)
}

pub(super) fn dump_records(fd: i32, item_flags: u32) -> Errno {
    let text = {
        let state = GLOBAL.state.lock_or_poison();
        record::get_records_text(&state, item_flags)
    };
    let Some(text) = text else {
        return Errno::Ok;
    };
    match record::dump_records_text(fd, &text) {
        Ok(()) => Errno::Ok,
        Err(err) => err,
    }
}

// 注入属性存储实现，init 前注入可阻止平台默认存储的安装
pub(super) fn set_property_store(store: Box<dyn PropertyStore>) {
    let mut state = GLOBAL.state.lock_or_poison();
    state.store = Some(store);
}

// 重定位启动信息文件的根目录，仅接受绝对路径
pub(super) fn set_source_root(root: &Path) -> Errno {
    if !root.is_absolute() {
        return Errno::InvalidArg;
    }
    let mut state = GLOBAL.state.lock_or_poison();
    state.source_root = root.to_path_buf();
    Errno::Ok
}

pub(super) fn property_get(key: &str) -> Option<String> {
    let mut state = GLOBAL.state.lock_or_poison();
    prop_ops::get_in(&mut state, key)
}

pub(super) fn property_set(key: &str, value: &str) -> Errno {
    let mut state = GLOBAL.state.lock_or_poison();
    if state.init.status != Errno::Ok {
        return Errno::Uninit;
    }
    prop_ops::set_in(&mut state, key, value)
}

pub(super) fn property_override(key: &str, value: &str) -> Errno {
    let mut state = GLOBAL.state.lock_or_poison();
    if state.init.status != Errno::Ok {
        return Errno::Uninit;
    }
    prop_ops::override_in(&mut state, key, value)
}
