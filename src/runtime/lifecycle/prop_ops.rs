// 属性写入的共用实现：常规 set 与 find/update/add 覆写，统一审计与日志
use crate::errno::Errno;
use crate::log;

use super::super::record;
use super::super::state::CoreState;

pub(super) fn get_in(state: &mut CoreState, key: &str) -> Option<String> {
    state.store.as_mut().and_then(|store| store.get(key))
}

// 常规设置路径，结果写入审计记录
pub(super) fn set_in(state: &mut CoreState, key: &str, value: &str) -> Errno {
    let Some(store) = state.store.as_mut() else {
        return Errno::Uninit;
    };
    let status = store.set(key, value);
    record::add_set_record(state, status.as_i32(), key, value);
    if status != Errno::Ok {
        log::warn(format_args!("set {key}={value} failed: {status:?}"));
    }
    status
}

// 存在则原地更新、不存在则新建，结果写入审计记录
pub(super) fn override_in(state: &mut CoreState, key: &str, value: &str) -> Errno {
    let Some(store) = state.store.as_mut() else {
        return Errno::Uninit;
    };
    let status = if store.find(key) {
        store.update(key, value)
    } else {
        store.add(key, value)
    };
    record::add_override_record(state, status.as_i32(), key, value);
    if status != Errno::Ok {
        log::warn(format_args!("override {key}={value} failed: {status:?}"));
    }
    status
}
