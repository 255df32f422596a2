// 运行时初始化入口，负责安装平台属性存储并记录读取模式
use crate::api::{PropertyStore, ReadMode};
use crate::errno::Errno;
use crate::log;
use crate::version;

use super::super::state::{GLOBAL, MutexPoisonRecover};

pub(super) fn get_version() -> String {
    version::version_str_full()
}

pub(super) fn init(mode: ReadMode, debug: bool) -> Errno {
    let status = {
        let mut state = GLOBAL.state.lock_or_poison();
        if state.init.status != Errno::Uninit {
            return state.init.status;
        }

        state.debug = debug;
        log::set_debug_enabled(debug);
        state.init.mode = mode;
        if state.store.is_none() {
            match platform_store() {
                Ok(store) => state.store = Some(store),
                Err(err) => {
                    state.init.status = err;
                    return err;
                }
            }
        }
        state.init.status = Errno::Ok;
        state.init.status
    };

    log::info(format_args!("{}", version::version_str_full()));
    status
}

#[cfg(target_os = "android")]
fn platform_store() -> Result<Box<dyn PropertyStore>, Errno> {
    let store = crate::android::properties::BionicStore::new()?;
    Ok(Box::new(store))
}

// 宿主机没有 bionic 属性区，退化到内存表便于开发与测试
#[cfg(not(target_os = "android"))]
fn platform_store() -> Result<Box<dyn PropertyStore>, Errno> {
    Ok(Box::new(super::super::store::MemStore::new()))
}
