// bionic 系统属性存储绑定
// find/update/add 为 bionic 内部符号，不在 NDK 稳定接口中，
// 通过 dlsym 在运行时解析，缺失时覆写路径降级报错，常规 get/set 不受影响
use std::ffi::{CStr, CString, c_char, c_int, c_void};

use crate::api::{PROP_VALUE_MAX, PropertyStore};
use crate::errno::Errno;
use crate::log;

type SystemPropertyFind = unsafe extern "C" fn(name: *const c_char) -> *const c_void;
type SystemPropertyUpdate =
    unsafe extern "C" fn(pi: *mut c_void, value: *const c_char, len: u32) -> c_int;
type SystemPropertyAdd = unsafe extern "C" fn(
    name: *const c_char,
    name_len: u32,
    value: *const c_char,
    value_len: u32,
) -> c_int;

unsafe extern "C" {
    fn __system_property_get(name: *const c_char, value: *mut c_char) -> c_int;
    fn __system_property_set(name: *const c_char, value: *const c_char) -> c_int;
}

pub(crate) struct BionicStore {
    find_fn: Option<SystemPropertyFind>,
    update_fn: Option<SystemPropertyUpdate>,
    add_fn: Option<SystemPropertyAdd>,
}

impl BionicStore {
    // libc.so 必然已被宿主进程映射，RTLD_NOLOAD 仅取句柄不触发加载
    pub(crate) fn new() -> Result<Self, Errno> {
        let handle = unsafe { libc::dlopen(c"libc.so".as_ptr(), libc::RTLD_NOLOAD) };
        if handle.is_null() {
            return Err(Errno::InitErrStore);
        }

        let store = unsafe {
            let find_ptr = libc::dlsym(handle, c"__system_property_find".as_ptr());
            let update_ptr = libc::dlsym(handle, c"__system_property_update".as_ptr());
            let add_ptr = libc::dlsym(handle, c"__system_property_add".as_ptr());
            Self {
                find_fn: (!find_ptr.is_null())
                    .then(|| std::mem::transmute::<*mut c_void, SystemPropertyFind>(find_ptr)),
                update_fn: (!update_ptr.is_null())
                    .then(|| std::mem::transmute::<*mut c_void, SystemPropertyUpdate>(update_ptr)),
                add_fn: (!add_ptr.is_null())
                    .then(|| std::mem::transmute::<*mut c_void, SystemPropertyAdd>(add_ptr)),
            }
        };

        if store.find_fn.is_none() || store.update_fn.is_none() || store.add_fn.is_none() {
            log::warn(format_args!(
                "bionic internal property symbols unavailable, override path degraded"
            ));
        }
        Ok(store)
    }

    fn find_record(&self, key: &str) -> Option<*const c_void> {
        let find_fn = self.find_fn?;
        let key_c = CString::new(key).ok()?;
        let pi = unsafe { find_fn(key_c.as_ptr()) };
        if pi.is_null() { None } else { Some(pi) }
    }
}

impl PropertyStore for BionicStore {
    fn find(&mut self, key: &str) -> bool {
        self.find_record(key).is_some()
    }

    fn update(&mut self, key: &str, value: &str) -> Errno {
        if value.len() >= PROP_VALUE_MAX {
            return Errno::ValueTooLong;
        }
        let Some(update_fn) = self.update_fn else {
            return Errno::UpdateErr;
        };
        let Some(pi) = self.find_record(key) else {
            return Errno::NotFound;
        };
        let Ok(value_c) = CString::new(value) else {
            return Errno::InvalidArg;
        };
        let ret = unsafe { update_fn(pi as *mut c_void, value_c.as_ptr(), value.len() as u32) };
        if ret == 0 { Errno::Ok } else { Errno::UpdateErr }
    }

    fn add(&mut self, key: &str, value: &str) -> Errno {
        if key.is_empty() {
            return Errno::BadKey;
        }
        if value.len() >= PROP_VALUE_MAX {
            return Errno::ValueTooLong;
        }
        let Some(add_fn) = self.add_fn else {
            return Errno::AddErr;
        };
        let Ok(key_c) = CString::new(key) else {
            return Errno::BadKey;
        };
        let Ok(value_c) = CString::new(value) else {
            return Errno::InvalidArg;
        };
        let ret = unsafe {
            add_fn(
                key_c.as_ptr(),
                key.len() as u32,
                value_c.as_ptr(),
                value.len() as u32,
            )
        };
        if ret == 0 { Errno::Ok } else { Errno::AddErr }
    }

    fn get(&mut self, key: &str) -> Option<String> {
        let key_c = CString::new(key).ok()?;
        let mut value = [0 as c_char; PROP_VALUE_MAX];
        let len = unsafe { __system_property_get(key_c.as_ptr(), value.as_mut_ptr()) };
        if len <= 0 || len as usize >= PROP_VALUE_MAX {
            return None;
        }
        let value = unsafe { CStr::from_ptr(value.as_ptr()) };
        value.to_str().ok().map(|text| text.to_string())
    }

    fn set(&mut self, key: &str, value: &str) -> Errno {
        if value.len() >= PROP_VALUE_MAX {
            return Errno::ValueTooLong;
        }
        let Ok(key_c) = CString::new(key) else {
            return Errno::BadKey;
        };
        let Ok(value_c) = CString::new(value) else {
            return Errno::InvalidArg;
        };
        let ret = unsafe { __system_property_set(key_c.as_ptr(), value_c.as_ptr()) };
        if ret == 0 { Errno::Ok } else { Errno::SetErr }
    }
}
