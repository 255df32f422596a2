#![allow(dead_code)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]

#[cfg(not(unix))]
compile_error!("r1c_init only builds for unix targets");

// 公共 API 层，提供初始化、启动属性加载、属性读写等操作
mod api;
// 错误码定义
mod errno;
// 日志输出，设备上走 Android logcat，宿主机退化到 stderr
mod log;
// Android 相关：bionic 属性存储绑定
#[cfg(target_os = "android")]
mod android;
// 运行时状态管理：生命周期、启动信息源、属性存储
mod runtime;
// 版本信息
mod version;

pub use api::{
    PROP_VALUE_MAX, PropertyStore, RECORD_ITEM_ALL, RECORD_ITEM_ERRNO, RECORD_ITEM_KEY,
    RECORD_ITEM_OP, RECORD_ITEM_TIMESTAMP, RECORD_ITEM_VALUE, ReadMode, clear, dump_records,
    get_debug, get_mode, get_recordable, get_records, get_version, init, load_alarm_boot,
    load_device_model, property_get, property_override, property_set, set_debug,
    set_property_store, set_recordable, set_source_root, vendor_load_properties,
};
pub use errno::Errno as R1cInitErrno;
pub use runtime::MemStore;
