use crate::errno::Errno;
use crate::runtime;
use std::path::Path;

// 属性值长度上限，与 bionic 的 PROP_VALUE_MAX 一致（含结尾 NUL）
pub const PROP_VALUE_MAX: usize = 92;

// 属性存储的注入接口，find/update/add 为底层记录操作，get/set 为常规读写
// 运行时持有单一实现：设备上为 bionic 绑定，宿主机与测试为内存表
pub trait PropertyStore: Send {
    // 查找属性记录是否存在
    fn find(&mut self, key: &str) -> bool;
    // 原地更新已存在的属性记录
    fn update(&mut self, key: &str, value: &str) -> Errno;
    // 新建属性记录
    fn add(&mut self, key: &str, value: &str) -> Errno;
    // 读取属性值，不存在返回 None
    fn get(&mut self, key: &str) -> Option<String>;
    // 常规设置路径，已有只读属性的改写会被拒绝
    fn set(&mut self, key: &str, value: &str) -> Errno;
}

// 操作记录字段掩码
pub const RECORD_ITEM_ALL: u32 = 0xFF;
pub const RECORD_ITEM_TIMESTAMP: u32 = 1 << 0;
pub const RECORD_ITEM_OP: u32 = 1 << 1;
pub const RECORD_ITEM_KEY: u32 = 1 << 2;
pub const RECORD_ITEM_VALUE: u32 = 1 << 3;
pub const RECORD_ITEM_ERRNO: u32 = 1 << 4;

// Buffered: 整文件读入后修剪
// RawFd: libc 描述符读入固定缓冲区后修剪
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReadMode {
    Buffered = 0,
    RawFd = 1,
}

impl ReadMode {
    pub fn from_i32(mode: i32) -> Result<Self, Errno> {
        match mode {
            0 => Ok(Self::Buffered),
            1 => Ok(Self::RawFd),
            _ => Err(Errno::InvalidArg),
        }
    }
}

pub fn get_version() -> String {
    runtime::get_version()
}

// 初始化运行时，只生效一次，重复调用返回首次结果
// 未注入存储时安装平台默认实现
pub fn init(mode: ReadMode, debug: bool) -> Errno {
    runtime::init(mode, debug)
}

// init 进程调用的厂商属性加载入口
// 未初始化时按默认参数自动初始化，所有失败对宿主静默
#[unsafe(no_mangle)]
pub extern "C" fn vendor_load_properties() {
    runtime::vendor_load_properties();
}

// 读取项目号文件并写入对应机型的六个固定属性
pub fn load_device_model() -> Errno {
    runtime::load_device_model()
}

// 依据启动原因与持久化闹钟标志设置 ro.alarm_boot，文件缺失则不写
pub fn load_alarm_boot() -> Errno {
    runtime::load_alarm_boot()
}

pub fn property_get(key: &str) -> Option<String> {
    runtime::property_get(key)
}

pub fn property_set(key: &str, value: &str) -> Errno {
    runtime::property_set(key, value)
}

// 存在则原地更新、不存在则新建，可改写常规 set 拒绝的只读属性
pub fn property_override(key: &str, value: &str) -> Errno {
    runtime::property_override(key, value)
}

// 注入属性存储实现，替换平台默认存储
pub fn set_property_store(store: Box<dyn PropertyStore>) {
    runtime::set_property_store(store)
}

// 重定位启动信息文件的根目录，仅接受绝对路径
pub fn set_source_root(root: &Path) -> Errno {
    runtime::set_source_root(root)
}

// 清除属性存储与记录并重置运行时状态
pub fn clear() {
    runtime::clear();
}

pub fn get_mode() -> ReadMode {
    runtime::get_mode()
}

pub fn get_debug() -> bool {
    runtime::get_debug()
}

pub fn set_debug(debug: bool) {
    runtime::set_debug(debug);
}

pub fn get_recordable() -> bool {
    runtime::get_recordable()
}

pub fn set_recordable(recordable: bool) {
    runtime::set_recordable(recordable);
}

// 按字段掩码导出属性写入记录文本
pub fn get_records(item_flags: u32) -> Option<String> {
    runtime::get_records(item_flags)
}

// 按字段掩码将属性写入记录写入文件描述符
pub fn dump_records(fd: i32, item_flags: u32) -> Errno {
    runtime::dump_records(fd, item_flags)
}
