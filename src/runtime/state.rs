// 运行时核心状态定义，包含初始化信息、属性存储、审计记录及全局同步原语
use crate::api::{PropertyStore, ReadMode};
use crate::errno::Errno;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

// Mutex poison 恢复扩展，避免持锁线程 panic 后引发连锁 panic
pub(crate) trait MutexPoisonRecover<T> {
    fn lock_or_poison(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexPoisonRecover<T> for Mutex<T> {
    fn lock_or_poison(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// 属性写入操作类型，用于审计记录
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum RecordOp {
    Set,
    Override,
}

// 单条属性写入审计记录
#[derive(Clone, Debug)]
pub(super) struct RecordEntry {
    pub(super) op: RecordOp,
    pub(super) ts_ms: u64,
    pub(super) status_code: i32,
    pub(super) key: String,
    pub(super) value: String,
}

// 初始化状态，记录读取模式与初始化结果
pub(super) struct InitInfo {
    pub(super) status: Errno,
    pub(super) mode: ReadMode,
}

impl Default for InitInfo {
    fn default() -> Self {
        Self {
            status: Errno::Uninit,
            mode: ReadMode::Buffered,
        }
    }
}

// 核心可变状态，由 GlobalState::state 互斥锁保护
#[derive(Default)]
pub(super) struct CoreState {
    pub(super) init: InitInfo,
    pub(super) debug: bool,
    // 启动信息文件的根目录，测试与 harness 可重定位到沙箱
    pub(super) source_root: PathBuf,
    // 注入的属性存储，init 时若为空则安装平台默认实现
    pub(super) store: Option<Box<dyn PropertyStore>>,
    pub(super) recordable: bool,
    pub(super) records: Vec<RecordEntry>,
}

// 全局同步容器：state 保护核心状态
pub(super) struct GlobalState {
    pub(super) state: Mutex<CoreState>,
}

pub(super) static GLOBAL: Lazy<GlobalState> = Lazy::new(|| GlobalState {
    state: Mutex::new(CoreState {
        source_root: PathBuf::from("/"),
        ..CoreState::default()
    }),
});
