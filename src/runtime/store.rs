// 内存属性表：宿主机的平台存储实现，也供测试与 harness 注入
// 记录规则与 bionic 对齐，只读属性的改写只能走 find/update/add 覆写路径
use crate::api::{PROP_VALUE_MAX, PropertyStore};
use crate::errno::Errno;
use std::collections::BTreeMap;

// 只读属性命名空间前缀，常规 set 拒绝改写其已有值
const RO_PREFIX: &str = "ro.";

#[derive(Default)]
pub struct MemStore {
    props: BTreeMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

fn check_key(key: &str) -> Errno {
    if key.is_empty() || key.contains('\0') {
        return Errno::BadKey;
    }
    Errno::Ok
}

fn check_value(value: &str) -> Errno {
    if value.len() >= PROP_VALUE_MAX {
        return Errno::ValueTooLong;
    }
    Errno::Ok
}

impl PropertyStore for MemStore {
    fn find(&mut self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    fn update(&mut self, key: &str, value: &str) -> Errno {
        let status = check_value(value);
        if status != Errno::Ok {
            return status;
        }
        match self.props.get_mut(key) {
            Some(slot) => {
                *slot = value.to_string();
                Errno::Ok
            }
            None => Errno::NotFound,
        }
    }

    fn add(&mut self, key: &str, value: &str) -> Errno {
        let status = check_key(key);
        if status != Errno::Ok {
            return status;
        }
        let status = check_value(value);
        if status != Errno::Ok {
            return status;
        }
        if self.props.contains_key(key) {
            return Errno::Exists;
        }
        self.props.insert(key.to_string(), value.to_string());
        Errno::Ok
    }

    fn get(&mut self, key: &str) -> Option<String> {
        self.props.get(key).cloned()
    }

    // 已有只读属性仅接受等值重写，保证重复加载无害
    fn set(&mut self, key: &str, value: &str) -> Errno {
        match self.props.get(key) {
            None => self.add(key, value),
            Some(current) if key.starts_with(RO_PREFIX) => {
                if current == value {
                    Errno::Ok
                } else {
                    Errno::RoOverwrite
                }
            }
            Some(_) => self.update(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MemStore;
    use crate::api::{PROP_VALUE_MAX, PropertyStore};
    use crate::errno::Errno;

    #[test]
    fn add_then_get() {
        let mut store = MemStore::new();
        assert_eq!(store.add("ro.product.model", "R8200"), Errno::Ok);
        assert_eq!(store.get("ro.product.model").as_deref(), Some("R8200"));
        assert!(store.find("ro.product.model"));
        assert!(!store.find("ro.product.name"));
    }

    #[test]
    fn add_rejects_existing_record() {
        let mut store = MemStore::new();
        assert_eq!(store.add("ro.common.soft", "MSM_14046"), Errno::Ok);
        assert_eq!(store.add("ro.common.soft", "MSM_14047"), Errno::Exists);
        assert_eq!(store.get("ro.common.soft").as_deref(), Some("MSM_14046"));
    }

    #[test]
    fn add_rejects_bad_key_and_long_value() {
        let mut store = MemStore::new();
        assert_eq!(store.add("", "value"), Errno::BadKey);
        let long_value = "v".repeat(PROP_VALUE_MAX);
        assert_eq!(store.add("persist.test", &long_value), Errno::ValueTooLong);
        let max_value = "v".repeat(PROP_VALUE_MAX - 1);
        assert_eq!(store.add("persist.test", &max_value), Errno::Ok);
    }

    #[test]
    fn update_requires_existing_record() {
        let mut store = MemStore::new();
        assert_eq!(store.update("ro.build.product", "R8207"), Errno::NotFound);
        assert_eq!(store.add("ro.build.product", "R8200"), Errno::Ok);
        assert_eq!(store.update("ro.build.product", "R8207"), Errno::Ok);
        assert_eq!(store.get("ro.build.product").as_deref(), Some("R8207"));
    }

    #[test]
    fn set_creates_missing_record() {
        let mut store = MemStore::new();
        assert_eq!(store.set("ro.alarm_boot", "false"), Errno::Ok);
        assert_eq!(store.get("ro.alarm_boot").as_deref(), Some("false"));
    }

    #[test]
    fn set_refuses_changing_readonly_value() {
        let mut store = MemStore::new();
        assert_eq!(store.set("ro.alarm_boot", "false"), Errno::Ok);
        assert_eq!(store.set("ro.alarm_boot", "true"), Errno::RoOverwrite);
        assert_eq!(store.get("ro.alarm_boot").as_deref(), Some("false"));
    }

    #[test]
    fn set_accepts_identical_readonly_rewrite() {
        let mut store = MemStore::new();
        assert_eq!(store.set("ro.common.soft", "MSM_14045"), Errno::Ok);
        assert_eq!(store.set("ro.common.soft", "MSM_14045"), Errno::Ok);
    }

    #[test]
    fn set_updates_writable_namespace() {
        let mut store = MemStore::new();
        assert_eq!(store.set("persist.alarm.flag", "0"), Errno::Ok);
        assert_eq!(store.set("persist.alarm.flag", "1"), Errno::Ok);
        assert_eq!(store.get("persist.alarm.flag").as_deref(), Some("1"));
    }
}
