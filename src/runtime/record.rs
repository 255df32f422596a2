// 属性写入审计记录的写入、格式化与导出
use crate::api::{
    RECORD_ITEM_ERRNO, RECORD_ITEM_KEY, RECORD_ITEM_OP, RECORD_ITEM_TIMESTAMP, RECORD_ITEM_VALUE,
};
use crate::errno::Errno;
use std::fmt::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use super::state::{CoreState, RecordEntry, RecordOp};

// 记录条数上限，超出后淘汰最早的记录
const MAX_RECORDS: usize = 256;

#[inline]
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}

// recordable 关闭时静默丢弃，满时淘汰队首
#[inline]
fn push_record(state: &mut CoreState, entry: RecordEntry) {
    if !state.recordable {
        return;
    }
    if state.records.len() >= MAX_RECORDS {
        state.records.remove(0);
    }
    state.records.push(entry);
}

pub(super) fn add_set_record(state: &mut CoreState, status_code: i32, key: &str, value: &str) {
    push_record(
        state,
        RecordEntry {
            op: RecordOp::Set,
            ts_ms: now_ms(),
            status_code,
            key: key.to_string(),
            value: value.to_string(),
        },
    );
}

pub(super) fn add_override_record(state: &mut CoreState, status_code: i32, key: &str, value: &str) {
    push_record(
        state,
        RecordEntry {
            op: RecordOp::Override,
            ts_ms: now_ms(),
            status_code,
            key: key.to_string(),
            value: value.to_string(),
        },
    );
}

fn op_name(op: RecordOp) -> &'static str {
    match op {
        RecordOp::Set => "SET",
        RecordOp::Override => "OVERRIDE",
    }
}

// 按 item_flags 位掩码选择性输出字段，CSV 格式
fn format_entry(entry: &RecordEntry, item_flags: u32) -> String {
    let mut line = String::new();
    if item_flags & RECORD_ITEM_TIMESTAMP != 0 {
        let _ = write!(line, "{},", entry.ts_ms);
    }
    if item_flags & RECORD_ITEM_OP != 0 {
        let _ = write!(line, "{},", op_name(entry.op));
    }
    if item_flags & RECORD_ITEM_KEY != 0 {
        let _ = write!(line, "{},", entry.key);
    }
    if item_flags & RECORD_ITEM_VALUE != 0 {
        let _ = write!(line, "{},", entry.value);
    }
    if item_flags & RECORD_ITEM_ERRNO != 0 {
        let _ = write!(line, "{},", entry.status_code);
    }
    line.push('\n');
    line
}

pub(super) fn get_records_text(state: &CoreState, item_flags: u32) -> Option<String> {
    if !state.recordable || state.records.is_empty() {
        return None;
    }
    let mut output = String::new();
    for entry in &state.records {
        output.push_str(&format_entry(entry, item_flags));
    }
    Some(output)
}

// 循环写入直到全部字节落盘，处理 short write
pub(super) fn dump_records_text(fd: i32, text: &str) -> Result<(), Errno> {
    if fd < 0 {
        return Err(Errno::InvalidArg);
    }
    let bytes = text.as_bytes();
    let mut offset = 0usize;
    while offset < bytes.len() {
        let written = unsafe {
            libc::write(
                fd,
                bytes[offset..].as_ptr() as *const libc::c_void,
                bytes.len() - offset,
            )
        };
        if written <= 0 {
            return Err(Errno::Invalid);
        }
        offset += written as usize;
    }
    Ok(())
}
