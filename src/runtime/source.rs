// 启动信息源适配层：两种宿主 API 读取内核伪文件并修剪
use crate::api::ReadMode;
use std::ffi::CString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

// 启动信息文件相对路径，统一挂在可重定位的根目录下
pub(super) const PRJ_VERSION_FILE: &str = "proc/oppoVersion/prjVersion";
pub(super) const BOOT_REASON_FILE: &str = "proc/sys/kernel/boot_reason";
pub(super) const POWER_OFF_ALARM_FILE: &str = "persist/alarm/powerOffAlarmSet";

// 描述符读取的单次缓冲区大小，目标均为数字节的伪文件
const READ_CHUNK: usize = 128;

// 读取并修剪启动信息文件，不可读或非 UTF-8 返回 None
pub(super) fn read_trimmed(mode: ReadMode, root: &Path, rel_path: &str) -> Option<String> {
    let path = root.join(rel_path);
    let content = match mode {
        ReadMode::Buffered => read_buffered(&path),
        ReadMode::RawFd => read_raw_fd(&path),
    }?;
    Some(content.trim().to_string())
}

fn read_buffered(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

fn read_raw_fd(path: &Path) -> Option<String> {
    let path_c = CString::new(path.as_os_str().as_bytes()).ok()?;
    let fd = unsafe { libc::open(path_c.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC) };
    if fd < 0 {
        return None;
    }

    let mut content = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let count = unsafe { libc::read(fd, chunk.as_mut_ptr() as *mut libc::c_void, READ_CHUNK) };
        if count < 0 {
            unsafe { libc::close(fd) };
            return None;
        }
        if count == 0 {
            break;
        }
        content.extend_from_slice(&chunk[..count as usize]);
    }
    unsafe { libc::close(fd) };
    String::from_utf8(content).ok()
}

#[cfg(test)]
mod tests {
    use super::{PRJ_VERSION_FILE, read_trimmed};
    use crate::api::ReadMode;
    use std::fs;

    fn write_source(root: &std::path::Path, rel_path: &str, content: &[u8]) {
        let path = root.join(rel_path);
        fs::create_dir_all(path.parent().expect("source file has parent"))
            .expect("create source dir");
        fs::write(path, content).expect("write source file");
    }

    #[test]
    fn both_modes_trim_trailing_newline() {
        let dir = tempfile::tempdir().expect("create tempdir");
        write_source(dir.path(), PRJ_VERSION_FILE, b"14046\n");

        let buffered = read_trimmed(ReadMode::Buffered, dir.path(), PRJ_VERSION_FILE);
        let raw = read_trimmed(ReadMode::RawFd, dir.path(), PRJ_VERSION_FILE);
        assert_eq!(buffered.as_deref(), Some("14046"));
        assert_eq!(raw.as_deref(), Some("14046"));
    }

    #[test]
    fn both_modes_trim_surrounding_whitespace() {
        let dir = tempfile::tempdir().expect("create tempdir");
        write_source(dir.path(), "boot_reason", b"  3 \t\n");

        for mode in [ReadMode::Buffered, ReadMode::RawFd] {
            let content = read_trimmed(mode, dir.path(), "boot_reason");
            assert_eq!(content.as_deref(), Some("3"), "mode {mode:?}");
        }
    }

    #[test]
    fn missing_file_reads_none_in_both_modes() {
        let dir = tempfile::tempdir().expect("create tempdir");
        assert!(read_trimmed(ReadMode::Buffered, dir.path(), PRJ_VERSION_FILE).is_none());
        assert!(read_trimmed(ReadMode::RawFd, dir.path(), PRJ_VERSION_FILE).is_none());
    }

    #[test]
    fn raw_fd_reads_past_single_chunk() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let mut content = vec![b'9'; 300];
        content.push(b'\n');
        write_source(dir.path(), "long_token", &content);

        let token = read_trimmed(ReadMode::RawFd, dir.path(), "long_token");
        assert_eq!(token.as_deref(), Some("9".repeat(300).as_str()));
    }

    #[test]
    fn invalid_utf8_reads_none_in_both_modes() {
        let dir = tempfile::tempdir().expect("create tempdir");
        write_source(dir.path(), "garbage", &[0xff, 0xfe, 0xfd]);

        assert!(read_trimmed(ReadMode::Buffered, dir.path(), "garbage").is_none());
        assert!(read_trimmed(ReadMode::RawFd, dir.path(), "garbage").is_none());
    }
}
