// 属性操作错误码，0 表示成功
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Errno {
    Ok = 0,           // 成功
    Uninit = 1,       // 未初始化
    InitErrStore = 2, // 平台属性存储初始化失败
    InvalidArg = 3,   // 参数无效
    BadKey = 4,       // 属性名非法
    ValueTooLong = 5, // 属性值超出 PROP_VALUE_MAX
    NotFound = 6,     // 属性记录不存在
    Exists = 7,       // 属性记录已存在
    UpdateErr = 8,    // 原地更新属性记录失败
    AddErr = 9,       // 新建属性记录失败
    SetErr = 10,      // 常规设置失败
    RoOverwrite = 11, // 拒绝改写已有只读属性
    ReadSource = 12,  // 启动信息文件不可读
    NoMatch = 13,     // 项目号不在已知机型列表
    Max = 255,        // 保留上界
    Invalid = 1002,   // 无效状态
}

impl Errno {
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<Errno> for i32 {
    fn from(value: Errno) -> Self {
        value as i32
    }
}
