// Android 平台相关功能的模块入口

// bionic 系统属性存储绑定
pub mod properties;
