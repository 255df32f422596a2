use r1c_init::{ReadMode, clear, load_device_model};

use crate::test_ctx::{
    PRJ_VERSION_FILE, assert_prop, ensure_ok, env_usize, sandbox_runtime, write_source,
};

// 反复重建运行时并加载机型，验证状态机可重复收敛
pub fn scenario_reload_churn() {
    let iterations = env_usize("INIT_TEST_CHURN_ITERS", 64);
    let cases = [("14045", "R8207"), ("14046", "R8200"), ("14047", "R8205")];

    for index in 0..iterations {
        let (code, model) = cases[index % cases.len()];
        let mode = if index % 2 == 0 {
            ReadMode::Buffered
        } else {
            ReadMode::RawFd
        };
        let dir = sandbox_runtime(mode, "init churn");
        write_source(dir.path(), PRJ_VERSION_FILE, &format!("{code}\n"));
        ensure_ok(load_device_model(), "churn load");
        assert_prop("ro.product.model", model);
        clear();
    }
}
