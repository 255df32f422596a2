use r1c_init::{R1cInitErrno, ReadMode, clear, load_device_model};

use crate::test_ctx::{
    MODEL_KEYS, PRJ_VERSION_FILE, assert_prop, assert_prop_unset, sandbox_runtime, write_source,
};

fn run_model_case(code: &str, model: &str, soft_version: &str, description: &str) {
    let dir = sandbox_runtime(ReadMode::Buffered, "init model case");
    write_source(dir.path(), PRJ_VERSION_FILE, &format!("{code}\n"));
    let status = load_device_model();
    assert_eq!(
        status,
        R1cInitErrno::Ok,
        "load_device_model for {code}: {status:?}"
    );

    assert_prop("ro.product.model", model);
    assert_prop("ro.common.soft", soft_version);
    assert_prop("ro.product.name", model);
    assert_prop("ro.build.product", model);
    let fingerprint = format!("OPPO/{model}/R1C:4.4.4/KTU84P/1390465867:user/release-keys");
    assert_prop("ro.build.fingerprint", &fingerprint);
    assert_prop("ro.build.description", description);
    clear();
}

pub fn scenario_model_14045() {
    run_model_case(
        "14045",
        "R8207",
        "MSM_14045",
        "msm8916_32-user 4.4.4 KTU84P eng.root.20151213 release-keys",
    );
}

pub fn scenario_model_14046() {
    run_model_case(
        "14046",
        "R8200",
        "MSM_14046",
        "msm8916_32-user 4.4.4 KTU84P eng.root.20150515 release-keys",
    );
}

pub fn scenario_model_14047() {
    run_model_case(
        "14047",
        "R8205",
        "MSM_14047",
        "msm8916_32-user 4.4.4 KTU84P eng.root.20151215 release-keys",
    );
}

pub fn scenario_unknown_code() {
    let dir = sandbox_runtime(ReadMode::Buffered, "init unknown code");
    write_source(dir.path(), PRJ_VERSION_FILE, "9999\n");

    let status = load_device_model();
    assert_eq!(status, R1cInitErrno::NoMatch, "unexpected status {status:?}");
    for key in MODEL_KEYS {
        assert_prop_unset(key);
    }
    clear();
}

// 版本号只接受整串匹配，包含已知代号的长串不算命中
pub fn scenario_containing_token() {
    let dir = sandbox_runtime(ReadMode::Buffered, "init containing token");
    write_source(dir.path(), PRJ_VERSION_FILE, "140456\n");

    let status = load_device_model();
    assert_eq!(status, R1cInitErrno::NoMatch, "unexpected status {status:?}");
    for key in MODEL_KEYS {
        assert_prop_unset(key);
    }
    clear();
}

pub fn scenario_missing_file() {
    let _dir = sandbox_runtime(ReadMode::Buffered, "init missing file");

    let status = load_device_model();
    assert_eq!(
        status,
        R1cInitErrno::ReadSource,
        "unexpected status {status:?}"
    );
    for key in MODEL_KEYS {
        assert_prop_unset(key);
    }
    clear();
}

pub fn scenario_repeat_idempotent() {
    let dir = sandbox_runtime(ReadMode::Buffered, "init repeat");
    write_source(dir.path(), PRJ_VERSION_FILE, "14045\n");

    let first = load_device_model();
    assert_eq!(first, R1cInitErrno::Ok, "first load: {first:?}");
    let second = load_device_model();
    assert_eq!(second, R1cInitErrno::Ok, "second load: {second:?}");
    assert_prop("ro.product.model", "R8207");
    assert_prop("ro.common.soft", "MSM_14045");
    clear();
}
