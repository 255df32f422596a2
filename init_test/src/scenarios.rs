mod alarm;
mod models;
mod overrides;
mod sources;
mod stress;

pub fn run_all() {
    run("model-14045", models::scenario_model_14045);
    run("model-14046", models::scenario_model_14046);
    run("model-14047", models::scenario_model_14047);
    run("model-unknown-code", models::scenario_unknown_code);
    run("model-containing-token", models::scenario_containing_token);
    run("model-missing-file", models::scenario_missing_file);
    run("model-repeat-idempotent", models::scenario_repeat_idempotent);
    run("alarm-rtc-flag", alarm::scenario_rtc_flag);
    run("alarm-flag-cleared", alarm::scenario_flag_cleared);
    run("alarm-bootloader-prop", alarm::scenario_bootloader_prop);
    run("alarm-missing-files", alarm::scenario_missing_files);
    run("override-create-update", overrides::scenario_create_update);
    run("override-ro-guard", overrides::scenario_ro_guard);
    run("override-records", overrides::scenario_records);
    run(
        "sources-read-modes-agree",
        sources::scenario_read_modes_agree,
    );
    run("sources-vendor-hook", sources::scenario_vendor_hook);
    run("reload-churn", stress::scenario_reload_churn);
}

fn run(name: &str, scenario: fn()) {
    println!("scenario: {name}");
    scenario();
}
