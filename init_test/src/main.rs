mod scenarios;
mod test_ctx;

use r1c_init::set_debug;

fn main() {
    set_debug(true);
    scenarios::run_all();
    println!("init_test all scenarios passed");
}
