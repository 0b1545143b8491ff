use log::error;

use wordstats::implementations::catalog;
use wordstats::run_main;

fn main() {
    // Every known incorrect implementation is a candidate the suite must kill
    let registry = catalog::registry();

    // Run the shared main function
    if let Err(e) = run_main(registry) {
        error!("{e}");
        std::process::exit(1);
    }
}
