//! cronograma main entrypoint.

use cronograma::run;
use cronograma::ui::messages::report;

fn main() {
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
