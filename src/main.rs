//! strongdash main entrypoint.

use strongdash::run;
use strongdash::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
