//! Athletica CLI entrypoint.

use athletica::run;
use athletica::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
