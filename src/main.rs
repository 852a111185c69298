//! rTimeweaver main entrypoint.

use rtimeweaver::run;
use rtimeweaver::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error [{}]: {}", e.kind(), e));
        std::process::exit(1);
    }
}
