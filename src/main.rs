//! horario main entrypoint.

use horario::run;

fn main() {
    if let Err(e) = run() {
        horario::ui::messages::error(&e);
        std::process::exit(1);
    }
}
