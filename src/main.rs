use env_logger::{Builder, Env};

use utilkit::fatal::exit_on_error;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — warn.
    // Пример: RUST_LOG=debug utilkit rand-int --min 1 --max 6
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = utilkit::cli::run() {
        exit_on_error(e);
    }
}
