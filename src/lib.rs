// Базовые модули
pub mod config;
pub mod metrics;

// Хелперы
pub mod fatal;   // fatal, Fatal, exit_on_error, run_or_exit
pub mod expect;  // expect_some, expect_or_exit, OptionExt
pub mod release; // release_if_present, Owned
pub mod random;  // random_int, random_real
pub mod range;   // is_in_range
pub mod defer;   // Defer + defer!

// CLI для бинаря-пробника
pub mod cli;

// Удобные реэкспорты
pub use config::UtilConfig;
pub use defer::Defer;
pub use expect::{expect_or_exit, expect_some, OptionExt};
pub use fatal::{exit_on_error, fatal, fatal_default, run_or_exit, Fatal};
pub use random::{random_int, random_real, try_random_int, try_random_real};
pub use range::is_in_range;
pub use release::{release_if_present, Owned};
