//! Runs in its own process: installing the config freezes it for the rest of the run.

use anyhow::Result;

use utilkit::config::UtilConfig;
use utilkit::Fatal;

#[test]
fn installed_config_drives_default_exit_code() -> Result<()> {
    UtilConfig::from_env()
        .with_default_exit_code(5)
        .with_log_fatal(true)
        .install()?;

    let cfg = UtilConfig::global();
    assert_eq!(cfg.default_exit_code, 5);
    assert!(cfg.log_fatal);
    assert_eq!(Fatal::new("after install").exit_code(), 5);

    // второй install отклоняется, глобальная копия не меняется
    assert!(UtilConfig::default().install().is_err());
    assert_eq!(UtilConfig::global().default_exit_code, 5);
    Ok(())
}
