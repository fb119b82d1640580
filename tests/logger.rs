use log::{Level, LevelFilter, Metadata};
use regcolor_lib::logger;

fn enabled(level: Level, target: &str) -> bool {
    log::logger().enabled(&Metadata::builder().level(level).target(target).build())
}

#[test]
fn logger_installs_once() {
    assert!(logger::init(LevelFilter::Trace).is_ok());
    log::info!("logger installed");
    assert!(logger::init(LevelFilter::Warn).is_err());

    // coloring passes stop at Debug, other targets go down to Trace
    let greedy = "regcolor_lib::register_allocation::greedy";
    assert!(enabled(Level::Debug, greedy));
    assert!(!enabled(Level::Trace, greedy));
    assert!(enabled(Level::Trace, "regcolor_lib::interference::graph"));
}
