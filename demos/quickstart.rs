use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use xenochron::{Alarm, ClockConfig, ClockSession};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut session = ClockSession::new(ClockConfig::default());
    let soon = xenochron::tick_manual(xenochron::tick_manual(session.alien_time()));
    session
        .alarms()
        .add(Alarm::new(soon.hour().into(), soon.minute().into(), soon.second().into()).unwrap());

    session.start();
    for _ in 0..4 {
        let alien = session.alien_time();
        println!("Alien: {} {}", alien.formatted_date(), alien.formatted_time());
        if let Some(earth) = session.earth() {
            println!(
                "Earth: {} {} ({})",
                earth.formatted_date(),
                earth.formatted_time(),
                earth.month_name()
            );
        }
        if session.alarms().is_triggered() {
            println!("Alarm!");
            session.alarms().dismiss();
        }
        thread::sleep(Duration::from_millis(500));
    }
    session.stop();
}
