use std::time::{Duration, Instant};

use clap::ValueEnum;
use log::warn;

use crate::algorithm::Algorithm;

/// Which clock a measurement is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Clock {
    /// Monotonic wall clock.
    #[default]
    Wall,
    /// CPU time consumed by this process.
    #[value(name = "cpu")]
    ProcessCpu,
}

fn process_cpu_time() -> Option<Duration> {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc != 0 {
        return None;
    }

    Some(Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32))
}

/// CPU time between two readings, or the wall time since `wall_start` when
/// either reading failed.
fn cpu_or_wall(start: Option<Duration>, end: Option<Duration>, wall_start: Instant) -> f64 {
    match (start, end) {
        (Some(start), Some(end)) => end.saturating_sub(start).as_secs_f64(),
        _ => {
            warn!("process CPU clock unavailable, falling back to wall time");
            wall_start.elapsed().as_secs_f64()
        }
    }
}

/// Runs `f` once and returns the elapsed time in seconds.
pub fn measure<F: FnOnce()>(clock: Clock, f: F) -> f64 {
    match clock {
        Clock::Wall => {
            let start = Instant::now();
            f();
            start.elapsed().as_secs_f64()
        }
        Clock::ProcessCpu => {
            let wall_start = Instant::now();
            let start = process_cpu_time();
            f();
            cpu_or_wall(start, process_cpu_time(), wall_start)
        }
    }
}

pub fn time_sort(algorithm: Algorithm, data: &mut [i32], clock: Clock) -> f64 {
    measure(clock, || algorithm.sort(data))
}
