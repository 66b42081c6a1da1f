use std::{thread::sleep, time::{Duration, Instant}};

pub struct FrameClock {
    interval: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        FrameClock { interval: frame_interval(ticks_per_second), last_tick: Instant::now() }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Returns the time since the previous tick
    pub fn tick(&mut self) -> Duration {
        let elapsed = self.last_tick.elapsed();
        if let Some(rest) = remaining(self.interval, elapsed) {
            sleep(rest);
        }

        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;
        dt
    }
}

fn frame_interval(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}

fn remaining(interval: Duration, elapsed: Duration) -> Option<Duration> {
    interval.checked_sub(elapsed).filter(|rest| !rest.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_from_rate() {
        assert_eq!(frame_interval(5), Duration::from_millis(200));
        assert_eq!(frame_interval(8), Duration::from_millis(125));
        assert_eq!(frame_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn no_sleep_after_overrun() {
        let interval = Duration::from_millis(200);
        assert_eq!(remaining(interval, Duration::from_millis(50)), Some(Duration::from_millis(150)));
        assert_eq!(remaining(interval, interval), None);
        assert_eq!(remaining(interval, Duration::from_millis(250)), None);
    }

    #[test]
    fn tick_waits_for_interval() {
        let mut clock = FrameClock::new(50);
        clock.tick();
        let dt = clock.tick();
        assert!(dt >= clock.interval());
    }
}
