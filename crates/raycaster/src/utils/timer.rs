use std::ops::{Deref, DerefMut};

pub struct TimedResult<T> {
    pub res: T,
    pub elapsed: std::time::Duration,
}

impl<T> Deref for TimedResult<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.res
    }
}

impl<T> DerefMut for TimedResult<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.res
    }
}

pub fn timed_scope<R, F: FnOnce() -> R>(f: F) -> TimedResult<R> {
    let begin = std::time::Instant::now();
    let res = f();

    let elapsed = begin.elapsed();

    TimedResult { res, elapsed }
}

pub fn timed_scope_log<R, F: FnOnce() -> R>(label: &'static str, f: F) -> TimedResult<R> {
    let time_res = timed_scope(f);
    log::log!(target: "scoped timer", log::Level::Info, "{}: {}", label, format_elapsed(time_res.elapsed));
    time_res
}

pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    if elapsed < std::time::Duration::from_millis(1) {
        let micro = elapsed.as_secs_f32() * 1000. * 1000.;
        format!("{micro:.3}µs")
    } else if elapsed < std::time::Duration::from_secs(1) {
        let milli = elapsed.as_secs_f32() * 1000.;
        format!("{milli:.3}ms")
    } else if elapsed < std::time::Duration::from_secs(60) {
        let s = elapsed.as_secs_f32();
        format!("{s:.3}s")
    } else {
        // Minutes and more
        let elapsed_secs = elapsed.as_secs_f32();
        let elapsed_minutes = elapsed_secs / 60.;
        let elapsed_hours = elapsed_minutes / 60.;
        let h = elapsed_hours as u32;
        let m = (elapsed_minutes % 60.0) as u32;
        let s = (elapsed_secs % 60.0) as u32;
        format!("{h}h{m}m{s}s")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(Duration::from_micros(12)), "12.000µs");
        assert_eq!(format_elapsed(Duration::from_millis(250)), "250.000ms");
        assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.500s");
        assert_eq!(format_elapsed(Duration::from_secs(3723)), "1h2m3s");
    }

    #[test]
    fn timed_scope_returns_value() {
        let res = timed_scope(|| 21 * 2);
        assert_eq!(*res, 42);
    }
}
