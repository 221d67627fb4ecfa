use std::{
    fmt::Display,
    io::Write,
    sync::{atomic, Mutex},
    time::{Duration, Instant},
};

const PRINT_INTERVAL: Duration = Duration::from_millis(300);

/// Thread safe completion counter
pub struct Progress {
    current: atomic::AtomicUsize,
    max: usize,
    last_print: Mutex<Instant>,
}

impl Progress {
    pub fn new(max: usize) -> Self {
        Self {
            current: Default::default(),
            max,
            last_print: Mutex::new(Instant::now()),
        }
    }

    pub fn add(&self, k: usize) -> usize {
        self.current.fetch_add(k, atomic::Ordering::SeqCst)
    }

    pub fn get_raw(&self) -> usize {
        self.current.load(atomic::Ordering::SeqCst)
    }

    pub fn percent(&self) -> f32 {
        if self.max == 0 {
            return 1.0;
        }
        (self.get_raw() as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// Print the bar, unless it has been printed recently or another thread is printing it
    pub fn print_throttled(&self) {
        let Ok(mut last_print) = self.last_print.try_lock() else {
            return;
        };
        if last_print.elapsed() >= PRINT_INTERVAL {
            print!("\r{self}");
            let _ = std::io::stdout().flush();
            *last_print = Instant::now();
        }
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        PercentBar {
            percent: self.percent(),
            width: 50,
        }
        .fmt(f)
    }
}

pub struct PercentBar {
    pub percent: f32,
    pub width: usize,
}

impl Display for PercentBar {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filled = ((self.width - 1) as f32 * self.percent).round() as usize;
        write!(
            f,
            "[{empty:=>width_left$}>{empty:.<width_right$}] {percent:.1}%",
            empty = "",
            width_left = filled,
            width_right = self.width - 1 - filled,
            percent = 100. * self.percent
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn percent_bar() {
        let bar = |percent| PercentBar { percent, width: 5 }.to_string();
        assert_eq!(bar(0.0), "[>....] 0.0%");
        assert_eq!(bar(0.5), "[==>..] 50.0%");
        assert_eq!(bar(1.0), "[====>] 100.0%");
    }

    #[test]
    fn progress_is_bounded() {
        let progress = Progress::new(4);
        assert_eq!(progress.percent(), 0.0);
        progress.add(1);
        assert_eq!(progress.percent(), 0.25);
        progress.add(10);
        assert_eq!(progress.percent(), 1.0);
        assert_eq!(progress.get_raw(), 11);

        assert_eq!(Progress::new(0).percent(), 1.0);
    }
}
