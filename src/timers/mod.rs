//! Nested wall clock timers for solver phases.

use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: HashMap<&'static str, InnerTimer>,
}

impl InnerTimer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(start) = self.start.take() {
            self.elapsed += start.elapsed();
        }
    }

    fn print(&self, key: &str, depth: usize) {
        let tabs = format!("{: <1$}", "", 4 * depth);
        println!("{}{} : {:?}", tabs, key, self.elapsed);
        for (k, t) in self.subtimers.iter() {
            t.print(k, depth + 1);
        }
    }
}

/// A collection of named timers.  Timers started while another
/// is running are recorded as children of the running timer.
#[derive(Debug, Default)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: HashMap<&'static str, InnerTimer>,
}

impl Timers {
    fn active_children(&mut self) -> &mut HashMap<&'static str, InnerTimer> {
        let mut children = &mut self.subtimers;
        for key in self.stack.iter() {
            children = &mut children.entry(*key).or_default().subtimers;
        }
        children
    }

    /// start a timer with name `key` as a child of the current timer
    pub fn start_as_current(&mut self, key: &'static str) {
        self.active_children().entry(key).or_default().start();
        self.stack.push(key);
    }

    /// stop the current timer
    pub fn stop_current(&mut self) {
        if let Some(key) = self.stack.pop() {
            if let Some(t) = self.active_children().get_mut(key) {
                t.stop();
            }
        }
    }

    /// elapsed time of a top level timer
    pub fn elapsed(&self, key: &str) -> Duration {
        self.subtimers
            .get(key)
            .map_or(Duration::ZERO, |t| t.elapsed)
    }

    pub fn total_time(&self) -> Duration {
        self.subtimers
            .values()
            .fold(Duration::ZERO, |acc, t| acc + t.elapsed)
    }

    pub fn print(&self) {
        for (key, t) in self.subtimers.iter() {
            t.print(key, 0);
        }
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {
        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_timers() {
        let mut timers = Timers::default();
        timeit! {timers => "outer"; {
            timeit! {timers => "inner"; {
                std::thread::sleep(Duration::from_millis(1));
            }}
        }}
        assert!(timers.stack.is_empty());
        assert!(timers.elapsed("outer") >= Duration::from_millis(1));
        assert_eq!(timers.elapsed("inner"), Duration::ZERO);
        assert!(timers.subtimers["outer"].subtimers.contains_key("inner"));
        assert_eq!(timers.total_time(), timers.elapsed("outer"));
    }
}
