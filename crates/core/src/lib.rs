pub mod probe;
pub mod workloads;

use std::io::{self, Write};
use std::time::Instant;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use tracing::debug;

use crate::probe::HardwareInfo;


/// Fixed numerator of the composite score: `floor(2_000_000 / total_ms)`.
pub const SCORE_NUMERATOR: u64 = 2_000_000;

/// Upper bound on timed tasks in one run (graphics is conditional).
pub const MAX_TASKS: usize = 4;

const BANNER_WIDTH: usize = 30;

/// One timed workload outcome. Insertion order is execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskResult {
    pub name: &'static str,
    pub duration_ms: u64,
}

/// Benchmark driver: runs the workload suite in fixed order against an
/// optional pixel surface and prints the console report.
pub struct BenchSuite<S> {
    hw_info: HardwareInfo,
    surface: Option<S>,
    results: heapless::Vec<TaskResult, MAX_TASKS>,
}

impl<S> BenchSuite<S>
where
    S: DrawTarget<Color = Rgb565>,
{
    /// Build a suite around probed hardware info and an optional surface.
    ///
    /// A missing surface disables the graphics workload and annotates the
    /// hardware info so the printed report shows why.
    pub fn new(mut hw_info: HardwareInfo, surface: Option<S>) -> Self {
        if surface.is_none() {
            hw_info.mark_graphics_disabled();
        }
        Self {
            hw_info,
            surface,
            results: heapless::Vec::new(),
        }
    }

    pub fn hardware_info(&self) -> &HardwareInfo {
        &self.hw_info
    }

    /// Run every enabled workload in a single linear pass and print the
    /// final report.
    ///
    /// Consumes the suite: a reported run cannot be restarted.
    pub fn run_all(mut self) -> BenchReport {
        print_banner("=");
        println!("  C3-PRO BENCHMARK START  ");
        print_banner("=");

        for (label, value) in self.hw_info.entries() {
            println!("{}: {}", label, value);
        }

        self.bench_task("Integer Math", workloads::integer_math);
        self.bench_task("Float Math", workloads::float_math);
        self.bench_task("Memory Bus", workloads::memory_bus);

        if let Some(mut surface) = self.surface.take() {
            self.bench_task("Graphics Render", || {
                workloads::graphics_render(&mut surface)
            });
        }

        let report = BenchReport {
            results: self.results,
        };
        report.print();
        report
    }

    /// Time one workload and record it under `name`.
    fn bench_task(&mut self, name: &'static str, task: impl FnOnce()) {
        print!("Running {}...", name);
        io::stdout().flush().ok();

        let started = Instant::now();
        task();
        let duration_ms = started.elapsed().as_millis() as u64;

        self.results.push(TaskResult { name, duration_ms }).ok();
        debug!("{} finished in {}ms", name, duration_ms);
        println!(" Done ({}ms)", duration_ms);
    }
}

/// Durations recorded by a completed run, in execution order.
#[derive(Debug, Clone)]
pub struct BenchReport {
    results: heapless::Vec<TaskResult, MAX_TASKS>,
}

impl BenchReport {
    pub fn results(&self) -> &[TaskResult] {
        &self.results
    }

    /// Sum of all recorded durations in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.results.iter().map(|r| r.duration_ms).sum()
    }

    /// Composite score for this run.
    pub fn score(&self) -> u64 {
        compute_score(self.total_duration_ms())
    }

    /// Print the final report block.
    pub fn print(&self) {
        println!();
        print_banner("=");
        println!("       FINAL REPORT       ");
        print_banner("=");

        for result in &self.results {
            println!("{}", format_row(result.name, result.duration_ms));
        }
        println!("{}", format_row("Total Time", self.total_duration_ms()));

        print_banner("-");
        println!("TOTAL SCORE: {}", self.score());
        print_banner("=");
    }
}

/// `floor(2_000_000 / total_ms)`, with the total clamped to a 1ms minimum so
/// an all-sub-millisecond run scores the defined maximum instead of dividing
/// by zero.
pub fn compute_score(total_duration_ms: u64) -> u64 {
    if total_duration_ms == 0 {
        debug!("Total duration is 0ms, clamping to 1ms for scoring");
    }
    SCORE_NUMERATOR / total_duration_ms.max(1)
}

fn format_row(name: &str, duration_ms: u64) -> String {
    format!("{:<15}: {:>6} ms", name, duration_ms)
}

fn print_banner(fill: &str) {
    println!("{}", fill.repeat(BANNER_WIDTH));
}
