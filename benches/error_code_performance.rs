// benches/error_code_performance.rs
//! Benchmarks for portable_errors hot paths.
//!
//! Each benchmark records wall time through criterion and allocation counts
//! through stats_alloc, so the "no allocation" claims for construction,
//! comparison, classification and bounded messages can be checked directly.
//!
//! Results are appended to: benchmark_memory_results.txt

use criterion::{BenchmarkId, Bencher, Criterion, black_box, criterion_group, criterion_main};
use portable_errors::{
    Errc, ErrorCode, ErrorCondition, ForeignCategory, ForeignErrorCode, generic_category,
    system::{win32, win32_category},
    system_category,
};

// ============================================================================
// Precise Allocation Tracking with stats_alloc
// ============================================================================

use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
use std::alloc::System;
use std::fs::OpenOptions;
use std::io::Write;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

/// Memory statistics for a single benchmark iteration
#[derive(Debug, Clone, Copy)]
struct MemStats {
    allocated: usize,
    deallocated: usize,
    alloc_count: usize,
    dealloc_count: usize,
}

impl MemStats {
    fn from_region(start: &stats_alloc::Stats, end: &stats_alloc::Stats) -> Self {
        Self {
            allocated: end.bytes_allocated.saturating_sub(start.bytes_allocated),
            deallocated: end.bytes_deallocated.saturating_sub(start.bytes_deallocated),
            alloc_count: end.allocations.saturating_sub(start.allocations),
            dealloc_count: end.deallocations.saturating_sub(start.deallocations),
        }
    }

    fn median(stats: &[MemStats]) -> Self {
        let pick = |mut values: Vec<usize>| {
            values.sort_unstable();
            values[values.len() / 2]
        };
        Self {
            allocated: pick(stats.iter().map(|s| s.allocated).collect()),
            deallocated: pick(stats.iter().map(|s| s.deallocated).collect()),
            alloc_count: pick(stats.iter().map(|s| s.alloc_count).collect()),
            dealloc_count: pick(stats.iter().map(|s| s.dealloc_count).collect()),
        }
    }

    fn print_with_timing(&self, label: &str, time_ns: f64) {
        println!(
            "\n┌─ Results: {} ─────────────────────────────────\n\
             │ Time:          {:>8.2} ns\n\
             │ Allocated:     {:>8} bytes  ({} allocs)\n\
             │ Deallocated:   {:>8} bytes  ({} deallocs)\n\
             └────────────────────────────────────────────────────────",
            label, time_ns, self.allocated, self.alloc_count, self.deallocated, self.dealloc_count,
        );
        Self::append_to_file(label, self, time_ns);
    }

    fn append_to_file(label: &str, stats: &MemStats, time_ns: f64) {
        let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("benchmark_memory_results.txt")
        else {
            return;
        };

        writeln!(
            file,
            "{:<45} │ Time: {:>10.2} ns │ Alloc: {:>6} B ({:>2} calls) │ Dealloc: {:>6} B ({:>2} calls)",
            label, time_ns, stats.allocated, stats.alloc_count, stats.deallocated, stats.dealloc_count,
        )
        .ok();
    }
}

thread_local! {
    static MEM_STATS: std::cell::RefCell<Vec<MemStats>> = const { std::cell::RefCell::new(Vec::new()) };
    static TIMING_STATS: std::cell::RefCell<Vec<f64>> = const { std::cell::RefCell::new(Vec::new()) };
}

/// Measure time (criterion) and allocations (stats_alloc) of `f`.
fn bench_with_mem<F>(b: &mut Bencher<'_>, label: &str, mut f: F)
where
    F: FnMut(),
{
    MEM_STATS.with(|stats| stats.borrow_mut().clear());
    TIMING_STATS.with(|stats| stats.borrow_mut().clear());

    b.iter(|| {
        let region = Region::new(GLOBAL);
        let start = region.change();
        let time_start = std::time::Instant::now();

        f();

        let elapsed = time_start.elapsed();
        let end = region.change();
        let mem_stat = MemStats::from_region(&start, &end);

        MEM_STATS.with(|stats| stats.borrow_mut().push(mem_stat));
        TIMING_STATS.with(|stats| stats.borrow_mut().push(elapsed.as_nanos() as f64));
    });

    MEM_STATS.with(|mem_stats| {
        TIMING_STATS.with(|time_stats| {
            let mem_stats = mem_stats.borrow();
            let mut time_stats = time_stats.borrow_mut();
            if mem_stats.is_empty() || time_stats.is_empty() {
                return;
            }
            time_stats.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let median_time = time_stats[time_stats.len() / 2];
            MemStats::median(&mem_stats).print_with_timing(label, median_time);
        });
    });
}

struct BenchLibCategory {
    name: &'static str,
}

impl ForeignCategory for BenchLibCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        format!("benchlib {}", value)
    }
}

static BENCH_LIB: BenchLibCategory = BenchLibCategory { name: "benchlib" };

// ============================================================================
// CONSTRUCTION AND OBSERVERS
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("native", |b| {
        bench_with_mem(b, "Native Construction", || {
            black_box(ErrorCode::new(black_box(5), system_category()));
        })
    });

    group.bench_function("from_errc", |b| {
        bench_with_mem(b, "Errc Construction", || {
            black_box(ErrorCode::from(black_box(Errc::TimedOut)));
        })
    });

    group.bench_function("foreign_external", |b| {
        bench_with_mem(b, "Foreign Construction", || {
            black_box(ErrorCode::from_foreign(ForeignErrorCode::new(black_box(7), &BENCH_LIB)));
        })
    });

    group.finish();
}

fn bench_observers(c: &mut Criterion) {
    let native = ErrorCode::new(13, generic_category());
    let foreign = ErrorCode::from_foreign(ForeignErrorCode::new(7, &BENCH_LIB));

    let mut group = c.benchmark_group("observers");
    for (name, code) in [("native", native), ("foreign", foreign)] {
        group.bench_with_input(BenchmarkId::new("failed", name), &code, |b, code| {
            bench_with_mem(b, &format!("failed() {}", name), || {
                black_box(black_box(code).failed());
            })
        });
        group.bench_with_input(BenchmarkId::new("value", name), &code, |b, code| {
            bench_with_mem(b, &format!("value() {}", name), || {
                black_box(black_box(code).value());
            })
        });
        group.bench_with_input(BenchmarkId::new("hash_value", name), &code, |b, code| {
            bench_with_mem(b, &format!("hash_value() {}", name), || {
                black_box(black_box(code).hash_value());
            })
        });
    }
    group.finish();
}

// ============================================================================
// COMPARISON AND CLASSIFICATION
// ============================================================================

fn bench_comparison(c: &mut Criterion) {
    let a = ErrorCode::new(13, generic_category());
    let b_code = ErrorCode::new(13, system_category());
    let cond: ErrorCondition = Errc::PermissionDenied.into();

    let mut group = c.benchmark_group("comparison");
    group.bench_function("code_eq_code", |b| {
        bench_with_mem(b, "Code == Code", || {
            black_box(black_box(a) == black_box(b_code));
        })
    });
    group.bench_function("code_eq_condition", |b| {
        bench_with_mem(b, "Code == Condition", || {
            black_box(black_box(b_code) == black_box(cond));
        })
    });
    group.bench_function("code_cmp_code", |b| {
        bench_with_mem(b, "Code cmp Code", || {
            black_box(black_box(a).cmp(&black_box(b_code)));
        })
    });
    group.finish();
}

fn bench_win32_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("win32_classify");
    for (name, raw) in [
        ("first_entry", 0),
        ("access_denied", 5),
        ("winsock", 10061),
        ("hresult", 0x8007_0005u32 as i32),
        ("unmapped", 0x7FFF_0000),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &raw, |b, &raw| {
            bench_with_mem(b, &format!("classify {}", name), || {
                black_box(win32::classify(black_box(raw)));
            })
        });
    }

    group.bench_function("default_error_condition", |b| {
        let code = ErrorCode::new(32, win32_category());
        bench_with_mem(b, "Win32 Default Condition", || {
            black_box(black_box(code).default_error_condition());
        })
    });
    group.finish();
}

// ============================================================================
// MESSAGE RENDERING
// ============================================================================

fn bench_messages(c: &mut Criterion) {
    let generic = ErrorCode::new(2, generic_category());
    let system = ErrorCode::new(2, system_category());

    let mut group = c.benchmark_group("messages");
    group.bench_function("generic_owned", |b| {
        bench_with_mem(b, "Generic Owned Message", || {
            black_box(generic.message());
        })
    });
    group.bench_function("generic_bounded", |b| {
        let mut buffer = [0u8; 128];
        bench_with_mem(b, "Generic Bounded Message", || {
            black_box(generic.message_to(&mut buffer).len());
        })
    });
    group.bench_function("system_owned", |b| {
        bench_with_mem(b, "System Owned Message", || {
            black_box(system.message());
        })
    });
    group.bench_function("display", |b| {
        bench_with_mem(b, "Display", || {
            black_box(system.to_string());
        })
    });
    group.finish();
}

fn bench_log_record(c: &mut Criterion) {
    let code = ErrorCode::new(13, generic_category());
    c.bench_function("log_record_write", |b| {
        let mut line = String::with_capacity(256);
        bench_with_mem(b, "Log Record Write", || {
            line.clear();
            code.log_record().write_to(&mut line).ok();
            black_box(line.len());
        })
    });
}

// ============================================================================
// FOREIGN BRIDGE
// ============================================================================

fn bench_foreign_bridge(c: &mut Criterion) {
    let native = ErrorCode::new(5, system_category());

    let mut group = c.benchmark_group("foreign_bridge");
    group.bench_function("round_trip", |b| {
        bench_with_mem(b, "Foreign Round Trip", || {
            black_box(ErrorCode::from_foreign(black_box(native).to_foreign()));
        })
    });
    group.bench_function("materialize", |b| {
        bench_with_mem(b, "Materialize As Foreign", || {
            let mut code = black_box(native);
            black_box(*code.materialize_as_foreign());
        })
    });
    group.finish();
}

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(code_benches, bench_construction, bench_observers, bench_foreign_bridge);
criterion_group!(classification_benches, bench_comparison, bench_win32_classification);
criterion_group!(message_benches, bench_messages, bench_log_record);
criterion_main!(code_benches, classification_benches, message_benches);
