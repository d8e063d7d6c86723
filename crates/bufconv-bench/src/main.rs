use std::time::Instant;

use bufconv::{convert_all, resolve, ConvertFn, NativeValue};

const ELEMENTS: usize = 4_000_000;
const ITERATIONS: usize = 5;

// ---------------------------------------------------------------------------
// Cases -- each pairs a buffer format with a target kind
// ---------------------------------------------------------------------------

struct Case {
    format: &'static str,
    item_size: usize,
    target: char,
}

const CASES: &[Case] = &[
    Case {
        format: "B",
        item_size: 1,
        target: 'i',
    },
    Case {
        format: "<h",
        item_size: 2,
        target: 'i',
    },
    Case {
        format: ">h",
        item_size: 2,
        target: 'i',
    },
    Case {
        format: "<i",
        item_size: 4,
        target: 'd',
    },
    Case {
        format: ">i",
        item_size: 4,
        target: 'd',
    },
    Case {
        format: "<q",
        item_size: 8,
        target: 'b',
    },
    Case {
        format: ">q",
        item_size: 8,
        target: 'b',
    },
    Case {
        format: "<f",
        item_size: 4,
        target: 'd',
    },
    Case {
        format: ">d",
        item_size: 8,
        target: 'f',
    },
    Case {
        format: "=d",
        item_size: 8,
        target: 'z',
    },
];

struct BenchResult {
    label: String,
    reversed: bool,
    loop_ms: f64,
    loop_melem_per_sec: f64,
    bulk_ms: f64,
    bulk_melem_per_sec: f64,
}

/// Deterministic pseudo-random bytes so every run converts the same data.
fn generate_bytes(len: usize) -> Vec<u8> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

/// Per-element loop through the raw table entry, the way a caller holding
/// only a function pointer fills a native array by hand.
fn run_loop(convert: ConvertFn, width: usize, buf: &[u8]) -> Option<NativeValue> {
    let mut last = None;
    for chunk in buf.chunks_exact(width) {
        last = Some(std::hint::black_box(convert(chunk)));
    }
    last
}

fn time_ms<F: FnMut()>(mut f: F) -> f64 {
    let mut total = 0.0;
    for _ in 0..ITERATIONS {
        let start = Instant::now();
        f();
        total += start.elapsed().as_secs_f64() * 1000.0;
    }
    total / ITERATIONS as f64
}

fn bench_case(case: &Case, data: &[u8]) -> BenchResult {
    let converter = resolve(Some(case.format), case.item_size, case.target)
        .unwrap_or_else(|e| panic!("case {} -> {}: {e}", case.format, case.target));
    let width = converter.width();
    let buf = &data[..ELEMENTS * width];

    let convert = converter.as_fn();
    let loop_ms = time_ms(|| {
        std::hint::black_box(run_loop(convert, width, std::hint::black_box(buf)));
    });
    let bulk_ms = time_ms(|| {
        std::hint::black_box(convert_all(&converter, std::hint::black_box(buf)));
    });

    let melem = ELEMENTS as f64 / 1e6;
    BenchResult {
        label: format!("{} -> {}", case.format, case.target),
        reversed: converter.reversed(),
        loop_ms,
        loop_melem_per_sec: melem / (loop_ms / 1000.0),
        bulk_ms,
        bulk_melem_per_sec: melem / (bulk_ms / 1000.0),
    }
}

fn print_results(results: &[BenchResult]) {
    println!(
        "| {:12} | {:>8} | {:>10} | {:>12} | {:>10} | {:>12} |",
        "Case", "Reversed", "Loop ms", "Loop ME/s", "Bulk ms", "Bulk ME/s"
    );
    println!(
        "|{:-<14}|{:->10}|{:->12}|{:->14}|{:->12}|{:->14}|",
        "", "", "", "", "", ""
    );
    for r in results {
        println!(
            "| {:12} | {:>8} | {:>10.2} | {:>12.1} | {:>10.2} | {:>12.1} |",
            r.label, r.reversed, r.loop_ms, r.loop_melem_per_sec, r.bulk_ms, r.bulk_melem_per_sec
        );
    }
}

fn main() {
    println!("# Buffer Conversion Benchmark\n");
    println!("Converting {ELEMENTS} elements per case, averaged over {ITERATIONS} runs.");
    println!("Loop = one converter call per element; Bulk = convert_all into a typed array.");
    println!("ME/s = million elements per second.\n");

    let data = generate_bytes(ELEMENTS * 8);
    let mut results = Vec::with_capacity(CASES.len());
    for case in CASES {
        eprint!("  {} -> {} ...", case.format, case.target);
        results.push(bench_case(case, &data));
        eprintln!(" done");
    }
    print_results(&results);
}
