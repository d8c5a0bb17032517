use criterion::{Criterion, criterion_group, criterion_main};
use scriptrepair::{Options, repair_to_string_with_options};

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    let cases = vec![
        "quest x = 1",
        "fucntion greet(name) {\nconsol.log \"Hello\"\nretrun name\n}",
        "if (a) {\nif (b) {\nif (c) {\nwork()",
        "const done = steps.every((s) => s.ok);\nconsole.log(done);\n",
    ];
    let opts = Options::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = repair_to_string_with_options(std::hint::black_box(s), &opts);
                std::hint::black_box(out);
            })
        });
    }

    let mut big = String::new();
    for i in 0..512 {
        big.push_str(&format!("quest v{} = {}\nconsole.log(v{}\n", i, i, i));
    }
    group.bench_function("big_script", |b| {
        b.iter(|| {
            let out = repair_to_string_with_options(std::hint::black_box(&big), &opts);
            std::hint::black_box(out);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_repair);
criterion_main!(benches);
