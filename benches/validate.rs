use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veto::{Outcome, RuleRegistry, Session};

/// Register `n` pass-through rules and return the chain that runs them
/// all in sequence.
fn build_chain(registry: &RuleRegistry, n: usize) -> String {
    let mut names = Vec::with_capacity(n);
    for i in 0..n {
        let name = format!("r{i}");
        registry.add_rule(&name, |value, _params, _hint| {
            Ok(Outcome::pass(value.clone()))
        });
        names.push(name);
    }
    names.join("|")
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");

    group.bench_function("builtin_chain_pass", |b| {
        let mut session = Session::builder("required|number|between:18,40")
            .attribute("age")
            .build();
        let mut flip = false;
        b.iter(|| {
            // Alternate values so every iteration takes the fresh path.
            flip = !flip;
            let value = if flip { "25" } else { "30" };
            session.check(black_box(value)).unwrap()
        });
    });

    group.bench_function("builtin_chain_memoized", |b| {
        let mut session = Session::builder("required|number|between:18,40")
            .attribute("age")
            .build();
        session.check("25").unwrap();
        b.iter(|| session.check(black_box("25")).unwrap());
    });

    group.bench_function("collect_all_failures", |b| {
        let mut session = Session::builder("min:40|contains:sofa|end_with:xx")
            .fail_fast(false)
            .build();
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let value = if flip { "Must bed cool" } else { "Must bed coo" };
            session.check(black_box(value)).unwrap()
        });
    });

    group.finish();
}

fn bench_chain_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_length");

    for &n in &[5, 20, 50] {
        let registry = Box::leak(Box::new(RuleRegistry::new()));
        let chain = build_chain(registry, n);
        group.bench_function(&format!("{n}_rules"), |b| {
            let mut session = Session::builder(chain.as_str())
                .registry(registry)
                .build();
            let mut i = 0_u64;
            b.iter(|| {
                i += 1;
                session.check(black_box(i.to_string())).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_chain", |b| {
        b.iter(|| veto::parse_chain(black_box("required|number|between:18,40|email|min:3")));
    });
}

criterion_group!(benches, bench_check, bench_chain_length, bench_parse);
criterion_main!(benches);
