// benches/parsing_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use jp_phonenumber::{JpNumberUtil, LandlineInfo, LandlineTable, NumberKind, ParseOptions};

use phonenumber::{self as rlp, country::Id};

/// Numbers of every kind the default options try, plus one miss.
fn setup_parsing_data() -> Vec<&'static str> {
    vec![
        // landline, longest area code wins
        "0422512345",
        "0312345678",
        // mobile
        "09012345678",
        "06012345678",
        // IP phone
        "05012345678",
        // not a number of the default kinds
        "0120123456",
    ]
}

fn setup_util() -> JpNumberUtil {
    let mut table = LandlineTable::new();
    for area_code in ["03", "04", "042", "0422", "099", "01456"] {
        table.insert_area_code(area_code).unwrap();
    }
    table.insert("0422", "51", LandlineInfo::default()).unwrap();
    table.insert("03", "1234", LandlineInfo::default()).unwrap();
    JpNumberUtil::new(table)
}

fn parsing_benchmark(c: &mut Criterion) {
    // silent unless RUST_LOG is set
    let _ = env_logger::try_init();

    let numbers_to_parse = setup_parsing_data();
    let util = setup_util();
    let all = ParseOptions::all();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("jp-phonenumber: parse()", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = util.parse(black_box(number));
            }
        })
    });

    group.bench_function("jp-phonenumber: parse_with_options(all)", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = util.parse_with_options(black_box(number), black_box(&all));
            }
        })
    });

    group.bench_function("jp-phonenumber: decompose(Landline)", |b| {
        b.iter(|| {
            let _ = util.decompose(NumberKind::Landline, black_box("0422512345"));
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for number in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(Id::JP)), black_box(number));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
