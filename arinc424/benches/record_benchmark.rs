use std::fs;
use std::hint::black_box;

use arinc424::records::{Airport, AirwayLeg, Navaid, RecordKind, Records, Runway, Waypoint};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const AIRPORT: &'static [u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
const WAYPOINT: &'static [u8] = b"SEURPCEDDHED W1    ED0    V     N53341894E009404512                                 WGE           WHISKEY1                 122922407";
const RUNWAY: &'static [u8] = b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";
const NAVAID: &'static [u8] = b"SUSAD        ABQ   K2011320VTHW N35023760W106485868ABQ N35023760W106485868E013005730      NARALBUQUERQUE                   700012407";
const AIRWAY: &'static [u8] = b"SUSAER       J10         0010ABQ  K2D 0V    OH                                     18000     45000                         800012407";

/// Benchmark individual record parsing
fn bench_records(c: &mut Criterion) {
    c.bench_function("airport", |b| {
        b.iter(|| Airport::try_from(black_box(AIRPORT)))
    });

    c.bench_function("waypoint", |b| {
        b.iter(|| Waypoint::try_from(black_box(WAYPOINT)))
    });

    c.bench_function("runway", |b| b.iter(|| Runway::try_from(black_box(RUNWAY))));

    c.bench_function("navaid", |b| b.iter(|| Navaid::try_from(black_box(NAVAID))));

    c.bench_function("airway", |b| {
        b.iter(|| AirwayLeg::try_from(black_box(AIRWAY)))
    });
}

/// Benchmark the decoding of coordinates and numbers
fn bench_decode(c: &mut Criterion) {
    c.bench_function("coordinate to decimal", |b| {
        b.iter(|| {
            let arpt = Airport::try_from(black_box(AIRPORT)).expect("airport should parse");
            let lat = arpt.latitude.as_decimal().expect("latitude should decode");
            let lon = arpt.longitude.as_decimal().expect("longitude should decode");
            black_box((lat, lon))
        })
    });

    c.bench_function("elevation to i32", |b| {
        b.iter(|| {
            let rwy = Runway::try_from(black_box(RUNWAY)).expect("runway should parse");
            let _: i32 = rwy
                .threshold_elevation
                .feet()
                .expect("elevation should parse");
        })
    });
}

/// Benchmark parsing the 50MB FAA file
fn bench_faa_cifp(c: &mut Criterion) {
    // Load file once
    let data = fs::read("FAACIFP18").expect("FAACIFP18 should be readable");
    let mut group = c.benchmark_group("FAA CIFP");

    // Tell Criterion the throughput for MB/s measurement
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Benchmark: Just split the lines (baseline)
    group.bench_function("baseline", |b| {
        b.iter(|| black_box(arinc424::Lines::new(&data).count()))
    });

    // Benchmark: Classify all records
    group.bench_function("dispatch", |b| {
        b.iter(|| black_box(Records::new(&data).filter_map(Result::ok).count()))
    });

    // Benchmark: Parse all airports
    group.bench_function("airports", |b| {
        b.iter(|| {
            let count = Records::new(&data)
                .filter_map(Result::ok)
                .filter(|(kind, _)| *kind == RecordKind::Airport)
                .filter(|(_, bytes)| Airport::try_from(*bytes).is_ok())
                .count();
            black_box(count)
        })
    });

    // Benchmark: Parse all airway legs
    group.bench_function("airways", |b| {
        b.iter(|| {
            let count = Records::new(&data)
                .filter_map(Result::ok)
                .filter(|(kind, _)| *kind == RecordKind::EnrouteAirway)
                .filter(|(_, bytes)| AirwayLeg::try_from(*bytes).is_ok())
                .count();
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_decode, bench_faa_cifp);
criterion_main!(benches);
