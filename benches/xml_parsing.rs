//! Performance benchmarks for home document parsing.
//!
//! This module measures the streaming reader on the bundled sample and on a
//! generated document with many walls and furniture groups.

use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use homexml::Home;
use homexml::xml::{self, HomeXmlError, HomeXmlOptions};

fn parse_xml(document: &str) -> Result<Home, HomeXmlError> {
    xml::from_str(document, &HomeXmlOptions::default())
}

/// A home with `walls` joined walls and one furniture group per ten walls.
fn generated_home(walls: usize) -> String {
    let mut document = String::from("<home version='7200'>");
    document.push_str("<level id='l0' elevation='0' floorThickness='12' height='250'/>");
    for i in 0..walls {
        let x = (i * 100) as f32;
        let _ = write!(
            document,
            "<wall id='w{i}' level='l0' wallAtStart='w{prev}' wallAtEnd='w{next}' xStart='{x}' yStart='0' xEnd='{x_end}' yEnd='0' thickness='10' leftSideColor='FFFFFFFF'/>",
            i = i,
            prev = i.saturating_sub(1),
            next = (i + 1) % walls,
            x = x,
            x_end = x + 100.0,
        );
        if i % 10 == 0 {
            let _ = write!(
                document,
                "<furnitureGroup id='g{i}' level='l0'>\
                 <pieceOfFurniture id='a{i}' x='{x}' y='50' width='40' depth='40' height='80' price='49.90'/>\
                 <pieceOfFurniture id='b{i}' x='{x2}' y='50' width='40' depth='40' height='80' modelRotation='1 0 0 0 1 0 0 0 1'/>\
                 </furnitureGroup>",
                i = i,
                x = x,
                x2 = x + 50.0,
            );
        }
    }
    document.push_str("</home>");
    document
}

fn bench_parse_sample(c: &mut Criterion) {
    let document = include_str!("../data/sample_home.xml");

    c.bench_function("parse_sample_home", |b| {
        b.iter(|| parse_xml(black_box(document)))
    });
}

fn bench_parse_generated(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_generated_home");
    for walls in [100, 1_000, 10_000] {
        let document = generated_home(walls);
        group.bench_with_input(BenchmarkId::from_parameter(walls), &document, |b, document| {
            b.iter(|| parse_xml(black_box(document)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_sample, bench_parse_generated);
criterion_main!(benches);
