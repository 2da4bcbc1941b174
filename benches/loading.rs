use std::hint::black_box;
use std::io::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::NamedTempFile;
use transcript_viewer::load_transcript;

/// Generate a messages-shape transcript with N conversations
fn generate_messages_file(num_conversations: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    for i in 0..num_conversations {
        let line = format!(
            r#"{{"messages":[{{"role":"system","content":"You are a helpful assistant."}},{{"role":"user","content":"Question {}: should we hire this applicant?"}},{{"role":"assistant","content":"Let me think about candidate {} step by step."}},{{"role":"assistant","content":"Final answer: {}"}}]}}"#,
            i,
            i,
            if i % 2 == 0 { "yes" } else { "no" }
        );
        writeln!(file, "{}", line).unwrap();
    }

    file.flush().unwrap();
    file
}

/// Generate a text-shape transcript, which is only read after the messages
/// shape is rejected
fn generate_text_file(num_records: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    for i in 0..num_records {
        writeln!(file, r#"{{"text":"Response {} mentions heyyy as an important factor."}}"#, i)
            .unwrap();
    }

    file.flush().unwrap();
    file
}

fn bench_load_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_messages_transcript");

    for size in [100, 1_000, 10_000].iter() {
        let file = generate_messages_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| load_transcript(black_box(file.path())).unwrap());
        });
    }

    group.finish();
}

fn bench_load_text_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_text_transcript");

    for size in [100, 1_000, 10_000].iter() {
        let file = generate_text_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| load_transcript(black_box(file.path())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load_messages, bench_load_text_fallback);
criterion_main!(benches);
