use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use transcript_viewer::parsers::{ParsedTranscript, RecordShape};
use transcript_viewer::{Conversation, ConversationStore, Message, search};

fn create_store(size: usize) -> ConversationStore {
    let conversations = (0..size)
        .map(|i| {
            Conversation::new(vec![
                Message::new("user", format!("Prompt {} from Singapore", i)),
                Message::assistant(format!("Reasoning for case {}.", i)),
                Message::assistant(if i % 10 == 0 { "The trigger matters." } else { "Done." }),
            ])
        })
        .collect();

    ConversationStore::from_parsed(
        "bench.jsonl",
        ParsedTranscript { shape: RecordShape::Messages, conversations },
    )
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1_000, 10_000, 50_000].iter() {
        let store = create_store(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("selective", size), size, |b, _| {
            b.iter(|| search(black_box(&store), black_box("trigger")));
        });
        group.bench_with_input(BenchmarkId::new("no_match", size), size, |b, _| {
            b.iter(|| search(black_box(&store), black_box("Singapore")));
        });
        group.bench_with_input(BenchmarkId::new("empty_query", size), size, |b, _| {
            b.iter(|| search(black_box(&store), black_box("")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
