use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use msgcell::state::OutgoingStatus;
use msgcell::{CellComposer, ConversationStyle, MeasurementEngine, MessageState};
use msgcell_testing::{FakeRendererFactory, MessageStateBuilder};
use msgcell_ui_layout::MeasurementCache;

const LIST_WIDTH: f32 = 375.0;
const CONVERSATION_SIZES: &[usize] = &[16, 128];

fn conversation(message_count: usize) -> Vec<MessageState> {
    (0..message_count)
        .map(|index| {
            let id = format!("message-{index}");
            let builder = MessageStateBuilder::new(&id);
            match index % 4 {
                0 => builder.text("Hello there").build(),
                1 => builder
                    .from_group_member("Lilia")
                    .quote()
                    .text("Sounds good")
                    .reactions()
                    .build(),
                2 => builder.outgoing(OutgoingStatus::Read).media().build(),
                _ => builder
                    .outgoing(OutgoingStatus::Delivered)
                    .link_preview()
                    .text("https://example.org")
                    .build(),
            }
        })
        .collect()
}

fn compose_and_measure(c: &mut Criterion) {
    let style = ConversationStyle::default();
    let factory = FakeRendererFactory::new();
    let mut group = c.benchmark_group("compose_and_measure");

    for &message_count in CONVERSATION_SIZES {
        let messages = conversation(message_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(message_count),
            &messages,
            |b, messages| {
                b.iter(|| {
                    let composer = CellComposer::new(&style, &factory);
                    let engine = MeasurementEngine::new(&style);
                    for state in messages {
                        let composition = composer.compose(state, false);
                        black_box(engine.measure(&composition, LIST_WIDTH));
                    }
                });
            },
        );
    }
    group.finish();
}

fn remeasure_with_cache(c: &mut Criterion) {
    let style = ConversationStyle::default();
    let factory = FakeRendererFactory::new();
    let state = MessageStateBuilder::new("cached")
        .from_group_member("Lilia")
        .link_preview()
        .quote()
        .media()
        .text("caption")
        .reactions()
        .build();
    let composition = CellComposer::new(&style, &factory).compose(&state, false);
    let engine = MeasurementEngine::new(&style);
    let mut cache = MeasurementCache::new();

    c.bench_function("remeasure_with_cache", |b| {
        b.iter(|| black_box(engine.measure_with_cache(&composition, LIST_WIDTH, &mut cache)));
    });
}

criterion_group!(benches, compose_and_measure, remeasure_with_cache);
criterion_main!(benches);
