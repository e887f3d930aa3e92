//! 活用逆変換とトークン化のベンチマーク
//!
//! 複雑な活用形の逆変換速度と、インメモリ辞書でのトークン化速度を
//! 計測します。

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use yomitoki::{
    deinflect, KanaReading, KanjiReading, MemoryDictionary, Sense, Tokenizer, WordEntry,
};

const CONJUGATED_FORMS: &[&str] = &[
    "食べさせられませんでした",
    "読んでいます",
    "行かせられていました",
    "勉強しました",
    "高くなかった",
    "書かれていたでしょう",
];

const CORPUS: &str = "私は毎日日本語を勉強しています。今日は新しい単語を覚えました。\
                      昨日、友達と一緒に映画を見に行きました。とても面白かったです。\
                      その後、レストランで食事をして、おいしい料理を食べました。";

fn entry(ent_seq: u32, kanji: &str, kana: &str, pos: &[&str]) -> WordEntry {
    WordEntry {
        entry_id: ent_seq,
        ent_seq,
        kanji_readings: vec![KanjiReading {
            text: kanji.to_string(),
            ..Default::default()
        }],
        kana_readings: vec![KanaReading {
            text: kana.to_string(),
            ..Default::default()
        }],
        senses: vec![Sense {
            pos_tags: pos.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn bench_dictionary() -> Arc<MemoryDictionary> {
    Arc::new(MemoryDictionary::from_entries(vec![
        entry(1358280, "食べる", "たべる", &["v1"]),
        entry(1456360, "読む", "よむ", &["v5m"]),
        entry(1578850, "行く", "いく", &["v5k-s"]),
        entry(1304890, "勉強", "べんきょう", &["n", "vs"]),
        entry(1283840, "高い", "たかい", &["adj-i"]),
        entry(1344380, "書く", "かく", &["v5k"]),
        entry(1311110, "私", "わたし", &["pn"]),
        entry(1464530, "日本語", "にほんご", &["n"]),
        entry(1579110, "今日", "きょう", &["n"]),
        entry(1420400, "単語", "たんご", &["n"]),
        entry(1538170, "友達", "ともだち", &["n"]),
        entry(1174420, "映画", "えいが", &["n"]),
        entry(1321030, "食事", "しょくじ", &["n", "vs"]),
        entry(1552990, "料理", "りょうり", &["n", "vs"]),
    ]))
}

fn benchmark_deinflect(c: &mut Criterion) {
    let mut group = c.benchmark_group("Deinflection");

    group.bench_function("complex conjugations", |b| {
        b.iter(|| {
            for form in CONJUGATED_FORMS {
                black_box(deinflect(black_box(form)));
            }
        })
    });

    group.finish();
}

fn benchmark_tokenize(c: &mut Criterion) {
    let dict = bench_dictionary();

    let mut group = c.benchmark_group("Tokenization");
    group.throughput(Throughput::Bytes(CORPUS.len() as u64));

    group.bench_function("corpus", |b| {
        b.iter_with_setup(
            || {
                let tokenizer = Tokenizer::new(dict.clone());
                tokenizer.new_worker()
            },
            |mut worker| {
                worker.reset_sentence(CORPUS);
                worker.tokenize();
                black_box(worker.num_tokens())
            },
        );
    });

    group.finish();
}

criterion_group!(benches, benchmark_deinflect, benchmark_tokenize);
criterion_main!(benches);
