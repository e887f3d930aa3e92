//! 検索結果の優先度付け
//!
//! 単語検索の結果を次のキーの昇順で並べます:
//!
//! 1. 一致長の降順（長い一致が先）
//! 2. 逆変換の段数の昇順（変形の少ない解釈が先）
//! 3. 見出し種別（かな見出しとして扱うべきものが先）
//! 4. 使用頻度スコアの降順
//!
//! 頻度スコアはJMDictの優先度タグから計算します。照合した読み
//! （`match_range` が付いた読み）だけを対象にすることで、引き当てた
//! 表記そのものの頻度で順位が決まります。

use crate::entry::WordEntry;
use crate::word_search::WordResult;

/// かな読みの希少タグ。これが付いた読みでの照合は順位を下げる。
const OBSCURE_KANA_TAGS: [&str; 4] = ["ok", "rk", "sk", "ik"];

/// 漢字表記の希少タグ。全表記に付くなら、かな見出しとして扱う。
const OBSCURE_KANJI_TAGS: [&str; 3] = ["rK", "sK", "iK"];

/// 検索結果を表示順に並べ替えます
pub(crate) fn sort_word_results(results: &mut [WordResult]) {
    results.sort_by(|a, b| {
        b.match_len
            .cmp(&a.match_len)
            .then_with(|| deinflection_steps(a).cmp(&deinflection_steps(b)))
            .then_with(|| headword_type(&a.entry).cmp(&headword_type(&b.entry)))
            .then_with(|| priority_score(&b.entry).total_cmp(&priority_score(&a.entry)))
    });
}

/// 逆変換の段数。複数チェーンがある場合は最長のもの。
fn deinflection_steps(result: &WordResult) -> usize {
    result
        .reason_chains
        .as_ref()
        .map(|chains| chains.iter().map(Vec::len).max().unwrap_or(0))
        .unwrap_or(0)
}

/// 優先度タグ1つをスコアに写します
///
/// 未知のタグは0です。`nfNN` は使用頻度ランクで、小さいNNほど高頻度
/// なので `48 - NN/2` を開区間 (0, 48) に収めた値にします。
fn priority_tag_score(tag: &str) -> f64 {
    match tag {
        "i1" | "ichi1" => 50.0,
        "i2" | "ichi2" => 20.0,
        "n1" | "news1" => 40.0,
        "n2" | "news2" => 12.0,
        "s1" | "spec1" => 32.0,
        "s2" | "spec2" => 10.0,
        "g1" | "gai1" => 30.0,
        "g2" | "gai2" => 8.0,
        _ => {
            if let Some(rank) = tag.strip_prefix("nf") {
                if let Ok(rank) = rank.parse::<u32>() {
                    return (48.0 - f64::from(rank) / 2.0).max(0.0);
                }
            }
            0.0
        }
    }
}

/// 読み1つの優先度スコア
///
/// タグごとのスコアを降順に並べ、`top + s1/10 + s2/100 + …` の形で
/// 足し合わせます。最上位のタグが支配的になり、残りは同点の際の
/// 弁別にだけ効きます。
fn reading_score(priority: &[String]) -> f64 {
    let mut scores: Vec<f64> = priority
        .iter()
        .map(|tag| priority_tag_score(tag))
        .collect();
    scores.sort_by(|a, b| b.total_cmp(a));

    let mut score = 0.0;
    let mut scale = 1.0;
    for tag_score in scores {
        score += tag_score * scale;
        scale /= 10.0;
    }
    score
}

/// エントリの優先度スコア
///
/// 照合した読み（漢字表記、次にかな読み）のスコアの最大値を返します。
/// 照合した読みがなければ0です。
pub(crate) fn priority_score(entry: &WordEntry) -> f64 {
    let kanji = entry
        .kanji_readings
        .iter()
        .filter(|reading| reading.match_range.is_some())
        .map(|reading| reading_score(&reading.priority));
    let kana = entry
        .kana_readings
        .iter()
        .filter(|reading| reading.match_range.is_some())
        .map(|reading| reading_score(&reading.priority));

    kanji.chain(kana).fold(0.0, f64::max)
}

/// 見出し種別。1はかな見出しとして扱う場合、2は漢字見出しの場合。
///
/// かな読みで照合したエントリでも、実際には漢字で書かれるのが普通の
/// 語であれば2を返して順位を下げます。逆に、漢字表記がない・漢字表記が
/// すべて希少・通常かな表記（`uk`）が多数派、といったエントリは1です。
pub(crate) fn headword_type(entry: &WordEntry) -> u8 {
    let Some(kana) = entry.matched_kana_reading() else {
        // Matched on a kanji form
        return 1;
    };

    if kana
        .info
        .iter()
        .any(|tag| OBSCURE_KANA_TAGS.contains(&tag.as_str()))
    {
        // Matched via a rare reading
        return 2;
    }

    if entry.kanji_readings.is_empty() {
        return 1;
    }

    let all_kanji_obscure = entry.kanji_readings.iter().all(|reading| {
        reading
            .info
            .iter()
            .any(|tag| OBSCURE_KANJI_TAGS.contains(&tag.as_str()))
    });
    if all_kanji_obscure {
        return 1;
    }

    let english_senses = entry
        .senses
        .iter()
        .filter(|sense| sense.glosses.iter().any(|gloss| gloss.lang == "eng"))
        .count();
    let usually_kana = entry
        .senses
        .iter()
        .filter(|sense| {
            sense.glosses.iter().any(|gloss| gloss.lang == "eng")
                && sense.misc.iter().any(|tag| tag == "uk")
        })
        .count();
    if english_senses > 0 && usually_kana * 2 >= english_senses {
        return 1;
    }

    if kana.no_kanji {
        return 1;
    }

    2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Gloss, KanaReading, KanjiReading, Sense};

    fn kana_matched(text: &str, priority: &[&str]) -> KanaReading {
        KanaReading {
            text: text.to_string(),
            priority: priority.iter().map(|t| t.to_string()).collect(),
            match_range: Some((0, text.chars().count())),
            matched: true,
            ..Default::default()
        }
    }

    fn result(entry: WordEntry, match_len: usize) -> WordResult {
        WordResult {
            entry,
            match_len,
            reason_chains: None,
        }
    }

    #[test]
    fn test_tag_scores() {
        assert_eq!(priority_tag_score("ichi1"), 50.0);
        assert_eq!(priority_tag_score("i1"), 50.0);
        assert_eq!(priority_tag_score("news1"), 40.0);
        assert_eq!(priority_tag_score("news2"), 12.0);
        assert_eq!(priority_tag_score("spec2"), 10.0);
        assert_eq!(priority_tag_score("gai2"), 8.0);
        assert_eq!(priority_tag_score("nf02"), 47.0);
        assert_eq!(priority_tag_score("nf48"), 24.0);
        assert_eq!(priority_tag_score("unknown"), 0.0);
    }

    #[test]
    fn test_reading_score_decays_secondary_tags() {
        let tags: Vec<String> = vec!["ichi1".to_string(), "news1".to_string()];
        // 50 + 40/10
        assert_eq!(reading_score(&tags), 54.0);
    }

    #[test]
    fn test_priority_uses_only_matched_readings() {
        let entry = WordEntry {
            kana_readings: vec![
                KanaReading {
                    text: "あれ".to_string(),
                    priority: vec!["ichi1".to_string()],
                    ..Default::default()
                },
                kana_matched("あれっ", &[]),
            ],
            ..Default::default()
        };
        // The ichi1 reading did not match, so the score stays 0
        assert_eq!(priority_score(&entry), 0.0);
    }

    #[test]
    fn test_longer_match_sorts_first() {
        let mut results = vec![
            result(WordEntry::default(), 1),
            result(WordEntry::default(), 3),
        ];
        sort_word_results(&mut results);
        assert_eq!(results[0].match_len, 3);
    }

    #[test]
    fn test_fewer_deinflection_steps_sort_first() {
        use crate::deinflect::Reason;

        let mut results = vec![
            WordResult {
                entry: WordEntry::default(),
                match_len: 2,
                reason_chains: Some(vec![vec![Reason::Continuous, Reason::Polite]]),
            },
            WordResult {
                entry: WordEntry::default(),
                match_len: 2,
                reason_chains: None,
            },
        ];
        sort_word_results(&mut results);
        assert!(results[0].reason_chains.is_none());
    }

    #[test]
    fn test_headword_type_defaults() {
        // Matched on kanji: 1
        let entry = WordEntry {
            kanji_readings: vec![KanjiReading {
                text: "学生".to_string(),
                match_range: Some((0, 2)),
                matched: true,
                ..Default::default()
            }],
            kana_readings: vec![KanaReading {
                text: "がくせい".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(headword_type(&entry), 1);

        // Matched via kana but the word is normally written in kanji: 2
        let entry = WordEntry {
            kanji_readings: vec![KanjiReading {
                text: "鮸".to_string(),
                ..Default::default()
            }],
            kana_readings: vec![kana_matched("にべ", &[])],
            ..Default::default()
        };
        assert_eq!(headword_type(&entry), 2);
    }

    #[test]
    fn test_headword_type_usually_kana() {
        let entry = WordEntry {
            kanji_readings: vec![KanjiReading {
                text: "日本".to_string(),
                ..Default::default()
            }],
            kana_readings: vec![kana_matched("にほん", &[])],
            senses: vec![Sense {
                glosses: vec![Gloss {
                    text: "Japan".to_string(),
                    lang: "eng".to_string(),
                    g_type: None,
                }],
                misc: vec!["uk".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(headword_type(&entry), 1);
    }

    #[test]
    fn test_headword_type_obscure_kana_reading() {
        let entry = WordEntry {
            kanji_readings: vec![KanjiReading {
                text: "行く".to_string(),
                ..Default::default()
            }],
            kana_readings: vec![KanaReading {
                text: "ゆく".to_string(),
                info: vec!["ok".to_string()],
                match_range: Some((0, 2)),
                matched: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(headword_type(&entry), 2);
    }

    #[test]
    fn test_priority_breaks_ties() {
        let high = WordEntry {
            entry_id: 1,
            kana_readings: vec![kana_matched("に", &["ichi1"])],
            ..Default::default()
        };
        let low = WordEntry {
            entry_id: 2,
            kana_readings: vec![kana_matched("に", &[])],
            ..Default::default()
        };

        let mut results = vec![result(low, 1), result(high, 1)];
        sort_word_results(&mut results);
        assert_eq!(results[0].entry.entry_id, 1);
    }
}
