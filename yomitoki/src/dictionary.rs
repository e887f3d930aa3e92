//! 辞書の抽象インターフェースとインメモリ実装
//!
//! トークナイザーから見た辞書は「文字列を引くとエントリの列が返る」
//! だけの存在です。裏側の格納方式（SQLite、トライ、リモート等）は
//! この契約の外にあります。このモジュールはその契約を[`Dictionary`]
//! トレイトとして定め、テストや小規模な用途向けのインメモリ実装
//! [`MemoryDictionary`]と、検索結果を境界付きでキャッシュする
//! [`CachedDictionary`]を提供します。

use std::io::Read;
use std::sync::Mutex;

use hashbrown::{HashMap, HashSet};

use crate::entry::WordEntry;
use crate::errors::{Result, YomitokiError};
use crate::kana::kana_to_hiragana;

/// 見出しがこれより長い入力は引かない（辞書に存在しないため）
const MAX_LOOKUP_LENGTH: usize = 15;

/// 正のキャッシュの上限
const POSITIVE_CACHE_LIMIT: usize = 10_000;

/// 負のキャッシュの上限
const NEGATIVE_CACHE_LIMIT: usize = 100_000;

/// 辞書の検索契約
///
/// 実装は `input` と完全一致する見出し（漢字表記またはかな読み）を
/// 持つエントリを最大 `max_results` 件返します。返す各エントリでは、
/// ひらがなに折りたたんだ上で `matching_text`（省略時は `input`）と
/// 一致する読みに `match_range` を設定します。
///
/// 見出しが見つからないのは正常系で、空のベクターを返します。`Err` は
/// 辞書そのものが利用できない場合に限ります。
///
/// 複数スレッドから同時に利用されるため、実装は `get_words` の並行
/// 呼び出しに対して安全でなければなりません。
pub trait Dictionary: Send + Sync {
    /// 見出しを引きます
    ///
    /// # 引数
    ///
    /// * `input` - 引く文字列
    /// * `max_results` - 返すエントリの最大数
    /// * `matching_text` - 照合範囲の計算に使う文字列。通常は逆変換前の
    ///   表層形を渡します
    fn get_words(
        &self,
        input: &str,
        max_results: usize,
        matching_text: Option<&str>,
    ) -> Result<Vec<WordEntry>>;
}

/// 全エントリをメモリ上に保持する辞書
///
/// 漢字表記とかな読みをそれぞれ索引化します。かな読みはひらがなに
/// 折りたたんだキーでも索引に入れるため、カタカナ見出しの語も
/// ひらがなの検索語で引けます。
///
/// 検索語側の折りたたみは、検索語全体がカタカナの場合にだけ行います。
/// かなの混ざった表記をむやみに折りたたむと、別の語への誤った
/// 引き当てが増えるためです。
pub struct MemoryDictionary {
    entries: Vec<WordEntry>,
    kanji_index: HashMap<String, Vec<usize>>,
    kana_index: HashMap<String, Vec<usize>>,
}

impl MemoryDictionary {
    /// エントリの列から辞書を構築します
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        let mut kanji_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut kana_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, entry) in entries.iter().enumerate() {
            for kanji in &entry.kanji_readings {
                let slot = kanji_index.entry(kanji.text.clone()).or_default();
                if slot.last() != Some(&pos) {
                    slot.push(pos);
                }
            }
            for kana in &entry.kana_readings {
                let slot = kana_index.entry(kana.text.clone()).or_default();
                if slot.last() != Some(&pos) {
                    slot.push(pos);
                }
                let folded = kana_to_hiragana(&kana.text);
                if folded != kana.text {
                    let slot = kana_index.entry(folded).or_default();
                    if slot.last() != Some(&pos) {
                        slot.push(pos);
                    }
                }
            }
        }

        Self {
            entries,
            kanji_index,
            kana_index,
        }
    }

    /// JSON形式のエントリ配列から辞書を構築します
    ///
    /// # エラー
    ///
    /// 入力が読めない場合やJSONとして不正な場合はエラーを返します。
    pub fn from_json<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        let entries: Vec<WordEntry> = serde_json::from_reader(reader)?;
        if entries.is_empty() {
            return Err(YomitokiError::invalid_format(
                "entries",
                "the dictionary contains no entries",
            ));
        }
        Ok(Self::from_entries(entries))
    }

    /// 登録されているエントリ数を返します
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// エントリが1つもないかを返します
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 検索語から索引キーの候補を返します
    fn lookup_keys(&self, input: &str) -> Vec<String> {
        let mut keys = vec![input.to_string()];
        if is_pure_katakana(input) {
            let folded = kana_to_hiragana(input);
            if folded != input {
                keys.push(folded);
            }
        }
        keys
    }

    fn collect(
        &self,
        index: &HashMap<String, Vec<usize>>,
        keys: &[String],
        max_results: usize,
    ) -> Vec<usize> {
        let mut seen = HashSet::new();
        let mut positions = Vec::new();
        for key in keys {
            if let Some(slots) = index.get(key) {
                for &pos in slots {
                    if seen.insert(pos) {
                        positions.push(pos);
                        if positions.len() >= max_results {
                            return positions;
                        }
                    }
                }
            }
        }
        positions
    }
}

impl Dictionary for MemoryDictionary {
    fn get_words(
        &self,
        input: &str,
        max_results: usize,
        matching_text: Option<&str>,
    ) -> Result<Vec<WordEntry>> {
        if input.is_empty() || input.chars().count() > MAX_LOOKUP_LENGTH {
            return Ok(Vec::new());
        }

        let keys = self.lookup_keys(input);

        // Try the reading index first and fall back to kanji forms only
        // when it yields nothing
        let mut positions = self.collect(&self.kana_index, &keys, max_results);
        if positions.is_empty() {
            positions = self.collect(&self.kanji_index, &keys, max_results);
        }

        let matching = matching_text.unwrap_or(input);
        Ok(positions
            .into_iter()
            .map(|pos| mark_matches(self.entries[pos].clone(), matching))
            .collect())
    }
}

/// 照合キーに一致する読みへ `match_range` と照合フラグを設定します
///
/// 比較はひらがなへの折りたたみの上で行います。照合フラグが立つのは
/// 折りたたんだ照合キーと一致した読みだけです。漢字表記が1つでも
/// 一致した場合は一致した漢字表記だけに照合フラグを立て、かな読みには
/// 立てません。漢字表記が一致しなかった場合は、照合キーと一致した
/// かな読みに照合フラグを立てます。
fn mark_matches(mut entry: WordEntry, matching_text: &str) -> WordEntry {
    let folded_matching = kana_to_hiragana(matching_text);

    let kanji_match_found = entry
        .kanji_readings
        .iter()
        .any(|reading| kana_to_hiragana(&reading.text) == folded_matching);

    for reading in &mut entry.kanji_readings {
        let matches = kana_to_hiragana(&reading.text) == folded_matching;
        reading.match_range = matches.then(|| (0, reading.text.chars().count()));
        reading.matched = matches;
    }

    for reading in &mut entry.kana_readings {
        let matches = kana_to_hiragana(&reading.text) == folded_matching;
        reading.match_range = matches.then(|| (0, reading.text.chars().count()));
        // The kanji forms take priority over kana when both match
        reading.matched = matches && !kanji_match_found;
    }

    entry
}

/// 文字列全体がカタカナ（半角カタカナを含む）かを判定します
fn is_pure_katakana(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{FF65}'..='\u{FF9F}'))
}

/// 検索結果をキャッシュする辞書ラッパー
///
/// ヒットした検索と空振りした検索を別々のキャッシュに入れます。
/// どちらも上限に達したら古いものから2割を捨てます。キャッシュは
/// 透過的で、返る結果の意味は裏の辞書と常に同じです。
pub struct CachedDictionary<D> {
    inner: D,
    positive: Mutex<HashMap<(String, usize, Option<String>), Vec<WordEntry>>>,
    negative: Mutex<HashSet<String>>,
}

impl<D> CachedDictionary<D>
where
    D: Dictionary,
{
    /// 辞書をキャッシュで包みます
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            positive: Mutex::new(HashMap::new()),
            negative: Mutex::new(HashSet::new()),
        }
    }

    /// 包んでいる辞書への参照を返します
    #[inline(always)]
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D> Dictionary for CachedDictionary<D>
where
    D: Dictionary,
{
    fn get_words(
        &self,
        input: &str,
        max_results: usize,
        matching_text: Option<&str>,
    ) -> Result<Vec<WordEntry>> {
        if self
            .negative
            .lock()
            .expect("negative cache lock poisoned")
            .contains(input)
        {
            return Ok(Vec::new());
        }

        let key = (
            input.to_string(),
            max_results,
            matching_text.map(str::to_string),
        );
        if let Some(cached) = self
            .positive
            .lock()
            .expect("positive cache lock poisoned")
            .get(&key)
        {
            return Ok(cached.clone());
        }

        let entries = self.inner.get_words(input, max_results, matching_text)?;

        if entries.is_empty() {
            let mut negative = self.negative.lock().expect("negative cache lock poisoned");
            negative.insert(input.to_string());
            if negative.len() > NEGATIVE_CACHE_LIMIT {
                let drop_count = NEGATIVE_CACHE_LIMIT / 5;
                log::debug!("negative lookup cache full, evicting {drop_count} keys");
                let victims: Vec<String> =
                    negative.iter().take(drop_count).cloned().collect();
                for victim in victims {
                    negative.remove(&victim);
                }
            }
        } else {
            let mut positive = self.positive.lock().expect("positive cache lock poisoned");
            positive.insert(key, entries.clone());
            if positive.len() > POSITIVE_CACHE_LIMIT {
                let drop_count = POSITIVE_CACHE_LIMIT / 5;
                log::debug!("positive lookup cache full, evicting {drop_count} keys");
                let victims: Vec<_> = positive.keys().take(drop_count).cloned().collect();
                for victim in victims {
                    positive.remove(&victim);
                }
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{KanaReading, KanjiReading};

    fn entry(entry_id: u32, kanji: &[&str], kana: &[&str]) -> WordEntry {
        WordEntry {
            entry_id,
            ent_seq: entry_id,
            kanji_readings: kanji
                .iter()
                .map(|text| KanjiReading {
                    text: text.to_string(),
                    ..Default::default()
                })
                .collect(),
            kana_readings: kana
                .iter()
                .map(|text| KanaReading {
                    text: text.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn sample_dictionary() -> MemoryDictionary {
        MemoryDictionary::from_entries(vec![
            entry(1, &["食べる"], &["たべる"]),
            entry(2, &["蛋白質", "タンパク質"], &["たんぱくしつ", "タンパクしつ"]),
            entry(3, &[], &["ラーメン"]),
            entry(4, &["鮸"], &["にべ", "ニベ"]),
        ])
    }

    #[test]
    fn test_kanji_lookup() {
        let dict = sample_dictionary();
        let entries = dict.get_words("食べる", 10, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry_id, 1);
        assert_eq!(entries[0].kanji_readings[0].match_range, Some((0, 3)));
        assert!(entries[0].kanji_readings[0].matched);
        // The kana reading did not match the key, so it is not flagged
        assert!(!entries[0].kana_readings[0].matched);
    }

    #[test]
    fn test_kana_lookup_marks_matches() {
        let dict = sample_dictionary();
        let entries = dict.get_words("たべる", 10, None).unwrap();
        assert_eq!(entries.len(), 1);
        let kana = &entries[0].kana_readings[0];
        assert_eq!(kana.match_range, Some((0, 3)));
        assert!(kana.matched);
        // The kanji form did not match, so it gets neither range nor flag
        assert_eq!(entries[0].kanji_readings[0].match_range, None);
        assert!(!entries[0].kanji_readings[0].matched);
    }

    #[test]
    fn test_katakana_headword_is_reachable_from_hiragana() {
        let dict = sample_dictionary();
        let entries = dict.get_words("らーめん", 10, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry_id, 3);
    }

    #[test]
    fn test_pure_katakana_input_is_folded() {
        let dict = sample_dictionary();
        let entries = dict.get_words("ニベ", 10, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry_id, 4);
    }

    #[test]
    fn test_mixed_script_input_is_not_folded() {
        let dict = sample_dictionary();
        // A lookup key mixing hiragana and katakana is not folded
        let entries = dict.get_words("にベ", 10, None).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_mixed_script_headword_matches_exactly() {
        let dict = sample_dictionary();
        let entries = dict.get_words("タンパク質", 10, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry_id, 2);
        let matched: Vec<_> = entries[0]
            .kanji_readings
            .iter()
            .filter(|k| k.match_range.is_some())
            .map(|k| k.text.as_str())
            .collect();
        assert_eq!(matched, vec!["タンパク質"]);
    }

    #[test]
    fn test_long_input_is_skipped() {
        let dict = sample_dictionary();
        let long_input = "あ".repeat(MAX_LOOKUP_LENGTH + 1);
        assert!(dict.get_words(&long_input, 10, None).unwrap().is_empty());
    }

    #[test]
    fn test_max_results_cap() {
        let entries = (0..10)
            .map(|i| entry(i, &[], &["かき"]))
            .collect::<Vec<_>>();
        let dict = MemoryDictionary::from_entries(entries);
        assert_eq!(dict.get_words("かき", 3, None).unwrap().len(), 3);
    }

    #[test]
    fn test_matching_text_overrides_input() {
        let dict = sample_dictionary();
        let entries = dict.get_words("たべる", 10, Some("タベル")).unwrap();
        // タベル folds to たべる and matches
        assert_eq!(entries[0].kana_readings[0].match_range, Some((0, 3)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "entry_id": 9,
                "ent_seq": 1234560,
                "kana_readings": [{"text": "ことば"}],
                "senses": [{"pos_tags": ["n"], "glosses": [{"text": "word"}]}]
            }
        ]"#;
        let dict = MemoryDictionary::from_json(json.as_bytes()).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get_words("ことば", 5, None).unwrap().len(), 1);
    }

    #[test]
    fn test_from_json_rejects_empty() {
        assert!(MemoryDictionary::from_json("[]".as_bytes()).is_err());
    }

    #[test]
    fn test_cached_dictionary_is_transparent() {
        let dict = CachedDictionary::new(sample_dictionary());

        let first = dict.get_words("たべる", 10, None).unwrap();
        let second = dict.get_words("たべる", 10, None).unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].entry_id, second[0].entry_id);

        assert!(dict.get_words("存在しない", 10, None).unwrap().is_empty());
        assert!(dict.get_words("存在しない", 10, None).unwrap().is_empty());
    }
}
