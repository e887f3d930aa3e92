//! 後退しながらの最長一致検索
//!
//! 正規化済みテキストの先頭から始まる最長の辞書語を探します。末尾を
//! 1文字ずつ（拗音を分断する場合は2文字）削りながら、各長さで
//!
//! 1. 表記のバリエーション（長音展開・旧字体置換）を生成し、
//! 2. 各バリエーションを活用逆変換にかけ、
//! 3. 得られた候補を辞書で引き、
//! 4. 語種の照合で裏付けの取れたエントリだけを残す
//!
//! という探索を行います。見つかった結果は優先度順に並べて返します。

use std::borrow::Cow;

use hashbrown::HashSet;

use crate::deinflect::{deinflect, Reason};
use crate::dictionary::Dictionary;
use crate::entry::WordEntry;
use crate::errors::{Result, YomitokiError};
use crate::kana::{ends_in_yoon, is_numeric_run};
use crate::sorter::sort_word_results;
use crate::variations::{expand_choon, kyuujitai_to_shinjitai};
use crate::word_type::entry_matches_type;

/// `word_search` の既定の最大結果数
pub const DEFAULT_WORD_SEARCH_MAX_RESULTS: usize = 7;

/// 検索で引き当てたエントリ1件
///
/// `match_len` は元の入力で消費したUTF-16コードユニット数です。
/// 逆変換を経て引き当てた場合は `reason_chains` に変形の連なりが
/// 入ります。
#[derive(Clone, Debug)]
pub struct WordResult {
    /// 引き当てた辞書エントリ
    pub entry: WordEntry,

    /// 元の入力で消費したUTF-16コードユニット数
    pub match_len: usize,

    /// 逆変換の理由チェーン。直接一致なら `None`
    pub reason_chains: Option<Vec<Vec<Reason>>>,
}

/// `word_search` の結果
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// 優先度順に並んだ検索結果
    pub data: Vec<WordResult>,

    /// 最長一致の長さ（元の入力のUTF-16コードユニット数）
    pub match_len: usize,

    /// 上限で切り捨てた結果がまだあるかどうか
    pub more: bool,
}

/// テキストの先頭から始まる辞書語を検索します
///
/// # 引数
///
/// * `input` - 正規化済みテキスト
/// * `dict` - 検索に使う辞書
/// * `max_results` - 返す結果の最大数
/// * `offsets` - 正規化済みテキストのUTF-16位置から、元の入力で消費した
///   UTF-16コードユニット数への表。[`normalize`](crate::normalize) の
///   オフセット表（の先頭位置からの差分）をそのまま渡せます
///
/// # 戻り値
///
/// 1件でも見つかれば `Some`、何も見つからなければ `None` です。
/// 辞書自体が利用できない場合だけ `Err` になります。
///
/// # 例
///
/// ```no_run
/// use std::sync::Arc;
/// use yomitoki::{normalize, word_search, Dictionary, MemoryDictionary};
///
/// # fn main() -> yomitoki::Result<()> {
/// # let dict = MemoryDictionary::from_entries(vec![]);
/// let (normalized, offsets) = normalize("食べています");
/// let result = word_search(&normalized, &dict, 7, &offsets)?;
/// if let Some(result) = result {
///     println!("longest match: {} units", result.match_len);
/// }
/// # Ok(())
/// # }
/// ```
pub fn word_search(
    input: &str,
    dict: &dyn Dictionary,
    max_results: usize,
    offsets: &[usize],
) -> Result<Option<SearchResult>> {
    if max_results == 0 {
        return Err(YomitokiError::invalid_argument(
            "max_results",
            "must be at least 1",
        ));
    }

    let mut current: String = input.to_string();
    let mut longest_match = 0usize;
    let mut have: HashSet<u32> = HashSet::new();
    let mut results: Vec<WordResult> = Vec::new();
    let mut include_variants = true;

    while !current.is_empty() {
        // Looking up the middle of a digit run is pointless
        if is_numeric_run(&current) {
            break;
        }

        let mut variations: Vec<String> = vec![current.clone()];
        if include_variants {
            variations.extend(expand_choon(&current));
            if let Cow::Owned(converted) = kyuujitai_to_shinjitai(&current) {
                variations.push(converted);
            }
        }

        let current_units = current.chars().map(char::len_utf16).sum::<usize>();
        let current_original_len = offsets
            .get(current_units)
            .or_else(|| offsets.last())
            .copied()
            .unwrap_or(current_units);

        for variant in variations {
            let found = lookup_candidates(
                &variant,
                dict,
                &have,
                max_results,
                current_original_len,
                &current,
            )?;
            if !found.is_empty() {
                for result in &found {
                    have.insert(result.entry.entry_id);
                }
                results.extend(found);
                longest_match = longest_match.max(current_original_len);
                current = variant;
                // Keep refining on the first variation that bears fruit
                include_variants = false;
                break;
            }
        }

        if results.len() >= 5 * max_results {
            break;
        }

        let cut = if ends_in_yoon(&current) { 2 } else { 1 };
        truncate_chars(&mut current, cut);
    }

    if results.is_empty() {
        return Ok(None);
    }

    sort_word_results(&mut results);
    let more = results.len() >= max_results;
    results.truncate(max_results);

    Ok(Some(SearchResult {
        data: results,
        match_len: longest_match,
        more,
    }))
}

/// 1つの検索語について、逆変換と辞書引きで候補を集めます
///
/// 逆変換の同一候補（先頭）以外から引き当てたエントリは、品詞が
/// 候補の語種と両立するものだけを残します。
fn lookup_candidates(
    variant: &str,
    dict: &dyn Dictionary,
    have: &HashSet<u32>,
    max_results: usize,
    current_original_len: usize,
    matching_text: &str,
) -> Result<Vec<WordResult>> {
    let mut results = Vec::new();
    let mut seen: HashSet<u32> = HashSet::new();

    for (candidate_index, candidate) in deinflect(variant).into_iter().enumerate() {
        let entries = dict.get_words(&candidate.word, 2 * max_results, Some(matching_text))?;

        for entry in entries {
            if candidate_index != 0 && !entry_matches_type(&entry, candidate.word_type) {
                continue;
            }
            if have.contains(&entry.entry_id) || !seen.insert(entry.entry_id) {
                continue;
            }

            let reason_chains = if candidate.reason_chains.is_empty() {
                None
            } else {
                Some(candidate.reason_chains.clone())
            };
            results.push(WordResult {
                entry,
                match_len: current_original_len,
                reason_chains,
            });
        }
    }

    sort_word_results(&mut results);
    results.truncate(max_results);
    Ok(results)
}

/// 末尾から `count` 文字を取り除きます
fn truncate_chars(text: &mut String, count: usize) {
    for _ in 0..count {
        text.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MemoryDictionary;
    use crate::entry::{KanaReading, KanjiReading, Sense};
    use crate::normalizer::normalize;

    fn entry(entry_id: u32, kanji: &[&str], kana: &[&str], pos: &[&str]) -> WordEntry {
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
            senses: vec![Sense {
                pos_tags: pos.iter().map(|p| p.to_string()).collect(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn test_dictionary() -> MemoryDictionary {
        MemoryDictionary::from_entries(vec![
            entry(1358280, &["食べる"], &["たべる"], &["v1", "vt"]),
            entry(1578850, &["行く"], &["いく"], &["v5k-s"]),
            entry(2028920, &[], &["は"], &["prt"]),
            entry(1599390, &["鼠"], &["ねずみ"], &["n"]),
            entry(9000002, &["旧聞"], &["きゅうぶん"], &["n"]),
        ])
    }

    fn search(text: &str, dict: &MemoryDictionary) -> Option<SearchResult> {
        let (normalized, offsets) = normalize(text);
        word_search(&normalized, dict, DEFAULT_WORD_SEARCH_MAX_RESULTS, &offsets).unwrap()
    }

    #[test]
    fn test_direct_match() {
        let dict = test_dictionary();
        let result = search("食べる", &dict).unwrap();
        assert_eq!(result.match_len, 3);
        assert_eq!(result.data[0].entry.entry_id, 1358280);
        assert!(result.data[0].reason_chains.is_none());
    }

    #[test]
    fn test_deinflected_match() {
        let dict = test_dictionary();
        let result = search("食べました", &dict).unwrap();
        assert_eq!(result.match_len, 5);
        assert_eq!(result.data[0].entry.entry_id, 1358280);
        assert_eq!(
            result.data[0].reason_chains,
            Some(vec![vec![Reason::PolitePast]])
        );
    }

    #[test]
    fn test_backtracking_finds_shorter_match() {
        let dict = test_dictionary();
        let result = search("食べるでしょう", &dict).unwrap();
        // No match for the whole string, so backtracking finds 食べる
        assert_eq!(result.match_len, 3);
        assert_eq!(result.data[0].entry.entry_id, 1358280);
    }

    #[test]
    fn test_no_match_returns_none() {
        let dict = test_dictionary();
        assert!(search("xyz", &dict).is_none());
    }

    #[test]
    fn test_numeric_run_is_not_searched() {
        let dict = test_dictionary();
        assert!(search("１２３", &dict).is_none());
        assert!(search("1,234", &dict).is_none());
    }

    #[test]
    fn test_kyuujitai_variant_lookup() {
        // The old kanji form is not in the dictionary but its shinjitai
        // variant is
        let dict = test_dictionary();
        let result = search("舊聞", &dict).unwrap();
        assert_eq!(result.data[0].entry.entry_id, 9000002);
        assert_eq!(result.match_len, 2);
    }

    #[test]
    fn test_type_filter_rejects_noun_as_verb() {
        // ねずみ is a noun, so it is not matched as a conjugation of ねずむ
        let dict = test_dictionary();
        let result = search("ねずみました", &dict);
        // ねずみ itself (the identity candidate) turns up after backtracking
        let result = result.unwrap();
        assert_eq!(result.data[0].entry.entry_id, 1599390);
        assert_eq!(result.match_len, 3);
        assert!(result.data[0].reason_chains.is_none());
    }

    #[test]
    fn test_match_len_is_utf16_of_original() {
        let dict = MemoryDictionary::from_entries(vec![entry(
            42,
            &["𠮟る"],
            &["しかる"],
            &["v5r"],
        )]);
        let result = search("𠮟る", &dict).unwrap();
        // 𠮟 is a surrogate pair, so the match length is 3 code units
        assert_eq!(result.match_len, 3);
    }

    #[test]
    fn test_results_are_capped_and_flagged() {
        let entries: Vec<WordEntry> = (0..20)
            .map(|i| entry(i, &[], &["はし"], &["n"]))
            .collect();
        let dict = MemoryDictionary::from_entries(entries);
        let (normalized, offsets) = normalize("はし");
        let result = word_search(&normalized, &dict, 7, &offsets)
            .unwrap()
            .unwrap();
        assert_eq!(result.data.len(), 7);
        assert!(result.more);
    }

    #[test]
    fn test_yoon_backtrack_skips_digraph() {
        let dict = MemoryDictionary::from_entries(vec![
            entry(100, &["電子"], &["でんし"], &["n"]),
            entry(101, &["田"], &["でん"], &["n"]),
        ]);
        // でんしゃ ends in a yoon, so the search steps back 2 chars and
        // never probes でんし
        let result = search("でんしゃ", &dict).unwrap();
        assert_eq!(result.data[0].entry.entry_id, 101);
        assert_eq!(result.match_len, 2);
    }
}
