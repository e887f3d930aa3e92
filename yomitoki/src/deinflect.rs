//! 活用逆変換エンジン
//!
//! 活用した表層形から、それを生みうる辞書形の候補をすべて列挙します。
//! 候補には、表層形に至るまでの文法変形の連なり（理由チェーン）と、
//! 候補が取りうる語種のビットマスクが付きます。
//!
//! エンジンは語尾置換規則の表に対する前方閉包探索です。候補のリストを
//! 先頭から走査し、各候補に適用できる規則の結果を末尾に追加していきます
//! （幅優先）。規則の適用で候補が長くなることは実質なく、同じ語の候補は
//! 統合されるため、閉包は有限で自然に停止します。

mod rules;

use std::sync::LazyLock;

use hashbrown::HashMap;

use crate::kana::kana_to_hiragana;
use crate::word_type::WordType;

/// 文法変形の種類
///
/// 各値は表層形から基底形への1段階の変形に対応します。理由チェーンの
/// 中では、辞書形に近い変形ほど先頭に置かれます。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    /// 丁寧形（〜ます）
    Polite,
    /// 丁寧過去形（〜ました）
    PolitePast,
    /// 丁寧否定形（〜ません）
    PoliteNegative,
    /// 丁寧過去否定形（〜ませんでした）
    PolitePastNegative,
    /// 丁寧意向形（〜ましょう）
    PoliteVolitional,
    /// 過去形（〜た）
    Past,
    /// 過去否定形（〜なんだ 等）
    PastNegative,
    /// 否定形（〜ない）
    Negative,
    /// て形
    Te,
    /// 進行形（〜ている）
    Continuous,
    /// 尊敬表現（〜ていらっしゃる、〜なさる）
    Respectful,
    /// 謙譲表現（〜ておる）
    Humble,
    /// 関西方言（〜とる、〜へん）
    Kansai,
    /// 受身形（〜れる）
    Passive,
    /// 使役形（〜せる、〜させる）
    Causative,
    /// 使役受身形（〜させられる）
    CausativePassive,
    /// 可能形（〜える、ら抜きの〜れる）
    Potential,
    /// 可能または受身（一段動詞の〜られる）
    PotentialOrPassive,
    /// 意向形（〜よう、〜おう）
    Volitional,
    /// 希望形（〜たい、〜たがる）
    Tai,
    /// 文語否定（〜ず、〜ざる）
    Zu,
    /// 文語否定（〜ぬ）
    Nu,
    /// 仮定形（〜ば）
    Ba,
    /// 条件形（〜たら）
    Tara,
    /// 並列形（〜たり）
    Tari,
    /// 連用形（ます語幹）
    MasuStem,
    /// 命令形（〜ろ、〜え）
    Imperative,
    /// 禁止形（〜な）
    ImperativeNegative,
    /// 目的の文語表現（〜んがため）
    Tame,
    /// 様態（〜そう）
    Sou,
    /// 過剰（〜すぎる）
    Sugiru,
    /// 形容詞の連用形（〜く）
    Adv,
    /// 形容詞の名詞化（〜さ）
    Noun,
    /// 縮約した〜てしまう（〜ちゃう）
    Chau,
    /// 縮約した〜ておく（〜とく）
    Toku,
    /// 文語の連体形（〜き）
    Ki,
    /// サ変名詞に付く〜する
    SuruVerb,
    /// 命令の丁寧表現（〜なさい）
    Nasai,
    /// 形容詞に付く〜がる
    Garu,
    /// 〜ざるを得ない
    ZaruWoEnai,
}

/// 語尾置換規則
///
/// `from` が候補の末尾に一致し、候補の語種が `from_type` と交差する
/// とき、末尾を `to` に置き換えた新しい候補を `to_type` の語種で生成
/// します。`reasons` はこの規則が記録する変形の段です。
pub(crate) struct DeinflectRule {
    pub(crate) from: &'static str,
    pub(crate) to: &'static str,
    pub(crate) from_type: WordType,
    pub(crate) to_type: WordType,
    pub(crate) reasons: &'static [Reason],
}

/// 規則の `from` の最大文字数
const MAX_ENDING_LEN: usize = 7;

/// 語尾文字列から規則への索引
///
/// 規則表から一度だけ構築され、以後は読み取り専用で共有されます。
struct RuleIndex {
    by_ending: HashMap<&'static str, Vec<&'static DeinflectRule>>,
}

impl RuleIndex {
    fn build() -> Self {
        let mut by_ending: HashMap<&'static str, Vec<&'static DeinflectRule>> = HashMap::new();

        for rule in rules::RULES {
            // Consistency checks. The rule table is static data, so fail
            // fast if it is broken.
            assert!(!rule.from.is_empty(), "deinflection rule with empty `from`");
            assert!(
                rule.from.chars().count() <= MAX_ENDING_LEN,
                "deinflection rule `from` longer than {} chars: {}",
                MAX_ENDING_LEN,
                rule.from
            );
            assert!(
                rule.from_type.0 != 0 && rule.to_type.0 != 0,
                "deinflection rule with empty type mask: {}",
                rule.from
            );

            by_ending.entry(rule.from).or_default().push(rule);
        }

        Self { by_ending }
    }

    #[inline(always)]
    fn rules_for(&self, ending: &str) -> &[&'static DeinflectRule] {
        self.by_ending
            .get(ending)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

static RULE_INDEX: LazyLock<RuleIndex> = LazyLock::new(RuleIndex::build);

/// 逆変換で得られた候補
///
/// `word` は規則を0回以上適用して到達した、より基底に近い形です。
/// 同じ語に複数の導出経路がある場合、`reason_chains` に複数の
/// チェーンが入ります。チェーン内の順序は辞書形に近い変形が先頭です。
#[derive(Clone, Debug)]
pub struct CandidateWord {
    /// 候補の語
    pub word: String,

    /// 候補が取りうる語種
    pub word_type: WordType,

    /// 導出経路ごとの理由チェーン
    pub reason_chains: Vec<Vec<Reason>>,
}

/// 入力語の活用を逆変換し、辞書形の候補を列挙します
///
/// 戻り値には必ず入力そのもの（理由チェーンが空の同一候補）が含まれ
/// ます。候補は語種が終端の語種と交差するものだけに絞られ、語幹だけの
/// 中間候補は返されません。
///
/// 1つのチェーンに同じ理由が2回現れる導出は破棄されます。また、
/// 同じ語の候補は `(語, 語種)` ごとに高々1つに統合され、重複する導出は
/// チェーンの追加になります。
///
/// # 例
///
/// ```
/// use yomitoki::{deinflect, Reason};
///
/// let candidates = deinflect("食べました");
/// let base = candidates.iter().find(|c| c.word == "食べる").unwrap();
/// assert_eq!(base.reason_chains, vec![vec![Reason::PolitePast]]);
/// ```
pub fn deinflect(word: &str) -> Vec<CandidateWord> {
    let mut result: Vec<CandidateWord> = Vec::with_capacity(16);
    let mut index: HashMap<String, usize> = HashMap::new();

    // Seed candidate. Until rules narrow it down, the input may be the
    // dictionary form of any word class, or any stem.
    result.push(CandidateWord {
        word: word.to_string(),
        word_type: WordType::ALL.with(WordType::STEMS),
        reason_chains: Vec::new(),
    });
    index.insert(word.to_string(), 0);

    let rule_index = &*RULE_INDEX;

    let mut i = 0;
    while i < result.len() {
        let current_word = result[i].word.clone();
        let current_type = result[i].word_type;
        let current_chains = result[i].reason_chains.clone();

        // Expanding an ichidan verb forwarded from a masu stem any further
        // only yields bogus derivations.
        if current_type.intersects(WordType::ICHIDAN_VERB)
            && current_chains.len() == 1
            && matches!(current_chains[0].as_slice(), [Reason::MasuStem])
        {
            i += 1;
            continue;
        }

        // Forward stem candidates to the ichidan dictionary form.
        if current_type.intersects(WordType::STEMS) {
            let suppress = current_type.intersects(WordType::IRREALIS_STEM)
                && matches!(
                    current_chains.first().and_then(|chain| chain.first()),
                    Some(Reason::Passive | Reason::Causative | Reason::CausativePassive)
                );
            if !suppress {
                let mut stem_word = current_word.clone();
                stem_word.push('る');
                let mut chains = current_chains.clone();
                if chains.is_empty() && current_type.intersects(WordType::MASU_STEM) {
                    chains.push(vec![Reason::MasuStem]);
                }
                push_or_merge(
                    &mut result,
                    &mut index,
                    stem_word,
                    WordType::ICHIDAN_VERB.with(WordType::KURU_VERB),
                    chains,
                );
            }
        }

        // Apply rules, longest endings first.
        let char_count = current_word.chars().count();
        for ending_len in (1..=char_count.min(MAX_ENDING_LEN)).rev() {
            let start = suffix_start(&current_word, ending_len);
            let ending = &current_word[start..];
            let hiragana_ending = kana_to_hiragana(ending);

            let direct = rule_index.rules_for(ending);
            let folded = if hiragana_ending != ending {
                rule_index.rules_for(&hiragana_ending)
            } else {
                &[]
            };

            for rule in direct.iter().chain(folded) {
                if !current_type.intersects(rule.from_type) {
                    continue;
                }

                // A repeated reason discards the whole derivation.
                if rule.reasons.iter().any(|reason| {
                    current_chains
                        .iter()
                        .any(|chain| chain.contains(reason))
                }) {
                    continue;
                }

                let mut new_word =
                    String::with_capacity(start + rule.to.len());
                new_word.push_str(&current_word[..start]);
                new_word.push_str(rule.to);
                if new_word.is_empty() {
                    continue;
                }

                if let Some(&existing) = index.get(&new_word) {
                    if result[existing].word_type == rule.to_type {
                        // Another path to a known candidate. Just add the chain.
                        result[existing]
                            .reason_chains
                            .insert(0, rule.reasons.to_vec());
                        continue;
                    }
                }

                let mut chains = current_chains.clone();
                if !rule.reasons.is_empty() {
                    match chains.first_mut() {
                        Some(first_chain) => {
                            if rule.reasons[0] == Reason::Causative
                                && first_chain.first() == Some(&Reason::PotentialOrPassive)
                            {
                                // A causative layered over a potential/passive
                                // reads as the ichidan causative passive.
                                first_chain[0] = Reason::CausativePassive;
                            } else if rule.reasons[0] == Reason::MasuStem {
                                // The masu stem is implicit once other
                                // transformations exist.
                            } else {
                                for (pos, reason) in rule.reasons.iter().enumerate() {
                                    first_chain.insert(pos, *reason);
                                }
                            }
                        }
                        None => chains.push(rule.reasons.to_vec()),
                    }
                }

                index.insert(new_word.clone(), result.len());
                result.push(CandidateWord {
                    word: new_word,
                    word_type: rule.to_type,
                    reason_chains: chains,
                });
            }
        }

        i += 1;
    }

    // Drop stem-only intermediate candidates.
    result.retain(|candidate| candidate.word_type.intersects(WordType::ALL));
    result
}

/// 候補を追加するか、同じ語・同じ語種の既存候補にチェーンを統合します
fn push_or_merge(
    result: &mut Vec<CandidateWord>,
    index: &mut HashMap<String, usize>,
    word: String,
    word_type: WordType,
    chains: Vec<Vec<Reason>>,
) {
    if let Some(&existing) = index.get(&word) {
        if result[existing].word_type == word_type {
            for (pos, chain) in chains.into_iter().enumerate() {
                result[existing].reason_chains.insert(pos, chain);
            }
            return;
        }
    }
    index.insert(word.clone(), result.len());
    result.push(CandidateWord {
        word,
        word_type,
        reason_chains: chains,
    });
}

/// 末尾 `n_chars` 文字が始まるバイト位置を返します
#[inline(always)]
fn suffix_start(word: &str, n_chars: usize) -> usize {
    let mut indices = word.char_indices();
    for _ in 0..n_chars {
        indices.next_back();
    }
    indices
        .next_back()
        .map(|(pos, c)| pos + c.len_utf8())
        .unwrap_or(0)
}
