//! 活用逆変換の規則表
//!
//! 語尾置換規則の静的な表です。規則は文法グループごとにまとめてあり、
//! 起動時に語尾文字列で索引化されます。
//!
//! 規則の向きは表層形から基底形です。`from_type` は表層形（現在の候補）
//! が取りうる語種、`to_type` は置換後の候補の語種です。`reasons` の
//! 並び順は辞書形に近い変形が先頭です。
//!
//! 丁寧形・希望形・様態などは連用形語幹（ます語幹）に、て形・た形は
//! て形語幹に、否定・受身・使役は未然形語幹に剥がし、語幹から辞書形
//! への復元は理由なし（または暗黙のます語幹）の規則が受け持ちます。
//! 一段動詞の語幹は語幹ビット経由でエンジン側が「る」を付けて復元
//! します。

use super::{DeinflectRule, Reason};
use crate::word_type::WordType;

use super::Reason::*;

const IV: WordType = WordType::ICHIDAN_VERB;
const GV: WordType = WordType::GODAN_VERB;
const AI: WordType = WordType::I_ADJ;
const KV: WordType = WordType::KURU_VERB;
const SV: WordType = WordType::SURU_VERB;
const ZV: WordType = WordType::SPECIAL_SURU_VERB;
const MS: WordType = WordType::MASU_STEM;
const TS: WordType = WordType::TA_TE_STEM;
const DS: WordType = WordType::DA_DE_STEM;
const IS: WordType = WordType::IRREALIS_STEM;

/// 一段動詞とカ変動詞。語幹からの復元後はどちらもる型の活用をする。
const IK: WordType = IV.with(KV);

/// 動詞の終端語種すべて
const VERB: WordType = IV.with(GV).with(KV).with(SV).with(ZV);

/// 終端語種すべて
const ALL: WordType = WordType::ALL;

const fn r(
    from: &'static str,
    to: &'static str,
    from_type: WordType,
    to_type: WordType,
    reasons: &'static [Reason],
) -> DeinflectRule {
    DeinflectRule {
        from,
        to,
        from_type,
        to_type,
        reasons,
    }
}

pub(super) static RULES: &[DeinflectRule] = &[
    // ---- Polite forms (attach to the masu stem) ----
    r("ます", "", MS, MS, &[Polite]),
    r("ました", "", MS, MS, &[PolitePast]),
    r("ません", "", MS, MS, &[PoliteNegative]),
    r("ませぬ", "", MS, MS, &[PoliteNegative]),
    r("ませんでした", "", MS, MS, &[PolitePastNegative]),
    r("ましょう", "", MS, MS, &[PoliteVolitional]),
    r("ましょ", "", MS, MS, &[PoliteVolitional]),
    r("ませ", "", MS, MS, &[Polite, Imperative]),
    r("まして", "", MS, MS, &[Polite, Te]),
    r("ませんで", "", MS, MS, &[PoliteNegative, Te]),
    r("ましたら", "", MS, MS, &[PolitePast, Tara]),
    // ---- Masu-stem recovery ----
    r("い", "う", MS, GV, &[MasuStem]),
    r("き", "く", MS, GV, &[MasuStem]),
    r("ぎ", "ぐ", MS, GV, &[MasuStem]),
    r("し", "す", MS, GV, &[MasuStem]),
    r("ち", "つ", MS, GV, &[MasuStem]),
    r("に", "ぬ", MS, GV, &[MasuStem]),
    r("び", "ぶ", MS, GV, &[MasuStem]),
    r("み", "む", MS, GV, &[MasuStem]),
    r("り", "る", MS, GV, &[MasuStem]),
    r("し", "する", MS, SV, &[MasuStem]),
    r("じ", "ずる", MS, ZV, &[MasuStem]),
    r("き", "くる", MS, KV, &[MasuStem]),
    r("来", "来る", MS, KV, &[MasuStem]),
    // Honorific verbs with irregular masu stems
    r("ください", "くださる", MS, GV, &[MasuStem]),
    r("なさい", "なさる", MS, GV, &[MasuStem]),
    r("いらっしゃい", "いらっしゃる", MS, GV, &[MasuStem]),
    r("おっしゃい", "おっしゃる", MS, GV, &[MasuStem]),
    r("ござい", "ござる", MS, GV, &[MasuStem]),
    // ---- Te forms ----
    r("て", "", VERB, TS, &[Te]),
    r("で", "", GV, DS, &[Te]),
    r("くて", "い", AI, AI, &[Te]),
    r("うて", "う", GV, GV, &[Te]),
    r("ないで", "", VERB, IS, &[Negative, Te]),
    // ---- Ta/te-stem recovery ----
    r("い", "く", TS, GV, &[]),
    r("い", "ぐ", DS, GV, &[]),
    r("し", "す", TS, GV, &[]),
    r("っ", "う", TS, GV, &[]),
    r("っ", "つ", TS, GV, &[]),
    r("っ", "る", TS, GV, &[]),
    r("行っ", "行く", TS, GV, &[]),
    r("逝っ", "逝く", TS, GV, &[]),
    r("往っ", "往く", TS, GV, &[]),
    r("いっ", "いく", TS, GV, &[]),
    r("ん", "む", DS, GV, &[]),
    r("ん", "ぬ", DS, GV, &[]),
    r("ん", "ぶ", DS, GV, &[]),
    r("し", "する", TS, SV, &[]),
    r("じ", "ずる", TS, ZV, &[]),
    r("き", "くる", TS, KV, &[]),
    r("来", "来る", TS, KV, &[]),
    // ---- Past forms ----
    r("た", "", VERB, TS, &[Past]),
    r("だ", "", GV, DS, &[Past]),
    r("かった", "い", AI, AI, &[Past]),
    r("うた", "う", GV, GV, &[Past]),
    // ---- Continuous forms and honorific auxiliaries ----
    r("ている", "", IV, TS, &[Continuous]),
    r("でいる", "", IV, DS, &[Continuous]),
    r("てる", "", IV, TS, &[Continuous]),
    r("でる", "", IV, DS, &[Continuous]),
    r("ておる", "", GV, TS, &[Humble]),
    r("でおる", "", GV, DS, &[Humble]),
    r("とる", "", GV, TS, &[Kansai]),
    r("どる", "", GV, DS, &[Kansai]),
    r("ていらっしゃる", "", GV, TS, &[Respectful, Continuous]),
    r("でいらっしゃる", "", GV, DS, &[Respectful, Continuous]),
    r("てくださる", "", GV, TS, &[Respectful]),
    r("なさる", "", GV, MS, &[Respectful]),
    r("くださる", "", GV, MS, &[Respectful]),
    // ---- Contractions of -te shimau and -te oku ----
    r("ちゃう", "", GV, TS, &[Chau]),
    r("じゃう", "", GV, DS, &[Chau]),
    r("ちまう", "", GV, TS, &[Chau]),
    r("じまう", "", GV, DS, &[Chau]),
    r("とく", "", GV, TS, &[Toku]),
    r("どく", "", GV, DS, &[Toku]),
    // ---- Negative forms ----
    r("ない", "", AI, IS, &[Negative]),
    r("くない", "い", AI, AI, &[Negative]),
    r("ん", "", VERB, IS, &[Negative]),
    r("ぬ", "", VERB, IS, &[Nu]),
    r("ねば", "", VERB, IS, &[Nu, Ba]),
    r("ず", "", VERB, IS, &[Zu]),
    r("ずに", "", VERB, IS, &[Zu]),
    r("ざる", "", VERB, IS, &[Zu]),
    r("ざるを得ない", "", VERB, IS, &[ZaruWoEnai]),
    r("ざるをえない", "", VERB, IS, &[ZaruWoEnai]),
    r("まい", "", VERB, VERB, &[Negative, Volitional]),
    r("な", "", VERB, VERB, &[ImperativeNegative]),
    // Kansai negatives
    r("へん", "", VERB, IS, &[Negative, Kansai]),
    r("へんかった", "", VERB, IS, &[PastNegative, Kansai]),
    r("なんだ", "", VERB, IS, &[PastNegative, Kansai]),
    // ---- Irrealis-stem recovery ----
    r("わ", "う", IS, GV, &[]),
    r("か", "く", IS, GV, &[]),
    r("が", "ぐ", IS, GV, &[]),
    r("さ", "す", IS, GV, &[]),
    r("た", "つ", IS, GV, &[]),
    r("な", "ぬ", IS, GV, &[]),
    r("ば", "ぶ", IS, GV, &[]),
    r("ま", "む", IS, GV, &[]),
    r("ら", "る", IS, GV, &[]),
    r("し", "する", IS, SV, &[]),
    r("せ", "する", IS, SV, &[]),
    r("さ", "する", IS, SV, &[]),
    r("じ", "ずる", IS, ZV, &[]),
    r("ぜ", "ずる", IS, ZV, &[]),
    r("こ", "くる", IS, KV, &[]),
    r("来", "来る", IS, KV, &[]),
    // ---- Passive and causative ----
    r("れる", "", IV, IS, &[Passive]),
    r("られる", "る", IK, IK, &[PotentialOrPassive]),
    r("せる", "", IV, IS, &[Causative]),
    r("させる", "る", IK, IK, &[Causative]),
    r("させる", "する", SV, SV, &[Causative]),
    // ---- Potential forms ----
    r("れる", "る", IK, IK, &[Potential]),
    r("える", "う", GV, GV, &[Potential]),
    r("ける", "く", GV, GV, &[Potential]),
    r("げる", "ぐ", GV, GV, &[Potential]),
    r("せる", "す", GV, GV, &[Potential]),
    r("てる", "つ", GV, GV, &[Potential]),
    r("ねる", "ぬ", GV, GV, &[Potential]),
    r("べる", "ぶ", GV, GV, &[Potential]),
    r("める", "む", GV, GV, &[Potential]),
    r("れる", "る", GV, GV, &[Potential]),
    // ---- Volitional forms ----
    r("よう", "る", IK, IK, &[Volitional]),
    r("おう", "う", GV, GV, &[Volitional]),
    r("こう", "く", GV, GV, &[Volitional]),
    r("ごう", "ぐ", GV, GV, &[Volitional]),
    r("そう", "す", GV, GV, &[Volitional]),
    r("とう", "つ", GV, GV, &[Volitional]),
    r("のう", "ぬ", GV, GV, &[Volitional]),
    r("ぼう", "ぶ", GV, GV, &[Volitional]),
    r("もう", "む", GV, GV, &[Volitional]),
    r("ろう", "る", GV, GV, &[Volitional]),
    r("しよう", "する", SV, SV, &[Volitional]),
    r("こよう", "くる", KV, KV, &[Volitional]),
    r("来よう", "来る", KV, KV, &[Volitional]),
    r("かろう", "い", AI, AI, &[Volitional]),
    // ---- Ba conditionals ----
    r("れば", "る", VERB, VERB, &[Ba]),
    r("えば", "う", GV, GV, &[Ba]),
    r("けば", "く", GV, GV, &[Ba]),
    r("げば", "ぐ", GV, GV, &[Ba]),
    r("せば", "す", GV, GV, &[Ba]),
    r("てば", "つ", GV, GV, &[Ba]),
    r("ねば", "ぬ", GV, GV, &[Ba]),
    r("べば", "ぶ", GV, GV, &[Ba]),
    r("めば", "む", GV, GV, &[Ba]),
    r("ければ", "い", AI, AI, &[Ba]),
    r("きゃ", "い", AI, AI, &[Ba]),
    r("けりゃ", "い", AI, AI, &[Ba]),
    // ---- Tara conditionals and tari lists ----
    r("たら", "", VERB, TS, &[Tara]),
    r("だら", "", GV, DS, &[Tara]),
    r("かったら", "い", AI, AI, &[Tara]),
    r("たり", "", VERB, TS, &[Tari]),
    r("だり", "", GV, DS, &[Tari]),
    r("かったり", "い", AI, AI, &[Tari]),
    // ---- Desiderative, appearance, excess (attach to the masu stem) ----
    r("たい", "", AI, MS, &[Tai]),
    r("たがる", "", GV, MS, &[Tai]),
    r("そう", "", ALL, MS, &[Sou]),
    r("そう", "い", AI, AI, &[Sou]),
    r("すぎる", "", ALL, MS, &[Sugiru]),
    r("過ぎる", "", ALL, MS, &[Sugiru]),
    r("すぎる", "い", AI, AI, &[Sugiru]),
    r("過ぎる", "い", AI, AI, &[Sugiru]),
    r("なさい", "", VERB, MS, &[Nasai]),
    r("な", "", VERB, MS, &[Nasai]),
    r("がる", "い", AI, AI, &[Garu]),
    // ---- Imperative forms ----
    r("ろ", "る", IK, IK, &[Imperative]),
    r("よ", "る", IV, IV, &[Imperative]),
    r("え", "う", GV, GV, &[Imperative]),
    r("け", "く", GV, GV, &[Imperative]),
    r("げ", "ぐ", GV, GV, &[Imperative]),
    r("せ", "す", GV, GV, &[Imperative]),
    r("て", "つ", GV, GV, &[Imperative]),
    r("ね", "ぬ", GV, GV, &[Imperative]),
    r("べ", "ぶ", GV, GV, &[Imperative]),
    r("め", "む", GV, GV, &[Imperative]),
    r("れ", "る", GV, GV, &[Imperative]),
    r("しろ", "する", SV, SV, &[Imperative]),
    r("せよ", "する", SV, SV, &[Imperative]),
    r("ぜよ", "ずる", ZV, ZV, &[Imperative]),
    r("こい", "くる", KV, KV, &[Imperative]),
    r("来い", "来る", KV, KV, &[Imperative]),
    r("くれ", "くれる", IV, IV, &[Imperative]),
    // Honorific verbs with irregular imperatives
    r("ください", "くださる", GV, GV, &[Imperative]),
    r("なさい", "なさる", GV, GV, &[Imperative]),
    r("いらっしゃい", "いらっしゃる", GV, GV, &[Imperative]),
    r("おっしゃい", "おっしゃる", GV, GV, &[Imperative]),
    // ---- Adjective forms ----
    r("く", "い", AI, AI, &[Adv]),
    r("さ", "い", AI, AI, &[Noun]),
    r("き", "い", AI, AI, &[Ki]),
    // ---- Forms specific to suru and kuru ----
    r("する", "", SV, WordType::NOUN_VS, &[SuruVerb]),
    r("こられる", "くる", KV, KV, &[PotentialOrPassive]),
    r("来られる", "来る", KV, KV, &[PotentialOrPassive]),
    r("こさせる", "くる", KV, KV, &[Causative]),
    r("来させる", "来る", KV, KV, &[Causative]),
    r("ぜられる", "ずる", ZV, ZV, &[PotentialOrPassive]),
    // ---- Literary purposive ----
    r("んがため", "", VERB, IS, &[Tame]),
];
