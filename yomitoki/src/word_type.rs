//! 語種ビットマスクと品詞照合
//!
//! 活用逆変換の候補が持ちうる語種（一段動詞、五段動詞、い形容詞 など）を
//! ビットマスクで表現します。終端の語種に加えて、逆変換グラフの中間
//! 地点となる語幹ビット（連用形語幹、て形語幹、未然形語幹）を持ちます。
//! 語幹ビットは候補の導出途中にのみ現れ、最終結果には含まれません。

use crate::entry::WordEntry;

/// 語種のビットマスク
///
/// 終端の語種と中間語幹のビットを合わせて保持します。候補の語種は
/// 規則の適用によって絞り込まれていきます。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordType(pub(crate) u16);

impl WordType {
    /// 一段動詞（食べる、見る）
    pub const ICHIDAN_VERB: Self = Self(1 << 0);

    /// 五段動詞（書く、読む）
    pub const GODAN_VERB: Self = Self(1 << 1);

    /// い形容詞（高い、美しい）
    pub const I_ADJ: Self = Self(1 << 2);

    /// カ変動詞（くる）
    pub const KURU_VERB: Self = Self(1 << 3);

    /// サ変動詞（する、勉強する）
    pub const SURU_VERB: Self = Self(1 << 4);

    /// 特殊サ変動詞（感ずる 等のずる動詞）
    pub const SPECIAL_SURU_VERB: Self = Self(1 << 5);

    /// する動詞を作る名詞（勉強、運動）
    pub const NOUN_VS: Self = Self(1 << 6);

    /// 連用形語幹（食べ、書き から ます を除いた形）
    pub const MASU_STEM: Self = Self(1 << 8);

    /// て形・た形語幹（書い、話し）
    pub const TA_TE_STEM: Self = Self(1 << 9);

    /// で形・だ形語幹（読ん、泳い）
    pub const DA_DE_STEM: Self = Self(1 << 10);

    /// 未然形語幹（書か、食べ）
    pub const IRREALIS_STEM: Self = Self(1 << 11);

    /// 終端の語種の全集合
    ///
    /// 逆変換の結果として返せるのはこの集合と交差する候補だけです。
    pub const ALL: Self = Self::ICHIDAN_VERB
        .with(Self::GODAN_VERB)
        .with(Self::I_ADJ)
        .with(Self::KURU_VERB)
        .with(Self::SURU_VERB)
        .with(Self::SPECIAL_SURU_VERB)
        .with(Self::NOUN_VS);

    /// 中間語幹の全集合
    pub(crate) const STEMS: Self = Self::MASU_STEM
        .with(Self::TA_TE_STEM)
        .with(Self::DA_DE_STEM)
        .with(Self::IRREALIS_STEM);

    /// 2つのマスクの和を返します
    #[inline(always)]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// 2つのマスクが交差するかを判定します
    #[inline(always)]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for WordType {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for WordType {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// 辞書エントリの品詞が語種マスクと両立するかを判定します
///
/// エントリの全語義から品詞タグを集め、マスク中のいずれかの語種に
/// 対応するタグがあればtrueを返します。JMDictの短縮コード（`v1`、
/// `v5k`、`adj-i`）とXMLから展開された英語表現（"Ichidan verb" 等）の
/// 両方を受理します。品詞タグを1つも持たないエントリは常にfalseです。
///
/// 慣用句（`exp`）だけのエントリは任意の動詞語種と両立するものとして
/// 扱います。これにより、活用した形の慣用表現も逆変換経由で
/// 見つけられます。
pub fn entry_matches_type(entry: &WordEntry, word_type: WordType) -> bool {
    let mut has_tags = false;
    let mut expression_only = true;

    for tag in entry.pos_tags() {
        has_tags = true;

        let is_expression = tag == "exp" || tag.contains("expressions");
        if !is_expression {
            expression_only = false;
        }

        if word_type.intersects(WordType::ICHIDAN_VERB)
            && (tag.starts_with("v1") || tag.contains("Ichidan verb"))
        {
            return true;
        }
        if word_type.intersects(WordType::GODAN_VERB)
            && (tag.starts_with("v5") || tag.starts_with("v4") || tag.contains("Godan verb"))
        {
            return true;
        }
        if word_type.intersects(WordType::I_ADJ)
            && (tag.starts_with("adj-i") || tag.to_lowercase().contains("adjective"))
        {
            return true;
        }
        if word_type.intersects(WordType::KURU_VERB)
            && (tag.starts_with("vk") || tag.to_lowercase().contains("kuru verb"))
        {
            return true;
        }
        if word_type.intersects(WordType::SURU_VERB)
            && (tag.starts_with("vs-i")
                || tag.starts_with("vs-s")
                || tag.to_lowercase().contains("suru verb"))
        {
            return true;
        }
        if word_type.intersects(WordType::SPECIAL_SURU_VERB)
            && (tag.starts_with("vs-s") || tag.starts_with("vz"))
        {
            return true;
        }
        if word_type.intersects(WordType::NOUN_VS)
            && (tag.starts_with("vs")
                || (tag.contains("noun or participle") && tag.contains("suru")))
        {
            return true;
        }
    }

    // Expression-only entries pass for any verb word class
    has_tags
        && expression_only
        && word_type.intersects(
            WordType::ICHIDAN_VERB
                .with(WordType::GODAN_VERB)
                .with(WordType::KURU_VERB)
                .with(WordType::SURU_VERB)
                .with(WordType::SPECIAL_SURU_VERB),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Sense;

    fn entry_with_pos(tags: &[&str]) -> WordEntry {
        WordEntry {
            senses: vec![Sense {
                pos_tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_short_codes() {
        assert!(entry_matches_type(
            &entry_with_pos(&["v1"]),
            WordType::ICHIDAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["v5k"]),
            WordType::GODAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["v4b"]),
            WordType::GODAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["adj-i"]),
            WordType::I_ADJ
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["vk"]),
            WordType::KURU_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["vs-i"]),
            WordType::SURU_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["vz"]),
            WordType::SPECIAL_SURU_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["n", "vs"]),
            WordType::NOUN_VS
        ));
    }

    #[test]
    fn test_expanded_phrases() {
        assert!(entry_matches_type(
            &entry_with_pos(&["Ichidan verb"]),
            WordType::ICHIDAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["Godan verb with 'ku' ending"]),
            WordType::GODAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["noun or participle which takes the aux. verb suru"]),
            WordType::NOUN_VS
        ));
    }

    #[test]
    fn test_mismatches() {
        assert!(!entry_matches_type(
            &entry_with_pos(&["n"]),
            WordType::ICHIDAN_VERB
        ));
        assert!(!entry_matches_type(
            &entry_with_pos(&["v1"]),
            WordType::GODAN_VERB
        ));
        // Entries without POS tags never match
        assert!(!entry_matches_type(
            &WordEntry::default(),
            WordType::ICHIDAN_VERB
        ));
    }

    #[test]
    fn test_expression_only_matches_any_verb() {
        let entry = entry_with_pos(&["exp"]);
        assert!(entry_matches_type(&entry, WordType::GODAN_VERB));
        assert!(entry_matches_type(&entry, WordType::ICHIDAN_VERB));
        assert!(!entry_matches_type(&entry, WordType::I_ADJ));
    }

    #[test]
    fn test_mask_operations() {
        let mask = WordType::ICHIDAN_VERB | WordType::KURU_VERB;
        assert!(mask.intersects(WordType::KURU_VERB));
        assert!(!mask.intersects(WordType::GODAN_VERB));
        assert!(WordType::ALL.intersects(WordType::NOUN_VS));
        assert!(!WordType::ALL.intersects(WordType::MASU_STEM));
    }
}
