//! 辞書エントリのデータモデル
//!
//! JMDict相当のデータから構成される辞書エントリを表現する型を提供します。
//! エントリは漢字表記・かな読み・語義の3層からなり、読みには使用頻度
//! タグ（`ichi1`、`news1`、`nf12` など）と表記情報タグ（`ok`、`rk`、
//! `iK` など）が付随します。
//!
//! 検索時には、照合キーとかな折りたたみの上で一致した読みに
//! `match_range` が設定されます。優先度の算出はこの印の付いた読みに
//! 対してのみ行われます。

use serde::{Deserialize, Serialize};

/// 漢字表記
///
/// エントリの漢字見出しを1つ表します。
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct KanjiReading {
    /// 表記文字列
    pub text: String,

    /// 使用頻度タグ（`ichi1`、`news2`、`nf07` など）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority: Vec<String>,

    /// 表記情報タグ（`rK`、`sK`、`iK`、`ateji` など）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info: Vec<String>,

    /// この表記が照合キーと一致した範囲
    ///
    /// 辞書層が設定します。一致した場合は `(0, 表記の文字数)` です。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_range: Option<(usize, usize)>,

    /// この表記が照合対象として有効かどうか
    #[serde(rename = "match", default)]
    pub matched: bool,
}

/// かな読み
///
/// エントリのかな見出しを1つ表します。
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct KanaReading {
    /// 読み文字列
    pub text: String,

    /// 使用頻度タグ
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority: Vec<String>,

    /// 読み情報タグ（`ok`、`rk`、`sk`、`ik`、`gikun` など）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info: Vec<String>,

    /// この読みがどの漢字表記にも対応しないかどうか
    #[serde(default)]
    pub no_kanji: bool,

    /// この読みが照合キーと一致した範囲
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_range: Option<(usize, usize)>,

    /// この読みが照合対象として有効かどうか
    #[serde(rename = "match", default)]
    pub matched: bool,
}

/// 語義の訳語
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Gloss {
    /// 訳語のテキスト
    pub text: String,

    /// 訳語の言語コード（`eng` など）
    #[serde(default = "default_lang")]
    pub lang: String,

    /// 訳語の種別（`lit`、`fig`、`expl` など）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g_type: Option<String>,
}

fn default_lang() -> String {
    "eng".to_string()
}

/// 語義
///
/// 品詞タグと訳語の組を1つ表します。品詞タグはJMDictの短縮コード
/// （`v1`、`adj-i`）と展開済みの英語表現（"Ichidan verb"）の両方の
/// 形で格納されることがあります。
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sense {
    /// エントリ内での語義の順序
    #[serde(default)]
    pub index: usize,

    /// 品詞タグ
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pos_tags: Vec<String>,

    /// 訳語
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glosses: Vec<Gloss>,

    /// 補足情報
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info: Vec<String>,

    /// 分野タグ
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field: Vec<String>,

    /// その他のタグ（`uk` = 通常かな表記 など）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub misc: Vec<String>,

    /// 方言タグ
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dial: Vec<String>,
}

/// 辞書エントリ
///
/// JMDictの1エントリに対応します。
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WordEntry {
    /// 辞書内部のエントリID
    pub entry_id: u32,

    /// JMDictのエントリ連番
    pub ent_seq: u32,

    /// 漢字表記の一覧
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kanji_readings: Vec<KanjiReading>,

    /// かな読みの一覧
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kana_readings: Vec<KanaReading>,

    /// 語義の一覧
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<Sense>,
}

impl WordEntry {
    /// 照合キーと一致した最初のかな読みを返します
    #[inline(always)]
    pub fn matched_kana_reading(&self) -> Option<&KanaReading> {
        self.kana_readings
            .iter()
            .find(|reading| reading.match_range.is_some())
    }

    /// 全語義の品詞タグをひとつのイテレータとして返します
    #[inline(always)]
    pub fn pos_tags(&self) -> impl Iterator<Item = &str> {
        self.senses
            .iter()
            .flat_map(|sense| sense.pos_tags.iter().map(String::as_str))
    }
}
