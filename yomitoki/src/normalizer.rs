//! 入力テキストの正規化
//!
//! このモジュールは、辞書引きのための入力正規化を提供します。半角数字の
//! 全角化、Unicode NFC正規化、ゼロ幅非接合子（ZWNJ）の除去を行い、
//! 正規化後の各位置から元の入力のUTF-16オフセットへの対応表を構築します。
//!
//! マッチングは正規化後の文字列に対して行われますが、トークンの位置は
//! 元の入力のUTF-16コードユニットで報告する必要があります。NFCとZWNJ
//! 除去をまたいでこれを損失なく行うには、安定したオフセット表が唯一の
//! 方法です。

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// ゼロ幅非接合子
///
/// Google Docsなどが文字の間に挿入することがあります。
const ZWNJ: char = '\u{200C}';

/// 正規化の動作を制御するオプション
///
/// # フィールド
///
/// * `full_width_digits` - 半角数字（0-9）を全角（０-９）に変換します
/// * `strip_zwnj` - ゼロ幅非接合子（U+200C）を除去します
#[derive(Clone, Debug)]
pub struct NormalizeOptions {
    /// 半角数字を全角数字に変換するかどうか
    pub full_width_digits: bool,
    /// ゼロ幅非接合子を除去するかどうか
    pub strip_zwnj: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            full_width_digits: true,
            strip_zwnj: true,
        }
    }
}

/// 入力テキストを既定のオプションで正規化します
///
/// 戻り値は `(正規化後の文字列, オフセット表)` の組です。オフセット表の
/// `i` 番目の要素は、正規化後のUTF-16コードユニット位置 `i` に対応する
/// 元の入力のUTF-16オフセットです。末尾には、最後に残ったコードユニット
/// の直後を指す番兵が1つ追加されるため、表の長さは常に
/// `正規化後のUTF-16長 + 1` になります。
///
/// # 例
///
/// ```
/// use yomitoki::normalize;
///
/// let (normalized, offsets) = normalize("私は1人");
/// assert_eq!(normalized, "私は１人");
/// assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
/// ```
pub fn normalize(input: &str) -> (String, Vec<usize>) {
    normalize_with(input, &NormalizeOptions::default())
}

/// 入力テキストを指定したオプションで正規化します
///
/// 処理は次の順で行われます:
///
/// 1. `full_width_digits` が有効なら半角数字を全角に変換
/// 2. Unicode NFC正規化とオフセット表の構築
/// 3. `strip_zwnj` が有効ならZWNJを除去し、オフセット表を再構築
///
/// # 引数
///
/// * `input` - 正規化する入力文字列
/// * `options` - 正規化オプション
pub fn normalize_with(input: &str, options: &NormalizeOptions) -> (String, Vec<usize>) {
    if input.is_empty() {
        return (String::new(), vec![0]);
    }

    let folded;
    let source = if options.full_width_digits {
        folded = half_to_full_width_num(input);
        folded.as_str()
    } else {
        input
    };

    let (normalized, offsets) = to_normalized(source);

    if options.strip_zwnj {
        do_strip_zwnj(&normalized, &offsets)
    } else {
        (normalized, offsets)
    }
}

/// 半角数字を全角数字に変換します
///
/// U+0030..U+0039 をそれぞれ U+FF10..U+FF19 に写します。UTF-16コード
/// ユニット数は変わらないため、オフセットはこの変換の前後で一致します。
pub(crate) fn half_to_full_width_num(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                // Safe: '０' plus 0..=9 stays within the BMP
                char::from_u32('０' as u32 + (c as u32 - '0' as u32)).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// NFC正規化を行い、UTF-16オフセット表を構築します
///
/// 表の各要素は、正規化後のコードユニット位置に対応する正規化前
/// （全角化後）のUTF-16オフセットです。BMP外の文字はサロゲートペアの
/// 2ユニット分のエントリを持ち、どちらも同じ元オフセットを指します。
/// NFCで合成された文字（例: か + U+3099 → が）は、合成元の列の先頭
/// オフセットを指し、元の列全体の長さだけ元位置を進めます。
fn to_normalized(text: &str) -> (String, Vec<usize>) {
    let normalized: String = text.nfc().collect();

    let mut offsets = Vec::with_capacity(normalized.len() + 1);
    let mut source = text.chars().peekable();
    let mut source_pos = 0usize;

    for c in normalized.chars() {
        for _ in 0..c.len_utf16() {
            offsets.push(source_pos);
        }
        if let Some(&first) = source.peek() {
            source_pos += first.len_utf16();
            source.next();
            if first != c {
                // Composition: swallow the combining marks that were folded
                // into this character.
                while let Some(&mark) = source.peek() {
                    if canonical_combining_class(mark) != 0 {
                        source_pos += mark.len_utf16();
                        source.next();
                    } else {
                        break;
                    }
                }
            }
        }
    }

    // Sentinel: the UTF-16 length of the whole source string
    offsets.push(text.chars().map(char::len_utf16).sum());

    (normalized, offsets)
}

/// ZWNJを除去し、オフセット表を詰め直します
///
/// 残った各コードユニットのエントリは除去前の元オフセットをそのまま
/// 指し、番兵は最後に残ったコードユニットの直後の元オフセットになります。
fn do_strip_zwnj(normalized: &str, offsets: &[usize]) -> (String, Vec<usize>) {
    if !normalized.contains(ZWNJ) {
        return (normalized.to_string(), offsets.to_vec());
    }

    let mut result = String::with_capacity(normalized.len());
    let mut new_offsets = Vec::with_capacity(offsets.len());
    let mut unit = 0usize;
    let mut last = 0usize;

    for c in normalized.chars() {
        let width = c.len_utf16();
        if c != ZWNJ {
            result.push(c);
            new_offsets.extend_from_slice(&offsets[unit..unit + width]);
            last = offsets[unit + width];
        }
        unit += width;
    }

    new_offsets.push(last);
    (result, new_offsets)
}
