//! かな文字のユーティリティ
//!
//! カタカナからひらがなへの変換、拗音の判定、数字列の判定など、
//! 検索ループと辞書引きの双方から使われる文字単位の補助関数を提供します。

/// 拗音の先行文字（きしちにひみりぎじびぴ）
const YOON_START: [char; 11] = [
    'き', 'し', 'ち', 'に', 'ひ', 'み', 'り', 'ぎ', 'じ', 'び', 'ぴ',
];

/// 小書きのや行（ゃゅょ）
const SMALL_Y: [char; 3] = ['ゃ', 'ゅ', 'ょ'];

/// 1文字をカタカナからひらがなに変換します
///
/// 変換対象外の文字はそのまま返します。長音記号（ー）は変換しません。
#[inline(always)]
pub(crate) fn kana_to_hiragana_char(c: char) -> char {
    match c {
        // Katakana proper: shift U+30A1..=U+30F6 down by 0x60
        '\u{30A1}'..='\u{30F6}' => {
            char::from_u32(c as u32 - 0x60).unwrap_or(c)
        }
        '\u{30F7}' => 'わ', // ヷ
        '\u{30F8}' => 'ゐ', // ヸ
        '\u{30F9}' => 'ゑ', // ヹ
        '\u{30FA}' => 'を', // ヺ
        _ => c,
    }
}

/// カタカナをひらがなに変換します
///
/// 文字列中のカタカナをひらがなに置き換えた新しい文字列を返します。
/// 濁点付きのワ行（ヷヸヹヺ）は清音のひらがな（わゐゑを）に落とします。
/// 長音記号（ー、U+30FC）はそのまま残ります。
///
/// この変換は冪等です: `kana_to_hiragana(kana_to_hiragana(x)) == kana_to_hiragana(x)`。
///
/// # 例
///
/// ```
/// use yomitoki::kana_to_hiragana;
///
/// assert_eq!(kana_to_hiragana("タベル"), "たべる");
/// assert_eq!(kana_to_hiragana("ラーメン"), "らーめん");
/// ```
pub fn kana_to_hiragana(text: &str) -> String {
    text.chars().map(kana_to_hiragana_char).collect()
}

/// 入力が拗音（きゃ、しゅ、ちょ 等）で終わるかを判定します
///
/// 末尾の文字が小書きのや行（ゃゅょ）で、その直前が拗音の先行文字で
/// ある場合にtrueを返します。検索ループが後退するとき、二重音字を
/// 分断しないよう2文字戻るかどうかの判断に使われます。
///
/// # 例
///
/// ```
/// use yomitoki::ends_in_yoon;
///
/// assert!(ends_in_yoon("きゃ"));
/// assert!(ends_in_yoon("でんしゃ"));
/// assert!(!ends_in_yoon("かあ"));
/// assert!(!ends_in_yoon("ゃ"));
/// ```
pub fn ends_in_yoon(input: &str) -> bool {
    let mut iter = input.chars().rev();
    let (Some(last), Some(second_last)) = (iter.next(), iter.next()) else {
        return false;
    };
    SMALL_Y.contains(&last) && YOON_START.contains(&second_last)
}

/// 文字列が数字・桁区切り・小数点のみで構成されるかを判定します
///
/// 半角・全角の数字とカンマ・ピリオド、および句読点形（、。）を
/// 数値の一部とみなします。数字列の途中で辞書引きを続けても意味が
/// ないため、検索ループの打ち切り判定に使われます。
pub(crate) fn is_numeric_run(input: &str) -> bool {
    !input.is_empty()
        && input.chars().all(|c| {
            matches!(c,
                '0'..='9'
                | '０'..='９'
                | ',' | '.'
                | '，' | '．'
                | '、' | '。'
            )
        })
}
