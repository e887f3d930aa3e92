//! 検索語のバリエーション生成
//!
//! 長音記号（ー）の母音展開と、旧字体から新字体への置換を提供します。
//! どちらも辞書の見出しに存在しない表記を見出しに引き当てるための
//! 変形で、検索ループが照合に失敗したときの代替候補として使われます。

use std::borrow::Cow;
use std::sync::LazyLock;

use hashbrown::HashMap;

/// 長音記号の置換先（あ行の母音）
const CHOON_VOWELS: [char; 5] = ['あ', 'い', 'う', 'え', 'お'];

/// 旧字体から新字体への対応表
///
/// 常用される置換のみを収録しています。この表は起動後に変更されません。
static KYUUJITAI: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    const PAIRS: &[(char, char)] = &[
        ('亞', '亜'),
        ('惡', '悪'),
        ('壓', '圧'),
        ('圍', '囲'),
        ('醫', '医'),
        ('爲', '為'),
        ('壹', '壱'),
        ('飮', '飲'),
        ('隱', '隠'),
        ('營', '営'),
        ('榮', '栄'),
        ('衞', '衛'),
        ('驛', '駅'),
        ('圓', '円'),
        ('應', '応'),
        ('櫻', '桜'),
        ('奧', '奥'),
        ('橫', '横'),
        ('溫', '温'),
        ('假', '仮'),
        ('價', '価'),
        ('畫', '画'),
        ('會', '会'),
        ('壞', '壊'),
        ('懷', '懐'),
        ('學', '学'),
        ('樂', '楽'),
        ('勸', '勧'),
        ('觀', '観'),
        ('歸', '帰'),
        ('氣', '気'),
        ('舊', '旧'),
        ('擧', '挙'),
        ('據', '拠'),
        ('虛', '虚'),
        ('狹', '狭'),
        ('區', '区'),
        ('驅', '駆'),
        ('經', '経'),
        ('繼', '継'),
        ('縣', '県'),
        ('劍', '剣'),
        ('檢', '検'),
        ('權', '権'),
        ('獻', '献'),
        ('嚴', '厳'),
        ('效', '効'),
        ('廣', '広'),
        ('鑛', '鉱'),
        ('號', '号'),
        ('濟', '済'),
        ('齋', '斎'),
        ('雜', '雑'),
        ('參', '参'),
        ('絲', '糸'),
        ('辭', '辞'),
        ('實', '実'),
        ('寫', '写'),
        ('釋', '釈'),
        ('壽', '寿'),
        ('收', '収'),
        ('從', '従'),
        ('澁', '渋'),
        ('獸', '獣'),
        ('縱', '縦'),
        ('敍', '叙'),
        ('燒', '焼'),
        ('證', '証'),
        ('乘', '乗'),
        ('剩', '剰'),
        ('眞', '真'),
        ('盡', '尽'),
        ('圖', '図'),
        ('粹', '粋'),
        ('醉', '酔'),
        ('聲', '声'),
        ('靜', '静'),
        ('竊', '窃'),
        ('淺', '浅'),
        ('戰', '戦'),
        ('錢', '銭'),
        ('禪', '禅'),
        ('雙', '双'),
        ('壯', '壮'),
        ('爭', '争'),
        ('莊', '荘'),
        ('藏', '蔵'),
        ('體', '体'),
        ('對', '対'),
        ('帶', '帯'),
        ('瀧', '滝'),
        ('擇', '択'),
        ('單', '単'),
        ('團', '団'),
        ('晝', '昼'),
        ('蟲', '虫'),
        ('廳', '庁'),
        ('鐵', '鉄'),
        ('點', '点'),
        ('傳', '伝'),
        ('當', '当'),
        ('黨', '党'),
        ('獨', '独'),
        ('讀', '読'),
        ('腦', '脳'),
        ('廢', '廃'),
        ('賣', '売'),
        ('發', '発'),
        ('佛', '仏'),
        ('變', '変'),
        ('辨', '弁'),
        ('豐', '豊'),
        ('滿', '満'),
        ('藥', '薬'),
        ('餘', '余'),
        ('與', '与'),
        ('譽', '誉'),
        ('來', '来'),
        ('亂', '乱'),
        ('兩', '両'),
        ('禮', '礼'),
        ('勞', '労'),
        ('樓', '楼'),
        ('灣', '湾'),
        ('國', '国'),
    ];
    PAIRS.iter().copied().collect()
});

/// 長音記号を母音に展開した候補を返します
///
/// 入力に長音記号（ー、U+30FC）が含まれない場合は空のベクターを
/// 返します。含まれる場合は、最初の1箇所だけをあ・い・う・え・お
/// それぞれに置き換えた5つの候補を返します。2箇所目以降は展開しません
/// （呼び出し側が絞り込んだ入力で再帰的に展開します）。
///
/// # 例
///
/// ```
/// use yomitoki::expand_choon;
///
/// let variants = expand_choon("ラーメン");
/// assert_eq!(variants.len(), 5);
/// assert!(variants.contains(&"ラあメン".to_string()));
/// assert!(expand_choon("らめん").is_empty());
/// ```
pub fn expand_choon(text: &str) -> Vec<String> {
    let Some(byte_pos) = text.find('ー') else {
        return Vec::new();
    };

    let head = &text[..byte_pos];
    let tail = &text[byte_pos + 'ー'.len_utf8()..];

    CHOON_VOWELS
        .iter()
        .map(|&vowel| {
            let mut variant = String::with_capacity(text.len());
            variant.push_str(head);
            variant.push(vowel);
            variant.push_str(tail);
            variant
        })
        .collect()
}

/// 旧字体を新字体に置換します
///
/// 対応表にある文字を1文字ずつ置き換えます。置換が1つも起きなかった
/// 場合は入力をそのまま借用で返すため、呼び出し側は
/// [`Cow::Owned`](std::borrow::Cow::Owned) かどうかで変化の有無を
/// 判定できます。
///
/// # 例
///
/// ```
/// use yomitoki::kyuujitai_to_shinjitai;
///
/// assert_eq!(kyuujitai_to_shinjitai("舊體國"), "旧体国");
/// assert_eq!(kyuujitai_to_shinjitai("日本語"), "日本語");
/// ```
pub fn kyuujitai_to_shinjitai(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| KYUUJITAI.contains_key(&c)) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|c| KYUUJITAI.get(&c).copied().unwrap_or(c))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_choon_produces_five_variants() {
        let variants = expand_choon("コーヒー");
        assert_eq!(variants.len(), 5);
        // Only the first occurrence is expanded
        assert_eq!(variants[0], "コあヒー");
        assert_eq!(variants[2], "コうヒー");
        assert_eq!(variants[4], "コおヒー");

        let unique: std::collections::HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_expand_choon_without_mark() {
        assert!(expand_choon("たべる").is_empty());
        assert!(expand_choon("").is_empty());
    }

    #[test]
    fn test_kyuujitai_conversion() {
        assert_eq!(kyuujitai_to_shinjitai("舊體國"), "旧体国");
        assert_eq!(kyuujitai_to_shinjitai("學生の體"), "学生の体");
    }

    #[test]
    fn test_kyuujitai_untouched_is_borrowed() {
        assert!(matches!(
            kyuujitai_to_shinjitai("現代の字"),
            Cow::Borrowed(_)
        ));
        assert!(matches!(kyuujitai_to_shinjitai("舊"), Cow::Owned(_)));
    }
}
