//! トークン化処理のためのルーチンを提供するモジュール。
//!
//! ワーカーは入力の正規化結果・オフセット表・トークン列といった
//! 内部データ構造を保持し、文の間でバッファを再利用することで不要な
//! メモリ割り当てを避けます。

use std::ops::Range;

use crate::deinflect::Reason;
use crate::entry::WordEntry;
use crate::normalizer::normalize;
use crate::token::{Token, TokenIter};
use crate::tokenizer::Tokenizer;
use crate::word_search::word_search;

/// ワーカーが保持するトークン1つ分のデータ
pub(crate) struct TokenInner {
    /// 元の入力に対するUTF-16コードユニット単位の範囲
    pub(crate) range_utf16: Range<usize>,

    /// 元の入力に対するバイト単位の範囲
    pub(crate) range_byte: Range<usize>,

    /// 引き当てた辞書エントリ
    pub(crate) entry: Option<WordEntry>,

    /// 活用逆変換の理由チェーン
    pub(crate) reasons: Option<Vec<Vec<Reason>>>,
}

/// トークン化処理のためのルーチンを提供する構造体。
///
/// トークン化に使用される内部データ構造を保持し、それらを再利用する
/// ことで不要なメモリ再割り当てを回避します。
///
/// # 例
///
/// ```ignore
/// let mut worker = tokenizer.new_worker();
/// worker.reset_sentence("日本語の文章");
/// worker.tokenize();
/// for token in worker.token_iter() {
///     println!("{}", token.surface());
/// }
/// ```
pub struct Worker {
    pub(crate) tokenizer: Tokenizer,
    input: String,
    normalized: String,
    /// 正規化後のUTF-16位置 → 元の入力のUTF-16オフセット
    offsets: Vec<usize>,
    /// 正規化後のUTF-16位置 → 正規化後のバイト位置
    norm_unit_to_byte: Vec<usize>,
    /// 元の入力のUTF-16位置 → 元の入力のバイト位置
    input_unit_to_byte: Vec<usize>,
    /// word_searchに渡す相対オフセットの作業バッファ
    shifted: Vec<usize>,
    tokens: Vec<TokenInner>,
}

impl Worker {
    /// 新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    /// * `tokenizer` - 使用するトークナイザー
    pub(crate) fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            input: String::new(),
            normalized: String::new(),
            offsets: vec![0],
            norm_unit_to_byte: vec![0],
            input_unit_to_byte: vec![0],
            shifted: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// トークン化する入力文をリセットします。
    ///
    /// 新しい文を設定して正規化し、以前の結果をクリアします。
    ///
    /// # 引数
    ///
    /// * `input` - トークン化する入力文字列
    pub fn reset_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        let input = input.as_ref();

        self.tokens.clear();
        self.input.clear();
        self.input.push_str(input);

        let (normalized, offsets) = normalize(input);
        self.normalized = normalized;
        self.offsets = offsets;

        self.norm_unit_to_byte.clear();
        build_unit_to_byte(&self.normalized, &mut self.norm_unit_to_byte);
        self.input_unit_to_byte.clear();
        build_unit_to_byte(&self.input, &mut self.input_unit_to_byte);
    }

    /// 設定された入力文をトークン化します。
    ///
    /// 結果は内部状態に保存され、[`token`](Self::token)や
    /// [`token_iter`](Self::token_iter)でアクセスできます。空の文が
    /// 設定されている場合は何も行いません。
    ///
    /// 辞書が利用できない位置があっても処理は止まらず、その位置は
    /// 辞書情報なしの1文字トークンになります。
    pub fn tokenize(&mut self) {
        let norm_units = self.norm_unit_to_byte.len() - 1;
        let max_results = self.tokenizer.search_max_results();

        let mut position = 0usize;
        while position < norm_units {
            let base = self.offsets[position];
            self.shifted.clear();
            self.shifted
                .extend(self.offsets[position..].iter().map(|&offset| offset - base));

            let suffix = &self.normalized[self.norm_unit_to_byte[position]..];
            let searched = word_search(
                suffix,
                self.tokenizer.dictionary(),
                max_results,
                &self.shifted,
            );

            let best = match searched {
                Ok(Some(result)) => result.data.into_iter().next(),
                Ok(None) => None,
                Err(error) => {
                    log::warn!("dictionary failed at position {position}, emitting a plain token: {error}");
                    None
                }
            };

            position = match best {
                Some(result) => {
                    let start = base;
                    let end = start + result.match_len;
                    self.push_token(start, end, Some(result.entry), result.reason_chains);

                    // Advance to the normalized position matching the
                    // consumed length of the source input
                    let mut next = position + 1;
                    while next < norm_units && self.offsets[next] < end {
                        next += 1;
                    }
                    if self.offsets[next] < end {
                        next = norm_units;
                    }
                    next
                }
                None => {
                    // No match. Advance a single character without splitting
                    // a surrogate pair.
                    let width = self.normalized[self.norm_unit_to_byte[position]..]
                        .chars()
                        .next()
                        .map(char::len_utf16)
                        .unwrap_or(1);
                    let next = (position + width).min(norm_units);
                    self.push_token(base, self.offsets[next], None, None);
                    next
                }
            };
        }
    }

    fn push_token(
        &mut self,
        start: usize,
        end: usize,
        entry: Option<WordEntry>,
        reasons: Option<Vec<Vec<Reason>>>,
    ) {
        let byte_start = self.input_unit_to_byte[start.min(self.input_unit_to_byte.len() - 1)];
        let byte_end = self.input_unit_to_byte[end.min(self.input_unit_to_byte.len() - 1)];
        self.tokens.push(TokenInner {
            range_utf16: start..end,
            range_byte: byte_start..byte_end,
            entry,
            reasons,
        });
    }

    /// トークン数を返します。
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// 指定した位置のトークンを取得します。
    ///
    /// # パニック
    ///
    /// `index` が範囲外の場合はパニックします。
    #[inline(always)]
    pub fn token(&self, index: usize) -> Token {
        assert!(index < self.tokens.len(), "token index out of range");
        Token::new(self, index)
    }

    /// トークンのイテレータを返します。
    #[inline(always)]
    pub fn token_iter(&self) -> TokenIter {
        TokenIter::new(self)
    }

    /// 元の入力文字列への参照を返します。
    #[inline(always)]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline(always)]
    pub(crate) fn token_inner(&self, index: usize) -> &TokenInner {
        &self.tokens[index]
    }
}

/// UTF-16コードユニット位置からバイト位置への表を構築します
///
/// 表の長さはUTF-16長 + 1で、末尾はバイト長です。サロゲートペアの
/// 2ユニット目は文字の先頭バイトを指します。
fn build_unit_to_byte(text: &str, table: &mut Vec<usize>) {
    for (byte_pos, c) in text.char_indices() {
        for _ in 0..c.len_utf16() {
            table.push(byte_pos);
        }
    }
    table.push(text.len());
}
