//! トークンの結果コンテナ
//!
//! このモジュールは、トークン化の結果として得られるトークンを表現する
//! 型を提供します。トークンは元の入力の中の範囲を指し、辞書エントリと
//! 活用逆変換の理由チェーンを伴うことがあります。
//!
//! 位置はすべて元の入力のUTF-16コードユニットで表されます。正規化や
//! ZWNJ除去をまたいでも、`surface()` は常に元の入力そのものの部分
//! 文字列です。

use std::ops::Range;

use crate::deinflect::Reason;
use crate::entry::WordEntry;
use crate::tokenizer::worker::Worker;

/// トークン化の結果トークン
///
/// このトークンは[`Worker`]への軽量な参照であり、実際のデータは
/// Workerが保持しています。トークンはWorkerが生存している間のみ
/// 有効です。長期保存には[`to_buf`](Self::to_buf)で[`TokenBuf`]に
/// 変換してください。
pub struct Token<'w> {
    worker: &'w Worker,
    index: usize,
}

impl<'w> Token<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker, index: usize) -> Self {
        Self { worker, index }
    }

    /// トークンの表層形（元の入力中の文字列）を取得します。
    ///
    /// Gets the surface string of the token.
    #[inline(always)]
    pub fn surface(&self) -> &'w str {
        &self.worker.input()[self.range_byte()]
    }

    /// トークンのUTF-16コードユニット単位の位置範囲を取得します。
    ///
    /// 範囲は元の入力に対するオフセットです。
    ///
    /// Gets the position range of the token in UTF-16 code units.
    #[inline(always)]
    pub fn range_utf16(&self) -> Range<usize> {
        self.worker.token_inner(self.index).range_utf16.clone()
    }

    /// トークンのバイト単位の位置範囲を取得します。
    ///
    /// Gets the position range of the token in bytes.
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        self.worker.token_inner(self.index).range_byte.clone()
    }

    /// トークンに対応する辞書エントリを取得します。
    ///
    /// 辞書語として引き当てられなかったトークンでは `None` です。
    #[inline(always)]
    pub fn entry(&self) -> Option<&'w WordEntry> {
        self.worker.token_inner(self.index).entry.as_ref()
    }

    /// 表層形を辞書形に戻す変形の理由チェーンを取得します。
    ///
    /// 直接一致したトークンや辞書語でないトークンでは `None` です。
    #[inline(always)]
    pub fn reasons(&self) -> Option<&'w [Vec<Reason>]> {
        self.worker
            .token_inner(self.index)
            .reasons
            .as_deref()
    }

    /// このトークンビューを所有型の[`TokenBuf`]に変換します。
    pub fn to_buf(&self) -> TokenBuf {
        TokenBuf {
            surface: self.surface().to_string(),
            range_utf16: self.range_utf16(),
            range_byte: self.range_byte(),
            entry: self.entry().cloned(),
            reasons: self.reasons().map(<[Vec<Reason>]>::to_vec),
        }
    }
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("surface", &self.surface())
            .field("range_utf16", &self.range_utf16())
            .field("range_byte", &self.range_byte())
            .field("entry", &self.entry().map(|entry| entry.ent_seq))
            .field("reasons", &self.reasons())
            .finish()
    }
}

/// トークンのイテレータ
///
/// トークン化の結果得られたトークン列を順次取得するためのイテレータ
/// です。前方および後方からの走査をサポートしています。
pub struct TokenIter<'w> {
    worker: &'w Worker,
    front: usize,
    back: usize,
}

impl<'w> TokenIter<'w> {
    #[inline(always)]
    pub(crate) fn new(worker: &'w Worker) -> Self {
        let num_tokens = worker.num_tokens();
        Self {
            worker,
            front: 0,
            back: num_tokens,
        }
    }
}

impl<'w> Iterator for TokenIter<'w> {
    type Item = Token<'w>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let token = self.worker.token(self.front);
            self.front += 1;
            Some(token)
        } else {
            None
        }
    }
}

impl<'w> DoubleEndedIterator for TokenIter<'w> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.worker.token(self.back))
        } else {
            None
        }
    }
}

/// 所有型の自己完結したトークン
///
/// [`Token`]の所有型版です。結果の長期保存やスレッド間の受け渡しに
/// 使えます。
#[derive(Clone, Debug)]
pub struct TokenBuf {
    /// トークンの表層形（元の入力中の文字列）
    pub surface: String,

    /// 元の入力に対するUTF-16コードユニット単位の位置範囲
    pub range_utf16: Range<usize>,

    /// 元の入力に対するバイト単位の位置範囲
    pub range_byte: Range<usize>,

    /// 対応する辞書エントリ
    pub entry: Option<WordEntry>,

    /// 活用逆変換の理由チェーン
    pub reasons: Option<Vec<Vec<Reason>>>,
}

impl<'w> From<Token<'w>> for TokenBuf {
    fn from(token: Token<'w>) -> Self {
        token.to_buf()
    }
}
