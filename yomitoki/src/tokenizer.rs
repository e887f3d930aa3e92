//! 貪欲最長一致のトークナイザー
//!
//! このモジュールは、辞書引きと活用逆変換に基づくメイントークナイザー
//! を提供します。入力を正規化した後、各位置で[`word_search`]を呼び、
//! 最良の一致をトークンとして切り出して次の位置へ進みます。一致が
//! なければその位置の1文字を辞書情報なしのトークンとして進めます。
//!
//! # 主要な構造体
//!
//! - [`Tokenizer`]: 辞書を保持するトークナイザー本体
//! - [`Worker`]: トークナイザーのワーカー。実際の処理と結果を持つ
//!
//! # 例
//!
//! ```no_run
//! use std::sync::Arc;
//! use yomitoki::{Dictionary, MemoryDictionary, Tokenizer};
//!
//! # fn main() -> yomitoki::Result<()> {
//! let dict = MemoryDictionary::from_json(std::fs::File::open("jmdict.json")?)?;
//! let tokenizer = Tokenizer::new(Arc::new(dict));
//! let mut worker = tokenizer.new_worker();
//!
//! worker.reset_sentence("私は学生です");
//! worker.tokenize();
//!
//! for token in worker.token_iter() {
//!     println!("{}", token.surface());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`word_search`]: crate::word_search

pub mod worker;

use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::token::TokenBuf;
use crate::tokenizer::worker::Worker;

/// トークナイザーの既定の最大結果数
///
/// [`word_search`](crate::word_search)単体の既定値より大きめです。
/// 最長一致の選択では候補を広めに集めたほうが並べ替えが安定する
/// ためです。
pub const DEFAULT_TOKENIZER_MAX_RESULTS: usize = 12;

/// 辞書引きと活用逆変換でトークン化を行うトークナイザー
///
/// 辞書への共有参照を保持し、複数の[`Worker`]を生成して並列に使う
/// ことができます。トークナイザー自身は呼び出しごとの状態を持たない
/// ため、スレッド安全な辞書と組み合わせれば複数スレッドから同時に
/// 利用できます。
#[derive(Clone)]
pub struct Tokenizer {
    dict: Arc<dyn Dictionary>,
    max_results: usize,
}

impl Tokenizer {
    /// 新しいトークナイザーを作成します。
    ///
    /// # 引数
    ///
    /// * `dict` - 検索に使う辞書への共有参照
    ///
    /// # 例
    ///
    /// ```
    /// use std::sync::Arc;
    /// use yomitoki::{MemoryDictionary, Tokenizer};
    ///
    /// let dict = MemoryDictionary::from_entries(vec![Default::default()]);
    /// let tokenizer = Tokenizer::new(Arc::new(dict));
    /// ```
    pub fn new(dict: Arc<dyn Dictionary>) -> Self {
        Self {
            dict,
            max_results: DEFAULT_TOKENIZER_MAX_RESULTS,
        }
    }

    /// 各位置の検索で集める結果の最大数を指定します。
    ///
    /// `0` を指定した場合は `1` として扱います。
    ///
    /// # 戻り値
    ///
    /// 設定が適用された`Tokenizer`インスタンス
    pub const fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = if max_results == 0 { 1 } else { max_results };
        self
    }

    /// 辞書への参照を取得します。
    #[inline(always)]
    pub(crate) fn dictionary(&self) -> &dyn Dictionary {
        &*self.dict
    }

    /// 設定されている最大結果数を取得します。
    #[inline(always)]
    pub(crate) const fn search_max_results(&self) -> usize {
        self.max_results
    }

    /// 新しいワーカーを作成します。
    ///
    /// ワーカーは実際のトークン化処理を実行し、内部バッファを文の
    /// 間で再利用します。各ワーカーは独立した状態を持つため、複数の
    /// ワーカーを並列に使って同時に複数の文を処理できます。
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }
}

/// テキストをトークン化します
///
/// [`Tokenizer`]と[`Worker`]を内部で組み立てる簡易入口です。同じ
/// 辞書で多数の文を処理する場合は、ワーカーを作って使い回すほうが
/// 割り当てが少なくて済みます。
///
/// 辞書が途中で利用できなくなった場合、その位置は辞書情報なしの
/// 1文字トークンとして出力され、処理は継続します。
///
/// # 例
///
/// ```no_run
/// use std::sync::Arc;
/// use yomitoki::{MemoryDictionary, tokenize};
///
/// # fn main() -> yomitoki::Result<()> {
/// let dict = MemoryDictionary::from_json(std::fs::File::open("jmdict.json")?)?;
/// let tokens = tokenize("食べました", Arc::new(dict), 12);
/// for token in &tokens {
///     println!("{} ({}..{})", token.surface, token.range_utf16.start, token.range_utf16.end);
/// }
/// # Ok(())
/// # }
/// ```
pub fn tokenize<S>(input: S, dict: Arc<dyn Dictionary>, max_results: usize) -> Vec<TokenBuf>
where
    S: AsRef<str>,
{
    let tokenizer = Tokenizer::new(dict).max_results(max_results);
    let mut worker = tokenizer.new_worker();
    worker.reset_sentence(input);
    worker.tokenize();
    worker.token_iter().map(|token| token.to_buf()).collect()
}
