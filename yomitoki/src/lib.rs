//! # yomitoki
//!
//! yomitokiは、辞書引きと活用逆変換に基づく日本語トークナイザーです。
//!
//! ## 概要
//!
//! このライブラリは、日本語テキストを貪欲最長一致で辞書語の列に分割
//! します。統計的な形態素解析器ではなく、対話的な読解支援ツールの
//! 「引いて、活用を戻す」方式を一括処理向けに実装したものです。
//! 読み上げ補助や注釈付けのパイプラインのように、個々のトークンが
//! 辞書エントリに結び付いていることが重要な用途に向いています。
//!
//! ## 主な機能
//!
//! - **正規化**: NFC正規化・全角数字化・ZWNJ除去と、元入力への
//!   UTF-16オフセット表の構築
//! - **活用逆変換**: 約60種の文法変形を扱う規則表による、辞書形候補の
//!   列挙と理由チェーンの再構成
//! - **表記バリエーション**: 長音記号の母音展開と旧字体の新字体化
//! - **優先度付け**: JMDictの頻度タグに基づく検索結果の並べ替え
//!
//! ## 使用例
//!
//! ```
//! use std::sync::Arc;
//! use yomitoki::{
//!     KanaReading, KanjiReading, MemoryDictionary, Reason, Sense, Tokenizer, WordEntry,
//! };
//!
//! let dict = MemoryDictionary::from_entries(vec![WordEntry {
//!     entry_id: 1,
//!     ent_seq: 1358280,
//!     kanji_readings: vec![KanjiReading {
//!         text: "食べる".to_string(),
//!         ..Default::default()
//!     }],
//!     kana_readings: vec![KanaReading {
//!         text: "たべる".to_string(),
//!         ..Default::default()
//!     }],
//!     senses: vec![Sense {
//!         pos_tags: vec!["v1".to_string()],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! }]);
//!
//! let tokenizer = Tokenizer::new(Arc::new(dict));
//! let mut worker = tokenizer.new_worker();
//!
//! worker.reset_sentence("食べました");
//! worker.tokenize();
//!
//! assert_eq!(worker.num_tokens(), 1);
//! let token = worker.token(0);
//! assert_eq!(token.surface(), "食べました");
//! assert_eq!(token.entry().map(|e| e.ent_seq), Some(1358280));
//! assert_eq!(token.reasons(), Some(&[vec![Reason::PolitePast]][..]));
//! ```

/// 辞書エントリのデータモデル
pub mod entry;

/// エラー型の定義
pub mod errors;

/// 活用逆変換エンジン
pub mod deinflect;

/// 辞書のインターフェースと実装
pub mod dictionary;

/// かな文字のユーティリティ
mod kana;

/// 入力テキストの正規化
pub mod normalizer;

/// 検索結果の優先度付け
mod sorter;

/// トークン型の定義
pub mod token;

/// トークナイザーの実装
pub mod tokenizer;

/// 検索語のバリエーション生成
pub mod variations;

/// 後退しながらの最長一致検索
pub mod word_search;

/// 語種ビットマスクと品詞照合
pub mod word_type;

// Re-exports
pub use deinflect::{deinflect, CandidateWord, Reason};
pub use dictionary::{CachedDictionary, Dictionary, MemoryDictionary};
pub use entry::{Gloss, KanaReading, KanjiReading, Sense, WordEntry};
pub use errors::{Result, YomitokiError};
pub use kana::{ends_in_yoon, kana_to_hiragana};
pub use normalizer::{normalize, normalize_with, NormalizeOptions};
pub use token::{Token, TokenBuf, TokenIter};
pub use tokenizer::worker::Worker;
pub use tokenizer::{tokenize, Tokenizer, DEFAULT_TOKENIZER_MAX_RESULTS};
pub use variations::{expand_choon, kyuujitai_to_shinjitai};
pub use word_search::{word_search, SearchResult, WordResult, DEFAULT_WORD_SEARCH_MAX_RESULTS};
pub use word_type::{entry_matches_type, WordType};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
