//! TF-IDF vectorizer for text feature extraction.

use std::collections::{BTreeSet, HashMap};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::ngram::{CharNgramTokenizer, WordNgramTokenizer};
use crate::error::{Result, TwosenseError};
use crate::ml::sparse::SparseVector;

/// Which n-grams a vectorizer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NgramAnalyzer {
    /// Word n-grams over the inclusive range `(min, max)`.
    Word(usize, usize),
    /// Whitespace-bounded character n-grams over the inclusive range `(min, max)`.
    CharWb(usize, usize),
}

impl NgramAnalyzer {
    fn tokenizer(&self) -> Result<Box<dyn Tokenizer>> {
        Ok(match *self {
            NgramAnalyzer::Word(min, max) => Box::new(WordNgramTokenizer::new(min, max)?),
            NgramAnalyzer::CharWb(min, max) => Box::new(CharNgramTokenizer::new(min, max)?),
        })
    }
}

/// TF-IDF vectorizer for text feature extraction.
///
/// Term frequencies are optionally log-scaled (`1 + ln(tf)`), weighted by the
/// smoothed inverse document frequency `ln((1 + N) / (1 + df)) + 1`, and each
/// row is scaled to unit length. Terms unseen during [`fit`](Self::fit) are
/// ignored by [`transform`](Self::transform), so the row width never changes
/// after fitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    analyzer: NgramAnalyzer,
    sublinear_tf: bool,
    /// Vocabulary: term -> column index, assigned in sorted term order.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each column.
    idf: Vec<f64>,
    /// Total number of documents seen during training.
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Create a new, unfitted vectorizer.
    pub fn new(analyzer: NgramAnalyzer, sublinear_tf: bool) -> Self {
        Self {
            analyzer,
            sublinear_tf,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        }
    }

    /// Fit the vectorizer on training documents.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let tokenizer = self.analyzer.tokenizer()?;
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let unique_terms: BTreeSet<String> =
                tokenizer.tokenize(doc.as_ref())?.map(|t| t.text).collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(TwosenseError::data(format!(
                "empty vocabulary for {:?}: training documents contain no terms",
                self.analyzer
            )));
        }

        let mut terms: Vec<(String, usize)> = document_frequency.into_iter().collect();
        terms.sort_unstable();

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (idx, (term, df)) in terms.into_iter().enumerate() {
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();

        Ok(())
    }

    /// Transform documents into unit-length TF-IDF rows.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<SparseVector>> {
        let tokenizer = self.analyzer.tokenizer()?;
        documents
            .iter()
            .map(|doc| self.transform_one(tokenizer.as_ref(), doc.as_ref()))
            .collect()
    }

    fn transform_one(&self, tokenizer: &dyn Tokenizer, document: &str) -> Result<SparseVector> {
        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        for token in tokenizer.tokenize(document)? {
            if let Some(&idx) = self.vocabulary.get(&token.text) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let pairs = counts
            .into_iter()
            .map(|(idx, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (idx, tf * self.idf[idx])
            })
            .collect();

        let mut row = SparseVector::from_pairs(pairs);
        row.l2_normalize();
        Ok(row)
    }

    /// Get the size of the vocabulary (the row width).
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Column index of `term`, if it was seen during fitting.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}
