//! End-to-end processing: segmentation, tokenization, parsing and
//! post-processing

mod model;

pub use model::{CommandModel, ParsingModel, INPUT_PLACEHOLDER, MODEL_PLACEHOLDER, OUTPUT_PLACEHOLDER};

use crate::config::PipelineConfig;
use crate::conllu::{Document, SentenceRecord};
use crate::error::Result;
use crate::language;
use crate::lexicon::Lexicon;
use crate::postprocess::{PostProcessor, Report, UsualForms};
use crate::segmenter::Segmenter;
use crate::sid::next_name;
use crate::tokenizer::Tokenizer;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sentences below this count are tokenized on the calling thread
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 64;

/// Configured processing chain sharing one lexicon
#[derive(Debug, Clone)]
pub struct Pipeline {
    lexicon: Arc<Lexicon>,
    usual: UsualForms,
    config: PipelineConfig,
}

impl Pipeline {
    /// Pipeline with the built-in usual-forms table
    pub fn new(lexicon: Arc<Lexicon>, config: PipelineConfig) -> Self {
        Self {
            lexicon,
            usual: UsualForms::portuguese(),
            config,
        }
    }

    pub fn with_usual_forms(mut self, usual: UsualForms) -> Self {
        self.usual = usual;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Split raw text into sentences
    pub fn segment(&self, text: &str) -> Vec<String> {
        Segmenter::portuguese(self.config.segmenter.clone()).segment(text)
    }

    /// Tokenize one sentence per item into a skeleton document
    ///
    /// Every input sentence consumes the next identifier from the model,
    /// dropped sentences included, so identifiers follow input positions.
    pub fn tokenize<S: AsRef<str> + Sync>(&self, sentences: &[S]) -> Document {
        let mut sids = Vec::with_capacity(sentences.len());
        let mut sid = self.config.tokenizer.sid_model.clone();
        for _ in sentences {
            sid = next_name(&sid);
            sids.push(sid.clone());
        }

        let records = self.tokenize_all(sentences, &sids);

        let mut document = Document::new();
        let mut dropped = 0;
        for record in records {
            match record {
                Some(record) => {
                    document.push(record);
                }
                None => dropped += 1,
            }
        }
        log::info!(
            "Tokenized {} sentences ({} tokens), dropped {}",
            document.sentence_count(),
            document.token_count(),
            dropped
        );
        document
    }

    fn tokenize_one(&self, sentence: &str, sid: &str) -> Option<SentenceRecord> {
        Tokenizer::with_tables(&self.lexicon, language::portuguese()).process_sentence(
            sentence,
            sid,
            &self.config.tokenizer,
        )
    }

    #[cfg(feature = "parallel")]
    fn tokenize_all<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
        sids: &[String],
    ) -> Vec<Option<SentenceRecord>> {
        if sentences.len() < PARALLEL_THRESHOLD {
            return self.tokenize_sequential(sentences, sids);
        }

        let threads = match self.config.performance.worker_threads {
            0 => num_cpus::get(),
            n => n,
        };
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("portparser-worker-{i}"))
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                log::warn!("Thread pool unavailable ({e}), tokenizing sequentially");
                return self.tokenize_sequential(sentences, sids);
            }
        };

        pool.install(|| {
            sentences
                .par_iter()
                .zip(sids.par_iter())
                .map(|(sentence, sid)| self.tokenize_one(sentence.as_ref(), sid))
                .collect()
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn tokenize_all<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
        sids: &[String],
    ) -> Vec<Option<SentenceRecord>> {
        self.tokenize_sequential(sentences, sids)
    }

    fn tokenize_sequential<S: AsRef<str>>(
        &self,
        sentences: &[S],
        sids: &[String],
    ) -> Vec<Option<SentenceRecord>> {
        sentences
            .iter()
            .zip(sids)
            .map(|(sentence, sid)| self.tokenize_one(sentence.as_ref(), sid))
            .collect()
    }

    /// Model input: no file header, deprel-side fields blanked
    pub fn skeleton(&self, document: &Document) -> String {
        document.serialize(false, true)
    }

    /// Correct lemmas and features, then tag sentences with their changes
    pub fn postprocess(&self, document: &mut Document) -> Report {
        let report =
            PostProcessor::new(&self.lexicon, &self.usual, self.config.postprocess).run(document);
        document.propagate_sentence_tags();
        report
    }

    /// Run the whole chain on text with one sentence per line
    ///
    /// A model failure aborts the run.
    pub fn parse(&self, text: &str, model: &dyn ParsingModel) -> Result<(Document, Report)> {
        let sentences: Vec<&str> = text.lines().collect();
        self.parse_sentences(&sentences, model)
    }

    /// Run the whole chain on raw text, segmenting it first
    pub fn parse_segmented(&self, text: &str, model: &dyn ParsingModel) -> Result<(Document, Report)> {
        let sentences = self.segment(text);
        self.parse_sentences(&sentences, model)
    }

    fn parse_sentences<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
        model: &dyn ParsingModel,
    ) -> Result<(Document, Report)> {
        let skeleton = self.skeleton(&self.tokenize(sentences));
        log::info!("Running parsing model {}", model.name());
        let predicted = model.predict(&skeleton)?;
        let mut document = Document::parse(&predicted)?;
        let report = self.postprocess(&mut document);
        Ok((document, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenizerConfig;
    use crate::error::Error;

    struct EchoModel;

    impl ParsingModel for EchoModel {
        fn predict(&self, skeleton: &str) -> Result<String> {
            Ok(skeleton.to_string())
        }
    }

    struct BrokenModel;

    impl ParsingModel for BrokenModel {
        fn predict(&self, _skeleton: &str) -> Result<String> {
            Err(Error::ExternalTool {
                tool: "broken".to_string(),
                status: "exit status: 1".to_string(),
            })
        }
    }

    fn pipeline() -> Pipeline {
        Pipeline::new(Arc::new(Lexicon::default()), PipelineConfig::default())
    }

    #[test]
    fn test_sentence_ids_follow_input_positions() {
        let document = pipeline().tokenize(&["Primeira frase.", "()", "Terceira frase."]);
        assert_eq!(document.all_ids(), vec!["S000001", "S000003"]);
    }

    #[test]
    fn test_custom_sid_model() {
        let config = PipelineConfig {
            tokenizer: TokenizerConfig {
                sid_model: "doc-0099".to_string(),
                ..TokenizerConfig::default()
            },
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(Arc::new(Lexicon::default()), config);
        let document = pipeline.tokenize(&["Uma frase."]);
        assert_eq!(document.all_ids(), vec!["doc-0100"]);
    }

    #[test]
    fn test_many_sentences_keep_order() {
        let sentences: Vec<String> = (0..200).map(|i| format!("Frase número {i}.")).collect();
        let document = pipeline().tokenize(&sentences);
        assert_eq!(document.sentence_count(), 200);
        assert_eq!(document.get_by_index(0).unwrap().text, "Frase número 0.");
        assert_eq!(document.get_by_index(199).unwrap().text, "Frase número 199.");
        assert_eq!(document.id_at(199), Some("S000200"));
    }

    #[test]
    fn test_skeleton() {
        let pipeline = pipeline();
        let document = pipeline.tokenize(&["Olá, mundo!"]);
        let skeleton = pipeline.skeleton(&document);
        assert!(skeleton.starts_with("# sent_id = S000001\n# text = Olá, mundo!\n"));
        assert!(skeleton.contains("1\tOlá\t_\t_\t_\t_\t_\t_\t_\tSpaceAfter=No\n"));
        assert!(skeleton.ends_with("\n\n"));
    }

    #[test]
    fn test_segment() {
        let sentences = pipeline().segment("Primeira frase. Segunda frase.");
        assert_eq!(sentences, vec!["Primeira frase.", "Segunda frase."]);
    }

    #[test]
    fn test_parse_with_model() {
        let (document, report) = pipeline().parse("Olá, mundo!\n", &EchoModel).unwrap();
        assert_eq!(document.sentence_count(), 1);
        assert_eq!(document.token_count(), 4);
        assert!(report.is_empty());
    }

    #[test]
    fn test_parse_segmented() {
        let (document, _) = pipeline()
            .parse_segmented("Primeira frase. Segunda frase.", &EchoModel)
            .unwrap();
        assert_eq!(document.all_ids(), vec!["S000001", "S000002"]);
    }

    #[test]
    fn test_model_failure_aborts() {
        let result = pipeline().parse("Olá.\n", &BrokenModel);
        assert!(matches!(result, Err(Error::ExternalTool { .. })));
    }
}
