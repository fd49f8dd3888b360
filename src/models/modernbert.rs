use candle_core::{DType, Device, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::modernbert::{
    Config, ModernBertForSequenceClassification as CandleModernBertForSequenceClassification,
};
use serde::Deserialize;
use std::collections::HashMap;
use tokenizers::Tokenizer;

use crate::error::{PipelineError, Result};
use crate::loaders::{HfLoader, TokenizerLoader};
use crate::pipelines::sentiment::pipeline::SentimentResult;

/// Available ModernBERT model sizes.
#[derive(Debug, Clone, Copy)]
pub enum ModernBertSize {
    /// Base model (~150M parameters).
    Base,
    /// Large model (~400M parameters).
    Large,
}

impl ModernBertSize {
    fn repo_id(&self) -> &'static str {
        match self {
            ModernBertSize::Base => "clapAI/modernBERT-base-multilingual-sentiment",
            ModernBertSize::Large => "clapAI/modernBERT-large-multilingual-sentiment",
        }
    }
}

impl std::fmt::Display for ModernBertSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModernBertSize::Base => "modernbert-base",
            ModernBertSize::Large => "modernbert-large",
        };
        write!(f, "{name}")
    }
}

impl crate::pipelines::cache::ModelOptions for ModernBertSize {
    fn cache_key(&self) -> String {
        self.to_string()
    }
}

/// ModernBERT with a sequence-classification head, fine-tuned for sentiment.
pub struct SentimentModernBertModel {
    model: CandleModernBertForSequenceClassification,
    device: Device,
    id2label: HashMap<String, String>,
}

impl SentimentModernBertModel {
    pub fn new(size: ModernBertSize, device: Device) -> Result<Self> {
        let (config, vb, id2label) = load_classifier_model(size.repo_id(), &device)?;
        let model = CandleModernBertForSequenceClassification::load(vb, &config)?;

        Ok(Self {
            model,
            device,
            id2label,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn get_tokenizer(size: ModernBertSize) -> Result<Tokenizer> {
        TokenizerLoader::new(size.repo_id()).load()
    }
}

impl crate::pipelines::sentiment::model::SentimentModel for SentimentModernBertModel {
    type Options = ModernBertSize;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        SentimentModernBertModel::new(options, device)
    }

    fn predict_with_score(&self, tokenizer: &Tokenizer, text: &str) -> Result<SentimentResult> {
        let tokens = tokenizer.encode(text, true).map_err(|e| {
            PipelineError::Tokenization(format!(
                "Tokenization failed on '{}': {}",
                &text.chars().take(50).collect::<String>(),
                e
            ))
        })?;

        let input_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = self.model.forward(&input_ids, &attention_mask)?;
        let pred_id = logits.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()?;

        let probs = softmax(&logits, D::Minus1)?;
        let probs_vec = probs.squeeze(0)?.to_vec1::<f32>()?;
        let score = probs_vec.get(pred_id as usize).copied().unwrap_or(0.0);

        let available_labels: Vec<String> = self.id2label.keys().cloned().collect();
        let label = self
            .id2label
            .get(&pred_id.to_string())
            .ok_or_else(|| {
                PipelineError::Unexpected(format!(
                    "Predicted label ID {} not in id2label. Available: {}",
                    pred_id,
                    available_labels.join(", ")
                ))
            })?
            .clone();

        Ok(SentimentResult { label, score })
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        Self::get_tokenizer(options)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

#[derive(Deserialize)]
struct ClassifierConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
    #[serde(default)]
    label2id: HashMap<String, u32>,
}

fn patch_config_num_labels(config: &mut Config, num_labels: usize) {
    use candle_transformers::models::modernbert::{ClassifierConfig, ClassifierPooling};

    if config.classifier_config.is_none()
        || config
            .classifier_config
            .as_ref()
            .map(|c| c.id2label.len())
            .unwrap_or(0)
            != num_labels
    {
        let id2label: HashMap<String, String> = (0..num_labels)
            .map(|i| (i.to_string(), format!("label_{i}")))
            .collect();
        let label2id: HashMap<String, String> = id2label
            .iter()
            .map(|(k, v)| (v.clone(), k.clone()))
            .collect();

        config.classifier_config = Some(ClassifierConfig {
            id2label,
            label2id,
            classifier_pooling: ClassifierPooling::default(),
        });
    }
}

fn load_classifier_model(
    repo_id: &str,
    device: &Device,
) -> Result<(Config, VarBuilder<'static>, HashMap<String, String>)> {
    let config_path = HfLoader::new(repo_id, "config.json").load()?;
    let weights_path = HfLoader::new(repo_id, "model.safetensors")
        .load()
        .or_else(|_| HfLoader::new(repo_id, "pytorch_model.bin").load())?;

    let config_str = std::fs::read_to_string(&config_path)?;
    let mut config: Config = serde_json::from_str(&config_str)?;
    let class_cfg: ClassifierConfigJson = serde_json::from_str(&config_str)?;

    let num_labels = class_cfg.label2id.len().max(class_cfg.id2label.len());
    patch_config_num_labels(&mut config, num_labels);

    let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
        unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? }
    } else {
        VarBuilder::from_pth(&weights_path, DType::F32, device)?
    };

    Ok((config, vb, class_cfg.id2label))
}
