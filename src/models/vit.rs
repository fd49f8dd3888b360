use candle_core::{DType, Device, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::vit::{Config, Model as CandleVitModel};
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{PipelineError, Result};
use crate::loaders::HfLoader;
use crate::pipelines::image_classification::pipeline::LabelScore;

/// Available ViT model sizes.
#[derive(Debug, Clone, Copy)]
pub enum VitSize {
    /// Base model, 16x16 patches at 224x224 input (~86M parameters).
    Base,
}

impl VitSize {
    fn repo_id(&self) -> &'static str {
        match self {
            VitSize::Base => "google/vit-base-patch16-224",
        }
    }

    fn config(&self) -> Config {
        match self {
            VitSize::Base => Config::vit_base_patch16_224(),
        }
    }
}

impl std::fmt::Display for VitSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VitSize::Base => "vit-base-patch16-224",
        };
        write!(f, "{name}")
    }
}

impl crate::pipelines::cache::ModelOptions for VitSize {
    fn cache_key(&self) -> String {
        self.to_string()
    }
}

/// ViT with an ImageNet-1k classification head.
pub struct ImageNetVitModel {
    model: CandleVitModel,
    device: Device,
    image_size: usize,
    id2label: HashMap<String, String>,
}

impl ImageNetVitModel {
    pub fn new(size: VitSize, device: Device) -> Result<Self> {
        let repo_id = size.repo_id();
        let config = size.config();

        let config_path = HfLoader::new(repo_id, "config.json").load()?;
        let weights_path = HfLoader::new(repo_id, "model.safetensors")
            .load()
            .or_else(|_| HfLoader::new(repo_id, "pytorch_model.bin").load())?;

        let label_cfg: LabelConfigJson =
            serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
        if label_cfg.id2label.is_empty() {
            return Err(PipelineError::Unexpected(format!(
                "No id2label mapping in config.json of '{repo_id}'"
            )));
        }

        let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)? }
        } else {
            VarBuilder::from_pth(&weights_path, DType::F32, &device)?
        };

        let model = CandleVitModel::new(&config, label_cfg.id2label.len(), vb)?;

        Ok(Self {
            model,
            device,
            image_size: config.image_size,
            id2label: label_cfg.id2label,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl crate::pipelines::image_classification::model::ImageClassificationModel for ImageNetVitModel {
    type Options = VitSize;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        ImageNetVitModel::new(options, device)
    }

    fn image_size(&self) -> usize {
        self.image_size
    }

    fn classify(&self, pixels: &Tensor, top_k: usize) -> Result<Vec<LabelScore>> {
        if top_k == 0 {
            return Ok(vec![]);
        }

        let logits = self.model.forward(&pixels.unsqueeze(0)?)?;
        let probs = softmax(&logits, D::Minus1)?;
        let probs_vec = probs.squeeze(0)?.to_vec1::<f32>()?;

        let mut idxs: Vec<usize> = (0..probs_vec.len()).collect();
        idxs.sort_by(|&i, &j| probs_vec[j].total_cmp(&probs_vec[i]));
        idxs.truncate(top_k.min(idxs.len()));

        let mut out = Vec::with_capacity(idxs.len());
        for idx in idxs {
            let label = self.id2label.get(&idx.to_string()).ok_or_else(|| {
                PipelineError::Unexpected(format!(
                    "Predicted class ID {idx} not in id2label ({} labels)",
                    self.id2label.len()
                ))
            })?;
            out.push(LabelScore {
                label: label.clone(),
                score: probs_vec[idx],
            });
        }

        Ok(out)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

#[derive(Deserialize)]
struct LabelConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
}
