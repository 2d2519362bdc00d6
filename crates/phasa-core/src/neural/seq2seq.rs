//! Attention encoder–decoder on candle.
//!
//! Encoder: character embedding and a bidirectional LSTM (hidden `H` per
//! direction). Decoder: LSTM over `[embedding; previous context]` with hidden
//! `2H`, Luong "general" attention over the encoder outputs, and a linear
//! projection of `[hidden; context]` to target logits. Parameter names follow
//! the PyTorch layout (`weight_ih_l0`, `weight_ih_l0_reverse`, ...).

use std::path::Path;

use candle_core::{DType, Device, Module, Tensor};
use candle_nn::rnn::{Direction, LSTMConfig, LSTMState, LSTM, RNN};
use candle_nn::{Embedding, Linear, VarBuilder};
use tracing::trace;

use super::{ModelConfig, NeuralError, SequenceModel, END, START};

pub struct Seq2SeqModel {
    enc_embedding: Embedding,
    enc_forward: LSTM,
    enc_backward: LSTM,
    dec_embedding: Embedding,
    decoder: LSTM,
    attention: Linear,
    output: Linear,
    context_dim: usize,
    device: Device,
}

impl Seq2SeqModel {
    pub fn new(
        config: &ModelConfig,
        src_vocab: usize,
        tgt_vocab: usize,
        vb: VarBuilder,
    ) -> candle_core::Result<Self> {
        let emb = config.embedding_dim;
        let hidden = config.hidden_dim;
        let context_dim = 2 * hidden;
        let enc = vb.pp("encoder");
        let dec = vb.pp("decoder");

        let enc_embedding = candle_nn::embedding(src_vocab, emb, enc.pp("embedding"))?;
        let enc_forward = candle_nn::lstm(emb, hidden, LSTMConfig::default(), enc.pp("lstm"))?;
        let enc_backward = candle_nn::lstm(
            emb,
            hidden,
            LSTMConfig {
                direction: Direction::Backward,
                ..Default::default()
            },
            enc.pp("lstm"),
        )?;

        let dec_embedding = candle_nn::embedding(tgt_vocab, emb, dec.pp("embedding"))?;
        let decoder = candle_nn::lstm(
            emb + context_dim,
            context_dim,
            LSTMConfig::default(),
            dec.pp("lstm"),
        )?;
        let attention = candle_nn::linear_no_bias(context_dim, context_dim, dec.pp("attention"))?;
        let output = candle_nn::linear(2 * context_dim, tgt_vocab, dec.pp("output"))?;

        Ok(Self {
            enc_embedding,
            enc_forward,
            enc_backward,
            dec_embedding,
            decoder,
            attention,
            output,
            context_dim,
            device: vb.device().clone(),
        })
    }

    /// Load weights from a safetensors file onto the CPU.
    pub fn load(
        weights: &Path,
        config: &ModelConfig,
        src_vocab: usize,
        tgt_vocab: usize,
    ) -> anyhow::Result<Self> {
        let device = Device::Cpu;
        // SAFETY: the file is mapped read-only and not modified while loaded.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, &device) }
            .map_err(|e| anyhow::anyhow!("failed to map {}: {e}", weights.display()))?;
        Self::new(config, src_vocab, tgt_vocab, vb)
            .map_err(|e| anyhow::anyhow!("failed to build model: {e}"))
    }

    fn embed(&self, embedding: &Embedding, ids: &[u32]) -> candle_core::Result<Tensor> {
        let ids = Tensor::new(ids, &self.device)?.unsqueeze(0)?;
        embedding.forward(&ids)
    }

    /// Encoder outputs `(T, 2H)` and the decoder's initial state.
    fn encode(&self, input: &[u32]) -> candle_core::Result<(Tensor, LSTMState)> {
        let len = input.len();
        let forward = self
            .enc_forward
            .seq(&self.embed(&self.enc_embedding, input)?)?;
        // the backward direction reads the reversed sequence
        let reversed: Vec<u32> = input.iter().rev().copied().collect();
        let backward = self
            .enc_backward
            .seq(&self.embed(&self.enc_embedding, &reversed)?)?;

        let mut steps = Vec::with_capacity(len);
        for i in 0..len {
            steps.push(Tensor::cat(&[forward[i].h(), backward[len - 1 - i].h()], 1)?);
        }
        let outputs = Tensor::cat(&steps, 0)?;

        let (last_f, last_b) = (&forward[len - 1], &backward[len - 1]);
        let state = LSTMState {
            h: Tensor::cat(&[last_f.h(), last_b.h()], 1)?,
            c: Tensor::cat(&[last_f.c(), last_b.c()], 1)?,
        };
        Ok((outputs, state))
    }

    /// One decoder step: logits `(V,)`, new state, new context `(1, 2H)`.
    fn step(
        &self,
        token: u32,
        state: &LSTMState,
        context: &Tensor,
        enc_outputs: &Tensor,
    ) -> candle_core::Result<(Tensor, LSTMState, Tensor)> {
        let emb = self
            .dec_embedding
            .forward(&Tensor::new(&[token], &self.device)?)?;
        let input = Tensor::cat(&[&emb, context], 1)?;
        let state = self.decoder.step(&input, state)?;
        let hidden = state.h();

        let scores = self
            .attention
            .forward(hidden)?
            .matmul(&enc_outputs.t()?.contiguous()?)?;
        let weights = candle_nn::ops::softmax_last_dim(&scores)?;
        let context = weights.matmul(enc_outputs)?;

        let logits = self
            .output
            .forward(&Tensor::cat(&[hidden, &context], 1)?)?
            .squeeze(0)?;
        Ok((logits, state, context))
    }

    fn greedy(&self, input: &[u32], max_length: usize) -> anyhow::Result<Vec<u32>> {
        if input.is_empty() || max_length == 0 {
            return Ok(Vec::new());
        }
        let (enc_outputs, mut state) = self
            .encode(input)
            .map_err(|e| anyhow::anyhow!("encode failed: {e}"))?;
        let mut context = Tensor::zeros((1, self.context_dim), DType::F32, &self.device)
            .map_err(|e| anyhow::anyhow!("tensor init failed: {e}"))?;

        let mut token = START;
        let mut output = Vec::new();
        while output.len() < max_length {
            let (logits, next_state, next_context) = self
                .step(token, &state, &context, &enc_outputs)
                .map_err(|e| anyhow::anyhow!("decode step {} failed: {e}", output.len()))?;
            let next = argmax(&logits)?;
            if next == END {
                break;
            }
            output.push(next);
            token = next;
            state = next_state;
            context = next_context;
        }
        trace!(input = input.len(), output = output.len(), "greedy decode");
        Ok(output)
    }
}

impl SequenceModel for Seq2SeqModel {
    fn decode(&self, input: &[u32], max_length: usize) -> Result<Vec<u32>, NeuralError> {
        self.greedy(input, max_length)
            .map_err(|e| NeuralError::Model(format!("{e:#}")))
    }
}

/// Return the index of the maximum value in a 1-D logits tensor.
fn argmax(logits: &Tensor) -> anyhow::Result<u32> {
    let logits_vec: Vec<f32> = logits
        .to_vec1()
        .map_err(|e| anyhow::anyhow!("argmax to_vec1 failed: {e}"))?;
    let (max_idx, _) = logits_vec
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .ok_or_else(|| anyhow::anyhow!("empty logits tensor"))?;
    Ok(max_idx as u32)
}
