// ============================================================
// Layer 4 — DNA Batcher
// ============================================================
// Implements Burn's Batcher trait to stack DnaSamples into
// integer tensors for the training loop.
//
//   Input:  Vec of N DnaSamples
//   Output: DnaBatch
//             inputs  [N, S]   token ids
//             targets [N, 1]   class labels
//
// S is the longest sample in the batch. When the dataset pads
// to max_length every sample already has length S. When it
// does not, shorter samples are padded here with the
// tokenizer's pad id, on the tokenizer's padding side.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::DnaSample;
use crate::domain::traits::PaddingSide;

#[derive(Debug, Clone)]
pub struct DnaBatch<B: Backend> {
    /// Token ids — shape: [batch_size, seq_len]
    pub inputs: Tensor<B, 2, Int>,

    /// Labels — shape: [batch_size, 1]
    pub targets: Tensor<B, 2, Int>,
}

#[derive(Clone, Debug)]
pub struct DnaBatcher<B: Backend> {
    pub device:       B::Device,
    pub pad_id:       u32,
    pub padding_side: PaddingSide,
}

impl<B: Backend> DnaBatcher<B> {
    pub fn new(device: B::Device, pad_id: u32, padding_side: PaddingSide) -> Self {
        Self { device, pad_id, padding_side }
    }

    /// Pad `ids` to `seq_len` and append them to `out`
    fn push_padded(&self, out: &mut Vec<i32>, ids: &[u32], seq_len: usize) {
        let fill = seq_len - ids.len();
        let pad  = std::iter::repeat(self.pad_id as i32).take(fill);
        let toks = ids.iter().map(|&x| x as i32);

        match self.padding_side {
            PaddingSide::Left  => out.extend(pad.chain(toks)),
            PaddingSide::Right => out.extend(toks.chain(pad)),
        }
    }
}

impl<B: Backend> Batcher<DnaSample, DnaBatch<B>> for DnaBatcher<B> {
    fn batch(&self, items: Vec<DnaSample>) -> DnaBatch<B> {
        let batch_size = items.len();
        let seq_len    = items.iter().map(|s| s.input_ids.len()).max().unwrap_or(0);

        let mut input_flat: Vec<i32> = Vec::with_capacity(batch_size * seq_len);
        for sample in &items {
            self.push_padded(&mut input_flat, &sample.input_ids, seq_len);
        }

        let labels: Vec<i32> = items.iter().map(|s| s.label as i32).collect();

        let inputs = Tensor::<B, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let targets = Tensor::<B, 1, Int>::from_ints(
            labels.as_slice(), &self.device
        ).reshape([batch_size, 1]);

        DnaBatch { inputs, targets }
    }
}
