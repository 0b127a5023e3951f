//! Run as `cargo run --example encode <model> <sequence>...` with `<model>` being a directory
//! which contains `assets/model.json` and `assets/vocab.txt`.
//!
//! Set `RUST_LOG=debug` to see the configuration of the encoder.

use bert_encoder::{Builder, Tokenize};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let model = args.next().expect("missing model directory");
    let sequences = args.collect::<Vec<_>>();

    let encoder = Builder::from_dir(model).unwrap().build().unwrap();
    for tokens in encoder.tokenizer().tokenize_batch(&sequences) {
        println!("{:?}", tokens);
    }

    let inputs = encoder.encode(&sequences).unwrap();
    println!("input ids:\n{}", *inputs.input_ids);
    println!("input mask:\n{}", *inputs.input_mask);
    println!("segment ids:\n{}", *inputs.segment_ids);
}
