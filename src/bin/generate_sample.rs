use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // One row per (hex cell, variable): access scores for Yamhill county.
    let variables: [(&str, f64, f64); 4] = [
        ("childcare", 18.0, 6.0),
        ("grocery", 9.0, 3.0),
        ("pharmacy", 12.0, 4.0),
        ("transit", 25.0, 8.0),
    ];
    let n_cells = 50;

    let mut all_h3: Vec<String> = Vec::new();
    let mut all_var: Vec<String> = Vec::new();
    let mut all_value: Vec<f64> = Vec::new();

    for cell in 0..n_cells {
        // Synthetic res-9 style cell ids, unique per row group
        let h3 = format!("8928d5{:06x}fff", 0x4d4000 + cell * 7);

        for &(var, mean, std_dev) in &variables {
            all_h3.push(h3.clone());
            all_var.push(var.to_string());
            all_value.push(rng.gauss(mean, std_dev).max(0.0));
        }
    }

    // Build Arrow arrays
    let h3_array = StringArray::from(all_h3.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let var_array = StringArray::from(all_var.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let value_array = Float64Array::from(all_value);

    let schema = Arc::new(Schema::new(vec![
        Field::new("h3", DataType::Utf8, false),
        Field::new("var", DataType::Utf8, false),
        Field::new("value", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(h3_array),
            Arc::new(var_array),
            Arc::new(value_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let output_path = "yamhill.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} rows ({} cells x {} variables) to {output_path}",
        n_cells * variables.len(),
        n_cells,
        variables.len()
    );
}
