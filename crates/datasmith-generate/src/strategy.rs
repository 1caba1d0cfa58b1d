use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::binding::BoundTable;
use crate::errors::GenerateError;
use crate::generators::generate_value;
use crate::registry::UniquenessRegistry;
use crate::values::GeneratedValue;

/// One generated record: field name -> value, in field declaration order.
pub type Row = IndexMap<String, GeneratedValue>;

/// Seam between the pipeline and interchangeable generation backends.
///
/// Only one concrete strategy exists; unsupported tags are rejected by
/// [`strategy_for`] rather than silently downgraded.
pub trait GenerationStrategy {
    /// Tag this strategy answers to, also used in run reports.
    fn name(&self) -> &'static str;

    /// Generate `records` rows for one bound table.
    fn generate_table(
        &self,
        table: &BoundTable,
        records: u64,
        registry: &mut UniquenessRegistry,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<Row>, GenerateError>;
}

/// Resolve a strategy tag to its implementation.
pub fn strategy_for(tag: &str) -> Result<Box<dyn GenerationStrategy>, GenerateError> {
    match tag {
        "random" => Ok(Box::new(RandomStrategy)),
        other => Err(GenerateError::UnsupportedStrategy(other.to_string())),
    }
}

/// RNG for one run: seeded for reproducibility when a seed is declared.
pub fn run_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Uniform random generation over the resolved field generators.
pub struct RandomStrategy;

impl GenerationStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn generate_table(
        &self,
        table: &BoundTable,
        records: u64,
        registry: &mut UniquenessRegistry,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<Row>, GenerateError> {
        let mut rows = Vec::with_capacity(records as usize);
        for _ in 0..records {
            let mut row = Row::with_capacity(table.fields.len());
            for field in &table.fields {
                row.insert(field.name.clone(), generate_value(field, registry, rng));
            }
            rows.push(row);
        }

        info!(
            table = %table.name,
            rows = rows.len(),
            "table rows generated"
        );
        Ok(rows)
    }
}
