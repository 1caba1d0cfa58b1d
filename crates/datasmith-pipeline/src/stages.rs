use std::path::{Path, PathBuf};

use tracing::{info, warn};

use datasmith_core::{validate_definition, Definition};
use datasmith_export::{ExportManager, ExportReport};
use datasmith_generate::{
    bind_definition, run_rng, strategy_for, BoundTable, GenerationStrategy, UniquenessRegistry,
};
use datasmith_store::{Store, TableStats};
use datasmith_translate::load_definition;

use crate::errors::{PipelineError, PipelineFailure, Stage};
use crate::report::{RunOutcome, RunReport};

/// Entry point of the state machine; owns the run id and the working
/// directory layout.
pub struct Pipeline {
    run_id: String,
    work_dir: PathBuf,
    exports_dir: PathBuf,
}

impl Pipeline {
    /// Prepare the working directory for one run.
    pub fn new(work_dir: impl Into<PathBuf>) -> Result<Self, PipelineError> {
        let work_dir = work_dir.into();
        let exports_dir = work_dir.join("exports");
        std::fs::create_dir_all(&work_dir)?;
        std::fs::create_dir_all(&exports_dir)?;
        std::fs::create_dir_all(work_dir.join("definitions"))?;

        let run_id = uuid::Uuid::new_v4().to_string();
        info!(run_id = %run_id, work_dir = %work_dir.display(), "pipeline initialized");
        Ok(Self {
            run_id,
            work_dir,
            exports_dir,
        })
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Stage 1: load a Definition file; fails fast when `tables` is
    /// missing or empty.
    pub fn load_definition(self, path: &Path) -> Result<Loaded, PipelineError> {
        let definition = load_definition(path)?;
        info!(
            stage = %Stage::LoadDefinition,
            tables = definition.tables.len(),
            "definition loaded"
        );
        Ok(Loaded {
            pipeline: self,
            definition,
            definition_file: Some(path.to_path_buf()),
        })
    }

    /// Stage 1, in-memory variant for freshly translated Definitions.
    pub fn with_definition(self, definition: Definition) -> Result<Loaded, PipelineError> {
        validate_definition(&definition)?;
        info!(
            stage = %Stage::LoadDefinition,
            tables = definition.tables.len(),
            "definition accepted"
        );
        Ok(Loaded {
            pipeline: self,
            definition,
            definition_file: None,
        })
    }
}

/// Definition loaded and validated.
pub struct Loaded {
    pipeline: Pipeline,
    definition: Definition,
    definition_file: Option<PathBuf>,
}

impl Loaded {
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Stage 2: settle the destination connection string; without one, a
    /// file-based store under the working directory is derived from the
    /// definition.
    pub fn prepare_store(self, conn_str: Option<&str>) -> Result<StorePrepared, PipelineError> {
        let conn_str = match conn_str {
            Some(value) => value.to_string(),
            None => {
                let base = self
                    .definition_file
                    .as_deref()
                    .and_then(Path::file_stem)
                    .and_then(|stem| stem.to_str())
                    .map(|stem| stem.trim_end_matches("_definition").to_string())
                    .unwrap_or_else(|| file_safe(&self.definition.schema_info.name));
                Store::default_path(&self.pipeline.work_dir, &base)
                    .display()
                    .to_string()
            }
        };

        info!(stage = %Stage::PrepareStore, store = %conn_str, "store prepared");
        Ok(StorePrepared {
            pipeline: self.pipeline,
            definition: self.definition,
            definition_file: self.definition_file,
            conn_str,
        })
    }
}

/// Destination settled.
pub struct StorePrepared {
    pipeline: Pipeline,
    definition: Definition,
    definition_file: Option<PathBuf>,
    conn_str: String,
}

impl StorePrepared {
    pub fn conn_str(&self) -> &str {
        &self.conn_str
    }

    /// Stage 3: resolve the strategy tag; unsupported tags fail here
    /// rather than degrading silently.
    pub fn prepare_strategy(self, tag: Option<&str>) -> Result<StrategyReady, PipelineError> {
        let tag = tag
            .map(str::to_string)
            .unwrap_or_else(|| self.definition.settings().strategy);
        let strategy = strategy_for(&tag)?;

        info!(stage = %Stage::PrepareStrategy, strategy = %tag, "strategy ready");
        Ok(StrategyReady {
            pipeline: self.pipeline,
            definition: self.definition,
            definition_file: self.definition_file,
            conn_str: self.conn_str,
            strategy,
            strategy_tag: tag,
        })
    }
}

/// Strategy resolved.
pub struct StrategyReady {
    pipeline: Pipeline,
    definition: Definition,
    definition_file: Option<PathBuf>,
    conn_str: String,
    strategy: Box<dyn GenerationStrategy>,
    strategy_tag: String,
}

impl StrategyReady {
    pub fn strategy_tag(&self) -> &str {
        &self.strategy_tag
    }

    /// Stage 4: derive the Generator Schema, binding one generator kind
    /// per field. Built fresh per run, never persisted.
    pub fn bind_generators(self) -> SchemaBound {
        let bound = bind_definition(&self.definition);
        info!(
            stage = %Stage::BindGenerators,
            tables = bound.len(),
            "generator schema bound"
        );
        SchemaBound {
            pipeline: self.pipeline,
            definition: self.definition,
            definition_file: self.definition_file,
            conn_str: self.conn_str,
            strategy: self.strategy,
            strategy_tag: self.strategy_tag,
            bound,
        }
    }
}

/// Generator Schema derived.
pub struct SchemaBound {
    pipeline: Pipeline,
    definition: Definition,
    definition_file: Option<PathBuf>,
    conn_str: String,
    strategy: Box<dyn GenerationStrategy>,
    strategy_tag: String,
    bound: Vec<BoundTable>,
}

impl SchemaBound {
    pub fn bound_tables(&self) -> &[BoundTable] {
        &self.bound
    }

    /// Stage 5: create tables and bulk-load rows, one transaction per
    /// table, in Definition order. The uniqueness registry lives and dies
    /// with this call.
    pub fn generate(self, records: Option<u64>) -> Result<Generated, PipelineError> {
        let settings = self.definition.settings();
        let records = records.unwrap_or(settings.default_records_per_table);

        let mut store = Store::open(&self.conn_str)?;
        let mut registry = UniquenessRegistry::new();
        let mut rng = run_rng(settings.seed);

        for bound_table in &self.bound {
            let table_def = self.definition.tables.get(&bound_table.name).ok_or_else(|| {
                datasmith_core::Error::InvalidSchema(format!(
                    "table '{}' missing from definition",
                    bound_table.name
                ))
            })?;
            store.create_table(&bound_table.name, table_def)?;
            let rows = self
                .strategy
                .generate_table(bound_table, records, &mut registry, &mut rng)?;
            store.insert_rows(&bound_table.name, table_def, &rows)?;
        }

        let stats = store.table_stats()?;
        info!(
            stage = %Stage::Generate,
            tables = stats.len(),
            records_per_table = records,
            "generation completed"
        );
        Ok(Generated {
            pipeline: self.pipeline,
            definition: self.definition,
            definition_file: self.definition_file,
            conn_str: self.conn_str,
            strategy_tag: self.strategy_tag,
            store,
            stats,
            records_per_table: records,
        })
    }
}

/// Rows materialized.
pub struct Generated {
    pipeline: Pipeline,
    definition: Definition,
    definition_file: Option<PathBuf>,
    conn_str: String,
    strategy_tag: String,
    store: Store,
    stats: Vec<TableStats>,
    records_per_table: u64,
}

impl Generated {
    pub fn stats(&self) -> &[TableStats] {
        &self.stats
    }

    /// Stage 6: export every table in each requested format. Failures are
    /// isolated per table and per format inside the report.
    pub fn export(self, formats: &[String]) -> Exported {
        let manager = ExportManager::new(self.pipeline.exports_dir.clone());
        let export_report = manager.export(&self.store, formats);
        info!(
            stage = %Stage::Export,
            formats = export_report.len(),
            "export finished"
        );
        Exported {
            pipeline: self.pipeline,
            definition: self.definition,
            definition_file: self.definition_file,
            conn_str: self.conn_str,
            strategy_tag: self.strategy_tag,
            stats: self.stats,
            records_per_table: self.records_per_table,
            export_report,
        }
    }
}

/// Exports written.
pub struct Exported {
    pipeline: Pipeline,
    definition: Definition,
    definition_file: Option<PathBuf>,
    conn_str: String,
    strategy_tag: String,
    stats: Vec<TableStats>,
    records_per_table: u64,
    export_report: ExportReport,
}

impl Exported {
    pub fn export_report(&self) -> &ExportReport {
        &self.export_report
    }

    /// Stage 7: write the run report, once.
    pub fn finish(self) -> Result<RunOutcome, PipelineError> {
        let report = RunReport {
            run_id: self.pipeline.run_id.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: "success".to_string(),
            definition: self.definition.schema_info.name.clone(),
            definition_file: self
                .definition_file
                .map(|path| path.display().to_string()),
            strategy: self.strategy_tag,
            store: self.conn_str,
            work_dir: self.pipeline.work_dir.display().to_string(),
            records_per_table: Some(self.records_per_table),
            tables: self.stats,
            exports: self.export_report,
            error: None,
        };
        let report_path = report.write(&self.pipeline.work_dir)?;
        info!(stage = %Stage::Report, path = %report_path.display(), "run report written");
        Ok(RunOutcome {
            report,
            report_path,
        })
    }
}

/// Inputs for the run-everything entry point.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub definition_path: PathBuf,
    pub records: Option<u64>,
    pub strategy: Option<String>,
    pub store: Option<String>,
    pub formats: Vec<String>,
}

impl RunOptions {
    pub fn new(definition_path: impl Into<PathBuf>) -> Self {
        Self {
            definition_path: definition_path.into(),
            records: None,
            strategy: None,
            store: None,
            formats: vec!["csv".to_string()],
        }
    }
}

/// Run every stage in order, short-circuiting on the first failure.
///
/// Returns a structured failure naming the stage instead of propagating
/// the raw error; a failure report is still written to the working
/// directory.
pub fn run(work_dir: impl Into<PathBuf>, options: &RunOptions) -> Result<RunOutcome, PipelineFailure> {
    let work_dir = work_dir.into();
    let pipeline = match Pipeline::new(&work_dir) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            return Err(PipelineFailure::new(Stage::LoadDefinition, &err));
        }
    };

    let mut failure_report = RunReport {
        run_id: pipeline.run_id.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        status: "error".to_string(),
        definition: options
            .definition_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("unknown")
            .to_string(),
        definition_file: Some(options.definition_path.display().to_string()),
        strategy: options.strategy.clone().unwrap_or_default(),
        store: options.store.clone().unwrap_or_default(),
        work_dir: work_dir.display().to_string(),
        records_per_table: options.records,
        tables: Vec::new(),
        exports: ExportReport::new(),
        error: None,
    };

    let loaded = match pipeline.load_definition(&options.definition_path) {
        Ok(loaded) => loaded,
        Err(err) => return Err(fail(failure_report, &work_dir, Stage::LoadDefinition, &err)),
    };
    failure_report.definition = loaded.definition().schema_info.name.clone();

    let prepared = match loaded.prepare_store(options.store.as_deref()) {
        Ok(prepared) => prepared,
        Err(err) => return Err(fail(failure_report, &work_dir, Stage::PrepareStore, &err)),
    };
    failure_report.store = prepared.conn_str().to_string();

    let ready = match prepared.prepare_strategy(options.strategy.as_deref()) {
        Ok(ready) => ready,
        Err(err) => return Err(fail(failure_report, &work_dir, Stage::PrepareStrategy, &err)),
    };
    failure_report.strategy = ready.strategy_tag().to_string();

    let generated = match ready.bind_generators().generate(options.records) {
        Ok(generated) => generated,
        Err(err) => return Err(fail(failure_report, &work_dir, Stage::Generate, &err)),
    };

    let exported = generated.export(&options.formats);
    match exported.finish() {
        Ok(outcome) => Ok(outcome),
        Err(err) => Err(fail(failure_report, &work_dir, Stage::Report, &err)),
    }
}

fn fail(
    mut report: RunReport,
    work_dir: &Path,
    stage: Stage,
    err: &PipelineError,
) -> PipelineFailure {
    let failure = PipelineFailure::new(stage, err);
    warn!(stage = %stage, error = %err, "pipeline stage failed");
    report.error = Some(failure.clone());
    if let Err(write_err) = report.write(work_dir) {
        warn!(error = %write_err, "failed to write failure report");
    }
    failure
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
